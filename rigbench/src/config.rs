//! User settings, read from a TOML file. Every section and key is optional.
//!
//! ```toml
//! [analysis]
//! resolution = "1440p"
//! quality = "high"
//! game = "overall"
//!
//! [catalog]
//! path = "my-catalog.json"
//! search_limit = 10
//!
//! [logging]
//! filter = "warn"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{
    modules::{
        catalog::{Catalog, DEFAULT_SEARCH_LIMIT},
        games::DEFAULT_GAME,
    },
    schemas::analysis::{Quality, Resolution, Selection},
};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub analysis: AnalysisSettings,
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSettings {
    pub resolution: Resolution,
    pub quality: Quality,
    pub game: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            resolution: Resolution::Qhd,
            quality: Quality::High,
            game: DEFAULT_GAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    /// A catalog JSON file to use instead of the built-in one.
    pub path: Option<PathBuf>,
    pub search_limit: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: None,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// `tracing-subscriber` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid settings")
    }

    /// Read settings from `path`, or fall back to the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read settings file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in settings file {}", path.display()))
    }

    /// An empty selection carrying the configured display settings and game.
    pub fn selection(&self) -> Selection {
        Selection {
            resolution: self.analysis.resolution,
            quality: self.analysis.quality,
            game: self.analysis.game.clone(),
            ..Selection::default()
        }
    }

    /// The configured catalog file, or a copy of the built-in catalog.
    pub fn catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("could not load catalog {}", path.display())),
            None => Ok(Catalog::builtin().clone()),
        }
    }
}
