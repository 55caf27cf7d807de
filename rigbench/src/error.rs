use std::path::PathBuf;

use thiserror::Error;

use crate::schemas::computing::ComponentKind;

fn list_kinds(kinds: &[ComponentKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reasons an analysis request is turned down before any computation happens.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("please select both a CPU and a GPU to run analysis (missing {})", list_kinds(.missing))]
    MissingSelection { missing: Vec<ComponentKind> },

    #[error("unknown game profile {0:?}")]
    UnknownGame(String),
}

/// Problems with catalog data or catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid {kind} record {name:?}: {reason}")]
    Invalid {
        kind: ComponentKind,
        name: String,
        reason: String,
    },

    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read catalog file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no {kind} named {query:?} in the catalog")]
    ComponentNotFound { kind: ComponentKind, query: String },

    #[error("{query:?} matches several {kind}s: {}", .candidates.join(", "))]
    AmbiguousComponent {
        kind: ComponentKind,
        query: String,
        candidates: Vec<String>,
    },
}
