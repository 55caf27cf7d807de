//! Estimates how a CPU/GPU/RAM combination performs in games, and derives
//! ratings, advice and chart data from the estimate.

pub mod common;
pub mod config;
pub mod error;
pub mod jitter;
pub mod modules;
pub mod schemas;
pub mod state;

pub use chrono;

pub use crate::{
    config::Settings,
    error::{AnalysisError, CatalogError},
    modules::{
        catalog::Catalog, games::GameTable, rating::rate, recommend::Recommendations,
        report::Report,
    },
    schemas::analysis::{AnalysisResult, Selection},
    state::{AnalysisRecord, AnalyzerState},
};
