use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    error::AnalysisError,
    jitter::RandomSource,
    modules::{
        estimator::{estimate, Scenario},
        games::GameTable,
        recommend::Recommendations,
        report::Report,
    },
    schemas::{
        analysis::{AnalysisResult, Quality, Resolution, Selection},
        computing::{Cpu, Gpu, Ram},
    },
};

/// One finished analysis with everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub result: AnalysisResult,
    pub recommendations: Recommendations,
    pub report: Report,
    pub completed_at: DateTime<Utc>,
}

/// Holds what the user has picked and the outcome of the latest run.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerState {
    selection: Selection,
    last: Option<AnalysisRecord>,
}

impl AnalyzerState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            last: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The most recent successful analysis, if any.
    pub fn last(&self) -> Option<&AnalysisRecord> {
        self.last.as_ref()
    }

    pub fn select_cpu(&mut self, cpu: Cpu) {
        self.selection.cpu = Some(cpu);
    }

    pub fn select_gpu(&mut self, gpu: Gpu) {
        self.selection.gpu = Some(gpu);
    }

    /// `None` clears the RAM choice; analysis then uses the default RAM score.
    pub fn select_ram(&mut self, ram: Option<Ram>) {
        self.selection.ram = ram;
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.selection.resolution = resolution;
    }

    pub fn set_quality(&mut self, quality: Quality) {
        self.selection.quality = quality;
    }

    pub fn set_game<S: Into<String>>(&mut self, game: S) {
        self.selection.game = game.into();
    }

    /// Analyze the current selection and keep the result, replacing the
    /// previous one. On error the previous result is left untouched.
    ///
    /// # Errors
    /// [`AnalysisError::MissingSelection`] without a CPU or GPU, and
    /// [`AnalysisError::UnknownGame`] when the game key isn't in `games`.
    pub fn run_analysis<R: RandomSource + ?Sized>(
        &mut self,
        games: &GameTable,
        rng: &mut R,
    ) -> Result<&AnalysisRecord, AnalysisError> {
        let build = self.selection.build()?;
        let profile = games.get(&self.selection.game)?;
        let scenario = Scenario {
            resolution: self.selection.resolution,
            quality: self.selection.quality,
            game: &self.selection.game,
            profile,
        };

        let result = estimate(&build, &scenario, rng);
        let record = AnalysisRecord {
            recommendations: Recommendations::for_result(&result),
            report: Report::for_result(&result),
            result,
            completed_at: Utc::now(),
        };

        Ok(self.last.insert(record))
    }
}
