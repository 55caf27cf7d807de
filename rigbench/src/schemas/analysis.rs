use anyhow::bail;
use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{fmt::Display, str::FromStr};

use crate::{
    error::AnalysisError,
    schemas::computing::{ComponentKind, Cpu, Gpu, Listing, Ram},
};

/// Assumed RAM price when no kit is selected.
pub const DEFAULT_RAM_PRICE: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum Resolution {
    /// 1080p
    Fhd,
    /// 1440p
    Qhd,
    /// 4k
    Uhd,
    FhdUltrawide,
    QhdUltrawide,
}

impl Resolution {
    pub const ALL: [Resolution; 5] = [
        Self::Fhd,
        Self::Qhd,
        Self::Uhd,
        Self::FhdUltrawide,
        Self::QhdUltrawide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fhd => "1080p",
            Self::Qhd => "1440p",
            Self::Uhd => "4k",
            Self::FhdUltrawide => "1080p-ultrawide",
            Self::QhdUltrawide => "1440p-ultrawide",
        }
    }

    /// How much of the 1080p frame rate survives at this resolution.
    pub fn fps_multiplier(self) -> f64 {
        match self {
            Self::Fhd => 1.0,
            Self::Qhd => 0.7,
            Self::Uhd => 0.4,
            Self::FhdUltrawide => 0.85,
            Self::QhdUltrawide => 0.6,
        }
    }

    /// Share of a component's capacity the resolution keeps busy.
    pub fn load(self) -> f64 {
        match self {
            Self::Fhd => 0.6,
            Self::Qhd => 0.75,
            Self::Uhd => 0.95,
            Self::FhdUltrawide => 0.7,
            Self::QhdUltrawide => 0.85,
        }
    }
}

impl FromStr for Resolution {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match Self::ALL.iter().find(|r| r.as_str() == lower) {
            Some(r) => Ok(*r),
            None => bail!(
                "no such resolution {:?}; expected one of 1080p, 1440p, 4k, 1080p-ultrawide, 1440p-ultrawide",
                s
            ),
        }
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum Quality {
    Low,
    Medium,
    High,
    Ultra,
    /// Ultra with ray tracing on.
    UltraRt,
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Ultra,
        Self::UltraRt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Ultra => "ultra",
            Self::UltraRt => "ultra-rt",
        }
    }

    pub fn fps_multiplier(self) -> f64 {
        match self {
            Self::Low => 1.4,
            Self::Medium => 1.2,
            Self::High => 1.0,
            Self::Ultra => 0.85,
            Self::UltraRt => 0.65,
        }
    }
}

impl FromStr for Quality {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match Self::ALL.iter().find(|q| q.as_str() == lower) {
            Some(q) => Ok(*q),
            None => bail!(
                "no such quality {:?}; expected one of low, medium, high, ultra, ultra-rt",
                s
            ),
        }
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The components a user has picked so far, plus the display settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub cpu: Option<Cpu>,
    pub gpu: Option<Gpu>,
    pub ram: Option<Ram>,
    pub resolution: Resolution,
    pub quality: Quality,
    pub game: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            cpu: None,
            gpu: None,
            ram: None,
            resolution: Resolution::Qhd,
            quality: Quality::High,
            game: "overall".to_string(),
        }
    }
}

impl Selection {
    /// Freeze the selection into a [`Build`].
    ///
    /// # Errors
    /// [`AnalysisError::MissingSelection`] when the CPU or the GPU hasn't been chosen.
    pub fn build(&self) -> Result<Build, AnalysisError> {
        match (&self.cpu, &self.gpu) {
            (Some(cpu), Some(gpu)) => Ok(Build {
                cpu: cpu.clone(),
                gpu: gpu.clone(),
                ram: self.ram.clone(),
            }),
            (cpu, gpu) => {
                let mut missing = Vec::new();
                if cpu.is_none() {
                    missing.push(ComponentKind::Cpu);
                }
                if gpu.is_none() {
                    missing.push(ComponentKind::Gpu);
                }
                Err(AnalysisError::MissingSelection { missing })
            }
        }
    }
}

/// A complete set of components to analyze. RAM stays optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Build {
    pub cpu: Cpu,
    pub gpu: Gpu,
    pub ram: Option<Ram>,
}

impl Build {
    /// CPU + GPU + RAM, with [`DEFAULT_RAM_PRICE`] standing in for missing RAM.
    pub fn total_price(&self) -> f64 {
        self.cpu.price()
            + self.gpu.price()
            + self.ram.as_ref().map_or(DEFAULT_RAM_PRICE, Listing::price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bottleneck {
    Balanced,
    /// The CPU limits the frame rate (GPU is the busier part).
    CpuBottleneck,
    /// The GPU limits the frame rate (CPU is the busier part).
    GpuBottleneck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub cpu: i32,
    pub gpu: i32,
    pub ram: i32,
    pub overall: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FpsByResolution {
    #[serde(rename = "1080p")]
    pub fhd: u32,
    #[serde(rename = "1440p")]
    pub qhd: u32,
    #[serde(rename = "4k")]
    pub uhd: u32,
    /// At the selected resolution.
    pub current: u32,
}

/// Percentages, always within `[25, 98]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Utilization {
    pub cpu: u32,
    pub gpu: u32,
}

/// Degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Temperatures {
    pub cpu: u32,
    pub gpu: u32,
}

/// Milliseconds, one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameTimes {
    pub average: f64,
    pub one_percent_low: f64,
}

/// Everything one analysis run derives from a [`Build`]. Values are already
/// rounded to their display precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub scores: Scores,
    pub fps: FpsByResolution,
    pub utilization: Utilization,
    pub system_balance: u32,
    /// Watts
    pub power_consumption: u32,
    pub temperatures: Temperatures,
    pub frame_times: FrameTimes,
    /// 1440p FPS per currency unit, three decimals.
    pub perf_per_dollar: f64,
    pub bottleneck: Bottleneck,
    pub resolution: Resolution,
    pub quality: Quality,
    pub game: String,
    pub build: Build,
}
