use anyhow::bail;
use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{fmt::Display, str::FromStr};

/// Qualitative band for a metric. Which bands a metric can land in depends on
/// its [`MetricKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rating {
    Excellent,
    Good,
    Average,
    Poor,
    High,
    Efficient,
    Cool,
    Warm,
    Hot,
    Critical,
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum MetricKind {
    Fps,
    FrameTime,
    Utilization,
    Power,
    Temperature,
    Balance,
    Value,
}

impl MetricKind {
    pub const ALL: [MetricKind; 7] = [
        Self::Fps,
        Self::FrameTime,
        Self::Utilization,
        Self::Power,
        Self::Temperature,
        Self::Balance,
        Self::Value,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fps => "fps",
            Self::FrameTime => "frametime",
            Self::Utilization => "utilization",
            Self::Power => "power",
            Self::Temperature => "temperature",
            Self::Balance => "balance",
            Self::Value => "value",
        }
    }
}

impl FromStr for MetricKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match Self::ALL.iter().find(|kind| kind.as_str() == lower) {
            Some(kind) => Ok(*kind),
            None => bail!(
                "no such metric {:?}; expected one of fps, frametime, utilization, power, temperature, balance, value",
                s
            ),
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
