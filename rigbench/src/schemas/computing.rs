use serde::{Deserialize, Serialize};
use serde_with::{serde_as, PickFirst};
use std::{convert::TryFrom, fmt::Display};

use crate::{common::Dollars, error::CatalogError};

/// Coarse price/performance bucket used for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Budget,
    Mainstream,
    HighEnd,
    Flagship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Cpu,
    Gpu,
    Ram,
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Cpu => "CPU",
                Self::Gpu => "GPU",
                Self::Ram => "RAM",
            }
        )
    }
}

/// What every catalog record can tell about itself.
pub trait Listing {
    const KIND: ComponentKind;

    fn name(&self) -> &str;

    fn price(&self) -> f64;

    /// One-line spec summary, e.g. `8C/16T • 5GHz • 120W`.
    fn spec_summary(&self) -> String;

    /// Check the record's internal constraints, returning the first violation.
    fn check(&self) -> Result<(), String>;
}

fn check_common(name: &str, price: f64) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name is empty".into());
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(format!("price must be positive, got {}", price));
    }
    Ok(())
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cpu {
    pub name: String,
    #[serde_as(as = "PickFirst<(_, Dollars)>")]
    pub price: f64,
    pub cores: u32,
    pub threads: u32,
    /// GHz
    pub base_clock: f64,
    /// GHz
    pub boost_clock: f64,
    /// Watts
    pub tdp: u32,
    pub tier: Tier,
}

impl Listing for Cpu {
    const KIND: ComponentKind = ComponentKind::Cpu;

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn spec_summary(&self) -> String {
        format!(
            "{}C/{}T • {}GHz • {}W",
            self.cores, self.threads, self.boost_clock, self.tdp
        )
    }

    fn check(&self) -> Result<(), String> {
        check_common(&self.name, self.price)?;
        if self.cores == 0 {
            return Err("needs at least one core".into());
        }
        if self.threads < self.cores {
            return Err(format!(
                "{} threads is fewer than {} cores",
                self.threads, self.cores
            ));
        }
        if !(self.base_clock > 0.0) || !self.boost_clock.is_finite() {
            return Err("clocks must be positive".into());
        }
        if self.boost_clock < self.base_clock {
            return Err(format!(
                "boost clock {}GHz is below base clock {}GHz",
                self.boost_clock, self.base_clock
            ));
        }
        if self.tdp == 0 {
            return Err("tdp must be positive".into());
        }
        Ok(())
    }
}

/// Shader core count. NVIDIA and AMD name (and count) them differently,
/// and a card only ever reports one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeUnits {
    CudaCores(u32),
    StreamProcessors(u32),
}

impl ComputeUnits {
    pub fn count(self) -> u32 {
        match self {
            Self::CudaCores(n) | Self::StreamProcessors(n) => n,
        }
    }
}

/// A GPU as a catalog stores it. Converted into [`Gpu`], which is where the
/// exactly-one-compute-unit-field rule is enforced.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuRecord {
    pub name: String,
    #[serde_as(as = "PickFirst<(_, Dollars)>")]
    pub price: f64,
    pub vram: u32,
    pub memory_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuda_cores: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_processors: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rt_cores: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ray_accelerators: Option<u32>,
    pub base_clock: u32,
    pub boost_clock: u32,
    pub tdp: u32,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GpuRecord", into = "GpuRecord")]
pub struct Gpu {
    pub name: String,
    pub price: f64,
    /// GB
    pub vram: u32,
    pub memory_type: String,
    pub compute_units: ComputeUnits,
    /// RT cores or ray accelerators, when known.
    pub ray_tracing_units: Option<u32>,
    /// MHz
    pub base_clock: u32,
    /// MHz
    pub boost_clock: u32,
    /// Watts
    pub tdp: u32,
    pub tier: Tier,
}

impl TryFrom<GpuRecord> for Gpu {
    type Error = CatalogError;

    fn try_from(record: GpuRecord) -> Result<Self, Self::Error> {
        let compute_units = match (record.cuda_cores, record.stream_processors) {
            (Some(cores), None) => ComputeUnits::CudaCores(cores),
            (None, Some(sps)) => ComputeUnits::StreamProcessors(sps),
            (cuda, sps) => {
                return Err(CatalogError::Invalid {
                    kind: ComponentKind::Gpu,
                    name: record.name,
                    reason: format!(
                        "needs exactly one of cudaCores/streamProcessors, got {}",
                        if cuda.is_some() && sps.is_some() {
                            "both"
                        } else {
                            "neither"
                        }
                    ),
                })
            }
        };

        Ok(Self {
            name: record.name,
            price: record.price,
            vram: record.vram,
            memory_type: record.memory_type,
            compute_units,
            ray_tracing_units: record.rt_cores.or(record.ray_accelerators),
            base_clock: record.base_clock,
            boost_clock: record.boost_clock,
            tdp: record.tdp,
            tier: record.tier,
        })
    }
}

impl From<Gpu> for GpuRecord {
    fn from(gpu: Gpu) -> Self {
        let (cuda_cores, stream_processors, rt_cores, ray_accelerators) = match gpu.compute_units
        {
            ComputeUnits::CudaCores(n) => (Some(n), None, gpu.ray_tracing_units, None),
            ComputeUnits::StreamProcessors(n) => (None, Some(n), None, gpu.ray_tracing_units),
        };

        Self {
            name: gpu.name,
            price: gpu.price,
            vram: gpu.vram,
            memory_type: gpu.memory_type,
            cuda_cores,
            stream_processors,
            rt_cores,
            ray_accelerators,
            base_clock: gpu.base_clock,
            boost_clock: gpu.boost_clock,
            tdp: gpu.tdp,
            tier: gpu.tier,
        }
    }
}

impl Listing for Gpu {
    const KIND: ComponentKind = ComponentKind::Gpu;

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn spec_summary(&self) -> String {
        format!("{}GB {} • {}W", self.vram, self.memory_type, self.tdp)
    }

    fn check(&self) -> Result<(), String> {
        check_common(&self.name, self.price)?;
        if self.vram == 0 {
            return Err("vram must be positive".into());
        }
        if self.compute_units.count() == 0 {
            return Err("compute unit count must be positive".into());
        }
        if self.base_clock == 0 || self.boost_clock < self.base_clock {
            return Err(format!(
                "boost clock {}MHz must be at least base clock {}MHz (> 0)",
                self.boost_clock, self.base_clock
            ));
        }
        if self.tdp == 0 {
            return Err("tdp must be positive".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RamType {
    #[serde(rename = "DDR4")]
    Ddr4,
    #[serde(rename = "DDR5")]
    Ddr5,
}

impl Display for RamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Ddr4 => "DDR4",
                Self::Ddr5 => "DDR5",
            }
        )
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ram {
    pub name: String,
    #[serde_as(as = "PickFirst<(_, Dollars)>")]
    pub price: f64,
    /// GB
    pub capacity: u32,
    #[serde(rename = "type")]
    pub kind: RamType,
    /// MT/s
    pub speed: u32,
    /// CAS latency in cycles
    pub cas: u32,
    pub voltage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
}

impl Listing for Ram {
    const KIND: ComponentKind = ComponentKind::Ram;

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn spec_summary(&self) -> String {
        format!(
            "{}GB • {}-{} • CL{}",
            self.capacity, self.kind, self.speed, self.cas
        )
    }

    fn check(&self) -> Result<(), String> {
        check_common(&self.name, self.price)?;
        if self.capacity == 0 || self.speed == 0 || self.cas == 0 {
            return Err("capacity, speed and cas must all be positive".into());
        }
        if !(self.voltage > 0.0) {
            return Err(format!("voltage must be positive, got {}", self.voltage));
        }
        Ok(())
    }
}
