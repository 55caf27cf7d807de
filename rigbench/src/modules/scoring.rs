//! Per-component performance indices.
//!
//! Each score is a weighted blend of specs normalized against fixed reference
//! hardware (24 cores / 6.0 GHz, an RTX 4090's 16384 shaders, DDR5-6400), so a
//! part stronger than the reference scores above 100 and a hot one can dip
//! below 0. The result is an illustrative index, not a bounded percentage.

use crate::schemas::{
    analysis::Build,
    computing::{Cpu, Gpu, Ram},
};

/// Score used in place of a RAM kit that hasn't been selected.
pub const MISSING_RAM_SCORE: f64 = 75.0;

pub fn cpu_score(cpu: &Cpu) -> f64 {
    let cores = f64::from(cpu.cores) / 24.0 * 100.0;
    let clock = cpu.boost_clock / 6.0 * 100.0;
    let efficiency = (200.0 - f64::from(cpu.tdp)) / 200.0 * 100.0;

    cores * 0.4 + clock * 0.3 + efficiency * 0.3
}

pub fn gpu_score(gpu: &Gpu) -> f64 {
    let cores = f64::from(gpu.compute_units.count()) / 16384.0 * 100.0;
    let clock = f64::from(gpu.boost_clock) / 2700.0 * 100.0;
    let vram = f64::from(gpu.vram) / 24.0 * 100.0;
    let efficiency = (500.0 - f64::from(gpu.tdp)) / 500.0 * 100.0;

    cores * 0.3 + clock * 0.2 + vram * 0.3 + efficiency * 0.2
}

pub fn ram_score(ram: Option<&Ram>) -> f64 {
    let ram = match ram {
        Some(ram) => ram,
        None => return MISSING_RAM_SCORE,
    };

    /* capacity past 32GB doesn't help games */
    let capacity = (f64::from(ram.capacity) / 32.0).min(1.0) * 100.0;
    let speed = f64::from(ram.speed) / 6400.0 * 100.0;
    let latency = (50.0 - f64::from(ram.cas)) / 50.0 * 100.0;

    capacity * 0.4 + speed * 0.4 + latency * 0.2
}

/// Unrounded scores for all three parts of a build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub cpu: f64,
    pub gpu: f64,
    pub ram: f64,
}

impl ComponentScores {
    pub fn of(build: &Build) -> Self {
        Self {
            cpu: cpu_score(&build.cpu),
            gpu: gpu_score(&build.gpu),
            ram: ram_score(build.ram.as_ref()),
        }
    }

    pub fn overall(&self) -> f64 {
        (self.cpu + self.gpu + self.ram) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::{cpu_score, gpu_score, ram_score, MISSING_RAM_SCORE};
    use crate::{
        common::roughly_equal,
        modules::catalog::Catalog,
        schemas::computing::{ComputeUnits, Cpu, Gpu, Ram, RamType, Tier},
    };

    fn ryzen_7800x3d() -> Cpu {
        Cpu {
            name: "AMD Ryzen 7 7800X3D".into(),
            price: 420.0,
            cores: 8,
            threads: 16,
            base_clock: 4.2,
            boost_clock: 5.0,
            tdp: 120,
            tier: Tier::HighEnd,
        }
    }

    #[test]
    fn test_cpu_score_value() {
        /* 13.333 (cores) + 25 (clock) + 12 (efficiency) */
        assert!(roughly_equal(cpu_score(&ryzen_7800x3d()), 50.0 + 1.0 / 3.0));
    }

    #[test]
    fn test_gpu_score_value() {
        let gpu = Gpu {
            name: "AMD RX 7900 XTX".into(),
            price: 1000.0,
            vram: 16,
            memory_type: "GDDR6".into(),
            compute_units: ComputeUnits::StreamProcessors(6144),
            ray_tracing_units: None,
            base_clock: 1855,
            boost_clock: 2500,
            tdp: 250,
            tier: Tier::Flagship,
        };
        let expected = 11.25 + 2500.0 / 2700.0 * 20.0 + 20.0 + 10.0;
        assert!(roughly_equal(gpu_score(&gpu), expected));
    }

    #[test]
    fn test_ram_score() {
        assert_eq!(ram_score(None), MISSING_RAM_SCORE);

        let ram = Ram {
            name: "G.Skill Trident Z5 16GB DDR5-6400".into(),
            price: 180.0,
            capacity: 16,
            kind: RamType::Ddr5,
            speed: 6400,
            cas: 32,
            voltage: 1.4,
            tier: None,
        };
        /* 20 (half of 32GB) + 40 (reference speed) + 7.2 (latency) */
        assert!(roughly_equal(ram_score(Some(&ram)), 67.2));

        let big = Ram {
            capacity: 128,
            ..ram.clone()
        };
        assert!(roughly_equal(ram_score(Some(&big)), 87.2));
    }

    #[test]
    fn test_cpu_score_monotonic_over_catalog() {
        for cpu in &Catalog::builtin().cpus {
            let base = cpu_score(cpu);

            let more_cores = Cpu {
                cores: cpu.cores + 1,
                ..cpu.clone()
            };
            assert!(cpu_score(&more_cores) > base, "{}", cpu.name);

            let faster = Cpu {
                boost_clock: cpu.boost_clock + 0.1,
                ..cpu.clone()
            };
            assert!(cpu_score(&faster) > base, "{}", cpu.name);
        }
    }

    #[test]
    fn test_scores_can_leave_0_to_100() {
        let hot = Cpu {
            cores: 1,
            boost_clock: 1.0,
            tdp: 400,
            ..ryzen_7800x3d()
        };
        assert!(cpu_score(&hot) < 0.0);

        let monster = Cpu {
            cores: 64,
            boost_clock: 6.5,
            tdp: 10,
            ..ryzen_7800x3d()
        };
        assert!(cpu_score(&monster) > 100.0);
    }
}
