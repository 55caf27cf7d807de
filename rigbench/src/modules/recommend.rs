use serde::Serialize;

use crate::{
    modules::estimator::BOTTLENECK_GAP,
    schemas::{analysis::AnalysisResult, computing::Tier},
};

/// Advice shown next to an analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub bottleneck: String,
    pub upgrade: String,
    pub optimization: String,
    pub alternative: String,
}

impl Recommendations {
    pub fn for_result(result: &AnalysisResult) -> Self {
        Self {
            bottleneck: bottleneck_advice(result),
            upgrade: upgrade_advice(result),
            optimization: optimization_advice(result),
            alternative: alternative_advice(result),
        }
    }
}

pub fn bottleneck_advice(result: &AnalysisResult) -> String {
    let cpu = i64::from(result.utilization.cpu);
    let gpu = i64::from(result.utilization.gpu);

    if (cpu - gpu).abs() < BOTTLENECK_GAP {
        "Well-balanced system! CPU and GPU utilization are closely matched, indicating optimal performance without significant bottlenecks.".to_string()
    } else if cpu > gpu + BOTTLENECK_GAP {
        format!(
            "GPU bottleneck detected. Your GPU is limiting performance at {}% while CPU runs at {}%. Consider upgrading your graphics card.",
            gpu, cpu
        )
    } else {
        format!(
            "CPU bottleneck detected. Your CPU is limiting performance at {}% while GPU runs at {}%. Consider upgrading your processor.",
            cpu, gpu
        )
    }
}

pub fn upgrade_advice(result: &AnalysisResult) -> String {
    let fps = result.fps.current;

    if fps >= 120 {
        "Excellent performance! This build delivers smooth gaming at high frame rates. No immediate upgrades needed.".to_string()
    } else if fps >= 80 {
        "Good performance! For higher frame rates, consider upgrading to a higher-tier GPU or enabling DLSS/FSR if available.".to_string()
    } else if fps >= 60 {
        let weaker = if result.build.cpu.tier == Tier::Budget {
            "CPU"
        } else {
            "GPU"
        };
        format!(
            "Average performance. Consider upgrading your {} for better frame rates, or reduce graphics settings.",
            weaker
        )
    } else {
        "Below optimal performance. Both CPU and GPU upgrades recommended, or significantly reduce graphics settings for playable frame rates.".to_string()
    }
}

pub fn optimization_advice(result: &AnalysisResult) -> String {
    let mut tips = Vec::new();

    if result.temperatures.cpu > 80 {
        tips.push("CPU temperatures are high - improve case ventilation or upgrade CPU cooler");
    }
    if result.temperatures.gpu > 85 {
        tips.push("GPU temperatures are high - check case airflow and clean GPU fans");
    }
    if result.power_consumption > 500 {
        tips.push("High power consumption - consider undervolting components for efficiency");
    }
    if result.utilization.gpu < 95 && result.fps.current < 100 {
        tips.push("Enable GPU-focused settings like higher resolution or quality");
    }
    if result.build.ram.as_ref().map_or(true, |ram| ram.speed < 3200) {
        tips.push("Faster RAM can improve CPU performance, especially with AMD processors");
    }

    if tips.is_empty() {
        "System is well-optimized! Monitor temperatures and consider overclocking for extra performance.".to_string()
    } else {
        format!("{}.", tips.join(". "))
    }
}

/// Keyed on current FPS per dollar of CPU + GPU.
pub fn alternative_advice(result: &AnalysisResult) -> String {
    let cost = result.build.cpu.price + result.build.gpu.price;
    let fps_per_dollar = f64::from(result.fps.current) / cost;

    if fps_per_dollar > 0.12 {
        "Excellent value build! This combination offers great performance per dollar. Similar alternatives would offer minimal improvement.".to_string()
    } else if fps_per_dollar > 0.08 {
        "Good value. Consider AMD RX 7800 XT + Ryzen 7 7800X3D for similar performance, or RTX 4070 + i5-14600K for budget alternative.".to_string()
    } else {
        "Premium build with room for value optimization. Consider RTX 4070 Ti + Ryzen 7 7700X for 90% performance at lower cost.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        alternative_advice, bottleneck_advice, optimization_advice, upgrade_advice,
        Recommendations,
    };
    use crate::{
        jitter::ConstantJitter,
        modules::{
            catalog::Catalog,
            estimator::{estimate, Scenario},
            games::GameTable,
        },
        schemas::{
            analysis::{AnalysisResult, Build, Quality, Resolution},
            computing::Tier,
        },
    };

    fn result_for(cpu: &str, gpu: &str, ram: Option<&str>) -> AnalysisResult {
        let catalog = Catalog::builtin();
        let build = Build {
            cpu: catalog.cpu(cpu).unwrap().clone(),
            gpu: catalog.gpu(gpu).unwrap().clone(),
            ram: ram.map(|name| catalog.ram(name).unwrap().clone()),
        };
        let scenario = Scenario {
            resolution: Resolution::Qhd,
            quality: Quality::High,
            game: "overall",
            profile: GameTable::builtin().get("overall").unwrap(),
        };
        estimate(&build, &scenario, &mut ConstantJitter(0.0))
    }

    fn sample() -> AnalysisResult {
        result_for(
            "AMD Ryzen 7 7800X3D",
            "NVIDIA RTX 4080",
            Some("G.Skill Trident Z5 32GB DDR5-6000"),
        )
    }

    #[test]
    fn test_bottleneck_text() {
        let mut result = sample();

        result.utilization.cpu = 60;
        result.utilization.gpu = 70;
        assert!(bottleneck_advice(&result).starts_with("Well-balanced system!"));

        result.utilization.cpu = 90;
        result.utilization.gpu = 40;
        assert_eq!(
            bottleneck_advice(&result),
            "GPU bottleneck detected. Your GPU is limiting performance at 40% while CPU runs at 90%. Consider upgrading your graphics card."
        );

        result.utilization.cpu = 30;
        result.utilization.gpu = 95;
        assert!(bottleneck_advice(&result)
            .starts_with("CPU bottleneck detected. Your CPU is limiting performance at 30%"));
    }

    #[test]
    fn test_upgrade_text() {
        let mut result = sample();

        result.fps.current = 120;
        assert!(upgrade_advice(&result).starts_with("Excellent performance!"));
        result.fps.current = 80;
        assert!(upgrade_advice(&result).starts_with("Good performance!"));
        result.fps.current = 59;
        assert!(upgrade_advice(&result).starts_with("Below optimal performance."));

        result.fps.current = 65;
        assert!(upgrade_advice(&result).contains("upgrading your GPU"));
        result.build.cpu.tier = Tier::Budget;
        assert!(upgrade_advice(&result).contains("upgrading your CPU"));
    }

    #[test]
    fn test_optimization_checklist() {
        let mut result = sample();
        result.temperatures.cpu = 70;
        result.temperatures.gpu = 70;
        result.power_consumption = 400;
        result.utilization.gpu = 97;
        assert!(optimization_advice(&result).starts_with("System is well-optimized!"));

        result.temperatures.cpu = 81;
        result.power_consumption = 501;
        result.build.ram = None;
        assert_eq!(
            optimization_advice(&result),
            "CPU temperatures are high - improve case ventilation or upgrade CPU cooler. \
             High power consumption - consider undervolting components for efficiency. \
             Faster RAM can improve CPU performance, especially with AMD processors."
        );
    }

    #[test]
    fn test_alternative_bands() {
        let mut result = sample();
        let cost = result.build.cpu.price + result.build.gpu.price;

        result.fps.current = (cost * 0.13) as u32;
        assert!(alternative_advice(&result).starts_with("Excellent value build!"));
        result.fps.current = (cost * 0.10) as u32;
        assert!(alternative_advice(&result).starts_with("Good value."));
        result.fps.current = (cost * 0.05) as u32;
        assert!(alternative_advice(&result).starts_with("Premium build"));
    }

    #[test]
    fn test_bundle() {
        let result = result_for("Intel Core i5-14400F", "NVIDIA RTX 4060", None);
        let recs = Recommendations::for_result(&result);
        assert_eq!(recs.upgrade, upgrade_advice(&result));
        /* no RAM selected always asks for faster RAM */
        assert!(recs.optimization.contains("Faster RAM"));
    }
}
