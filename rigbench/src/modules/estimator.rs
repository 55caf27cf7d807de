//! Turns a [`Build`] plus display settings into an [`AnalysisResult`].
//!
//! Everything here is a plain function of its inputs except utilization and
//! temperature, which get a small random jitter drawn from the supplied
//! [`RandomSource`].

use crate::{
    common::{round_half_up, round_to, whole},
    jitter::RandomSource,
    modules::scoring::ComponentScores,
    schemas::{
        analysis::{
            AnalysisResult, Bottleneck, Build, FpsByResolution, FrameTimes, Quality, Resolution,
            Scores, Temperatures, Utilization,
        },
        game::GameProfile,
    },
};

/// Frame rates never drop below this.
pub const MIN_FPS: f64 = 15.0;
/// Scales the weighted score blend into a frame rate.
pub const FPS_SCALE: f64 = 1.8;
/// RAM's share of the frame-rate blend, independent of the game profile.
pub const RAM_FPS_WEIGHT: f64 = 0.1;
/// Motherboard, drives, fans.
pub const SYSTEM_POWER_WATTS: f64 = 80.0;
/// Utilization gap (percentage points) at which one part is called the bottleneck.
pub const BOTTLENECK_GAP: i64 = 15;

const UTILIZATION_FLOOR: f64 = 25.0;
const UTILIZATION_CEILING: f64 = 98.0;
const UTILIZATION_JITTER: f64 = 10.0;
const TEMPERATURE_JITTER: f64 = 5.0;

/// Display settings and game the estimate is made for.
#[derive(Debug, Clone, Copy)]
pub struct Scenario<'a> {
    pub resolution: Resolution,
    pub quality: Quality,
    /// Key of `profile` in the game table, echoed into the result.
    pub game: &'a str,
    pub profile: &'a GameProfile,
}

pub fn frame_rate(
    scores: &ComponentScores,
    profile: &GameProfile,
    resolution: Resolution,
    quality: Quality,
) -> f64 {
    let blend = scores.cpu * profile.cpu_weight
        + scores.gpu * profile.gpu_weight
        + scores.ram * RAM_FPS_WEIGHT;
    let fps = blend * resolution.fps_multiplier() * quality.fps_multiplier() * FPS_SCALE;

    fps.max(MIN_FPS)
}

/// Busy percentage of one component, rounded, within `[25, 98]`.
pub fn utilization<R: RandomSource + ?Sized>(
    score: f64,
    weight: f64,
    resolution: Resolution,
    rng: &mut R,
) -> u32 {
    let base = score / 100.0 * weight * resolution.load() * 100.0;
    let jitter = rng.next_uniform(-UTILIZATION_JITTER, UTILIZATION_JITTER);
    let clamped = (base + jitter).max(UTILIZATION_FLOOR).min(UTILIZATION_CEILING);

    round_half_up(clamped) as u32
}

fn utilization_gap(utilization: Utilization) -> i64 {
    i64::from(utilization.cpu) - i64::from(utilization.gpu)
}

/// 100 when CPU and GPU are equally busy, losing 1.5 points per point of gap.
pub fn system_balance(utilization: Utilization) -> u32 {
    let gap = utilization_gap(utilization).abs() as f64;
    whole((100.0 - gap * 1.5).max(0.0))
}

pub fn bottleneck(utilization: Utilization) -> Bottleneck {
    let gap = utilization_gap(utilization);
    if gap.abs() < BOTTLENECK_GAP {
        Bottleneck::Balanced
    } else if gap > BOTTLENECK_GAP {
        /* the CPU is waiting on the GPU */
        Bottleneck::GpuBottleneck
    } else if -gap > BOTTLENECK_GAP {
        Bottleneck::CpuBottleneck
    } else {
        /* exactly on the threshold */
        Bottleneck::Balanced
    }
}

/// Whole-system draw in watts.
pub fn power_consumption(build: &Build, utilization: Utilization) -> u32 {
    let cpu = f64::from(build.cpu.tdp) * f64::from(utilization.cpu) / 100.0 * 0.8;
    let gpu = f64::from(build.gpu.tdp) * f64::from(utilization.gpu) / 100.0 * 0.9;

    whole(cpu + gpu + SYSTEM_POWER_WATTS)
}

pub fn temperatures<R: RandomSource + ?Sized>(
    build: &Build,
    utilization: Utilization,
    rng: &mut R,
) -> Temperatures {
    let cpu_idle = 35.0 + f64::from(build.cpu.tdp) / 200.0 * 30.0;
    let gpu_idle = 40.0 + f64::from(build.gpu.tdp) / 450.0 * 35.0;

    let cpu = cpu_idle
        + f64::from(utilization.cpu) / 100.0 * 25.0
        + rng.next_uniform(-TEMPERATURE_JITTER, TEMPERATURE_JITTER);
    let gpu = gpu_idle
        + f64::from(utilization.gpu) / 100.0 * 30.0
        + rng.next_uniform(-TEMPERATURE_JITTER, TEMPERATURE_JITTER);

    Temperatures {
        cpu: whole(cpu),
        gpu: whole(gpu),
    }
}

/// Run the whole estimate.
///
/// Frame rates and scores are fully determined by the inputs. Utilization and
/// temperature draw from `rng` (±10 points and ±5 °C respectively), and the
/// values derived from utilization (balance, power, bottleneck) follow them.
pub fn estimate<R: RandomSource + ?Sized>(
    build: &Build,
    scenario: &Scenario<'_>,
    rng: &mut R,
) -> AnalysisResult {
    let scores = ComponentScores::of(build);
    let profile = scenario.profile;
    tracing::debug!(
        cpu = scores.cpu,
        gpu = scores.gpu,
        ram = scores.ram,
        game = scenario.game,
        "component scores"
    );

    let fps_at = |resolution| whole(frame_rate(&scores, profile, resolution, scenario.quality));
    let fps = FpsByResolution {
        fhd: fps_at(Resolution::Fhd),
        qhd: fps_at(Resolution::Qhd),
        uhd: fps_at(Resolution::Uhd),
        current: fps_at(scenario.resolution),
    };

    let utilization = Utilization {
        cpu: utilization(scores.cpu, profile.cpu_weight, scenario.resolution, rng),
        gpu: utilization(scores.gpu, profile.gpu_weight, scenario.resolution, rng),
    };

    /* frame times come from the unrounded rate, the value score from the reported one */
    let raw_qhd = frame_rate(&scores, profile, Resolution::Qhd, scenario.quality);
    let frame_times = FrameTimes {
        average: round_to(1000.0 / raw_qhd, 1),
        one_percent_low: round_to(1000.0 / (raw_qhd * 0.8), 1),
    };
    let qhd = f64::from(fps.qhd);

    let result = AnalysisResult {
        scores: Scores {
            cpu: round_half_up(scores.cpu) as i32,
            gpu: round_half_up(scores.gpu) as i32,
            ram: round_half_up(scores.ram) as i32,
            overall: round_half_up(scores.overall()) as i32,
        },
        fps,
        utilization,
        system_balance: system_balance(utilization),
        power_consumption: power_consumption(build, utilization),
        temperatures: temperatures(build, utilization, rng),
        frame_times,
        perf_per_dollar: round_to(qhd / build.total_price(), 3),
        bottleneck: bottleneck(utilization),
        resolution: scenario.resolution,
        quality: scenario.quality,
        game: scenario.game.to_string(),
        build: build.clone(),
    };

    tracing::info!(
        fps = result.fps.current,
        bottleneck = ?result.bottleneck,
        balance = result.system_balance,
        "analysis complete"
    );
    result
}
