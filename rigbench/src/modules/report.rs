//! Presentation data sets derived from a finished analysis: the dashboard
//! cards, the per-resolution metrics table, and the series behind each chart.
//! Nothing here is random; the same result always gives the same report.

use serde::Serialize;

use crate::{
    common::{round_to, whole},
    modules::{estimator::SYSTEM_POWER_WATTS, rating::rate},
    schemas::{
        analysis::AnalysisResult,
        common::{MetricKind, Rating},
    },
};

/// Share of the average frame rate the slowest 1% of frames reach.
const ONE_PERCENT_LOW_SHARE: f64 = 0.8;

/// Titles projected from the current frame rate, with their scale factor.
const TITLE_SCALING: [(&str, f64); 8] = [
    ("Cyberpunk 2077", 0.7),
    ("Red Dead 2", 0.8),
    ("Valorant", 2.1),
    ("CS2", 2.5),
    ("Warzone", 0.9),
    ("Apex Legends", 1.1),
    ("Fortnite", 1.3),
    ("Witcher 3", 1.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rated<T> {
    pub value: T,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub average_fps: Rated<u32>,
    pub average_frame_time: Rated<f64>,
    pub system_balance: Rated<u32>,
    pub perf_per_dollar: Rated<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionRow {
    pub resolution: &'static str,
    pub fps: u32,
    pub one_percent_low_fps: u32,
    /// Milliseconds, one decimal.
    pub frame_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRatings {
    pub fps: Rating,
    pub one_percent_low_fps: Rating,
    pub frame_time: Rating,
    pub cpu_utilization: Rating,
    pub gpu_utilization: Rating,
    pub power: Rating,
    /// Of the hotter of the two parts.
    pub temperature: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsTable {
    pub rows: Vec<ResolutionRow>,
    pub ratings: TableRatings,
    pub overall_score: String,
}

/// Watts per consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerBreakdown {
    pub cpu: u32,
    pub gpu: u32,
    pub system: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleProjection {
    pub title: &'static str,
    pub fps: u32,
}

/// A warm-up curve over half an hour of play, sampled every five minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureTimeline {
    pub minutes: Vec<u32>,
    pub cpu: Vec<i64>,
    pub gpu: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostPoint {
    /// CPU + GPU price.
    pub cost: f64,
    pub fps: u32,
    /// FPS per dollar, three decimals.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub dashboard: Dashboard,
    pub metrics: MetricsTable,
    pub power: PowerBreakdown,
    pub titles: Vec<TitleProjection>,
    pub temperature_timeline: TemperatureTimeline,
    pub cost: CostPoint,
}

fn rated<T: Copy + Into<f64>>(value: T, kind: MetricKind) -> Rated<T> {
    Rated {
        value,
        rating: rate(value.into(), kind),
    }
}

pub fn dashboard(result: &AnalysisResult) -> Dashboard {
    Dashboard {
        average_fps: rated(result.fps.current, MetricKind::Fps),
        average_frame_time: rated(result.frame_times.average, MetricKind::FrameTime),
        system_balance: rated(result.system_balance, MetricKind::Balance),
        perf_per_dollar: rated(result.perf_per_dollar, MetricKind::Value),
    }
}

fn row(resolution: &'static str, fps: u32) -> ResolutionRow {
    let fps_f = f64::from(fps);
    ResolutionRow {
        resolution,
        fps,
        one_percent_low_fps: whole(fps_f * ONE_PERCENT_LOW_SHARE),
        frame_time: round_to(1000.0 / fps_f, 1),
    }
}

pub fn metrics_table(result: &AnalysisResult) -> MetricsTable {
    let current = f64::from(result.fps.current);
    let hottest = result.temperatures.cpu.max(result.temperatures.gpu);

    MetricsTable {
        rows: vec![
            row("1080p", result.fps.fhd),
            row("1440p", result.fps.qhd),
            row("4k", result.fps.uhd),
        ],
        ratings: TableRatings {
            fps: rate(current, MetricKind::Fps),
            one_percent_low_fps: rate(current * ONE_PERCENT_LOW_SHARE, MetricKind::Fps),
            frame_time: rate(result.frame_times.average, MetricKind::FrameTime),
            cpu_utilization: rate(f64::from(result.utilization.cpu), MetricKind::Utilization),
            gpu_utilization: rate(f64::from(result.utilization.gpu), MetricKind::Utilization),
            power: rate(f64::from(result.power_consumption), MetricKind::Power),
            temperature: rate(f64::from(hottest), MetricKind::Temperature),
        },
        overall_score: format!("{}/100", result.scores.overall),
    }
}

pub fn power_breakdown(result: &AnalysisResult) -> PowerBreakdown {
    let build = &result.build;
    PowerBreakdown {
        cpu: whole(f64::from(build.cpu.tdp) * f64::from(result.utilization.cpu) / 100.0 * 0.8),
        gpu: whole(f64::from(build.gpu.tdp) * f64::from(result.utilization.gpu) / 100.0 * 0.9),
        system: SYSTEM_POWER_WATTS as u32,
    }
}

pub fn title_projections(result: &AnalysisResult) -> Vec<TitleProjection> {
    let current = f64::from(result.fps.current);
    TITLE_SCALING
        .iter()
        .map(|(title, scale)| TitleProjection {
            title,
            fps: whole(current * scale),
        })
        .collect()
}

pub fn temperature_timeline(result: &AnalysisResult) -> TemperatureTimeline {
    let cpu = i64::from(result.temperatures.cpu);
    let gpu = i64::from(result.temperatures.gpu);

    TemperatureTimeline {
        minutes: (0..=30).step_by(5).collect(),
        cpu: vec![35, 45, cpu - 5, cpu, cpu + 2, cpu, cpu - 1],
        gpu: vec![40, 50, gpu - 8, gpu - 3, gpu, gpu + 1, gpu],
    }
}

pub fn cost_point(result: &AnalysisResult) -> CostPoint {
    let cost = result.build.cpu.price + result.build.gpu.price;
    CostPoint {
        cost,
        fps: result.fps.current,
        value: round_to(f64::from(result.fps.current) / cost, 3),
    }
}

impl Report {
    pub fn for_result(result: &AnalysisResult) -> Self {
        Self {
            dashboard: dashboard(result),
            metrics: metrics_table(result),
            power: power_breakdown(result),
            titles: title_projections(result),
            temperature_timeline: temperature_timeline(result),
            cost: cost_point(result),
        }
    }
}
