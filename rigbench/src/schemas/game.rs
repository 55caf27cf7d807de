use serde::Serialize;

/// Descriptive load tag for a game profile. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Low,
    Medium,
    High,
    VeryHigh,
    CpuIntensive,
}

/// How much a game leans on the CPU vs. the GPU.
///
/// The weights are independent, each in `[0, 1]`, and need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProfile {
    pub name: &'static str,
    pub cpu_weight: f64,
    pub gpu_weight: f64,
    /// Ray-tracing load. Carried for display, not used by the estimator.
    pub rt_weight: f64,
    pub difficulty: Difficulty,
}
