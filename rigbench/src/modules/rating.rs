use crate::schemas::common::{MetricKind, Rating};

/// Classify a metric value into its qualitative band.
///
/// Every input lands in exactly one band; a value sitting on a boundary gets
/// the better of the two. NaN never satisfies a threshold, so it falls through
/// to the worst band of its kind.
pub fn rate(value: f64, kind: MetricKind) -> Rating {
    use Rating::*;

    match kind {
        /* higher is better */
        MetricKind::Fps => descending(
            value,
            &[(120.0, Excellent), (80.0, Good), (60.0, Average)],
            Poor,
        ),
        MetricKind::Balance => descending(
            value,
            &[(85.0, Excellent), (70.0, Good), (50.0, Average)],
            Poor,
        ),
        MetricKind::Value => descending(
            value,
            &[(0.15, Excellent), (0.10, Good), (0.06, Average)],
            Poor,
        ),
        /* lower is better */
        MetricKind::FrameTime => ascending(
            value,
            &[(8.0, Excellent), (12.0, Good), (16.0, Average)],
            Poor,
        ),
        MetricKind::Utilization => ascending(value, &[(75.0, Good), (85.0, Average)], High),
        MetricKind::Power => ascending(value, &[(300.0, Efficient), (450.0, Average)], High),
        MetricKind::Temperature => ascending(
            value,
            &[(65.0, Cool), (75.0, Warm), (85.0, Hot)],
            Critical,
        ),
    }
}

fn descending(value: f64, bands: &[(f64, Rating)], otherwise: Rating) -> Rating {
    bands
        .iter()
        .find(|(floor, _)| value >= *floor)
        .map_or(otherwise, |(_, rating)| *rating)
}

fn ascending(value: f64, bands: &[(f64, Rating)], otherwise: Rating) -> Rating {
    bands
        .iter()
        .find(|(ceiling, _)| value <= *ceiling)
        .map_or(otherwise, |(_, rating)| *rating)
}
