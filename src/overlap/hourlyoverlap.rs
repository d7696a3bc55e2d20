use nalgebra::DVector;

use crate::math::curve::nonparametriccurve::sampledcurve::SampledCurve;
use crate::math::quadrature::{
    Quadrature,
    Trapezoid
};
use crate::overlap::overlaperror::{
    OverlapError,
    SampleRole
};
use crate::overlap::overlaptriple::OverlapTriple;

pub const HOURS_PER_DAY: usize = 24;

// ─────────────────────────────────────────────────────────────────────────────
// HourlyHistogram
// ─────────────────────────────────────────────────────────────────────────────

/// 0..=23 各小時的觀測次數；缺值與範圍外的標籤不計入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyHistogram {
    counts: [u64; HOURS_PER_DAY],
    excluded: usize,
}

impl HourlyHistogram {
    pub fn tabulate(labels: &[Option<i32>]) -> HourlyHistogram {
        let mut counts = [0_u64; HOURS_PER_DAY];
        let mut excluded = 0;

        for label in labels {
            match label.and_then(|h| usize::try_from(h).ok()) {
                Some(hour) if hour < HOURS_PER_DAY => counts[hour] += 1,
                _ => excluded += 1,
            }
        }

        HourlyHistogram { counts, excluded }
    }

    pub fn counts(&self) -> &[u64; HOURS_PER_DAY] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// normalize 時為相對頻率（總和為 1），否則為原始次數；總數為 0 時回傳 `None`
    pub fn to_curve(&self, normalize: bool) -> Option<SampledCurve> {
        let total = self.total();
        if total == 0 {
            return None;
        }

        let divisor = if normalize { total as f64 } else { 1.0 };
        let x_data = DVector::from_fn(HOURS_PER_DAY, |i, _| i as f64);
        let y_data = DVector::from_fn(HOURS_PER_DAY, |i, _| self.counts[i] as f64 / divisor);
        SampledCurve::new(x_data, y_data)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 24 小時直方圖的重疊係數
// ─────────────────────────────────────────────────────────────────────────────

/// 不需要 bandwidth；曲線在 x = 0..23 上以梯形法積分
pub fn circular_overlap_24hour(
    a: &[Option<i32>],
    b: &[Option<i32>],
    normalize: bool,
) -> Result<OverlapTriple, OverlapError> {
    circular_overlap_24hour_with(a, b, normalize, &Trapezoid)
}

pub fn circular_overlap_24hour_with(
    a: &[Option<i32>],
    b: &[Option<i32>],
    normalize: bool,
    quadrature: &dyn Quadrature,
) -> Result<OverlapTriple, OverlapError> {
    let curve_a = hourly_curve(a, normalize, SampleRole::A)?;
    let curve_b = hourly_curve(b, normalize, SampleRole::B)?;
    OverlapTriple::from_curves(&curve_a, &curve_b, quadrature)
}

fn hourly_curve(
    labels: &[Option<i32>],
    normalize: bool,
    role: SampleRole,
) -> Result<SampledCurve, OverlapError> {
    let histogram = HourlyHistogram::tabulate(labels);
    if histogram.excluded() > 0 {
        tracing::debug!(
            sample = %role,
            excluded = histogram.excluded(),
            "hour labels missing or outside 0..=23"
        );
    }
    histogram
        .to_curve(normalize)
        .ok_or(OverlapError::EmptyInput(role))
}
