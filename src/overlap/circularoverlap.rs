use crate::circular::circularsample::CircularSample;
use crate::circular::circularunit::{
    CircularTemplate,
    CircularUnit
};
use crate::density::circulardensityestimator::{
    CircularDensityEstimator,
    DEFAULT_RESOLUTION
};
use crate::density::vonmiseskerneldensity::VonMisesKernelDensity;
use crate::math::quadrature::{
    Quadrature,
    Trapezoid
};
use crate::overlap::overlaperror::{
    OverlapError,
    SampleRole
};
use crate::overlap::overlaptriple::OverlapTriple;

// ─────────────────────────────────────────────────────────────────────────────
// 連續資料的重疊係數
// ─────────────────────────────────────────────────────────────────────────────
//
// 流程：
//   1. 移除缺值，任一組為空 → EmptyInput
//   2. 轉為 CircularSample
//   3. 各自估計密度（每組用自己的樣本）
//   4. 對齊到同一網格
//   5. normalize = false 時乘上樣本數，近似原始計數曲線
//   6. 逐點取最小值並以梯形法積分
//   7. 計算三個係數

/// von Mises KDE + 梯形法
///
/// `bandwidth` 為 von Mises 集中度 κ；`resolution` 預設 512。
pub fn circular_overlap(
    a: &[f64],
    b: &[f64],
    unit: CircularUnit,
    template: CircularTemplate,
    normalize: bool,
    bandwidth: f64,
    resolution: Option<usize>,
) -> Result<OverlapTriple, OverlapError> {
    let estimator = VonMisesKernelDensity::new(bandwidth)?;
    circular_overlap_with(
        a,
        b,
        unit,
        template,
        normalize,
        resolution.unwrap_or(DEFAULT_RESOLUTION),
        &estimator,
        &Trapezoid,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn circular_overlap_with(
    a: &[f64],
    b: &[f64],
    unit: CircularUnit,
    template: CircularTemplate,
    normalize: bool,
    resolution: usize,
    estimator: &dyn CircularDensityEstimator,
    quadrature: &dyn Quadrature,
) -> Result<OverlapTriple, OverlapError> {
    let sample_a = build_sample(a, unit, template, SampleRole::A)?;
    let sample_b = build_sample(b, unit, template, SampleRole::B)?;

    let density_a = estimator.estimate(&sample_a, resolution)?;
    let density_b = estimator
        .estimate(&sample_b, resolution)?
        .aligned_to(&density_a)
        .ok_or(OverlapError::GridMismatch)?;

    let (curve_a, curve_b) = if normalize {
        (density_a, density_b)
    } else {
        (
            density_a.scaled(sample_a.len() as f64),
            density_b.scaled(sample_b.len() as f64),
        )
    };

    OverlapTriple::from_curves(&curve_a, &curve_b, quadrature)
}

fn build_sample(
    values: &[f64],
    unit: CircularUnit,
    template: CircularTemplate,
    role: SampleRole,
) -> Result<CircularSample, OverlapError> {
    let sample = CircularSample::new(values, unit, template)
        .ok_or(OverlapError::EmptyInput(role))?;

    let dropped = values.len() - sample.len();
    if dropped > 0 {
        tracing::debug!(sample = %role, dropped, "removed missing values");
    }
    Ok(sample)
}
