use crate::circular::circularsample::CircularSample;
use crate::math::curve::nonparametriccurve::sampledcurve::SampledCurve;
use crate::overlap::overlaperror::OverlapError;

pub const DEFAULT_RESOLUTION: usize = 512;

/// 圓形資料的密度估計
///
/// 回傳的曲線網格涵蓋整個圓周（內部弧度 [0, 2π]）。
/// 同一個 estimator 以相同 resolution 呼叫時，網格必須一致。
pub trait CircularDensityEstimator {
    fn estimate(
        &self,
        sample: &CircularSample,
        resolution: usize,
    ) -> Result<SampledCurve, OverlapError>;
}
