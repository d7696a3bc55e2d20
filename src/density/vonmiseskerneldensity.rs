use std::f64::consts::TAU;

use nalgebra::DVector;

use crate::circular::circularsample::CircularSample;
use crate::density::circulardensityestimator::CircularDensityEstimator;
use crate::math::bessel::bessel_i0_scaled;
use crate::math::curve::nonparametriccurve::sampledcurve::SampledCurve;
use crate::overlap::overlaperror::OverlapError;

// ─────────────────────────────────────────────────────────────────────────────
// VonMisesKernelDensity
// ─────────────────────────────────────────────────────────────────────────────
//
// 以 von Mises kernel 做圓形 KDE，bandwidth 即集中度 κ：
//
//   f(z) = (1/n) Σ exp(κ·cos(z - θ_i)) / (2π·I0(κ))
//        = (1/n) Σ exp(κ·(cos(z - θ_i) - 1)) / (2π·e^{-κ}·I0(κ))
//
// 第二式避免大 κ 時 exp 溢位。κ 越大曲線越尖銳。
// 網格為 [0, 2π] 上等距 resolution 個點（含兩端）。

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VonMisesKernelDensity {
    bandwidth: f64,
}

impl VonMisesKernelDensity {
    pub fn new(bandwidth: f64) -> Result<VonMisesKernelDensity, OverlapError> {
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(OverlapError::InvalidBandwidth(bandwidth));
        }
        Ok(VonMisesKernelDensity { bandwidth })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn grid(resolution: usize) -> DVector<f64> {
        let step = TAU / (resolution - 1) as f64;
        DVector::from_fn(resolution, |i, _| i as f64 * step)
    }

    fn kernel_value(&self, z: f64, theta: f64, norm: f64) -> f64 {
        (self.bandwidth * ((z - theta).cos() - 1.0)).exp() / norm
    }
}

impl CircularDensityEstimator for VonMisesKernelDensity {
    fn estimate(
        &self,
        sample: &CircularSample,
        resolution: usize,
    ) -> Result<SampledCurve, OverlapError> {
        if resolution < 2 {
            return Err(OverlapError::InvalidResolution(resolution));
        }

        let n = sample.len() as f64;
        let norm = TAU * bessel_i0_scaled(self.bandwidth);
        let x_data = Self::grid(resolution);
        let y_data = x_data.map(|z| {
            sample
                .angles()
                .iter()
                .map(|&theta| self.kernel_value(z, theta, norm))
                .sum::<f64>()
                / n
        });

        tracing::trace!(
            bandwidth = self.bandwidth,
            resolution,
            observations = sample.len(),
            "von Mises density estimated"
        );

        SampledCurve::new(x_data, y_data).ok_or(OverlapError::GridMismatch)
    }
}
