use serde::Serialize;

use crate::math::curve::nonparametriccurve::sampledcurve::SampledCurve;
use crate::math::quadrature::Quadrature;
use crate::overlap::overlaperror::OverlapError;

/// 重疊係數
///
/// - `overlap`：2·∫min(a,b) / (∫a + ∫b)
/// - `overlap_a`：∫min(a,b) / ∫a
/// - `overlap_b`：∫min(a,b) / ∫b
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlapTriple {
    overlap: f64,
    overlap_a: f64,
    overlap_b: f64,
}

impl OverlapTriple {
    pub fn from_integrals(
        integral_a: f64,
        integral_b: f64,
        intersection: f64,
    ) -> Result<OverlapTriple, OverlapError> {
        let well_formed = |v: f64| v.is_finite() && v > 0.0;
        if !well_formed(integral_a) || !well_formed(integral_b) {
            return Err(OverlapError::DegenerateIntegral { integral_a, integral_b });
        }

        Ok(OverlapTriple {
            overlap: 2.0 * intersection / (integral_a + integral_b),
            overlap_a: intersection / integral_a,
            overlap_b: intersection / integral_b,
        })
    }

    /// 兩條曲線需共用網格
    pub fn from_curves(
        curve_a: &SampledCurve,
        curve_b: &SampledCurve,
        quadrature: &dyn Quadrature,
    ) -> Result<OverlapTriple, OverlapError> {
        let curve_w = curve_a
            .pointwise_min(curve_b)
            .ok_or(OverlapError::GridMismatch)?;

        let integral_a = curve_a.integral_with(quadrature);
        let integral_b = curve_b.integral_with(quadrature);
        let intersection = curve_w.integral_with(quadrature);

        tracing::debug!(integral_a, integral_b, intersection, "overlap integrals");

        Self::from_integrals(integral_a, integral_b, intersection)
    }

    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    pub fn overlap_a(&self) -> f64 {
        self.overlap_a
    }

    pub fn overlap_b(&self) -> f64 {
        self.overlap_b
    }
}
