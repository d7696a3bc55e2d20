use nalgebra::DVector;

use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};
use crate::math::quadrature::{
    Quadrature,
    Trapezoid
};

// ─────────────────────────────────────────────────────────────────────────────
// SampledCurve
// ─────────────────────────────────────────────────────────────────────────────
//
// 在固定網格上取樣的曲線 (x_i, y_i)，節點之間以線性插值，網格之外取端點值。
// 密度估計與小時直方圖都以此型別表示。

#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    x_data: DVector<f64>,
    y_data: DVector<f64>,
}

impl SampledCurve {
    /// x 需嚴格遞增且與 y 等長，至少一個點
    pub fn new(x_data: DVector<f64>, y_data: DVector<f64>) -> Option<SampledCurve> {
        if x_data.is_empty() || x_data.len() != y_data.len() {
            return None;
        }
        if x_data.as_slice().windows(2).any(|w| !(w[0] < w[1])) {
            return None;
        }
        Some(SampledCurve { x_data, y_data })
    }

    pub fn from_points(points: &[Point2D]) -> Option<SampledCurve> {
        Self::new(
            DVector::from_iterator(points.len(), points.iter().map(|p| p.x())),
            DVector::from_iterator(points.len(), points.iter().map(|p| p.y())),
        )
    }

    pub fn x_data(&self) -> &DVector<f64> {
        &self.x_data
    }

    pub fn y_data(&self) -> &DVector<f64> {
        &self.y_data
    }

    pub fn len(&self) -> usize {
        self.x_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_data.is_empty()
    }

    pub fn shares_grid_with(&self, other: &SampledCurve) -> bool {
        self.x_data == other.x_data
    }

    /// 以線性插值將曲線重新取樣到指定網格
    pub fn resample(&self, grid: &DVector<f64>) -> Option<SampledCurve> {
        let y_data = grid.map(|x| self.value(x));
        Self::new(grid.clone(), y_data)
    }

    /// 與 `other` 的網格對齊；網格相同時直接複製
    pub fn aligned_to(&self, other: &SampledCurve) -> Option<SampledCurve> {
        if self.shares_grid_with(other) {
            Some(self.clone())
        } else {
            self.resample(&other.x_data)
        }
    }

    pub fn scaled(&self, factor: f64) -> SampledCurve {
        SampledCurve {
            x_data: self.x_data.clone(),
            y_data: &self.y_data * factor,
        }
    }

    /// 逐點取最小值，兩條曲線需共用同一網格
    pub fn pointwise_min(&self, other: &SampledCurve) -> Option<SampledCurve> {
        if !self.shares_grid_with(other) {
            return None;
        }
        Some(SampledCurve {
            x_data: self.x_data.clone(),
            y_data: self.y_data.zip_map(&other.y_data, f64::min),
        })
    }

    /// 以指定的 quadrature 在整個網格上積分
    pub fn integral_with(&self, quadrature: &dyn Quadrature) -> f64 {
        quadrature.integrate(self.x_data.as_slice(), self.y_data.as_slice())
    }

    fn find_segment(&self, x: f64) -> usize {
        let last = self.len() - 1;
        self.x_data
            .as_slice()
            .partition_point(|&xi| xi <= x)
            .saturating_sub(1)
            .min(last.saturating_sub(1))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait 實作
// ─────────────────────────────────────────────────────────────────────────────

impl NonparametricCurve for SampledCurve {
    fn points(&self) -> Vec<Point2D> {
        self.x_data
            .iter()
            .zip(self.y_data.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect()
    }

    fn min_x(&self) -> f64 {
        self.x_data[0]
    }

    fn max_x(&self) -> f64 {
        self.x_data[self.len() - 1]
    }
}

impl Curve for SampledCurve {
    fn value(&self, x: f64) -> f64 {
        let n = self.len();
        if n == 1 || x <= self.min_x() {
            return self.y_data[0];
        }
        if x >= self.max_x() {
            return self.y_data[n - 1];
        }

        let i = self.find_segment(x);
        let lhs = Point2D::new(self.x_data[i], self.y_data[i]);
        let rhs = Point2D::new(self.x_data[i + 1], self.y_data[i + 1]);
        f64::mul_add(Point2D::slope(&lhs, &rhs), x - lhs.x(), lhs.y())
    }
}

impl CurveIntegration for SampledCurve {
    /// 分段線性插值函數的精確積分
    fn integral(&self, a: f64, b: f64) -> f64 {
        if (a - b).abs() < f64::EPSILON {
            return 0.0;
        }
        if a > b {
            return -self.integral(b, a);
        }

        let mut xs = vec![a];
        xs.extend(self.x_data.iter().copied().filter(|&x| a < x && x < b));
        xs.push(b);
        let ys: Vec<f64> = xs.iter().map(|&x| self.value(x)).collect();
        Trapezoid.integrate(&xs, &ys)
    }
}
