// ─────────────────────────────────────────────────────────────────────────────
// Quadrature：取樣曲線的數值積分
// ─────────────────────────────────────────────────────────────────────────────
//
// 輸入為成對的 (x_i, y_i)，x 需遞增。
// 目前只提供梯形法：
//
//   ∫ f ≈ Σ (x_{i+1} - x_i)·(y_i + y_{i+1}) / 2
//
// 對於分段線性曲線，梯形法即為精確積分。

pub trait Quadrature {
    fn integrate(&self, x: &[f64], y: &[f64]) -> f64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trapezoid;

impl Quadrature for Trapezoid {
    /// 少於兩個點時積分為 0；x 與 y 長度不同時只取共同長度
    fn integrate(&self, x: &[f64], y: &[f64]) -> f64 {
        let n = x.len().min(y.len());
        if n < 2 {
            return 0.0;
        }

        x[..n]
            .windows(2)
            .zip(y[..n].windows(2))
            .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_trapezoid_linear_is_exact() {
        let x = [0.0, 1.0, 2.5, 4.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        // ∫_0^4 (2x+1) dx = 16 + 4
        assert_relative_eq!(Trapezoid.integrate(&x, &y), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_endpoint_half_weight() {
        let x: Vec<f64> = (0..24).map(f64::from).collect();
        let mut y = vec![0.0; 24];
        y[0] = 1.0;
        assert_relative_eq!(Trapezoid.integrate(&x, &y), 0.5);
        y[0] = 0.0;
        y[12] = 1.0;
        assert_relative_eq!(Trapezoid.integrate(&x, &y), 1.0);
    }

    #[test]
    fn test_trapezoid_degenerate_inputs() {
        assert_eq!(Trapezoid.integrate(&[], &[]), 0.0);
        assert_eq!(Trapezoid.integrate(&[1.0], &[3.0]), 0.0);
    }
}
