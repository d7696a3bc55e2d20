use itertools::Itertools;

/// 加權中位數
///
/// 依值排序後累加權重，第一個累積權重到達總權重一半的值即為中位數；
/// 若累積權重恰好等於一半，取該值與下一個正權重值的中點。
///
/// # Returns
/// - `None`：長度不一致、空輸入、值非有限數、權重為負或非有限數、總權重為 0
pub fn weighted_median(values: &[f64], weights: &[f64]) -> Option<f64> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }
    if !values.iter().all(|v| v.is_finite()) {
        return None;
    }
    if !weights.iter().all(|w| w.is_finite() && *w >= 0.0) {
        return None;
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }

    // 權重為 0 的值不影響中位數
    let sorted: Vec<(f64, f64)> = values
        .iter()
        .copied()
        .zip(weights.iter().copied())
        .filter(|(_, w)| *w > 0.0)
        .sorted_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0))
        .collect();

    let half = total / 2.0;
    let tolerance = total * 1e-12;
    let mut cumulative = 0.0;

    for (i, &(value, weight)) in sorted.iter().enumerate() {
        cumulative += weight;
        if (cumulative - half).abs() <= tolerance {
            return Some(match sorted.get(i + 1) {
                Some(&(next, _)) => (value + next) / 2.0,
                None => value,
            });
        }
        if cumulative > half {
            return Some(value);
        }
    }

    sorted.last().map(|&(value, _)| value)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_weighted_median_single_value() {
        assert_eq!(weighted_median(&[0.37], &[3.3]), Some(0.37));
    }

    #[test]
    fn test_weighted_median_uniform_weights_matches_median() {
        assert_eq!(weighted_median(&[3.0, 1.0, 2.0], &[1.0, 1.0, 1.0]), Some(2.0));
        let even = weighted_median(&[4.0, 1.0, 3.0, 2.0], &[1.0; 4]).unwrap();
        assert_relative_eq!(even, 2.5);
    }

    #[test]
    fn test_weighted_median_dominant_weight() {
        let m = weighted_median(&[0.1, 0.5, 0.9], &[1.0, 1.0, 10.0]);
        assert_eq!(m, Some(0.9));
    }

    #[test]
    fn test_weighted_median_ignores_zero_weights() {
        let m = weighted_median(&[0.1, 0.2, 0.8], &[0.0, 1.0, 1.0]).unwrap();
        assert_relative_eq!(m, 0.5);
    }

    #[test]
    fn test_weighted_median_rejects_bad_input() {
        assert_eq!(weighted_median(&[], &[]), None);
        assert_eq!(weighted_median(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(weighted_median(&[1.0], &[-1.0]), None);
        assert_eq!(weighted_median(&[1.0, 2.0], &[0.0, 0.0]), None);
        assert_eq!(weighted_median(&[f64::NAN], &[1.0]), None);
    }
}
