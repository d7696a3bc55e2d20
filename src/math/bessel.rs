// ─────────────────────────────────────────────────────────────────────────────
// Modified Bessel function of the first kind, order 0
// ─────────────────────────────────────────────────────────────────────────────
//
// 使用 Abramowitz & Stegun 9.8.1 / 9.8.2 的多項式近似（相對誤差 < 2e-7）：
//
//   |x| <= 3.75：t = (x/3.75)²
//     I0(x) = 1 + 3.5156229t + 3.0899424t² + 1.2067492t³
//               + 0.2659732t⁴ + 0.0360768t⁵ + 0.0045813t⁶
//
//   |x| >  3.75：t = 3.75/|x|
//     √|x|·e^{-|x|}·I0(x) = 0.39894228 + 0.01328592t + ... + 0.00392377t⁸
//
// von Mises kernel 需要的是 e^{-κ}·I0(κ)，大 κ 時直接算 I0 會溢位，
// 所以對外只提供 scaled 版本。

const SMALL_ARG_COEFS: [f64; 7] = [
    1.0,
    3.5156229,
    3.0899424,
    1.2067492,
    0.2659732,
    0.0360768,
    0.0045813,
];

const LARGE_ARG_COEFS: [f64; 9] = [
    0.39894228,
    0.01328592,
    0.00225319,
    -0.00157565,
    0.00916281,
    -0.02057706,
    0.02635537,
    -0.01647633,
    0.00392377,
];

fn horner(coefs: &[f64], t: f64) -> f64 {
    coefs
        .iter()
        .rev()
        .fold(0.0, |acc, &c| f64::mul_add(acc, t, c))
}

/// e^{-|x|}·I0(x)
pub fn bessel_i0_scaled(x: f64) -> f64 {
    let ax = x.abs();
    if ax <= 3.75 {
        let t = (ax / 3.75).powi(2);
        horner(&SMALL_ARG_COEFS, t) * (-ax).exp()
    } else {
        let t = 3.75 / ax;
        horner(&LARGE_ARG_COEFS, t) / ax.sqrt()
    }
}
