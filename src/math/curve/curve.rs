pub trait Curve {
    fn value(&self, x: f64) -> f64;
}

pub trait CurveIntegration {
    /// ∫_a^b f(x) dx，符號慣例：∫_a^b = -∫_b^a
    fn integral(&self, a: f64, b: f64) -> f64;
}
