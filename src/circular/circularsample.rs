use std::f64::consts::TAU;

use crate::circular::circularunit::{
    CircularTemplate,
    CircularUnit
};

// ─────────────────────────────────────────────────────────────────────────────
// CircularSample
// ─────────────────────────────────────────────────────────────────────────────
//
// 內部統一以弧度表示，零點在 0、逆時針，範圍 [0, 2π)：
//
//   θ = (zero + sign·v·scale) mod 2π
//
// 其中 scale = 2π / full_turn(unit, template)。
// 轉換只改變解讀方式，不改變觀測值之間的相對距離。

#[derive(Debug, Clone, PartialEq)]
pub struct CircularSample {
    angles: Vec<f64>,
    unit: CircularUnit,
    template: CircularTemplate,
}

impl CircularSample {
    /// 非有限數（NaN、±∞）視為缺值並移除；全部缺值時回傳 `None`
    pub fn new(
        values: &[f64],
        unit: CircularUnit,
        template: CircularTemplate,
    ) -> Option<CircularSample> {
        let scale = unit.to_radians_factor(template);
        let zero = template.zero();
        let sign = template.rotation().sign();

        let angles: Vec<f64> = values
            .iter()
            .filter(|v| v.is_finite())
            .map(|&v| f64::mul_add(sign * scale, v, zero).rem_euclid(TAU))
            .collect();

        if angles.is_empty() {
            return None;
        }

        Some(CircularSample { angles, unit, template })
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn unit(&self) -> CircularUnit {
        self.unit
    }

    pub fn template(&self) -> CircularTemplate {
        self.template
    }

    /// 將內部弧度轉回樣本原本的單位與鐘面，範圍 [0, full_turn)
    pub fn to_unit(&self, theta: f64) -> f64 {
        let full_turn = self.unit.full_turn(self.template);
        let sign = self.template.rotation().sign();
        let turns = sign * (theta - self.template.zero()) / TAU;
        (turns * full_turn).rem_euclid(full_turn)
    }
}
