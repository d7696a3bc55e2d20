use std::f64::consts::{
    FRAC_PI_2,
    TAU
};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CircularUnit {
    Radians,
    Degrees,
    Hours
}

/// 參考零點與旋轉方向的慣例
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum CircularTemplate {
    /// 零點在 0，逆時針
    #[default]
    None,
    /// 零點在北方（π/2），順時針
    Geographics,
    /// 12 小時鐘面
    Clock12,
    /// 24 小時鐘面
    Clock24
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Counter,
    Clock
}

impl Rotation {
    pub fn sign(&self) -> f64 {
        match self {
            Rotation::Counter => 1.0,
            Rotation::Clock => -1.0
        }
    }
}

impl CircularTemplate {
    pub fn zero(&self) -> f64 {
        match self {
            CircularTemplate::None => 0.0,
            _ => FRAC_PI_2
        }
    }

    pub fn rotation(&self) -> Rotation {
        match self {
            CircularTemplate::None => Rotation::Counter,
            _ => Rotation::Clock
        }
    }
}

impl CircularUnit {
    /// 在指定鐘面下，一整圈對應的單位數
    pub fn full_turn(&self, template: CircularTemplate) -> f64 {
        match (self, template) {
            (CircularUnit::Radians, _) => TAU,
            (CircularUnit::Degrees, _) => 360.0,
            (CircularUnit::Hours, CircularTemplate::Clock12) => 12.0,
            (CircularUnit::Hours, _) => 24.0
        }
    }

    pub fn to_radians_factor(&self, template: CircularTemplate) -> f64 {
        TAU / self.full_turn(template)
    }
}
