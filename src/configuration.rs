use std::fs::File;
use std::io::BufReader;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use thiserror::Error;

use crate::circular::circularunit::{
    CircularTemplate,
    CircularUnit
};
use crate::overlap::circularoverlap::circular_overlap;
use crate::overlap::communityoverlap::{
    community_overlap_circular,
    community_overlap_circular_with_rng,
    CommunityOverlap
};
use crate::overlap::hourlyoverlap::circular_overlap_24hour;
use crate::overlap::overlaperror::OverlapError;
use crate::overlap::overlaptriple::OverlapTriple;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Unable to read configuration file: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Unable to parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

fn default_unit() -> CircularUnit {
    CircularUnit::Hours
}

fn default_template() -> CircularTemplate {
    CircularTemplate::Clock24
}

fn default_normalize() -> bool {
    true
}

/// 分析參數，可由 JSON 載入：
///
/// ```json
/// { "unit": "Hours", "template": "Clock24", "bandwidth": 10.0,
///   "resolution": 512, "normalize": true, "randomize_weights": false, "seed": 42 }
/// ```
///
/// 只有 `bandwidth` 為必填。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverlapConfiguration {
    #[serde(default = "default_unit")]
    unit: CircularUnit,
    #[serde(default = "default_template")]
    template: CircularTemplate,
    bandwidth: f64,
    #[serde(default)]
    resolution: Option<usize>,
    #[serde(default = "default_normalize")]
    normalize: bool,
    #[serde(default)]
    randomize_weights: bool,
    #[serde(default)]
    seed: Option<u64>,
}

impl OverlapConfiguration {
    pub fn new(bandwidth: f64) -> OverlapConfiguration {
        OverlapConfiguration {
            unit: default_unit(),
            template: default_template(),
            bandwidth,
            resolution: None,
            normalize: default_normalize(),
            randomize_weights: false,
            seed: None,
        }
    }

    pub fn from_reader(file_path: String) -> Result<OverlapConfiguration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<OverlapConfiguration, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_unit(mut self, unit: CircularUnit, template: CircularTemplate) -> Self {
        self.unit = unit;
        self.template = template;
        self
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_randomized_weights(mut self, seed: Option<u64>) -> Self {
        self.randomize_weights = true;
        self.seed = seed;
        self
    }

    pub fn unit(&self) -> CircularUnit {
        self.unit
    }

    pub fn template(&self) -> CircularTemplate {
        self.template
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn resolution(&self) -> Option<usize> {
        self.resolution
    }

    pub fn normalize(&self) -> bool {
        self.normalize
    }

    pub fn randomize_weights(&self) -> bool {
        self.randomize_weights
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn circular_overlap(&self, a: &[f64], b: &[f64]) -> Result<OverlapTriple, OverlapError> {
        circular_overlap(
            a,
            b,
            self.unit,
            self.template,
            self.normalize,
            self.bandwidth,
            self.resolution,
        )
    }

    pub fn circular_overlap_24hour(
        &self,
        a: &[Option<i32>],
        b: &[Option<i32>],
    ) -> Result<OverlapTriple, OverlapError> {
        circular_overlap_24hour(a, b, self.normalize)
    }

    /// 有 `seed` 時每次呼叫都用同一個種子建立新的 `StdRng`
    pub fn community_overlap<S: AsRef<str>>(
        &self,
        traits: &[Option<i32>],
        species: &[Option<S>],
    ) -> Result<CommunityOverlap, OverlapError> {
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                community_overlap_circular_with_rng(
                    traits,
                    species,
                    self.normalize,
                    self.randomize_weights,
                    &mut rng,
                )
            }
            None => community_overlap_circular(traits, species, self.normalize, self.randomize_weights),
        }
    }
}
