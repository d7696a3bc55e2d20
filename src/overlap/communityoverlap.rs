use std::collections::BTreeMap;

use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::math::statistics::weighted_median;
use crate::overlap::hourlyoverlap::circular_overlap_24hour;
use crate::overlap::overlaperror::OverlapError;

/// 物種至少要有這麼多筆觀測才納入比較
pub const MIN_ABUNDANCE: usize = 2;

/// 群落層級的重疊值；少於兩個合格物種時為 `NotApplicable`（不是 0）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum CommunityOverlap {
    Overlap(f64),
    NotApplicable,
}

impl CommunityOverlap {
    pub fn value(&self) -> Option<f64> {
        match self {
            CommunityOverlap::Overlap(value) => Some(*value),
            CommunityOverlap::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, CommunityOverlap::Overlap(_))
    }
}

/// 一組物種配對：重疊係數與以豐度調和平均計算的權重
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbundanceWeightedPair {
    species_a: String,
    species_b: String,
    overlap: f64,
    weight: f64,
}

impl AbundanceWeightedPair {
    pub fn species_a(&self) -> &str {
        &self.species_a
    }

    pub fn species_b(&self) -> &str {
        &self.species_b
    }

    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// 2 / (1/n_a + 1/n_b)
pub fn harmonic_mean_weight(abundance_a: usize, abundance_b: usize) -> f64 {
    2.0 / (1.0 / abundance_a as f64 + 1.0 / abundance_b as f64)
}

// ─────────────────────────────────────────────────────────────────────────────
// 物種分組
// ─────────────────────────────────────────────────────────────────────────────

/// 逐列配對 trait 與物種標籤，丟棄任一欄缺值的列，
/// 只保留豐度 >= MIN_ABUNDANCE 的物種（依標籤排序）
fn group_by_species<S: AsRef<str>>(
    traits: &[Option<i32>],
    species: &[Option<S>],
) -> Result<BTreeMap<String, Vec<Option<i32>>>, OverlapError> {
    if traits.len() != species.len() {
        return Err(OverlapError::LengthMismatch {
            traits: traits.len(),
            species: species.len(),
        });
    }

    let mut groups: BTreeMap<String, Vec<Option<i32>>> = BTreeMap::new();
    for (hour, label) in traits.iter().zip(species.iter()) {
        if let (Some(hour), Some(label)) = (hour, label) {
            groups
                .entry(label.as_ref().to_owned())
                .or_default()
                .push(Some(*hour));
        }
    }

    let before = groups.len();
    groups.retain(|_, records| records.len() >= MIN_ABUNDANCE);
    if groups.len() < before {
        tracing::debug!(
            dropped = before - groups.len(),
            kept = groups.len(),
            "species below minimum abundance"
        );
    }

    Ok(groups)
}

// ─────────────────────────────────────────────────────────────────────────────
// 配對重疊
// ─────────────────────────────────────────────────────────────────────────────

/// 所有合格物種配對（每對一次、不含自身）的重疊係數與權重
pub fn pairwise_overlaps<S: AsRef<str>>(
    traits: &[Option<i32>],
    species: &[Option<S>],
    normalize: bool,
) -> Result<Vec<AbundanceWeightedPair>, OverlapError> {
    let groups = group_by_species(traits, species)?;
    pairs_from_groups(&groups, normalize)
}

fn pairs_from_groups(
    groups: &BTreeMap<String, Vec<Option<i32>>>,
    normalize: bool,
) -> Result<Vec<AbundanceWeightedPair>, OverlapError> {
    groups
        .iter()
        .tuple_combinations()
        .map(|((species_a, hours_a), (species_b, hours_b))| -> Result<_, OverlapError> {
            let triple = circular_overlap_24hour(hours_a, hours_b, normalize)?;
            Ok(AbundanceWeightedPair {
                species_a: species_a.clone(),
                species_b: species_b.clone(),
                overlap: triple.overlap(),
                weight: harmonic_mean_weight(hours_a.len(), hours_b.len()),
            })
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// 群落重疊
// ─────────────────────────────────────────────────────────────────────────────

/// 以執行緒 RNG 打亂權重；需要可重現結果時用 `community_overlap_circular_with_rng`
pub fn community_overlap_circular<S: AsRef<str>>(
    traits: &[Option<i32>],
    species: &[Option<S>],
    normalize: bool,
    randomize_weights: bool,
) -> Result<CommunityOverlap, OverlapError> {
    let mut rng = rand::rng();
    community_overlap_circular_with_rng(traits, species, normalize, randomize_weights, &mut rng)
}

/// 物種配對重疊的加權中位數
///
/// `randomize_weights` 為真時，在所有配對算完之後把權重整組隨機排列，
/// 打斷豐度與重疊之間的對應（permutation test 用的虛無模型）。
pub fn community_overlap_circular_with_rng<S, R>(
    traits: &[Option<i32>],
    species: &[Option<S>],
    normalize: bool,
    randomize_weights: bool,
    rng: &mut R,
) -> Result<CommunityOverlap, OverlapError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let groups = group_by_species(traits, species)?;
    if groups.len() < 2 {
        tracing::debug!(species = groups.len(), "community overlap not applicable");
        return Ok(CommunityOverlap::NotApplicable);
    }

    let pairs = pairs_from_groups(&groups, normalize)?;
    let overlaps: Vec<f64> = pairs.iter().map(|p| p.overlap).collect();
    let mut weights: Vec<f64> = pairs.iter().map(|p| p.weight).collect();

    if randomize_weights {
        weights.shuffle(rng);
    }

    let median = weighted_median(&overlaps, &weights).ok_or(OverlapError::InvalidWeights)?;
    tracing::debug!(
        species = groups.len(),
        pairs = pairs.len(),
        randomize_weights,
        overlap = median,
        "community overlap"
    );
    Ok(CommunityOverlap::Overlap(median))
}
