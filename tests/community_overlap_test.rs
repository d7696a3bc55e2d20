mod common;

use std::collections::BTreeSet;

use approx::assert_relative_eq;
use circadia::configuration::OverlapConfiguration;
use circadia::overlap::communityoverlap::{
    community_overlap_circular,
    community_overlap_circular_with_rng,
    harmonic_mean_weight,
    pairwise_overlaps,
    CommunityOverlap
};
use circadia::overlap::hourlyoverlap::circular_overlap_24hour;
use circadia::overlap::overlaperror::OverlapError;
use rand::SeedableRng;
use rand::rngs::StdRng;

use common::{hours, three_species_community};

#[test]
fn test_single_species_is_not_applicable() {
    let traits = hours(&[1, 2, 3, 4]);
    let species = vec![Some("fox"); 4];
    let result = community_overlap_circular(&traits, &species, true, false).unwrap();
    assert_eq!(result, CommunityOverlap::NotApplicable);
}

#[test]
fn test_singleton_species_are_not_applicable() {
    let traits = hours(&[1, 2, 3]);
    let species = [Some("fox"), Some("owl"), Some("bat")];
    let result = community_overlap_circular(&traits, &species, true, false).unwrap();
    assert_eq!(result, CommunityOverlap::NotApplicable);

    // 只有一個物種達到門檻
    let traits = hours(&[1, 2, 3, 4]);
    let species = [Some("fox"), Some("fox"), Some("owl"), Some("bat")];
    let result = community_overlap_circular(&traits, &species, true, false).unwrap();
    assert!(!result.is_applicable());
}

#[test]
fn test_two_species_equal_their_pairwise_overlap() {
    let fox = hours(&[1, 2, 2, 3, 3, 3, 4, 8, 20, 21]);
    let owl = hours(&[3, 22]);
    let traits = [fox.clone(), owl.clone()].concat();
    let species: Vec<Option<&str>> = std::iter::repeat_n(Some("fox"), 10)
        .chain(std::iter::repeat_n(Some("owl"), 2))
        .collect();

    let expected = circular_overlap_24hour(&fox, &owl, true).unwrap().overlap();
    let pairs = pairwise_overlaps(&traits, &species, true).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_relative_eq!(pairs[0].weight(), harmonic_mean_weight(10, 2));
    assert_relative_eq!(pairs[0].weight(), 2.0 / (1.0 / 10.0 + 1.0 / 2.0));

    for randomize in [false, true] {
        let community = community_overlap_circular(&traits, &species, true, randomize).unwrap();
        assert_eq!(community, CommunityOverlap::Overlap(expected));
    }
}

#[test]
fn test_weighted_median_of_three_pairs() {
    let (traits, species) = three_species_community();
    let pairs = pairwise_overlaps(&traits, &species, true).unwrap();
    let overlaps: Vec<f64> = pairs.iter().map(|p| p.overlap()).collect();
    assert_eq!(pairs.len(), 3);
    assert_relative_eq!(overlaps[0], 0.75, epsilon = 1e-12);
    assert_relative_eq!(overlaps[1], 0.2, epsilon = 1e-12);
    assert_relative_eq!(overlaps[2], 0.4, epsilon = 1e-12);

    let community = community_overlap_circular(&traits, &species, true, false).unwrap();
    assert_relative_eq!(community.value().unwrap(), 0.4, epsilon = 1e-12);
}

#[test]
fn test_missing_rows_do_not_count_toward_abundance() {
    let (mut traits, mut species) = three_species_community();
    traits.push(None);
    species.push(Some("bat".to_owned()));
    traits.push(Some(1));
    species.push(None);

    let clean = three_species_community();
    let with_missing = pairwise_overlaps(&traits, &species, true).unwrap();
    let expected = pairwise_overlaps(&clean.0, &clean.1, true).unwrap();
    assert_eq!(with_missing, expected);
}

#[test]
fn test_seeded_randomization_is_reproducible() {
    let (traits, species) = three_species_community();
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        community_overlap_circular_with_rng(&traits, &species, true, true, &mut rng)
            .unwrap()
            .value()
            .unwrap()
    };

    assert_eq!(run(42), run(42));

    let outcomes: BTreeSet<u64> = (0..64).map(|seed| run(seed).to_bits()).collect();
    assert!(outcomes.len() > 1);
    for bits in outcomes {
        let value = f64::from_bits(bits);
        assert!([0.75, 0.2, 0.4].iter().any(|v| (v - value).abs() < 1e-12));
    }
}

#[test]
fn test_configuration_seed_drives_randomization() {
    let (traits, species) = three_species_community();
    let config = OverlapConfiguration::new(1.0).with_randomized_weights(Some(7));
    let first = config.community_overlap(&traits, &species).unwrap();
    let second = config.community_overlap(&traits, &species).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_length_mismatch_is_an_error() {
    let result = community_overlap_circular(&hours(&[1, 2]), &[Some("fox")], true, false);
    assert_eq!(
        result,
        Err(OverlapError::LengthMismatch { traits: 2, species: 1 })
    );
}
