use approx::assert_relative_eq;
use circadia::overlap::overlaptriple::OverlapTriple;

pub fn hours(labels: &[i32]) -> Vec<Option<i32>> {
    labels.iter().copied().map(Some).collect()
}

pub fn assert_triple_close(actual: &OverlapTriple, expected: (f64, f64, f64), epsilon: f64) {
    assert_relative_eq!(actual.overlap(), expected.0, epsilon = epsilon);
    assert_relative_eq!(actual.overlap_a(), expected.1, epsilon = epsilon);
    assert_relative_eq!(actual.overlap_b(), expected.2, epsilon = epsilon);
}

pub fn assert_triple_in_bounds(triple: &OverlapTriple) {
    for value in [triple.overlap(), triple.overlap_a(), triple.overlap_b()] {
        assert!((0.0..=1.0 + 1e-12).contains(&value), "{value} out of [0, 1]");
    }
}

/// 三個物種：
/// - bat：2 筆，全在 1 點
/// - fox：4 筆，1 點 3 筆、5 點 1 筆
/// - owl：20 筆，1 點 4 筆、5 點 4 筆、12 點 12 筆
///
/// 配對重疊：bat-fox 0.75、bat-owl 0.2、fox-owl 0.4；
/// fox-owl 的調和平均權重超過總權重一半。
pub fn three_species_community() -> (Vec<Option<i32>>, Vec<Option<String>>) {
    let mut traits = Vec::new();
    let mut species = Vec::new();
    let mut push = |label: &str, hour: i32, times: usize| {
        for _ in 0..times {
            traits.push(Some(hour));
            species.push(Some(label.to_owned()));
        }
    };
    push("bat", 1, 2);
    push("fox", 1, 3);
    push("fox", 5, 1);
    push("owl", 1, 4);
    push("owl", 5, 4);
    push("owl", 12, 12);
    (traits, species)
}
