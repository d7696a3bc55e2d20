use thiserror::Error;

/// 標示是哪一組樣本出錯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRole {
    A,
    B,
}

impl std::fmt::Display for SampleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleRole::A => write!(f, "a"),
            SampleRole::B => write!(f, "b"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverlapError {
    #[error("Sample '{0}' is empty after removing missing values")]
    EmptyInput(SampleRole),

    #[error("Degenerate integral (a = {integral_a}, b = {integral_b}); overlap ratios are undefined")]
    DegenerateIntegral { integral_a: f64, integral_b: f64 },

    #[error("Invalid bandwidth: {0} (must be finite and positive)")]
    InvalidBandwidth(f64),

    #[error("Invalid density resolution: {0} (at least 2 grid points required)")]
    InvalidResolution(usize),

    #[error("Traits and species labels differ in length ({traits} vs {species})")]
    LengthMismatch { traits: usize, species: usize },

    #[error("Density curves could not be aligned on a common grid")]
    GridMismatch,

    #[error("Pairwise weights do not admit a weighted median")]
    InvalidWeights,
}
