use thiserror::Error;

/// Broad class of a [`VennError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The inputs describe a diagram that cannot be drawn.
    Configuration,
    /// A numeric label could not be computed.
    Arithmetic,
}

/// Errors raised while computing labels, resolving colors or rendering.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VennError {
    #[error("number of sets must be between 2 and 6, got {0}")]
    SetCount(usize),

    #[error("lengths of labels and names do not match: expected {expected} names, got {got}")]
    NamesLength { expected: usize, got: usize },

    #[error("n_colors must be between 2 and 6, got {0}")]
    ColorCount(usize),

    #[error("shift must be smaller than 6, got {0}")]
    Shift(usize),

    #[error("alpha must be between 0 and 1, got {0}")]
    Alpha(f32),

    #[error("font size must be positive, got {0}")]
    FontSize(f32),

    #[error("unsupported color specification '{0}'")]
    UnsupportedColor(String),

    #[error("palette supplies {available} colors but {needed} are needed")]
    PaletteTooShort { available: usize, needed: usize },

    #[error("label mapping is empty; cannot determine the number of sets")]
    EmptyLabels,

    #[error("label patterns disagree in length ({0} and {1})")]
    MixedPatternLengths(usize, usize),

    #[error("invalid membership pattern '{0}'")]
    InvalidPattern(String),

    #[error("unknown legend location '{0}'")]
    UnknownLegendLocation(String),

    #[error("invalid figure setting: {0}")]
    InvalidFigure(String),

    #[error("cannot compute percentages: the union of all sets is empty")]
    EmptyUnion,
}

impl VennError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VennError::EmptyUnion => ErrorKind::Arithmetic,
            _ => ErrorKind::Configuration,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_union_is_the_only_arithmetic_error() {
        assert_eq!(VennError::EmptyUnion.kind(), ErrorKind::Arithmetic);
        assert!(VennError::SetCount(7).is_configuration());
        assert!(VennError::Shift(6).is_configuration());
        assert!(VennError::UnsupportedColor("nope".into()).is_configuration());
        assert!(VennError::Alpha(f32::NAN).is_configuration());
        assert!(VennError::FontSize(-1.0).is_configuration());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = VennError::NamesLength {
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "lengths of labels and names do not match: expected 3 names, got 2"
        );
        assert_eq!(
            VennError::ColorCount(7).to_string(),
            "n_colors must be between 2 and 6, got 7"
        );
    }
}
