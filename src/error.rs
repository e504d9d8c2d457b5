use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Shape Mismatch: observed {observed:?} vs forecasted {forecasted:?}")]
    ShapeMismatch {
        observed: Vec<usize>,
        forecasted: Vec<usize>,
    },

    #[error("Invalid Parameters: {0}")]
    InvalidParameters(String),

    #[error("Missing Value: element {index} is NaN (filter missing data before verification)")]
    MissingValue { index: usize },

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Array Shape Error: {0}")]
    Array(#[from] ndarray::ShapeError),
}

pub type SkResult<T> = Result<T, SkillError>;
