use crate::errors::OnTrackError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Cannot compute budget fractions: budget amount is zero")]
    DivideByZero,
}

impl OnTrackError for GeometryError {
    fn error_code(&self) -> &'static str {
        match self {
            GeometryError::DivideByZero => "GEOMETRY_DIVIDE_BY_ZERO",
        }
    }
}
