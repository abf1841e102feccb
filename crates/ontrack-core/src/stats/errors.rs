use crate::errors::OnTrackError;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to reach budget endpoint: {message}")]
    Transport { message: String },

    #[error("Failed to decode budget statistics: {message}")]
    Decode { message: String },

    #[error("Budget endpoint returned an empty body")]
    Empty,
}

impl OnTrackError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "FETCH_TRANSPORT",
            FetchError::Decode { .. } => "FETCH_DECODE",
            FetchError::Empty => "FETCH_EMPTY",
        }
    }

    fn is_user_error(&self) -> bool {
        false
    }
}
