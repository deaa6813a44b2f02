//! Editor error type and classification
//!
//! Nothing in the editor is fatal. Every failure is either a rejected
//! explicit action the user must be told about, or a silent no-op during a
//! continuous pointer gesture.

use thiserror::Error;

use crate::registry::RegistryError;
use crate::wall::WallError;

/// Editor result type
pub type Result<T> = std::result::Result<T, EditorError>;

/// Editor error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// Wall configuration rejected
    #[error(transparent)]
    Wall(#[from] WallError),

    /// Window operation rejected
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Settings edited without the settings capability
    #[error("Settings are locked")]
    SettingsLocked,
}

/// How a host should react to an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorDisposition {
    /// Show the message; the action was not applied
    Blocking,

    /// Ignore; the gesture or event is retried naturally
    Silent,
}

/// Classify error for presentation
pub fn classify(error: &EditorError) -> ErrorDisposition {
    match error {
        EditorError::Wall(
            WallError::TooManyOutputs { .. }
            | WallError::InvalidDimensions(..)
            | WallError::UnknownResolution(_),
        )
        | EditorError::SettingsLocked => ErrorDisposition::Blocking,

        EditorError::Registry(
            RegistryError::TooSmall { .. }
            | RegistryError::DegenerateSurface
            | RegistryError::UnknownWindow(_),
        ) => ErrorDisposition::Silent,
    }
}

impl EditorError {
    /// Disposition of this error
    pub fn disposition(&self) -> ErrorDisposition {
        classify(self)
    }

    /// True when the user should see the message
    pub fn is_blocking(&self) -> bool {
        self.disposition() == ErrorDisposition::Blocking
    }
}
