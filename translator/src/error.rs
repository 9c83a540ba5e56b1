use seedbridge_core::ProjectError;
use thiserror::Error;

/// Errors that abort a project build.
///
/// Per-entity problems (unsupported geometry or lights) are not errors;
/// they are reported as [`Diagnostic`](crate::Diagnostic)s.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Project graph error: {0}")]
    Project(#[from] ProjectError),
    #[error("View transform is singular and cannot be inverted")]
    SingularViewTransform,
    #[error("Output size {width}x{height} is empty or too large")]
    InvalidOutputSize { width: u32, height: u32 },
    #[error("Invalid renderer settings: {0}")]
    Settings(String),
    #[error("Output mode saves the project but no project file is configured")]
    MissingProjectPath,
}

pub type BuildResult<T> = Result<T, BuildError>;
