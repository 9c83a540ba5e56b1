//! Error types for project graph construction and export.

/// Errors that can occur while assembling or writing a project.
#[derive(Debug)]
pub enum ProjectError {
    /// An entity with this name already exists in the collection.
    DuplicateName {
        /// Collection the insertion targeted (e.g. "materials").
        collection: &'static str,
        /// The conflicting name.
        name: String,
    },
    /// An entity refers to another entity that does not exist.
    UnknownReference {
        /// Kind of the missing entity (e.g. "object").
        kind: &'static str,
        /// Name of the missing entity.
        name: String,
        /// Name of the entity holding the reference.
        referrer: String,
    },
    /// A mesh object failed validation.
    InvalidMesh {
        /// Mesh object name.
        object: String,
        /// What is wrong with it.
        reason: String,
    },
    /// The named configuration does not exist in the project.
    MissingConfiguration(String),
    /// Writing a project file failed.
    Io(std::io::Error),
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName { collection, name } => {
                write!(f, "duplicate name \"{name}\" in {collection}")
            }
            Self::UnknownReference {
                kind,
                name,
                referrer,
            } => write!(f, "\"{referrer}\" refers to unknown {kind} \"{name}\""),
            Self::InvalidMesh { object, reason } => {
                write!(f, "invalid mesh object \"{object}\": {reason}")
            }
            Self::MissingConfiguration(name) => write!(f, "no configuration named \"{name}\""),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ProjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProjectError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
