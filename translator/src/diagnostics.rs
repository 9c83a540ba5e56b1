//! Per-entity problems found while building a project.

use std::fmt;

use crate::host::DefaultLightKind;

/// Something that was left out of the project.
///
/// Diagnostics never abort a build. Each one is logged at `warn` when it
/// is recorded and returned alongside the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The node's object cannot be converted to a triangle mesh.
    UnsupportedGeometry { node: String },
    /// The node's triangle mesh has out-of-range indices.
    MalformedGeometry { node: String, reason: String },
    /// The node's light class has no renderer counterpart.
    UnsupportedLight { node: String, class: String },
    /// A default light of a kind that is not translated (ambient).
    UnhandledDefaultLight { index: usize, kind: DefaultLightKind },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedGeometry { node } => {
                write!(f, "object of node \"{node}\" cannot be converted to a triangle mesh")
            }
            Self::MalformedGeometry { node, reason } => {
                write!(f, "mesh of node \"{node}\" is malformed: {reason}")
            }
            Self::UnsupportedLight { node, class } => {
                write!(f, "light \"{node}\" has unsupported class {class}")
            }
            Self::UnhandledDefaultLight { index, kind } => {
                write!(f, "default light #{index} of kind {kind:?} is not translated")
            }
        }
    }
}

/// Ordered list of diagnostics recorded during one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
