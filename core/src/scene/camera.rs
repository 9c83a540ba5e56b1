//! Cameras.

use crate::entity::Entity;
use crate::math::TransformSequence;
use crate::params::ParamArray;

/// Camera projection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraModel {
    Pinhole,
    Orthographic,
}

impl CameraModel {
    pub fn model_name(&self) -> &'static str {
        match self {
            Self::Pinhole => "pinhole_camera",
            Self::Orthographic => "orthographic_camera",
        }
    }
}

/// A camera placed by a time-keyed transform sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    name: String,
    model: CameraModel,
    params: ParamArray,
    transform_sequence: TransformSequence,
}

impl Camera {
    pub fn new(name: impl Into<String>, model: CameraModel, params: ParamArray) -> Self {
        Self {
            name: name.into(),
            model,
            params,
            transform_sequence: TransformSequence::new(),
        }
    }

    pub fn model(&self) -> CameraModel {
        self.model
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    pub fn transform_sequence(&self) -> &TransformSequence {
        &self.transform_sequence
    }

    pub fn transform_sequence_mut(&mut self) -> &mut TransformSequence {
        &mut self.transform_sequence
    }
}

impl Entity for Camera {
    fn name(&self) -> &str {
        &self.name
    }
}
