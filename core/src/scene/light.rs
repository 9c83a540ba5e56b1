//! Lights.

use crate::entity::Entity;
use crate::math::Transform;
use crate::params::ParamArray;

/// Light model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightModel {
    /// Point light with decay.
    MaxOmni,
    /// Spot light with decay and inner/outer cone angles.
    MaxSpot,
    /// Parallel light defined by irradiance.
    Directional,
}

impl LightModel {
    pub fn model_name(&self) -> &'static str {
        match self {
            Self::MaxOmni => "max_omni_light",
            Self::MaxSpot => "max_spot_light",
            Self::Directional => "directional_light",
        }
    }

    /// Parameter naming the color entity that drives this model.
    pub fn color_param(&self) -> &'static str {
        match self {
            Self::MaxOmni | Self::MaxSpot => "intensity",
            Self::Directional => "irradiance",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    name: String,
    model: LightModel,
    params: ParamArray,
    transform: Transform,
}

impl Light {
    pub fn new(name: impl Into<String>, model: LightModel, params: ParamArray) -> Self {
        Self {
            name: name.into(),
            model,
            params,
            transform: Transform::identity(),
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn model(&self) -> LightModel {
        self.model
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Name of the color entity this light refers to.
    pub fn color_name(&self) -> Option<&str> {
        self.params.get_str(self.model.color_param())
    }
}

impl Entity for Light {
    fn name(&self) -> &str {
        &self.name
    }
}
