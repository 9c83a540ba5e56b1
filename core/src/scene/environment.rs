//! Environment, environment EDFs and environment shaders.

use crate::entity::Entity;
use crate::params::ParamArray;

/// Environment emission with a constant radiance.
///
/// `radiance` names a color entity of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentEdf {
    name: String,
    params: ParamArray,
}

impl EnvironmentEdf {
    pub fn constant(name: impl Into<String>, params: ParamArray) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn model(&self) -> &'static str {
        "constant_environment_edf"
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    pub fn radiance(&self) -> Option<&str> {
        self.params.get_str("radiance")
    }
}

impl Entity for EnvironmentEdf {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Environment shader that shades with an environment EDF.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentShader {
    name: String,
    params: ParamArray,
}

impl EnvironmentShader {
    pub fn edf(name: impl Into<String>, params: ParamArray) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn model(&self) -> &'static str {
        "edf_environment_shader"
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    pub fn environment_edf(&self) -> Option<&str> {
        self.params.get_str("environment_edf")
    }
}

impl Entity for EnvironmentShader {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The scene's environment slot.
///
/// An environment with no parameters is a no-op background.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    name: String,
    params: ParamArray,
}

impl Environment {
    pub fn new(name: impl Into<String>, params: ParamArray) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    pub fn environment_edf(&self) -> Option<&str> {
        self.params.get_str("environment_edf")
    }

    pub fn environment_shader(&self) -> Option<&str> {
        self.params.get_str("environment_shader")
    }
}

impl Entity for Environment {
    fn name(&self) -> &str {
        &self.name
    }
}
