//! Disk textures and texture instances.
//!
//! A [`Texture`] names an image file; a [`TextureInstance`] binds a texture
//! with per-use parameters (addressing, alpha mode). Entity parameters
//! refer to texture instances by name.

use crate::entity::Entity;
use crate::params::ParamArray;

/// A 2D texture read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    name: String,
    params: ParamArray,
}

impl Texture {
    /// Creates a disk texture. `params` should hold `filename` and
    /// `color_space`.
    pub fn disk_2d(name: impl Into<String>, params: ParamArray) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn model(&self) -> &'static str {
        "disk_texture_2d"
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    /// The texture's file name, if set.
    pub fn filename(&self) -> Option<&str> {
        self.params.get_str("filename")
    }
}

impl Entity for Texture {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A use of a [`Texture`] with its own parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureInstance {
    name: String,
    texture: String,
    params: ParamArray,
}

impl TextureInstance {
    pub fn new(name: impl Into<String>, texture: impl Into<String>, params: ParamArray) -> Self {
        Self {
            name: name.into(),
            texture: texture.into(),
            params,
        }
    }

    /// Name of the instantiated texture.
    pub fn texture(&self) -> &str {
        &self.texture
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }
}

impl Entity for TextureInstance {
    fn name(&self) -> &str {
        &self.name
    }
}
