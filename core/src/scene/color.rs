//! Color entities and the entity groups that own them.

use crate::color::Color3;
use crate::entity::{Entity, EntityContainer, make_unique_name};
use crate::error::ProjectError;
use crate::params::ParamArray;
use crate::texture::{Texture, TextureInstance};

/// A named color referenced by other entities' parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntity {
    name: String,
    params: ParamArray,
    values: Color3,
}

impl ColorEntity {
    /// Creates a color. `params` should hold `color_space`.
    pub fn new(name: impl Into<String>, params: ParamArray, values: Color3) -> Self {
        Self {
            name: name.into(),
            params,
            values,
        }
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    pub fn values(&self) -> Color3 {
        self.values
    }

    /// The color space the values are expressed in.
    pub fn color_space(&self) -> Option<&str> {
        self.params.get_str("color_space")
    }
}

impl Entity for ColorEntity {
    fn name(&self) -> &str {
        &self.name
    }
}

/// An entity group owning colors, textures and texture instances.
///
/// Implemented by [`Scene`](super::Scene) and
/// [`Assembly`](super::Assembly).
pub trait BaseGroup {
    fn colors(&self) -> &EntityContainer<ColorEntity>;
    fn colors_mut(&mut self) -> &mut EntityContainer<ColorEntity>;
    fn textures(&self) -> &EntityContainer<Texture>;
    fn textures_mut(&mut self) -> &mut EntityContainer<Texture>;
    fn texture_instances(&self) -> &EntityContainer<TextureInstance>;
    fn texture_instances_mut(&mut self) -> &mut EntityContainer<TextureInstance>;

    fn insert_color_entity(&mut self, color: ColorEntity) -> Result<(), ProjectError> {
        self.colors_mut().insert(color)
    }

    fn insert_texture(&mut self, texture: Texture) -> Result<(), ProjectError> {
        self.textures_mut().insert(texture)
    }

    /// Insert a texture instance. The instantiated texture must already
    /// be in this group.
    fn insert_texture_instance(&mut self, instance: TextureInstance) -> Result<(), ProjectError> {
        if !self.textures().contains(instance.texture()) {
            return Err(ProjectError::UnknownReference {
                kind: "texture",
                name: instance.texture().to_string(),
                referrer: instance.name().to_string(),
            });
        }
        self.texture_instances_mut().insert(instance)
    }
}

/// Insert a linear RGB color under a unique name derived from `name`.
///
/// Returns the name the color was inserted under.
pub fn insert_color<G: BaseGroup + ?Sized>(
    group: &mut G,
    name: &str,
    linear_rgb: Color3,
) -> Result<String, ProjectError> {
    let color_name = make_unique_name(group.colors(), name);
    group.insert_color_entity(ColorEntity::new(
        color_name.clone(),
        ParamArray::new().insert("color_space", "linear_rgb"),
        linear_rgb,
    ))?;
    Ok(color_name)
}
