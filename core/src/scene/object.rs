//! Object instances.

use std::collections::BTreeMap;

use crate::entity::Entity;
use crate::math::Transform;
use crate::params::ParamArray;

/// Material slot name to material name.
pub type MaterialMappings = BTreeMap<String, String>;

/// A placement of a mesh object with its own material bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInstance {
    name: String,
    params: ParamArray,
    object: String,
    transform: Transform,
    front_materials: MaterialMappings,
    back_materials: MaterialMappings,
}

impl ObjectInstance {
    pub fn new(
        name: impl Into<String>,
        params: ParamArray,
        object: impl Into<String>,
        transform: Transform,
        front_materials: MaterialMappings,
        back_materials: MaterialMappings,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            object: object.into(),
            transform,
            front_materials,
            back_materials,
        }
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    /// Name of the instantiated object.
    pub fn object(&self) -> &str {
        &self.object
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn front_materials(&self) -> &MaterialMappings {
        &self.front_materials
    }

    pub fn back_materials(&self) -> &MaterialMappings {
        &self.back_materials
    }

    /// All material names bound on either side.
    pub fn material_names(&self) -> impl Iterator<Item = &str> {
        self.front_materials
            .values()
            .chain(self.back_materials.values())
            .map(String::as_str)
    }
}

impl Entity for ObjectInstance {
    fn name(&self) -> &str {
        &self.name
    }
}
