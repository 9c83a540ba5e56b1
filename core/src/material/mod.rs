//! Renderer materials.
//!
//! - [`Material`] - A named material with a model, parameters and, for
//!   layered models, an ordered list of layers
//! - [`MaterialModel`] - The shading model a material uses
//! - [`disney_layer_default_values`] - Default values of one Disney layer

use crate::entity::Entity;
use crate::params::ParamArray;

/// Shading model of a [`Material`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialModel {
    /// Material without BSDF; renders black.
    Generic,
    /// Layered Disney principled material.
    Disney,
}

impl MaterialModel {
    /// Model name as written to project files.
    pub fn model_name(&self) -> &'static str {
        match self {
            Self::Generic => "generic_material",
            Self::Disney => "disney_material",
        }
    }
}

/// A renderer material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    model: MaterialModel,
    params: ParamArray,
    layers: Vec<ParamArray>,
}

impl Material {
    /// Creates a material without layers.
    pub fn new(name: impl Into<String>, model: MaterialModel, params: ParamArray) -> Self {
        Self {
            name: name.into(),
            model,
            params,
            layers: Vec::new(),
        }
    }

    /// Creates a generic material with no parameters.
    pub fn generic(name: impl Into<String>) -> Self {
        Self::new(name, MaterialModel::Generic, ParamArray::new())
    }

    /// Creates a Disney material with the given material-level parameters.
    pub fn disney(name: impl Into<String>, params: ParamArray) -> Self {
        Self::new(name, MaterialModel::Disney, params)
    }

    /// Append a layer.
    ///
    /// `layer_name` and `layer_number` are filled in from the layer's
    /// position when the caller did not set them.
    pub fn add_layer(&mut self, mut layer: ParamArray) {
        let number = self.layers.len();
        if !layer.contains("layer_name") {
            layer.set("layer_name", format!("layer{}", number + 1));
        }
        layer.set("layer_number", number as i64);
        self.layers.push(layer);
    }

    /// Builder-style [`add_layer`](Self::add_layer).
    #[must_use]
    pub fn with_layer(mut self, layer: ParamArray) -> Self {
        self.add_layer(layer);
        self
    }

    pub fn model(&self) -> MaterialModel {
        self.model
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    pub fn layers(&self) -> &[ParamArray] {
        &self.layers
    }
}

impl Entity for Material {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Default parameter values of a Disney material layer.
///
/// Values are expressions; numeric defaults are written as literals.
pub fn disney_layer_default_values() -> ParamArray {
    ParamArray::new()
        .insert("mask", "1.0")
        .insert("base_color", "[0.0, 0.0, 0.0]")
        .insert("subsurface", "0.0")
        .insert("metallic", "0.0")
        .insert("specular", "0.0")
        .insert("specular_tint", "0.0")
        .insert("anisotropic", "0.0")
        .insert("roughness", "0.1")
        .insert("sheen", "0.0")
        .insert("sheen_tint", "0.0")
        .insert("clearcoat", "0.0")
        .insert("clearcoat_gloss", "0.0")
}
