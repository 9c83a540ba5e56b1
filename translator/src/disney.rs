//! The Disney material plugin's renderer side.
//!
//! Parameter values use the host's percent scale (0 to 100) except
//! anisotropy, which is already normalized. Any parameter can be driven
//! by a texture map instead.

use std::collections::HashMap;

use seedbridge_core::color::Color3;
use seedbridge_core::material::{Material, disney_layer_default_values};
use seedbridge_core::scene::Assembly;
use seedbridge_core::{ParamArray, ProjectError};

use crate::expr::{scalar_expr, srgb_color_expr};
use crate::host::RendererMaterial;
use crate::texture::{TextureMap, insert_texture_and_instance};

/// Texturable parameters of [`DisneyMaterial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisneyParam {
    BaseColor,
    Metallic,
    Specular,
    SpecularTint,
    Anisotropy,
    Roughness,
    Clearcoat,
    ClearcoatGloss,
    Alpha,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisneyMaterial {
    /// Linear RGB.
    pub base_color: Color3,
    pub metallic: f32,
    pub specular: f32,
    pub specular_tint: f32,
    /// -1 to 1.
    pub anisotropy: f32,
    pub roughness: f32,
    pub clearcoat: f32,
    pub clearcoat_gloss: f32,
    pub alpha: f32,
    maps: HashMap<DisneyParam, TextureMap>,
}

impl Default for DisneyMaterial {
    fn default() -> Self {
        Self {
            base_color: Color3::gray(0.9),
            metallic: 0.0,
            specular: 90.0,
            specular_tint: 0.0,
            anisotropy: 0.0,
            roughness: 40.0,
            clearcoat: 0.0,
            clearcoat_gloss: 0.0,
            alpha: 100.0,
            maps: HashMap::new(),
        }
    }
}

impl DisneyMaterial {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_color(mut self, linear_rgb: Color3) -> Self {
        self.base_color = linear_rgb;
        self
    }

    /// Drive `param` with `map`.
    #[must_use]
    pub fn with_map(mut self, param: DisneyParam, map: TextureMap) -> Self {
        self.maps.insert(param, map);
        self
    }

    pub fn map(&self, param: DisneyParam) -> Option<&TextureMap> {
        self.maps.get(&param)
    }

    fn percent_expr(
        &self,
        assembly: &mut Assembly,
        value: f32,
        param: DisneyParam,
    ) -> Result<String, ProjectError> {
        scalar_expr(assembly, value / 100.0, self.map(param))
    }
}

impl RendererMaterial for DisneyMaterial {
    fn create_material(
        &self,
        assembly: &mut Assembly,
        name: &str,
    ) -> Result<Material, ProjectError> {
        let mut params = ParamArray::new();
        match self.map(DisneyParam::Alpha).and_then(TextureMap::as_bitmap) {
            Some(bitmap) => {
                let instance = insert_texture_and_instance(
                    assembly,
                    bitmap,
                    ParamArray::new(),
                    ParamArray::new().insert("alpha_mode", "detect"),
                )?;
                params.set("alpha_map", instance);
            }
            None => params.set("alpha_map", self.alpha / 100.0),
        }

        // The layer expects sRGB colors.
        let mut layer = disney_layer_default_values();
        layer.set(
            "base_color",
            srgb_color_expr(assembly, self.base_color, self.map(DisneyParam::BaseColor))?,
        );
        layer.set(
            "metallic",
            self.percent_expr(assembly, self.metallic, DisneyParam::Metallic)?,
        );
        layer.set(
            "specular",
            self.percent_expr(assembly, self.specular, DisneyParam::Specular)?,
        );
        layer.set(
            "specular_tint",
            self.percent_expr(assembly, self.specular_tint, DisneyParam::SpecularTint)?,
        );
        layer.set(
            "anisotropic",
            scalar_expr(assembly, self.anisotropy, self.map(DisneyParam::Anisotropy))?,
        );
        layer.set(
            "roughness",
            self.percent_expr(assembly, self.roughness, DisneyParam::Roughness)?,
        );
        layer.set(
            "clearcoat",
            self.percent_expr(assembly, self.clearcoat, DisneyParam::Clearcoat)?,
        );
        layer.set(
            "clearcoat_gloss",
            self.percent_expr(assembly, self.clearcoat_gloss, DisneyParam::ClearcoatGloss)?,
        );

        log::debug!("Created Disney material \"{name}\"");
        Ok(Material::disney(name, params).with_layer(layer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedbridge_core::ParamValue;
    use seedbridge_core::color::linear_rgb_to_srgb;
    use seedbridge_core::material::MaterialModel;
    use seedbridge_core::scene::BaseGroup;

    use crate::expr::color_literal;

    #[test]
    fn defaults_scale_to_unit_range() {
        let mut assembly = Assembly::new("assembly");
        let material = DisneyMaterial::new()
            .create_material(&mut assembly, "plastic")
            .unwrap();

        assert_eq!(material.model(), MaterialModel::Disney);
        assert_eq!(material.params().get("alpha_map"), Some(&ParamValue::Float(1.0)));
        let layer = &material.layers()[0];
        assert_eq!(layer.get_str("specular"), Some("0.9"));
        assert_eq!(layer.get_str("roughness"), Some("0.4"));
        assert_eq!(layer.get_str("metallic"), Some("0"));
        assert_eq!(layer.get_str("anisotropic"), Some("0"));
        assert_eq!(
            layer.get_str("base_color").map(str::to_string),
            Some(color_literal(linear_rgb_to_srgb(Color3::gray(0.9))))
        );
        assert_eq!(layer.get_str("sheen"), Some("0.0"));
        assert!(assembly.textures().is_empty());
    }

    #[test]
    fn anisotropy_is_not_rescaled() {
        let mut assembly = Assembly::new("assembly");
        let material = DisneyMaterial {
            anisotropy: 0.5,
            ..Default::default()
        }
        .create_material(&mut assembly, "brushed")
        .unwrap();
        assert_eq!(material.layers()[0].get_str("anisotropic"), Some("0.5"));
    }

    #[test]
    fn textured_alpha_and_roughness() {
        let mut assembly = Assembly::new("assembly");
        let material = DisneyMaterial::new()
            .with_map(DisneyParam::Alpha, TextureMap::bitmap("leaf_mask", "leaf_mask.png"))
            .with_map(DisneyParam::Roughness, TextureMap::bitmap("rough", "rough.png"))
            .create_material(&mut assembly, "leaf")
            .unwrap();

        assert_eq!(material.params().get_str("alpha_map"), Some("leaf_mask_inst"));
        let alpha_instance = assembly
            .texture_instances()
            .get_by_name("leaf_mask_inst")
            .unwrap();
        assert_eq!(alpha_instance.params().get_str("alpha_mode"), Some("detect"));
        assert_eq!(material.layers()[0].get_str("roughness"), Some("rough_inst"));
        assert_eq!(assembly.textures().len(), 2);
    }
}
