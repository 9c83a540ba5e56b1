use seedbridge_core::color::{Color3, linear_rgb_to_srgb};
use seedbridge_core::entity::make_unique_name;
use seedbridge_core::material::{Material, disney_layer_default_values};
use seedbridge_core::scene::Assembly;
use seedbridge_core::{ParamArray, ProjectError};

use super::BuildContext;
use crate::error::BuildResult;
use crate::expr::{color_literal, scalar_literal};
use crate::host::SceneNode;

/// Name of the material bound to `node`'s instance `instance_name`.
///
/// Renderer-aware host materials are created once per host material and
/// shared. Other host materials get a black placeholder and nodes without
/// a material get a default material in their wire color; both are per
/// instance.
pub(super) fn resolve_material(
    assembly: &mut Assembly,
    node: &dyn SceneNode,
    instance_name: &str,
    ctx: &mut BuildContext,
) -> BuildResult<String> {
    let Some(material) = node.material() else {
        let name = make_unique_name(assembly.materials(), &format!("{instance_name}_mat"));
        add_default_material(assembly, &name, node.wire_color())?;
        return Ok(name);
    };

    let Some(renderer) = material.renderer_material() else {
        let name = make_unique_name(assembly.materials(), &format!("{instance_name}_mat"));
        add_empty_material(assembly, &name)?;
        return Ok(name);
    };

    if let Some(name) = ctx.materials.get(&material.id()) {
        return Ok(name.clone());
    }

    let name = make_unique_name(assembly.materials(), material.name());
    let created = renderer.create_material(assembly, &name)?;
    assembly.insert_material(created)?;
    ctx.materials.insert(material.id(), name.clone());
    Ok(name)
}

/// Insert a material without BSDF, which renders black.
pub(super) fn add_empty_material(assembly: &mut Assembly, name: &str) -> Result<(), ProjectError> {
    log::debug!("Created placeholder material \"{name}\"");
    assembly.insert_material(Material::generic(name))
}

/// Insert a Disney material with base color `linear_rgb`.
pub(super) fn add_default_material(
    assembly: &mut Assembly,
    name: &str,
    linear_rgb: Color3,
) -> Result<(), ProjectError> {
    // The Disney layer expects sRGB colors.
    let mut layer = disney_layer_default_values();
    layer.set("base_color", color_literal(linear_rgb_to_srgb(linear_rgb)));
    layer.set("specular", scalar_literal(1.0));
    layer.set("roughness", scalar_literal(0.625));

    log::debug!("Created default material \"{name}\"");
    assembly.insert_material(Material::disney(name, ParamArray::new()).with_layer(layer))
}
