//! Host lights and default lights to renderer lights.
//!
//! Host intensities are photometric; the renderer's multipliers are
//! radiometric, hence the factor of pi.

use std::f32::consts::PI;

use seedbridge_core::ParamArray;
use seedbridge_core::color::Color3;
use seedbridge_core::entity::make_unique_name;
use seedbridge_core::math::Transform;
use seedbridge_core::scene::{Assembly, Light, LightModel, insert_color};

use super::BuildContext;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::BuildResult;
use crate::host::{DefaultLight, DefaultLightKind, LightKind, ObjectState, SceneNode};

/// Parameters shared by every light kind.
struct LightParams {
    kind: LightKind,
    intensity: f32,
    hotspot: f32,
    falloff: f32,
    decay_start: f32,
    decay_exponent: i32,
}

fn light_entity(name: &str, transform: Transform, color_name: &str, p: &LightParams) -> Light {
    let (model, params) = match p.kind {
        LightKind::Omni => (
            LightModel::MaxOmni,
            ParamArray::new()
                .insert("intensity", color_name)
                .insert("intensity_multiplier", p.intensity * PI)
                .insert("decay_start", p.decay_start)
                .insert("decay_exponent", p.decay_exponent),
        ),
        LightKind::Spot => (
            LightModel::MaxSpot,
            ParamArray::new()
                .insert("intensity", color_name)
                .insert("intensity_multiplier", p.intensity * PI)
                .insert("inner_angle", p.hotspot)
                .insert("outer_angle", p.falloff)
                .insert("decay_start", p.decay_start)
                .insert("decay_exponent", p.decay_exponent),
        ),
        LightKind::Directional => (
            LightModel::Directional,
            ParamArray::new()
                .insert("irradiance", color_name)
                .insert("irradiance_multiplier", p.intensity * PI),
        ),
    };
    Light::new(name, model, params).with_transform(transform)
}

fn insert_light(
    assembly: &mut Assembly,
    name: &str,
    transform: Transform,
    color: Color3,
    params: &LightParams,
) -> BuildResult<()> {
    let color_name = insert_color(assembly, &format!("{name}_color"), color)?;
    assembly.insert_light(light_entity(name, transform, &color_name, params))?;
    log::debug!("Created {:?} light \"{name}\"", params.kind);
    Ok(())
}

/// Translate the scene's light nodes. Lights of unsupported classes are
/// reported and skipped.
pub(super) fn add_lights(
    assembly: &mut Assembly,
    nodes: &[&dyn SceneNode],
    ctx: &mut BuildContext,
) -> BuildResult<()> {
    let time = ctx.time;
    for &node in nodes {
        let ObjectState::Light(light) = node.eval_world_state(time) else {
            log::debug!("Node \"{}\" no longer evaluates to a light", node.name());
            continue;
        };

        let class = light.class();
        let Some(kind) = class.kind() else {
            ctx.diagnostics.push(Diagnostic::UnsupportedLight {
                node: node.name().to_string(),
                class: class.to_string(),
            });
            continue;
        };

        let name = make_unique_name(assembly.lights(), node.name());
        let transform =
            Transform::from_local_to_parent(node.obj_tm_after_wsm(time).to_matrix4d());
        let params = LightParams {
            kind,
            intensity: light.intensity(time),
            hotspot: light.hotspot(time),
            falloff: light.falloff(time),
            decay_start: light.decay_radius(time),
            decay_exponent: light.decay_type(),
        };
        insert_light(assembly, &name, transform, light.rgb_color(time), &params)?;
    }
    Ok(())
}

fn default_light_kind(kind: DefaultLightKind) -> Option<LightKind> {
    match kind {
        DefaultLightKind::Omni => Some(LightKind::Omni),
        DefaultLightKind::Spot => Some(LightKind::Spot),
        DefaultLightKind::Directional => Some(LightKind::Directional),
        DefaultLightKind::Ambient => None,
    }
}

/// Translate the host's default lights, named `DefaultLight`,
/// `DefaultLight_1`, ... An all-zero placement means identity. Ambient
/// default lights are not translated.
pub(super) fn add_default_lights(
    assembly: &mut Assembly,
    default_lights: &[DefaultLight],
    diagnostics: &mut Diagnostics,
) -> BuildResult<()> {
    for (index, light) in default_lights.iter().enumerate() {
        let Some(kind) = default_light_kind(light.kind) else {
            diagnostics.push(Diagnostic::UnhandledDefaultLight {
                index,
                kind: light.kind,
            });
            continue;
        };

        let transform = if light.tm.is_zero() {
            Transform::identity()
        } else {
            Transform::from_local_to_parent(light.tm.to_matrix4d())
        };
        let name = make_unique_name(assembly.lights(), "DefaultLight");
        let params = LightParams {
            kind,
            intensity: light.intensity,
            hotspot: light.hotspot,
            falloff: light.falloff,
            decay_start: 0.0,
            decay_exponent: 0,
        };
        insert_light(assembly, &name, transform, light.color, &params)?;
    }
    Ok(())
}
