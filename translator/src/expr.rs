//! Material parameter expressions.
//!
//! A parameter is either a literal or the name of a texture instance.
//! When a bitmap is bound the texture and its instance are inserted into
//! the target group and the instance name is returned; otherwise the
//! value is formatted as a literal. Procedural maps fall back to the
//! literal.

use seedbridge_core::color::{Color3, linear_rgb_to_srgb};
use seedbridge_core::scene::BaseGroup;
use seedbridge_core::{ParamArray, ProjectError};

use crate::texture::{TextureMap, insert_texture_and_instance};

/// Format a scalar literal.
pub fn scalar_literal(value: f32) -> String {
    format!("{value}")
}

/// Format a color literal as `[r, g, b]`.
pub fn color_literal(color: Color3) -> String {
    format!("[{}, {}, {}]", color.r, color.g, color.b)
}

fn bound_texture<G: BaseGroup + ?Sized>(
    group: &mut G,
    map: Option<&TextureMap>,
) -> Result<Option<String>, ProjectError> {
    match map.and_then(TextureMap::as_bitmap) {
        Some(bitmap) => insert_texture_and_instance(
            group,
            bitmap,
            ParamArray::new(),
            ParamArray::new(),
        )
        .map(Some),
        None => Ok(None),
    }
}

/// Expression for a scalar parameter.
pub fn scalar_expr<G: BaseGroup + ?Sized>(
    group: &mut G,
    value: f32,
    map: Option<&TextureMap>,
) -> Result<String, ProjectError> {
    Ok(bound_texture(group, map)?.unwrap_or_else(|| scalar_literal(value)))
}

/// Expression for a color parameter of a model that expects sRGB input.
///
/// `linear_rgb` is converted to sRGB for the literal; bound textures are
/// used as they are.
pub fn srgb_color_expr<G: BaseGroup + ?Sized>(
    group: &mut G,
    linear_rgb: Color3,
    map: Option<&TextureMap>,
) -> Result<String, ProjectError> {
    Ok(bound_texture(group, map)?
        .unwrap_or_else(|| color_literal(linear_rgb_to_srgb(linear_rgb))))
}
