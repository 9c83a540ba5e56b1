//! Host texture maps and their renderer textures.

use std::path::{Path, PathBuf};

use seedbridge_core::entity::make_unique_name;
use seedbridge_core::scene::BaseGroup;
use seedbridge_core::texture::{Texture, TextureInstance};
use seedbridge_core::{ParamArray, ProjectError};

/// An image file texture.
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapTexture {
    pub name: String,
    pub path: PathBuf,
}

/// A texture map bound to a material parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum TextureMap {
    Bitmap(BitmapTexture),
    /// A procedural map (noise, checker, ...). These have no renderer
    /// counterpart.
    Procedural { name: String, class: String },
}

impl TextureMap {
    pub fn bitmap(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Bitmap(BitmapTexture {
            name: name.into(),
            path: path.into(),
        })
    }

    pub fn procedural(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self::Procedural {
            name: name.into(),
            class: class.into(),
        }
    }

    /// The bitmap, if this map is one.
    pub fn as_bitmap(&self) -> Option<&BitmapTexture> {
        match self {
            Self::Bitmap(bitmap) => Some(bitmap),
            Self::Procedural { .. } => None,
        }
    }
}

/// Color space of an image file: OpenEXR is linear, everything else sRGB.
pub fn color_space_for(path: &Path) -> &'static str {
    let is_exr = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("exr"));
    if is_exr { "linear_rgb" } else { "srgb" }
}

/// Insert a disk texture for `bitmap` and an instance of it into `group`.
///
/// `color_space` and `filename` are filled in unless `texture_params`
/// already sets them. Returns the texture instance name.
pub fn insert_texture_and_instance<G: BaseGroup + ?Sized>(
    group: &mut G,
    bitmap: &BitmapTexture,
    mut texture_params: ParamArray,
    instance_params: ParamArray,
) -> Result<String, ProjectError> {
    if !texture_params.contains("color_space") {
        texture_params.set("color_space", color_space_for(&bitmap.path));
    }
    if !texture_params.contains("filename") {
        texture_params.set("filename", bitmap.path.to_string_lossy().into_owned());
    }

    let texture_name = make_unique_name(group.textures(), &bitmap.name);
    group.insert_texture(Texture::disk_2d(texture_name.clone(), texture_params))?;

    let instance_name =
        make_unique_name(group.texture_instances(), &format!("{texture_name}_inst"));
    group.insert_texture_instance(TextureInstance::new(
        instance_name.clone(),
        texture_name,
        instance_params,
    ))?;

    Ok(instance_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedbridge_core::scene::Assembly;

    #[test]
    fn color_space_by_extension() {
        assert_eq!(color_space_for(Path::new("sky.EXR")), "linear_rgb");
        assert_eq!(color_space_for(Path::new("wood.png")), "srgb");
        assert_eq!(color_space_for(Path::new("noext")), "srgb");
    }

    #[test]
    fn inserts_texture_and_instance() {
        let mut assembly = Assembly::new("assembly");
        let TextureMap::Bitmap(wood) = TextureMap::bitmap("wood", "maps/wood.png") else {
            unreachable!()
        };
        let first =
            insert_texture_and_instance(&mut assembly, &wood, ParamArray::new(), ParamArray::new())
                .unwrap();
        let second = insert_texture_and_instance(
            &mut assembly,
            &wood,
            ParamArray::new(),
            ParamArray::new().insert("alpha_mode", "detect"),
        )
        .unwrap();

        assert_eq!(first, "wood_inst");
        assert_eq!(second, "wood_1_inst");
        let texture = assembly.textures().get_by_name("wood").unwrap();
        assert_eq!(texture.filename(), Some("maps/wood.png"));
        assert_eq!(texture.params().get_str("color_space"), Some("srgb"));
        let instance = assembly.texture_instances().get_by_name("wood_1_inst").unwrap();
        assert_eq!(instance.texture(), "wood_1");
        assert_eq!(instance.params().get_str("alpha_mode"), Some("detect"));
    }

    #[test]
    fn procedural_maps_are_not_bitmaps() {
        assert!(TextureMap::procedural("noise", "Noise").as_bitmap().is_none());
    }
}
