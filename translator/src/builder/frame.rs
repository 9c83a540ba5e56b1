use seedbridge_core::ParamArray;
use seedbridge_core::entity::Entity;
use seedbridge_core::project::Frame;
use seedbridge_core::scene::Camera;

use super::RenderType;
use crate::host::OutputSize;

/// Build the `beauty` frame rendered through `camera`.
///
/// Material previews use small tiles and a narrow box filter; final
/// renders use large tiles and a Blackman-Harris filter.
pub fn build_frame(camera: &Camera, output: OutputSize, render_type: RenderType) -> Frame {
    let (tile_size, filter, filter_size) = match render_type {
        RenderType::MaterialPreview => ([8, 8], "box", 0.5f32),
        RenderType::Default => ([64, 64], "blackman-harris", 1.5f32),
    };

    Frame::new(
        "beauty",
        ParamArray::new()
            .insert("camera", camera.name())
            .insert("resolution", output.as_i32_pair())
            .insert("tile_size", tile_size)
            .insert("color_space", "linear_rgb")
            .insert("filter", filter)
            .insert("filter_size", filter_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedbridge_core::ParamValue;
    use seedbridge_core::scene::CameraModel;

    fn camera() -> Camera {
        Camera::new("camera", CameraModel::Pinhole, ParamArray::new())
    }

    #[test]
    fn final_frame() {
        let frame = build_frame(&camera(), OutputSize::new(320, 240), RenderType::Default);
        assert_eq!(frame.camera(), Some("camera"));
        assert_eq!(frame.resolution(), Some([320, 240]));
        assert_eq!(frame.params().get("tile_size"), Some(&ParamValue::Int2([64, 64])));
        assert_eq!(frame.params().get_str("filter"), Some("blackman-harris"));
        assert_eq!(frame.params().get_f32("filter_size"), Some(1.5));
    }

    #[test]
    fn preview_frame() {
        let frame = build_frame(&camera(), OutputSize::new(88, 88), RenderType::MaterialPreview);
        assert_eq!(frame.params().get("tile_size"), Some(&ParamValue::Int2([8, 8])));
        assert_eq!(frame.params().get_str("filter"), Some("box"));
        assert_eq!(frame.params().get_f32("filter_size"), Some(0.5));
        assert_eq!(frame.params().get_str("color_space"), Some("linear_rgb"));
    }
}
