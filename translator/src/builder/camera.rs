use seedbridge_core::ParamArray;
use seedbridge_core::math::Transform;
use seedbridge_core::scene::{Camera, CameraModel};

use crate::error::{BuildError, BuildResult};
use crate::host::{OutputSize, Projection, ViewParams};

/// Film width of a parallel view at zoom 1, in scene units.
const VIEW_DEFAULT_WIDTH: f32 = 400.0;

/// Build the camera `camera` looking through the host view.
///
/// The camera transform is the inverse of the view's world to camera
/// transform, keyed at time 0.
pub fn build_camera(view_params: &ViewParams, output: OutputSize) -> BuildResult<Camera> {
    let mut params = ParamArray::new();
    let model = match view_params.projection {
        Projection::Perspective => {
            params.set("film_dimensions", output.as_i32_pair());
            params.set("horizontal_fov", view_params.fov.to_degrees());
            CameraModel::Pinhole
        }
        Projection::Parallel => {
            let film_width = VIEW_DEFAULT_WIDTH * view_params.zoom;
            let film_height = film_width * output.aspect();
            params.set("film_dimensions", [film_width, film_height]);
            CameraModel::Orthographic
        }
    };
    params.set("near_z", -view_params.hither);

    let world_to_camera = Transform::from_local_to_parent(view_params.affine_tm.to_matrix4d());
    let camera_to_world = world_to_camera
        .parent_to_local()
        .ok_or(BuildError::SingularViewTransform)?;

    let mut camera = Camera::new("camera", model, params);
    camera
        .transform_sequence_mut()
        .set_transform(0.0, Transform::from_local_to_parent(camera_to_world));

    log::debug!("Created {} camera", model.model_name());
    Ok(camera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::AffineTm;
    use seedbridge_core::ParamValue;

    #[test]
    fn perspective_camera() {
        let view = ViewParams {
            fov: std::f32::consts::FRAC_PI_2,
            hither: 0.5,
            ..Default::default()
        };
        let camera = build_camera(&view, OutputSize::new(640, 480)).unwrap();
        assert_eq!(camera.model(), CameraModel::Pinhole);
        assert_eq!(
            camera.params().get("film_dimensions"),
            Some(&ParamValue::Int2([640, 480]))
        );
        let fov = camera.params().get_f32("horizontal_fov").unwrap();
        assert!((fov - 90.0).abs() < 1e-4);
        assert_eq!(camera.params().get_f32("near_z"), Some(-0.5));
    }

    #[test]
    fn parallel_camera_film_follows_zoom_and_aspect() {
        let view = ViewParams {
            projection: Projection::Parallel,
            zoom: 0.5,
            ..Default::default()
        };
        let camera = build_camera(&view, OutputSize::new(800, 400)).unwrap();
        assert_eq!(camera.model(), CameraModel::Orthographic);
        assert_eq!(
            camera.params().get("film_dimensions"),
            Some(&ParamValue::Float2([200.0, 100.0]))
        );
    }

    #[test]
    fn transform_is_inverse_of_view() {
        let view = ViewParams {
            affine_tm: AffineTm::from_translation(0.0, 0.0, -10.0),
            ..Default::default()
        };
        let camera = build_camera(&view, OutputSize::new(64, 64)).unwrap();
        let transform = camera.transform_sequence().get_transform(0.0).unwrap();
        assert!((transform.translation().z - 10.0).abs() < 1e-9);
        assert_eq!(camera.transform_sequence().len(), 1);
    }

    #[test]
    fn singular_view_fails() {
        let view = ViewParams {
            affine_tm: AffineTm::zero(),
            ..Default::default()
        };
        assert!(matches!(
            build_camera(&view, OutputSize::new(64, 64)),
            Err(BuildError::SingularViewTransform)
        ));
    }
}
