use seedbridge_core::ParamArray;
use seedbridge_core::color::Color3;
use seedbridge_core::scene::{
    Environment, EnvironmentEdf, EnvironmentShader, Scene, insert_color,
};

use crate::error::BuildResult;
use crate::settings::RendererSettings;

/// Set the scene's environment from the host background color.
///
/// A black background gives an environment without emission. Any other
/// color becomes a constant environment EDF seen through an EDF shader;
/// the EDF also lights the scene when the settings say the background
/// emits light.
pub fn setup_environment(
    scene: &mut Scene,
    background: Color3,
    settings: &RendererSettings,
) -> BuildResult<()> {
    let background = background.clamp_low(0.0);

    if background.is_zero() {
        scene.set_environment(Environment::new("environment", ParamArray::new()));
        log::debug!("Black background, environment without emission");
        return Ok(());
    }

    let color_name = insert_color(scene, "environment_edf_color", background)?;
    scene.insert_environment_edf(EnvironmentEdf::constant(
        "environment_edf",
        ParamArray::new().insert("radiance", color_name),
    ))?;
    scene.insert_environment_shader(EnvironmentShader::edf(
        "environment_shader",
        ParamArray::new().insert("environment_edf", "environment_edf"),
    ))?;

    let mut params = ParamArray::new();
    if settings.background_emits_light {
        params.set("environment_edf", "environment_edf");
    }
    params.set("environment_shader", "environment_shader");
    scene.set_environment(Environment::new("environment", params));

    log::debug!(
        "Constant environment {background}, emits light: {}",
        settings.background_emits_light
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedbridge_core::scene::BaseGroup;

    #[test]
    fn negative_background_is_black() {
        let mut scene = Scene::new();
        setup_environment(
            &mut scene,
            Color3::new(-0.5, 0.0, -1.0),
            &RendererSettings::default(),
        )
        .unwrap();
        let environment = scene.environment().unwrap();
        assert!(environment.params().is_empty());
        assert!(scene.colors().is_empty());
        assert!(scene.environment_edfs().is_empty());
    }

    #[test]
    fn emitting_background_binds_edf_and_shader() {
        let mut scene = Scene::new();
        setup_environment(&mut scene, Color3::gray(0.2), &RendererSettings::default()).unwrap();
        let environment = scene.environment().unwrap();
        assert_eq!(environment.environment_edf(), Some("environment_edf"));
        assert_eq!(environment.environment_shader(), Some("environment_shader"));
        let edf = scene.environment_edfs().get_by_name("environment_edf").unwrap();
        assert_eq!(edf.radiance(), Some("environment_edf_color"));
        scene.validate().unwrap();
    }

    #[test]
    fn visible_only_background_binds_shader() {
        let mut scene = Scene::new();
        let settings = RendererSettings {
            background_emits_light: false,
            ..Default::default()
        };
        setup_environment(&mut scene, Color3::gray(0.2), &settings).unwrap();
        let environment = scene.environment().unwrap();
        assert_eq!(environment.environment_edf(), None);
        assert_eq!(environment.environment_shader(), Some("environment_shader"));
        assert_eq!(scene.environment_edfs().len(), 1);
    }
}
