//! Renderer settings and how they land in a project configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use seedbridge_core::project::Project;

use crate::error::{BuildError, BuildResult};

/// What to do with a built project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    RenderOnly,
    SaveProjectOnly,
    SaveProjectAndRender,
}

impl OutputMode {
    pub fn saves_project(&self) -> bool {
        matches!(self, Self::SaveProjectOnly | Self::SaveProjectAndRender)
    }

    pub fn renders(&self) -> bool {
        matches!(self, Self::RenderOnly | Self::SaveProjectAndRender)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub mode: OutputMode,
    /// Where the project file goes when the mode saves it.
    pub project_file: Option<PathBuf>,
}

/// Renderer settings, loadable from TOML.
///
/// ```toml
/// pixel_samples = 32
/// gi = true
/// bounces = "unlimited"
///
/// [output]
/// mode = "save_project_and_render"
/// project_file = "out/scene.appleseed"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    pub pixel_samples: u32,
    pub passes: u32,
    /// Global illumination: path tracing when on, direct lighting only
    /// when off.
    pub gi: bool,
    pub caustics: bool,
    /// Maximum bounce count; `None` is unlimited. In TOML, an integer or
    /// `"unlimited"`.
    #[serde(deserialize_with = "deserialize_bounces")]
    pub bounces: Option<u32>,
    pub max_ray_intensity: Option<f32>,
    pub background_emits_light: bool,
    /// Worker thread count; 0 lets the renderer decide.
    pub rendering_threads: u32,
    pub output: OutputSettings,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            pixel_samples: 16,
            passes: 1,
            gi: true,
            caustics: false,
            bounces: Some(8),
            max_ray_intensity: None,
            background_emits_light: true,
            rendering_threads: 0,
            output: OutputSettings::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BounceLimit {
    Count(u32),
    Keyword(String),
}

fn deserialize_bounces<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match BounceLimit::deserialize(deserializer)? {
        BounceLimit::Count(n) => Ok(Some(n)),
        BounceLimit::Keyword(k) if k == "unlimited" => Ok(None),
        BounceLimit::Keyword(k) => Err(serde::de::Error::custom(format!(
            "expected a bounce count or \"unlimited\", found \"{k}\""
        ))),
    }
}

impl RendererSettings {
    /// Parse settings from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> BuildResult<Self> {
        let settings: Self =
            toml::from_str(text).map_err(|e| BuildError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> BuildResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BuildError::Settings(format!("failed to read {}: {e}", path.display()))
        })?;
        let settings = Self::from_toml_str(&content)?;
        log::info!("Loaded renderer settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> BuildResult<()> {
        if self.pixel_samples == 0 {
            return Err(BuildError::Settings("pixel_samples must be at least 1".into()));
        }
        if self.passes == 0 {
            return Err(BuildError::Settings("passes must be at least 1".into()));
        }
        Ok(())
    }

    pub fn lighting_engine(&self) -> &'static str {
        if self.gi { "pt" } else { "drt" }
    }

    /// Write these settings into the project's configuration named
    /// `configuration_name`.
    pub fn apply(&self, project: &mut Project, configuration_name: &str) -> BuildResult<()> {
        self.validate()?;
        let engine = self.lighting_engine();
        let params = project.configuration_mut(configuration_name)?.params_mut();

        params.set_path("uniform_pixel_renderer.samples", self.pixel_samples);
        params.set_path("generic_frame_renderer.passes", self.passes);
        params.set(
            "shading_result_framebuffer",
            if self.passes > 1 { "permanent" } else { "ephemeral" },
        );
        params.set("lighting_engine", engine);

        let max_path_length = self.bounces.map_or(0, |n| i64::from(n) + 1);
        params.set_path(&format!("{engine}.max_path_length"), max_path_length);
        params.set_path("pt.enable_caustics", self.caustics);
        if let Some(max) = self.max_ray_intensity {
            params.set_path(&format!("{engine}.max_ray_intensity"), max);
        }

        if self.rendering_threads == 0 {
            params.set("rendering_threads", "auto");
        } else {
            params.set("rendering_threads", self.rendering_threads);
        }

        log::debug!("Applied renderer settings to configuration \"{configuration_name}\"");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedbridge_core::{ParamValue, ProjectError};

    fn project() -> Project {
        let mut project = Project::new("project");
        project.add_default_configurations().unwrap();
        project
    }

    #[test]
    fn defaults_from_empty_toml() {
        let settings = RendererSettings::from_toml_str("").unwrap();
        assert_eq!(settings, RendererSettings::default());
    }

    #[test]
    fn toml_overrides() {
        let settings = RendererSettings::from_toml_str(
            r#"
            pixel_samples = 4
            gi = false
            bounces = "unlimited"
            max_ray_intensity = 2.5

            [output]
            mode = "save_project_only"
            project_file = "scene.appleseed"
            "#,
        )
        .unwrap();
        assert_eq!(settings.pixel_samples, 4);
        assert!(!settings.gi);
        assert_eq!(settings.bounces, None);
        assert_eq!(settings.max_ray_intensity, Some(2.5));
        assert_eq!(settings.output.mode, OutputMode::SaveProjectOnly);
        assert_eq!(settings.output.project_file, Some(PathBuf::from("scene.appleseed")));
    }

    #[test]
    fn bad_values_are_settings_errors() {
        assert!(matches!(
            RendererSettings::from_toml_str("bounces = \"many\""),
            Err(BuildError::Settings(_))
        ));
        assert!(matches!(
            RendererSettings::from_toml_str("pixel_samples = 0"),
            Err(BuildError::Settings(_))
        ));
    }

    #[test]
    fn apply_writes_final_configuration() {
        let mut project = project();
        RendererSettings::default().apply(&mut project, "final").unwrap();
        let params = project.configuration("final").unwrap().params();
        assert_eq!(
            params.get_path("uniform_pixel_renderer.samples"),
            Some(&ParamValue::Int(16))
        );
        assert_eq!(params.get_str("lighting_engine"), Some("pt"));
        assert_eq!(params.get_path("pt.max_path_length"), Some(&ParamValue::Int(9)));
        assert_eq!(params.get_str("shading_result_framebuffer"), Some("ephemeral"));
        assert_eq!(params.get_str("rendering_threads"), Some("auto"));
        assert!(params.get_path("pt.max_ray_intensity").is_none());
    }

    #[test]
    fn apply_direct_lighting_unlimited() {
        let mut project = project();
        let settings = RendererSettings {
            gi: false,
            bounces: None,
            passes: 4,
            rendering_threads: 8,
            max_ray_intensity: Some(1.0),
            ..Default::default()
        };
        settings.apply(&mut project, "final").unwrap();
        let params = project.configuration("final").unwrap().params();
        assert_eq!(params.get_str("lighting_engine"), Some("drt"));
        assert_eq!(params.get_path("drt.max_path_length"), Some(&ParamValue::Int(0)));
        assert_eq!(params.get_f32("drt.max_ray_intensity"), Some(1.0));
        assert_eq!(params.get_str("shading_result_framebuffer"), Some("permanent"));
        assert_eq!(params.get_path("rendering_threads"), Some(&ParamValue::Int(8)));
    }

    #[test]
    fn apply_to_missing_configuration_fails() {
        let mut project = Project::new("project");
        let err = RendererSettings::default()
            .apply(&mut project, "final")
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::Project(ProjectError::MissingConfiguration(_))
        ));
    }
}
