//! The project: scene, output frame and render configurations.

mod configuration;
mod frame;

pub use configuration::Configuration;
pub use frame::Frame;

use crate::entity::{Entity, EntityContainer};
use crate::error::ProjectError;
use crate::scene::Scene;

/// Root of a renderer project.
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    scene: Option<Scene>,
    frame: Option<Frame>,
    configurations: EntityContainer<Configuration>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scene: None,
            frame: None,
            configurations: EntityContainer::new("configurations"),
        }
    }

    /// Add the `base_final` and `base_interactive` configurations and the
    /// user-facing `final` and `interactive` configurations derived from
    /// them.
    pub fn add_default_configurations(&mut self) -> Result<(), ProjectError> {
        self.configurations.insert(
            Configuration::new("base_final").with_params(configuration::base_final_params()),
        )?;
        self.configurations.insert(
            Configuration::new("base_interactive")
                .with_params(configuration::base_interactive_params()),
        )?;
        self.configurations
            .insert(Configuration::new("final").with_base("base_final"))?;
        self.configurations
            .insert(Configuration::new("interactive").with_base("base_interactive"))?;
        Ok(())
    }

    pub fn configurations(&self) -> &EntityContainer<Configuration> {
        &self.configurations
    }

    pub fn configuration(&self, name: &str) -> Option<&Configuration> {
        self.configurations.get_by_name(name)
    }

    /// Mutable access to a configuration; fails if it does not exist.
    pub fn configuration_mut(&mut self, name: &str) -> Result<&mut Configuration, ProjectError> {
        self.configurations
            .get_by_name_mut(name)
            .ok_or_else(|| ProjectError::MissingConfiguration(name.to_string()))
    }

    pub fn insert_configuration(&mut self, configuration: Configuration) -> Result<(), ProjectError> {
        self.configurations.insert(configuration)
    }

    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = Some(frame);
    }

    /// Attach the scene.
    ///
    /// Fails if the scene has dangling references, or if the frame is
    /// already set and names a camera the scene does not have.
    pub fn set_scene(&mut self, scene: Scene) -> Result<(), ProjectError> {
        scene.validate()?;
        if let Some(frame) = &self.frame {
            if let Some(camera) = frame.camera() {
                if scene.camera().map(|c| c.name()) != Some(camera) {
                    return Err(ProjectError::UnknownReference {
                        kind: "camera",
                        name: camera.to_string(),
                        referrer: frame.name().to_string(),
                    });
                }
            }
        }
        self.scene = Some(scene);
        Ok(())
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }
}

impl Entity for Project {
    fn name(&self) -> &str {
        &self.name
    }
}
