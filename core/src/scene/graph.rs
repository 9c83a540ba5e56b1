//! The scene: assemblies, their instances, camera and environment.

use crate::entity::{Entity, EntityContainer};
use crate::error::ProjectError;
use crate::math::TransformSequence;
use crate::texture::{Texture, TextureInstance};

use super::assembly::Assembly;
use super::camera::Camera;
use super::color::{BaseGroup, ColorEntity};
use super::environment::{Environment, EnvironmentEdf, EnvironmentShader};

/// A placement of an assembly in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyInstance {
    name: String,
    assembly: String,
    transform_sequence: TransformSequence,
}

impl AssemblyInstance {
    pub fn new(name: impl Into<String>, assembly: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assembly: assembly.into(),
            transform_sequence: TransformSequence::new(),
        }
    }

    /// Name of the instantiated assembly.
    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    pub fn transform_sequence(&self) -> &TransformSequence {
        &self.transform_sequence
    }

    pub fn transform_sequence_mut(&mut self) -> &mut TransformSequence {
        &mut self.transform_sequence
    }
}

impl Entity for AssemblyInstance {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Top level of the renderer scene graph.
#[derive(Debug, Clone)]
pub struct Scene {
    colors: EntityContainer<ColorEntity>,
    textures: EntityContainer<Texture>,
    texture_instances: EntityContainer<TextureInstance>,
    assemblies: EntityContainer<Assembly>,
    assembly_instances: EntityContainer<AssemblyInstance>,
    environment_edfs: EntityContainer<EnvironmentEdf>,
    environment_shaders: EntityContainer<EnvironmentShader>,
    environment: Option<Environment>,
    camera: Option<Camera>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            colors: EntityContainer::new("colors"),
            textures: EntityContainer::new("textures"),
            texture_instances: EntityContainer::new("texture instances"),
            assemblies: EntityContainer::new("assemblies"),
            assembly_instances: EntityContainer::new("assembly instances"),
            environment_edfs: EntityContainer::new("environment EDFs"),
            environment_shaders: EntityContainer::new("environment shaders"),
            environment: None,
            camera: None,
        }
    }

    pub fn assemblies(&self) -> &EntityContainer<Assembly> {
        &self.assemblies
    }

    pub fn assembly_instances(&self) -> &EntityContainer<AssemblyInstance> {
        &self.assembly_instances
    }

    pub fn environment_edfs(&self) -> &EntityContainer<EnvironmentEdf> {
        &self.environment_edfs
    }

    pub fn environment_shaders(&self) -> &EntityContainer<EnvironmentShader> {
        &self.environment_shaders
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn insert_assembly(&mut self, assembly: Assembly) -> Result<(), ProjectError> {
        self.assemblies.insert(assembly)
    }

    pub fn insert_assembly_instance(
        &mut self,
        instance: AssemblyInstance,
    ) -> Result<(), ProjectError> {
        self.assembly_instances.insert(instance)
    }

    /// Insert an environment EDF. Its radiance color must be a scene color.
    pub fn insert_environment_edf(&mut self, edf: EnvironmentEdf) -> Result<(), ProjectError> {
        if let Some(radiance) = edf.radiance() {
            if !self.colors.contains(radiance) {
                return Err(ProjectError::UnknownReference {
                    kind: "color",
                    name: radiance.to_string(),
                    referrer: edf.name().to_string(),
                });
            }
        }
        self.environment_edfs.insert(edf)
    }

    /// Insert an environment shader. Its EDF must already be in the scene.
    pub fn insert_environment_shader(
        &mut self,
        shader: EnvironmentShader,
    ) -> Result<(), ProjectError> {
        if let Some(edf) = shader.environment_edf() {
            if !self.environment_edfs.contains(edf) {
                return Err(ProjectError::UnknownReference {
                    kind: "environment EDF",
                    name: edf.to_string(),
                    referrer: shader.name().to_string(),
                });
            }
        }
        self.environment_shaders.insert(shader)
    }

    pub fn set_environment(&mut self, environment: Environment) {
        self.environment = Some(environment);
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    /// Check that every assembly instance and the environment refer to
    /// entities of this scene.
    pub fn validate(&self) -> Result<(), ProjectError> {
        for instance in &self.assembly_instances {
            if !self.assemblies.contains(instance.assembly()) {
                return Err(ProjectError::UnknownReference {
                    kind: "assembly",
                    name: instance.assembly().to_string(),
                    referrer: instance.name().to_string(),
                });
            }
        }
        if let Some(env) = &self.environment {
            if let Some(edf) = env.environment_edf() {
                if !self.environment_edfs.contains(edf) {
                    return Err(ProjectError::UnknownReference {
                        kind: "environment EDF",
                        name: edf.to_string(),
                        referrer: env.name().to_string(),
                    });
                }
            }
            if let Some(shader) = env.environment_shader() {
                if !self.environment_shaders.contains(shader) {
                    return Err(ProjectError::UnknownReference {
                        kind: "environment shader",
                        name: shader.to_string(),
                        referrer: env.name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseGroup for Scene {
    fn colors(&self) -> &EntityContainer<ColorEntity> {
        &self.colors
    }

    fn colors_mut(&mut self) -> &mut EntityContainer<ColorEntity> {
        &mut self.colors
    }

    fn textures(&self) -> &EntityContainer<Texture> {
        &self.textures
    }

    fn textures_mut(&mut self) -> &mut EntityContainer<Texture> {
        &mut self.textures
    }

    fn texture_instances(&self) -> &EntityContainer<TextureInstance> {
        &self.texture_instances
    }

    fn texture_instances_mut(&mut self) -> &mut EntityContainer<TextureInstance> {
        &mut self.texture_instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color3;
    use crate::params::ParamArray;
    use crate::scene::insert_color;

    #[test]
    fn dangling_assembly_instance_fails_validation() {
        let mut scene = Scene::new();
        scene
            .insert_assembly_instance(AssemblyInstance::new("assembly_inst", "assembly"))
            .unwrap();
        assert!(scene.validate().is_err());
        scene.insert_assembly(Assembly::new("assembly")).unwrap();
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn environment_chain_must_resolve() {
        let mut scene = Scene::new();
        let edf = EnvironmentEdf::constant(
            "environment_edf",
            ParamArray::new().insert("radiance", "environment_edf_color"),
        );
        assert!(scene.insert_environment_edf(edf.clone()).is_err());

        insert_color(&mut scene, "environment_edf_color", Color3::gray(0.5)).unwrap();
        scene.insert_environment_edf(edf).unwrap();
        scene
            .insert_environment_shader(EnvironmentShader::edf(
                "environment_shader",
                ParamArray::new().insert("environment_edf", "environment_edf"),
            ))
            .unwrap();

        scene.set_environment(Environment::new(
            "environment",
            ParamArray::new().insert("environment_shader", "missing"),
        ));
        assert!(scene.validate().is_err());

        scene.set_environment(Environment::new(
            "environment",
            ParamArray::new()
                .insert("environment_edf", "environment_edf")
                .insert("environment_shader", "environment_shader"),
        ));
        assert!(scene.validate().is_ok());
    }
}
