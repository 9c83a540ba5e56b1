//! Assemblies.

use crate::entity::{Entity, EntityContainer};
use crate::error::ProjectError;
use crate::material::Material;
use crate::mesh::MeshObject;
use crate::params::ParamArray;
use crate::texture::{Texture, TextureInstance};

use super::color::{BaseGroup, ColorEntity};
use super::light::Light;
use super::object::ObjectInstance;

/// A named group of objects, object instances, materials and lights.
///
/// Insertion checks that references held by the inserted entity resolve
/// inside the assembly: object instances need their object and materials,
/// lights need their color.
#[derive(Debug, Clone)]
pub struct Assembly {
    name: String,
    params: ParamArray,
    colors: EntityContainer<ColorEntity>,
    textures: EntityContainer<Texture>,
    texture_instances: EntityContainer<TextureInstance>,
    objects: EntityContainer<MeshObject>,
    object_instances: EntityContainer<ObjectInstance>,
    materials: EntityContainer<Material>,
    lights: EntityContainer<Light>,
}

impl Assembly {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: ParamArray::new(),
            colors: EntityContainer::new("colors"),
            textures: EntityContainer::new("textures"),
            texture_instances: EntityContainer::new("texture instances"),
            objects: EntityContainer::new("objects"),
            object_instances: EntityContainer::new("object instances"),
            materials: EntityContainer::new("materials"),
            lights: EntityContainer::new("lights"),
        }
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    pub fn objects(&self) -> &EntityContainer<MeshObject> {
        &self.objects
    }

    pub fn object_instances(&self) -> &EntityContainer<ObjectInstance> {
        &self.object_instances
    }

    pub fn materials(&self) -> &EntityContainer<Material> {
        &self.materials
    }

    pub fn lights(&self) -> &EntityContainer<Light> {
        &self.lights
    }

    pub fn insert_object(&mut self, object: MeshObject) -> Result<(), ProjectError> {
        self.objects.insert(object)
    }

    pub fn insert_material(&mut self, material: Material) -> Result<(), ProjectError> {
        self.materials.insert(material)
    }

    pub fn insert_object_instance(&mut self, instance: ObjectInstance) -> Result<(), ProjectError> {
        if !self.objects.contains(instance.object()) {
            return Err(ProjectError::UnknownReference {
                kind: "object",
                name: instance.object().to_string(),
                referrer: instance.name().to_string(),
            });
        }
        if let Some(missing) = instance
            .material_names()
            .find(|m| !self.materials.contains(m))
        {
            return Err(ProjectError::UnknownReference {
                kind: "material",
                name: missing.to_string(),
                referrer: instance.name().to_string(),
            });
        }
        self.object_instances.insert(instance)
    }

    pub fn insert_light(&mut self, light: Light) -> Result<(), ProjectError> {
        match light.color_name() {
            Some(color) if self.colors.contains(color) => {}
            other => {
                return Err(ProjectError::UnknownReference {
                    kind: "color",
                    name: other.unwrap_or_default().to_string(),
                    referrer: light.name().to_string(),
                });
            }
        }
        self.lights.insert(light)
    }
}

impl Entity for Assembly {
    fn name(&self) -> &str {
        &self.name
    }
}

impl BaseGroup for Assembly {
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
    use crate::math::{Transform, Vec3};
    use crate::mesh::{MeshObjectBuilder, Triangle};
    use crate::scene::{LightModel, MaterialMappings, insert_color};

    fn triangle_mesh(name: &str) -> MeshObject {
        let mut b = MeshObjectBuilder::new(name);
        b.push_material_slot("material");
        b.push_vertex(Vec3::zeros());
        b.push_vertex(Vec3::x());
        b.push_vertex(Vec3::y());
        b.push_vertex_normal(Vec3::z());
        b.push_triangle(Triangle::new([0, 1, 2], [0, 0, 0], [0, 0, 0], 0));
        b.build().unwrap()
    }

    fn mappings(material: &str) -> MaterialMappings {
        let mut m = MaterialMappings::new();
        m.insert("material".to_string(), material.to_string());
        m
    }

    #[test]
    fn object_instance_requires_object_and_material() {
        let mut assembly = Assembly::new("assembly");
        let instance = ObjectInstance::new(
            "Box001_inst",
            ParamArray::new(),
            "Box001",
            Transform::identity(),
            mappings("m"),
            mappings("m"),
        );

        let err = assembly.insert_object_instance(instance.clone()).unwrap_err();
        assert!(matches!(err, ProjectError::UnknownReference { kind: "object", .. }));

        assembly.insert_object(triangle_mesh("Box001")).unwrap();
        let err = assembly.insert_object_instance(instance.clone()).unwrap_err();
        assert!(matches!(err, ProjectError::UnknownReference { kind: "material", .. }));

        assembly.insert_material(Material::generic("m")).unwrap();
        assembly.insert_object_instance(instance).unwrap();
        assert_eq!(assembly.object_instances().len(), 1);
    }

    #[test]
    fn light_requires_color() {
        let mut assembly = Assembly::new("assembly");
        let light = Light::new(
            "Omni001",
            LightModel::MaxOmni,
            ParamArray::new().insert("intensity", "Omni001_color"),
        );
        assert!(assembly.insert_light(light.clone()).is_err());

        let name = insert_color(&mut assembly, "Omni001_color", Color3::WHITE).unwrap();
        assert_eq!(name, "Omni001_color");
        assembly.insert_light(light).unwrap();
        assert_eq!(assembly.lights().len(), 1);
    }

    #[test]
    fn insert_color_uniquifies() {
        let mut assembly = Assembly::new("assembly");
        let a = insert_color(&mut assembly, "c", Color3::WHITE).unwrap();
        let b = insert_color(&mut assembly, "c", Color3::BLACK).unwrap();
        assert_eq!(a, "c");
        assert_eq!(b, "c_1");
        let color = assembly.colors().get_by_name("c").unwrap();
        assert_eq!(color.color_space(), Some("linear_rgb"));
    }

    #[test]
    fn texture_instance_requires_texture() {
        let mut assembly = Assembly::new("assembly");
        let instance = TextureInstance::new("wood_inst", "wood", ParamArray::new());
        assert!(assembly.insert_texture_instance(instance.clone()).is_err());
        assembly
            .insert_texture(Texture::disk_2d("wood", ParamArray::new()))
            .unwrap();
        assembly.insert_texture_instance(instance).unwrap();
    }
}
