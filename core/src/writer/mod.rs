//! Project file export.
//!
//! - [`project_to_xml`] - The project file text
//! - [`mesh_to_obj`] - One mesh object as Wavefront OBJ
//! - [`mesh_file_names`] - Collision-free OBJ file names for a scene
//! - [`write_project`] - Write both to disk
//!
//! Output is deterministic: entities appear in insertion order and
//! parameters in the order they were set.

mod xml;

pub use xml::escape;

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::entity::Entity;
use crate::error::ProjectError;
use crate::math::{Transform, mat4d_to_rows_array};
use crate::mesh::MeshObject;
use crate::params::{ParamArray, ParamValue};
use crate::project::Project;
use crate::scene::{Assembly, BaseGroup, ObjectInstance, Scene};

use xml::XmlWriter;

/// Format revision written in the project header.
pub const FORMAT_REVISION: u32 = 7;

/// File name used for a mesh object's OBJ file.
///
/// Characters other than ASCII alphanumerics, `-`, `_` and `.` become `_`.
pub fn mesh_file_name(object_name: &str) -> String {
    let stem: String = object_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.obj")
}

/// OBJ file names for every mesh object of `scene`, one list per assembly
/// in assembly order, objects in insertion order.
///
/// Names are unique across the whole scene, compared case-insensitively.
/// A name already taken gets the first free `_N` suffix before `.obj`.
pub fn mesh_file_names(scene: &Scene) -> Vec<Vec<String>> {
    let mut taken = HashSet::new();
    scene
        .assemblies()
        .iter()
        .map(|assembly| {
            assembly
                .objects()
                .iter()
                .map(|object| {
                    let base = mesh_file_name(object.name());
                    let stem = base.strip_suffix(".obj").unwrap_or(&base);
                    let mut candidate = base.clone();
                    let mut counter = 1usize;
                    while !taken.insert(candidate.to_lowercase()) {
                        candidate = format!("{stem}_{counter}.obj");
                        counter += 1;
                    }
                    candidate
                })
                .collect()
        })
        .collect()
}

/// Render the project as project file text.
pub fn project_to_xml(project: &Project) -> String {
    let revision = FORMAT_REVISION.to_string();
    let mut w = XmlWriter::new();
    w.open("project", &[("format_revision", revision.as_str())]);

    if let Some(scene) = project.scene() {
        write_scene(&mut w, scene);
    }

    if let Some(frame) = project.frame() {
        w.open("output", &[]);
        w.open("frame", &[("name", frame.name())]);
        write_params(&mut w, frame.params());
        w.close("frame");
        w.close("output");
    }

    if !project.configurations().is_empty() {
        w.open("configurations", &[]);
        for configuration in project.configurations() {
            let mut attrs = vec![("name", configuration.name())];
            if let Some(base) = configuration.base() {
                attrs.push(("base", base));
            }
            if configuration.params().is_empty() {
                w.empty("configuration", &attrs);
            } else {
                w.open("configuration", &attrs);
                write_params(&mut w, configuration.params());
                w.close("configuration");
            }
        }
        w.close("configurations");
    }

    w.close("project");
    w.finish()
}

fn write_scene(w: &mut XmlWriter, scene: &Scene) {
    w.open("scene", &[]);

    if let Some(camera) = scene.camera() {
        w.open(
            "camera",
            &[("name", camera.name()), ("model", camera.model().model_name())],
        );
        write_params(w, camera.params());
        for (time, transform) in camera.transform_sequence().iter() {
            write_transform(w, Some(*time), transform);
        }
        w.close("camera");
    }

    write_base_group(w, scene);

    for edf in scene.environment_edfs() {
        w.open("environment_edf", &[("name", edf.name()), ("model", edf.model())]);
        write_params(w, edf.params());
        w.close("environment_edf");
    }
    for shader in scene.environment_shaders() {
        w.open(
            "environment_shader",
            &[("name", shader.name()), ("model", shader.model())],
        );
        write_params(w, shader.params());
        w.close("environment_shader");
    }
    if let Some(env) = scene.environment() {
        w.open(
            "environment",
            &[("name", env.name()), ("model", "generic_environment")],
        );
        write_params(w, env.params());
        w.close("environment");
    }

    for (assembly, file_names) in scene.assemblies().iter().zip(mesh_file_names(scene)) {
        write_assembly(w, assembly, &file_names);
    }

    for instance in scene.assembly_instances() {
        w.open(
            "assembly_instance",
            &[("name", instance.name()), ("assembly", instance.assembly())],
        );
        for (time, transform) in instance.transform_sequence().iter() {
            write_transform(w, Some(*time), transform);
        }
        w.close("assembly_instance");
    }

    w.close("scene");
}

fn write_base_group<G: BaseGroup>(w: &mut XmlWriter, group: &G) {
    for color in group.colors() {
        w.open("color", &[("name", color.name())]);
        write_params(w, color.params());
        w.text("values", &color.values().to_string());
        w.close("color");
    }
    for texture in group.textures() {
        w.open("texture", &[("name", texture.name()), ("model", texture.model())]);
        write_params(w, texture.params());
        w.close("texture");
    }
    for instance in group.texture_instances() {
        w.open(
            "texture_instance",
            &[("name", instance.name()), ("texture", instance.texture())],
        );
        write_params(w, instance.params());
        w.close("texture_instance");
    }
}

fn write_assembly(w: &mut XmlWriter, assembly: &Assembly, file_names: &[String]) {
    w.open("assembly", &[("name", assembly.name())]);
    write_params(w, assembly.params());
    write_base_group(w, assembly);

    for material in assembly.materials() {
        w.open(
            "material",
            &[("name", material.name()), ("model", material.model().model_name())],
        );
        write_params(w, material.params());
        for layer in material.layers() {
            let layer_name = layer.get_str("layer_name").unwrap_or("layer");
            w.open("parameters", &[("name", layer_name)]);
            write_params(w, layer);
            w.close("parameters");
        }
        w.close("material");
    }

    for (object, filename) in assembly.objects().iter().zip(file_names) {
        w.open("object", &[("name", object.name()), ("model", "mesh_object")]);
        w.empty("parameter", &[("name", "filename"), ("value", filename.as_str())]);
        write_params(w, object.params());
        w.close("object");
    }

    for instance in assembly.object_instances() {
        write_object_instance(w, instance);
    }

    for light in assembly.lights() {
        w.open(
            "light",
            &[("name", light.name()), ("model", light.model().model_name())],
        );
        write_params(w, light.params());
        write_transform(w, None, light.transform());
        w.close("light");
    }

    w.close("assembly");
}

fn write_object_instance(w: &mut XmlWriter, instance: &ObjectInstance) {
    w.open(
        "object_instance",
        &[("name", instance.name()), ("object", instance.object())],
    );
    write_params(w, instance.params());
    write_transform(w, None, instance.transform());
    for (side, mappings) in [
        ("front", instance.front_materials()),
        ("back", instance.back_materials()),
    ] {
        for (slot, material) in mappings {
            w.empty(
                "assign_material",
                &[("slot", slot.as_str()), ("side", side), ("material", material.as_str())],
            );
        }
    }
    w.close("object_instance");
}

fn write_params(w: &mut XmlWriter, params: &ParamArray) {
    for (key, value) in params.iter() {
        match value {
            ParamValue::Dict(dict) => {
                w.open("parameters", &[("name", key)]);
                write_params(w, dict);
                w.close("parameters");
            }
            other => {
                let text = other.to_string();
                w.empty("parameter", &[("name", key), ("value", text.as_str())]);
            }
        }
    }
}

fn write_transform(w: &mut XmlWriter, time: Option<f64>, transform: &Transform) {
    match time {
        Some(t) => {
            let t = t.to_string();
            w.open("transform", &[("time", t.as_str())]);
        }
        None => w.open("transform", &[]),
    }
    w.open("matrix", &[]);
    for row in mat4d_to_rows_array(transform.local_to_parent()) {
        let line = row
            .iter()
            .map(|v| format!("{v:.15}"))
            .collect::<Vec<_>>()
            .join(" ");
        w.line(&line);
    }
    w.close("matrix");
    w.close("transform");
}

/// Render a mesh object as Wavefront OBJ text.
///
/// Indices are 1-based. Faces use `v/vt/vn` when the mesh has texture
/// coordinates and `v//vn` otherwise.
pub fn mesh_to_obj(mesh: &MeshObject) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", mesh.name());
    let _ = writeln!(out, "o {}", mesh.name());
    for v in mesh.vertices() {
        let _ = writeln!(out, "v {} {} {}", v.x, v.y, v.z);
    }
    for uv in mesh.tex_coords() {
        let _ = writeln!(out, "vt {} {}", uv.x, uv.y);
    }
    for n in mesh.vertex_normals() {
        let _ = writeln!(out, "vn {} {} {}", n.x, n.y, n.z);
    }

    let has_uvs = !mesh.tex_coords().is_empty();
    let mut current_slot = None;
    for tri in mesh.triangles() {
        if current_slot != Some(tri.pa) {
            if let Some(slot) = mesh.material_slots().get(tri.pa as usize) {
                let _ = writeln!(out, "usemtl {slot}");
            }
            current_slot = Some(tri.pa);
        }
        out.push('f');
        for corner in 0..3 {
            let v = tri.v[corner] + 1;
            let n = tri.n[corner] + 1;
            if has_uvs {
                let _ = write!(out, " {v}/{}/{n}", tri.a[corner] + 1);
            } else {
                let _ = write!(out, " {v}//{n}");
            }
        }
        out.push('\n');
    }
    out
}

/// Write the project file to `path` and one OBJ file per mesh object into
/// the same directory.
pub fn write_project(project: &Project, path: &Path) -> Result<(), ProjectError> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    if !directory.as_os_str().is_empty() {
        fs::create_dir_all(directory)?;
    }

    if let Some(scene) = project.scene() {
        let file_names = mesh_file_names(scene);
        for (assembly, file_names) in scene.assemblies().iter().zip(&file_names) {
            for (object, file_name) in assembly.objects().iter().zip(file_names) {
                let obj_path = directory.join(file_name);
                fs::write(&obj_path, mesh_to_obj(object))?;
                log::debug!("Wrote mesh object {} to {}", object.name(), obj_path.display());
            }
        }
    }

    fs::write(path, project_to_xml(project))?;
    log::info!("Wrote project {} to {}", project.name(), path.display());
    Ok(())
}
