use seedbridge_core::entity::make_unique_name;
use seedbridge_core::math::Transform;
use seedbridge_core::scene::{Assembly, MaterialMappings, ObjectInstance};
use seedbridge_core::{ParamArray, ProjectError};

use super::materials::resolve_material;
use super::mesh::{MATERIAL_SLOT, create_mesh_object};
use super::{BuildContext, ObjectInfo, RenderType};
use crate::diagnostics::Diagnostic;
use crate::error::BuildResult;
use crate::host::{ObjectState, SceneNode};

pub(super) fn add_objects(
    assembly: &mut Assembly,
    nodes: &[&dyn SceneNode],
    ctx: &mut BuildContext,
) -> BuildResult<()> {
    for &node in nodes {
        add_object(assembly, node, ctx)?;
    }
    Ok(())
}

/// Instance `node`'s object, translating the object first unless another
/// node already did.
fn add_object(
    assembly: &mut Assembly,
    node: &dyn SceneNode,
    ctx: &mut BuildContext,
) -> BuildResult<()> {
    let object_id = node.object_id();
    let info = match ctx.objects.get(&object_id).cloned() {
        Some(info) => info,
        None => {
            let info = translate_object(assembly, node, ctx)?;
            ctx.objects.insert(object_id, info.clone());
            info
        }
    };

    if info.valid {
        create_object_instance(assembly, node, &info.name, ctx)?;
    }
    Ok(())
}

fn translate_object(
    assembly: &mut Assembly,
    node: &dyn SceneNode,
    ctx: &mut BuildContext,
) -> BuildResult<ObjectInfo> {
    let name = make_unique_name(assembly.objects(), node.name());

    let mesh = match node.eval_world_state(ctx.time) {
        ObjectState::Geometry(geometry) => geometry.to_tri_mesh(ctx.time),
        _ => None,
    };
    let Some(mesh) = mesh else {
        ctx.diagnostics.push(Diagnostic::UnsupportedGeometry {
            node: node.name().to_string(),
        });
        return Ok(ObjectInfo { valid: false, name });
    };

    match create_mesh_object(&name, &mesh) {
        Ok(object) => {
            log::debug!(
                "Created mesh object \"{name}\" with {} triangles",
                object.triangle_count()
            );
            assembly.insert_object(object)?;
            Ok(ObjectInfo { valid: true, name })
        }
        Err(ProjectError::InvalidMesh { reason, .. }) => {
            ctx.diagnostics.push(Diagnostic::MalformedGeometry {
                node: node.name().to_string(),
                reason,
            });
            Ok(ObjectInfo { valid: false, name })
        }
        Err(err) => Err(err.into()),
    }
}

fn create_object_instance(
    assembly: &mut Assembly,
    node: &dyn SceneNode,
    object_name: &str,
    ctx: &mut BuildContext,
) -> BuildResult<()> {
    let instance_name =
        make_unique_name(assembly.object_instances(), &format!("{object_name}_inst"));
    let transform =
        Transform::from_local_to_parent(node.obj_tm_after_wsm(ctx.time).to_matrix4d());

    let material_name = resolve_material(assembly, node, &instance_name, ctx)?;
    let mut mappings = MaterialMappings::new();
    mappings.insert(MATERIAL_SLOT.to_string(), material_name);

    let mut params = ParamArray::new();
    if ctx.render_type == RenderType::MaterialPreview {
        params.set_path("visibility.shadow", false);
    }

    assembly.insert_object_instance(ObjectInstance::new(
        instance_name,
        params,
        object_name,
        transform,
        mappings.clone(),
        mappings,
    ))?;
    Ok(())
}
