//! Host scene to renderer project translation.
//!
//! [`build_project`] walks the collected host entities once, at the
//! request's time, and produces a complete [`Project`]:
//!
//! 1. A project with the default configurations
//! 2. One assembly holding mesh objects and their instances, materials
//!    and lights (or the host's default lights when the scene has none)
//! 3. One identity instance of that assembly
//! 4. The environment, the camera and the `beauty` frame
//! 5. Renderer settings applied to the `final` configuration
//!
//! Geometry and renderer materials shared by several nodes are
//! translated once. Entities that cannot be translated are left out and
//! reported as [`Diagnostic`](crate::Diagnostic)s; structural failures
//! abort the build.

mod camera;
mod environment;
mod frame;
mod lights;
mod materials;
mod mesh;
mod objects;

pub use camera::build_camera;
pub use environment::setup_environment;
pub use frame::build_frame;
pub use mesh::{MATERIAL_SLOT, create_mesh_object};

use std::collections::HashMap;

use seedbridge_core::math::Transform;
use seedbridge_core::project::Project;
use seedbridge_core::scene::{Assembly, AssemblyInstance, BaseGroup, Scene};

use crate::diagnostics::Diagnostics;
use crate::error::{BuildError, BuildResult};
use crate::host::{
    DefaultLight, FrameRendParams, MaterialId, ObjectId, OutputSize, RendParams, SceneEntities,
    TimeValue, ViewParams,
};
use crate::settings::RendererSettings;

/// Name of the configuration renderer settings are applied to.
pub const FINAL_CONFIGURATION: &str = "final";

/// What the project is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderType {
    #[default]
    Default,
    /// A material editor preview swatch.
    MaterialPreview,
}

impl RenderType {
    pub fn from_rend_params(rend_params: &RendParams) -> Self {
        if rend_params.in_mtl_edit {
            Self::MaterialPreview
        } else {
            Self::Default
        }
    }
}

/// Everything a project build reads.
pub struct BuildRequest<'a> {
    pub entities: SceneEntities<'a>,
    /// Used only when `entities` has no lights.
    pub default_lights: Vec<DefaultLight>,
    pub view_params: ViewParams,
    pub rend_params: RendParams,
    pub frame_rend_params: FrameRendParams,
    pub settings: RendererSettings,
    pub output: OutputSize,
    pub time: TimeValue,
}

impl<'a> BuildRequest<'a> {
    /// A request for `entities` rendered at `output` size, at time 0,
    /// with default view, render and frame parameters.
    pub fn new(entities: SceneEntities<'a>, output: OutputSize) -> Self {
        Self {
            entities,
            default_lights: Vec::new(),
            view_params: ViewParams::default(),
            rend_params: RendParams::default(),
            frame_rend_params: FrameRendParams::default(),
            settings: RendererSettings::default(),
            output,
            time: 0,
        }
    }

    #[must_use]
    pub fn with_default_lights(mut self, default_lights: Vec<DefaultLight>) -> Self {
        self.default_lights = default_lights;
        self
    }

    #[must_use]
    pub fn with_view_params(mut self, view_params: ViewParams) -> Self {
        self.view_params = view_params;
        self
    }

    #[must_use]
    pub fn with_rend_params(mut self, rend_params: RendParams) -> Self {
        self.rend_params = rend_params;
        self
    }

    #[must_use]
    pub fn with_frame_rend_params(mut self, frame_rend_params: FrameRendParams) -> Self {
        self.frame_rend_params = frame_rend_params;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RendererSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: TimeValue) -> Self {
        self.time = time;
        self
    }

    pub fn render_type(&self) -> RenderType {
        RenderType::from_rend_params(&self.rend_params)
    }
}

/// A built project and what was left out of it.
#[derive(Debug)]
pub struct BuiltProject {
    pub project: Project,
    pub diagnostics: Diagnostics,
}

/// Outcome of translating one host object.
#[derive(Debug, Clone)]
struct ObjectInfo {
    /// The mesh object was created.
    valid: bool,
    name: String,
}

/// State of one build: translated objects and materials by host
/// identity, and the diagnostics recorded so far.
struct BuildContext {
    render_type: RenderType,
    time: TimeValue,
    objects: HashMap<ObjectId, ObjectInfo>,
    materials: HashMap<MaterialId, String>,
    diagnostics: Diagnostics,
}

impl BuildContext {
    fn new(render_type: RenderType, time: TimeValue) -> Self {
        Self {
            render_type,
            time,
            objects: HashMap::new(),
            materials: HashMap::new(),
            diagnostics: Diagnostics::new(),
        }
    }
}

fn populate_assembly(
    assembly: &mut Assembly,
    request: &BuildRequest<'_>,
    ctx: &mut BuildContext,
) -> BuildResult<()> {
    objects::add_objects(assembly, &request.entities.objects, ctx)?;

    if request.entities.lights.is_empty() {
        lights::add_default_lights(assembly, &request.default_lights, &mut ctx.diagnostics)?;
    } else {
        lights::add_lights(assembly, &request.entities.lights, ctx)?;
    }
    Ok(())
}

/// Translate the host scene described by `request` into a project.
pub fn build_project(request: &BuildRequest<'_>) -> BuildResult<BuiltProject> {
    if !request.output.is_valid() {
        return Err(BuildError::InvalidOutputSize {
            width: request.output.width,
            height: request.output.height,
        });
    }
    let mut ctx = BuildContext::new(request.render_type(), request.time);

    let mut project = Project::new("project");
    project.add_default_configurations()?;

    let mut scene = Scene::new();
    let mut assembly = Assembly::new("assembly");
    populate_assembly(&mut assembly, request, &mut ctx)?;
    log::debug!(
        "Populated assembly: {} objects, {} instances, {} materials, {} lights, {} colors",
        assembly.objects().len(),
        assembly.object_instances().len(),
        assembly.materials().len(),
        assembly.lights().len(),
        assembly.colors().len()
    );

    let summary = (
        assembly.objects().len(),
        assembly.object_instances().len(),
        assembly.materials().len(),
        assembly.lights().len(),
    );

    let mut assembly_instance = AssemblyInstance::new("assembly_inst", "assembly");
    assembly_instance
        .transform_sequence_mut()
        .set_transform(0.0, Transform::identity());
    scene.insert_assembly_instance(assembly_instance)?;
    scene.insert_assembly(assembly)?;

    setup_environment(
        &mut scene,
        request.frame_rend_params.background,
        &request.settings,
    )?;

    let camera = build_camera(&request.view_params, request.output)?;
    let frame = build_frame(&camera, request.output, ctx.render_type);
    scene.set_camera(camera);
    project.set_frame(frame);
    project.set_scene(scene)?;

    request.settings.apply(&mut project, FINAL_CONFIGURATION)?;

    let (objects, instances, materials, lights) = summary;
    log::info!(
        "Built project: {objects} objects, {instances} instances, {materials} materials, {lights} lights, {} diagnostics",
        ctx.diagnostics.len()
    );

    Ok(BuiltProject {
        project,
        diagnostics: ctx.diagnostics,
    })
}
