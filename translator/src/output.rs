//! What happens to a built project.

use seedbridge_core::project::Project;
use seedbridge_core::writer::write_project;

use crate::error::{BuildError, BuildResult};
use crate::settings::RendererSettings;

/// Save `project` if the output mode of `settings` asks for it.
///
/// Returns whether the caller should go on and render.
pub fn handle_output(project: &Project, settings: &RendererSettings) -> BuildResult<bool> {
    let output = &settings.output;
    if output.mode.saves_project() {
        let path = output
            .project_file
            .as_deref()
            .ok_or(BuildError::MissingProjectPath)?;
        write_project(project, path)?;
    }
    Ok(output.mode.renders())
}
