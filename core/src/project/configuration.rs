use crate::entity::Entity;
use crate::params::ParamArray;

/// A named set of renderer parameters, optionally inheriting from a base
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    name: String,
    base: Option<String>,
    params: ParamArray,
}

impl Configuration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            params: ParamArray::new(),
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: ParamArray) -> Self {
        self.params = params;
        self
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ParamArray {
        &mut self.params
    }
}

impl Entity for Configuration {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Parameters of the built-in final-render base configuration.
pub(super) fn base_final_params() -> ParamArray {
    ParamArray::new()
        .insert("frame_renderer", "generic")
        .insert("tile_renderer", "generic")
        .insert("pixel_renderer", "uniform")
        .insert("sample_renderer", "generic")
        .insert("lighting_engine", "pt")
        .insert("shading_result_framebuffer", "ephemeral")
        .insert_path("generic_frame_renderer.passes", 1)
        .insert_path("uniform_pixel_renderer.samples", 64)
}

/// Parameters of the built-in interactive base configuration.
pub(super) fn base_interactive_params() -> ParamArray {
    ParamArray::new()
        .insert("frame_renderer", "progressive")
        .insert("sample_generator", "generic")
        .insert("sample_renderer", "generic")
        .insert("lighting_engine", "pt")
}
