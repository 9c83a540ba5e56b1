use crate::entity::Entity;
use crate::params::ParamArray;

/// The output frame: resolution, tiling, reconstruction filter and the
/// camera it is rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    name: String,
    params: ParamArray,
}

impl Frame {
    pub fn new(name: impl Into<String>, params: ParamArray) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn params(&self) -> &ParamArray {
        &self.params
    }

    /// Name of the camera the frame is rendered from.
    pub fn camera(&self) -> Option<&str> {
        self.params.get_str("camera")
    }

    pub fn resolution(&self) -> Option<[i32; 2]> {
        match self.params.get("resolution")? {
            crate::params::ParamValue::Int2(r) => Some(*r),
            _ => None,
        }
    }
}

impl Entity for Frame {
    fn name(&self) -> &str {
        &self.name
    }
}
