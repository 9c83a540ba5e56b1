use super::{ObjectState, SceneNode, TimeValue};

/// The renderable nodes of a host scene, in depth-first order.
pub struct SceneEntities<'a> {
    pub objects: Vec<&'a dyn SceneNode>,
    pub lights: Vec<&'a dyn SceneNode>,
}

impl<'a> SceneEntities<'a> {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Walk the trees under `roots` and classify visible nodes by what
    /// they evaluate to at `time`. Hidden nodes are skipped together with
    /// their subtrees.
    pub fn collect(roots: &[&'a dyn SceneNode], time: TimeValue) -> Self {
        let mut entities = Self::new();
        for &root in roots {
            entities.visit(root, time);
        }
        log::debug!(
            "Collected {} objects and {} lights",
            entities.objects.len(),
            entities.lights.len()
        );
        entities
    }

    fn visit(&mut self, node: &'a dyn SceneNode, time: TimeValue) {
        if node.is_hidden() {
            return;
        }
        match node.eval_world_state(time) {
            ObjectState::Geometry(_) => self.objects.push(node),
            ObjectState::Light(_) => self.lights.push(node),
            ObjectState::Other => {}
        }
        for child in node.children() {
            self.visit(child, time);
        }
    }
}

impl Default for SceneEntities<'_> {
    fn default() -> Self {
        Self::new()
    }
}
