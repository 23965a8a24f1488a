use crate::attribute::{synthesize, Attribute};
use crate::error::Result;
use crate::uniform::UniformStore;

use super::surface::{DrawSurface, Topology};

/// Attributes and uniforms of one triangle-strip draw.
///
/// Geometry is synthesized and uploaded only on a full update (or before the
/// first one); every update re-applies the uniforms and issues the draw.
#[derive(Debug, Clone)]
pub struct StripProgram {
    attributes: Vec<Attribute>,
    uniforms: UniformStore,
    topology: Topology,
    count: Option<u32>,
}

impl StripProgram {
    pub fn new(attributes: Vec<Attribute>, uniforms: UniformStore) -> Self {
        Self {
            attributes,
            uniforms,
            topology: Topology::TriangleStrip,
            count: None,
        }
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.iter_mut().find(|a| a.name() == name)
    }

    pub fn uniforms(&self) -> &UniformStore {
        &self.uniforms
    }

    pub fn uniforms_mut(&mut self) -> &mut UniformStore {
        &mut self.uniforms
    }

    /// Vertex count of the last synthesis, if any.
    #[inline]
    pub fn count(&self) -> Option<u32> {
        self.count
    }

    /// Synthesizes the attributes, uploads them and binds every pointer the
    /// surface's program knows. Returns the drawable vertex count.
    ///
    /// Pointers without a matching program input are skipped with a warning.
    pub fn apply(&mut self, surface: &mut dyn DrawSurface) -> Result<u32> {
        let synthesis = synthesize(&self.attributes)?;
        surface.upload_vertices(&synthesis.buffer);

        for pointer in &synthesis.pointers {
            match surface.attribute_location(&pointer.name) {
                Some(location) => surface.bind_attribute(location, pointer),
                None => log::warn!("unable to locate attribute '{}' in the active program", pointer.name),
            }
        }

        log::trace!(
            "synthesized {} attribute(s): {} bytes, {} vertices",
            synthesis.pointers.len(),
            synthesis.buffer.len(),
            synthesis.count
        );

        self.count = Some(synthesis.count);
        Ok(synthesis.count)
    }

    /// Draws one frame.
    ///
    /// Re-synthesizes when `full` is set or nothing was synthesized yet, then
    /// applies every uniform and draws the cached count. Repeated calls with
    /// unchanged inputs issue the same surface calls.
    pub fn update(&mut self, surface: &mut dyn DrawSurface, full: bool) -> Result<u32> {
        let count = match self.count {
            Some(count) if !full => count,
            _ => self.apply(surface)?,
        };

        self.uniforms.apply_all(surface);
        surface.draw(count, self.topology);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::render::testing::RecordingSurface;
    use crate::uniform::{UniformKind, UniformValue};

    fn program() -> StripProgram {
        let mut vertex = Attribute::float32("vertex", 2u32).unwrap();
        vertex
            .assign_f32(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0])
            .unwrap();

        let mut uniforms = UniformStore::new();
        uniforms.declare("scale", UniformKind::Float).unwrap();
        uniforms.declare("offset", UniformKind::Vec2).unwrap();
        uniforms.assign("scale", &1.0f32).unwrap();
        uniforms.assign("offset", &[0.0f32, 0.0]).unwrap();

        StripProgram::new(vec![vertex], uniforms)
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn apply_uploads_and_binds() {
        let mut p = program();
        let mut surface = RecordingSurface::new(&["vertex"], &["scale", "offset"]);

        assert_eq!(p.apply(&mut surface).unwrap(), 4);
        assert_eq!(surface.uploads.len(), 1);
        assert_eq!(surface.uploads[0].len(), 32);
        assert_eq!(surface.bindings.len(), 1);
        assert_eq!(surface.bindings[0].1.name, "vertex");
        assert_eq!(p.count(), Some(4));
    }

    #[test]
    fn unknown_attribute_is_skipped() {
        let mut p = program();
        let mut surface = RecordingSurface::new(&["position"], &[]);
        assert_eq!(p.apply(&mut surface).unwrap(), 4);
        assert!(surface.bindings.is_empty());
    }

    #[test]
    fn apply_propagates_uninitialized_attribute() {
        let weight = Attribute::float32("weight", 1u32).unwrap();
        let mut p = StripProgram::new(vec![weight], UniformStore::new());
        let mut surface = RecordingSurface::new(&["weight"], &[]);

        assert!(matches!(
            p.apply(&mut surface).unwrap_err(),
            Error::UninitializedData { .. }
        ));
        assert!(surface.uploads.is_empty());
        assert_eq!(p.count(), None);
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn first_update_synthesizes_even_without_full() {
        let mut p = program();
        let mut surface = RecordingSurface::new(&["vertex"], &["scale", "offset"]);

        assert_eq!(p.update(&mut surface, false).unwrap(), 4);
        assert_eq!(surface.uploads.len(), 1);
        assert_eq!(surface.draws, vec![(4, Topology::TriangleStrip)]);
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let mut p = program();
        let mut surface = RecordingSurface::new(&["vertex"], &["scale", "offset"]);

        p.update(&mut surface, true).unwrap();
        let writes = surface.uniform_writes().len();
        p.update(&mut surface, false).unwrap();
        p.update(&mut surface, false).unwrap();

        assert_eq!(surface.uploads.len(), 1);
        assert_eq!(surface.uniform_writes().len(), writes * 3);
        assert_eq!(surface.draws, vec![(4, Topology::TriangleStrip); 3]);
    }

    #[test]
    fn full_update_picks_up_new_geometry() {
        let mut p = program();
        let mut surface = RecordingSurface::new(&["vertex"], &["scale", "offset"]);
        p.update(&mut surface, false).unwrap();

        p.attribute_mut("vertex")
            .unwrap()
            .assign_f32(&[0.0, 0.0, 1.0, 1.0])
            .unwrap();
        assert_eq!(p.update(&mut surface, false).unwrap(), 4);
        assert_eq!(p.update(&mut surface, true).unwrap(), 2);
        assert_eq!(surface.uploads.len(), 2);
    }

    #[test]
    fn uniform_changes_reach_the_surface_without_full_update() {
        let mut p = program();
        let mut surface = RecordingSurface::new(&["vertex"], &["scale", "offset"]);
        p.update(&mut surface, true).unwrap();

        p.uniforms_mut().assign("scale", &2.5f32).unwrap();
        p.update(&mut surface, false).unwrap();
        assert_eq!(surface.uniform("scale"), Some(UniformValue::Float(2.5)));
    }
}
