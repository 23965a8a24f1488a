use crate::attribute::VertexPointer;
use crate::uniform::UniformValue;

/// Resolved vertex input slot of the active program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AttributeLocation(pub u32);

/// Resolved field of the active program's uniform block.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformLocation(pub u32);

/// Primitive assembly for a draw call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Topology {
    #[default]
    TriangleStrip,
    TriangleList,
    LineStrip,
    PointList,
}

impl Topology {
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
            Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
            Topology::PointList => wgpu::PrimitiveTopology::PointList,
        }
    }
}

/// What attribute and uniform code needs from a GPU program.
///
/// Name lookups return `None` when the active program has no such input;
/// callers log and carry on.
pub trait DrawSurface {
    /// Replaces the vertex buffer contents.
    fn upload_vertices(&mut self, bytes: &[u8]);

    fn attribute_location(&self, name: &str) -> Option<AttributeLocation>;

    /// Points `location` at a region of the uploaded buffer.
    fn bind_attribute(&mut self, location: AttributeLocation, pointer: &VertexPointer);

    fn uniform_location(&self, name: &str) -> Option<UniformLocation>;

    fn set_uniform(&mut self, location: UniformLocation, value: &UniformValue);

    /// Draws `count` vertices from the bound attributes.
    fn draw(&mut self, count: u32, topology: Topology);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// In-memory surface that records every call.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        attributes: Vec<String>,
        uniforms: Vec<String>,

        pub uploads: Vec<Vec<u8>>,
        pub bindings: Vec<(AttributeLocation, VertexPointer)>,
        pub draws: Vec<(u32, Topology)>,
        writes: Vec<(UniformLocation, UniformValue)>,
    }

    impl RecordingSurface {
        /// Surface whose program declares `attributes` and `uniforms`, in order.
        pub(crate) fn new(attributes: &[&str], uniforms: &[&str]) -> Self {
            Self {
                attributes: attributes.iter().map(|s| s.to_string()).collect(),
                uniforms: uniforms.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        /// Last value written to the uniform called `name`.
        pub(crate) fn uniform(&self, name: &str) -> Option<UniformValue> {
            let location = self.uniform_location(name)?;
            self.writes
                .iter()
                .rev()
                .find(|(l, _)| *l == location)
                .map(|(_, v)| *v)
        }

        pub(crate) fn uniform_writes(&self) -> &[(UniformLocation, UniformValue)] {
            &self.writes
        }
    }

    impl DrawSurface for RecordingSurface {
        fn upload_vertices(&mut self, bytes: &[u8]) {
            self.uploads.push(bytes.to_vec());
        }

        fn attribute_location(&self, name: &str) -> Option<AttributeLocation> {
            self.attributes
                .iter()
                .position(|a| a == name)
                .map(|i| AttributeLocation(i as u32))
        }

        fn bind_attribute(&mut self, location: AttributeLocation, pointer: &VertexPointer) {
            self.bindings.push((location, pointer.clone()));
        }

        fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
            self.uniforms
                .iter()
                .position(|u| u == name)
                .map(|i| UniformLocation(i as u32))
        }

        fn set_uniform(&mut self, location: UniformLocation, value: &UniformValue) {
            self.writes.push((location, *value));
        }

        fn draw(&mut self, count: u32, topology: Topology) {
            self.draws.push((count, topology));
        }
    }
}
