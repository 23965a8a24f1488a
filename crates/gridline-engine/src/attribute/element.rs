/// Element type of an attribute's components.
///
/// All element types are stored as 4-byte values; `Bool` uses `0` / `1` as `u32`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ElementType {
    Float,
    Int,
    Bool,
}

impl ElementType {
    /// Size of one component in bytes.
    #[inline]
    pub const fn unit_size(self) -> u32 {
        match self {
            ElementType::Float | ElementType::Int | ElementType::Bool => 4,
        }
    }

    /// Case-insensitive lookup (`"float"`, `"INT"`, `"Bool"`).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "FLOAT" => Some(ElementType::Float),
            "INT" => Some(ElementType::Int),
            "BOOL" => Some(ElementType::Bool),
            _ => None,
        }
    }

    /// Vertex format for `components` elements of this type, if wgpu has one.
    pub fn vertex_format(self, components: u32) -> Option<wgpu::VertexFormat> {
        use wgpu::VertexFormat as F;
        let format = match (self, components) {
            (ElementType::Float, 1) => F::Float32,
            (ElementType::Float, 2) => F::Float32x2,
            (ElementType::Float, 3) => F::Float32x3,
            (ElementType::Float, 4) => F::Float32x4,
            (ElementType::Int, 1) => F::Sint32,
            (ElementType::Int, 2) => F::Sint32x2,
            (ElementType::Int, 3) => F::Sint32x3,
            (ElementType::Int, 4) => F::Sint32x4,
            (ElementType::Bool, 1) => F::Uint32,
            (ElementType::Bool, 2) => F::Uint32x2,
            (ElementType::Bool, 3) => F::Uint32x3,
            (ElementType::Bool, 4) => F::Uint32x4,
            _ => return None,
        };
        Some(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ElementType::parse("float"), Some(ElementType::Float));
        assert_eq!(ElementType::parse("INT"), Some(ElementType::Int));
        assert_eq!(ElementType::parse("Bool"), Some(ElementType::Bool));
        assert_eq!(ElementType::parse("double"), None);
    }

    #[test]
    fn vertex_format_covers_one_to_four_components() {
        assert_eq!(ElementType::Float.vertex_format(2), Some(wgpu::VertexFormat::Float32x2));
        assert_eq!(ElementType::Int.vertex_format(4), Some(wgpu::VertexFormat::Sint32x4));
        assert_eq!(ElementType::Bool.vertex_format(1), Some(wgpu::VertexFormat::Uint32));
        assert_eq!(ElementType::Float.vertex_format(0), None);
        assert_eq!(ElementType::Float.vertex_format(5), None);
    }
}
