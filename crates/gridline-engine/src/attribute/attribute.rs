use crate::error::{Error, Result};

use super::element::ElementType;
use super::synthesis::VertexPointer;

/// Vertex strides and buffer offsets must be multiples of this many bytes.
const VERTEX_ALIGNMENT: u32 = 4;

/// Pointer configuration of an attribute.
///
/// `stride` is the byte distance between consecutive vertices; `0` means
/// tightly packed (`size * unit_size`). `offset` is where the first value
/// starts inside the attribute's own data.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct AttributeMeta {
    /// Components per vertex (1..=4).
    pub size: u32,
    pub normalize: bool,
    pub stride: u32,
    pub offset: u32,
}

impl AttributeMeta {
    #[inline]
    pub const fn new(size: u32) -> Self {
        Self {
            size,
            normalize: false,
            stride: 0,
            offset: 0,
        }
    }

    #[inline]
    pub const fn normalized(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    #[inline]
    pub const fn with_stride(mut self, stride: u32) -> Self {
        self.stride = stride;
        self
    }

    #[inline]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

impl From<u32> for AttributeMeta {
    #[inline]
    fn from(size: u32) -> Self {
        AttributeMeta::new(size)
    }
}

/// One named vertex input and its backing bytes.
///
/// Data is replaced wholesale by the `assign_*` methods; it is never patched
/// in place.
#[derive(Debug, Clone)]
pub struct Attribute {
    name: String,
    element: ElementType,
    meta: AttributeMeta,
    data: Option<Vec<u8>>,
}

impl Attribute {
    /// Declares an attribute.
    ///
    /// Fails with [`Error::Configuration`] for an empty name, a component
    /// count outside 1..=4, a stride or offset that is not a multiple of 4
    /// bytes, or `normalize` on a non-float element (there are no normalized
    /// 32-bit vertex formats).
    pub fn new(
        name: impl Into<String>,
        element: ElementType,
        meta: impl Into<AttributeMeta>,
    ) -> Result<Self> {
        let name = name.into();
        let meta = meta.into();

        if name.trim().is_empty() {
            return Err(Error::configuration(&name, "attribute name is empty"));
        }
        if meta.size == 0 {
            return Err(Error::configuration(&name, "attribute size not defined"));
        }
        if meta.size > 4 {
            return Err(Error::configuration(
                &name,
                format!("attribute size {} exceeds 4 components", meta.size),
            ));
        }
        for (field, bytes) in [("stride", meta.stride), ("offset", meta.offset)] {
            if bytes % VERTEX_ALIGNMENT != 0 {
                return Err(Error::configuration(
                    &name,
                    format!("attribute {field} {bytes} is not a multiple of {VERTEX_ALIGNMENT}"),
                ));
            }
        }
        if meta.normalize && element != ElementType::Float {
            return Err(Error::configuration(
                &name,
                format!("{element:?} attributes cannot be normalized"),
            ));
        }

        Ok(Self {
            name,
            element,
            meta,
            data: None,
        })
    }

    /// Declares an attribute from a textual element type (`"float"`, `"int"`, `"bool"`).
    pub fn with_type_name(
        name: impl Into<String>,
        element: &str,
        meta: impl Into<AttributeMeta>,
    ) -> Result<Self> {
        let name = name.into();
        let element = ElementType::parse(element).ok_or_else(|| {
            Error::configuration(&name, format!("unsupported element type: {element}"))
        })?;
        Self::new(name, element, meta)
    }

    /// Declares a 32-bit float attribute.
    pub fn float32(name: impl Into<String>, meta: impl Into<AttributeMeta>) -> Result<Self> {
        Self::new(name, ElementType::Float, meta)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn element(&self) -> ElementType {
        self.element
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.meta.size
    }

    #[inline]
    pub fn normalize(&self) -> bool {
        self.meta.normalize
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.meta.offset
    }

    /// Effective stride in bytes.
    #[inline]
    pub fn stride(&self) -> u32 {
        if self.meta.stride == 0 {
            self.meta.size * self.element.unit_size()
        } else {
            self.meta.stride
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }

    /// Raw bytes, or [`Error::UninitializedData`] before the first assignment.
    pub fn data(&self) -> Result<&[u8]> {
        self.data.as_deref().ok_or_else(|| Error::UninitializedData {
            name: self.name.clone(),
        })
    }

    pub fn byte_len(&self) -> Result<usize> {
        Ok(self.data()?.len())
    }

    /// Whole vertices available in the data.
    pub fn count(&self) -> Result<u32> {
        let vertices = self.byte_len()? / self.stride() as usize;
        Ok(u32::try_from(vertices).unwrap_or(u32::MAX))
    }

    /// Replaces the data with raw bytes, whatever the element type.
    pub fn assign_bytes(&mut self, bytes: Vec<u8>) -> &mut Self {
        self.data = Some(bytes);
        self
    }

    pub fn assign_f32(&mut self, values: &[f32]) -> Result<&mut Self> {
        self.expect_element(ElementType::Float)?;
        Ok(self.assign_bytes(bytemuck::cast_slice(values).to_vec()))
    }

    pub fn assign_i32(&mut self, values: &[i32]) -> Result<&mut Self> {
        self.expect_element(ElementType::Int)?;
        Ok(self.assign_bytes(bytemuck::cast_slice(values).to_vec()))
    }

    pub fn assign_bool(&mut self, values: &[bool]) -> Result<&mut Self> {
        self.expect_element(ElementType::Bool)?;
        let words: Vec<u32> = values.iter().map(|&b| u32::from(b)).collect();
        Ok(self.assign_bytes(bytemuck::cast_slice(&words).to_vec()))
    }

    /// Pointer for this attribute when its data starts at `base` in the packed buffer.
    pub fn pointer(&self, base: u64) -> VertexPointer {
        VertexPointer {
            name: self.name.clone(),
            components: self.meta.size,
            element: self.element,
            normalize: self.meta.normalize,
            stride: u64::from(self.stride()),
            offset: base + u64::from(self.meta.offset),
        }
    }

    fn expect_element(&self, element: ElementType) -> Result<()> {
        if self.element == element {
            Ok(())
        } else {
            Err(Error::configuration(
                &self.name,
                format!("cannot assign {element:?} data to a {:?} attribute", self.element),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── declaration ───────────────────────────────────────────────────────

    #[test]
    fn bare_size_is_accepted_as_meta() {
        let a = Attribute::float32("vertex", 2).unwrap();
        assert_eq!(a.size(), 2);
        assert!(!a.normalize());
        assert_eq!(a.offset(), 0);
        assert_eq!(a.stride(), 8);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Attribute::float32("", 2).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn missing_size_is_rejected() {
        let err = Attribute::float32("vertex", 0).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn oversized_component_count_is_rejected() {
        assert!(Attribute::float32("vertex", 5).is_err());
    }

    #[test]
    fn unsupported_type_name_is_rejected() {
        let err = Attribute::with_type_name("vertex", "double", 2).unwrap_err();
        match err {
            Error::Configuration { name, reason } => {
                assert_eq!(name, "vertex");
                assert!(reason.contains("double"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            Attribute::with_type_name("flags", "bool", 1).unwrap().element(),
            ElementType::Bool
        );
    }

    #[test]
    fn unaligned_stride_or_offset_is_rejected() {
        let err = Attribute::float32("vertex", AttributeMeta::new(2).with_offset(2)).unwrap_err();
        match err {
            Error::Configuration { name, reason } => {
                assert_eq!(name, "vertex");
                assert!(reason.contains("offset"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(Attribute::float32("vertex", AttributeMeta::new(2).with_stride(10)).is_err());
        let aligned = AttributeMeta::new(2).with_stride(12).with_offset(4);
        assert!(Attribute::float32("vertex", aligned).is_ok());
    }

    #[test]
    fn normalize_is_only_allowed_on_floats() {
        let meta = AttributeMeta::new(2).normalized(true);
        let err = Attribute::new("index", ElementType::Int, meta).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(Attribute::new("flags", ElementType::Bool, meta).is_err());
        assert!(Attribute::float32("color", meta).is_ok());
    }

    #[test]
    fn explicit_stride_overrides_packed_stride() {
        let a = Attribute::float32("vertex", AttributeMeta::new(2).with_stride(16)).unwrap();
        assert_eq!(a.stride(), 16);
    }

    // ── data ──────────────────────────────────────────────────────────────

    #[test]
    fn data_before_assign_is_uninitialized() {
        let a = Attribute::float32("vertex", 2).unwrap();
        assert!(!a.is_initialized());
        assert_eq!(
            a.data().unwrap_err(),
            Error::UninitializedData { name: "vertex".into() }
        );
        assert!(a.count().is_err());
    }

    #[test]
    fn count_floors_partial_vertices() {
        let mut a = Attribute::float32("vertex", 2).unwrap();
        a.assign_f32(&[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(a.byte_len().unwrap(), 20);
        assert_eq!(a.count().unwrap(), 2);
    }

    #[test]
    fn assign_replaces_previous_data() {
        let mut a = Attribute::float32("vertex", 2).unwrap();
        a.assign_f32(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        a.assign_f32(&[5.0, 6.0]).unwrap();
        assert_eq!(a.count().unwrap(), 1);
        assert_eq!(a.data().unwrap(), bytemuck::cast_slice::<f32, u8>(&[5.0, 6.0]));
    }

    #[test]
    fn typed_assign_checks_element_type() {
        let mut a = Attribute::float32("vertex", 2).unwrap();
        assert!(a.assign_i32(&[1, 2]).is_err());
        assert!(!a.is_initialized());
    }

    #[test]
    fn bool_data_is_stored_as_words() {
        let mut a = Attribute::new("flags", ElementType::Bool, 1).unwrap();
        a.assign_bool(&[true, false, true]).unwrap();
        assert_eq!(a.count().unwrap(), 3);
        assert_eq!(a.data().unwrap(), bytemuck::cast_slice::<u32, u8>(&[1, 0, 1]));
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_adds_own_offset_to_base() {
        let a = Attribute::float32(
            "color",
            AttributeMeta::new(3).normalized(true).with_offset(4),
        )
        .unwrap();
        let p = a.pointer(64);
        assert_eq!(p.name, "color");
        assert_eq!(p.components, 3);
        assert!(p.normalize);
        assert_eq!(p.stride, 12);
        assert_eq!(p.offset, 68);
    }
}
