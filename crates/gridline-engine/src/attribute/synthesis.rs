use std::borrow::Cow;

use crate::error::Result;

use super::attribute::Attribute;
use super::element::ElementType;

/// Where and how to read one attribute out of a packed vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexPointer {
    pub name: String,
    pub components: u32,
    pub element: ElementType,
    pub normalize: bool,
    /// Bytes between consecutive vertices.
    pub stride: u64,
    /// Byte offset of the first vertex inside the packed buffer.
    pub offset: u64,
}

impl VertexPointer {
    #[inline]
    pub fn vertex_format(&self) -> Option<wgpu::VertexFormat> {
        self.element.vertex_format(self.components)
    }
}

/// Result of packing a set of attributes.
#[derive(Debug, Clone)]
pub struct Synthesis<'a> {
    /// Packed bytes. Borrowed when a single attribute is packed.
    pub buffer: Cow<'a, [u8]>,
    /// One pointer per attribute, in input order.
    pub pointers: Vec<VertexPointer>,
    /// Vertices drawable from every attribute.
    pub count: u32,
}

impl Synthesis<'_> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Packs `attributes` into one buffer.
///
/// - An empty set yields an empty buffer and a count of 0.
/// - Every attribute must hold data, otherwise [`Error::UninitializedData`].
/// - A single attribute is used as-is (no copy).
/// - Several attributes are copied back to back in input order; each pointer
///   offset is the attribute's base in the packed buffer plus its own offset.
///
/// The shared count is the minimum of the per-attribute counts. Attributes
/// with more data than the shortest one are silently under-read; this is what
/// lets a shorter per-instance style attribute sit next to a longer one.
///
/// [`Error::UninitializedData`]: crate::error::Error::UninitializedData
pub fn synthesize(attributes: &[Attribute]) -> Result<Synthesis<'_>> {
    for attr in attributes {
        attr.data()?;
    }

    match attributes {
        [] => Ok(Synthesis {
            buffer: Cow::Borrowed(&[]),
            pointers: Vec::new(),
            count: 0,
        }),

        [only] => Ok(Synthesis {
            buffer: Cow::Borrowed(only.data()?),
            pointers: vec![only.pointer(0)],
            count: only.count()?,
        }),

        many => {
            let mut total = 0usize;
            for attr in many {
                total += attr.byte_len()?;
            }

            let mut buffer = Vec::with_capacity(total);
            let mut pointers = Vec::with_capacity(many.len());
            let mut count = u32::MAX;

            for attr in many {
                let base = buffer.len() as u64;
                buffer.extend_from_slice(attr.data()?);
                pointers.push(attr.pointer(base));
                count = count.min(attr.count()?);
            }

            log::trace!(
                "packed {} attributes into {} bytes ({} vertices)",
                many.len(),
                buffer.len(),
                count
            );

            Ok(Synthesis {
                buffer: Cow::Owned(buffer),
                pointers,
                count,
            })
        }
    }
}
