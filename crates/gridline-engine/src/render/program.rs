use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::uniform::{UniformKind, UniformStore};

use super::surface::{AttributeLocation, UniformLocation};

/// One field of a uniform block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformField {
    pub name: String,
    pub kind: UniformKind,
    /// Byte offset inside the block.
    pub offset: u64,
}

impl UniformField {
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset as usize..(self.offset + self.kind.size()) as usize
    }
}

/// Host-side mirror of a WGSL uniform struct bound at `@group(0) @binding(0)`.
///
/// Fields are laid out in declaration order with WGSL uniform alignment; the
/// block size is rounded up to 16 bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniformBlockLayout {
    fields: Vec<UniformField>,
    size: u64,
}

impl UniformBlockLayout {
    pub fn new<'a, I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, UniformKind)>,
    {
        let mut layout = Self::default();
        let mut cursor = 0u64;

        for (name, kind) in fields {
            if name.is_empty() {
                return Err(Error::configuration(name, "uniform field name is empty"));
            }
            if layout.fields.iter().any(|f| f.name == name) {
                return Err(Error::configuration(name, "uniform field declared twice"));
            }

            let offset = cursor.next_multiple_of(kind.align());
            cursor = offset + kind.size();
            layout.fields.push(UniformField {
                name: name.to_string(),
                kind,
                offset,
            });
        }

        layout.size = cursor.next_multiple_of(16);
        Ok(layout)
    }

    /// Layout matching the store's declarations, in declaration order.
    pub fn from_store(store: &UniformStore) -> Result<Self> {
        Self::new(store.iter().map(|u| (u.name(), u.kind())))
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[UniformField] {
        &self.fields
    }

    pub fn location(&self, name: &str) -> Option<UniformLocation> {
        self.fields
            .iter()
            .position(|f| f.name == name)
            .map(|i| UniformLocation(i as u32))
    }

    pub fn field(&self, location: UniformLocation) -> Option<&UniformField> {
        self.fields.get(location.0 as usize)
    }
}

/// Everything needed to build a pipeline for one WGSL program.
///
/// The shader must expose `vs_main` / `fs_main`; vertex inputs are matched by
/// name to their `@location`, uniforms by name to fields of the block.
#[derive(Debug, Clone)]
pub struct ProgramLayout {
    pub label: String,
    pub source: Cow<'static, str>,
    attributes: Vec<(String, u32)>,
    uniforms: UniformBlockLayout,
}

impl ProgramLayout {
    pub fn new(
        label: impl Into<String>,
        source: impl Into<Cow<'static, str>>,
        uniforms: UniformBlockLayout,
    ) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            attributes: Vec::new(),
            uniforms,
        }
    }

    /// Declares the vertex input `name` at `@location(location)`.
    pub fn with_attribute(mut self, name: impl Into<String>, location: u32) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::configuration(&name, "attribute name is empty"));
        }
        if let Some((other, _)) = self.attributes.iter().find(|(n, l)| *n == name || *l == location) {
            return Err(Error::configuration(
                &name,
                format!("location {location} clashes with '{other}'"),
            ));
        }
        self.attributes.push((name, location));
        Ok(self)
    }

    pub fn attribute_location(&self, name: &str) -> Option<AttributeLocation> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, l)| AttributeLocation(*l))
    }

    #[inline]
    pub fn uniforms(&self) -> &UniformBlockLayout {
        &self.uniforms
    }
}
