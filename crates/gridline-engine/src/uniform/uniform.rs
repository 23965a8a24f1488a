use std::fmt;

use crate::error::{Error, Result};
use crate::render::DrawSurface;

use super::input::{flatten, UniformInput};
use super::kind::{UniformKind, UniformValue};

/// A named uniform and its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    name: String,
    kind: UniformKind,
    value: Option<UniformValue>,
}

impl Uniform {
    /// Declares a uniform. The name must match the shader's uniform field.
    pub fn new(name: impl Into<String>, kind: UniformKind) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::configuration(&name, "uniform name is empty"));
        }
        Ok(Self {
            name,
            kind,
            value: None,
        })
    }

    pub fn float(name: impl Into<String>) -> Result<Self> {
        Self::new(name, UniformKind::Float)
    }

    pub fn vec2(name: impl Into<String>) -> Result<Self> {
        Self::new(name, UniformKind::Vec2)
    }

    pub fn vec3(name: impl Into<String>) -> Result<Self> {
        Self::new(name, UniformKind::Vec3)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> UniformKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> Option<&UniformValue> {
        self.value.as_ref()
    }

    /// Flattens `input`, validates it for this uniform's kind and stores it.
    ///
    /// On error the previous value is kept.
    pub fn assign<T: UniformInput + ?Sized>(&mut self, input: &T) -> Result<&mut Self> {
        let value = self.kind.normalize(&self.name, &flatten(input))?;
        self.value = Some(value);
        Ok(self)
    }

    /// Replaces the value with an already typed one of the same kind.
    pub fn set(&mut self, value: UniformValue) -> Result<&mut Self> {
        if value.kind() != self.kind {
            return Err(Error::type_mismatch(
                &self.name,
                format!("expected {}, got {}", self.kind, value.kind()),
            ));
        }
        let values: Vec<f64> = value.as_slice().iter().map(|&v| f64::from(v)).collect();
        let value = self.kind.normalize(&self.name, &values)?;
        self.value = Some(value);
        Ok(self)
    }

    /// Edits the current value in place, then re-validates it.
    ///
    /// Fails with [`Error::UninitializedData`] if no value was assigned yet.
    /// If the edited value is invalid the previous value is kept.
    pub fn update<F>(&mut self, edit: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut [f32]),
    {
        let mut next = self.value.ok_or_else(|| Error::UninitializedData {
            name: self.name.clone(),
        })?;
        edit(next.as_mut_slice());
        self.set(next)
    }

    /// Writes the value to the surface.
    ///
    /// Returns `false` (after logging a warning) when the surface's program
    /// has no uniform with this name or no value was assigned. Neither stops
    /// the draw.
    pub fn apply(&self, surface: &mut dyn DrawSurface) -> bool {
        let Some(value) = self.value.as_ref() else {
            log::warn!("{self} has no value; skipped");
            return false;
        };
        let Some(location) = surface.uniform_location(&self.name) else {
            log::warn!("unable to locate {self} in the active program");
            return false;
        };
        surface.set_uniform(location, value);
        true
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.kind, self.name)
    }
}
