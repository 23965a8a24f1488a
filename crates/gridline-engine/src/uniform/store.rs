use crate::error::{Error, Result};
use crate::render::DrawSurface;

use super::input::UniformInput;
use super::kind::UniformKind;
use super::uniform::Uniform;

/// Uniforms of one program, kept in declaration order.
#[derive(Debug, Clone, Default)]
pub struct UniformStore {
    uniforms: Vec<Uniform>,
}

impl UniformStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a uniform. Names must be unique within the store.
    pub fn declare(&mut self, name: impl Into<String>, kind: UniformKind) -> Result<&mut Uniform> {
        let uniform = Uniform::new(name, kind)?;
        if self.position(uniform.name()).is_some() {
            return Err(Error::configuration(uniform.name(), "uniform declared twice"));
        }
        self.uniforms.push(uniform);
        let last = self.uniforms.len() - 1;
        Ok(&mut self.uniforms[last])
    }

    pub fn get(&self, name: &str) -> Option<&Uniform> {
        self.position(name).map(|i| &self.uniforms[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Uniform> {
        self.position(name).map(move |i| &mut self.uniforms[i])
    }

    /// Assigns a value to a declared uniform.
    pub fn assign<T: UniformInput + ?Sized>(&mut self, name: &str, input: &T) -> Result<()> {
        let uniform = self
            .get_mut(name)
            .ok_or_else(|| Error::configuration(name, "uniform was never declared"))?;
        uniform.assign(input)?;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Uniform> {
        self.uniforms.iter()
    }

    pub fn len(&self) -> usize {
        self.uniforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uniforms.is_empty()
    }

    /// Applies every uniform; returns how many reached the surface.
    ///
    /// Unresolved or unset uniforms are logged and skipped.
    pub fn apply_all(&self, surface: &mut dyn DrawSurface) -> usize {
        self.uniforms.iter().filter(|u| u.apply(surface)).count()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.uniforms.iter().position(|u| u.name() == name)
    }
}
