use std::fmt;

use crate::error::{Error, Result};

/// Declared type of a uniform.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UniformKind {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl UniformKind {
    /// Number of components a value of this kind holds.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            UniformKind::Float => 1,
            UniformKind::Vec2 => 2,
            UniformKind::Vec3 => 3,
            UniformKind::Vec4 => 4,
            UniformKind::Mat2 => 4,
            UniformKind::Mat3 => 9,
            UniformKind::Mat4 => 16,
        }
    }

    /// WGSL uniform-address-space alignment in bytes.
    #[inline]
    pub const fn align(self) -> u64 {
        match self {
            UniformKind::Float => 4,
            UniformKind::Vec2 | UniformKind::Mat2 => 8,
            UniformKind::Vec3 | UniformKind::Vec4 | UniformKind::Mat3 | UniformKind::Mat4 => 16,
        }
    }

    /// WGSL size in bytes (mat3 columns are padded to 16 bytes).
    #[inline]
    pub const fn size(self) -> u64 {
        match self {
            UniformKind::Float => 4,
            UniformKind::Vec2 => 8,
            UniformKind::Vec3 => 12,
            UniformKind::Vec4 | UniformKind::Mat2 => 16,
            UniformKind::Mat3 => 48,
            UniformKind::Mat4 => 64,
        }
    }

    /// Validates a flattened input for this kind.
    ///
    /// - `Float`: exactly one value; NaN is a type mismatch.
    /// - vectors / matrices: extra values are dropped, missing ones are an
    ///   arity error, NaN components are a NaN error.
    pub(crate) fn normalize(self, name: &str, values: &[f64]) -> Result<UniformValue> {
        let arity = self.arity();

        if self == UniformKind::Float {
            if values.len() != 1 {
                return Err(Error::Arity {
                    name: name.to_string(),
                    expected: 1,
                    found: values.len(),
                });
            }
            if values[0].is_nan() {
                return Err(Error::type_mismatch(name, "NaN is not a number"));
            }
            return Ok(UniformValue::Float(values[0] as f32));
        }

        let values = &values[..values.len().min(arity)];
        if values.len() < arity {
            return Err(Error::Arity {
                name: name.to_string(),
                expected: arity,
                found: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| v.is_nan()) {
            return Err(Error::NaN {
                name: name.to_string(),
                index,
            });
        }

        let mut out = UniformValue::zeroed(self);
        for (dst, src) in out.as_mut_slice().iter_mut().zip(values) {
            *dst = *src as f32;
        }
        Ok(out)
    }
}

impl fmt::Display for UniformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A validated uniform value. Matrices are column-major.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Mat2([f32; 4]),
    Mat3([f32; 9]),
    Mat4([f32; 16]),
}

impl UniformValue {
    pub fn zeroed(kind: UniformKind) -> Self {
        match kind {
            UniformKind::Float => UniformValue::Float(0.0),
            UniformKind::Vec2 => UniformValue::Vec2([0.0; 2]),
            UniformKind::Vec3 => UniformValue::Vec3([0.0; 3]),
            UniformKind::Vec4 => UniformValue::Vec4([0.0; 4]),
            UniformKind::Mat2 => UniformValue::Mat2([0.0; 4]),
            UniformKind::Mat3 => UniformValue::Mat3([0.0; 9]),
            UniformKind::Mat4 => UniformValue::Mat4([0.0; 16]),
        }
    }

    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Float(_) => UniformKind::Float,
            UniformValue::Vec2(_) => UniformKind::Vec2,
            UniformValue::Vec3(_) => UniformKind::Vec3,
            UniformValue::Vec4(_) => UniformKind::Vec4,
            UniformValue::Mat2(_) => UniformKind::Mat2,
            UniformValue::Mat3(_) => UniformKind::Mat3,
            UniformValue::Mat4(_) => UniformKind::Mat4,
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        match self {
            UniformValue::Float(v) => std::slice::from_ref(v),
            UniformValue::Vec2(v) => v,
            UniformValue::Vec3(v) => v,
            UniformValue::Vec4(v) | UniformValue::Mat2(v) => v,
            UniformValue::Mat3(v) => v,
            UniformValue::Mat4(v) => v,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        match self {
            UniformValue::Float(v) => std::slice::from_mut(v),
            UniformValue::Vec2(v) => v,
            UniformValue::Vec3(v) => v,
            UniformValue::Vec4(v) | UniformValue::Mat2(v) => v,
            UniformValue::Mat3(v) => v,
            UniformValue::Mat4(v) => v,
        }
    }

    /// Writes the value in WGSL uniform layout into `out` (`kind().size()` bytes).
    pub fn write_wgsl(&self, out: &mut [u8]) {
        match self {
            UniformValue::Mat3(m) => {
                for (col, values) in m.chunks_exact(3).enumerate() {
                    let start = col * 16;
                    out[start..start + 12].copy_from_slice(bytemuck::cast_slice(values));
                    out[start + 12..start + 16].fill(0);
                }
            }
            other => {
                let bytes: &[u8] = bytemuck::cast_slice(other.as_slice());
                out[..bytes.len()].copy_from_slice(bytes);
            }
        }
    }
}
