use crate::coords::Vec2;

/// Numeric input accepted by [`Uniform::assign`](super::Uniform::assign).
///
/// Anything that can be flattened into a list of numbers: scalars, arrays,
/// slices, vectors, tuples and arbitrary nestings of those.
pub trait UniformInput {
    fn flatten_into(&self, out: &mut Vec<f64>);
}

/// Flattens `input` depth-first into one list.
pub fn flatten<T: UniformInput + ?Sized>(input: &T) -> Vec<f64> {
    let mut out = Vec::new();
    input.flatten_into(&mut out);
    out
}

macro_rules! scalar_input {
    ($($t:ty),*) => {
        $(
            impl UniformInput for $t {
                #[inline]
                fn flatten_into(&self, out: &mut Vec<f64>) {
                    out.push(f64::from(*self));
                }
            }
        )*
    };
}

scalar_input!(f32, f64, i8, i16, i32, u8, u16, u32);

impl UniformInput for Vec2 {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        out.push(f64::from(self.x));
        out.push(f64::from(self.y));
    }
}

impl<T: UniformInput> UniformInput for [T] {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        for v in self {
            v.flatten_into(out);
        }
    }
}

impl<T: UniformInput, const N: usize> UniformInput for [T; N] {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        self.as_slice().flatten_into(out);
    }
}

impl<T: UniformInput> UniformInput for Vec<T> {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        self.as_slice().flatten_into(out);
    }
}

impl<T: UniformInput + ?Sized> UniformInput for &T {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        (**self).flatten_into(out);
    }
}

impl<A: UniformInput, B: UniformInput> UniformInput for (A, B) {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        self.0.flatten_into(out);
        self.1.flatten_into(out);
    }
}

impl<A: UniformInput, B: UniformInput, C: UniformInput> UniformInput for (A, B, C) {
    fn flatten_into(&self, out: &mut Vec<f64>) {
        self.0.flatten_into(out);
        self.1.flatten_into(out);
        self.2.flatten_into(out);
    }
}
