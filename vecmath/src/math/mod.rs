mod convert;
mod glam_ext;
mod named;
mod ops;
mod scalar;
mod serde_impl;
mod vector;

pub use convert::VectorLike;
pub use named::{vec2, vec3, vec4, Vector2, Vector3, Vector4};
pub use scalar::Scalar;
pub use vector::{dot, Vector};

pub(crate) fn dot_components<T: Scalar, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |dot, (&lhs, &rhs)| dot + lhs * rhs)
}
