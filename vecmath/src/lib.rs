#[macro_use]
mod macros;

pub mod error;
pub mod interp;
mod math;

pub use error::{Result, VectorError};
pub use interp::{apply_exponential_damp, apply_lerp, exponential_damp, lerp};
pub use math::{dot, vec2, vec3, vec4, Scalar, Vector, Vector2, Vector3, Vector4, VectorLike};
