use super::{Vector, VectorLike};
use glam::{DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec3A, Vec4};

macro_rules! impl_glam_interop {
    ($($glam:ty => [$scalar:ty; $n:literal]),+ $(,)?) => {$(
        impl VectorLike<$n> for $glam {
            type Scalar = $scalar;
            #[inline]
            fn to_components(&self) -> [$scalar; $n] {
                self.to_array()
            }
        }

        impl From<$glam> for Vector<$scalar, $n> {
            #[inline]
            fn from(v: $glam) -> Self {
                Self::new(v.to_array())
            }
        }

        impl From<Vector<$scalar, $n>> for $glam {
            #[inline]
            fn from(v: Vector<$scalar, $n>) -> Self {
                <$glam>::from_array(v.components)
            }
        }
    )+};
}

impl_glam_interop!(
    Vec2 => [f32; 2],
    Vec3 => [f32; 3],
    Vec3A => [f32; 3],
    Vec4 => [f32; 4],
    DVec2 => [f64; 2],
    DVec3 => [f64; 3],
    DVec4 => [f64; 4],
    IVec2 => [i32; 2],
    IVec3 => [i32; 3],
    IVec4 => [i32; 4],
    UVec2 => [u32; 2],
    UVec3 => [u32; 3],
    UVec4 => [u32; 4],
);

#[test]
fn test_glam_interop() {
    use super::{vec2, vec3, Vector3};

    let v: Vector3<f32> = Vec3::new(1.0, 2.0, 3.0).into();
    assert_eq!(vec3(1.0, 2.0, 3.0), v);
    assert_eq!(Vec3A::new(1.0, 2.0, 3.0), Vec3A::from(v));

    let cast = Vector3::<f64>::from_vector_like(&IVec3::new(-1, 0, 7));
    assert_eq!(vec3(-1.0, 0.0, 7.0), cast);

    let length = Vector::from(Vec2::new(3.0, 4.0)).length();
    assert_eq!(Vec2::new(3.0, 4.0).length(), length);
    assert_eq!(UVec2::new(5, 6), UVec2::from(vec2(5u32, 6)));
}
