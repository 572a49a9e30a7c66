use super::Vector;

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

/// Returns a 2D vector with components `x` and `y`.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector2<T> {
    Vector::new([x, y])
}

/// Returns a 3D vector with components `x`, `y` and `z`.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector3<T> {
    Vector::new([x, y, z])
}

/// Returns a 4D vector with components `x`, `y`, `z` and `w`.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector4<T> {
    Vector::new([x, y, z, w])
}

impl<T> Vector2<T> {
    #[inline]
    pub const fn from_components(x: T, y: T) -> Self {
        vec2(x, y)
    }
}

impl<T> Vector3<T> {
    #[inline]
    pub const fn from_components(x: T, y: T, z: T) -> Self {
        vec3(x, y, z)
    }
}

impl<T> Vector4<T> {
    #[inline]
    pub const fn from_components(x: T, y: T, z: T, w: T) -> Self {
        vec4(x, y, z, w)
    }
}

// Named components are accessors over the indexed storage, never copies.
macro_rules! impl_named_components {
    ($n:literal: $($get:ident, $set:ident, $get_mut:ident => $index:literal),+) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[inline]
                pub fn $get(&self) -> T {
                    self.components[$index]
                }

                #[inline]
                pub fn $set(&mut self, value: T) {
                    self.components[$index] = value;
                }

                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.components[$index]
                }
            )+
        }
    };
}

impl_named_components!(2: x, set_x, x_mut => 0, y, set_y, y_mut => 1);
impl_named_components!(3: x, set_x, x_mut => 0, y, set_y, y_mut => 1, z, set_z, z_mut => 2);
impl_named_components!(
    4: x, set_x, x_mut => 0, y, set_y, y_mut => 1, z, set_z, z_mut => 2, w, set_w, w_mut => 3
);
