use super::Vector;

/// A value exposing exactly `N` indexed numeric components.
///
/// This is the conversion contract behind [`Vector::from_vector_like`]: a
/// shape or component-type mismatch is rejected at compile time.
pub trait VectorLike<const N: usize> {
    type Scalar: Copy + 'static;

    fn to_components(&self) -> [Self::Scalar; N];
}

impl<T: Copy + 'static, const N: usize> VectorLike<N> for [T; N] {
    type Scalar = T;
    #[inline]
    fn to_components(&self) -> [T; N] {
        *self
    }
}

impl<T: Copy + 'static, const N: usize> VectorLike<N> for Vector<T, N> {
    type Scalar = T;
    #[inline]
    fn to_components(&self) -> [T; N] {
        self.components
    }
}

impl<T: Copy + 'static> VectorLike<2> for (T, T) {
    type Scalar = T;
    #[inline]
    fn to_components(&self) -> [T; 2] {
        [self.0, self.1]
    }
}

impl<T: Copy + 'static> VectorLike<3> for (T, T, T) {
    type Scalar = T;
    #[inline]
    fn to_components(&self) -> [T; 3] {
        [self.0, self.1, self.2]
    }
}
