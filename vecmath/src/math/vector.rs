use super::{dot_components, Scalar, VectorLike};
use crate::error::{Result, VectorError};
use core::{
    array, fmt,
    ops::{Index, IndexMut},
    slice,
};
use num_traits::{AsPrimitive, Float};

/// A fixed-size vector of `N` components of scalar type `T`.
///
/// Arithmetic between vectors is only defined for matching `N`, so a shape
/// mismatch is a type error rather than a runtime one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    pub(crate) components: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    #[inline]
    pub const fn dimension(&self) -> usize {
        N
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.components.iter()
    }

    /// Applies `f` to every component, producing a vector of the same shape.
    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector::new(self.components.map(f))
    }
}

impl<T: Copy + 'static, const N: usize> Vector<T, N> {
    /// Returns a vector with every component set to `value`.
    #[inline]
    pub fn filled(value: T) -> Self {
        Self::new([value; N])
    }

    /// Copies the first `N` elements of `seq`.
    ///
    /// Fails with [`VectorError::Shape`] if `seq` holds fewer than `N` elements.
    pub fn from_sequence(seq: &[T]) -> Result<Self> {
        if seq.len() < N {
            return Err(VectorError::Shape {
                expected: N,
                actual: seq.len(),
            });
        }
        Ok(Self::new(array::from_fn(|i| seq[i])))
    }

    /// Reads the components of any `N`-component vector-like value, casting
    /// each one into `T`.
    #[inline]
    pub fn from_vector_like<V>(v: &V) -> Self
    where
        V: VectorLike<N>,
        V::Scalar: AsPrimitive<T>,
    {
        Self::new(v.to_components().map(AsPrimitive::<T>::as_))
    }

    /// Casts every component to `U` with `as` semantics. Narrowing casts
    /// truncate or saturate rather than fail.
    #[inline]
    pub fn convert_to<U>(&self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vector::new(self.components.map(AsPrimitive::<U>::as_))
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<T> {
        self.components
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index,
                dimension: N,
            })
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.components
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange {
                index,
                dimension: N,
            })
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub fn zero() -> Self {
        Self::filled(T::zero())
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        dot_components(&self.components, &rhs.components)
    }

    /// Sum of squared components. Integral vectors overflow as `T` would.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Length of any vector, promoting the components to `f64` first.
    pub fn length_f64(&self) -> f64 {
        self.components
            .iter()
            .fold(0.0f64, |sum, &c| sum + c.as_f64() * c.as_f64())
            .sqrt()
    }
}

impl<T: Scalar + Float, const N: usize> Vector<T, N> {
    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns `self` scaled to unit length, or the zero vector if `self` has
    /// zero length.
    #[must_use]
    pub fn normalised(&self) -> Self {
        let length = self.length();
        if length == T::zero() {
            Self::zero()
        } else {
            self.map(|c| c / length)
        }
    }
}

/// Dot product of two vectors of the same shape.
#[inline]
pub fn dot<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    a.dot(b)
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.components
    }
}

impl<T: Copy + 'static, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = VectorError;
    #[inline]
    fn try_from(seq: &[T]) -> Result<Self> {
        Self::from_sequence(seq)
    }
}

impl<T: Copy + 'static, const N: usize> TryFrom<Vec<T>> for Vector<T, N> {
    type Error = VectorError;
    #[inline]
    fn try_from(seq: Vec<T>) -> Result<Self> {
        Self::from_sequence(&seq)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(c, f)?;
        }
        write!(f, ")")
    }
}
