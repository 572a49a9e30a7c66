use super::{Scalar, Vector};
use crate::error::{Result, VectorError};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::AsPrimitive;

// Element-wise vector/vector operators. The right hand side may hold a
// different scalar type, each of its components is cast into `T` first.
macro_rules! impl_elementwise_op {
    ($op:ident, $op_fn:ident, $assign_op:ident, $assign_fn:ident, $sym:tt) => {
        impl<T: Scalar, U: AsPrimitive<T>, const N: usize> $op<Vector<U, N>> for Vector<T, N> {
            type Output = Vector<T, N>;
            #[inline]
            fn $op_fn(self, rhs: Vector<U, N>) -> Self::Output {
                let mut tmp = self;
                tmp.$assign_fn(rhs);
                tmp
            }
        }

        impl<T: Scalar, U: AsPrimitive<T>, const N: usize> $assign_op<Vector<U, N>>
            for Vector<T, N>
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: Vector<U, N>) {
                for n in 0..N {
                    self.components[n] = self.components[n] $sym rhs.components[n].as_();
                }
            }
        }
    };
}

impl_elementwise_op!(Add, add, AddAssign, add_assign, +);
impl_elementwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_elementwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_elementwise_op!(Div, div, DivAssign, div_assign, /);

// Scalar broadcasting, implemented per primitive so that it does not overlap
// with the vector/vector impls above.
macro_rules! impl_scalar_ops {
    ($($s:ty),+) => {$(
        impl<T: Scalar, const N: usize> Mul<$s> for Vector<T, N>
        where
            $s: AsPrimitive<T>,
        {
            type Output = Vector<T, N>;
            #[inline]
            fn mul(self, rhs: $s) -> Self::Output {
                let s = AsPrimitive::<T>::as_(rhs);
                self.map(|c| c * s)
            }
        }

        impl<T: Scalar, const N: usize> Div<$s> for Vector<T, N>
        where
            $s: AsPrimitive<T>,
        {
            type Output = Vector<T, N>;
            #[inline]
            fn div(self, rhs: $s) -> Self::Output {
                let s = AsPrimitive::<T>::as_(rhs);
                self.map(|c| c / s)
            }
        }

        impl<T: Scalar, const N: usize> MulAssign<$s> for Vector<T, N>
        where
            $s: AsPrimitive<T>,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $s) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar, const N: usize> DivAssign<$s> for Vector<T, N>
        where
            $s: AsPrimitive<T>,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $s) {
                *self = *self / rhs;
            }
        }

        impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for $s
        where
            $s: AsPrimitive<T>,
        {
            type Output = Vector<T, N>;
            #[inline]
            fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                let s = AsPrimitive::<T>::as_(self);
                rhs.map(|c| s * c)
            }
        }

        /// `s / v` divides the scalar by each component. It is not `v / s`.
        impl<T: Scalar, const N: usize> Div<Vector<T, N>> for $s
        where
            $s: AsPrimitive<T>,
        {
            type Output = Vector<T, N>;
            #[inline]
            fn div(self, rhs: Vector<T, N>) -> Self::Output {
                let s = AsPrimitive::<T>::as_(self);
                rhs.map(|c| s / c)
            }
        }
    )+};
}

impl_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

// Checked division. Integral vectors report `DivisionByZero` or `Overflow`
// where the `/` operator would panic. Floating point vectors never fail.
impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn try_div<U: AsPrimitive<T>>(self, rhs: Vector<U, N>) -> Result<Self> {
        let mut tmp = self;
        tmp.try_div_assign(rhs)?;
        Ok(tmp)
    }

    /// Divides in place. On error `self` is left unchanged.
    pub fn try_div_assign<U: AsPrimitive<T>>(&mut self, rhs: Vector<U, N>) -> Result<()> {
        let mut tmp = self.components;
        for n in 0..N {
            let divisor: T = rhs.components[n].as_();
            tmp[n] = tmp[n].checked_quotient(divisor).ok_or(if divisor == T::zero() {
                VectorError::DivisionByZero
            } else {
                VectorError::Overflow
            })?;
        }
        self.components = tmp;
        Ok(())
    }

    pub fn try_div_scalar<S: AsPrimitive<T>>(self, rhs: S) -> Result<Self> {
        self.try_div(Vector::<T, N>::filled(rhs.as_()))
    }

    /// Checked `scalar / self`, dividing `scalar` by every component.
    pub fn try_scale_reciprocal<S: AsPrimitive<T>>(self, scalar: S) -> Result<Self> {
        Vector::<T, N>::filled(scalar.as_()).try_div(self)
    }
}

#[cfg(test)]
mod test {
    use crate::error::VectorError;
    use crate::math::{vec2, vec3, Scalar, Vector};
    use core::array;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    fn random_vector<const N: usize>(rng: &mut Pcg32) -> Vector<f64, N> {
        Vector::new(array::from_fn(|_| rng.gen_range(-1000..=1000) as f64))
    }

    #[test]
    fn test_add_laws() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let a = random_vector::<5>(&mut rng);
            let b = random_vector::<5>(&mut rng);
            let c = random_vector::<5>(&mut rng);
            assert_eq!(a + (b + c), (a + b) + c);
            assert_eq!(a + b, b + a);
            assert_eq!(a, (a + b) - b);
        }
    }

    #[test]
    fn test_elementwise() {
        let a = vec3(6.0f32, 8.0, -2.0);
        let b = vec3(2.0f32, 4.0, 4.0);
        assert_eq!(vec3(8.0, 12.0, 2.0), a + b);
        assert_eq!(vec3(4.0, 4.0, -6.0), a - b);
        assert_eq!(vec3(12.0, 32.0, -8.0), a * b);
        assert_eq!(vec3(3.0, 2.0, -0.5), a / b);
    }

    #[test]
    fn test_mixed_scalar_types() {
        assert_eq!(vec2(2.5f32, 4.5), vec2(1.5f32, 2.5) + vec2(1i32, 2));
        // the right operand is narrowed into the left operand's type
        assert_eq!(vec2(11i32, 22), vec2(10i32, 20) + vec2(1.9f32, 2.9));
        assert_eq!(vec2(3u8, 4), vec2(6u8, 8) / vec2(2.0f64, 2.0));
    }

    #[test]
    fn test_scalar_ops() {
        let v = vec3(1.0f32, 2.0, 3.0);
        assert_eq!(vec3(2.0, 4.0, 6.0), v * 2.0f32);
        assert_eq!(vec3(2.0, 4.0, 6.0), 2.0f32 * v);
        assert_eq!(vec3(2.0, 4.0, 6.0), v * 2i32);
        assert_eq!(vec3(0.5, 1.0, 1.5), v / 2.0f32);
        assert_eq!(vec2(3, 4), vec2(7i32, 9) / 2i32);
    }

    #[test]
    fn test_scalar_divided_by_vector() {
        let v = vec3(1.0f32, 2.0, 4.0);
        assert_eq!(vec3(12.0, 6.0, 3.0), 12.0f32 / v);
        assert_ne!(12.0f32 / v, v / 12.0f32);
        assert_eq!(vec2(6, 3), 12i64 / vec2(2i64, 4));
    }

    #[test]
    fn test_compound_assign() {
        let mut v = vec2(1i32, 2);
        v += vec2(3i32, 4);
        assert_eq!(vec2(4, 6), v);
        v -= vec2(1u8, 1);
        assert_eq!(vec2(3, 5), v);
        v *= 4i32;
        assert_eq!(vec2(12, 20), v);
        v /= 2u32;
        assert_eq!(vec2(6, 10), v);
        v *= vec2(2i32, 3);
        assert_eq!(vec2(12, 30), v);
        v /= vec2(4i32, 3);
        assert_eq!(vec2(3, 10), v);
    }

    #[test]
    fn test_neg() {
        assert_eq!(vec3(-1, 2, 0), -vec3(1i32, -2, 0));
    }

    #[test]
    fn test_divide_multiply_round_trip() {
        let mut rng = Pcg32::seed_from_u64(1234);
        for _ in 0..100 {
            let v = random_vector::<4>(&mut rng);
            let s = rng.gen_range(1..=50) as f64 * if rng.gen::<bool>() { 1.0 } else { -1.0 };
            let round_trip = (v / s) * s;
            for n in 0..4 {
                assert!((round_trip[n] - v[n]).abs() <= 1e-9 * v[n].abs().max(1.0));
            }
        }

        let v = vec3(12i32, -36, 0);
        assert_eq!(v, (v / 6i32) * 6i32);
    }

    #[test]
    fn test_float_division_by_zero() {
        let v = vec2(1.0f64, -1.0) / 0.0f64;
        assert_eq!(f64::INFINITY, v.x());
        assert_eq!(f64::NEG_INFINITY, v.y());

        let v = vec2(1.0f32, 0.0).try_div_scalar(0.0f32).unwrap();
        assert!(v.x().is_infinite());
        assert!(v.y().is_nan());
    }

    #[test]
    fn test_checked_integer_division() {
        assert_eq!(Ok(vec2(2, 3)), vec2(4i32, 6).try_div(vec2(2i32, 2)));
        assert_eq!(
            Err(VectorError::DivisionByZero),
            vec2(4i32, 6).try_div(vec2(2i32, 0))
        );
        assert_eq!(
            Err(VectorError::DivisionByZero),
            vec3(1u8, 2, 3).try_div_scalar(0u8)
        );
        assert_eq!(
            Err(VectorError::DivisionByZero),
            vec2(0i32, 2).try_scale_reciprocal(4i32)
        );
        assert_eq!(Ok(vec2(2, 1)), vec2(2i32, 4).try_scale_reciprocal(4i32));

        let mut v = vec2(8i64, 9);
        assert!(v.try_div_assign(vec2(2i64, 0)).is_err());
        assert_eq!(vec2(8, 9), v);
    }

    #[test]
    fn test_checked_integer_division_overflow() {
        assert_eq!(
            Err(VectorError::Overflow),
            vec2(i32::MIN, 4).try_div_scalar(-1i32)
        );
        assert_eq!(Ok(vec2(i32::MAX, -4)), vec2(-i32::MAX, 4).try_div_scalar(-1i32));

        let mut v = vec2(8i8, i8::MIN);
        assert_eq!(Err(VectorError::Overflow), v.try_div_assign(vec2(2i8, -1)));
        assert_eq!(vec2(8, i8::MIN), v);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_overflow_operator() {
        let minus_one = vec2(-1i32, 0).x();
        let _ = vec2(i32::MIN, 2) / minus_one;
    }

    fn halve_and_invert<T: Scalar>(v: Vector<T, 2>, two: T) -> (Vector<T, 2>, Vector<T, 2>) {
        (
            v.try_div_scalar(two).unwrap(),
            v.try_scale_reciprocal(T::one()).unwrap(),
        )
    }

    #[test]
    fn test_generic_checked_division() {
        let (halved, inverted) = halve_and_invert(vec2(4.0f64, -0.5), 2.0);
        assert_eq!(vec2(2.0, -0.25), halved);
        assert_eq!(vec2(0.25, -2.0), inverted);

        let (halved, inverted) = halve_and_invert(vec2(4i32, 1), 2);
        assert_eq!(vec2(2, 0), halved);
        assert_eq!(vec2(0, 1), inverted);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_operator() {
        let zero = vec2(0i32, 0).x();
        let _ = vec2(1i32, 2) / zero;
    }
}
