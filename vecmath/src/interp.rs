//! Interpolation helpers for scalars and vectors.

use core::ops::{Add, Mul, Sub};
use num_traits::Float;

/// Linear interpolation `a + (b - a) * t`.
///
/// `t` is not clamped, values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp<V, F>(a: V, b: V, t: F) -> V
where
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<F, Output = V>,
{
    a + (b - a) * t
}

/// Interpolates like [`lerp`] and writes the result back into `a`.
#[inline]
pub fn apply_lerp<V, F>(a: &mut V, b: V, t: F) -> V
where
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<F, Output = V>,
{
    *a = lerp(*a, b, t);
    *a
}

/// Framerate independent smoothing of `a` towards `b`.
///
/// Stepping `f(n) = b + (a - b) * rate^n` over an elapsed time `dt` is the
/// same as `lerp(a, b, 1 - rate^dt)`, so any split of the same total time
/// arrives at the same value. `rate` is the fraction of the distance left
/// after one second and must lie in `(0, 1]`: `1` never moves, values near
/// `0` snap almost instantly. Other rates are a caller error, only checked
/// with the `debug-vecmath-assert` feature.
#[inline]
pub fn exponential_damp<V, F>(a: V, b: V, rate: F, dt: F) -> V
where
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<F, Output = V>,
    F: Float,
{
    vecmath_assert!(rate > F::zero() && rate <= F::one());
    lerp(a, b, F::one() - rate.powf(dt))
}

/// Damps like [`exponential_damp`] and writes the result back into `a`.
#[inline]
pub fn apply_exponential_damp<V, F>(a: &mut V, b: V, rate: F, dt: F) -> V
where
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<F, Output = V>,
    F: Float,
{
    *a = exponential_damp(*a, b, rate, dt);
    *a
}
