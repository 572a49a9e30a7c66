use core::fmt::Debug;
use num_traits::{AsPrimitive, Num};

/// The numeric contract shared by every vector component type.
pub trait Scalar: Copy + Debug + PartialOrd + Num + AsPrimitive<f64> + AsPrimitive<Self> {
    /// `self / rhs`, or `None` when an integral division has no result: a zero
    /// `rhs`, or a signed `MIN / -1` that overflows. Floating point types
    /// always divide and let IEEE infinities and NaN through.
    fn checked_quotient(self, rhs: Self) -> Option<Self>;

    #[inline]
    fn as_f64(self) -> f64 {
        AsPrimitive::<f64>::as_(self)
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),+) => {$(
        impl Scalar for $t {
            #[inline]
            fn checked_quotient(self, rhs: Self) -> Option<Self> {
                self.checked_div(rhs)
            }
        }
    )+};
}

macro_rules! impl_scalar_float {
    ($($t:ty),+) => {$(
        impl Scalar for $t {
            #[inline]
            fn checked_quotient(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }
        }
    )+};
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

#[test]
fn test_checked_quotient() {
    assert_eq!(Some(3), 7i32.checked_quotient(2));
    assert_eq!(None, 7u8.checked_quotient(0));
    assert_eq!(None, i32::MIN.checked_quotient(-1));
    assert_eq!(Some(i32::MAX), i32::MAX.checked_quotient(1));
    assert!(1.0f32.checked_quotient(0.0).unwrap().is_infinite());
    assert!(0.0f64.checked_quotient(0.0).unwrap().is_nan());
}
