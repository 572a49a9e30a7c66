#[cfg(feature = "debug-vecmath-assert")]
macro_rules! vecmath_assert {
    ($($arg:tt)*) => ( assert!($($arg)*); )
}

#[cfg(not(feature = "debug-vecmath-assert"))]
macro_rules! vecmath_assert {
    ($($arg:tt)*) => {};
}
