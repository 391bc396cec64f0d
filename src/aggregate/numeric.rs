//! Numeric reductions: `sum` and `product`.

use std::ops::{Add, Mul};

use crate::combinator::foldr;

/// A fixed-width numeric type with additive and multiplicative identities.
///
/// Implemented for every primitive integer and float type.
pub trait Numeric: Copy + Add<Output = Self> + Mul<Output = Self> {
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
}

macro_rules! impl_numeric {
    ($zero:literal, $one:literal; $($primitive:ty),+ $(,)?) => {
        $(
            impl Numeric for $primitive {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )+
    };
}

impl_numeric!(0, 1; i8, i16, i32, i64, i128, isize);
impl_numeric!(0, 1; u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0, 1.0; f32, f64);

/// Adds up the elements, starting from [`Numeric::ZERO`].
///
/// Integer overflow behaves like ordinary Rust arithmetic: it panics in
/// debug builds.
///
/// # Examples
///
/// ```rust
/// use foldkit::aggregate::sum;
///
/// assert_eq!(sum(&[1, 2, 3, 4]), 10);
/// assert_eq!(sum::<f64>(&[]), 0.0);
/// ```
pub fn sum<N: Numeric>(sequence: &[N]) -> N {
    foldr(|element: &N, accumulator| *element + accumulator, N::ZERO, sequence)
}

/// Multiplies the elements, starting from [`Numeric::ONE`].
///
/// An empty sequence yields `ONE`.
///
/// # Examples
///
/// ```rust
/// use foldkit::aggregate::product;
///
/// assert_eq!(product(&[2, 3, 4]), 24);
/// assert_eq!(product::<i64>(&[]), 1);
/// ```
pub fn product<N: Numeric>(sequence: &[N]) -> N {
    foldr(|element: &N, accumulator| *element * accumulator, N::ONE, sequence)
}
