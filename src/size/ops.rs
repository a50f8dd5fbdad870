//! Arithmetic on sizes.
//!
//! Every operation leaves its operands untouched and returns a new value.
//! What a division means depends on the right-hand side: dividing by a
//! number scales the size down and yields a `Size`, while dividing by another
//! `Size` yields their real-valued ratio.
//!
//! Operators that can fail have `Output = Result<_>`; each one delegates to
//! a named method so callers can pick whichever reads better.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::error::{Result, SizeError};
use crate::size::Size;
use crate::size::size::{saturate_to_octets, truncate_to_octets};

impl Size {
    /// Sum of two sizes.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::OutOfRange`] if the sum does not fit in a `u128`.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.octets()
            .checked_add(rhs.octets())
            .map(Self::new)
            .ok_or_else(|| SizeError::overflow(&format!("{self} + {rhs}")))
    }

    /// Difference of two sizes.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::OutOfRange`] if `rhs` is larger than `self`.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.octets()
            .checked_sub(rhs.octets())
            .map(Self::new)
            .ok_or_else(|| SizeError::negative(&format!("{self} - {rhs}")))
    }

    /// Multiply by an exact integer factor.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::OutOfRange`] on overflow.
    pub fn checked_mul(self, factor: u128) -> Result<Self> {
        self.octets()
            .checked_mul(factor)
            .map(Self::new)
            .ok_or_else(|| SizeError::overflow(&format!("{self} * {factor}")))
    }

    /// Multiply by a real factor, truncating the product toward zero.
    ///
    /// A factor of exactly `1.0` returns the size unchanged, and factors
    /// below `1.0` never report an overflow.
    ///
    /// # Errors
    ///
    /// - [`SizeError::InvalidArgument`] if `factor` is NaN or infinite
    /// - [`SizeError::OutOfRange`] if the product is negative or overflows
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn scale(self, factor: f64) -> Result<Self> {
        if !factor.is_finite() {
            return Err(SizeError::InvalidArgument(format!(
                "cannot scale by {factor}"
            )));
        }
        if factor == 1.0 {
            return Ok(self);
        }

        let product = self.octets() as f64 * factor;
        if factor < 1.0 {
            saturate_to_octets(product).map(Self::new)
        } else {
            truncate_to_octets(product).map(Self::new)
        }
    }

    /// Divide by an exact integer, discarding the remainder.
    ///
    /// # Arguments
    ///
    /// * `divisor` - How many equal parts to split the size into
    ///
    /// # Returns
    ///
    /// - `Ok(Size)` - The size of one part, rounded down to a whole octet
    /// - `Err(SizeError::DivisionByZero)` - If `divisor` is zero
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::DivisionByZero`] if `divisor` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use binaryunits::Size;
    /// assert_eq!(Size::new(10).checked_div(3)?, Size::new(3));
    /// assert!(Size::new(10).checked_div(0).is_err());
    /// # Ok::<(), binaryunits::SizeError>(())
    /// ```
    pub fn checked_div(self, divisor: u128) -> Result<Self> {
        self.octets()
            .checked_div(divisor)
            .map(Self::new)
            .ok_or(SizeError::DivisionByZero)
    }

    /// Divide by a real number, truncating the quotient toward zero.
    ///
    /// # Arguments
    ///
    /// * `divisor` - Any non-zero, non-NaN real; infinities divide down to zero
    ///
    /// # Returns
    ///
    /// - `Ok(Size)` - The quotient, truncated toward zero. A divisor of
    ///   exactly `1.0` returns the size unchanged.
    /// - `Err(SizeError)` - If the division is undefined or negative
    ///
    /// # Errors
    ///
    /// - [`SizeError::DivisionByZero`] if `divisor` is zero
    /// - [`SizeError::InvalidArgument`] if `divisor` is NaN
    /// - [`SizeError::OutOfRange`] if the quotient is negative, or if a
    ///   divisor below `1.0` pushes it past `u128::MAX`
    ///
    /// # Examples
    ///
    /// ```
    /// # use binaryunits::Size;
    /// assert_eq!(Size::new(10).div_scalar(4.0)?, Size::new(2));
    /// assert_eq!(Size::new(10).div_scalar(0.5)?, Size::new(20));
    /// assert!(Size::new(10).div_scalar(0.0).is_err());
    /// # Ok::<(), binaryunits::SizeError>(())
    /// ```
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn div_scalar(self, divisor: f64) -> Result<Self> {
        if divisor.is_nan() {
            return Err(SizeError::InvalidArgument(
                "cannot divide by NaN".to_string(),
            ));
        }
        if divisor == 0.0 {
            return Err(SizeError::DivisionByZero);
        }
        if divisor == 1.0 {
            return Ok(self);
        }

        let quotient = self.octets() as f64 / divisor;
        if divisor > 1.0 {
            saturate_to_octets(quotient).map(Self::new)
        } else {
            truncate_to_octets(quotient).map(Self::new)
        }
    }

    /// Real-valued ratio `self / rhs`.
    ///
    /// # Arguments
    ///
    /// * `rhs` - The size to compare against
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - How many times `rhs` fits in `self`, fractions included
    /// - `Err(SizeError::DivisionByZero)` - If `rhs` is zero
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::DivisionByZero`] if `rhs` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use binaryunits::Size;
    /// assert_eq!(Size::new(10).ratio(Size::new(4))?, 2.5);
    /// # Ok::<(), binaryunits::SizeError>(())
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub const fn ratio(self, rhs: Self) -> Result<f64> {
        if rhs.is_zero() {
            return Err(SizeError::DivisionByZero);
        }

        Ok(self.octets() as f64 / rhs.octets() as f64)
    }

    /// How many whole times `rhs` fits in `self`.
    ///
    /// # Arguments
    ///
    /// * `rhs` - The size to divide by
    ///
    /// # Returns
    ///
    /// - `Ok(u128)` - The integer quotient of the two octet counts
    /// - `Err(SizeError::DivisionByZero)` - If `rhs` is zero
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::DivisionByZero`] if `rhs` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use binaryunits::Size;
    /// assert_eq!(Size::new(1_048_576).div_floor(Size::new(1_024))?, 1_024);
    /// # Ok::<(), binaryunits::SizeError>(())
    /// ```
    pub fn div_floor(self, rhs: Self) -> Result<u128> {
        self.octets()
            .checked_div(rhs.octets())
            .ok_or(SizeError::DivisionByZero)
    }

    /// What is left of `self` after removing as many `rhs` as possible.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(self, rhs: Self) -> Result<Self> {
        self.octets()
            .checked_rem(rhs.octets())
            .map(Self::new)
            .ok_or(SizeError::DivisionByZero)
    }

    /// [`Size::div_floor`] and [`Size::checked_rem`] in one call.
    ///
    /// # Arguments
    ///
    /// * `rhs` - The size to divide by
    ///
    /// # Returns
    ///
    /// - `Ok((u128, Size))` - The integer quotient and the remainder
    /// - `Err(SizeError::DivisionByZero)` - If `rhs` is zero
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::DivisionByZero`] if `rhs` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use binaryunits::Size;
    /// assert_eq!(Size::new(1_050).div_rem(Size::new(1_024))?, (1, Size::new(26)));
    /// # Ok::<(), binaryunits::SizeError>(())
    /// ```
    pub fn div_rem(self, rhs: Self) -> Result<(u128, Self)> {
        Ok((self.div_floor(rhs)?, self.checked_rem(rhs)?))
    }

    /// Raise the octet count to an integer power.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::OutOfRange`] on overflow.
    pub fn pow(self, exponent: u32) -> Result<Self> {
        self.octets()
            .checked_pow(exponent)
            .map(Self::new)
            .ok_or_else(|| SizeError::overflow(&format!("{self} ^ {exponent}")))
    }

    /// Raise the octet count to a real power, truncating toward zero.
    ///
    /// An exponent of exactly `1.0` returns the size unchanged, and
    /// exponents below `1.0` never report an overflow.
    ///
    /// # Errors
    ///
    /// - [`SizeError::InvalidArgument`] if `exponent` is NaN
    /// - [`SizeError::DivisionByZero`] for a zero size and a negative exponent
    /// - [`SizeError::OutOfRange`] on overflow
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn powf(self, exponent: f64) -> Result<Self> {
        if exponent.is_nan() {
            return Err(SizeError::InvalidArgument(
                "cannot raise to a NaN power".to_string(),
            ));
        }
        if self.is_zero() && exponent < 0.0 {
            return Err(SizeError::DivisionByZero);
        }
        if exponent == 1.0 {
            return Ok(self);
        }

        let power = (self.octets() as f64).powf(exponent);
        if exponent < 1.0 {
            saturate_to_octets(power).map(Self::new)
        } else {
            truncate_to_octets(power).map(Self::new)
        }
    }
}

impl Add for Size {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the sum does not fit in a `u128`, like integer addition.
    /// Use [`Size::checked_add`] to get an error instead.
    #[allow(clippy::panic)]
    fn add(self, rhs: Self) -> Self {
        let Some(octets) = self.octets().checked_add(rhs.octets()) else {
            panic!("attempt to add {self} and {rhs} with overflow");
        };

        Self::new(octets)
    }
}

impl Sum for Size {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Size {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sub for Size {
    type Output = Result<Self>;

    fn sub(self, rhs: Self) -> Result<Self> {
        self.checked_sub(rhs)
    }
}

impl Mul<u64> for Size {
    type Output = Result<Self>;

    fn mul(self, rhs: u64) -> Result<Self> {
        self.checked_mul(u128::from(rhs))
    }
}

impl Mul<f64> for Size {
    type Output = Result<Self>;

    fn mul(self, rhs: f64) -> Result<Self> {
        self.scale(rhs)
    }
}

impl Div<u64> for Size {
    type Output = Result<Self>;

    fn div(self, rhs: u64) -> Result<Self> {
        self.checked_div(u128::from(rhs))
    }
}

impl Div<f64> for Size {
    type Output = Result<Self>;

    fn div(self, rhs: f64) -> Result<Self> {
        self.div_scalar(rhs)
    }
}

impl Div for Size {
    type Output = Result<f64>;

    fn div(self, rhs: Self) -> Result<f64> {
        self.ratio(rhs)
    }
}

impl Rem for Size {
    type Output = Result<Self>;

    fn rem(self, rhs: Self) -> Result<Self> {
        self.checked_rem(rhs)
    }
}

#[cfg(test)]
#[allow(
    clippy::float_cmp,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(Size::new(3) + Size::new(4), Size::new(7));
        assert_eq!(Size::ZERO + Size::ZERO, Size::ZERO);
        assert_eq!(
            Size::new(u128::MAX - 1).checked_add(Size::new(1)).unwrap(),
            Size::new(u128::MAX)
        );
    }

    #[test]
    fn test_checked_add_overflow() {
        assert!(matches!(
            Size::new(u128::MAX).checked_add(Size::new(1)),
            Err(SizeError::OutOfRange(_))
        ));
    }

    #[test]
    #[should_panic(expected = "with overflow")]
    fn test_add_operator_panics_on_overflow() {
        let _ = Size::new(u128::MAX) + Size::new(1);
    }

    #[test]
    fn test_sum() {
        let sizes = [Size::new(1), Size::new(2), Size::new(3)];
        assert_eq!(sizes.iter().sum::<Size>(), Size::new(6));
        assert_eq!(sizes.into_iter().sum::<Size>(), Size::new(6));
        assert_eq!(std::iter::empty::<Size>().sum::<Size>(), Size::ZERO);
    }

    #[test]
    fn test_sub() {
        assert_eq!((Size::new(10) - Size::new(4)).unwrap(), Size::new(6));
        assert_eq!((Size::new(4) - Size::new(4)).unwrap(), Size::ZERO);
    }

    #[test]
    fn test_sub_underflow() {
        let err = (Size::new(4) - Size::new(10)).unwrap_err();
        assert_eq!(
            err,
            SizeError::OutOfRange(
                "4 octets - 10 octets would be a negative octet count".to_string()
            )
        );
    }

    #[test]
    fn test_mul_integer() {
        assert_eq!((Size::new(512) * 4u64).unwrap(), Size::new(2048));
        assert_eq!((Size::new(512) * 0u64).unwrap(), Size::ZERO);
        assert!(matches!(
            Size::new(u128::MAX).checked_mul(2),
            Err(SizeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_mul_real_truncates() {
        assert_eq!((Size::new(10) * 1.55).unwrap(), Size::new(15));
        assert_eq!((Size::new(1024) * 0.5).unwrap(), Size::new(512));
        assert_eq!((Size::ZERO * -3.0).unwrap(), Size::ZERO);
    }

    #[test]
    fn test_mul_real_rejects_negative_and_non_finite() {
        assert!(matches!(
            Size::new(10) * -1.0,
            Err(SizeError::OutOfRange(_))
        ));
        assert!(matches!(
            Size::new(10) * f64::NAN,
            Err(SizeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Size::new(10) * f64::INFINITY,
            Err(SizeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_div_by_number_yields_size() {
        assert_eq!((Size::new(10) / 3u64).unwrap(), Size::new(3));
        assert_eq!((Size::new(10) / 4.0).unwrap(), Size::new(2));
        assert_eq!((Size::new(10) / 0.5).unwrap(), Size::new(20));
        assert_eq!((Size::new(10) / f64::INFINITY).unwrap(), Size::ZERO);
    }

    #[test]
    fn test_div_by_number_errors() {
        assert_eq!(Size::new(10) / 0u64, Err(SizeError::DivisionByZero));
        assert_eq!(Size::new(10) / 0.0, Err(SizeError::DivisionByZero));
        assert!(matches!(
            Size::new(10) / -2.0,
            Err(SizeError::OutOfRange(_))
        ));
        assert!(matches!(
            Size::new(10) / f64::NAN,
            Err(SizeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_div_by_size_yields_ratio() {
        assert_eq!((Size::new(10) / Size::new(4)).unwrap(), 2.5);
        assert_eq!((Size::new(1024) / Size::new(1024)).unwrap(), 1.0);
        assert_eq!(Size::new(10) / Size::ZERO, Err(SizeError::DivisionByZero));
    }

    #[test]
    fn test_div_floor() {
        assert_eq!(
            Size::new(1_048_576).div_floor(Size::new(1024)).unwrap(),
            1024
        );
        assert_eq!(Size::new(1023).div_floor(Size::new(1024)).unwrap(), 0);
        assert_eq!(
            Size::new(1).div_floor(Size::ZERO),
            Err(SizeError::DivisionByZero)
        );
    }

    #[test]
    fn test_rem() {
        assert_eq!((Size::new(1050) % Size::new(1024)).unwrap(), Size::new(26));
        assert_eq!((Size::new(2048) % Size::new(1024)).unwrap(), Size::ZERO);
        assert_eq!(Size::new(10) % Size::ZERO, Err(SizeError::DivisionByZero));
    }

    #[test]
    fn test_div_rem() {
        assert_eq!(
            Size::new(1050).div_rem(Size::new(1024)).unwrap(),
            (1, Size::new(26))
        );
        assert_eq!(
            Size::new(1050).div_rem(Size::ZERO),
            Err(SizeError::DivisionByZero)
        );
    }

    #[test]
    fn test_pow() {
        assert_eq!(Size::new(2).pow(10).unwrap(), Size::new(1024));
        assert_eq!(Size::ZERO.pow(0).unwrap(), Size::new(1));
        assert!(matches!(
            Size::new(2).pow(128),
            Err(SizeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_powf() {
        assert_eq!(Size::new(2).powf(10.0).unwrap(), Size::new(1024));
        assert_eq!(Size::new(10).powf(1.5).unwrap(), Size::new(31));
        assert_eq!(Size::new(2).powf(-1.0).unwrap(), Size::ZERO);
        assert_eq!(Size::ZERO.powf(-1.0), Err(SizeError::DivisionByZero));
        assert!(matches!(
            Size::new(2).powf(f64::NAN),
            Err(SizeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Size::new(u128::MAX).powf(2.0),
            Err(SizeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_real_scalars_of_one_keep_the_largest_size() {
        let largest = Size::new(u128::MAX);

        assert_eq!((largest / 1.0).unwrap(), largest);
        assert_eq!((largest * 1.0).unwrap(), largest);
        assert_eq!(largest.powf(1.0).unwrap(), largest);
    }

    #[test]
    fn test_shrinking_real_scalars_never_overflow() {
        let largest = Size::new(u128::MAX);

        assert_eq!(
            (largest / 1.5).unwrap().octets(),
            (u128::MAX as f64 / 1.5) as u128
        );
        assert!((largest / 1.000_000_1).is_ok());
        assert!((largest * 0.999_999_9).is_ok());
        assert!(largest.powf(0.999_999_9).is_ok());
        assert!(matches!(
            largest * 1.5,
            Err(SizeError::OutOfRange(_))
        ));
        assert!(matches!(
            largest / 0.5,
            Err(SizeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_size_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Size>();

        let size = Size::from_kio(4.0).unwrap();
        let handle = std::thread::spawn(move || size.kio());
        assert_eq!(handle.join().unwrap(), 4.0);
        assert_eq!(size, Size::new(4096));
    }
}
