//! The [`Size`] value type and its unit conversions.
//!
//! A `Size` is an immutable count of octets. It can be built from an exact
//! integer, from a signed or floating-point value (validated), or from an
//! amount expressed in one of the sixteen [`Unit`]s. Reading a size back in a
//! unit always yields an `f64` computed by real division.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SizeError};
use crate::multiple::Unit;

/// A non-negative quantity of octets (8-bit bytes).
///
/// Equality, ordering and hashing only look at the octet count. The value
/// never changes after construction: every arithmetic operation returns a
/// fresh `Size`.
///
/// Serializes transparently as its octet count.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size {
    octets: u128,
}

impl Size {
    /// A size of zero octets.
    pub const ZERO: Self = Self::new(0);

    /// Create a size from an exact octet count.
    #[must_use]
    pub const fn new(octets: u128) -> Self {
        Self { octets }
    }

    /// Create a size from an amount of `unit`, truncating toward zero.
    ///
    /// Negative amounts are not rejected up front: the check applies to the
    /// truncated octet count, so an amount smaller in magnitude than one
    /// octet (e.g. `-0.0001` kibioctets) still yields [`Size::ZERO`].
    ///
    /// # Arguments
    ///
    /// * `value` - The amount, possibly fractional (e.g. `1.5`)
    /// * `unit` - The unit `value` is expressed in
    ///
    /// # Returns
    ///
    /// - `Ok(Size)` - `value * unit.factor()` octets, truncated toward zero
    /// - `Err(SizeError)` - If the amount cannot be represented
    ///
    /// # Errors
    ///
    /// - [`SizeError::InvalidArgument`] if `value` is NaN or infinite
    /// - [`SizeError::OutOfRange`] if the truncated count is negative or does
    ///   not fit in a `u128`
    ///
    /// # Examples
    ///
    /// ```
    /// # use binaryunits::{Size, Unit};
    /// assert_eq!(Size::from_unit(1.5, Unit::Ko)?.octets(), 1_500);
    /// assert_eq!(Size::from_unit(2.0, Unit::Kio)?.octets(), 2_048);
    /// assert!(Size::from_unit(-1.0, Unit::Mo).is_err());
    /// # Ok::<(), binaryunits::SizeError>(())
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn from_unit(value: f64, unit: Unit) -> Result<Self> {
        if !value.is_finite() {
            return Err(SizeError::InvalidArgument(format!(
                "{value} {unit} is not a finite amount"
            )));
        }

        let factor = unit.factor();
        if value < 0.0 {
            // Either truncates to zero or reports the negative count.
            return truncate_to_octets(value * factor as f64).map(Self::new);
        }

        // Whole part scaled in integers: 10^24 has no exact f64 form.
        let whole = value.trunc();
        let whole_octets = truncate_to_octets(whole)?
            .checked_mul(factor)
            .ok_or_else(|| SizeError::overflow(&format!("{value} {unit}")))?;
        let fraction_octets = truncate_to_octets((value - whole) * factor as f64)?;

        whole_octets
            .checked_add(fraction_octets)
            .map(Self::new)
            .ok_or_else(|| SizeError::overflow(&format!("{value} {unit}")))
    }

    /// The raw octet count.
    #[must_use]
    pub const fn octets(&self) -> u128 {
        self.octets
    }

    /// Alias of [`Size::octets`].
    #[must_use]
    pub const fn o(&self) -> u128 {
        self.octets
    }

    /// Whether this size holds no octets at all.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.octets == 0
    }

    /// The size expressed in `unit`, using real (not integer) division.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn to_unit(&self, unit: Unit) -> f64 {
        self.octets as f64 / unit.factor() as f64
    }
}

macro_rules! unit_conversions {
    ($($unit:ident => $from:ident, $to:ident, $name:literal;)*) => {
        impl Size {
            $(
                #[doc = concat!("Create a size from a number of ", $name, "s, truncating toward zero.")]
                #[doc = ""]
                #[doc = "# Errors"]
                #[doc = ""]
                #[doc = "Same as [`Size::from_unit`]."]
                pub fn $from(value: f64) -> Result<Self> {
                    Self::from_unit(value, Unit::$unit)
                }

                #[doc = concat!("Size in ", $name, "s.")]
                #[must_use]
                pub const fn $to(&self) -> f64 {
                    self.to_unit(Unit::$unit)
                }
            )*
        }
    };
}

unit_conversions! {
    Kio => from_kio, kio, "kibioctet";
    Mio => from_mio, mio, "mebioctet";
    Gio => from_gio, gio, "gibioctet";
    Tio => from_tio, tio, "tebioctet";
    Pio => from_pio, pio, "pebioctet";
    Eio => from_eio, eio, "exbioctet";
    Zio => from_zio, zio, "zebioctet";
    Yio => from_yio, yio, "yobioctet";
    Ko => from_ko, ko, "kilooctet";
    Mo => from_mo, mo, "megaoctet";
    Go => from_go, go, "gigaoctet";
    To => from_to, to, "teraoctet";
    Po => from_po, po, "petaoctet";
    Eo => from_eo, eo, "exaoctet";
    Zo => from_zo, zo, "zettaoctet";
    Yo => from_yo, yo, "yottaoctet";
}

/// Truncate a real toward zero and check it is a valid octet count.
///
/// NaN is an invalid argument; infinities and values past `u128::MAX` are
/// out of range.
pub(crate) fn truncate_to_octets(value: f64) -> Result<u128> {
    to_octets(value, false)
}

/// Like [`truncate_to_octets`], but values past `u128::MAX` become
/// `u128::MAX`.
///
/// Only for results that cannot exceed an operand which already fits: the
/// `u128` to `f64` conversion rounds values near the top up to 2^128.
pub(crate) fn saturate_to_octets(value: f64) -> Result<u128> {
    to_octets(value, true)
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_octets(value: f64, saturate: bool) -> Result<u128> {
    if value.is_nan() {
        return Err(SizeError::InvalidArgument(
            "NaN is not an octet count".to_string(),
        ));
    }

    let truncated = value.trunc();
    if truncated < 0.0 {
        return Err(SizeError::negative(&value));
    }
    // `u128::MAX as f64` rounds up to exactly 2^128.
    if truncated >= u128::MAX as f64 {
        return if saturate {
            Ok(u128::MAX)
        } else {
            Err(SizeError::overflow(&value))
        };
    }

    Ok(truncated as u128)
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} octets", self.octets)
    }
}

impl From<Size> for u128 {
    fn from(size: Size) -> Self {
        size.octets
    }
}

macro_rules! from_unsigned {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Size {
                #[allow(clippy::cast_lossless)]
                fn from(octets: $int) -> Self {
                    Self::new(octets as u128)
                }
            }
        )*
    };
}

macro_rules! try_from_signed {
    ($($int:ty),*) => {
        $(
            impl TryFrom<$int> for Size {
                type Error = SizeError;

                fn try_from(octets: $int) -> Result<Self> {
                    u128::try_from(octets)
                        .map(Self::new)
                        .map_err(|_| SizeError::negative(&octets))
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64, usize);

impl From<u128> for Size {
    fn from(octets: u128) -> Self {
        Self::new(octets)
    }
}
try_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for Size {
    type Error = SizeError;

    /// Accepts only whole, finite, non-negative values.
    fn try_from(octets: f64) -> Result<Self> {
        if !octets.is_finite() || octets.fract() != 0.0 {
            return Err(SizeError::InvalidArgument(format!(
                "{octets} is not a whole number of octets"
            )));
        }

        truncate_to_octets(octets).map(Self::new)
    }
}

impl TryFrom<f32> for Size {
    type Error = SizeError;

    fn try_from(octets: f32) -> Result<Self> {
        Self::try_from(f64::from(octets))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
mod tests {
    use super::*;
    use crate::multiple::Multiple;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(size: &Size) -> u64 {
        let mut hasher = DefaultHasher::new();
        size.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_keeps_octets() {
        for octets in [0, 1, 42, 1024, u128::from(u64::MAX), u128::MAX] {
            let size = Size::new(octets);
            assert_eq!(size.octets(), octets);
            assert_eq!(size.o(), octets);
        }
    }

    #[test]
    fn test_zero_and_default() {
        assert_eq!(Size::default(), Size::ZERO);
        assert!(Size::ZERO.is_zero());
        assert!(!Size::new(1).is_zero());
    }

    #[test]
    fn test_try_from_negative_integer() {
        assert!(matches!(
            Size::try_from(-1i64),
            Err(SizeError::OutOfRange(_))
        ));
        assert!(matches!(
            Size::try_from(i128::MIN),
            Err(SizeError::OutOfRange(_))
        ));
        assert_eq!(Size::try_from(7i32).unwrap(), Size::new(7));
    }

    #[test]
    fn test_try_from_float() {
        assert!(matches!(
            Size::try_from(1.5),
            Err(SizeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Size::try_from(f64::NAN),
            Err(SizeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Size::try_from(f64::INFINITY),
            Err(SizeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Size::try_from(-2.0),
            Err(SizeError::OutOfRange(_))
        ));
        assert!(matches!(
            Size::try_from(1e39),
            Err(SizeError::OutOfRange(_))
        ));
        assert_eq!(Size::try_from(2048.0).unwrap(), Size::new(2048));
        assert_eq!(Size::try_from(512.0f32).unwrap(), Size::new(512));
    }

    #[test]
    fn test_from_unsigned() {
        assert_eq!(Size::from(3u8), Size::new(3));
        assert_eq!(Size::from(u64::MAX).octets(), u128::from(u64::MAX));
        assert_eq!(Size::from(10usize), Size::new(10));
        assert_eq!(u128::from(Size::new(99)), 99);
    }

    #[rstest]
    #[case(Unit::Kio, Multiple::KIBI)]
    #[case(Unit::Mio, Multiple::MEBI)]
    #[case(Unit::Gio, Multiple::GIBI)]
    #[case(Unit::Tio, Multiple::TEBI)]
    #[case(Unit::Pio, Multiple::PEBI)]
    #[case(Unit::Eio, Multiple::EXBI)]
    #[case(Unit::Zio, Multiple::ZEBI)]
    #[case(Unit::Yio, Multiple::YOBI)]
    #[case(Unit::Ko, Multiple::KILO)]
    #[case(Unit::Mo, Multiple::MEGA)]
    #[case(Unit::Go, Multiple::GIGA)]
    #[case(Unit::To, Multiple::TERA)]
    #[case(Unit::Po, Multiple::PETA)]
    #[case(Unit::Eo, Multiple::EXA)]
    #[case(Unit::Zo, Multiple::ZETTA)]
    #[case(Unit::Yo, Multiple::YOTTA)]
    fn test_one_unit_is_its_factor(#[case] unit: Unit, #[case] factor: u128) {
        let size = Size::from_unit(1.0, unit).unwrap();
        assert_eq!(size.octets(), factor);
        assert_eq!(size.to_unit(unit), 1.0);
    }

    #[test]
    fn test_named_constructors() {
        assert_eq!(Size::from_kio(2.0).unwrap().octets(), 2048);
        assert_eq!(Size::from_mio(1.0).unwrap().octets(), 1_048_576);
        assert_eq!(Size::from_gio(1.0).unwrap().octets(), 1 << 30);
        assert_eq!(Size::from_ko(1.5).unwrap().octets(), 1500);
        assert_eq!(Size::from_go(1.0).unwrap().octets(), 1_000_000_000);
        assert_eq!(Size::from_yo(1.0).unwrap().octets(), Multiple::YOTTA);
    }

    #[test]
    fn test_from_unit_truncates_toward_zero() {
        // 1.9999 * 1000 = 1999.9
        assert_eq!(Size::from_ko(1.9999).unwrap().octets(), 1999);
        assert_eq!(Size::from_kio(0.0009).unwrap(), Size::ZERO);
        assert_eq!(Size::from_kio(-0.0001).unwrap(), Size::ZERO);
    }

    #[test]
    fn test_from_unit_rejects_bad_amounts() {
        assert!(matches!(
            Size::from_kio(-1.0),
            Err(SizeError::OutOfRange(_))
        ));
        assert!(matches!(
            Size::from_mo(f64::NAN),
            Err(SizeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Size::from_go(f64::NEG_INFINITY),
            Err(SizeError::InvalidArgument(_))
        ));
        assert!(matches!(
            Size::from_yio(1e30),
            Err(SizeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_accessors_use_real_division() {
        assert_eq!(Size::new(1024).kio(), 1.0);
        assert_eq!(Size::new(1000).ko(), 1.0);
        assert_eq!(Size::new(1024).ko(), 1.024);
        assert_eq!(Size::new(512).kio(), 0.5);
        assert_eq!(Size::new(1_500_000).mo(), 1.5);
    }

    #[test]
    fn test_gio_divides_by_gibi() {
        let size = Size::new(1 << 30);
        assert_eq!(size.gio(), 1.0);
        assert_eq!(size.go(), 1.073_741_824);
    }

    #[test]
    fn test_round_trips() {
        assert_eq!(Size::from_kio(2.0).unwrap().kio(), 2.0);
        assert_eq!(Size::from_go(1.0).unwrap().go(), 1.0);
        assert_eq!(Size::from_tio(3.0).unwrap().tio(), 3.0);
        assert_eq!(Size::from_po(4.0).unwrap().po(), 4.0);
    }

    #[test]
    fn test_ordering_is_total() {
        let samples = [0u128, 1, 1023, 1024, 1_000_000];
        for a in samples {
            for b in samples {
                let (left, right) = (Size::new(a), Size::new(b));
                let holding = [left < right, left == right, left > right]
                    .iter()
                    .filter(|held| **held)
                    .count();
                assert_eq!(holding, 1, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_equal_sizes_hash_equally() {
        assert_eq!(Size::new(5), Size::new(5));
        assert_eq!(hash_of(&Size::new(5)), hash_of(&Size::new(5)));
        assert_eq!(
            hash_of(&Size::from_kio(1.0).unwrap()),
            hash_of(&Size::new(1024))
        );
    }

    #[test]
    fn test_saturate_to_octets() {
        assert_eq!(saturate_to_octets(u128::MAX as f64).unwrap(), u128::MAX);
        assert_eq!(saturate_to_octets(1e300).unwrap(), u128::MAX);
        assert_eq!(saturate_to_octets(41.9).unwrap(), 41);
        assert!(matches!(
            truncate_to_octets(u128::MAX as f64),
            Err(SizeError::OutOfRange(_))
        ));
        assert!(matches!(
            saturate_to_octets(-1.0),
            Err(SizeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(Size::new(42).to_string(), "42 octets");
        assert_eq!(Size::ZERO.to_string(), "0 octets");
        assert_eq!(format!("{:?}", Size::new(42)), "Size { octets: 42 }");
    }

    #[test]
    fn test_serde_is_transparent() {
        assert_eq!(serde_json::to_string(&Size::new(4096)).unwrap(), "4096");

        let size: Size = serde_json::from_str("1048576").unwrap();
        assert_eq!(size, Size::new(1_048_576));

        assert!(serde_json::from_str::<Size>("-1").is_err());
    }
}
