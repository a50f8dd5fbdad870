//! Human-readable, auto-scaled rendering of sizes.
//!
//! [`Size`]'s `Display` always prints the raw octet count. This module picks
//! a suitable prefix instead, using either decimal (`kB`, `MB`, ...) or binary
//! (`KiB`, `MiB`, ...) multiples.

use humansize::{BINARY, DECIMAL, FormatSizeOptions, format_size_i};
use serde::{Deserialize, Serialize};

use crate::multiple::Unit;
use crate::size::Size;

/// Which family of multiples to scale by.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Powers of 1000 (kB, MB, GB, ...)
    #[default]
    Decimal,

    /// Powers of 1024 (KiB, MiB, GiB, ...)
    Binary,
}

impl Scale {
    /// Units of this scale, smallest first.
    #[must_use]
    pub const fn units(self) -> [Unit; 8] {
        match self {
            Self::Decimal => Unit::DECIMAL,
            Self::Binary => Unit::BINARY,
        }
    }

    const fn options(self) -> FormatSizeOptions {
        match self {
            Self::Decimal => DECIMAL,
            Self::Binary => BINARY,
        }
    }
}

impl Size {
    /// Render the size with the largest fitting prefix of `scale`.
    ///
    /// Unlike `Display`, which always prints the exact octet count, this
    /// rounds to a couple of decimal places for display purposes.
    ///
    /// # Arguments
    ///
    /// * `scale` - Whether to use decimal (`kB`, `MB`, ...) or binary
    ///   (`KiB`, `MiB`, ...) prefixes
    ///
    /// # Returns
    ///
    /// The formatted size, e.g. a value ending in `MB` for 1.5 million octets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use binaryunits::{Scale, Size};
    /// let size = Size::new(1_500_000);
    /// assert!(size.humanize(Scale::Decimal).ends_with("MB"));
    /// assert!(Size::new(2_097_152).humanize(Scale::Binary).ends_with("MiB"));
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn humanize(&self, scale: Scale) -> String {
        format_size_i(self.octets() as f64, scale.options())
    }

    /// The largest unit of `scale` that is not bigger than this size.
    ///
    /// Returns `None` for sizes below one kilooctet (or kibioctet).
    #[must_use]
    pub fn best_unit(&self, scale: Scale) -> Option<Unit> {
        scale
            .units()
            .into_iter()
            .rev()
            .find(|unit| unit.factor() <= self.octets())
    }
}
