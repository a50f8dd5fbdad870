//! # binaryunits
//!
//! An immutable value type for quantities of binary data, counted in octets
//! (8-bit bytes).
//!
//! A [`Size`] converts to and from the decimal multiples (kilo-, mega-, ...
//! yotta-octets) and the binary multiples (kibi-, mebi-, ... yobi-octets),
//! compares and hashes by octet count, and supports checked arithmetic.
//!
//! ## Features
//!
//! - Sixteen named units, from [`Unit::Kio`] to [`Unit::Yo`], backed by the
//!   exact factors in [`Multiple`]
//! - Conversions that truncate toward zero when building a size, and use real
//!   division when reading one back
//! - Arithmetic that never mutates its operands and reports failures as
//!   [`SizeError`] values
//! - Auto-scaled human-readable output via [`Size::humanize`]
//!
//! ## Example
//!
//! ```
//! use binaryunits::{Scale, Size};
//!
//! let size = Size::from_mio(1.0)?;
//! assert_eq!(size.octets(), 1_048_576);
//! assert_eq!(size.div_floor(Size::new(1024))?, 1024);
//! assert_eq!(Size::new(1050).div_rem(Size::new(1024))?, (1, Size::new(26)));
//! println!("{size} ({})", size.humanize(Scale::Binary));
//! # Ok::<(), binaryunits::SizeError>(())
//! ```

pub mod error;
pub mod humanize;
pub mod multiple;
pub mod size;

pub use error::{Result, SizeError};
pub use humanize::Scale;
pub use multiple::{Multiple, Unit};
pub use size::Size;
