//! Scale factors for binary and decimal multiples of the octet.
//!
//! [`Multiple`] holds the raw factors as exact integers, and [`Unit`] names
//! each multiple so sizes can be converted generically.
//!
//! ## Units
//!
//! - **Binary** (powers of 1024): Kio, Mio, Gio, Tio, Pio, Eio, Zio, Yio
//! - **Decimal** (powers of 1000): ko, Mo, Go, To, Po, Eo, Zo, Yo

use std::fmt;

use serde::{Deserialize, Serialize};

/// Table of scale factors, in octets.
///
/// Every factor fits exactly in a `u128`, including `YOTTA` (10^24) and
/// `YOBI` (2^80).
#[derive(Debug, Clone, Copy)]
pub struct Multiple;

impl Multiple {
    pub const KIBI: u128 = 1 << 10;
    pub const MEBI: u128 = 1 << 20;
    pub const GIBI: u128 = 1 << 30;
    pub const TEBI: u128 = 1 << 40;
    pub const PEBI: u128 = 1 << 50;
    pub const EXBI: u128 = 1 << 60;
    pub const ZEBI: u128 = 1 << 70;
    pub const YOBI: u128 = 1 << 80;

    pub const KILO: u128 = 1_000;
    pub const MEGA: u128 = 1_000_000;
    pub const GIGA: u128 = 1_000_000_000;
    pub const TERA: u128 = 1_000_000_000_000;
    pub const PETA: u128 = 1_000_000_000_000_000;
    pub const EXA: u128 = 1_000_000_000_000_000_000;
    pub const ZETTA: u128 = 1_000_000_000_000_000_000_000;
    pub const YOTTA: u128 = 1_000_000_000_000_000_000_000_000;
}

/// A named multiple of the octet.
///
/// Serialized by its symbol (`"Kio"`, `"ko"`, `"Mo"`, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Unit {
    /// Kibioctet, 2^10 octets
    Kio,

    /// Mebioctet, 2^20 octets
    Mio,

    /// Gibioctet, 2^30 octets
    Gio,

    /// Tebioctet, 2^40 octets
    Tio,

    /// Pebioctet, 2^50 octets
    Pio,

    /// Exbioctet, 2^60 octets
    Eio,

    /// Zebioctet, 2^70 octets
    Zio,

    /// Yobioctet, 2^80 octets
    Yio,

    /// Kilooctet, 10^3 octets
    #[serde(rename = "ko")]
    Ko,

    /// Megaoctet, 10^6 octets
    Mo,

    /// Gigaoctet, 10^9 octets
    Go,

    /// Teraoctet, 10^12 octets
    To,

    /// Petaoctet, 10^15 octets
    Po,

    /// Exaoctet, 10^18 octets
    Eo,

    /// Zettaoctet, 10^21 octets
    Zo,

    /// Yottaoctet, 10^24 octets
    Yo,
}

impl Unit {
    /// Binary units, smallest first.
    pub const BINARY: [Self; 8] = [
        Self::Kio,
        Self::Mio,
        Self::Gio,
        Self::Tio,
        Self::Pio,
        Self::Eio,
        Self::Zio,
        Self::Yio,
    ];

    /// Decimal units, smallest first.
    pub const DECIMAL: [Self; 8] = [
        Self::Ko,
        Self::Mo,
        Self::Go,
        Self::To,
        Self::Po,
        Self::Eo,
        Self::Zo,
        Self::Yo,
    ];

    /// Number of octets in one of this unit.
    #[must_use]
    pub const fn factor(self) -> u128 {
        match self {
            Self::Kio => Multiple::KIBI,
            Self::Mio => Multiple::MEBI,
            Self::Gio => Multiple::GIBI,
            Self::Tio => Multiple::TEBI,
            Self::Pio => Multiple::PEBI,
            Self::Eio => Multiple::EXBI,
            Self::Zio => Multiple::ZEBI,
            Self::Yio => Multiple::YOBI,
            Self::Ko => Multiple::KILO,
            Self::Mo => Multiple::MEGA,
            Self::Go => Multiple::GIGA,
            Self::To => Multiple::TERA,
            Self::Po => Multiple::PETA,
            Self::Eo => Multiple::EXA,
            Self::Zo => Multiple::ZETTA,
            Self::Yo => Multiple::YOTTA,
        }
    }

    /// Short symbol, e.g. `"Mio"` or `"ko"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Kio => "Kio",
            Self::Mio => "Mio",
            Self::Gio => "Gio",
            Self::Tio => "Tio",
            Self::Pio => "Pio",
            Self::Eio => "Eio",
            Self::Zio => "Zio",
            Self::Yio => "Yio",
            Self::Ko => "ko",
            Self::Mo => "Mo",
            Self::Go => "Go",
            Self::To => "To",
            Self::Po => "Po",
            Self::Eo => "Eo",
            Self::Zo => "Zo",
            Self::Yo => "Yo",
        }
    }

    /// Long singular name, e.g. `"mebioctet"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kio => "kibioctet",
            Self::Mio => "mebioctet",
            Self::Gio => "gibioctet",
            Self::Tio => "tebioctet",
            Self::Pio => "pebioctet",
            Self::Eio => "exbioctet",
            Self::Zio => "zebioctet",
            Self::Yio => "yobioctet",
            Self::Ko => "kilooctet",
            Self::Mo => "megaoctet",
            Self::Go => "gigaoctet",
            Self::To => "teraoctet",
            Self::Po => "petaoctet",
            Self::Eo => "exaoctet",
            Self::Zo => "zettaoctet",
            Self::Yo => "yottaoctet",
        }
    }

    /// Whether this is a power-of-1024 unit.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            Self::Kio
                | Self::Mio
                | Self::Gio
                | Self::Tio
                | Self::Pio
                | Self::Eio
                | Self::Zio
                | Self::Yio
        )
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
