//! Integration tests for binaryunits
//!
//! These tests exercise the public API end to end: building sizes from raw
//! counts and units, reading them back, comparing them and combining them.

#![allow(clippy::float_cmp)]

use std::collections::{BTreeSet, HashMap};

use anyhow::Result;
use binaryunits::{Multiple, Scale, Size, SizeError, Unit};

/// Helper function to build a size from a count of kibioctets
fn kibioctets(count: u128) -> Size {
    Size::new(count * Multiple::KIBI)
}

#[test]
fn test_octets_are_preserved() {
    for octets in [0u128, 1, 7, 4096, 1 << 64, u128::MAX] {
        assert_eq!(Size::new(octets).octets(), octets);
    }
}

#[test]
fn test_invalid_construction() {
    assert!(matches!(
        Size::try_from(-1i32),
        Err(SizeError::OutOfRange(_))
    ));
    assert!(matches!(
        Size::try_from(1.5f64),
        Err(SizeError::InvalidArgument(_))
    ));
}

#[test]
fn test_addition_and_subtraction() -> Result<()> {
    let pairs = [(0u128, 0u128), (10, 3), (1024, 1024), (1 << 40, 1 << 20)];

    for (a, b) in pairs {
        assert_eq!((Size::new(a) + Size::new(b)).octets(), a + b);
        assert_eq!((Size::new(a) - Size::new(b))?.octets(), a - b);
    }

    assert!(matches!(
        Size::new(3) - Size::new(10),
        Err(SizeError::OutOfRange(_))
    ));

    Ok(())
}

#[test]
fn test_unit_round_trips() -> Result<()> {
    assert_eq!(Size::from_kio(2.0)?.kio(), 2.0);
    assert_eq!(Size::from_go(1.0)?.go(), 1.0);

    for unit in Unit::BINARY.into_iter().chain(Unit::DECIMAL) {
        let size = Size::from_unit(3.0, unit)?;
        assert_eq!(size.octets(), 3 * unit.factor(), "{unit}");
        assert_eq!(size.to_unit(unit), 3.0, "{unit}");
    }

    Ok(())
}

#[test]
fn test_unit_conversion_exactness() {
    assert_eq!(Size::new(1024).kio(), 1.0);
    assert_eq!(Size::new(1000).ko(), 1.0);
    assert_eq!(Size::new(1024).ko(), 1.024);
    assert_eq!(kibioctets(1536).mio(), 1.5);
}

#[test]
fn test_sizes_as_keys() {
    let mut seen = HashMap::new();
    seen.insert(Size::new(1024), "one kibioctet");
    assert_eq!(seen.get(&kibioctets(1)), Some(&"one kibioctet"));

    let ordered: BTreeSet<Size> = [Size::new(30), Size::new(10), Size::new(20), Size::new(10)]
        .into_iter()
        .collect();
    let octets: Vec<u128> = ordered.iter().map(Size::octets).collect();
    assert_eq!(octets, vec![10, 20, 30]);
}

#[test]
fn test_division_by_zero() {
    assert_eq!(Size::new(10) / Size::ZERO, Err(SizeError::DivisionByZero));
    assert_eq!(Size::new(10) % Size::ZERO, Err(SizeError::DivisionByZero));
    assert_eq!(
        Size::new(10).div_rem(Size::ZERO),
        Err(SizeError::DivisionByZero)
    );
}

#[test]
fn test_string_rendering() {
    assert_eq!(Size::new(42).to_string(), "42 octets");
    assert_eq!(format!("{:?}", Size::new(42)), "Size { octets: 42 }");
}

#[test]
fn test_end_to_end_example() -> Result<()> {
    let one_mebioctet = Size::from_mio(1.0)?;
    assert_eq!(one_mebioctet.octets(), 1_048_576);
    assert_eq!(Size::new(1_048_576).div_floor(Size::new(1024))?, 1024);
    assert_eq!(
        Size::new(1050).div_rem(Size::new(1024))?,
        (1, Size::new(26))
    );

    let half = (one_mebioctet / 2u64)?;
    assert_eq!(half, kibioctets(512));
    assert_eq!((one_mebioctet / half)?, 2.0);
    assert_eq!((half * 2.0)?, one_mebioctet);

    Ok(())
}

#[test]
fn test_total_of_many_sizes() {
    let total: Size = (1..=4u128).map(kibioctets).sum();
    assert_eq!(total, kibioctets(10));
    assert_eq!(total.best_unit(Scale::Binary), Some(Unit::Kio));
    assert!(total.humanize(Scale::Binary).ends_with("KiB"));
}

#[test]
fn test_serialized_inside_a_document() -> Result<()> {
    let mut document = HashMap::new();
    document.insert("cache", Size::from_mo(250.0)?);

    let json = serde_json::to_string(&document)?;
    assert_eq!(json, r#"{"cache":250000000}"#);

    let parsed: HashMap<String, Size> = serde_json::from_str(&json)?;
    assert_eq!(parsed["cache"].mo(), 250.0);

    Ok(())
}
