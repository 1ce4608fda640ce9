// Property Classification Contract Tests
//
// Downstream consumers render and validate values by PropertyType.
// The rule order and the STRING fallback are part of the public contract.

use taxonomy_core::{classify, PropertyDefinition, PropertyType};

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

fn kind(name: &str, range: Option<&str>) -> PropertyType {
    let mut builder = PropertyDefinition::builder().name(name);
    if let Some(range) = range {
        builder = builder.range_type(range);
    }
    classify(&builder.build())
}

/// WHY: The kind set is closed at nine values
/// BREAKS: Exhaustive matches in consumers if a kind is added silently
#[test]
fn property_kinds_are_closed_set() {
    assert_eq!(PropertyType::ALL.len(), 9);
}

/// WHY: "address" only overrides a string range
/// REASON: The name check lives inside the xsd:string rule
/// BREAKS: Decimal/date properties named "address" would become ADDRESS
#[test]
fn address_override_is_scoped_to_string_range() {
    assert_eq!(kind("address", Some(XSD_STRING)), PropertyType::Address);
    assert_eq!(
        kind("address", Some("http://www.w3.org/2001/XMLSchema#integer")),
        PropertyType::Integer
    );
    assert_eq!(kind("address", None), PropertyType::String);
}

/// WHY: Unknown or missing ranges degrade to STRING
/// REASON: Schema evolution must not break consumers
#[test]
fn unknown_ranges_fall_back_to_string() {
    assert_eq!(kind("unknownProperty", Some("http://unknown.com/type")), PropertyType::String);
    assert_eq!(kind("nullRangeProperty", None), PropertyType::String);
    assert_eq!(kind("empty", Some("")), PropertyType::String);
}

/// WHY: Custom range heuristics match by substring, Point before LocationType
#[test]
fn custom_range_heuristics() {
    assert_eq!(
        kind("position", Some("http://www.w3.org/2003/01/geo/wgs84_pos#Point")),
        PropertyType::GeoPoint
    );
    assert_eq!(
        kind("type", Some("http://taxonomy.sirktek.no/logistics#LocationType")),
        PropertyType::LocationType
    );
}

/// WHY: Classification is deterministic
#[test]
fn classification_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(kind("address", Some(XSD_STRING)), PropertyType::Address);
    }
}
