//! Semantic property kinds and the range → kind classifier.
//!
//! Classification walks an ordered rule table; the first rule that matches
//! decides. Unknown ranges resolve to [`PropertyType::String`] so that schema
//! changes never break consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::property::PropertyDefinition;
use crate::schema::vocab::{
    XSD_ANY_URI, XSD_BOOLEAN, XSD_DATE, XSD_DECIMAL, XSD_INTEGER, XSD_STRING,
};

/// Property name that turns an `xsd:string` range into [`PropertyType::Address`].
pub const ADDRESS_PROPERTY: &str = "address";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    String,
    Decimal,
    Integer,
    Date,
    Boolean,
    Url,
    Address,
    GeoPoint,
    LocationType,
}

impl PropertyType {
    pub const ALL: [PropertyType; 9] = [
        Self::String,
        Self::Decimal,
        Self::Integer,
        Self::Date,
        Self::Boolean,
        Self::Url,
        Self::Address,
        Self::GeoPoint,
        Self::LocationType,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Decimal => "DECIMAL",
            Self::Integer => "INTEGER",
            Self::Date => "DATE",
            Self::Boolean => "BOOLEAN",
            Self::Url => "URL",
            Self::Address => "ADDRESS",
            Self::GeoPoint => "GEO_POINT",
            Self::LocationType => "LOCATION_TYPE",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classification rule: predicate over (range, name) and its result.
struct Rule {
    matches: fn(&str, &str) -> bool,
    kind: PropertyType,
}

const fn rule(kind: PropertyType, matches: fn(&str, &str) -> bool) -> Rule {
    Rule { matches, kind }
}

/// Evaluated in order against a present range. The `address` override sits
/// inside the `xsd:string` branch only.
const RULES: &[Rule] = &[
    rule(PropertyType::Address, |range, name| {
        range == XSD_STRING && name == ADDRESS_PROPERTY
    }),
    rule(PropertyType::String, |range, _| range == XSD_STRING),
    rule(PropertyType::Decimal, |range, _| range == XSD_DECIMAL),
    rule(PropertyType::Date, |range, _| range == XSD_DATE),
    rule(PropertyType::Boolean, |range, _| range == XSD_BOOLEAN),
    rule(PropertyType::Url, |range, _| range == XSD_ANY_URI),
    rule(PropertyType::Integer, |range, _| range == XSD_INTEGER),
    rule(PropertyType::GeoPoint, |range, _| range.contains("Point")),
    rule(PropertyType::LocationType, |range, _| range.contains("LocationType")),
];

/// Classify a property by its declared range and name. Total and pure.
pub fn classify(property: &PropertyDefinition) -> PropertyType {
    match property.range_type() {
        None => PropertyType::String,
        Some(range) => classify_range(range, property.name()),
    }
}

/// Classify a present range IRI. An empty range is present, not absent.
pub fn classify_range(range: &str, name: &str) -> PropertyType {
    RULES
        .iter()
        .find(|rule| (rule.matches)(range, name))
        .map(|rule| rule.kind)
        .unwrap_or(PropertyType::String)
}
