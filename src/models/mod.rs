pub mod lenient;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use lenient::parse_int;

/// Listing status as reported by the rental API.
/// The value set is open; anything unrecognized is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyStatus {
    Available,
    Rented,
    Pending,
    Inactive,
    Other(String),
}

impl PropertyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Rented => "Rented",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Inactive => "Inactive",
            PropertyStatus::Other(s) => s,
        }
    }
}

impl From<String> for PropertyStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Available" => PropertyStatus::Available,
            "Rented" => PropertyStatus::Rented,
            "Pending" => PropertyStatus::Pending,
            "Inactive" => PropertyStatus::Inactive,
            _ => PropertyStatus::Other(value),
        }
    }
}

impl From<&str> for PropertyStatus {
    fn from(value: &str) -> Self {
        PropertyStatus::from(value.to_string())
    }
}

impl From<PropertyStatus> for String {
    fn from(value: PropertyStatus) -> Self {
        match value {
            PropertyStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl Default for PropertyStatus {
    fn default() -> Self {
        PropertyStatus::Other(String::new())
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rental listing as served by `GET /Properties`.
///
/// Only `property_id` is required. Price and room counts may arrive as numbers
/// or numeric strings and are coerced on the way in; a value that cannot be
/// read as an integer is stored as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub property_id: i64,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub municipality: String,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub status: PropertyStatus,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub room_type: String,
    #[serde(default, deserialize_with = "lenient::int_or_string")]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int_or_string")]
    pub total_bedrooms: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int_or_string")]
    pub total_washrooms: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int_or_string")]
    pub total_kitchens: Option<i64>,
    #[serde(default, deserialize_with = "lenient::null_default")]
    pub images: Vec<String>,
    /// Fields this crate does not interpret, kept so a save keeps them
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Property {
    pub fn new(property_id: i64) -> Self {
        Self {
            property_id,
            title: String::new(),
            description: String::new(),
            city: String::new(),
            municipality: String::new(),
            status: PropertyStatus::default(),
            room_type: String::new(),
            price: None,
            total_bedrooms: None,
            total_washrooms: None,
            total_kitchens: None,
            images: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn bedrooms(&self) -> i64 {
        self.total_bedrooms.unwrap_or(0)
    }

    pub fn washrooms(&self) -> i64 {
        self.total_washrooms.unwrap_or(0)
    }

    pub fn kitchens(&self) -> i64 {
        self.total_kitchens.unwrap_or(0)
    }
}

/// A saved property list together with where and when it was fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub source: String,
    pub properties: Vec<Property>,
}

impl ListingSnapshot {
    pub fn new(source: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            fetched_at: Utc::now(),
            source: source.into(),
            properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_mixed_numeric_fields() {
        let raw = json!({
            "propertyId": 7,
            "city": "Kathmandu",
            "status": "Available",
            "roomType": "Apartment",
            "price": "15000",
            "totalBedrooms": 2,
            "totalWashrooms": "1",
            "landlordId": 3
        });

        let property: Property = serde_json::from_value(raw).unwrap();
        assert_eq!(property.property_id, 7);
        assert_eq!(property.status, PropertyStatus::Available);
        assert_eq!(property.price, Some(15000));
        assert_eq!(property.total_bedrooms, Some(2));
        assert_eq!(property.total_washrooms, Some(1));
        assert_eq!(property.total_kitchens, None);
        assert_eq!(property.kitchens(), 0);
        assert_eq!(property.extra.get("landlordId"), Some(&json!(3)));
    }

    #[test]
    fn test_malformed_price_is_absent() {
        let raw = json!({ "propertyId": 1, "price": "negotiable", "totalBedrooms": "n/a" });
        let property: Property = serde_json::from_value(raw).unwrap();
        assert_eq!(property.price, None);
        assert_eq!(property.bedrooms(), 0);
    }

    #[test]
    fn test_unknown_status_passes_through() {
        let raw = json!({ "propertyId": 1, "status": "UnderMaintenance" });
        let property: Property = serde_json::from_value(raw).unwrap();
        assert_eq!(
            property.status,
            PropertyStatus::Other("UnderMaintenance".to_string())
        );

        let back = serde_json::to_value(&property).unwrap();
        assert_eq!(back["status"], json!("UnderMaintenance"));
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let raw = json!({
            "propertyId": 3,
            "title": null,
            "description": null,
            "municipality": null,
            "status": null,
            "roomType": null,
            "images": null,
            "price": null
        });
        let property: Property = serde_json::from_value(raw).unwrap();
        assert_eq!(property, Property::new(3));
    }
}
