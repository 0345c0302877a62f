use crate::models::{lenient, parse_int, Property, PropertyStatus};
use serde::{Deserialize, Serialize};

/// Value a select control uses to mean "do not filter on this field"
pub const ALL: &str = "All";

/// Filter values exactly as a filter panel hands them over: every field is
/// optional free text, numeric ones included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterInput {
    #[serde(deserialize_with = "lenient::text_or_number")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient::text_or_number")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient::text_or_number")]
    pub room_type: Option<String>,
    #[serde(deserialize_with = "lenient::text_or_number")]
    pub min_price: Option<String>,
    #[serde(deserialize_with = "lenient::text_or_number")]
    pub max_price: Option<String>,
    #[serde(deserialize_with = "lenient::text_or_number")]
    pub bedrooms: Option<String>,
    #[serde(deserialize_with = "lenient::text_or_number")]
    pub bathrooms: Option<String>,
    #[serde(deserialize_with = "lenient::text_or_number")]
    pub kitchens: Option<String>,
}

/// Normalized filter criteria. `None` means the field does not constrain the
/// result; all active fields are combined with AND.
///
/// Deserializing goes through [`FilterInput`], so JSON filters obey the same
/// blank / `"All"` / non-numeric rules as panel input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "FilterInput")]
pub struct FilterSet {
    /// Case-insensitive substring of city, municipality or title
    pub city: Option<String>,
    pub status: Option<PropertyStatus>,
    pub room_type: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    /// At least this many bedrooms
    pub bedrooms: Option<i64>,
    /// At least this many washrooms
    pub bathrooms: Option<i64>,
    /// At least this many kitchens
    pub kitchens: Option<i64>,
}

fn text_value(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn choice_value(raw: Option<&str>) -> Option<String> {
    text_value(raw).filter(|s| s != ALL)
}

fn numeric_value(raw: Option<&str>) -> Option<i64> {
    raw.and_then(parse_int)
}

impl From<FilterInput> for FilterSet {
    fn from(input: FilterInput) -> Self {
        FilterSet::from_input(&input)
    }
}

impl FilterSet {
    /// Build a filter set from raw panel input. Blank text, the `"All"`
    /// sentinel and numbers that do not parse all leave the field unset.
    pub fn from_input(input: &FilterInput) -> Self {
        Self {
            city: text_value(input.city.as_deref()),
            status: choice_value(input.status.as_deref()).map(PropertyStatus::from),
            room_type: choice_value(input.room_type.as_deref()),
            min_price: numeric_value(input.min_price.as_deref()),
            max_price: numeric_value(input.max_price.as_deref()),
            bedrooms: numeric_value(input.bedrooms.as_deref()),
            bathrooms: numeric_value(input.bathrooms.as_deref()),
            kitchens: numeric_value(input.kitchens.as_deref()),
        }
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = text_value(Some(city));
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = choice_value(Some(status)).map(PropertyStatus::from);
        self
    }

    pub fn with_room_type(mut self, room_type: &str) -> Self {
        self.room_type = choice_value(Some(room_type));
        self
    }

    pub fn with_price_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_min_rooms(
        mut self,
        bedrooms: Option<i64>,
        bathrooms: Option<i64>,
        kitchens: Option<i64>,
    ) -> Self {
        self.bedrooms = bedrooms;
        self.bathrooms = bathrooms;
        self.kitchens = kitchens;
        self
    }

    /// True when no field constrains the result
    pub fn is_empty(&self) -> bool {
        *self == FilterSet::default()
    }

    /// Decide whether a single property passes every active filter.
    ///
    /// A property without a readable price fails any active price bound.
    /// Missing room counts are compared as zero.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(needle) = &self.city {
            let needle = needle.to_lowercase();
            let hit = [&property.city, &property.municipality, &property.title]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(status) = &self.status {
            if property.status != *status {
                return false;
            }
        }

        if let Some(room_type) = &self.room_type {
            if property.room_type != *room_type {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if !property.price.is_some_and(|price| price >= min) {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if !property.price.is_some_and(|price| price <= max) {
                return false;
            }
        }

        let counts = [
            (self.bedrooms, property.bedrooms()),
            (self.bathrooms, property.washrooms()),
            (self.kitchens, property.kitchens()),
        ];
        counts
            .iter()
            .all(|(bound, actual)| bound.map_or(true, |min| *actual >= min))
    }
}

/// Return the properties passing every active filter, in their original order.
/// The input is left untouched.
pub fn filter_properties(properties: &[Property], filters: &FilterSet) -> Vec<Property> {
    if filters.is_empty() {
        return properties.to_vec();
    }
    properties
        .iter()
        .filter(|property| filters.matches(property))
        .cloned()
        .collect()
}
