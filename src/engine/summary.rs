use super::filter::FilterSet;
use serde::Serialize;
use std::fmt;

/// The individually removable fields of a [`FilterSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FilterField {
    City,
    Status,
    RoomType,
    MinPrice,
    MaxPrice,
    Bedrooms,
    Bathrooms,
    Kitchens,
}

/// One chip in the active-filter strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
    pub field: FilterField,
    pub label: String,
}

impl ActiveFilter {
    /// Remove this filter from `filters`, leaving every other field as is
    pub fn clear(&self, filters: &mut FilterSet) {
        filters.clear(self.field);
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl FilterSet {
    /// Unset a single field
    pub fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::City => self.city = None,
            FilterField::Status => self.status = None,
            FilterField::RoomType => self.room_type = None,
            FilterField::MinPrice => self.min_price = None,
            FilterField::MaxPrice => self.max_price = None,
            FilterField::Bedrooms => self.bedrooms = None,
            FilterField::Bathrooms => self.bathrooms = None,
            FilterField::Kitchens => self.kitchens = None,
        }
    }
}

/// Describe every active filter, in panel order.
pub fn summarize(filters: &FilterSet) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();
    let mut push = |field, label: String| chips.push(ActiveFilter { field, label });

    if let Some(city) = &filters.city {
        push(FilterField::City, format!("Location: {}", city));
    }
    if let Some(status) = &filters.status {
        push(FilterField::Status, format!("Status: {}", status));
    }
    if let Some(room_type) = &filters.room_type {
        push(FilterField::RoomType, format!("Type: {}", room_type));
    }
    if let Some(min) = filters.min_price {
        push(FilterField::MinPrice, format!("Min Price: {}", min));
    }
    if let Some(max) = filters.max_price {
        push(FilterField::MaxPrice, format!("Max Price: {}", max));
    }
    if let Some(n) = filters.bedrooms {
        push(FilterField::Bedrooms, format!("{}+ Bed", n));
    }
    if let Some(n) = filters.bathrooms {
        push(FilterField::Bathrooms, format!("{}+ Bath", n));
    }
    if let Some(n) = filters.kitchens {
        push(FilterField::Kitchens, format!("{}+ Kitchen", n));
    }

    chips
}

/// Whether the summary strip and the reset action should be shown
pub fn has_active_filters(filters: &FilterSet) -> bool {
    !filters.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_no_chips() {
        let filters = FilterSet::default();
        assert!(summarize(&filters).is_empty());
        assert!(!has_active_filters(&filters));
    }

    #[test]
    fn test_labels() {
        let filters = FilterSet::default()
            .with_city("Kathmandu")
            .with_status("Available")
            .with_price_range(Some(4000), None)
            .with_min_rooms(Some(3), None, Some(1));

        let labels: Vec<String> = summarize(&filters).iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Location: Kathmandu",
                "Status: Available",
                "Min Price: 4000",
                "3+ Bed",
                "1+ Kitchen",
            ]
        );
        assert!(has_active_filters(&filters));
    }

    #[test]
    fn test_clear_removes_only_its_field() {
        let mut filters = FilterSet::default()
            .with_city("Pokhara")
            .with_room_type("Room")
            .with_min_rooms(None, Some(2), None);

        let chips = summarize(&filters);
        let room_chip = chips
            .iter()
            .find(|c| c.field == FilterField::RoomType)
            .unwrap();
        room_chip.clear(&mut filters);

        assert_eq!(filters.room_type, None);
        assert_eq!(filters.city.as_deref(), Some("Pokhara"));
        assert_eq!(filters.bathrooms, Some(2));
        assert_eq!(summarize(&filters).len(), 2);
    }

    #[test]
    fn test_clearing_every_chip_empties_the_set() {
        let mut filters = FilterSet::default()
            .with_city("Bhaktapur")
            .with_price_range(Some(1), Some(2))
            .with_min_rooms(Some(1), Some(1), Some(1));

        for chip in summarize(&filters) {
            chip.clear(&mut filters);
        }
        assert!(!has_active_filters(&filters));
    }
}
