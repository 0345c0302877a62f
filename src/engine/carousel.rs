//! Image carousel state for listing cards.
//!
//! Used by interactive screens that let the user swipe through a card's
//! images; the CLI only prints the first image and does not keep one.

use crate::models::Property;
use std::collections::HashMap;

/// Which image each listing card is currently showing, keyed by property id.
#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    positions: HashMap<i64, usize>,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the image shown for `property`; 0 until the user swipes
    pub fn index(&self, property: &Property) -> usize {
        let count = property.images.len();
        if count == 0 {
            return 0;
        }
        self.positions
            .get(&property.property_id)
            .copied()
            .unwrap_or(0)
            % count
    }

    pub fn current_image<'a>(&self, property: &'a Property) -> Option<&'a str> {
        property
            .images
            .get(self.index(property))
            .map(String::as_str)
    }

    /// Advance to the next image, wrapping after the last one
    pub fn next(&mut self, property: &Property) -> usize {
        let count = property.images.len();
        if count == 0 {
            return 0;
        }
        let next = (self.index(property) + 1) % count;
        self.positions.insert(property.property_id, next);
        next
    }

    /// Step back one image, wrapping before the first one
    pub fn prev(&mut self, property: &Property) -> usize {
        let count = property.images.len();
        if count == 0 {
            return 0;
        }
        let prev = (self.index(property) + count - 1) % count;
        self.positions.insert(property.property_id, prev);
        prev
    }

    /// Forget positions for cards that are no longer on screen
    pub fn retain_visible<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a Property>,
    {
        let ids: std::collections::HashSet<i64> =
            visible.into_iter().map(|p| p.property_id).collect();
        self.positions.retain(|id, _| ids.contains(id));
    }

    pub fn tracked(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_images(id: i64, n: usize) -> Property {
        let mut p = Property::new(id);
        p.images = (0..n).map(|i| format!("https://img.example/{}/{}.jpg", id, i)).collect();
        p
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut carousel = CarouselState::new();
        let p = with_images(1, 3);

        assert_eq!(carousel.index(&p), 0);
        assert_eq!(carousel.next(&p), 1);
        assert_eq!(carousel.next(&p), 2);
        assert_eq!(carousel.next(&p), 0);
        assert_eq!(carousel.prev(&p), 2);
        assert_eq!(carousel.current_image(&p), Some("https://img.example/1/2.jpg"));
    }

    #[test]
    fn test_no_images_stays_at_zero() {
        let mut carousel = CarouselState::new();
        let p = with_images(1, 0);
        assert_eq!(carousel.next(&p), 0);
        assert_eq!(carousel.prev(&p), 0);
        assert_eq!(carousel.current_image(&p), None);
        assert_eq!(carousel.tracked(), 0);
    }

    #[test]
    fn test_positions_are_per_property() {
        let mut carousel = CarouselState::new();
        let a = with_images(1, 4);
        let b = with_images(2, 4);
        carousel.next(&a);
        carousel.next(&a);
        carousel.prev(&b);
        assert_eq!(carousel.index(&a), 2);
        assert_eq!(carousel.index(&b), 3);
    }

    #[test]
    fn test_retain_visible_drops_offscreen_cards() {
        let mut carousel = CarouselState::new();
        let a = with_images(1, 2);
        let b = with_images(2, 2);
        carousel.next(&a);
        carousel.next(&b);

        carousel.retain_visible([&b]);
        assert_eq!(carousel.tracked(), 1);
        assert_eq!(carousel.index(&a), 0);
        assert_eq!(carousel.index(&b), 1);
    }

    #[test]
    fn test_shrunk_image_list_stays_in_range() {
        let mut carousel = CarouselState::new();
        let mut p = with_images(1, 5);
        for _ in 0..4 {
            carousel.next(&p);
        }
        p.images.truncate(2);
        assert!(carousel.index(&p) < 2);
    }
}
