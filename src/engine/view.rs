use super::filter::FilterSet;
use super::pagination::{paginate, total_pages, Page, DEFAULT_PAGE_SIZE};
use super::summary::{summarize, ActiveFilter, FilterField};
use crate::models::Property;
use std::collections::HashSet;
use tracing::debug;

/// Derived listing state for one screen: the loaded properties, the filters
/// in force and the page being shown.
///
/// The filtered list is recomputed only when one of its inputs (properties,
/// favourites, filters) changes. Changing the filters jumps back to page 1;
/// page requests are clamped into `1..=total_pages`.
#[derive(Debug, Clone)]
pub struct ListingView {
    properties: Vec<Property>,
    favourites: Option<HashSet<i64>>,
    filters: FilterSet,
    page_size: usize,
    current_page: usize,
    /// Indices into `properties` that pass the favourites restriction and filters
    visible: Vec<usize>,
}

impl ListingView {
    pub fn new(properties: Vec<Property>, page_size: usize) -> Self {
        let mut view = Self {
            properties,
            favourites: None,
            filters: FilterSet::default(),
            page_size: page_size.max(1),
            current_page: 1,
            visible: Vec::new(),
        };
        view.recompute();
        view
    }

    fn recompute(&mut self) {
        let favourites = self.favourites.as_ref();
        let filters = &self.filters;
        self.visible = self
            .properties
            .iter()
            .enumerate()
            .filter(|(_, p)| favourites.map_or(true, |ids| ids.contains(&p.property_id)))
            .filter(|(_, p)| filters.matches(p))
            .map(|(i, _)| i)
            .collect();
        debug!(
            "Recomputed listing: {} of {} properties visible",
            self.visible.len(),
            self.properties.len()
        );
    }

    fn clamp_page(&mut self) {
        let last = self.total_pages();
        if self.current_page > last {
            debug!("Clamping page {} to {}", self.current_page, last);
            self.current_page = last;
        }
    }

    /// Replace the loaded properties (e.g. after a refetch). The current page
    /// is kept when it still exists.
    pub fn set_properties(&mut self, properties: Vec<Property>) {
        self.properties = properties;
        self.recompute();
        self.clamp_page();
    }

    /// Restrict the listing to the given favourite ids, or lift the
    /// restriction with `None`.
    pub fn set_favourites(&mut self, favourites: Option<HashSet<i64>>) {
        if self.favourites == favourites {
            return;
        }
        self.favourites = favourites;
        self.current_page = 1;
        self.recompute();
    }

    pub fn apply_filters(&mut self, filters: FilterSet) {
        if self.filters == filters {
            return;
        }
        self.filters = filters;
        self.current_page = 1;
        self.recompute();
    }

    pub fn clear_filter(&mut self, field: FilterField) {
        let mut filters = self.filters.clone();
        filters.clear(field);
        self.apply_filters(filters);
    }

    pub fn reset_filters(&mut self) {
        self.apply_filters(FilterSet::default());
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        summarize(&self.filters)
    }

    /// Jump to `page`, clamped into range. Returns the page actually selected.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages());
        self.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible.len(), self.page_size)
    }

    pub fn filtered_count(&self) -> usize {
        self.visible.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Property> {
        self.visible.iter().map(move |&i| &self.properties[i])
    }

    /// The items on the current page
    pub fn page(&self) -> Page<&Property> {
        let slice = paginate(&self.visible, self.current_page, self.page_size);
        Page {
            items: slice.items.iter().map(|&i| &self.properties[i]).collect(),
            page: slice.page,
            page_size: slice.page_size,
            total_items: slice.total_items,
            total_pages: slice.total_pages,
        }
    }
}

impl Default for ListingView {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}
