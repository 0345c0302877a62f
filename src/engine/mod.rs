//! Filtering, pagination and the derived state listing screens render from.
//!
//! Everything here is synchronous and works on data already in memory.

pub mod carousel;
pub mod filter;
pub mod pagination;
pub mod summary;
pub mod view;

pub use carousel::CarouselState;
pub use filter::{filter_properties, FilterInput, FilterSet, ALL};
pub use pagination::{paginate, total_pages, Page, DEFAULT_PAGE_SIZE};
pub use summary::{has_active_filters, summarize, ActiveFilter, FilterField};
pub use view::ListingView;
