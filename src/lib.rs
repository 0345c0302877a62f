//! Property search for the rental marketplace: filter, paginate and summarize
//! listings fetched from the rental API.

pub mod config;
pub mod engine;
pub mod models;
pub mod sources;

pub use engine::{filter_properties, paginate, summarize, FilterSet, ListingView, Page};
pub use models::{Property, PropertyStatus};
