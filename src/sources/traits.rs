use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Where a listing screen gets its properties from.
///
/// A source returns the complete, unfiltered list in the order the backend
/// gives it. Filtering, favourites and paging happen afterwards in
/// [`ListingView`](crate::engine::ListingView), so a source must never
/// pre-filter or page its results.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Load the full property list. Transport and decode failures are errors;
    /// individual unreadable records may be skipped.
    async fn fetch(&self) -> Result<Vec<Property>>;

    /// Short name recorded in saved snapshots
    fn source_name(&self) -> &'static str;
}
