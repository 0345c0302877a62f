pub mod api;
pub mod file;
pub mod traits;
pub mod types;

pub use api::RentalApiSource;
pub use file::{save_snapshot, JsonFileSource};
pub use traits::PropertySource;
pub use types::{ApiParams, Scope};
