mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{Result, SourceError};
pub use http_mapping::source_error_to_status_code;
pub use traits::{EventRepository, RowSource};
pub use types::{LookupStrategy, ParseLookupStrategyError};
