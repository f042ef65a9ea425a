mod filter;
mod pagination;
mod sorting;
mod summary;

pub use filter::{filter_events, EventFilter};
pub use pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
pub use sorting::{parse_participation_date, sort_by_date_descending};
pub use summary::{summarize_organizations, unique_formats, OrganizationSummary};
