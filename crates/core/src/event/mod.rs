mod mock_data;
mod normalize;
mod types;

pub use mock_data::demo_rows;
pub use normalize::{normalize, normalize_rows, raw_row_number, COLUMN_COUNT, HEADER_ROWS};
pub use types::{Event, RawRow};
