mod traits;

pub use traits::{EventCache, EventSet};
