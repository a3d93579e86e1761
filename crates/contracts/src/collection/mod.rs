pub mod record;
pub mod search;

pub use record::{present, FeaturedRecord, Person, RecordImage};
pub use search::{SearchFacet, SearchResultSet};
