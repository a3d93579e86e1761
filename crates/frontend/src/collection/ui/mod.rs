pub mod feature;
pub mod preview;
pub mod searchable;

pub use feature::Feature;
pub use preview::Preview;
pub use searchable::{RequestSequence, Searchable};
