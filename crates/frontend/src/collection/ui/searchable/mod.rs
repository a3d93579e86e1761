pub mod view;
pub mod view_model;

pub use view::Searchable;
pub use view_model::{run_search, RequestSequence, SearchTicket};
