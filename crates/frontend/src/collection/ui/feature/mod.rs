pub mod view;
pub mod view_model;

pub use view::Feature;
pub use view_model::{fact_rows, photo_views, FactRow, PhotoView};
