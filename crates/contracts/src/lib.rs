pub mod collection;
pub mod enums;
