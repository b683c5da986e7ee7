pub mod layout;
pub mod page;
pub mod primitives;
