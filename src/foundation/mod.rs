pub mod classes;
pub mod core;
pub mod error;
