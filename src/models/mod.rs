pub mod base;
pub mod estimate;
pub mod quote;
pub mod service;
pub mod zone;
