pub mod estimate;
pub mod quote;
pub mod zone;
