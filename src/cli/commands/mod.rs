pub mod config;
pub mod estimate;
pub mod init;
pub mod location;
pub mod log;
pub mod pricing;
pub mod quote;
pub mod zone;
pub mod zones;
