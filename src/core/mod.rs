pub mod calculator;
pub mod drive_time;
pub mod log;
pub mod logic;
pub mod postcode;
