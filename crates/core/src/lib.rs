#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod model;
pub mod progress;
pub mod report;
pub mod time;

pub use error::Error;
pub use time::Clock;
