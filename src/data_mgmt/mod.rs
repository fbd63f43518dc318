pub mod daterange;
pub mod models;
pub mod publish;
pub mod transform;

pub use daterange::DateRange;
