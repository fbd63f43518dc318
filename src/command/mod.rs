mod aggregate;
mod sync;

pub use aggregate::aggregate;
pub use sync::sync;
