//! Order records and the status catalog they are read through.

pub mod error;
pub mod record;
pub mod status;

pub use error::*;
pub use record::*;
pub use status::*;
