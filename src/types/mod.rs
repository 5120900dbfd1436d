//! Type definitions

pub mod location;
pub mod messages;
pub mod optimization;
pub mod vehicle;

pub use location::*;
pub use messages::*;
pub use optimization::*;
pub use vehicle::*;
