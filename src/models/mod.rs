pub mod user;
pub mod aggregate;
pub mod snapshot;

pub use user::*;
pub use aggregate::*;
pub use snapshot::*;
