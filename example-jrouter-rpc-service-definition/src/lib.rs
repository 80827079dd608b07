//! Sample methods used by the endpoint tests and as a reference for
//! registering handlers.

mod context;
pub use context::*;

pub mod methods;

mod registry;
pub use registry::*;
