mod authorization;
pub use authorization::*;

mod handler;
pub use handler::*;

mod method_descriptor;
pub use method_descriptor::*;

mod method_key;
pub use method_key::*;

mod param;
pub use param::*;

mod registry;
pub use registry::*;

mod route;
pub use route::*;

pub mod error;
