mod authorization_gate;
pub use authorization_gate::*;

mod batch;
pub use batch::*;

pub mod config;
pub use config::RpcEndpointConfig;

pub mod constants;

mod endpoint;
pub use endpoint::*;

mod endpoint_interface;
pub use endpoint_interface::*;

mod error_mapper;
pub use error_mapper::*;

pub mod error;

mod invoker;
pub use invoker::*;

mod observer;
pub use observer::*;

mod pipeline;
pub use pipeline::*;

mod resolver;
pub use resolver::*;
