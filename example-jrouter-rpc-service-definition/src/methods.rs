pub mod admin;
pub mod diagnostics;
pub mod echo;
pub mod math;
