pub mod route_validation;

pub use route_validation::{RouteValidator, ValidationConfig};
