pub mod coordinates;
pub mod route;

pub use coordinates::Coordinates;
pub use route::{
    Location, OwnerRoute, ValidatePathRequest, ValidateRouteRequest, ValidationResult,
};
