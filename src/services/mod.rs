pub mod availability_service;
pub mod booking_service;

pub use availability_service::*;
pub use booking_service::*;
