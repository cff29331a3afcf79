// Re-export all models organized by domain
pub mod api;
pub mod availability;
pub mod booking;
pub mod errors;

// Re-export all structs for backward compatibility
pub use api::*;
pub use availability::*;
pub use booking::*;
pub use errors::*;
