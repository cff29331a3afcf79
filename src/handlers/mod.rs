pub mod availability;
pub mod booking;

// Re-export all handler functions for easy importing
pub use availability::*;
pub use booking::*;
