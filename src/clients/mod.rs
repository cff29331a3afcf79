pub mod scheduling_api;

pub use scheduling_api::*;
