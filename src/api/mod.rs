pub mod client;
pub mod errors;
pub mod types;

pub use client::{DealerApi, DealerClient};
pub use errors::ApiError;
pub use types::{Contract, EntityId, Inspection, InspectionUpdate};
