pub mod response;

pub use response::{GenerationResponse, HealthResponse};
