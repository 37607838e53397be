//! REST interface to the merchandising backend
//!
//! The backend is a black box to the planner: it owns sales analytics,
//! insight generation, team/task records, and layout persistence. No
//! authentication headers are attached; session identity lives only in
//! the client-local session file.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
pub use types::*;
