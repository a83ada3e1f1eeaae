//! Resource logic between the HTTP handlers and the stores.
//!
//! Services validate request bodies, call the injected [`Store`](tally_core::Store),
//! and choose which [`AppError`](crate::error::AppError) each failure becomes.

pub mod assets;
pub mod tasks;
