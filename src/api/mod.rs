//! Remote job API
//!
//! Wire types for the `/jobs` endpoints and the client that talks to them.

pub mod client;
pub mod types;

pub use client::{HttpJobApi, JobApi};
pub use types::{Clip, Job, ProjectStatus, UploadBody, UploadFile, UploadResponse};
