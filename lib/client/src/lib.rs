//! Client for the integration backend.
//!
//! Each integration is served by `POST <base-url>/integrations/<endpoint>/load`,
//! which takes the user's credentials as a multipart field and answers with a
//! flat JSON array of records.

pub mod client;
pub mod error;

pub use client::LoaderClient;
pub use error::LoadError;
