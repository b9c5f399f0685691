//! Access to the qgen REST backend.
//!
//! Screens talk to the backend only through the [`Backend`] trait, so the
//! review flows can be exercised against an in-memory double in tests and
//! against [`HttpBackend`] in production.

mod client;
#[cfg(test)]
pub(crate) mod mock;
mod traits;

pub use client::{HttpBackend, HttpBackendConfig};
pub use traits::Backend;
