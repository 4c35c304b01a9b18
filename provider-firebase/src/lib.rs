//! # Firebase Storage Provider
//!
//! Implements the `BlobStore` seam against the Firebase Storage object API.
//!
//! ## Overview
//!
//! This module provides:
//! - Lazy blob resolution by object name
//! - Custom metadata updates via a single `PATCH` per blob
//! - Bearer-token authentication
//! - An injectable HTTP transport so the connector is testable offline
//!
//! No retry or backoff: every update is a single attempt, and the caller
//! decides what a failure means.

pub mod connector;
pub mod error;
pub mod transport;

pub use connector::FirebaseStorageConnector;
pub use error::{FirebaseStorageError, Result};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
