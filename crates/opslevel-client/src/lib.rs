//! A read-only client for the OpsLevel GraphQL API
//!
//! The client owns transport, authentication, request timeouts and cursor
//! pagination. Consumers should depend on the [`OpsLevelApi`] trait rather
//! than on [`Client`] directly so that the API can be substituted in tests.

mod api;
mod client;
pub mod error;
mod queries;
pub mod types;

pub use api::OpsLevelApi;
pub use client::{Client, ClientConfig, DEFAULT_API_URL, is_id};
pub use error::ClientError;
pub use secrecy::SecretString;
pub use types::{AliasOwnerType, AliasableResource, PayloadVariables};
