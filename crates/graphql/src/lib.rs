//! GraphQL client for the character/location reference data.
//!
//! Provides the HTTP transport ([`api::GraphqlApi`]), the two queries the
//! editor consumes and their response shapes ([`queries`]), and the
//! [`provider::ReferenceDataProvider`] trait the server loads data through.

pub mod api;
pub mod queries;
pub mod provider;
