//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP
//! controllers, verifying request handling, response formatting, and error
//! handling for all API endpoints. Handlers are invoked directly with their
//! extractors; responses are asserted through `IntoResponse`.

mod favorite;
mod people;
mod planet;
mod user;
