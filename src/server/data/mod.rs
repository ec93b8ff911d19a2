//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application. Repositories provide an abstraction layer over database
//! operations, one per entity, each constructed over a borrowed connection.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
