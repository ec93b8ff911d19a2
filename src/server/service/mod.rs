//! Business logic services.
//!
//! Services coordinate between repositories and handle operations spanning
//! more than one entity, returning domain errors for the controllers to map
//! to HTTP responses.

pub mod favorite;
