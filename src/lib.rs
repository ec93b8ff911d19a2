//! Holonet is a galactic archive REST API: a catalog of planets and people,
//! with per-user favorites over both.

pub mod model;
pub mod server;
