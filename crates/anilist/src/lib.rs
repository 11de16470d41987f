//! AniList GraphQL client library.
//!
//! Wraps the public AniList anime metadata API (read-only) and maps its
//! schema to the local search result shape.

pub mod client;

pub use client::{AniListClient, AniListError, AnimeResult};
