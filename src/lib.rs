//! Content-based movie recommendations over a crawled catalog.
//!
//! The core scores candidate movies against one or more reference movies
//! with a four-factor weighted similarity (rating closeness plus TF-IDF
//! cosine similarity of synopsis, review excerpts, and metadata), ranks the
//! pool, and serves the top K over a small JSON API.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
