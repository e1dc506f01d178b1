//! artist-worker library - batch artist-metadata scraping over HTTP.
//!
//! `POST /api/artists` takes a list of page URLs and returns one best-effort
//! metadata record per URL, in input order.

pub mod api;
pub mod config;
pub mod extract;
pub mod scrape;
pub mod types;
