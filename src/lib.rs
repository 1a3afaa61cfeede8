//! Game Catalog API
//!
//! REST backend for a video-game catalog:
//! - Bulk import of games from a CSV file
//! - Paginated, filtered, sorted listing
//! - Single-game lookup with catalog-wide play-state counts

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod extract;
pub mod loader;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;
