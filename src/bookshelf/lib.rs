//! # Bookshelf Architecture
//!
//! Bookshelf is a personal library catalog: add, remove, list and search
//! books from an interactive menu, with every change saved to a JSON
//! snapshot and a CSV export written on exit.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, output formatting                    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the catalog and the store                           │
//! │  - Parses typed-in numbers and search modes                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Catalog (catalog.rs)       │
//! │  - Mutate the in-memory catalog, persist, report            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (JSON + CSV), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`catalog`]: The id-keyed in-memory collection and search
//! - [`commands`]: One module per menu operation
//! - [`store`]: Snapshot and export persistence
//! - [`model`]: The `Book` record
//! - [`config`]: File locations
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
