//! # Geolog Architecture
//!
//! Geolog is a **UI-agnostic record keeper** for geological samples. The
//! library owns all the behavior; the bundled CLI is just one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prints tables, prompts for confirms    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The sample repository: create/update/delete/list/clear,  │
//! │    export/import. Full read → transform → full write.       │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over one storage slot           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation is a read-modify-write of the whole collection — there is
//! no caching layer and no incremental update. That keeps the operations
//! trivially consistent for the single-user, single-process case this tool
//! targets.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: The repository operations, one module per command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Sample`, `SampleFields`)
//! - [`render`]: Projection of the collection into display rows
//! - [`edit`]: Edit sessions (capture, mutate, commit)
//! - [`map`]: Map lookup URLs from coordinates or place names
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod edit;
pub mod error;
pub mod map;
pub mod model;
pub mod render;
pub mod store;
