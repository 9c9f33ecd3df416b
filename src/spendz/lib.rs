//! # Spendz Architecture
//!
//! Spendz is a **UI-agnostic expense-tracking library**. The CLI is a thin
//! client; the same core could sit behind a TUI or a web front end without
//! change.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats tables and charts, colors      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result<CmdResult>    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (store/records.rs)                            │
//! │  - Canonical in-memory collection, sole mutator             │
//! │  - Validates at the boundary, persists after every change   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Backends (store/)                                  │
//! │  - StorageBackend trait: whole blobs under fixed keys       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **The store is the boundary.** Records are only created, updated, and
//!   deleted through [`store::records::RecordStore`], which re-validates
//!   every field even when the UI validated already, and which persists the
//!   full collection before a mutation returns. A failed save rolls the
//!   in-memory change back, so memory and disk never silently diverge.
//! - **Validation is pure.** [`validate`] exposes one check per field kind
//!   with typed rejection reasons, usable per keystroke by any UI.
//! - **Summaries are derived.** [`summary`] computes totals over a snapshot;
//!   it never mutates and never persists.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage backends and the record store
//! - [`model`]: Core data types (`Record`, `RecordDraft`, `RecordPatch`)
//! - [`validate`]: Field validation and the safe search-pattern compiler
//! - [`summary`]: Derived statistics (totals, top category, daily window)
//! - [`settings`]: Budget threshold and display settings blobs
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod settings;
pub mod store;
pub mod summary;
pub mod validate;
