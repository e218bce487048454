//! # Todoz Architecture
//!
//! Todoz is a todo list driven by short plain-language commands (`add Buy milk`, `done 1`,
//! `sort title desc`). The library owns parsing, state, and persistence; the `todoz` binary
//! is one terminal client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (binary: cli/, wired by main.rs)                       │
//! │  - Reads lines, renders outcomes, picks exit codes          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  text
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Grammar (grammar.rs)                                       │
//! │  - Text → Command, never fails (unmatched → Unknown)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Command
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (api.rs)                                        │
//! │  - Owns TodoState, routes, saves after mutations            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Business logic over &mut TodoState, returns CmdResult    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - SnapshotStore trait: FileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! Nothing in this crate prints or exits. Handlers return [`commands::CmdResult`] values,
//! the dispatcher wraps them in [`api::Outcome`]s, and whoever drives the dispatcher decides
//! how to show them. Logging goes through `tracing` and is off unless a subscriber is installed.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** and **grammar**: the bulk of the unit tests
//! 2. **Dispatcher**: routing, persistence counts, and save failures against `InMemoryStore`
//! 3. **Binary**: `tests/` drives the real executable against a temporary data directory
//!
//! ## Module Overview
//!
//! - [`grammar`]: command recognition
//! - [`api`]: the dispatcher
//! - [`commands`]: one module per command kind
//! - [`state`]: the in-memory todo list
//! - [`model`]: `Todo`, views, sort keys, stats
//! - [`store`]: snapshots and their backends
//! - [`config`], [`init`]: configuration and startup
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod grammar;
pub mod init;
pub mod model;
pub mod state;
pub mod store;
