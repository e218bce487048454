//! # CLI Behavior
//!
//! This is **one possible UI client** for todoz, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the `todoz` library.
//!
//! ## One-Shot and Session Modes
//!
//! - `todoz add Buy milk`: the trailing words form a single command line (which may hold
//!   several `;`-separated commands). The process exits non-zero if any of them failed.
//! - `todoz`: commands are read from stdin one line at a time until EOF or `exit`. A prompt
//!   is printed only when stdin is a terminal, so scripts can pipe commands in.
//!
//! ## Module Structure
//!
//! - `commands`: context setup, logging, and the two run modes
//! - `render`: outcome formatting through templates
//! - `setup`: argument parsing via clap
//! - `styles`: the named style theme
//! - `templates`: output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
