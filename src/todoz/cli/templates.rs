//! Output templates, kept as stand-alone `.tmp` files and included here as string constants.
//!
//! Templates are minijinja. Line breaks are explicit (`{{ "\n" }}`) and block tags trim the
//! surrounding whitespace, so the source layout never leaks into the output. Width math and
//! style selection happen in `render.rs`; templates only place already-computed values.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
