//! Building blocks for the `spotirecap_smoke` CLI: the endpoint checklist,
//! the sequential checker, and report rendering.

pub mod checker;
pub mod endpoints;
pub mod errors;
pub mod report;
