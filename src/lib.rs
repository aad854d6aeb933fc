//! OSINT dork query construction for the InfoScope toolkit, plus a small HTTP service around it.

// Interdiction stricte de pratiques dangereuses ou non idiomatiques
#![deny(warnings)]
#![deny(unsafe_code)]
#![deny(missing_docs)] // Toute fonction, struct, enum ou module public doit être documenté
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(unused_must_use)]
#![deny(nonstandard_style)]
#![forbid(unsafe_op_in_unsafe_fn)]

// Clippy pour stricte discipline
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)] // Interdit unwrap()
#![deny(clippy::expect_used)] // Interdit expect()
#![deny(clippy::panic)]
#![deny(clippy::print_stdout)] // Interdit println!() en production
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::shadow_unrelated)]

/// In-memory register of saved investigations.
pub mod investigations;
/// Query building, presets, engines, risk and name variations.
#[allow(clippy::module_name_repetitions, clippy::doc_markdown)]
pub mod query;
/// HTTP server and API routes.
#[allow(clippy::missing_errors_doc, clippy::unused_async)]
pub mod server;
/// Entry helpers to start the InfoScope server.
#[allow(clippy::doc_markdown)]
pub mod start_infoscope;

pub use query::{
    BuiltQuery, InvestigationInput, PresetTemplate, QueryConfig, QueryError, QueryRequest,
    QueryService, RiskLevel, SearchEngine, assess_risk, build_query, generate_name_variations,
    tokenize_list,
};
