//! HLSL intrinsic tooling CLI.
//!
//! The binary is a thin argument parser over [`commands::Driver`], which runs
//! every request through an editor [`Session`](hlsl_ide::Session) the same
//! way a language server would.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Set to any value to log as an indented span tree instead of flat lines.
pub const LOG_TREE_ENV: &str = "HLSL_LOG_TREE";

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=hlsl_typeck=trace` or `RUST_LOG=hlsl_task=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let (tree, flat) = if std::env::var_os(LOG_TREE_ENV).is_some() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            (Some(tree), None)
        } else {
            let flat = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr);
            (None, Some(flat))
        };

        tracing_subscriber::registry()
            .with(tree)
            .with(flat)
            .with(filter)
            .init();
    });
}
