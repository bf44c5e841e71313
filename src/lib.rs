//! # cobble - build orchestration as ordinary Rust
//!
//! cobble is a tiny toolkit for programs that want to carry their own build
//! logic as plain code instead of a build-file DSL: declare a command tree,
//! parse the process arguments into caller-owned slots, then let each build
//! step ask "is my output stale?" and shell out to the real tool.
//!
//! ## Quick start
//!
//! ```no_run
//! use cobble::argparse::{Command, FlagSlot, Opt};
//! use cobble::{exec, stale};
//!
//! fn main() -> anyhow::Result<()> {
//!     let build = FlagSlot::new(false);
//!     let release = FlagSlot::new(false);
//!
//!     let program = Command::new("demo", "Builds the demo").sub(
//!         Command::new("build", "Compile the demo")
//!             .selected(&build)
//!             .opt(Opt::flag("release", "Optimized build", &release).short('r')),
//!     );
//!     program.parse(std::env::args().skip(1));
//!
//!     if build.get() && stale::needs_rebuild(&["main.c"], "demo") {
//!         let mut cc = exec::Cmd::new();
//!         cc.args(["clang", "main.c", "-o", "demo"]);
//!         if let Some(flag) = release.get().then_some("-O2") {
//!             cc.arg(flag);
//!         }
//!         if !cc.run()?.success() {
//!             anyhow::bail!("compile failed");
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`argparse`] - Command specification tree, parser, and usage rendering
//! - [`stale`] - Timestamp-based rebuild decisions
//! - [`exec`] - Synchronous external command execution
//! - [`files`] - Source discovery and build-path helpers

/// Command specification tree, parser, and usage rendering.
pub mod argparse;

/// Synchronous external command execution.
pub mod exec;

/// Source discovery and build-path helpers.
pub mod files;

/// Timestamp-based rebuild decisions.
pub mod stale;

/// Colored terminal output helpers.
pub mod ui;
