//! Colored terminal output helpers.
//!
//! Build steps talk to the user through a handful of symbol-prefixed lines;
//! diagnostics go to stderr so tool output stays clean on stdout.

use colored::*;

/// A completed step, e.g. "built helloworld".
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// The command line a build step is about to execute.
pub fn command(line: &str) {
    println!("   {} {}", "▶".cyan(), line);
}

/// Something worth knowing that does not stop the build.
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// A build error. Callers decide whether it is fatal.
pub fn error(msg: &str) {
    eprintln!("{} {}", "x".red(), msg);
}
