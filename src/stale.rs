//! Timestamp-based rebuild decisions.

use crate::ui;
use std::fs;
use std::path::Path;

/// Decide whether `output` must be regenerated from `inputs`.
///
/// Returns `true` when the output is missing or any input is strictly newer
/// than it; equal timestamps count as up to date. A missing input is a build
/// error and is reported as such, but the answer is still `true` so the
/// caller runs the build step and the tool itself surfaces the authoritative
/// failure.
pub fn needs_rebuild<P: AsRef<Path>>(inputs: &[P], output: impl AsRef<Path>) -> bool {
    let output = output.as_ref();
    let out_time = match fs::metadata(output).and_then(|m| m.modified()) {
        Ok(time) => time,
        // No artifact yet, nothing to compare against.
        Err(_) => return true,
    };

    for input in inputs {
        let input = input.as_ref();
        match fs::metadata(input).and_then(|m| m.modified()) {
            Ok(time) if time > out_time => return true,
            Ok(_) => {}
            Err(e) => {
                ui::error(&format!("cannot stat input {}: {e}", input.display()));
                return true;
            }
        }
    }

    false
}
