//! Usage/help rendering for a command node.

use super::{Command, OptKind};

/// Render the full help block: header line, description, then `Commands:`,
/// `Arguments:` and `Options:` sections for whichever child lists are
/// non-empty. Switch options are expanded choice-by-choice.
pub(crate) fn render(cmd: &Command<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!("Usage: {}", cmd.name));
    if !cmd.subs.is_empty() {
        out.push_str(" [<command>]");
    }
    if !cmd.args.is_empty() {
        out.push_str(" [<arguments>]");
    }
    if !cmd.opts.is_empty() {
        out.push_str(" [options]");
    }
    out.push('\n');

    if !cmd.help.is_empty() {
        out.push('\n');
        out.push_str(&cmd.help);
        out.push('\n');
    }

    if !cmd.subs.is_empty() {
        let rows: Vec<(String, String)> = cmd
            .subs
            .iter()
            .map(|s| (s.name.clone(), s.help.clone()))
            .collect();
        push_block(&mut out, "Commands:", &rows);
    }

    if !cmd.args.is_empty() {
        let rows: Vec<(String, String)> = cmd
            .args
            .iter()
            .map(|a| {
                let mut help = a.help.clone();
                if let Some(default) = &a.default {
                    if help.is_empty() {
                        help = format!("[default: {default}]");
                    } else {
                        help.push_str(&format!(" [default: {default}]"));
                    }
                }
                (a.name.clone(), help)
            })
            .collect();
        push_block(&mut out, "Arguments:", &rows);
    }

    if !cmd.opts.is_empty() {
        let mut rows: Vec<(String, String)> = Vec::new();
        for opt in &cmd.opts {
            match &opt.kind {
                OptKind::Flag { .. } => {
                    rows.push((flag_forms(&opt.name, opt.short), opt.help.clone()));
                }
                // A switch is its choices; the switch itself has no flag form.
                OptKind::Switch { choices, .. } => {
                    for choice in choices {
                        rows.push((flag_forms(&choice.name, choice.short), choice.help.clone()));
                    }
                }
            }
        }
        push_block(&mut out, "Options:", &rows);
    }

    out
}

fn flag_forms(name: &str, short: Option<char>) -> String {
    match short {
        Some(c) => format!("-{c}, --{name}"),
        None => format!("    --{name}"),
    }
}

fn push_block(out: &mut String, title: &str, rows: &[(String, String)]) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    for (left, help) in rows {
        if help.is_empty() {
            out.push_str(&format!("  {left}\n"));
        } else {
            out.push_str(&format!("  {left:width$}  {help}\n"));
        }
    }
}
