//! Recursive descent over a consumable token list.
//!
//! Each loop iteration removes the front token and tries, in order:
//! subcommand name, option match, next unfilled positional. A token that
//! matches nothing is dropped silently; permissiveness is a deliberate
//! policy, not an oversight.

use super::{Arg, Command, Opt, OptKind};

pub(crate) fn run(cmd: &Command<'_>, tokens: &mut Vec<String>) {
    while !tokens.is_empty() {
        let token = tokens.remove(0);

        if let Some(sub) = cmd.subs.iter().find(|s| s.name == token) {
            if let Some(slot) = sub.slot {
                slot.set(true);
            }
            // This node sees no further tokens once it delegates, so its
            // defaults resolve now.
            apply_defaults(cmd);
            return run(sub, tokens);
        }

        if match_option(&cmd.opts, &token) {
            continue;
        }

        // Only non-flag tokens are positional candidates; a dash-prefixed
        // token that matched no option is dropped, not consumed.
        if !token.starts_with('-') && fill_positional(&cmd.args, &token) {
            continue;
        }
    }

    apply_defaults(cmd);
}

/// Try `token` against each option in declaration order; first hit wins.
fn match_option(opts: &[Opt<'_>], token: &str) -> bool {
    let Some(body) = token.strip_prefix('-') else {
        return false;
    };
    if body.is_empty() {
        return false;
    }

    // `--name` compares the long form exactly; anything else compares the
    // character right after the dash. No `=`-values, no `-xyz` bundling.
    let long = body.strip_prefix('-');
    let short = if long.is_none() {
        body.chars().next()
    } else {
        None
    };

    for opt in opts {
        match &opt.kind {
            OptKind::Flag { slot, .. } => {
                if names_match(&opt.name, opt.short, long, short) {
                    slot.set(true);
                    return true;
                }
            }
            OptKind::Switch { slot, choices, .. } => {
                for choice in choices {
                    if names_match(&choice.name, choice.short, long, short) {
                        *slot.borrow_mut() = Some(choice.name.clone());
                        return true;
                    }
                }
            }
        }
    }

    false
}

fn names_match(name: &str, short_name: Option<char>, long: Option<&str>, short: Option<char>) -> bool {
    match (long, short) {
        (Some(long), _) => long == name,
        (None, Some(c)) => short_name == Some(c),
        (None, None) => false,
    }
}

/// Hand `token` to the first positional whose slot is still unset.
fn fill_positional(args: &[Arg<'_>], token: &str) -> bool {
    for arg in args {
        let mut slot = arg.slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(token.to_string());
            return true;
        }
    }
    false
}

/// Write declared defaults into every slot this command owns that is still
/// in its unset state.
fn apply_defaults(cmd: &Command<'_>) {
    for opt in &cmd.opts {
        match &opt.kind {
            OptKind::Flag {
                slot,
                default: Some(default),
            } => {
                if !slot.get() {
                    slot.set(*default);
                }
            }
            OptKind::Switch {
                slot,
                default: Some(default),
                ..
            } => {
                let mut slot = slot.borrow_mut();
                if slot.is_none() {
                    *slot = Some(default.clone());
                }
            }
            _ => {}
        }
    }

    for arg in &cmd.args {
        if let Some(default) = &arg.default {
            let mut slot = arg.slot.borrow_mut();
            if slot.is_none() {
                *slot = Some(default.clone());
            }
        }
    }
}
