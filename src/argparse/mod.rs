//! Command-line specification trees.
//!
//! A host program declares its CLI once, as a tree of [`Command`], [`Opt`]
//! and [`Arg`] nodes, then calls [`Command::parse`] with the raw argument
//! list. The tree itself stays immutable; parsing writes only into the
//! caller-owned output slots each node points at, so the host can keep its
//! results in ordinary stack-allocated fields.
//!
//! Two slot shapes exist, and the node kind picks which one is legal:
//! [`FlagSlot`] for booleans (flags, subcommand selection) and [`ValueSlot`]
//! for strings (positionals, switch selections).

mod parse;
mod usage;

use std::cell::{Cell, RefCell};

/// Caller-owned output slot for boolean results: flag presence and
/// subcommand selection. Unset is `false`.
pub type FlagSlot = Cell<bool>;

/// Caller-owned output slot for string results: positional arguments and
/// switch selections. Unset is `None`.
pub type ValueSlot = RefCell<Option<String>>;

/// A named option: `--name` long form, optional `-x` short form.
pub struct Opt<'a> {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) help: String,
    pub(crate) kind: OptKind<'a>,
}

pub(crate) enum OptKind<'a> {
    /// Presence sets the slot to `true`.
    Flag {
        slot: &'a FlagSlot,
        default: Option<bool>,
    },
    /// A closed choice: matching any child writes that child's *name* into
    /// the switch's own string slot. Children own no slots.
    Switch {
        slot: &'a ValueSlot,
        choices: Vec<Choice>,
        default: Option<String>,
    },
}

/// One selectable alternative of a switch option.
pub struct Choice {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) help: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            help: help.into(),
        }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }
}

impl<'a> Opt<'a> {
    /// A boolean flag writing into `slot` when matched.
    pub fn flag(name: impl Into<String>, help: impl Into<String>, slot: &'a FlagSlot) -> Self {
        Self {
            name: name.into(),
            short: None,
            help: help.into(),
            kind: OptKind::Flag {
                slot,
                default: None,
            },
        }
    }

    /// A switch option: add alternatives with [`Opt::choice`]. The matched
    /// choice's name lands in `slot`.
    pub fn switch(name: impl Into<String>, help: impl Into<String>, slot: &'a ValueSlot) -> Self {
        Self {
            name: name.into(),
            short: None,
            help: help.into(),
            kind: OptKind::Switch {
                slot,
                choices: Vec::new(),
                default: None,
            },
        }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Append a choice to a switch option.
    ///
    /// Panics on a flag option; mixing the two is a bug in the spec tree,
    /// not a runtime condition.
    pub fn choice(mut self, choice: Choice) -> Self {
        match &mut self.kind {
            OptKind::Switch { choices, .. } => choices.push(choice),
            OptKind::Flag { .. } => panic!("choice() is only valid on switch options"),
        }
        self
    }

    /// Default a flag to `true` when the parse never matched it.
    pub fn default_on(mut self) -> Self {
        match &mut self.kind {
            OptKind::Flag { default, .. } => *default = Some(true),
            OptKind::Switch { .. } => panic!("default_on() is only valid on flag options"),
        }
        self
    }

    /// Choice name to write when the parse never matched any choice.
    pub fn default_choice(mut self, name: impl Into<String>) -> Self {
        match &mut self.kind {
            OptKind::Switch { default, .. } => *default = Some(name.into()),
            OptKind::Flag { .. } => panic!("default_choice() is only valid on switch options"),
        }
        self
    }
}

/// A positional parameter, matched in declaration order against leftover
/// non-flag tokens.
pub struct Arg<'a> {
    pub(crate) name: String,
    pub(crate) help: String,
    pub(crate) default: Option<String>,
    pub(crate) slot: &'a ValueSlot,
}

impl<'a> Arg<'a> {
    pub fn new(name: impl Into<String>, help: impl Into<String>, slot: &'a ValueSlot) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            default: None,
            slot,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A command node: options, positionals, and nested subcommands.
pub struct Command<'a> {
    pub(crate) name: String,
    pub(crate) help: String,
    pub(crate) slot: Option<&'a FlagSlot>,
    pub(crate) opts: Vec<Opt<'a>>,
    pub(crate) args: Vec<Arg<'a>>,
    pub(crate) subs: Vec<Command<'a>>,
}

impl<'a> Command<'a> {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            slot: None,
            opts: Vec::new(),
            args: Vec::new(),
            subs: Vec::new(),
        }
    }

    /// Slot set to `true` when this command's name is matched. Only useful
    /// on subcommands; the root is never matched by name.
    pub fn selected(mut self, slot: &'a FlagSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn opt(mut self, opt: Opt<'a>) -> Self {
        self.opts.push(opt);
        self
    }

    pub fn arg(mut self, arg: Arg<'a>) -> Self {
        self.args.push(arg);
        self
    }

    pub fn sub(mut self, sub: Command<'a>) -> Self {
        self.subs.push(sub);
        self
    }

    /// Look up a direct subcommand by name, e.g. to print its usage.
    pub fn subcommand(&self, name: &str) -> Option<&Command<'a>> {
        self.subs.iter().find(|s| s.name == name)
    }

    /// Parse `argv` (excluding the program name) into the output slots.
    ///
    /// Every slot reachable from this node ends up holding a value derived
    /// from the tokens, its declared default, or its unset state. Tokens
    /// that match nothing are dropped without error; this parser has no
    /// failure mode by design.
    pub fn parse<I>(&self, argv: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut tokens: Vec<String> = argv.into_iter().map(Into::into).collect();
        parse::run(self, &mut tokens);
    }

    /// Render the usage/help block for this node.
    pub fn usage(&self) -> String {
        usage::render(self)
    }
}
