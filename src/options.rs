//! Engine display-option catalog.
//!
//! One static table serves as both the persistence schema and the default
//! source: membership here decides whether a key is remembered across
//! restarts, and the recorded default is what a reset restores. Keys outside
//! the catalog can still be written to the engine but bypass persistence.

use crate::values::Value;

/// Default value of an engine option, typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl OptionDefault {
    /// Materialize the default as a store value.
    pub fn to_value(self) -> Value {
        match self {
            Self::Bool(v) => Value::Bool(v),
            Self::Int(v) => Value::Int(v),
            Self::Str(v) => Value::Str(v.to_string()),
        }
    }
}

/// One catalog entry: a namespaced engine key plus its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOption {
    pub key: &'static str,
    pub default: OptionDefault,
}

const fn boolean(key: &'static str, default: bool) -> EngineOption {
    EngineOption {
        key,
        default: OptionDefault::Bool(default),
    }
}

const fn integer(key: &'static str, default: i64) -> EngineOption {
    EngineOption {
        key,
        default: OptionDefault::Int(default),
    }
}

const fn string(key: &'static str, default: &'static str) -> EngineOption {
    EngineOption {
        key,
        default: OptionDefault::Str(default),
    }
}

/// All engine display options saved as settings, with their defaults.
pub const ENGINE_OPTIONS: &[EngineOption] = &[
    boolean("asm.esil", false),
    boolean("asm.pseudo", false),
    boolean("asm.offset", true),
    boolean("asm.xrefs", false),
    boolean("asm.indent", false),
    boolean("asm.describe", false),
    boolean("asm.slow", true),
    boolean("asm.lines", true),
    boolean("asm.lines.fcn", true),
    boolean("asm.flags.offset", false),
    boolean("asm.emu", false),
    boolean("asm.cmt.right", true),
    integer("asm.cmt.col", 35),
    boolean("asm.var.summary", false),
    boolean("asm.bytes", false),
    boolean("asm.size", false),
    boolean("asm.bytespace", false),
    boolean("asm.lbytes", true),
    integer("asm.nbytes", 10),
    string("asm.syntax", "intel"),
    boolean("asm.ucase", false),
    boolean("asm.bb.line", false),
    boolean("asm.capitalize", false),
    boolean("asm.var.sub", true),
    boolean("asm.var.subonly", true),
    integer("asm.tabs", 5),
    integer("asm.tabs.off", 5),
    boolean("asm.marks", false),
    boolean("esil.breakoninvalid", true),
    boolean("graph.offset", false),
];

/// Catalog lookup; `None` means the key bypasses persistence.
pub fn lookup(key: &str) -> Option<&'static EngineOption> {
    ENGINE_OPTIONS.iter().find(|option| option.key == key)
}
