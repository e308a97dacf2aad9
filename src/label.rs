//! Type-label extraction: turning a modeled type into the short spelling a
//! given toolchain would print for it.
//!
//! The label text is best-effort by nature. GCC and Clang agree on the
//! tokens but not the spacing, and a toolchain this tool does not know about
//! gets no spelling at all; every label then degrades to the literal
//! `unknown` and the report still renders in full. Degradation is silent,
//! never an error.

use crate::core::Ty;
use serde::Serialize;
use std::fmt;

/// Placeholder label emitted for every type under an unrecognized toolchain.
pub const UNKNOWN_LABEL: &str = "unknown";

/// The `__cplusplus` value of the language standard the demo targets.
pub const CPLUSPLUS: u64 = 201703;

/// The toolchain dialect a report is rendered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Toolchain {
    Gcc { major: u32, minor: u32 },
    Clang { major: u32, minor: u32 },
    Unknown,
}

impl Toolchain {
    /// The dialect reports use when none is chosen explicitly.
    pub fn default_dialect() -> Toolchain {
        Toolchain::Gcc {
            major: 13,
            minor: 2,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Toolchain::Unknown)
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toolchain::Gcc { major, minor } => write!(f, "GCC {}.{}", major, minor),
            Toolchain::Clang { major, minor } => write!(f, "Clang {}.{}", major, minor),
            Toolchain::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Render `ty` the way `toolchain` spells it, or [`UNKNOWN_LABEL`] when the
/// toolchain is not recognized.
pub fn type_label(ty: &Ty, toolchain: Toolchain) -> String {
    match toolchain {
        Toolchain::Gcc { .. } => spell(ty, Spacing::Attached),
        Toolchain::Clang { .. } => spell(ty, Spacing::Detached),
        Toolchain::Unknown => UNKNOWN_LABEL.to_string(),
    }
}

/// Where the declarator tokens sit relative to the type: GCC attaches them
/// (`const int&`, `int* const`), Clang floats them (`const int &`,
/// `int *const`).
#[derive(Clone, Copy)]
enum Spacing {
    Attached,
    Detached,
}

fn spell(ty: &Ty, spacing: Spacing) -> String {
    match ty {
        Ty::Int => "int".to_string(),
        Ty::Const(inner) => match **inner {
            // East const for a const pointer, west const otherwise.
            Ty::Pointer(_) => match spacing {
                Spacing::Attached => format!("{} const", spell(inner, spacing)),
                Spacing::Detached => format!("{}const", spell(inner, spacing)),
            },
            _ => format!("const {}", spell(inner, spacing)),
        },
        Ty::Pointer(pointee) => match spacing {
            Spacing::Attached => format!("{}*", spell(pointee, spacing)),
            Spacing::Detached => format!("{} *", spell(pointee, spacing)),
        },
        Ty::LvalueRef(referent) => match spacing {
            Spacing::Attached => format!("{}&", spell(referent, spacing)),
            Spacing::Detached => format!("{} &", spell(referent, spacing)),
        },
        Ty::RvalueRef(referent) => match spacing {
            Spacing::Attached => format!("{}&&", spell(referent, spacing)),
            Spacing::Detached => format!("{} &&", spell(referent, spacing)),
        },
    }
}
