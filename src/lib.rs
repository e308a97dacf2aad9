// Export modules for library usage
pub mod cases;
pub mod core;
pub mod deduction;
pub mod label;
pub mod output;

// Re-export commonly used types
pub use crate::cases::{Row, ENTITIES};
pub use crate::core::{Expr, ExprForm, Ty, ValueCategory};
pub use crate::deduction::DeductionError;
pub use crate::label::{type_label, Toolchain, UNKNOWN_LABEL};
pub use crate::output::{render_report, write_report, MarkdownWriter};
