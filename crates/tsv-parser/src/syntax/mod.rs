//! Structural utilities built on the node model and traversal.

pub mod classify;
pub mod diagnostics;
pub mod modifiers;
pub mod module_indicator;
pub mod parse_errors;
pub mod text;

pub use classify::*;
pub use diagnostics::create_file_diagnostic;
pub use modifiers::*;
pub use module_indicator::*;
pub use parse_errors::*;
pub use text::*;
