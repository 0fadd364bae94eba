//! Sparse Golang templates for Rust
//!
//! Write `gtmpl` templates indented the way the surrounding code is
//! indented. Indentation and line breaks are stripped before parsing, and
//! whitespace that should be rendered is printed explicitly with `{{" "}}` or
//! `{{"\n"}}`. Every template also knows `last`, which tells whether a `range`
//! index points at the final element.
//!
//! ## Example
//! ```rust
//! use gtmpl_sparse::SparseTemplate;
//!
//! let tmpl = SparseTemplate::must("list", r#"
//!     Some list:{{"\n"}}
//!
//!     {{range $i, $v := .}}
//!         ## {{$v}}
//!         {{if last $i $ | not}}
//!             {{"\n"}}
//!         {{end}}
//!     {{end}}
//! "#);
//! assert_eq!(tmpl.execute(vec!["a", "b"]), "Some list:\n# a\n# b");
//! ```
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod error;
pub mod funcs;
mod glob;
mod strip;
pub mod template;

pub use crate::error::{Error, Result};
pub use crate::glob::parse_glob;
pub use crate::strip::{is_stripped, strip};
pub use crate::template::{execute_to_string, Builder, SparseTemplate};

use gtmpl::Value;

/// Strips, parses and executes `text` in one go.
pub fn render<T: Into<Value>>(text: &str, data: T) -> Result<String> {
    SparseTemplate::new("", text)?.try_execute(data)
}
