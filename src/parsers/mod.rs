//! Reading VEX documents from their wire format.
//!
//! ## Usage
//!
//! ```no_run
//! use vex_tools::parsers::{load_document, parse_context};
//! use std::path::Path;
//!
//! let raw = std::fs::read("vex.json").unwrap();
//! println!("context: {}", parse_context(&raw).unwrap());
//!
//! let doc = load_document(Path::new("vex.json")).unwrap();
//! println!("{} statements", doc.statements.len());
//! ```

mod context;
mod openvex;

pub use context::{is_openvex_context, parse_context, parse_openvex_context};
pub use openvex::{load_document, parse_document};
