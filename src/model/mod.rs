//! OpenVEX document model.
//!
//! A [`Document`] exclusively owns its [`Statement`]s; each statement owns its
//! [`Vulnerability`] and [`Product`]s, and each product owns its
//! [`Subcomponent`]s. The matching and canonicalization engines only read
//! these values. The single mutation they perform is assigning a missing
//! document identifier.

mod document;
mod product;
mod statement;
mod vulnerability;

pub use document::*;
pub use product::*;
pub use statement::*;
pub use vulnerability::*;
