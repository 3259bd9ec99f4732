//! Bestiary Defs -- declarative entity-definition data for the Bestiary framework.
//!
//! This crate owns the loosely-typed side of the framework: the attribute
//! bags parsed out of a definition document and the document format itself.
//! It knows nothing about creature kinds or the host engine; those live in
//! `bestiary-core` and consume the data defined here.
//!
//! # Quick Start
//!
//! ```
//! use bestiary_defs::prelude::*;
//!
//! let source = r#"{
//!     "fast_llama": { "kind": "llama", "attributes": { "strength": 9, "color": "BROWN" } }
//! }"#;
//!
//! let doc = DefinitionDocument::parse(source).unwrap();
//! let (name, raw) = doc.iter().next().unwrap();
//! assert_eq!(name, "fast_llama");
//! assert_eq!(raw.kind, "llama");
//!
//! let bag = raw.attribute_bag();
//! assert_eq!(bag.get_int("strength", -1), 9);
//! assert_eq!(bag.get_str("color", ""), "BROWN");
//! ```

#![deny(unsafe_code)]

pub mod attributes;
pub mod document;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while reading definition data.
#[derive(Debug, thiserror::Error)]
pub enum DefsError {
    /// The definition document is not well-formed structured data. The whole
    /// load is aborted; no partial document is ever produced.
    #[error("malformed definition document: {details}")]
    Malformed {
        details: String,
    },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::attributes::{AttrValue, AttributeBag};
    pub use crate::document::{fingerprint, DefinitionDocument, RawDefinition};
    pub use crate::DefsError;
}
