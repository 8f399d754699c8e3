//! Configuration for vex-tools.
//!
//! Settings are plain serde structures with defaults, so a config file only
//! needs the keys it changes. They cover:
//! - defaults stamped onto new documents (context, author, role, tooling)
//! - the prefix of generated canonical ids
//!
//! # Quick Start
//!
//! ```rust
//! use vex_tools::config::{Validatable, VexConfig};
//!
//! let config = VexConfig::builder()
//!     .author("Chainguard Inc")
//!     .tooling("vexctl")
//!     .build();
//! assert!(config.is_valid());
//!
//! let doc = vex_tools::Document::from_defaults(&config.document);
//! assert_eq!(doc.metadata.author, "Chainguard Inc");
//! ```
//!
//! # Configuration File
//!
//! Place a `.vex-tools.yaml` file in your project root or `~/.config/vex-tools/`:
//!
//! ```yaml
//! document:
//!   author: Chainguard Inc
//!   role: Security Team
//! canonical:
//!   id_prefix: https://openvex.dev/docs/public/vex-
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_AUTHOR, DEFAULT_CONTEXT, DEFAULT_ID_PREFIX, DEFAULT_ROLE};
pub use types::{CanonicalConfig, DocumentDefaults, VexConfig, VexConfigBuilder};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `VexConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.vex-tools.yaml` files.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(VexConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|err| crate::error::VexError::config(format!("schema serialization: {err}")))
}
