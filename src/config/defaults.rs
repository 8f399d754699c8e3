//! Default values for vex-tools configuration.

use crate::canonical::PUBLIC_ID_PREFIX;
use crate::model::OPENVEX_CONTEXT_V0_2_0;

/// Context written into new documents.
pub const DEFAULT_CONTEXT: &str = OPENVEX_CONTEXT_V0_2_0;

/// Author used when none is configured.
pub const DEFAULT_AUTHOR: &str = "Unknown Author";

/// Author role used when none is configured.
pub const DEFAULT_ROLE: &str = "Document Creator";

/// Prefix of generated canonical ids.
pub const DEFAULT_ID_PREFIX: &str = PUBLIC_ID_PREFIX;
