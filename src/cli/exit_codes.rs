//! Exit codes for the CLI
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning |
//! |------|----------|---------|
//! | 0 | `SUCCESS` | Extraction completed, every file was scanned |
//! | 1 | `FILES_SKIPPED` | Extraction completed, some files could not be read |
//! | 2 | `ERROR` | Runtime or output error, no report written |
//! | 3 | `INVALID_CONFIG` | Invalid configuration or pattern catalog |

/// Success - operation completed normally.
pub const SUCCESS: i32 = 0;

/// The report was written but at least one file was skipped.
pub const FILES_SKIPPED: i32 = 1;

/// Runtime error (missing controllers directory, unwritable output, etc.).
pub const ERROR: i32 = 2;

/// Invalid configuration (bad glob, zero sample limit, malformed catalog).
pub const INVALID_CONFIG: i32 = 3;
