//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

/// Success - operation completed without errors
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// Source error - the OpenAPI document could not be loaded
pub const SOURCE_ERROR: i32 = 3;

/// Schema error - the document does not have the expected shape or cannot be resolved
pub const SCHEMA_ERROR: i32 = 4;

/// Network error - a request failed before a usable answer was received
pub const NETWORK_ERROR: i32 = 5;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
