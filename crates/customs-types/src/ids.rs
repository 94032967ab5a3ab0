//! Stable identifiers: wire tokens, provider names, and storage file names.

// Verdict tokens
pub const TOKEN_ACCEPT: &str = "ACCEPT";
pub const TOKEN_REJECT: &str = "REJECT";

// Expected-action wording used in mismatch diagnostics
pub const ACTION_ACCEPTED: &str = "ACCEPTED";
pub const ACTION_REJECTED: &str = "REJECTED";

// Storage providers
pub const PROVIDER_FILE_ITEM: &str = "fileItem";

// File-backed storage layout
pub const FILE_SAFE_ITEMS: &str = "safe.txt";
pub const FILE_DANGEROUS_ITEMS: &str = "dangerous.txt";
pub const FILE_UNIVERSE_MEMORY: &str = "universe.json";

// Wildcard rule prefix (matched case-insensitively)
pub const WILDCARD_PREFIX: &str = "any type of ";
