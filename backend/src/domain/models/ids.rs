//! Identifier generation for owners, pets and log entries.

use uuid::Uuid;

/// Generate an opaque unique identifier (UUID v4, hyphenated)
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
