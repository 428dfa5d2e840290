//! Server-side record id generation

use uuid::Uuid;

/// Generate a fresh opaque record id.
///
/// Ids are random v4 UUIDs rendered as strings; callers treat them as
/// opaque and never parse them back.
pub fn next_id() -> String {
    Uuid::new_v4().to_string()
}
