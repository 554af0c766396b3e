use uuid::Uuid;

/// Fresh record id (UUID v4, hyphenated).
pub fn next_id() -> String {
    Uuid::new_v4().to_string()
}
