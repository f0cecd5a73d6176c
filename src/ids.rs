use uuid::Uuid;

/// Opaque unique transaction id. Callers never inspect its structure.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
