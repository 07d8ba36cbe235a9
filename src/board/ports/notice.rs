//! Port for blocking user notices.

/// Surfaces a message the user must acknowledge, such as rejected input.
pub trait Notice {
    /// Shows `message` to the user.
    fn alert(&self, message: &str);
}
