use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored user status is not one of the known values.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown user status '{0}' stored for user {1}")]
    UnknownUserStatus(String, i32),

    /// A stored order status code is not one of `OSC001`..`OSC009`.
    #[error("Unknown order status '{0}' stored for order {1}")]
    UnknownOrderStatus(String, String),

    /// Password hashing failed or the blocking hash task panicked.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
