//! Success message constants used throughout the application.

// Session messages
pub const MSG_SESSION_ISSUED: &str = "Session issued";
pub const MSG_LOGOUT_SUCCESS: &str = "Logout successful";
