//! User-facing messages shown when a request settles.

pub const NETWORK_ERROR: &str = "Network error. Please try again.";

pub const DEALERS_NETWORK_ERROR: &str = "Network error occurred";
pub const DEALERS_LOAD_FAILED: &str = "Failed to load dealers";

pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

pub const REGISTRATION_SUCCEEDED: &str = "Registration successful! You are now logged in.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

pub const REVIEW_SUCCEEDED: &str = "Review submitted successfully!";
pub const REVIEW_FAILED: &str = "Failed to submit review";

/// Fallback pair for a request kind: used for transport failures and for
/// rejections that carry no server message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureMessages {
    pub transport: &'static str,
    pub rejected: &'static str,
}

pub const DEALERS_FAILURES: FailureMessages = FailureMessages {
    transport: DEALERS_NETWORK_ERROR,
    rejected: DEALERS_LOAD_FAILED,
};

pub const LOGIN_FAILURES: FailureMessages = FailureMessages {
    transport: NETWORK_ERROR,
    rejected: LOGIN_FAILED,
};

pub const REGISTRATION_FAILURES: FailureMessages = FailureMessages {
    transport: NETWORK_ERROR,
    rejected: REGISTRATION_FAILED,
};

pub const REVIEW_FAILURES: FailureMessages = FailureMessages {
    transport: NETWORK_ERROR,
    rejected: REVIEW_FAILED,
};
