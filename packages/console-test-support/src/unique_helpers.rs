//! Test helpers for generating unique test data
//!
//! ULID-based helpers that keep test documents distinct across runs.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use console_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("player");
/// let id2 = unique_str("player");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique email address with the given prefix
///
/// # Examples
/// ```
/// use console_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("test");
/// assert!(email.ends_with("@example.test"));
/// assert!(email.starts_with("test-"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
