//! Email shape checks and the matching policy used for uniqueness.
//!
//! Emails are compared after trimming, ignoring ASCII case, so
//! `A@X.com` and ` a@x.com` count as the same address.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern is valid")
});

/// Returns `true` if `email` looks like `local@domain.tld`.
///
/// This is a shape check only; no deliverability is implied.
pub fn has_email_shape(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

/// Returns `true` if two emails address the same mailbox under the matching policy.
pub fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
