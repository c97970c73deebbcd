/// Normalizes an email for storage and lookup.
///
/// Login matching is case-insensitive, so both `user.normalized_email` and lookups go
/// through this function.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
