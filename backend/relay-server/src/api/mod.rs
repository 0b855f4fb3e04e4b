pub mod error;
pub mod extractors;
pub mod sms;
pub mod users;

/// Treat absent, null and empty strings alike
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
