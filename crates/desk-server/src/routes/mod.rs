//! Route handlers organized by surface

pub mod health;
pub mod incidents;
pub mod ui;

/// Treat blank form and query values as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse an optional, possibly blank value with `FromStr`.
pub(crate) fn parse_optional<T>(value: Option<String>) -> Result<Option<T>, T::Err>
where
    T: std::str::FromStr,
{
    non_empty(value).map(|v| v.parse()).transpose()
}
