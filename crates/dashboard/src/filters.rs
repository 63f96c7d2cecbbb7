//! Custom Askama template filters.

use std::fmt::Display;

use crate::sanitize::clean_html;

/// Sanitize untrusted HTML before display.
///
/// Usage in templates: `{{ page.content|sanitize|safe }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn sanitize(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(clean_html(&value.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
