//! Environment variable expansion for configuration strings.
//!
//! Build scripts usually pass the version and language being built through
//! the environment (`version = "${DOCS_VERSION}"`).
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Expand an optional field in place.
pub(crate) fn expand_optional(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_env(raw, field)?);
    }
    Ok(())
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}
