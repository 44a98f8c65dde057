//! Locale code normalization for `hreflang` annotations.

/// `hreflang` value for the variant without explicit language targeting.
pub const X_DEFAULT: &str = "x-default";

/// Convert a locale code into the `hreflang` code search engines expect.
///
/// English is the fallback variant and maps to `x-default`. Every other
/// locale is reduced to its primary subtag.
///
/// # Examples
///
/// ```
/// use ml_alternates::hreflang_code;
///
/// assert_eq!(hreflang_code("en"), "x-default");
/// assert_eq!(hreflang_code("pt_BR"), "pt");
/// assert_eq!(hreflang_code("fr"), "fr");
/// ```
pub fn hreflang_code(locale: &str) -> &str {
    if locale == "en" {
        return X_DEFAULT;
    }
    primary_subtag(locale)
}

/// Primary language subtag of a `lang_REGION` locale code.
fn primary_subtag(locale: &str) -> &str {
    locale.split_once('_').map_or(locale, |(primary, _)| primary)
}
