use super::browser;

pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: &[&str] = &["en", "th"];

/// Maps a BCP 47 tag such as `th-TH` onto one of the bundled locales.
pub fn locale_for_language(language: &str) -> &'static str {
    let primary = language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|locale| *locale == primary)
        .unwrap_or(DEFAULT_LOCALE)
}

pub fn apply_browser_locale() {
    let locale = browser::navigator_language()
        .map(|language| locale_for_language(&language))
        .unwrap_or(DEFAULT_LOCALE);
    rust_i18n::set_locale(locale);
    log::debug!("UI locale set to {}", locale);
}
