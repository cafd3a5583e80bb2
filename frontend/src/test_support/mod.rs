#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    /// Returns the opening tag of the first element carrying `id="..."`.
    pub fn opening_tag<'a>(html: &'a str, id: &str) -> Option<&'a str> {
        let marker = format!("id=\"{}\"", id);
        let at = html.find(&marker)?;
        let start = html[..at].rfind('<')?;
        let end = at + html[at..].find('>')?;
        Some(&html[start..=end])
    }

    /// Whether the element with `id` carries a `disabled` attribute. Class
    /// tokens such as `disabled:opacity-50` do not count.
    pub fn is_disabled(html: &str, id: &str) -> bool {
        let tag = opening_tag(html, id).unwrap_or_else(|| panic!("no element with id {}", id));
        tag.trim_end_matches('>')
            .split_whitespace()
            .any(|token| token == "disabled" || token.starts_with("disabled="))
    }

    #[test]
    fn is_disabled_ignores_class_variants() {
        let enabled = r#"<button id="go" class="disabled:opacity-50">Go</button>"#;
        assert!(!is_disabled(enabled, "go"));
        let disabled = r#"<button id="go" class="disabled:opacity-50" disabled>Go</button>"#;
        assert!(is_disabled(disabled, "go"));
        let with_value = r#"<button disabled="" id="go">Go</button>"#;
        assert!(is_disabled(with_value, "go"));
    }
}
