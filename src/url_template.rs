//! URL template rewriting and request naming.
//!
//! Route patterns use `<name>` or `<converter:name>` placeholders; collection documents
//! use `{{name}}` template variables. [`rewrite_url`] turns the former into the latter,
//! and [`request_name`] derives the display name of a request from its endpoint.

use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?:[A-Za-z0-9_]+:)?(?<name>[A-Za-z0-9_]+)>").expect("a valid regex")
});

/// Prepends `base_url` to `pattern` and rewrites every placeholder into a template variable.
///
/// Anything that does not parse as a placeholder (`<int:>`, `<a-b>`, an unterminated
/// `<id`) is copied through unchanged.
///
/// ```
/// use postman_from_routes::url_template::rewrite_url;
///
/// assert_eq!(rewrite_url("{{base_url}}", "/foo/<int:id>"), "{{base_url}}/foo/{{id}}");
/// ```
pub fn rewrite_url(base_url: &str, pattern: &str) -> String {
    let url = format!("{}{}", base_url, pattern);
    PLACEHOLDER.replace_all(&url, "{{${name}}}").into_owned()
}

/// Derives a human-readable request name from a qualified endpoint name.
///
/// Keeps the part after the last `.`, drops the leading verb token up to the first `_`,
/// then turns the remaining underscores into spaces: `users.get_user_profile` becomes
/// `user profile`, `bar` stays `bar`.
///
/// This is a best-effort heuristic that assumes `verb_noun` view names. Names following
/// another convention get trimmed all the same (`user_list` becomes `list`).
pub fn request_name(endpoint: &str) -> String {
    let leaf = endpoint.rsplit('.').next().unwrap_or(endpoint);
    let without_verb = match leaf.split_once('_') {
        Some((_, rest)) => rest,
        None => leaf,
    };
    without_verb.replace('_', " ")
}
