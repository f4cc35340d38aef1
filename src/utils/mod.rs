use std::borrow::Cow;

/// Maximum length of a search-snippet description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 160;

/// Computes the absolute canonical URL for a path on the given base origin.
///
/// The result always matches the form the host normalizer accepts without
/// rewriting: directory-style paths carry a trailing `/`, file-like paths
/// (a `.` in the last segment) do not, and the empty path maps to the bare
/// origin. Idempotent when re-applied to its own path component.
pub fn canonical_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_end_matches('/');
    let path = path.strip_prefix('/').unwrap_or(path);

    if path.is_empty() {
        base.to_string()
    } else if has_file_extension(path) {
        format!("{base}/{path}")
    } else {
        format!("{base}/{path}/")
    }
}

/// Whether the last segment of `path` looks like a file reference.
///
/// This is a heuristic (a `.` anywhere in the final segment), not MIME
/// detection; a directory literally named with a dot would be misclassified.
pub fn has_file_extension(path: &str) -> bool {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .map(|segment| segment.contains('.'))
        .unwrap_or_default()
}

/// Strips HTML tags from a fragment, keeping the text between them.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    text
}

/// Decodes HTML entities (named and numeric) into literal characters.
pub fn decode_entities(text: &str) -> String {
    match html_escape::decode_html_entities(text) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

/// Normalizes an upstream rich-text fragment into plain display text.
pub fn clean_text(html: &str) -> String {
    decode_entities(&strip_tags(html)).trim().to_string()
}

/// Builds a search-snippet description from an upstream excerpt: tags
/// stripped, entities decoded, truncated to [`MAX_DESCRIPTION_LENGTH`]
/// characters.
pub fn meta_description(html: &str) -> String {
    truncate_chars(&clean_text(html), MAX_DESCRIPTION_LENGTH)
}

pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}
