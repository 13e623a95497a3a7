//! Utility functions for article content.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Derive a URL slug from a post title.
///
/// Lower-cases the title, replaces every run of characters outside
/// `[a-z0-9]` with a single `-`, and strips leading and trailing dashes.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let dashed = NON_SLUG_RE.replace_all(&lowered, "-");
    dashed.trim_matches('-').to_string()
}
