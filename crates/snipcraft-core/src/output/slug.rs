//! File-name slugs

/// Lowercase, keep `[a-z0-9]`, whitespace and `-`, then hyphenate.
///
/// Whitespace runs become one hyphen, repeated hyphens collapse, and
/// leading/trailing hyphens are trimmed.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-') {
            continue;
        }
        if pending_space {
            push_hyphen(&mut slug);
            pending_space = false;
        }
        if ch == '-' {
            push_hyphen(&mut slug);
        } else {
            slug.push(ch);
        }
    }

    slug.trim_matches('-').to_string()
}

fn push_hyphen(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}
