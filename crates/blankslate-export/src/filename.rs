/// Lowercase `name` and replace each run of whitespace with a single hyphen.
///
/// Nothing else is touched: punctuation and non-ASCII letters pass through,
/// so `"My Cool Template!"` becomes `"my-cool-template!"`.
pub fn slugify(name: &str) -> String {
    // Whole-string lowercasing keeps context-dependent mappings (final sigma).
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}

/// The `.html` filename suggested for exporting a template called `name`.
pub fn suggested_filename(name: &str) -> String {
    format!("{}.html", slugify(name))
}
