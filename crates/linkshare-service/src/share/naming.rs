//! Default names for new public links.

/// First unused default name for a new link on `file_name`.
///
/// The template's `{file}` placeholder is replaced by the file name. When
/// that name is taken, ` (2)`, ` (3)`, ... are appended until one is free.
pub fn default_link_name(template: &str, file_name: &str, existing_names: &[String]) -> String {
    let base = template.replace("{file}", file_name);
    let taken = |candidate: &str| existing_names.iter().any(|name| name == candidate);

    if !taken(&base) {
        return base;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{base} ({n})");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
