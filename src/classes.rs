//! Class list helpers
//!
//! Class names are kept as a single space-separated string, the way the DOM
//! exposes `className`.

/// Strip one leading `.`, so selector-style names like `.char` are accepted
pub fn sanitize(class_name: &str) -> &str {
    class_name.strip_prefix('.').unwrap_or(class_name)
}

/// Split an existing `className` string into its tokens
pub fn class_names(class_attr: &str) -> Vec<String> {
    if class_attr.is_empty() {
        Vec::new()
    } else {
        class_attr.split(' ').map(str::to_string).collect()
    }
}

/// Merge space-separated `class_name` tokens into `class_attr`
///
/// Each token is sanitized and appended only if not already present.
/// Returns the new `className` string.
pub fn add_class(class_attr: &str, class_name: Option<&str>) -> String {
    let Some(class_name) = class_name else {
        return class_attr.to_string();
    };

    let mut existing = class_names(class_attr);
    for token in class_name.split(' ') {
        let token = sanitize(token);
        if !existing.iter().any(|name| name == token) {
            existing.push(token.to_string());
        }
    }

    existing.join(" ")
}
