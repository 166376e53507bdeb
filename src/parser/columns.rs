//! Column-name repair
//!
//! Exports often pair a label column with an auxiliary descriptive column
//! that has no header of its own. Loaders surface those as placeholder names;
//! this pass attaches each placeholder to its preceding named sibling.

/// Placeholder convention shared by the bundled loaders: a blank header cell,
/// or a synthetic "Unnamed:<n>" marker.
pub fn default_placeholder(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.is_empty() || trimmed.to_lowercase().starts_with("unnamed:")
}

/// Rewrite placeholder column names as `"<lastRealName> (Text)"`.
///
/// The predicate decides what counts as a placeholder, keeping the loader's
/// naming convention out of this pass. Before any real name is seen the
/// tracked name is the literal "Unnamed". Real names pass through unchanged.
pub fn normalize_columns<F>(names: &[String], is_placeholder: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut prev = "Unnamed".to_string();
    names
        .iter()
        .map(|name| {
            if is_placeholder(name) {
                format!("{prev} (Text)")
            } else {
                prev = name.clone();
                name.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn placeholder_takes_preceding_name() {
        let out = normalize_columns(&names(&["ID", "Unnamed: 1", "Amount"]), default_placeholder);
        assert_eq!(out, names(&["ID", "ID (Text)", "Amount"]));
    }

    #[test]
    fn leading_placeholder_stays_unnamed() {
        let out = normalize_columns(&names(&["", "ID"]), default_placeholder);
        assert_eq!(out, names(&["Unnamed (Text)", "ID"]));
    }

    #[test]
    fn preserves_length_and_real_names() {
        let input = names(&["A", "Unnamed: 1", "B", "", "C"]);
        let out = normalize_columns(&input, default_placeholder);
        assert_eq!(out.len(), input.len());
        for (orig, cleaned) in input.iter().zip(&out) {
            if !default_placeholder(orig) {
                assert_eq!(orig, cleaned);
            }
        }
    }

    #[test]
    fn idempotent_on_clean_names() {
        let once = normalize_columns(&names(&["ID", "Unnamed: 1", "Amount"]), default_placeholder);
        let twice = normalize_columns(&once, default_placeholder);
        assert_eq!(once, twice);
    }

    #[test]
    fn placeholder_predicate_is_injected() {
        // A loader using a different marker supplies its own predicate
        let out = normalize_columns(&names(&["ID", "__auto__"]), |s| s == "__auto__");
        assert_eq!(out, names(&["ID", "ID (Text)"]));
    }
}
