//! Configuration templates for `sysman init`.
//!
//! Templates are stored as valid TOML files and handed out commented out, so a fresh config
//! documents every setting without changing any default.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Prefixes every non-empty, non-comment line with `# `.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn templates_parse_as_valid_toml() {
        let local = parse_config(LOCAL_TEMPLATE).unwrap();
        assert_eq!(local.root, Some(false));
        let search = local.search.unwrap();
        assert_eq!(search.live_min_score, Some(0.12));
        assert_eq!(search.advanced_min_score, Some(0.15));

        let global = parse_config(GLOBAL_TEMPLATE).unwrap();
        assert!(global.library.unwrap().paths.is_some());
    }

    #[test]
    fn commented_template_sets_nothing() {
        let config = parse_config(&local_template()).unwrap();
        assert!(config.root.is_none());
        assert!(config.library.is_none());
        assert!(config.search.is_none());
    }

    #[test]
    fn comment_template_prefixes_lines() {
        let input = "# note\n[section]\n\nkey = \"value\"\n";
        assert_eq!(
            comment_template(input),
            "# note\n# [section]\n\n# key = \"value\"\n"
        );
    }
}
