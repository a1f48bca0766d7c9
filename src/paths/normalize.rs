//! String-level path normalization used by the resolver.
//!
//! Callers frequently hand over segments such as `///var/www///`. Every
//! segment is trimmed of leading and trailing separators before it is joined,
//! so the output contains exactly one separator at each boundary no matter
//! how many redundant separators were supplied.

/// Separator used when joining resolved paths.
pub const SEPARATOR: char = '/';

/// Strip every leading and trailing separator from `segment`.
pub fn trim_separators(segment: &str) -> &str {
    segment.trim_matches(SEPARATOR)
}

/// Normalize `path` and prefix it with exactly one separator.
pub fn rooted(path: &str) -> String {
    format!("{SEPARATOR}{}", trim_separators(path))
}

/// Join `segment` onto `base` with exactly one separator between them.
///
/// An empty segment (after trimming) leaves `base` without a trailing
/// separator.
pub fn join(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches(SEPARATOR);
    let segment = trim_separators(segment);
    if segment.is_empty() {
        if base.is_empty() {
            return SEPARATOR.to_string();
        }
        return base.to_string();
    }
    format!("{base}{SEPARATOR}{segment}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_both_ends() {
        assert_eq!(trim_separators("///Resources/forms///"), "Resources/forms");
        assert_eq!(trim_separators("plain"), "plain");
        assert_eq!(trim_separators("///"), "");
    }

    #[test]
    fn rooted_has_a_single_leading_separator() {
        assert_eq!(rooted("///var/www///"), "/var/www");
        assert_eq!(rooted("var/www"), "/var/www");
        assert_eq!(rooted(""), "/");
    }

    #[test]
    fn join_is_idempotent_over_redundant_separators() {
        assert_eq!(join("/var/www", "Resources"), "/var/www/Resources");
        assert_eq!(join("/var/www///", "///Resources///"), "/var/www/Resources");
        assert_eq!(join("/", "etc"), "/etc");
        assert_eq!(join("/var/www", "//"), "/var/www");
    }
}
