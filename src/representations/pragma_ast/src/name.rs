/// Canonical spelling of a pragma or option name.
///
/// The first character is kept as-is, the rest is lowercased with
/// underscores removed, so `noSideEffect`, `nosideeffect` and
/// `no_side_effect` all refer to the same pragma.
pub fn normalize_name(name: &str) -> String {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return String::new();
    };

    std::iter::once(first)
        .chain(
            chars
                .filter(|c| *c != '_')
                .flat_map(|c| c.to_lowercase()),
        )
        .collect()
}

pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_and_underscores_after_first_char() {
        assert!(names_match("noSideEffect", "nosideeffect"));
        assert!(names_match("noSideEffect", "no_side_effect"));
        assert!(names_match("boundChecks", "bound_checks"));
    }

    #[test]
    fn first_char_is_case_sensitive() {
        assert!(!names_match("Final", "final"));
        assert_eq!(normalize_name(""), "");
    }
}
