//! String transformation utilities for code generation

/// Join an ordered sequence of parts with `separator`.
///
/// The separator only ever appears between two parts, never before the
/// first or after the last.
pub fn join_parts<I, S>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(part.as_ref());
    }
    result
}

/// Build the generated identifier for a schema function name: `prefix`
/// followed by the fully lower-cased name.
pub fn to_function_name(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_parts() {
        assert_eq!(join_parts(["a", "b", "c"], ", "), "a, b, c");
        assert_eq!(join_parts(["only"], ", "), "only");
        assert_eq!(join_parts(Vec::<String>::new(), ", "), "");
        assert_eq!(join_parts(["", ""], "|"), "|");
    }

    #[test]
    fn test_to_function_name() {
        assert_eq!(to_function_name("lantern_", "DoThing"), "lantern_dothing");
        assert_eq!(to_function_name("lantern_", "foo"), "lantern_foo");
        assert_eq!(to_function_name("lantern_", "HTTPGet2"), "lantern_httpget2");
        assert_eq!(to_function_name("", "Mixed_Case"), "mixed_case");
    }
}
