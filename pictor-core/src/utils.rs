//! String transforms for icon identifiers.

/// Convert an identifier to PascalCase (e.g., "icon-chevron-down16" -> "IconChevronDown16").
///
/// Hyphens, underscores, dots and whitespace are word boundaries. A letter that
/// directly follows a digit also starts a new word ("icon-3d" -> "Icon3D").
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let words = s
        .split(|c: char| matches!(c, '-' | '_' | '.') || c.is_whitespace())
        .filter(|word| !word.is_empty());

    for word in words {
        let mut after_digit = false;
        for (i, c) in word.chars().enumerate() {
            if i == 0 || (after_digit && c.is_alphabetic()) {
                result.extend(c.to_uppercase());
            } else {
                result.push(c);
            }
            after_digit = c.is_ascii_digit();
        }
    }
    result
}

/// Convert a design-tool label to a lowercase, hyphen-delimited slug.
///
/// camelCase humps become word boundaries, every run of characters that are
/// not alphanumeric collapses into a single hyphen, and leading or trailing
/// hyphens are dropped ("Chevron Down" and "ChevronDown" both give "chevron-down").
pub fn slugify(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len());
    let mut pending_separator = false;

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            pending_separator = true;
            continue;
        }

        let hump = c.is_uppercase()
            && i > 0
            && match chars[i - 1] {
                prev if prev.is_lowercase() || prev.is_ascii_digit() => true,
                prev if prev.is_uppercase() => chars.get(i + 1).is_some_and(|n| n.is_lowercase()),
                _ => false,
            };

        if (pending_separator || hump) && !result.is_empty() {
            result.push('-');
        }
        pending_separator = false;
        result.extend(c.to_lowercase());
    }
    result
}

/// Whether the string contains any decimal digit.
pub fn contains_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("icon-chevron-down16"), "IconChevronDown16");
        assert_eq!(to_pascal_case("icon-home24"), "IconHome24");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("icon--double"), "IconDouble");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_letter_after_digit() {
        assert_eq!(to_pascal_case("icon-3d-rotate16"), "Icon3DRotate16");
        assert_eq!(to_pascal_case("icon-h2o32"), "IconH2O32");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Chevron Down"), "chevron-down");
        assert_eq!(slugify("ChevronDown"), "chevron-down");
        assert_eq!(slugify("16/chevron-down"), "16-chevron-down");
        assert_eq!(slugify("  Arrow -- Left! "), "arrow-left");
        assert_eq!(slugify("XMLHttp"), "xml-http");
        assert_eq!(slugify("___"), "");
    }

    #[test]
    fn test_contains_digit() {
        assert!(contains_digit("Size16"));
        assert!(contains_digit("16/home"));
        assert!(!contains_digit("Chevron Down"));
        assert!(!contains_digit(""));
    }
}
