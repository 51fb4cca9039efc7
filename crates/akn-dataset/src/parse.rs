use akn_core::DELIMITER;

/// Splits one delimited line into trimmed fields.
/// Double quotes group a field that contains the delimiter; `""` escapes a quote.
pub fn fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' => quoted = !quoted,
            c if c == DELIMITER && !quoted => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            c => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

/// Reads a binary attribute cell. Case-insensitive.
pub fn binary(cell: &str) -> Option<bool> {
    match cell.trim().to_lowercase().as_str() {
        "1" | "1.0" | "y" | "yes" | "true" | "t" => Some(true),
        "0" | "0.0" | "n" | "no" | "false" | "f" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields() {
        assert_eq!(fields("Ashe, 1,0 ,1"), vec!["Ashe", "1", "0", "1"]);
    }

    #[test]
    fn quoted_fields() {
        assert_eq!(
            fields(r#""Nunu, Willump",1,"say ""hi""""#),
            vec!["Nunu, Willump", "1", r#"say "hi""#]
        );
    }

    #[test]
    fn empty_trailing_field() {
        assert_eq!(fields("Ashe,1,"), vec!["Ashe", "1", ""]);
    }

    #[test]
    fn binary_cells() {
        assert_eq!(binary("1"), Some(true));
        assert_eq!(binary(" YES "), Some(true));
        assert_eq!(binary("False"), Some(false));
        assert_eq!(binary("0.0"), Some(false));
        assert_eq!(binary(""), None);
        assert_eq!(binary("2"), None);
        assert_eq!(binary("maybe"), None);
    }
}
