/// Splits one CSV line into trimmed fields, honoring single or double
/// quotes around a field. Quotes are stripped from the returned fields.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) if ch == q => in_quotes = None,
            Some(_) => current.push(ch),
            None => match ch {
                '"' | '\'' => in_quotes = Some(ch),
                ',' => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(ch),
            },
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(
            split_csv_line("Clear,Highway,High,0"),
            vec!["Clear", "Highway", "High", "0"]
        );
    }

    #[test]
    fn honors_quoted_commas_and_strips_quotes() {
        assert_eq!(
            split_csv_line(r#""Foggy, dense",'Rural road',Low"#),
            vec!["Foggy, dense", "Rural road", "Low"]
        );
    }

    #[test]
    fn trims_whitespace_and_keeps_empty_fields() {
        assert_eq!(split_csv_line(" a , ,b"), vec!["a", "", "b"]);
    }
}
