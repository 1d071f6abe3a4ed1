use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

/// Splits `key=value` at the first `=`. The value may itself contain `=`.
pub fn parse_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(input.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "KEY",
            input: input.to_string(),
        });
    }
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_value_splits_at_first_equals() {
        assert_eq!(parse_key_value("writer.title=a=b"), Ok(("writer.title", "a=b")));
        assert_eq!(parse_key_value(" writer.comment ="), Ok(("writer.comment", "")));
    }

    #[test]
    fn parse_key_value_rejects_missing_separator_and_empty_key() {
        assert_eq!(
            parse_key_value("writer.title"),
            Err(ParseError::MissingSeparator("writer.title".to_string()))
        );
        assert!(matches!(
            parse_key_value("=value"),
            Err(ParseError::EmptyComponent { component: "KEY", .. })
        ));
    }
}
