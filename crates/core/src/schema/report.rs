//! Conversion of decode and constraint failures into [`ValidationErrors`].

use core::fmt::Display;

use serde_path_to_error::Segment;
use validator::ValidationErrorsKind;

use super::{Rule, ValidationError, ValidationErrors};

/// Field name reported when the body itself has the wrong shape.
const BODY: &str = "body";

fn join(parent: &str, field: impl Display) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

fn render_path(path: &serde_path_to_error::Path) -> String {
    let mut rendered = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => rendered.push_str(&format!("[{index}]")),
            Segment::Map { key } => rendered = join(&rendered, key),
            Segment::Enum { variant } => rendered = join(&rendered, variant),
            Segment::Unknown => rendered = join(&rendered, "?"),
        }
    }
    rendered
}

/// Text between the first pair of backticks, as serde quotes field names.
fn quoted(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once('`')?;
    rest.split_once('`').map(|(name, _)| name)
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ValidationErrors {
    fn from(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = render_path(error.path());
        let message = error.inner().to_string();

        let (field, rule) = if message.starts_with("missing field") {
            let name = quoted(&message).unwrap_or_default();
            (join(&path, name), Rule::Missing)
        } else if message.starts_with("unknown variant") {
            (path, Rule::InvalidEnum)
        } else if message.starts_with("invalid value: integer") {
            (path, Rule::OutOfRange)
        } else {
            (path, Rule::WrongType)
        };

        let field = if field.is_empty() {
            BODY.to_owned()
        } else {
            field
        };
        ValidationError::new(field, rule, message).into()
    }
}

fn rule_for_code(code: &str) -> Rule {
    match code {
        "range" => Rule::OutOfRange,
        "length" | "empty" => Rule::Empty,
        "invalid_email" => Rule::InvalidEmail,
        _ => Rule::WrongType,
    }
}

fn describe(error: &validator::ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    match (error.params.get("min"), error.params.get("max")) {
        (Some(min), Some(max)) => format!("must be between {min} and {max}"),
        (Some(min), None) => format!("must be greater than or equal to {min}"),
        (None, Some(max)) => format!("must be less than or equal to {max}"),
        (None, None) => format!("failed {} check", error.code),
    }
}

fn collect(errors: &validator::ValidationErrors, parent: &str, out: &mut Vec<ValidationError>) {
    for (field, kind) in errors.errors() {
        let path = join(parent, field);
        match kind {
            ValidationErrorsKind::Field(failures) => {
                out.extend(failures.iter().map(|failure| {
                    ValidationError::new(path.clone(), rule_for_code(&failure.code), describe(failure))
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = Vec::new();
        collect(&errors, "", &mut out);
        out.sort_by(|a, b| a.field.cmp(&b.field));
        Self(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Line {
        sku: String,
        qty: u32,
    }

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Basket {
        lines: Vec<Line>,
    }

    fn decode(value: serde_json::Value) -> ValidationErrors {
        serde_path_to_error::deserialize::<_, Basket>(value)
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_missing_field_path() {
        let errors = decode(json!({ "lines": [{ "qty": 1 }] }));
        assert_eq!(errors.rule_for("lines[0].sku"), Some(Rule::Missing));
    }

    #[test]
    fn test_wrong_type_path() {
        let errors = decode(json!({ "lines": [{ "sku": "a", "qty": "1" }] }));
        assert_eq!(errors.rule_for("lines[0].qty"), Some(Rule::WrongType));
    }

    #[test]
    fn test_non_object_body() {
        let errors = decode(json!("basket"));
        assert_eq!(errors.rule_for("body"), Some(Rule::WrongType));
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("missing field `city`"), Some("city"));
        assert_eq!(quoted("no quotes"), None);
    }
}
