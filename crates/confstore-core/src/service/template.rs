//! Template renderer
//!
//! Walks a document tree and substitutes `{{ name }}` placeholders inside
//! string scalars from a flat name-to-string context. Rendering is
//! all-or-nothing: the first undefined or malformed placeholder aborts the
//! whole render, and the input document is never mutated — a new tree is
//! produced.

use std::collections::HashMap;

use indexmap::IndexMap;

use confstore_common::{ConfstoreError, Document};

/// Flat placeholder name to substitution value mapping
pub type RenderContext = HashMap<String, String>;

/// Render a document against a context, producing a new tree.
///
/// Maps keep their keys, sequences keep their order, and non-string
/// scalars pass through untouched.
pub fn render(doc: &Document, ctx: &RenderContext) -> Result<Document, ConfstoreError> {
    match doc {
        Document::Map(map) => {
            let mut rendered = IndexMap::with_capacity(map.len());
            for (key, value) in map {
                rendered.insert(key.clone(), render(value, ctx)?);
            }
            Ok(Document::Map(rendered))
        }
        Document::Sequence(seq) => {
            let rendered = seq
                .iter()
                .map(|value| render(value, ctx))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Document::Sequence(rendered))
        }
        Document::String(s) => Ok(Document::String(render_scalar(s, ctx)?)),
        other => Ok(other.clone()),
    }
}

/// Substitute every `{{ name }}` span in one string scalar.
fn render_scalar(input: &str, ctx: &RenderContext) -> Result<String, ConfstoreError> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            return Err(ConfstoreError::MalformedTemplate(format!(
                "unterminated placeholder in '{input}'"
            )));
        };

        let name = after[..end].trim();
        if name.is_empty() {
            return Err(ConfstoreError::MalformedTemplate(format!(
                "empty placeholder name in '{input}'"
            )));
        }
        // Context keys are flat by contract; a dotted name would need a
        // path-lookup semantics this renderer does not define.
        if name.contains('.') {
            return Err(ConfstoreError::MalformedTemplate(format!(
                "nested placeholder names are not supported: '{name}'"
            )));
        }

        match ctx.get(name) {
            Some(value) => out.push_str(value),
            None => return Err(ConfstoreError::UndefinedPlaceholder(name.to_string())),
        }

        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Build a render context from a JSON request body.
///
/// The body must be an object of scalars: strings are taken as-is,
/// numbers and booleans are stringified. Nulls, arrays, and nested
/// objects have no string representation and are rejected.
pub fn context_from_json(value: &serde_json::Value) -> Result<RenderContext, ConfstoreError> {
    let object = value.as_object().ok_or_else(|| {
        ConfstoreError::MalformedInput("template context must be a JSON object".to_string())
    })?;

    let mut ctx = RenderContext::with_capacity(object.len());
    for (name, value) in object {
        let rendered = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            _ => {
                return Err(ConfstoreError::MalformedInput(format!(
                    "template context value for '{name}' must be a scalar"
                )));
            }
        };
        ctx.insert(name.clone(), rendered);
    }

    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Document {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn ctx(pairs: &[(&str, &str)]) -> RenderContext {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_placeholders_is_identity() {
        let d = doc("database:\n  host: db\n  port: 5432\nflags:\n  - true\n  - null\n");
        assert_eq!(render(&d, &RenderContext::new()).unwrap(), d);
    }

    #[test]
    fn test_basic_substitution() {
        let d = doc("msg: 'Hello {{user}}!'\n");
        let rendered = render(&d, &ctx(&[("user", "Alice")])).unwrap();
        assert_eq!(rendered, doc("msg: 'Hello Alice!'\n"));
    }

    #[test]
    fn test_whitespace_around_name_is_trimmed() {
        let d = doc("msg: '{{  user  }}'\n");
        let rendered = render(&d, &ctx(&[("user", "Alice")])).unwrap();
        assert_eq!(rendered, doc("msg: Alice\n"));
    }

    #[test]
    fn test_multiple_placeholders_in_one_string() {
        let d = doc("dsn: '{{user}}:{{password}}@{{host}}'\n");
        let rendered = render(
            &d,
            &ctx(&[("user", "app"), ("password", "s3cret"), ("host", "db")]),
        )
        .unwrap();
        assert_eq!(rendered, doc("dsn: 'app:s3cret@db'\n"));
    }

    #[test]
    fn test_placeholders_deep_in_tree() {
        let d = doc("database:\n  host: '{{host}}'\nreplicas:\n  - '{{host}}-a'\n  - '{{host}}-b'\n");
        let rendered = render(&d, &ctx(&[("host", "db")])).unwrap();
        assert_eq!(rendered, doc("database:\n  host: db\nreplicas:\n  - db-a\n  - db-b\n"));
    }

    #[test]
    fn test_non_string_scalars_are_untouched() {
        let d = doc("port: 5432\nratio: 1.5\nenabled: true\nextra: null\n");
        assert_eq!(render(&d, &ctx(&[("port", "9")])).unwrap(), d);
    }

    #[test]
    fn test_undefined_placeholder() {
        let d = doc("msg: 'Hello {{user}}!'\n");
        let err = render(&d, &RenderContext::new()).unwrap_err();
        match err {
            ConfstoreError::UndefinedPlaceholder(name) => assert_eq!(name, "user"),
            other => panic!("expected UndefinedPlaceholder, got {other}"),
        }
    }

    #[test]
    fn test_unterminated_placeholder() {
        let d = doc("msg: 'Hi {{ user '\n");
        let err = render(&d, &ctx(&[("user", "x")])).unwrap_err();
        assert!(matches!(err, ConfstoreError::MalformedTemplate(_)));
    }

    #[test]
    fn test_empty_placeholder_name() {
        let d = doc("msg: 'Hi {{ }}'\n");
        let err = render(&d, &ctx(&[("user", "x")])).unwrap_err();
        assert!(matches!(err, ConfstoreError::MalformedTemplate(_)));
    }

    #[test]
    fn test_dotted_placeholder_name_is_rejected() {
        let d = doc("msg: '{{ a.b }}'\n");
        let err = render(&d, &ctx(&[("a.b", "x")])).unwrap_err();
        assert!(matches!(err, ConfstoreError::MalformedTemplate(_)));
    }

    #[test]
    fn test_failure_leaves_input_untouched() {
        let d = doc("msg: '{{user}}'\nother: plain\n");
        let before = d.clone();
        let _ = render(&d, &RenderContext::new());
        assert_eq!(d, before);
    }

    #[test]
    fn test_stray_closing_braces_pass_through() {
        let d = doc("msg: 'a }} b'\n");
        assert_eq!(render(&d, &RenderContext::new()).unwrap(), d);
    }

    #[test]
    fn test_context_from_json_coerces_scalars() {
        let value = serde_json::json!({"user": "Alice", "port": 5432, "debug": true});
        let ctx = context_from_json(&value).unwrap();
        assert_eq!(ctx["user"], "Alice");
        assert_eq!(ctx["port"], "5432");
        assert_eq!(ctx["debug"], "true");
    }

    #[test]
    fn test_context_from_json_rejects_nesting() {
        let value = serde_json::json!({"nested": {"a": 1}});
        assert!(matches!(
            context_from_json(&value).unwrap_err(),
            ConfstoreError::MalformedInput(_)
        ));

        let value = serde_json::json!(["not", "an", "object"]);
        assert!(matches!(
            context_from_json(&value).unwrap_err(),
            ConfstoreError::MalformedInput(_)
        ));
    }
}
