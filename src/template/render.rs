//! Placeholder substitution for a single argv token.
//!
//! A token is scanned left to right into literal runs, escaped braces and
//! `{NAME}` references. `{{` and `}}` stand for literal braces and a lone `}`
//! is kept as is. A name is trimmed and must then be non-empty and free of
//! braces and whitespace.
//!
//! Undefined placeholders are an error rather than an empty substitution, so a
//! missing `{ADB_SERIAL}` can never silently retarget a command.

use std::collections::HashMap;
use thiserror::Error;

/// Placeholder name to value mapping used to fill command templates.
pub type Placeholders = HashMap<String, String>;

/// Why a token could not be rendered. Positions are byte offsets of the
/// opening `{` within the token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("no value for placeholder '{name}' (byte {position} of token)")]
    UndefinedPlaceholder { name: String, position: usize },

    #[error("'{{' at byte {position} of token is never closed")]
    UnmatchedBrace { position: usize },

    #[error("'{{}}' at byte {position} of token names no placeholder")]
    EmptyPlaceholderName { position: usize },

    #[error("'{name}' at byte {position} of token is not a valid placeholder name")]
    MalformedPlaceholder { name: String, position: usize },
}

/// One piece of a scanned token.
#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder { name: &'a str, position: usize },
}

/// Split `token` into segments. Escapes are folded into literal segments.
fn segments(token: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut out = Vec::new();
    let mut rest = token;
    let mut offset = 0;

    while let Some(idx) = rest.find(['{', '}']) {
        if idx > 0 {
            out.push(Segment::Literal(&rest[..idx]));
        }
        let position = offset + idx;
        let tail = &rest[idx..];

        let consumed = if tail.starts_with("{{") {
            out.push(Segment::Literal("{"));
            2
        } else if tail.starts_with('}') {
            out.push(Segment::Literal("}"));
            if tail.starts_with("}}") { 2 } else { 1 }
        } else {
            let close = tail
                .find('}')
                .ok_or(TemplateError::UnmatchedBrace { position })?;
            let name = placeholder_name(&tail[1..close], position)?;
            out.push(Segment::Placeholder { name, position });
            close + 1
        };

        rest = &tail[consumed..];
        offset = position + consumed;
    }

    if !rest.is_empty() {
        out.push(Segment::Literal(rest));
    }
    Ok(out)
}

fn placeholder_name(raw: &str, position: usize) -> Result<&str, TemplateError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(TemplateError::EmptyPlaceholderName { position });
    }
    if name.contains('{') || name.contains(char::is_whitespace) {
        return Err(TemplateError::MalformedPlaceholder {
            name: name.to_string(),
            position,
        });
    }
    Ok(name)
}

/// Render one token by substituting placeholders.
///
/// The whole token is checked before any value is looked up, so a malformed
/// token is reported as such even when an earlier name is also undefined.
///
/// # Examples
///
/// ```
/// use devctl::template::{placeholders, render_token};
///
/// let values = placeholders([("ADB_SERIAL", "emulator-5554")]);
/// let token = render_token("serial={ADB_SERIAL}", &values).unwrap();
/// assert_eq!(token, "serial=emulator-5554");
/// ```
pub fn render_token(token: &str, values: &Placeholders) -> Result<String, TemplateError> {
    segments(token)?
        .into_iter()
        .try_fold(String::with_capacity(token.len()), |mut rendered, segment| {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder { name, position } => {
                    let value = values.get(name).ok_or_else(|| {
                        TemplateError::UndefinedPlaceholder {
                            name: name.to_string(),
                            position,
                        }
                    })?;
                    rendered.push_str(value);
                }
            }
            Ok(rendered)
        })
}

/// Build a placeholder map from key-value pairs.
pub fn placeholders<I, K, V>(pairs: I) -> Placeholders
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
