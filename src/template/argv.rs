//! Argument-vector templates.

use super::render::{Placeholders, TemplateError, render_token};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered argv whose tokens may contain `{NAME}` placeholders.
///
/// In configuration a template is either a token array or a single command
/// string, which is split with shell quoting rules:
///
/// ```json
/// { "UUID": ["{ADB}", "-s", "{ADB_SERIAL}", "shell", "settings get secure android_id"] }
/// { "UUID": "{ADB} -s {ADB_SERIAL} shell 'settings get secure android_id'" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArgvSource", into = "Vec<String>")]
pub struct ArgvTemplate {
    tokens: Vec<String>,
}

/// Accepted configuration shapes for an argv template.
#[derive(Deserialize)]
#[serde(untagged)]
enum ArgvSource {
    Tokens(Vec<String>),
    Command(String),
}

impl TryFrom<ArgvSource> for ArgvTemplate {
    type Error = String;

    fn try_from(source: ArgvSource) -> Result<Self, Self::Error> {
        match source {
            ArgvSource::Tokens(tokens) => Ok(Self::new(tokens)),
            ArgvSource::Command(command) => Self::parse_command(&command),
        }
    }
}

impl From<ArgvTemplate> for Vec<String> {
    fn from(template: ArgvTemplate) -> Self {
        template.tokens
    }
}

impl ArgvTemplate {
    /// Create a template from raw tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a command line into a template with `shell-words`.
    pub fn parse_command(command: &str) -> Result<Self, String> {
        let tokens = shell_words::split(command)
            .map_err(|e| format!("failed to parse command '{}': {}", command, e))?;
        Ok(Self { tokens })
    }

    /// The template tokens, unrendered.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Produce a concrete argv by substituting every placeholder.
    ///
    /// Fails on the first token that cannot be rendered; no partial vector
    /// is ever returned. Token order is preserved.
    pub fn generate(&self, values: &Placeholders) -> Result<Vec<String>, TemplateError> {
        self.tokens
            .iter()
            .map(|token| render_token(token, values))
            .collect()
    }
}

impl fmt::Display for ArgvTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_words::join(&self.tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::placeholders;

    fn adb_template() -> ArgvTemplate {
        ArgvTemplate::new(["{ADB}", "-s", "{ADB_SERIAL}", "shell", "getprop ro.serialno"])
    }

    #[test]
    fn test_generate_substitutes_in_order() {
        let values = placeholders([("ADB", "/opt/adb"), ("ADB_SERIAL", "R58M")]);
        let argv = adb_template().generate(&values).unwrap();
        assert_eq!(
            argv,
            vec!["/opt/adb", "-s", "R58M", "shell", "getprop ro.serialno"]
        );
    }

    #[test]
    fn test_generate_is_deterministic() {
        let values = placeholders([("ADB", "adb"), ("ADB_SERIAL", "abc")]);
        let template = adb_template();
        assert_eq!(
            template.generate(&values).unwrap(),
            template.generate(&values).unwrap()
        );
    }

    #[test]
    fn test_generate_fails_on_any_missing_placeholder() {
        let values = placeholders([("ADB", "adb")]);
        let err = adb_template().generate(&values).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::UndefinedPlaceholder { ref name, .. } if name == "ADB_SERIAL"
        ));
    }

    #[test]
    fn test_extra_placeholders_are_ignored() {
        let values = placeholders([("ADB", "adb"), ("ADB_SERIAL", "x"), ("UNUSED", "y")]);
        assert!(adb_template().generate(&values).is_ok());
    }

    #[test]
    fn test_parse_command_respects_quotes() {
        let template =
            ArgvTemplate::parse_command("{ADB} -s {ADB_SERIAL} shell 'wm size'").unwrap();
        assert_eq!(
            template.tokens(),
            &["{ADB}", "-s", "{ADB_SERIAL}", "shell", "wm size"]
        );
    }

    #[test]
    fn test_parse_command_rejects_unmatched_quote() {
        let err = ArgvTemplate::parse_command("adb shell \"wm size").unwrap_err();
        assert!(err.contains("failed to parse command"));
    }

    #[test]
    fn test_deserialize_from_array_or_string() {
        let from_array: ArgvTemplate = serde_json::from_str(r#"["adb", "devices"]"#).unwrap();
        let from_string: ArgvTemplate = serde_json::from_str(r#""adb devices""#).unwrap();
        assert_eq!(from_array, from_string);
    }

    #[test]
    fn test_serializes_as_token_array() {
        let json = serde_json::to_string(&ArgvTemplate::new(["adb", "wm size"])).unwrap();
        assert_eq!(json, r#"["adb","wm size"]"#);
    }

    #[test]
    fn test_display_quotes_tokens() {
        let template = ArgvTemplate::new(["adb", "shell", "wm size"]);
        assert_eq!(template.to_string(), "adb shell 'wm size'");
    }
}
