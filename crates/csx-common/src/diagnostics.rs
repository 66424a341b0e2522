//! Diagnostic types and message lookup for the member resolver.
//!
//! Message data lives in `diagnostics/data.rs`. Codes follow the compiler's
//! historical numbering so downstream tooling keyed on the numbers keeps
//! working.

use serde::Serialize;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// A diagnostic message template: code, category, and text with `{n}`
/// placeholders.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Related information for a diagnostic (e.g. the hidden base member's
/// declaration site).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticRelatedInformation {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

/// A resolution diagnostic with optional related information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            message_text: message.into(),
            code,
            file: file.into(),
            start,
            length,
            related_information: Vec::new(),
        }
    }

    pub fn warning(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            message_text: message.into(),
            code,
            file: file.into(),
            start,
            length,
            related_information: Vec::new(),
        }
    }

    pub fn with_related(
        mut self,
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
    ) -> Self {
        self.related_information.push(DiagnosticRelatedInformation {
            category: DiagnosticCategory::Message,
            code: 0,
            file: file.into(),
            start,
            length,
            message_text: message.into(),
        });
        self
    }
}

/// Look up the message template for a diagnostic code.
pub fn get_message_template(code: u32) -> Option<&'static str> {
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

/// Substitute `{0}`, `{1}`, ... placeholders with the given arguments.
pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_substitution() {
        let template = get_message_template(diagnostic_codes::HIDES_INHERITED_MEMBER_USE_NEW)
            .expect("code 108 should be registered");
        let text = format_message(template, &["Derived.M()", "Base.M()"]);
        assert!(text.contains("Derived.M()"));
        assert!(text.contains("Base.M()"));
        assert!(!text.contains("{0}"));
    }

    #[test]
    fn test_all_codes_have_templates() {
        use diagnostic_codes::*;
        for code in [
            HIDES_INHERITED_MEMBER_USE_NEW,
            NEW_NOT_REQUIRED,
            HIDES_INHERITED_MEMBER_ADD_OVERRIDE_OR_NEW,
            NO_SUITABLE_METHOD_TO_OVERRIDE,
            CANNOT_OVERRIDE_SEALED,
            CANNOT_OVERRIDE_NON_VIRTUAL,
            CANNOT_CHANGE_ACCESS_ON_OVERRIDE,
            OVERRIDE_RETURN_TYPE_MISMATCH,
            UNIMPLEMENTED_ABSTRACT_MEMBER,
            EQUALS_WITHOUT_GET_HASH_CODE,
            RUNTIME_OVERRIDE_AMBIGUITY,
        ] {
            assert!(
                get_message_template(code).is_some(),
                "missing template for code {code}"
            );
        }
    }
}
