//! Diagnostic code and message tables for member override/hiding resolution.

use super::DiagnosticMessage;

pub mod diagnostic_codes {
    /// '{0}' hides inherited member '{1}'. Use the new keyword if hiding
    /// was intended.
    pub const HIDES_INHERITED_MEMBER_USE_NEW: u32 = 108;
    /// The member '{0}' does not hide an accessible member. The new keyword
    /// is not required.
    pub const NEW_NOT_REQUIRED: u32 = 109;
    /// '{0}' hides inherited member '{1}'. To make the current member
    /// override that implementation, add the override keyword. Otherwise
    /// add the new keyword.
    pub const HIDES_INHERITED_MEMBER_ADD_OVERRIDE_OR_NEW: u32 = 114;
    /// '{0}': no suitable member found to override.
    pub const NO_SUITABLE_METHOD_TO_OVERRIDE: u32 = 115;
    /// '{0}': cannot override inherited member '{1}' because it is sealed.
    pub const CANNOT_OVERRIDE_SEALED: u32 = 239;
    /// '{0}': cannot override inherited member '{1}' because it is not
    /// marked virtual, abstract, or override.
    pub const CANNOT_OVERRIDE_NON_VIRTUAL: u32 = 506;
    /// '{0}': cannot change access modifiers when overriding '{1}'
    /// inherited member '{2}'.
    pub const CANNOT_CHANGE_ACCESS_ON_OVERRIDE: u32 = 507;
    /// '{0}': return type must be '{1}' to match overridden member '{2}'.
    pub const OVERRIDE_RETURN_TYPE_MISMATCH: u32 = 508;
    /// '{0}' does not implement inherited abstract member '{1}'.
    pub const UNIMPLEMENTED_ABSTRACT_MEMBER: u32 = 534;
    /// '{0}' overrides Object.Equals(object o) but does not override
    /// Object.GetHashCode().
    pub const EQUALS_WITHOUT_GET_HASH_CODE: u32 = 659;
    /// Member '{0}' overrides '{1}'. There are multiple override candidates
    /// at run-time. It is implementation dependent which method will be
    /// called.
    pub const RUNTIME_OVERRIDE_AMBIGUITY: u32 = 1957;
}

pub mod diagnostic_messages {
    use super::super::{DiagnosticCategory, DiagnosticMessage};
    use super::diagnostic_codes as codes;

    pub const HIDES_INHERITED_MEMBER_USE_NEW: DiagnosticMessage = DiagnosticMessage {
        code: codes::HIDES_INHERITED_MEMBER_USE_NEW,
        category: DiagnosticCategory::Warning,
        message: "'{0}' hides inherited member '{1}'. Use the new keyword if hiding was intended.",
    };
    pub const NEW_NOT_REQUIRED: DiagnosticMessage = DiagnosticMessage {
        code: codes::NEW_NOT_REQUIRED,
        category: DiagnosticCategory::Warning,
        message: "The member '{0}' does not hide an accessible member. The new keyword is not required.",
    };
    pub const HIDES_INHERITED_MEMBER_ADD_OVERRIDE_OR_NEW: DiagnosticMessage = DiagnosticMessage {
        code: codes::HIDES_INHERITED_MEMBER_ADD_OVERRIDE_OR_NEW,
        category: DiagnosticCategory::Warning,
        message: "'{0}' hides inherited member '{1}'. To make the current member override that implementation, add the override keyword. Otherwise add the new keyword.",
    };
    pub const NO_SUITABLE_METHOD_TO_OVERRIDE: DiagnosticMessage = DiagnosticMessage {
        code: codes::NO_SUITABLE_METHOD_TO_OVERRIDE,
        category: DiagnosticCategory::Error,
        message: "'{0}': no suitable member found to override.",
    };
    pub const CANNOT_OVERRIDE_SEALED: DiagnosticMessage = DiagnosticMessage {
        code: codes::CANNOT_OVERRIDE_SEALED,
        category: DiagnosticCategory::Error,
        message: "'{0}': cannot override inherited member '{1}' because it is sealed.",
    };
    pub const CANNOT_OVERRIDE_NON_VIRTUAL: DiagnosticMessage = DiagnosticMessage {
        code: codes::CANNOT_OVERRIDE_NON_VIRTUAL,
        category: DiagnosticCategory::Error,
        message: "'{0}': cannot override inherited member '{1}' because it is not marked virtual, abstract, or override.",
    };
    pub const CANNOT_CHANGE_ACCESS_ON_OVERRIDE: DiagnosticMessage = DiagnosticMessage {
        code: codes::CANNOT_CHANGE_ACCESS_ON_OVERRIDE,
        category: DiagnosticCategory::Error,
        message: "'{0}': cannot change access modifiers when overriding '{1}' inherited member '{2}'.",
    };
    pub const OVERRIDE_RETURN_TYPE_MISMATCH: DiagnosticMessage = DiagnosticMessage {
        code: codes::OVERRIDE_RETURN_TYPE_MISMATCH,
        category: DiagnosticCategory::Error,
        message: "'{0}': return type must be '{1}' to match overridden member '{2}'.",
    };
    pub const UNIMPLEMENTED_ABSTRACT_MEMBER: DiagnosticMessage = DiagnosticMessage {
        code: codes::UNIMPLEMENTED_ABSTRACT_MEMBER,
        category: DiagnosticCategory::Error,
        message: "'{0}' does not implement inherited abstract member '{1}'.",
    };
    pub const EQUALS_WITHOUT_GET_HASH_CODE: DiagnosticMessage = DiagnosticMessage {
        code: codes::EQUALS_WITHOUT_GET_HASH_CODE,
        category: DiagnosticCategory::Warning,
        message: "'{0}' overrides Object.Equals(object o) but does not override Object.GetHashCode().",
    };
    pub const RUNTIME_OVERRIDE_AMBIGUITY: DiagnosticMessage = DiagnosticMessage {
        code: codes::RUNTIME_OVERRIDE_AMBIGUITY,
        category: DiagnosticCategory::Warning,
        message: "Member '{0}' overrides '{1}'. There are multiple override candidates at run-time. It is implementation dependent which method will be called.",
    };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::HIDES_INHERITED_MEMBER_USE_NEW,
    diagnostic_messages::NEW_NOT_REQUIRED,
    diagnostic_messages::HIDES_INHERITED_MEMBER_ADD_OVERRIDE_OR_NEW,
    diagnostic_messages::NO_SUITABLE_METHOD_TO_OVERRIDE,
    diagnostic_messages::CANNOT_OVERRIDE_SEALED,
    diagnostic_messages::CANNOT_OVERRIDE_NON_VIRTUAL,
    diagnostic_messages::CANNOT_CHANGE_ACCESS_ON_OVERRIDE,
    diagnostic_messages::OVERRIDE_RETURN_TYPE_MISMATCH,
    diagnostic_messages::UNIMPLEMENTED_ABSTRACT_MEMBER,
    diagnostic_messages::EQUALS_WITHOUT_GET_HASH_CODE,
    diagnostic_messages::RUNTIME_OVERRIDE_AMBIGUITY,
];
