//! Mapping from resolution outcomes to diagnostics.
//!
//! Pure construction: every function builds a `Diagnostic` from member
//! handles and the message tables; nothing here inspects or changes
//! resolution state. Diagnostics attach to the declaration site and never
//! abort resolution of sibling members.

use csx_common::diagnostics::{Diagnostic, diagnostic_codes as codes, diagnostic_messages};
use csx_common::format_message;
use csx_symbols::{AccessorKind, MemberId, SymbolTable, TypeDefId};

pub struct DiagnosticEmitter<'a> {
    table: &'a SymbolTable,
}

impl<'a> DiagnosticEmitter<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    fn member_diagnostic(
        &self,
        member: MemberId,
        template: &'static str,
        code: u32,
        is_error: bool,
        args: &[&str],
    ) -> Diagnostic {
        let m = self.table.member(member);
        let file = self.table.member_file(member);
        let text = format_message(template, args);
        if is_error {
            Diagnostic::error(file, m.span.start, m.span.length, text, code)
        } else {
            Diagnostic::warning(file, m.span.start, m.span.length, text, code)
        }
    }

    pub fn hides_use_new(&self, member: MemberId, hidden: MemberId) -> Diagnostic {
        let args = [
            self.table.display_member(member),
            self.table.display_member(hidden),
        ];
        let hidden_def = self.table.member(hidden);
        self.member_diagnostic(
            member,
            diagnostic_messages::HIDES_INHERITED_MEMBER_USE_NEW.message,
            codes::HIDES_INHERITED_MEMBER_USE_NEW,
            false,
            &[&args[0], &args[1]],
        )
        .with_related(
            self.table.member_file(hidden),
            hidden_def.span.start,
            hidden_def.span.length,
            "hidden member declared here",
        )
    }

    pub fn hides_add_override_or_new(&self, member: MemberId, hidden: MemberId) -> Diagnostic {
        let args = [
            self.table.display_member(member),
            self.table.display_member(hidden),
        ];
        self.member_diagnostic(
            member,
            diagnostic_messages::HIDES_INHERITED_MEMBER_ADD_OVERRIDE_OR_NEW.message,
            codes::HIDES_INHERITED_MEMBER_ADD_OVERRIDE_OR_NEW,
            false,
            &[&args[0], &args[1]],
        )
    }

    pub fn new_not_required(&self, member: MemberId) -> Diagnostic {
        let display = self.table.display_member(member);
        self.member_diagnostic(
            member,
            diagnostic_messages::NEW_NOT_REQUIRED.message,
            codes::NEW_NOT_REQUIRED,
            false,
            &[&display],
        )
    }

    pub fn no_suitable_member(&self, member: MemberId) -> Diagnostic {
        let display = self.table.display_member(member);
        self.member_diagnostic(
            member,
            diagnostic_messages::NO_SUITABLE_METHOD_TO_OVERRIDE.message,
            codes::NO_SUITABLE_METHOD_TO_OVERRIDE,
            true,
            &[&display],
        )
    }

    pub fn no_suitable_accessor(&self, container: MemberId, kind: AccessorKind) -> Diagnostic {
        let display = self.table.display_accessor(container, kind);
        self.member_diagnostic(
            container,
            diagnostic_messages::NO_SUITABLE_METHOD_TO_OVERRIDE.message,
            codes::NO_SUITABLE_METHOD_TO_OVERRIDE,
            true,
            &[&display],
        )
    }

    pub fn cannot_override_non_virtual(&self, member: MemberId, base: MemberId) -> Diagnostic {
        let args = [
            self.table.display_member(member),
            self.table.display_member(base),
        ];
        self.member_diagnostic(
            member,
            diagnostic_messages::CANNOT_OVERRIDE_NON_VIRTUAL.message,
            codes::CANNOT_OVERRIDE_NON_VIRTUAL,
            true,
            &[&args[0], &args[1]],
        )
    }

    pub fn cannot_override_sealed(&self, member: MemberId, base: MemberId) -> Diagnostic {
        let args = [
            self.table.display_member(member),
            self.table.display_member(base),
        ];
        self.member_diagnostic(
            member,
            diagnostic_messages::CANNOT_OVERRIDE_SEALED.message,
            codes::CANNOT_OVERRIDE_SEALED,
            true,
            &[&args[0], &args[1]],
        )
    }

    pub fn return_type_mismatch(&self, member: MemberId, base: MemberId) -> Diagnostic {
        let member_display = self.table.display_member(member);
        let base_return = self
            .table
            .display_type_ref(&self.table.member(base).signature.return_type);
        let base_display = self.table.display_member(base);
        self.member_diagnostic(
            member,
            diagnostic_messages::OVERRIDE_RETURN_TYPE_MISMATCH.message,
            codes::OVERRIDE_RETURN_TYPE_MISMATCH,
            true,
            &[&member_display, &base_return, &base_display],
        )
    }

    pub fn access_mismatch(&self, member: MemberId, base: MemberId) -> Diagnostic {
        let member_display = self.table.display_member(member);
        let base_access = describe_accessibility(self.table.member(base).accessibility());
        let base_display = self.table.display_member(base);
        self.member_diagnostic(
            member,
            diagnostic_messages::CANNOT_CHANGE_ACCESS_ON_OVERRIDE.message,
            codes::CANNOT_CHANGE_ACCESS_ON_OVERRIDE,
            true,
            &[&member_display, base_access, &base_display],
        )
    }

    pub fn accessor_access_mismatch(
        &self,
        container: MemberId,
        kind: AccessorKind,
        base_accessor: MemberId,
    ) -> Diagnostic {
        let member_display = self.table.display_accessor(container, kind);
        let base = self.table.member(base_accessor);
        let base_access = describe_accessibility(base.accessibility());
        let base_display = match base.container {
            Some((base_container, base_kind)) => {
                self.table.display_accessor(base_container, base_kind)
            }
            None => self.table.display_member(base_accessor),
        };
        self.member_diagnostic(
            container,
            diagnostic_messages::CANNOT_CHANGE_ACCESS_ON_OVERRIDE.message,
            codes::CANNOT_CHANGE_ACCESS_ON_OVERRIDE,
            true,
            &[&member_display, base_access, &base_display],
        )
    }

    pub fn unimplemented_abstract_member(
        &self,
        ty: TypeDefId,
        abstract_member: MemberId,
    ) -> Diagnostic {
        let type_def = self.table.type_def(ty);
        let type_name = self.table.interner.resolve(type_def.name).to_string();
        let member_display = self.table.display_member(abstract_member);
        let file = self.table.interner.resolve(type_def.file);
        let text = format_message(
            diagnostic_messages::UNIMPLEMENTED_ABSTRACT_MEMBER.message,
            &[&type_name, &member_display],
        );
        Diagnostic::error(file, 0, 0, text, codes::UNIMPLEMENTED_ABSTRACT_MEMBER)
    }

    pub fn equals_without_get_hash_code(&self, ty: TypeDefId, equals: MemberId) -> Diagnostic {
        let type_def = self.table.type_def(ty);
        let type_name = self.table.interner.resolve(type_def.name).to_string();
        self.member_diagnostic(
            equals,
            diagnostic_messages::EQUALS_WITHOUT_GET_HASH_CODE.message,
            codes::EQUALS_WITHOUT_GET_HASH_CODE,
            false,
            &[&type_name],
        )
    }

    pub fn runtime_override_ambiguity(&self, member: MemberId, base: MemberId) -> Diagnostic {
        let args = [
            self.table.display_member(member),
            self.table.display_member(base),
        ];
        self.member_diagnostic(
            member,
            diagnostic_messages::RUNTIME_OVERRIDE_AMBIGUITY.message,
            codes::RUNTIME_OVERRIDE_AMBIGUITY,
            false,
            &[&args[0], &args[1]],
        )
    }
}

fn describe_accessibility(accessibility: csx_symbols::Accessibility) -> &'static str {
    use csx_symbols::Accessibility::*;
    match accessibility {
        Private => "private",
        PrivateProtected => "private protected",
        Internal => "internal",
        Protected => "protected",
        ProtectedInternal => "protected internal",
        Public => "public",
    }
}
