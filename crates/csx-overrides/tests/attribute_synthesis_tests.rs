//! Binary attribute synthesis: new-slot, virtual, final, strict.

use csx_common::Span;
use csx_symbols::{
    Accessibility, MemberModifiers, MemberSignature, SymbolTable, TypeDefKind, TypeRef,
};
use csx_overrides::resolve_all;

fn single_method_table(
    modifiers: MemberModifiers,
    accessibility: Accessibility,
) -> (SymbolTable, csx_symbols::MemberId) {
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let ty = table.add_type(asm, "Holder", TypeDefKind::Class);
    let name = table.interner.intern("M");
    let void = TypeRef::named(table.well_known.void_type);
    let member = table.add_member(
        ty,
        MemberSignature::method(name, vec![], void).with_accessibility(accessibility),
        modifiers,
        Span::empty(),
    );
    (table, member)
}

#[test]
fn test_plain_virtual_starts_a_new_slot() {
    let (table, member) = single_method_table(MemberModifiers::VIRTUAL, Accessibility::Public);
    let set = resolve_all(&table);
    let attrs = set.attributes(member).expect("resolved");
    assert!(attrs.is_virtual);
    assert!(attrs.is_new_slot);
    assert!(!attrs.is_final);
    assert!(!attrs.is_strict);
}

#[test]
fn test_non_virtual_member_has_no_slot() {
    let (table, member) = single_method_table(MemberModifiers::empty(), Accessibility::Public);
    let set = resolve_all(&table);
    let attrs = set.attributes(member).expect("resolved");
    assert!(!attrs.is_virtual);
    assert!(!attrs.is_new_slot);
    assert!(attrs.hide_by_sig);
}

#[test]
fn test_internal_virtual_is_strict() {
    // An assembly-private contract must not be overridable from outside
    // its assembly even though the vtable mechanism would permit it.
    let (table, member) = single_method_table(MemberModifiers::VIRTUAL, Accessibility::Internal);
    let set = resolve_all(&table);
    let attrs = set.attributes(member).expect("resolved");
    assert!(attrs.is_virtual);
    assert!(attrs.is_strict);
}

#[test]
fn test_protected_internal_virtual_is_not_strict() {
    let (table, member) =
        single_method_table(MemberModifiers::VIRTUAL, Accessibility::ProtectedInternal);
    let set = resolve_all(&table);
    assert!(!set.attributes(member).expect("resolved").is_strict);
}

#[test]
fn test_internal_non_virtual_is_not_strict() {
    let (table, member) = single_method_table(MemberModifiers::empty(), Accessibility::Internal);
    let set = resolve_all(&table);
    assert!(!set.attributes(member).expect("resolved").is_strict);
}

#[test]
fn test_sealed_override_is_final_without_new_slot() {
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let base = table.add_type(asm, "Base", TypeDefKind::Class);
    let derived = table.add_type(asm, "Derived", TypeDefKind::Class);
    table.set_base(derived, base, vec![]);
    let name = table.interner.intern("M");
    let void = TypeRef::named(table.well_known.void_type);
    table.add_member(
        base,
        MemberSignature::method(name, vec![], void.clone()),
        MemberModifiers::VIRTUAL,
        Span::empty(),
    );
    let derived_m = table.add_member(
        derived,
        MemberSignature::method(name, vec![], void),
        MemberModifiers::OVERRIDE | MemberModifiers::SEALED,
        Span::empty(),
    );

    let set = resolve_all(&table);
    assert!(set.diagnostics.is_empty());
    let attrs = set.attributes(derived_m).expect("resolved");
    assert!(attrs.is_virtual);
    assert!(attrs.is_final);
    assert!(!attrs.is_new_slot);
}

#[test]
fn test_abstract_member_is_virtual_new_slot() {
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let ty = table.add_type(asm, "Base", TypeDefKind::Class);
    table.set_abstract(ty, true);
    let name = table.interner.intern("M");
    let void = TypeRef::named(table.well_known.void_type);
    let member = table.add_member(
        ty,
        MemberSignature::method(name, vec![], void),
        MemberModifiers::ABSTRACT,
        Span::empty(),
    );

    let set = resolve_all(&table);
    assert!(set.diagnostics.is_empty());
    let attrs = set.attributes(member).expect("resolved");
    assert!(attrs.is_virtual);
    assert!(attrs.is_new_slot);
    assert!(!attrs.is_final);
}

#[test]
fn test_error_outcome_defaults_attributes() {
    // A member whose signature references an unresolvable type keeps the
    // default attribute record; body emission is blocked anyway.
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let ty = table.add_type(asm, "Holder", TypeDefKind::Class);
    let name = table.interner.intern("M");
    let member = table.add_member(
        ty,
        MemberSignature::method(name, vec![], TypeRef::Error),
        MemberModifiers::VIRTUAL,
        Span::empty(),
    );

    let set = resolve_all(&table);
    let attrs = set.attributes(member).expect("resolved");
    assert!(!attrs.is_virtual);
    assert!(attrs.hide_by_sig);
}
