use super::*;
use crate::outcome::ResolutionOutcome;
use csx_common::Span;
use csx_common::diagnostics::diagnostic_codes as codes;
use csx_symbols::{MemberId, MemberModifiers, MemberSignature, SymbolTable, TypeDefKind, TypeRef};

fn two_level_table() -> (SymbolTable, MemberId, MemberId) {
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let base = table.add_type(asm, "Base", TypeDefKind::Class);
    let derived = table.add_type(asm, "Derived", TypeDefKind::Class);
    table.set_base(derived, base, vec![]);
    let m = table.interner.intern("M");
    let void = TypeRef::named(table.well_known.void_type);
    let base_m = table.add_member(
        base,
        MemberSignature::method(m, vec![], void.clone()),
        MemberModifiers::VIRTUAL,
        Span::empty(),
    );
    let derived_m = table.add_member(
        derived,
        MemberSignature::method(m, vec![], void),
        MemberModifiers::OVERRIDE,
        Span::empty(),
    );
    (table, base_m, derived_m)
}

#[test]
fn test_resolve_all_covers_every_source_member() {
    let (table, base_m, derived_m) = two_level_table();
    let set = resolve_all(&table);

    assert!(set.member(base_m).is_some());
    assert_eq!(
        set.outcome(derived_m),
        Some(&ResolutionOutcome::Override { base: base_m })
    );
    assert!(set.diagnostics.is_empty());
}

#[test]
fn test_metadata_types_are_not_resolved() {
    let (table, _, _) = two_level_table();
    let set = resolve_all(&table);

    // corlib is finalized metadata; object's members carry no resolution
    assert!(set.member(table.well_known.object_equals).is_none());
}

#[test]
fn test_resolution_is_idempotent() {
    let (table, _, derived_m) = two_level_table();
    let first = resolve_all(&table);
    let second = resolve_all(&table);

    assert_eq!(first.diagnostics, second.diagnostics);
    assert_eq!(first.outcome(derived_m), second.outcome(derived_m));
    assert_eq!(first.attributes(derived_m), second.attributes(derived_m));
}

#[test]
fn test_diagnostics_come_out_in_declaration_order() {
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let void = TypeRef::named(table.well_known.void_type);

    // Two unrelated hierarchies, each producing one warning; parallel
    // execution must not perturb the declared order.
    let first = table.add_type(asm, "First", TypeDefKind::Class);
    let second = table.add_type(asm, "Second", TypeDefKind::Class);
    for ty in [first, second] {
        let name = table.interner.intern("Lonely");
        table.add_member(
            ty,
            MemberSignature::method(name, vec![], void.clone()),
            MemberModifiers::NEW,
            Span::empty(),
        );
    }

    let set = resolve_all(&table);
    let new_not_required: Vec<_> = set.diagnostics_with_code(codes::NEW_NOT_REQUIRED).collect();
    assert_eq!(new_not_required.len(), 2);
    assert!(set.diagnostics[0].message_text.contains("First.Lonely"));
    assert!(set.diagnostics[1].message_text.contains("Second.Lonely"));
}

#[test]
fn test_deep_chain_resolves_base_before_derived() {
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let void = TypeRef::named(table.well_known.void_type);
    let m = table.interner.intern("M");

    let mut previous = table.add_type(asm, "C0", TypeDefKind::Class);
    let root_m = table.add_member(
        previous,
        MemberSignature::method(m, vec![], void.clone()),
        MemberModifiers::VIRTUAL,
        Span::empty(),
    );
    let mut last_member = root_m;
    for depth in 1..8 {
        let ty = table.add_type(asm, &format!("C{depth}"), TypeDefKind::Class);
        table.set_base(ty, previous, vec![]);
        last_member = table.add_member(
            ty,
            MemberSignature::method(m, vec![], void.clone()),
            MemberModifiers::OVERRIDE,
            Span::empty(),
        );
        previous = ty;
    }

    let set = resolve_all(&table);
    assert!(set.diagnostics.is_empty());
    // every link in the chain binds its nearest ancestor
    assert_eq!(
        set.outcome(last_member).and_then(|o| o.overridden_base()),
        Some(MemberId(last_member.0 - 1))
    );
}
