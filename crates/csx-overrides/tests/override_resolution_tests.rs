//! End-to-end override binding through `resolve_all`.

use csx_common::Span;
use csx_symbols::{
    CustomModifier, MemberModifiers, MemberSignature, ParamInfo, SymbolTable, TypeDefId,
    TypeDefKind, TypeRef,
};
use csx_overrides::{ResolutionOutcome, override_equivalent, resolve_all};

#[test]
fn test_basic_override_emits_virtual_reused_slot() {
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let base = table.add_type(asm, "Base", TypeDefKind::Class);
    let derived = table.add_type(asm, "Derived", TypeDefKind::Class);
    table.set_base(derived, base, vec![]);
    let m = table.interner.intern("M");
    let int = TypeRef::named(table.well_known.int32);
    let void = TypeRef::named(table.well_known.void_type);
    let base_m = table.add_member(
        base,
        MemberSignature::method(m, vec![ParamInfo::new(int.clone())], void.clone()),
        MemberModifiers::VIRTUAL,
        Span::new(10, 20),
    );
    let derived_m = table.add_member(
        derived,
        MemberSignature::method(m, vec![ParamInfo::new(int)], void),
        MemberModifiers::OVERRIDE,
        Span::new(80, 20),
    );

    let set = resolve_all(&table);
    assert!(set.diagnostics.is_empty());
    assert_eq!(
        set.outcome(derived_m),
        Some(&ResolutionOutcome::Override { base: base_m })
    );
    let attrs = set.attributes(derived_m).expect("resolved");
    assert!(attrs.is_virtual);
    assert!(!attrs.is_new_slot);
    assert!(!attrs.is_final);
    assert!(!attrs.is_strict);
    assert!(attrs.hide_by_sig);
}

#[test]
fn test_overriding_to_string_from_object() {
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let widget = table.add_type(asm, "Widget", TypeDefKind::Class);
    let name = table.interner.intern("ToString");
    let string = TypeRef::named(table.well_known.string);
    let widget_to_string = table.add_member(
        widget,
        MemberSignature::method(name, vec![], string),
        MemberModifiers::OVERRIDE,
        Span::empty(),
    );

    let set = resolve_all(&table);
    assert!(set.diagnostics.is_empty());
    assert_eq!(
        set.outcome(widget_to_string),
        Some(&ResolutionOutcome::Override {
            base: table.well_known.object_to_string
        })
    );
}

#[test]
fn test_every_override_outcome_satisfies_the_matcher() {
    // For all members resolved Override(base): the matcher must agree the
    // signatures are equivalent and the base must be virtual or abstract.
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let base = table.add_type(asm, "Base", TypeDefKind::Class);
    table.set_arity(base, 1);
    let derived = table.add_type(asm, "Derived", TypeDefKind::Class);
    let int = TypeRef::named(table.well_known.int32);
    table.set_base(derived, base, vec![int.clone()]);
    let void = TypeRef::named(table.well_known.void_type);

    let m = table.interner.intern("M");
    table.add_member(
        base,
        MemberSignature::method(m, vec![ParamInfo::new(TypeRef::type_param(0))], void.clone()),
        MemberModifiers::VIRTUAL,
        Span::empty(),
    );
    table.add_member(
        derived,
        MemberSignature::method(m, vec![ParamInfo::new(int.clone())], void.clone()),
        MemberModifiers::OVERRIDE,
        Span::empty(),
    );
    let n = table.interner.intern("N");
    table.add_member(
        base,
        MemberSignature::method(n, vec![], void.clone()),
        MemberModifiers::VIRTUAL,
        Span::empty(),
    );
    table.add_member(
        derived,
        MemberSignature::method(n, vec![], void),
        MemberModifiers::OVERRIDE,
        Span::empty(),
    );

    let set = resolve_all(&table);
    let mut checked = 0;
    for resolution in set.iter() {
        if let ResolutionOutcome::Override { base } = &resolution.outcome {
            let derived_def = table.member(resolution.member);
            let base_def = table.member(*base);
            assert!(base_def.is_virtual_or_abstract());
            // rewrite the base signature into the derived type's terms
            // before asking the matcher
            let chain = table.base_chain(derived_def.declaring_type);
            let substitution = chain
                .iter()
                .find(|(ty, _)| *ty == base_def.declaring_type)
                .map(|(_, s)| s.clone())
                .unwrap_or_default();
            assert!(override_equivalent(
                &derived_def.signature,
                &base_def.signature.substitute(&substitution)
            ));
            checked += 1;
        }
    }
    assert_eq!(checked, 2);
}

#[test]
fn test_emitted_modifiers_elect_fewest_in_hierarchy() {
    let mut table = SymbolTable::new();
    let asm = table.add_assembly("app");
    let marker = |n: u32| CustomModifier {
        required: false,
        modifier: TypeDefId(n),
    };

    let a = table.add_type(asm, "A", TypeDefKind::Class);
    let b = table.add_type(asm, "B", TypeDefKind::Class);
    table.set_base(b, a, vec![]);
    let c = table.add_type(asm, "C", TypeDefKind::Class);
    table.set_base(c, b, vec![]);
    let m = table.interner.intern("M");
    let int = TypeRef::named(table.well_known.int32);
    let void = TypeRef::named(table.well_known.void_type);

    // A carries two custom modifiers on the parameter, B's override
    // carries one, C's override carries none of its own.
    table.add_member(
        a,
        MemberSignature::method(
            m,
            vec![ParamInfo::new(int.clone()).with_modifiers([marker(50), marker(51)])],
            void.clone(),
        ),
        MemberModifiers::VIRTUAL,
        Span::empty(),
    );
    let b_m = table.add_member(
        b,
        MemberSignature::method(
            m,
            vec![ParamInfo::new(int.clone()).with_modifiers([marker(50)])],
            void.clone(),
        ),
        MemberModifiers::OVERRIDE,
        Span::empty(),
    );
    let c_m = table.add_member(
        c,
        MemberSignature::method(m, vec![ParamInfo::new(int)], void),
        MemberModifiers::OVERRIDE,
        Span::empty(),
    );

    let set = resolve_all(&table);
    assert!(set.diagnostics.is_empty());

    // B sees only A's signature in its slot: two modifiers.
    let b_attrs = set.attributes(b_m).expect("resolved");
    assert_eq!(b_attrs.emitted_modifiers.param_modifiers[0].len(), 2);

    // C sees both A (two) and B (one): the fewest-modifiers set wins.
    let c_attrs = set.attributes(c_m).expect("resolved");
    assert_eq!(c_attrs.emitted_modifiers.param_modifiers[0].len(), 1);
}
