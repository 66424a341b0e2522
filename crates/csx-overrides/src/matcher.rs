//! Signature matching: the structural relation deciding slot identity.
//!
//! Two signatures are override-equivalent iff kind, name, generic arity,
//! and parameter count agree, every parameter matches in type and passing
//! direction, and the return types match exactly. The caller substitutes
//! the enclosing type's arguments before matching; a member's own type
//! parameters are positional, so renaming them can never change the
//! answer. `params`-ness and custom modifiers are never part of identity.

use csx_symbols::{MemberKind, MemberSignature};

/// Parameter-list equivalence: everything except the return type. This is
/// the relation that selects an override target; a return mismatch on an
/// otherwise-matched pair is its own error, not a failed lookup.
pub fn params_equivalent(a: &MemberSignature, b: &MemberSignature) -> bool {
    if a.kind != b.kind || a.name != b.name || a.generic_arity != b.generic_arity {
        return false;
    }
    if a.params.len() != b.params.len() {
        return false;
    }
    a.params
        .iter()
        .zip(&b.params)
        .all(|(x, y)| x.ref_kind == y.ref_kind && x.ty.matches(&y.ty))
}

/// Exact return-type match; no covariance.
pub fn returns_match(a: &MemberSignature, b: &MemberSignature) -> bool {
    a.return_type.matches(&b.return_type)
}

/// Full override-equivalence.
pub fn override_equivalent(a: &MemberSignature, b: &MemberSignature) -> bool {
    params_equivalent(a, b) && returns_match(a, b)
}

/// Runtime-identical but not language-identical: the signatures agree on
/// everything except that at least one parameter position differs only in
/// by-ref direction (`ref` vs `out` vs `in`). The binary format passes all
/// three the same way, so such a pair may collide in the vtable.
pub fn runtime_collision(a: &MemberSignature, b: &MemberSignature) -> bool {
    if a.kind != b.kind || a.name != b.name || a.generic_arity != b.generic_arity {
        return false;
    }
    if a.params.len() != b.params.len() {
        return false;
    }
    if !returns_match(a, b) {
        return false;
    }
    let mut direction_only_diff = false;
    for (x, y) in a.params.iter().zip(&b.params) {
        if !x.ty.matches(&y.ty) {
            return false;
        }
        if x.ref_kind != y.ref_kind {
            if x.ref_kind.is_by_ref() && y.ref_kind.is_by_ref() {
                direction_only_diff = true;
            } else {
                return false;
            }
        }
    }
    direction_only_diff
}

/// Whether a derived member of this kind hides a base member of that kind
/// by name alone. Methods (and indexers, which carry parameter lists) hide
/// by signature; every other kind is non-overloadable and occludes the
/// whole name.
pub fn hides_by_name_alone(derived: &MemberSignature, base: &MemberSignature) -> bool {
    let derived_overloadable =
        derived.kind == MemberKind::Method || !derived.params.is_empty();
    let base_overloadable = base.kind == MemberKind::Method || !base.params.is_empty();
    !derived_overloadable || !base_overloadable || derived.kind != base.kind
}

/// Whether a derived member hides a specific base candidate.
///
/// - overloadable vs overloadable of the same kind: parameter lists must
///   match (return types deliberately excluded, so a wrong-return
///   same-params method still hides and the error surfaces on the
///   `override` path instead)
/// - anything else: name alone suffices
pub fn hides(derived: &MemberSignature, base: &MemberSignature) -> bool {
    if hides_by_name_alone(derived, base) {
        return true;
    }
    params_equivalent(derived, base)
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
