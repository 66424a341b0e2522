//! Cross-assembly accessibility as pure functions.
//!
//! Results depend only on (declaring assembly, accessibility, consuming
//! assembly), never on mutable state, so they are reproducible and safe to
//! call from parallel resolution.

use crate::ids::AssemblyId;
use crate::signature::Accessibility;
use crate::table::SymbolTable;

/// Whether `viewer` can see internals of `owner` (same assembly or a
/// declared friend assembly).
pub fn internals_visible_to(table: &SymbolTable, owner: AssemblyId, viewer: AssemblyId) -> bool {
    owner == viewer || table.assembly(owner).friends.contains(&viewer)
}

/// Whether a base-type member with the given accessibility is visible to a
/// derived type declared in `viewer`. The caller is always a derived type,
/// so `protected` is visible by construction; the assembly question only
/// arises for the internal-flavored accessibilities.
pub fn is_accessible_for_inheritance(
    table: &SymbolTable,
    accessibility: Accessibility,
    declaring_assembly: AssemblyId,
    viewer: AssemblyId,
) -> bool {
    match accessibility {
        Accessibility::Public | Accessibility::Protected | Accessibility::ProtectedInternal => true,
        Accessibility::Internal | Accessibility::PrivateProtected => {
            internals_visible_to(table, declaring_assembly, viewer)
        }
        Accessibility::Private => false,
    }
}

/// Whether an override's declared accessibility is an exact match for the
/// base member's, given the assemblies involved.
///
/// The one permitted divergence: a `protected internal` member overridden
/// from an assembly that cannot see the internal half must be declared
/// `protected`, since the override cannot widen visibility it cannot name.
pub fn accessibility_matches_override(
    table: &SymbolTable,
    base: Accessibility,
    base_assembly: AssemblyId,
    derived: Accessibility,
    derived_assembly: AssemblyId,
) -> bool {
    if base == Accessibility::ProtectedInternal
        && !internals_visible_to(table, base_assembly, derived_assembly)
    {
        return derived == Accessibility::Protected;
    }
    base == derived
}

/// Whether a virtual member with this accessibility is an assembly-private
/// contract. Such members must not be overridable from outside their
/// assembly even though the vtable slot mechanism would permit it; the
/// synthesizer emits the strict attribute for them.
pub fn is_assembly_private_contract(accessibility: Accessibility) -> bool {
    accessibility == Accessibility::Internal
}
