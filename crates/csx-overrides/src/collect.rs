//! Candidate collection along the base-type chain.
//!
//! Two different walks share one pass:
//!
//! - **Hiding** stops at the first base type offering *any* accessible
//!   same-named member, of any kind. Inaccessible members never occlude;
//!   the walk continues past them, which is why a member can resurface
//!   through an inaccessible intermediate declaration.
//! - **Override** search continues through the entire chain, collecting
//!   every accessible same-named member (virtual or not; the engine needs
//!   the non-virtual ones to distinguish "not virtual" from "not found").

use csx_symbols::{
    MemberId, MemberSignature, SymbolTable, TypeDefId, is_accessible_for_inheritance,
};
use csx_common::Atom;

/// One inherited member as seen from the resolving type: its signature has
/// already been rewritten through the composed hierarchy-edge substitution.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub declaring_type: TypeDefId,
    pub member: MemberId,
    pub signature: MemberSignature,
    pub is_virtual_or_abstract: bool,
    pub is_sealed: bool,
}

/// Candidates for one member name, nearest-base-first.
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    /// Accessible members at the first occluding base type.
    pub hiding: Vec<Candidate>,
    /// Accessible members across the whole chain.
    pub chain: Vec<Candidate>,
}

pub struct CandidateCollector<'a> {
    table: &'a SymbolTable,
}

impl<'a> CandidateCollector<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    /// Gather candidates for a member named `name` declared in `viewer`.
    pub fn collect(&self, viewer: TypeDefId, name: Atom) -> CandidateSet {
        let viewer_assembly = self.table.type_def(viewer).assembly;
        let mut set = CandidateSet::default();
        let mut occluded = false;

        for (base_ty, substitution) in self.table.base_chain(viewer) {
            let base_assembly = self.table.type_def(base_ty).assembly;
            let mut found_any_here = false;

            for &member_id in self.table.members_of(base_ty) {
                let member = self.table.member(member_id);
                if member.name() != name {
                    continue;
                }
                if !is_accessible_for_inheritance(
                    self.table,
                    member.accessibility(),
                    base_assembly,
                    viewer_assembly,
                ) {
                    // Skipped, not occluding: the hiding walk continues to
                    // further ancestors.
                    continue;
                }
                found_any_here = true;
                let candidate = Candidate {
                    declaring_type: base_ty,
                    member: member_id,
                    signature: member.signature.substitute(&substitution),
                    is_virtual_or_abstract: member.is_virtual_or_abstract(),
                    is_sealed: member.is_sealed_member(),
                };
                if !occluded {
                    set.hiding.push(candidate.clone());
                }
                set.chain.push(candidate);
            }

            if found_any_here {
                occluded = true;
            }
        }

        tracing::trace!(
            "collected candidates for {}: {} hiding, {} in chain",
            self.table.interner.resolve(name),
            set.hiding.len(),
            set.chain.len()
        );
        set
    }

    /// Same-named members in the chain that are *inaccessible* from the
    /// viewer but virtual and signature-matched at the binary level. Used
    /// for the documented cross-assembly divergence: such a member shares
    /// a vtable slot with the viewer's declaration even though the
    /// language records no relationship.
    pub fn inaccessible_binary_matches(
        &self,
        viewer: TypeDefId,
        signature: &MemberSignature,
    ) -> Vec<MemberId> {
        let viewer_assembly = self.table.type_def(viewer).assembly;
        let mut matches = Vec::new();
        for (base_ty, substitution) in self.table.base_chain(viewer) {
            let base_assembly = self.table.type_def(base_ty).assembly;
            for &member_id in self.table.members_of(base_ty) {
                let member = self.table.member(member_id);
                if member.name() != signature.name || !member.is_virtual_or_abstract() {
                    continue;
                }
                if is_accessible_for_inheritance(
                    self.table,
                    member.accessibility(),
                    base_assembly,
                    viewer_assembly,
                ) {
                    continue;
                }
                let substituted = member.signature.substitute(&substitution);
                if crate::matcher::override_equivalent(signature, &substituted) {
                    matches.push(member_id);
                }
            }
        }
        matches
    }
}
