//! Binary attribute synthesis.
//!
//! Computes the flags the metadata emitter needs from a member's declared
//! modifiers and resolution outcome, elects the emitted custom-modifier
//! set, and synthesizes the implicit final accessor a `sealed override`
//! property/event needs to fully close its slot.

use crate::collect::CandidateSet;
use crate::matcher::params_equivalent;
use crate::outcome::{EmittedModifiers, MemberAttributes, ResolutionOutcome, SynthesizedAccessor};
use csx_symbols::{
    AccessorKind, MemberDef, MemberId, MemberSignature, SymbolTable, is_accessible_for_inheritance,
    is_assembly_private_contract,
};

pub struct AttributeSynthesizer<'a> {
    table: &'a SymbolTable,
}

impl<'a> AttributeSynthesizer<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    /// Flags for a declared member.
    pub fn member_attributes(
        &self,
        member: &MemberDef,
        outcome: &ResolutionOutcome,
        candidates: &CandidateSet,
    ) -> MemberAttributes {
        let is_virtual = member.modifiers.is_virtual_or_abstract();
        // An override reuses its slot; everything else virtual starts one,
        // including a `new virtual` hide.
        let is_new_slot = is_virtual && !outcome.is_override();
        let is_final = is_virtual && member.modifiers.is_sealed();
        let is_strict = is_virtual && is_assembly_private_contract(member.accessibility());
        let emitted_modifiers = self.elect_modifiers(member, outcome, candidates);
        MemberAttributes {
            is_new_slot,
            is_virtual,
            is_final,
            is_strict,
            hide_by_sig: true,
            emitted_modifiers,
        }
    }

    /// Flags for a property/event accessor. Virtual-ness and sealing come
    /// from the container; strictness follows the accessor's own declared
    /// accessibility, which may differ from the container's.
    pub fn accessor_attributes(
        &self,
        container: &MemberDef,
        accessor: &MemberDef,
        outcome: &ResolutionOutcome,
    ) -> MemberAttributes {
        let is_virtual = container.modifiers.is_virtual_or_abstract();
        let is_new_slot = is_virtual && !outcome.is_override();
        let is_final = is_virtual && container.modifiers.is_sealed();
        let is_strict = is_virtual && is_assembly_private_contract(accessor.accessibility());
        MemberAttributes {
            is_new_slot,
            is_virtual,
            is_final,
            is_strict,
            hide_by_sig: true,
            emitted_modifiers: copy_modifiers(&accessor.signature),
        }
    }

    /// Least-custom-modifiers election. Every member sharing the slot is a
    /// candidate carrier; the signature with the fewest total modifiers
    /// wins so the emitted override stays binary-compatible with callers
    /// compiled against any ancestor. Recomputed whenever a new override
    /// is compiled, because each compilation sees the whole chain.
    fn elect_modifiers(
        &self,
        member: &MemberDef,
        outcome: &ResolutionOutcome,
        candidates: &CandidateSet,
    ) -> EmittedModifiers {
        if !outcome.is_override() {
            return copy_modifiers(&member.signature);
        }
        // The override copies modifiers from the hierarchy, not from its
        // own (modifier-free) source signature; among slot-sharing base
        // members the fewest-modifiers set wins.
        let mut best: Option<&csx_symbols::MemberSignature> = None;
        for candidate in &candidates.chain {
            if !candidate.is_virtual_or_abstract
                || !params_equivalent(&member.signature, &candidate.signature)
            {
                continue;
            }
            let better = match best {
                Some(current) => {
                    candidate.signature.custom_modifier_count() < current.custom_modifier_count()
                }
                None => true,
            };
            if better {
                best = Some(&candidate.signature);
            }
        }
        copy_modifiers(best.unwrap_or(&member.signature))
    }

    /// Synthesize the final accessors a `sealed override` container omits.
    ///
    /// For every accessor slot the overridden base container exposes but
    /// the derived container does not declare, produce a final accessor
    /// forwarding to the nearest accessible base accessor of that kind.
    pub fn synthesize_sealed_accessors(
        &self,
        container_id: MemberId,
        container: &MemberDef,
        base_container: &MemberDef,
        candidates: &CandidateSet,
    ) -> Vec<SynthesizedAccessor> {
        let mut synthesized = Vec::new();
        for (kind, _) in &base_container.accessors {
            if container.accessor(*kind).is_some() {
                continue;
            }
            let Some(forwards_to) =
                self.nearest_accessor(&container.signature, *kind, candidates, container)
            else {
                continue;
            };
            let target = self.table.member(forwards_to);
            tracing::debug!(
                "synthesizing sealed {} accessor for {} forwarding to {}",
                kind.describe(),
                self.table.display_member(container_id),
                self.table.display_member(forwards_to)
            );
            synthesized.push(SynthesizedAccessor {
                container: container_id,
                kind: *kind,
                forwards_to,
                attributes: MemberAttributes {
                    is_new_slot: false,
                    is_virtual: true,
                    is_final: true,
                    is_strict: is_assembly_private_contract(target.accessibility()),
                    hide_by_sig: true,
                    emitted_modifiers: copy_modifiers(&target.signature),
                },
            });
        }
        synthesized
    }

    /// The nearest slot-sharing container in the chain that declares an
    /// accessible accessor of the given kind.
    pub fn nearest_accessor(
        &self,
        container_signature: &MemberSignature,
        kind: AccessorKind,
        candidates: &CandidateSet,
        viewer: &MemberDef,
    ) -> Option<MemberId> {
        let viewer_assembly = self.table.type_def(viewer.declaring_type).assembly;
        for candidate in &candidates.chain {
            if !candidate.is_virtual_or_abstract
                || !params_equivalent(container_signature, &candidate.signature)
            {
                continue;
            }
            let candidate_def = self.table.member(candidate.member);
            let Some(accessor_id) = candidate_def.accessor(kind) else {
                continue;
            };
            let accessor = self.table.member(accessor_id);
            let declaring_assembly = self.table.type_def(candidate.declaring_type).assembly;
            if is_accessible_for_inheritance(
                self.table,
                accessor.accessibility(),
                declaring_assembly,
                viewer_assembly,
            ) {
                return Some(accessor_id);
            }
        }
        None
    }
}

fn copy_modifiers(signature: &MemberSignature) -> EmittedModifiers {
    EmittedModifiers {
        return_modifiers: signature.return_custom_modifiers.clone(),
        param_modifiers: signature
            .params
            .iter()
            .map(|p| p.custom_modifiers.clone())
            .collect(),
    }
}
