//! The per-member resolution engine.
//!
//! For every member declared in a type the engine decides whether it
//! overrides an inherited virtual/abstract slot, hides an inherited
//! member, is unrelated, or is erroneous, then derives the binary
//! attributes and diagnostics from that decision. Properties and events
//! recurse into their accessors, which may resolve asymmetrically.
//!
//! The state machine per member:
//! Start → CollectCandidates → {OverrideCheck | HideCheck} → Decide → Done/Error.
//!
//! Everything here is a pure function of the post-declaration symbol
//! table. Outcomes, including errors, are values; a structural error
//! blocks body emission for that member only and never aborts sibling
//! resolution.

use crate::collect::{Candidate, CandidateCollector, CandidateSet};
use crate::emit::DiagnosticEmitter;
use crate::matcher::{hides, params_equivalent, returns_match, runtime_collision};
use crate::outcome::{
    AccessorResolution, MemberAttributes, MemberResolution, ResolutionError, ResolutionOutcome,
    SynthesizedAccessor,
};
use crate::synthesize::AttributeSynthesizer;
use csx_common::diagnostics::Diagnostic;
use csx_symbols::{
    MemberDef, MemberId, MemberKind, SymbolTable, TypeDefId, TypeDefKind, TypeRef,
    accessibility_matches_override,
};

/// Everything resolution produced for one type: member results in
/// declaration order plus that type's diagnostics, also in declaration
/// order.
pub struct TypeResolution {
    pub ty: TypeDefId,
    pub members: Vec<MemberResolution>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct OverrideResolver<'a> {
    table: &'a SymbolTable,
    collector: CandidateCollector<'a>,
    emitter: DiagnosticEmitter<'a>,
    synthesizer: AttributeSynthesizer<'a>,
}

impl<'a> OverrideResolver<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            collector: CandidateCollector::new(table),
            emitter: DiagnosticEmitter::new(table),
            synthesizer: AttributeSynthesizer::new(table),
        }
    }

    /// Resolve every member declared in `ty`, then run the class-level
    /// checks that are independent of individual member outcomes.
    pub fn resolve_type(&self, ty: TypeDefId) -> TypeResolution {
        let mut diagnostics = Vec::new();
        let mut members = Vec::new();
        for &member_id in self.table.members_of(ty) {
            members.push(self.resolve_member(ty, member_id, &mut diagnostics));
        }
        self.check_equals_without_get_hash_code(ty, &mut diagnostics);
        self.check_abstract_implementation(ty, &mut diagnostics);
        TypeResolution {
            ty,
            members,
            diagnostics,
        }
    }

    fn resolve_member(
        &self,
        ty: TypeDefId,
        member_id: MemberId,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> MemberResolution {
        let member = self.table.member(member_id);

        if signature_unresolvable(member) {
            // A bad metadata reference poisons only this member.
            return MemberResolution {
                member: member_id,
                outcome: ResolutionOutcome::Error {
                    reason: ResolutionError::UnresolvableMetadata,
                },
                attributes: MemberAttributes::default(),
                accessors: Vec::new(),
                synthesized: Vec::new(),
            };
        }

        let candidates = self.collector.collect(ty, member.name());
        let outcome = if member.declares_override() {
            self.resolve_explicit_override(ty, member_id, member, &candidates, diagnostics)
        } else {
            self.resolve_implicit(member_id, member, &candidates, diagnostics)
        };
        tracing::debug!(
            "resolved {}: {:?}",
            self.table.display_member(member_id),
            outcome
        );

        let attributes = self
            .synthesizer
            .member_attributes(member, &outcome, &candidates);
        let (accessors, synthesized) =
            self.resolve_accessors(ty, member_id, member, &outcome, &candidates, diagnostics);

        MemberResolution {
            member: member_id,
            outcome,
            attributes,
            accessors,
            synthesized,
        }
    }

    /// Step 1: explicit `override`. Requires exactly one accessible
    /// virtual/abstract match; a parameter-matched but unsuitable target
    /// gets a targeted error instead of the generic "no suitable member".
    fn resolve_explicit_override(
        &self,
        ty: TypeDefId,
        member_id: MemberId,
        member: &MemberDef,
        candidates: &CandidateSet,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ResolutionOutcome {
        let signature = &member.signature;
        let matched: Vec<&Candidate> = candidates
            .chain
            .iter()
            .filter(|c| params_equivalent(signature, &c.signature))
            .collect();

        let Some(first) = matched.first() else {
            // The binary format may still share a slot with a member the
            // language cannot see. That resolves as no relationship; the
            // emitted member starts a fresh slot and downstream verifiers
            // may or may not accept the divergence.
            let binary = self.collector.inaccessible_binary_matches(ty, signature);
            if !binary.is_empty() {
                tracing::debug!(
                    "{}: override target visible only to the binary format; \
                     resolving as unrelated",
                    self.table.display_member(member_id)
                );
                return ResolutionOutcome::Unrelated;
            }
            diagnostics.push(self.emitter.no_suitable_member(member_id));
            return ResolutionOutcome::Error {
                reason: ResolutionError::NoSuitableMember,
            };
        };

        // Nearest declaring type wins; same-type duplicates differing only
        // in custom modifiers elect the fewest-modifiers entry.
        let nearest_type = first.declaring_type;
        let candidate = matched
            .iter()
            .filter(|c| c.declaring_type == nearest_type)
            .min_by_key(|c| c.signature.custom_modifier_count())
            .unwrap_or(first);
        let base_member = self.table.member(candidate.member);

        if !candidate.is_virtual_or_abstract || base_member.is_static() || member.is_static() {
            diagnostics.push(
                self.emitter
                    .cannot_override_non_virtual(member_id, candidate.member),
            );
            return ResolutionOutcome::Error {
                reason: ResolutionError::TargetNotVirtual {
                    base: candidate.member,
                },
            };
        }
        if candidate.is_sealed {
            diagnostics.push(
                self.emitter
                    .cannot_override_sealed(member_id, candidate.member),
            );
            return ResolutionOutcome::Error {
                reason: ResolutionError::TargetSealed {
                    base: candidate.member,
                },
            };
        }
        if !returns_match(signature, &candidate.signature) {
            diagnostics.push(
                self.emitter
                    .return_type_mismatch(member_id, candidate.member),
            );
            return ResolutionOutcome::Error {
                reason: ResolutionError::ReturnTypeMismatch {
                    base: candidate.member,
                },
            };
        }

        let base_assembly = self.table.type_def(candidate.declaring_type).assembly;
        let derived_assembly = self.table.type_def(ty).assembly;
        if !accessibility_matches_override(
            self.table,
            base_member.accessibility(),
            base_assembly,
            member.accessibility(),
            derived_assembly,
        ) {
            diagnostics.push(self.emitter.access_mismatch(member_id, candidate.member));
            return ResolutionOutcome::Error {
                reason: ResolutionError::AccessMismatch {
                    base: candidate.member,
                },
            };
        }

        // Binding this slot may collide at run-time with another base slot
        // that differs only in parameter direction. The binary format
        // cannot always prevent the collision, so this is a warning.
        for other in &candidates.chain {
            if other.member != candidate.member
                && other.is_virtual_or_abstract
                && runtime_collision(&candidate.signature, &other.signature)
            {
                diagnostics.push(
                    self.emitter
                        .runtime_override_ambiguity(member_id, candidate.member),
                );
                break;
            }
        }

        ResolutionOutcome::Override {
            base: candidate.member,
        }
    }

    /// Step 2: implicit or `new`. Only the first occluding base type can
    /// hide; everything deeper is reachable solely through override
    /// search.
    fn resolve_implicit(
        &self,
        member_id: MemberId,
        member: &MemberDef,
        candidates: &CandidateSet,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ResolutionOutcome {
        let signature = &member.signature;
        let hidden = candidates
            .hiding
            .iter()
            .find(|c| hides(signature, &c.signature));

        match hidden {
            Some(candidate) => {
                if !member.declares_new() {
                    let overridable = candidate.is_virtual_or_abstract
                        && candidate.signature.kind == signature.kind
                        && !self.table.member(candidate.member).is_static();
                    if overridable {
                        diagnostics.push(
                            self.emitter
                                .hides_add_override_or_new(member_id, candidate.member),
                        );
                    } else {
                        diagnostics.push(self.emitter.hides_use_new(member_id, candidate.member));
                    }
                }
                ResolutionOutcome::Hide {
                    hidden: Some(candidate.member),
                }
            }
            None => {
                if member.declares_new() {
                    diagnostics.push(self.emitter.new_not_required(member_id));
                    ResolutionOutcome::Hide { hidden: None }
                } else {
                    ResolutionOutcome::Unrelated
                }
            }
        }
    }

    /// Step 3: accessor-level resolution. Each accessor of a property or
    /// event repeats the container's decision against its corresponding
    /// base accessor; an override container searches the whole chain for
    /// the nearest slot-sharing container actually declaring the accessor,
    /// which is how a getter and setter can bind different ancestors.
    fn resolve_accessors(
        &self,
        ty: TypeDefId,
        member_id: MemberId,
        member: &MemberDef,
        outcome: &ResolutionOutcome,
        candidates: &CandidateSet,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> (Vec<AccessorResolution>, Vec<SynthesizedAccessor>) {
        if !matches!(member.kind(), MemberKind::Property | MemberKind::Event) {
            return (Vec::new(), Vec::new());
        }

        let derived_assembly = self.table.type_def(ty).assembly;
        let mut resolutions = Vec::new();

        for &(kind, accessor_id) in &member.accessors {
            let accessor = self.table.member(accessor_id);
            let accessor_outcome = match outcome {
                ResolutionOutcome::Override { .. } => {
                    match self.synthesizer.nearest_accessor(
                        &member.signature,
                        kind,
                        candidates,
                        member,
                    ) {
                        Some(base_accessor_id) => {
                            let base_accessor = self.table.member(base_accessor_id);
                            let base_assembly = self
                                .table
                                .type_def(base_accessor.declaring_type)
                                .assembly;
                            if accessibility_matches_override(
                                self.table,
                                base_accessor.accessibility(),
                                base_assembly,
                                accessor.accessibility(),
                                derived_assembly,
                            ) {
                                ResolutionOutcome::Override {
                                    base: base_accessor_id,
                                }
                            } else {
                                diagnostics.push(self.emitter.accessor_access_mismatch(
                                    member_id,
                                    kind,
                                    base_accessor_id,
                                ));
                                ResolutionOutcome::Error {
                                    reason: ResolutionError::AccessMismatch {
                                        base: base_accessor_id,
                                    },
                                }
                            }
                        }
                        None => {
                            diagnostics.push(self.emitter.no_suitable_accessor(member_id, kind));
                            ResolutionOutcome::Error {
                                reason: ResolutionError::NoSuitableMember,
                            }
                        }
                    }
                }
                ResolutionOutcome::Hide {
                    hidden: Some(hidden_id),
                } => {
                    let hidden_accessor = self.table.member(*hidden_id).accessor(kind);
                    ResolutionOutcome::Hide {
                        hidden: hidden_accessor,
                    }
                }
                _ => ResolutionOutcome::Unrelated,
            };
            let attributes = self
                .synthesizer
                .accessor_attributes(member, accessor, &accessor_outcome);
            resolutions.push(AccessorResolution {
                kind,
                accessor: accessor_id,
                outcome: accessor_outcome,
                attributes,
            });
        }

        // Step 4: a sealed override supplying only one accessor forces
        // synthesis of a matching final accessor for the other, fully
        // closing the slot.
        let synthesized = match outcome {
            ResolutionOutcome::Override { base }
                if member.modifiers.is_sealed() && member.declares_override() =>
            {
                let base_container = self.table.member(*base);
                self.synthesizer.synthesize_sealed_accessors(
                    member_id,
                    member,
                    base_container,
                    candidates,
                )
            }
            _ => Vec::new(),
        };

        (resolutions, synthesized)
    }

    /// Class-level: a class overriding `Equals(object)` without overriding
    /// `GetHashCode()` gets exactly one warning, independent of member
    /// outcomes.
    fn check_equals_without_get_hash_code(
        &self,
        ty: TypeDefId,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if self.table.type_def(ty).kind != TypeDefKind::Class {
            return;
        }
        let equals_name = self
            .table
            .member(self.table.well_known.object_equals)
            .name();
        let hash_code_name = self
            .table
            .member(self.table.well_known.object_get_hash_code)
            .name();
        let object = TypeRef::named(self.table.well_known.object);
        let boolean = TypeRef::named(self.table.well_known.boolean);

        let overrides_equals = self.table.members_of(ty).iter().copied().find(|&id| {
            let m = self.table.member(id);
            m.kind() == MemberKind::Method
                && m.declares_override()
                && m.name() == equals_name
                && m.signature.params.len() == 1
                && m.signature.params[0].ty.matches(&object)
                && m.signature.return_type.matches(&boolean)
        });
        let overrides_hash_code = self.table.members_of(ty).iter().any(|&id| {
            let m = self.table.member(id);
            m.kind() == MemberKind::Method
                && m.declares_override()
                && m.name() == hash_code_name
                && m.signature.params.is_empty()
        });

        if let Some(equals) = overrides_equals {
            if !overrides_hash_code {
                diagnostics.push(self.emitter.equals_without_get_hash_code(ty, equals));
            }
        }
    }

    /// Class-level: a concrete class must supply an override for every
    /// abstract member reachable along the chain, including members hidden
    /// from an inaccessible intermediate assembly.
    fn check_abstract_implementation(&self, ty: TypeDefId, diagnostics: &mut Vec<Diagnostic>) {
        let type_def = self.table.type_def(ty);
        if type_def.kind != TypeDefKind::Class || type_def.is_abstract {
            return;
        }

        let chain = self.table.base_chain(ty);

        for (depth, (base_ty, substitution)) in chain.iter().enumerate() {
            for &abstract_id in self.table.members_of(*base_ty) {
                let abstract_member = self.table.member(abstract_id);
                if !abstract_member.is_abstract_member() {
                    continue;
                }
                let abstract_signature = abstract_member.signature.substitute(substitution);

                // A satisfying override lives in this type or any type
                // strictly nearer than the abstract declaration.
                let satisfier =
                    self.nearer_overrides(ty, &chain[..depth])
                        .find(|(candidate_sig, m)| {
                            m.declares_override()
                                && !m.is_abstract_member()
                                && params_equivalent(candidate_sig, &abstract_signature)
                        });

                match satisfier {
                    None => {
                        diagnostics
                            .push(self.emitter.unimplemented_abstract_member(ty, abstract_id));
                    }
                    Some((_, satisfier_def)) => {
                        // Containers satisfy accessor-by-accessor. A
                        // sealed override closes the missing accessors by
                        // synthesis; anything else leaves them abstract.
                        if matches!(
                            abstract_member.kind(),
                            MemberKind::Property | MemberKind::Event
                        ) && !satisfier_def.modifiers.is_sealed()
                        {
                            for &(kind, base_accessor) in &abstract_member.accessors {
                                if satisfier_def.accessor(kind).is_none() {
                                    diagnostics.push(
                                        self.emitter
                                            .unimplemented_abstract_member(ty, base_accessor),
                                    );
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Members of `ty` itself plus the given nearer chain prefix, each with
    /// its signature rewritten into `ty`'s terms.
    fn nearer_overrides<'s>(
        &'s self,
        ty: TypeDefId,
        nearer_chain: &'s [(TypeDefId, Vec<TypeRef>)],
    ) -> impl Iterator<Item = (csx_symbols::MemberSignature, &'s MemberDef)> + 's {
        let own = self.table.members_of(ty).iter().map(move |&id| {
            let m = self.table.member(id);
            (m.signature.clone(), m)
        });
        let inherited = nearer_chain.iter().flat_map(move |(base_ty, substitution)| {
            self.table.members_of(*base_ty).iter().map(move |&id| {
                let m = self.table.member(id);
                (m.signature.substitute(substitution), m)
            })
        });
        own.chain(inherited)
    }
}

/// A signature referencing an unresolvable metadata type cannot take part
/// in matching. Nested-type markers intentionally carry no return type.
fn signature_unresolvable(member: &MemberDef) -> bool {
    if member.kind() == MemberKind::NestedType {
        return false;
    }
    member.signature.return_type.has_error()
        || member.signature.params.iter().any(|p| p.ty.has_error())
}

#[cfg(test)]
#[path = "tests/resolve_engine_tests.rs"]
mod tests;
