//! Resolution outcomes and emitter-facing attribute records.

use csx_symbols::{AccessorKind, CustomModifier, MemberId};
use serde::Serialize;
use smallvec::SmallVec;

/// Why an explicit override failed structurally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ResolutionError {
    /// No member with a matching parameter list anywhere in the chain.
    NoSuitableMember,
    /// The matched member is not virtual, abstract, or override.
    TargetNotVirtual { base: MemberId },
    /// The matched member is sealed.
    TargetSealed { base: MemberId },
    /// Parameter lists match but return types differ.
    ReturnTypeMismatch { base: MemberId },
    /// Declared accessibility does not reconcile with the base member's.
    AccessMismatch { base: MemberId },
    /// A metadata reference in the signature could not be resolved;
    /// aborts only this member's resolution.
    UnresolvableMetadata,
}

/// The per-member decision. Computed once, cached, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ResolutionOutcome {
    /// The member overrides an inherited virtual/abstract slot.
    Override { base: MemberId },
    /// The member hides an inherited member (`hidden: None` records a
    /// `new` modifier with nothing to hide).
    Hide { hidden: Option<MemberId> },
    /// No relationship to any inherited member.
    Unrelated,
    /// Structurally erroneous; body emission is blocked for this member
    /// only.
    Error { reason: ResolutionError },
}

impl ResolutionOutcome {
    pub fn is_override(&self) -> bool {
        matches!(self, ResolutionOutcome::Override { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResolutionOutcome::Error { .. })
    }

    pub fn overridden_base(&self) -> Option<MemberId> {
        match self {
            ResolutionOutcome::Override { base } => Some(*base),
            _ => None,
        }
    }
}

/// The custom-modifier set elected for emission: the fewest-modifiers
/// signature among all slot-sharing members, so the emitted override stays
/// binary-compatible with callers compiled against any ancestor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EmittedModifiers {
    pub return_modifiers: SmallVec<[CustomModifier; 1]>,
    pub param_modifiers: Vec<SmallVec<[CustomModifier; 1]>>,
}

/// Binary attributes the metadata emitter needs for one member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberAttributes {
    /// First virtual declaration for its signature anywhere in the
    /// ancestry. An override never gets a new slot; a `new virtual` hide
    /// does.
    pub is_new_slot: bool,
    pub is_virtual: bool,
    pub is_final: bool,
    /// Assembly-private virtual contract; not overridable from outside
    /// the defining assembly.
    pub is_strict: bool,
    /// Always true: the language matches slots by full signature.
    pub hide_by_sig: bool,
    pub emitted_modifiers: EmittedModifiers,
}

impl Default for MemberAttributes {
    fn default() -> Self {
        Self {
            is_new_slot: false,
            is_virtual: false,
            is_final: false,
            is_strict: false,
            hide_by_sig: true,
            emitted_modifiers: EmittedModifiers::default(),
        }
    }
}

/// Per-accessor decision for a property or event member.
#[derive(Clone, Debug, Serialize)]
pub struct AccessorResolution {
    pub kind: AccessorKind,
    pub accessor: MemberId,
    pub outcome: ResolutionOutcome,
    pub attributes: MemberAttributes,
}

/// An accessor synthesized to close a slot when a `sealed override`
/// property/event omits one accessor. The body forwards to the nearest
/// accessible base accessor.
#[derive(Clone, Debug, Serialize)]
pub struct SynthesizedAccessor {
    pub container: MemberId,
    pub kind: AccessorKind,
    pub forwards_to: MemberId,
    pub attributes: MemberAttributes,
}

/// Everything resolution produced for one declared member.
#[derive(Clone, Debug, Serialize)]
pub struct MemberResolution {
    pub member: MemberId,
    pub outcome: ResolutionOutcome,
    pub attributes: MemberAttributes,
    pub accessors: Vec<AccessorResolution>,
    pub synthesized: Vec<SynthesizedAccessor>,
}
