//! Member signatures: the overridable identity of a declared member.

use crate::ids::TypeDefId;
use crate::types::TypeRef;
use csx_common::Atom;
use serde::Serialize;
use smallvec::SmallVec;

/// The kind of a member. Name-only hiding works across all kinds, so a
/// field, property, method, event, and nested type sharing a name resolve
/// against each other at the container level before any signature
/// inspection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MemberKind {
    Method,
    Property,
    Event,
    Field,
    NestedType,
}

/// Parameter passing direction. Part of override identity: a `ref`-vs-`out`
/// change at the same position is a different, independently overridable
/// signature, though the pair may collide at the binary level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
    In,
}

impl RefKind {
    /// Both directions pass by reference in the binary format, which is
    /// why the runtime cannot always tell the resulting slots apart.
    pub fn is_by_ref(self) -> bool {
        !matches!(self, RefKind::None)
    }
}

/// Declared accessibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Accessibility {
    Private,
    PrivateProtected,
    Internal,
    Protected,
    ProtectedInternal,
    Public,
}

/// A custom modifier persisted in metadata signatures. Never part of
/// language-level identity; counted when electing the emitted modifier set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CustomModifier {
    pub required: bool,
    pub modifier: TypeDefId,
}

/// A single parameter of a member signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ParamInfo {
    pub ty: TypeRef,
    pub ref_kind: RefKind,
    pub custom_modifiers: SmallVec<[CustomModifier; 1]>,
    /// Trailing `params` expansion. Explicitly excluded from identity and
    /// freely added or removed across an override chain.
    pub is_params: bool,
}

impl ParamInfo {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            ref_kind: RefKind::None,
            custom_modifiers: SmallVec::new(),
            is_params: false,
        }
    }

    pub fn by_ref(ty: TypeRef, ref_kind: RefKind) -> Self {
        Self {
            ty,
            ref_kind,
            custom_modifiers: SmallVec::new(),
            is_params: false,
        }
    }

    pub fn params_array(ty: TypeRef) -> Self {
        Self {
            ty,
            ref_kind: RefKind::None,
            custom_modifiers: SmallVec::new(),
            is_params: true,
        }
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = CustomModifier>) -> Self {
        self.custom_modifiers.extend(modifiers);
        self
    }
}

/// Accessor slots of properties and events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessorKind {
    Get,
    Set,
    Add,
    Remove,
}

impl AccessorKind {
    pub fn special_name_prefix(self) -> &'static str {
        match self {
            AccessorKind::Get => "get_",
            AccessorKind::Set => "set_",
            AccessorKind::Add => "add_",
            AccessorKind::Remove => "remove_",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Add => "add",
            AccessorKind::Remove => "remove",
        }
    }
}

/// Immutable descriptor of a member's overridable identity.
///
/// Parameter and return types may reference the member's own type
/// parameters (by position, `TypeParamScope::Method`) and the enclosing
/// type's parameters (`TypeParamScope::Type`, resolved via the hierarchy
/// edge's substitution).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MemberSignature {
    pub kind: MemberKind,
    pub name: Atom,
    pub generic_arity: u16,
    pub params: SmallVec<[ParamInfo; 4]>,
    pub return_type: TypeRef,
    pub return_custom_modifiers: SmallVec<[CustomModifier; 1]>,
    pub accessibility: Accessibility,
    pub is_static: bool,
}

impl MemberSignature {
    pub fn method(name: Atom, params: Vec<ParamInfo>, return_type: TypeRef) -> Self {
        Self {
            kind: MemberKind::Method,
            name,
            generic_arity: 0,
            params: params.into_iter().collect(),
            return_type,
            return_custom_modifiers: SmallVec::new(),
            accessibility: Accessibility::Public,
            is_static: false,
        }
    }

    pub fn property(name: Atom, ty: TypeRef) -> Self {
        Self {
            kind: MemberKind::Property,
            name,
            generic_arity: 0,
            params: SmallVec::new(),
            return_type: ty,
            return_custom_modifiers: SmallVec::new(),
            accessibility: Accessibility::Public,
            is_static: false,
        }
    }

    pub fn event(name: Atom, handler_type: TypeRef) -> Self {
        Self {
            kind: MemberKind::Event,
            name,
            generic_arity: 0,
            params: SmallVec::new(),
            return_type: handler_type,
            return_custom_modifiers: SmallVec::new(),
            accessibility: Accessibility::Public,
            is_static: false,
        }
    }

    pub fn field(name: Atom, ty: TypeRef) -> Self {
        Self {
            kind: MemberKind::Field,
            name,
            generic_arity: 0,
            params: SmallVec::new(),
            return_type: ty,
            return_custom_modifiers: SmallVec::new(),
            accessibility: Accessibility::Public,
            is_static: false,
        }
    }

    pub fn nested_type(name: Atom) -> Self {
        Self {
            kind: MemberKind::NestedType,
            name,
            generic_arity: 0,
            params: SmallVec::new(),
            // Nested type markers only participate in name-level hiding;
            // the return slot is never inspected.
            return_type: TypeRef::Error,
            return_custom_modifiers: SmallVec::new(),
            accessibility: Accessibility::Public,
            is_static: false,
        }
    }

    pub fn with_arity(mut self, arity: u16) -> Self {
        self.generic_arity = arity;
        self
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_return_modifiers(
        mut self,
        modifiers: impl IntoIterator<Item = CustomModifier>,
    ) -> Self {
        self.return_custom_modifiers.extend(modifiers);
        self
    }

    /// Substitute the enclosing type's generic arguments through every
    /// type in the signature, producing the signature as seen from a
    /// derived type.
    pub fn substitute(&self, type_args: &[TypeRef]) -> MemberSignature {
        let mut out = self.clone();
        for param in &mut out.params {
            param.ty = param.ty.substitute(type_args);
        }
        out.return_type = out.return_type.substitute(type_args);
        out
    }

    /// Total custom modifier count across parameters and return, used for
    /// the least-custom-modifiers election.
    pub fn custom_modifier_count(&self) -> usize {
        self.return_custom_modifiers.len()
            + self
                .params
                .iter()
                .map(|p| p.custom_modifiers.len())
                .sum::<usize>()
    }
}
