//! Symbol model for the csx compiler's member resolution phases.
//!
//! This crate is the read-only oracle the override/hiding resolver consumes:
//! arena-backed tables of assemblies, type definitions, and members, with
//! integer handles instead of a mutable object graph. Earlier binder phases
//! (and tests) populate a [`SymbolTable`] through its builder API; once
//! resolution starts the table is only ever read.
//!
//! - **Handles** (`AssemblyId`, `TypeDefId`, `MemberId`): u32 newtypes
//! - **Types** (`TypeRef`): structural references with positional type
//!   parameters and generic substitution
//! - **Signatures** (`MemberSignature`): the overridable identity of a member
//! - **Flags**: declared modifiers and emitted binary attributes
//! - **Accessibility**: pure cross-assembly visibility functions

pub mod ids;
pub use ids::{AssemblyId, MemberId, TypeDefId};

pub mod types;
pub use types::{TypeParamScope, TypeRef, compose_substitution};

pub mod signature;
pub use signature::{
    AccessorKind, Accessibility, CustomModifier, MemberKind, MemberSignature, ParamInfo, RefKind,
};

pub mod flags;
pub use flags::{BinaryAttributes, MemberModifiers};

pub mod accessibility;
pub use accessibility::{
    accessibility_matches_override, internals_visible_to, is_accessible_for_inheritance,
    is_assembly_private_contract,
};

pub mod table;
pub use table::{
    AccessorSpec, AssemblyDef, BaseEdge, MemberDef, SymbolTable, TypeDef, TypeDefKind,
    WellKnownTypes,
};
