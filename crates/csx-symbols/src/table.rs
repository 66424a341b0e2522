//! Arena-backed symbol table.
//!
//! Assemblies, type definitions, and members live in flat vectors addressed
//! by integer handles. Earlier binder phases populate the table through the
//! builder methods; the resolver only reads it. The table seeds a core
//! assembly with the well-known root types so every class chain bottoms out
//! at `object` and the root virtuals (`Equals`, `GetHashCode`, `ToString`,
//! `Finalize`) participate in hiding and override searches like any other
//! imported metadata members.

use crate::accessibility::is_accessible_for_inheritance;
use crate::flags::{BinaryAttributes, MemberModifiers};
use crate::ids::{AssemblyId, MemberId, TypeDefId};
use crate::signature::{
    AccessorKind, Accessibility, MemberKind, MemberSignature, ParamInfo, RefKind,
};
use crate::types::{TypeRef, compose_substitution};
use csx_common::{Atom, Interner, Span};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// An assembly: a compilation unit or an imported, finalized binary.
#[derive(Clone, Debug)]
pub struct AssemblyDef {
    pub name: Atom,
    /// Friend assemblies whose code may see this assembly's internals.
    pub friends: Vec<AssemblyId>,
    /// Imported from metadata; members are final and read-only.
    pub is_metadata: bool,
}

/// Derived type → base type, carrying the generic-argument substitution
/// applied to every inherited signature.
#[derive(Clone, Debug)]
pub struct BaseEdge {
    pub base: TypeDefId,
    pub args: Vec<TypeRef>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeDefKind {
    Class,
    Struct,
    Interface,
}

/// A type definition.
#[derive(Clone, Debug)]
pub struct TypeDef {
    pub name: Atom,
    pub assembly: AssemblyId,
    pub kind: TypeDefKind,
    pub arity: u16,
    pub base: Option<BaseEdge>,
    /// Declared members in declaration order. Accessor members are linked
    /// from their containers instead of appearing here.
    pub members: Vec<MemberId>,
    pub is_abstract: bool,
    pub is_sealed: bool,
    /// Source file for diagnostics; empty for metadata types.
    pub file: Atom,
}

/// A declared or imported member.
#[derive(Clone, Debug)]
pub struct MemberDef {
    pub signature: MemberSignature,
    pub modifiers: MemberModifiers,
    pub span: Span,
    pub declaring_type: TypeDefId,
    /// For property/event containers: accessor links in declaration order.
    pub accessors: SmallVec<[(AccessorKind, MemberId); 2]>,
    /// For accessor members: the owning container and slot.
    pub container: Option<(MemberId, AccessorKind)>,
    /// Persisted binary flags for imported members.
    pub imported_attributes: Option<BinaryAttributes>,
    /// An explicit low-level override directive was present in metadata,
    /// binding a slot with no source-visible relationship.
    pub metadata_override_directive: bool,
}

impl MemberDef {
    pub fn name(&self) -> Atom {
        self.signature.name
    }

    pub fn kind(&self) -> MemberKind {
        self.signature.kind
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static() || self.signature.is_static
    }

    /// Occupies (or can occupy) a virtual slot: declared virtual, abstract,
    /// or override, or imported with the virtual binary attribute.
    pub fn is_virtual_or_abstract(&self) -> bool {
        self.modifiers.is_virtual_or_abstract()
            || self
                .imported_attributes
                .is_some_and(|a| a.contains(BinaryAttributes::VIRTUAL))
    }

    /// Closed to further overriding: declared sealed or imported final.
    pub fn is_sealed_member(&self) -> bool {
        self.modifiers.is_sealed()
            || self
                .imported_attributes
                .is_some_and(|a| a.contains(BinaryAttributes::FINAL))
    }

    pub fn is_abstract_member(&self) -> bool {
        self.modifiers.is_abstract()
    }

    /// Declared `override`, or imported with a raw override directive.
    pub fn declares_override(&self) -> bool {
        self.modifiers.declares_override() || self.metadata_override_directive
    }

    pub fn declares_new(&self) -> bool {
        self.modifiers.declares_new()
    }

    pub fn accessor(&self, kind: AccessorKind) -> Option<MemberId> {
        self.accessors
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, id)| *id)
    }

    pub fn accessibility(&self) -> Accessibility {
        self.signature.accessibility
    }
}

/// Declaration of one accessor on a property or event.
#[derive(Clone, Debug)]
pub struct AccessorSpec {
    pub kind: AccessorKind,
    /// Accessor-level accessibility; defaults to the container's.
    pub accessibility: Option<Accessibility>,
    pub span: Span,
}

impl AccessorSpec {
    pub fn new(kind: AccessorKind) -> Self {
        Self {
            kind,
            accessibility: None,
            span: Span::empty(),
        }
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Handles to the seeded core types and root virtuals.
#[derive(Clone, Debug)]
pub struct WellKnownTypes {
    pub core_assembly: AssemblyId,
    pub object: TypeDefId,
    pub void_type: TypeDefId,
    pub boolean: TypeDefId,
    pub int32: TypeDefId,
    pub string: TypeDefId,
    pub object_equals: MemberId,
    pub object_get_hash_code: MemberId,
    pub object_to_string: MemberId,
    pub object_finalize: MemberId,
}

/// The post-declaration symbol table consumed by the resolver.
pub struct SymbolTable {
    pub interner: Interner,
    assemblies: Vec<AssemblyDef>,
    types: Vec<TypeDef>,
    members: Vec<MemberDef>,
    pub well_known: WellKnownTypes,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = Self {
            interner: Interner::new(),
            assemblies: Vec::new(),
            types: Vec::new(),
            members: Vec::new(),
            well_known: WellKnownTypes {
                core_assembly: AssemblyId::INVALID,
                object: TypeDefId::INVALID,
                void_type: TypeDefId::INVALID,
                boolean: TypeDefId::INVALID,
                int32: TypeDefId::INVALID,
                string: TypeDefId::INVALID,
                object_equals: MemberId::INVALID,
                object_get_hash_code: MemberId::INVALID,
                object_to_string: MemberId::INVALID,
                object_finalize: MemberId::INVALID,
            },
        };
        table.seed_core_types();
        table
    }

    fn seed_core_types(&mut self) {
        let core = self.add_metadata_assembly("corlib");
        let object = self.add_type(core, "object", TypeDefKind::Class);
        // later class additions (including string below) root at object
        self.well_known.object = object;
        let void_type = self.add_type(core, "void", TypeDefKind::Struct);
        let boolean = self.add_type(core, "bool", TypeDefKind::Struct);
        let int32 = self.add_type(core, "int", TypeDefKind::Struct);
        let string = self.add_type(core, "string", TypeDefKind::Class);

        let root_virtual = BinaryAttributes::VIRTUAL | BinaryAttributes::NEW_SLOT;
        let equals_name = self.interner.intern("Equals");
        let object_equals = self.add_member(
            object,
            MemberSignature::method(
                equals_name,
                vec![ParamInfo::new(TypeRef::named(object))],
                TypeRef::named(boolean),
            ),
            MemberModifiers::VIRTUAL,
            Span::empty(),
        );
        self.mark_imported(object_equals, root_virtual, false);

        let ghc_name = self.interner.intern("GetHashCode");
        let object_get_hash_code = self.add_member(
            object,
            MemberSignature::method(ghc_name, Vec::new(), TypeRef::named(int32)),
            MemberModifiers::VIRTUAL,
            Span::empty(),
        );
        self.mark_imported(object_get_hash_code, root_virtual, false);

        let to_string_name = self.interner.intern("ToString");
        let object_to_string = self.add_member(
            object,
            MemberSignature::method(to_string_name, Vec::new(), TypeRef::named(string)),
            MemberModifiers::VIRTUAL,
            Span::empty(),
        );
        self.mark_imported(object_to_string, root_virtual, false);

        let finalize_name = self.interner.intern("Finalize");
        let object_finalize = self.add_member(
            object,
            MemberSignature::method(finalize_name, Vec::new(), TypeRef::named(void_type))
                .with_accessibility(Accessibility::Protected),
            MemberModifiers::VIRTUAL,
            Span::empty(),
        );
        self.mark_imported(object_finalize, root_virtual, false);

        self.well_known = WellKnownTypes {
            core_assembly: core,
            object,
            void_type,
            boolean,
            int32,
            string,
            object_equals,
            object_get_hash_code,
            object_to_string,
            object_finalize,
        };
    }

    // ------------------------------------------------------------------
    // Builder API
    // ------------------------------------------------------------------

    pub fn add_assembly(&mut self, name: &str) -> AssemblyId {
        let name = self.interner.intern(name);
        self.assemblies.push(AssemblyDef {
            name,
            friends: Vec::new(),
            is_metadata: false,
        });
        AssemblyId(self.assemblies.len() as u32)
    }

    /// An imported assembly whose metadata is finalized and read-only.
    pub fn add_metadata_assembly(&mut self, name: &str) -> AssemblyId {
        let id = self.add_assembly(name);
        self.assemblies[id.slot()].is_metadata = true;
        id
    }

    /// Declare `friend` as able to see `owner`'s internals.
    pub fn add_friend(&mut self, owner: AssemblyId, friend: AssemblyId) {
        self.assemblies[owner.slot()].friends.push(friend);
    }

    /// Add a type. Classes default to deriving from `object`; use
    /// [`SymbolTable::set_base`] for anything else.
    pub fn add_type(&mut self, assembly: AssemblyId, name: &str, kind: TypeDefKind) -> TypeDefId {
        let name = self.interner.intern(name);
        let base = if kind == TypeDefKind::Class && self.well_known.object.is_valid() {
            Some(BaseEdge {
                base: self.well_known.object,
                args: Vec::new(),
            })
        } else {
            None
        };
        self.types.push(TypeDef {
            name,
            assembly,
            kind,
            arity: 0,
            base,
            members: Vec::new(),
            is_abstract: false,
            is_sealed: false,
            file: Atom::NONE,
        });
        TypeDefId(self.types.len() as u32)
    }

    pub fn set_base(&mut self, ty: TypeDefId, base: TypeDefId, args: Vec<TypeRef>) {
        tracing::trace!(?ty, ?base, "set base edge");
        self.types[ty.slot()].base = Some(BaseEdge { base, args });
    }

    pub fn set_arity(&mut self, ty: TypeDefId, arity: u16) {
        self.types[ty.slot()].arity = arity;
    }

    pub fn set_abstract(&mut self, ty: TypeDefId, is_abstract: bool) {
        self.types[ty.slot()].is_abstract = is_abstract;
    }

    pub fn set_sealed(&mut self, ty: TypeDefId, is_sealed: bool) {
        self.types[ty.slot()].is_sealed = is_sealed;
    }

    pub fn set_file(&mut self, ty: TypeDefId, file: &str) {
        let file = self.interner.intern(file);
        self.types[ty.slot()].file = file;
    }

    /// Add a member to a type's declaration list.
    pub fn add_member(
        &mut self,
        ty: TypeDefId,
        signature: MemberSignature,
        modifiers: MemberModifiers,
        span: Span,
    ) -> MemberId {
        self.members.push(MemberDef {
            signature,
            modifiers,
            span,
            declaring_type: ty,
            accessors: SmallVec::new(),
            container: None,
            imported_attributes: None,
            metadata_override_directive: false,
        });
        let id = MemberId(self.members.len() as u32);
        self.types[ty.slot()].members.push(id);
        id
    }

    /// Attach accessors to a property or event container, deriving each
    /// accessor's method signature from the container's.
    pub fn add_accessors(&mut self, container: MemberId, specs: &[AccessorSpec]) {
        for spec in specs {
            let (signature, modifiers, declaring_type, container_span) = {
                let c = &self.members[container.slot()];
                (
                    c.signature.clone(),
                    c.modifiers,
                    c.declaring_type,
                    c.span,
                )
            };
            let accessor_sig = self.derive_accessor_signature(&signature, spec);
            let span = if spec.span.is_empty() {
                container_span
            } else {
                spec.span
            };
            self.members.push(MemberDef {
                signature: accessor_sig,
                modifiers,
                span,
                declaring_type,
                accessors: SmallVec::new(),
                container: Some((container, spec.kind)),
                imported_attributes: None,
                metadata_override_directive: false,
            });
            let id = MemberId(self.members.len() as u32);
            self.members[container.slot()].accessors.push((spec.kind, id));
        }
    }

    fn derive_accessor_signature(
        &mut self,
        container: &MemberSignature,
        spec: &AccessorSpec,
    ) -> MemberSignature {
        let container_name = self.interner.resolve(container.name).to_string();
        let name = self
            .interner
            .intern(&format!("{}{container_name}", spec.kind.special_name_prefix()));
        let void = TypeRef::named(self.well_known.void_type);
        let mut params: Vec<ParamInfo> = container.params.iter().cloned().collect();
        let return_type = match spec.kind {
            AccessorKind::Get => container.return_type.clone(),
            AccessorKind::Set | AccessorKind::Add | AccessorKind::Remove => {
                params.push(ParamInfo::new(container.return_type.clone()));
                void
            }
        };
        let mut sig = MemberSignature::method(name, params, return_type)
            .with_accessibility(spec.accessibility.unwrap_or(container.accessibility));
        sig.is_static = container.is_static;
        sig
    }

    /// Record persisted binary flags on an imported member.
    pub fn mark_imported(
        &mut self,
        member: MemberId,
        attributes: BinaryAttributes,
        override_directive: bool,
    ) {
        let m = &mut self.members[member.slot()];
        m.imported_attributes = Some(attributes);
        m.metadata_override_directive = override_directive;
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn assembly(&self, id: AssemblyId) -> &AssemblyDef {
        &self.assemblies[id.slot()]
    }

    pub fn type_def(&self, id: TypeDefId) -> &TypeDef {
        &self.types[id.slot()]
    }

    pub fn member(&self, id: MemberId) -> &MemberDef {
        &self.members[id.slot()]
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn type_ids(&self) -> impl Iterator<Item = TypeDefId> + '_ {
        (1..=self.types.len() as u32).map(TypeDefId)
    }

    pub fn members_of(&self, ty: TypeDefId) -> &[MemberId] {
        &self.types[ty.slot()].members
    }

    /// The base chain of `ty`, nearest-base-first, each entry carrying the
    /// substitution that rewrites that ancestor's signatures into the
    /// viewer's terms. Guards against malformed cyclic edges even though
    /// bases are acyclic by construction.
    pub fn base_chain(&self, ty: TypeDefId) -> Vec<(TypeDefId, Vec<TypeRef>)> {
        let mut chain = Vec::new();
        let mut visited = FxHashSet::default();
        visited.insert(ty);
        let mut current = self.type_def(ty).base.clone();
        let mut outer: Option<Vec<TypeRef>> = None;
        while let Some(edge) = current {
            if !visited.insert(edge.base) {
                break;
            }
            let composed = match &outer {
                Some(args) => compose_substitution(args, &edge.args),
                None => edge.args.clone(),
            };
            chain.push((edge.base, composed.clone()));
            outer = Some(composed);
            current = self.type_def(edge.base).base.clone();
        }
        chain
    }

    /// Members of `ty` with the given name that are visible to a derived
    /// type declared in `viewer`.
    pub fn accessible_members_named(
        &self,
        ty: TypeDefId,
        name: Atom,
        viewer: AssemblyId,
    ) -> Vec<MemberId> {
        let declaring_assembly = self.type_def(ty).assembly;
        self.members_of(ty)
            .iter()
            .copied()
            .filter(|&id| {
                let m = self.member(id);
                m.name() == name
                    && is_accessible_for_inheritance(
                        self,
                        m.accessibility(),
                        declaring_assembly,
                        viewer,
                    )
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Display helpers for diagnostics
    // ------------------------------------------------------------------

    pub fn display_type_ref(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Named { def, args } => {
                let name = self.interner.resolve(self.type_def(*def).name);
                if args.is_empty() {
                    name.to_string()
                } else {
                    let args: Vec<String> =
                        args.iter().map(|a| self.display_type_ref(a)).collect();
                    format!("{name}<{}>", args.join(", "))
                }
            }
            TypeRef::Param { index, .. } => type_param_name(*index),
            TypeRef::Array { element } => format!("{}[]", self.display_type_ref(element)),
            TypeRef::Error => "?".to_string(),
        }
    }

    /// "Type.Member(params)" rendering used in diagnostic messages.
    pub fn display_member(&self, id: MemberId) -> String {
        let m = self.member(id);
        let type_name = self.interner.resolve(self.type_def(m.declaring_type).name);
        let member_name = self.interner.resolve(m.name());
        match m.kind() {
            MemberKind::Method => {
                let arity = if m.signature.generic_arity > 0 {
                    let names: Vec<String> = (0..m.signature.generic_arity)
                        .map(type_param_name)
                        .collect();
                    format!("<{}>", names.join(", "))
                } else {
                    String::new()
                };
                let params: Vec<String> = m
                    .signature
                    .params
                    .iter()
                    .map(|p| {
                        let prefix = match p.ref_kind {
                            RefKind::None => "",
                            RefKind::Ref => "ref ",
                            RefKind::Out => "out ",
                            RefKind::In => "in ",
                        };
                        format!("{prefix}{}", self.display_type_ref(&p.ty))
                    })
                    .collect();
                format!("{type_name}.{member_name}{arity}({})", params.join(", "))
            }
            _ => format!("{type_name}.{member_name}"),
        }
    }

    pub fn display_accessor(&self, container: MemberId, kind: AccessorKind) -> String {
        format!("{}.{}", self.display_member(container), kind.describe())
    }

    /// Source file of a member's declaring type, for diagnostic locations.
    pub fn member_file(&self, id: MemberId) -> &str {
        let ty = self.member(id).declaring_type;
        self.interner.resolve(self.type_def(ty).file)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

fn type_param_name(index: u16) -> String {
    match index {
        0 => "T".to_string(),
        1 => "U".to_string(),
        2 => "V".to_string(),
        3 => "W".to_string(),
        n => format!("T{n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_default_to_object_base() {
        let mut table = SymbolTable::new();
        let asm = table.add_assembly("app");
        let ty = table.add_type(asm, "Widget", TypeDefKind::Class);
        let chain = table.base_chain(ty);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].0, table.well_known.object);
    }

    #[test]
    fn test_base_chain_composes_substitutions() {
        let mut table = SymbolTable::new();
        let asm = table.add_assembly("app");
        // Base<T> : object;  Mid<T> : Base<T[]>;  Derived : Mid<int>
        let base = table.add_type(asm, "Base", TypeDefKind::Class);
        table.set_arity(base, 1);
        let mid = table.add_type(asm, "Mid", TypeDefKind::Class);
        table.set_arity(mid, 1);
        table.set_base(mid, base, vec![TypeRef::array(TypeRef::type_param(0))]);
        let derived = table.add_type(asm, "Derived", TypeDefKind::Class);
        let int = TypeRef::named(table.well_known.int32);
        table.set_base(derived, mid, vec![int.clone()]);

        let chain = table.base_chain(derived);
        assert_eq!(chain[0].0, mid);
        assert!(chain[0].1[0].matches(&int));
        assert_eq!(chain[1].0, base);
        assert!(chain[1].1[0].matches(&TypeRef::array(int)));
        assert_eq!(chain[2].0, table.well_known.object);
    }

    #[test]
    fn test_accessor_signature_derivation() {
        let mut table = SymbolTable::new();
        let asm = table.add_assembly("app");
        let ty = table.add_type(asm, "Holder", TypeDefKind::Class);
        let name = table.interner.intern("Value");
        let int = TypeRef::named(table.well_known.int32);
        let prop = table.add_member(
            ty,
            MemberSignature::property(name, int.clone()),
            MemberModifiers::VIRTUAL,
            Span::empty(),
        );
        table.add_accessors(
            prop,
            &[
                AccessorSpec::new(AccessorKind::Get),
                AccessorSpec::new(AccessorKind::Set),
            ],
        );

        let getter = table.member(table.member(prop).accessor(AccessorKind::Get).unwrap());
        assert!(getter.signature.params.is_empty());
        assert!(getter.signature.return_type.matches(&int));
        assert_eq!(table.interner.resolve(getter.name()), "get_Value");

        let setter = table.member(table.member(prop).accessor(AccessorKind::Set).unwrap());
        assert_eq!(setter.signature.params.len(), 1);
        assert!(setter.signature.params[0].ty.matches(&int));
        assert!(
            setter
                .signature
                .return_type
                .matches(&TypeRef::named(table.well_known.void_type))
        );
    }

    #[test]
    fn test_accessible_members_skip_inaccessible() {
        let mut table = SymbolTable::new();
        let lib = table.add_assembly("lib");
        let app = table.add_assembly("app");
        let ty = table.add_type(lib, "Base", TypeDefKind::Class);
        let name = table.interner.intern("M");
        let void = TypeRef::named(table.well_known.void_type);
        table.add_member(
            ty,
            MemberSignature::method(name, Vec::new(), void.clone())
                .with_accessibility(Accessibility::Internal),
            MemberModifiers::VIRTUAL,
            Span::empty(),
        );
        table.add_member(
            ty,
            MemberSignature::method(name, vec![], void).with_accessibility(Accessibility::Public),
            MemberModifiers::empty(),
            Span::empty(),
        );

        let from_other_assembly = table.accessible_members_named(ty, name, app);
        assert_eq!(from_other_assembly.len(), 1);
        let from_same_assembly = table.accessible_members_named(ty, name, lib);
        assert_eq!(from_same_assembly.len(), 2);
    }
}
