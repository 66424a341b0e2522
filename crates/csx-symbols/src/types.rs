//! Structural type references with generic substitution.
//!
//! The resolver only ever needs two operations on types: structural
//! equality and substitution of an enclosing type's generic arguments, so
//! `TypeRef` is a small tree rather than an interned shape store. Type
//! parameters are identified by position, never by name; a method's own
//! type parameters are equated positionally by the signature matcher and
//! are never substituted here.

use crate::ids::TypeDefId;
use serde::Serialize;

/// Which declaration a positional type parameter belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeParamScope {
    /// A type parameter of the enclosing type. Resolved through the
    /// hierarchy edge's substitution when signatures travel down a chain.
    Type,
    /// A type parameter of the member itself (`Method<T, U>`).
    Method,
}

/// A structural reference to a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeRef {
    /// A named type, possibly instantiated: `List<int>`, `object`.
    Named { def: TypeDefId, args: Vec<TypeRef> },
    /// A positional type parameter.
    Param { scope: TypeParamScope, index: u16 },
    /// A single-dimensional array.
    Array { element: Box<TypeRef> },
    /// An unresolvable metadata reference. Never equal to anything,
    /// including itself, for matching purposes; see `TypeRef::matches`.
    Error,
}

impl TypeRef {
    pub fn named(def: TypeDefId) -> Self {
        Self::Named {
            def,
            args: Vec::new(),
        }
    }

    pub fn generic(def: TypeDefId, args: Vec<TypeRef>) -> Self {
        Self::Named { def, args }
    }

    pub fn type_param(index: u16) -> Self {
        Self::Param {
            scope: TypeParamScope::Type,
            index,
        }
    }

    pub fn method_param(index: u16) -> Self {
        Self::Param {
            scope: TypeParamScope::Method,
            index,
        }
    }

    pub fn array(element: TypeRef) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    /// Replace the enclosing type's positional parameters with `type_args`.
    /// Method-scoped parameters pass through untouched. An out-of-range
    /// index degrades to `Error` rather than panicking; a malformed edge
    /// must only poison the member it reaches.
    pub fn substitute(&self, type_args: &[TypeRef]) -> TypeRef {
        match self {
            TypeRef::Named { def, args } => TypeRef::Named {
                def: *def,
                args: args.iter().map(|a| a.substitute(type_args)).collect(),
            },
            TypeRef::Param {
                scope: TypeParamScope::Type,
                index,
            } => type_args
                .get(*index as usize)
                .cloned()
                .unwrap_or(TypeRef::Error),
            TypeRef::Param {
                scope: TypeParamScope::Method,
                ..
            } => self.clone(),
            TypeRef::Array { element } => TypeRef::Array {
                element: Box::new(element.substitute(type_args)),
            },
            TypeRef::Error => TypeRef::Error,
        }
    }

    /// Structural match for override-equivalence. `Error` never matches,
    /// so an unresolvable reference can only produce a "no relationship"
    /// answer, never a spurious override.
    pub fn matches(&self, other: &TypeRef) -> bool {
        match (self, other) {
            (TypeRef::Error, _) | (_, TypeRef::Error) => false,
            (TypeRef::Named { def: a, args: xa }, TypeRef::Named { def: b, args: xb }) => {
                a == b && xa.len() == xb.len() && xa.iter().zip(xb).all(|(x, y)| x.matches(y))
            }
            (
                TypeRef::Param {
                    scope: sa,
                    index: ia,
                },
                TypeRef::Param {
                    scope: sb,
                    index: ib,
                },
            ) => sa == sb && ia == ib,
            (TypeRef::Array { element: a }, TypeRef::Array { element: b }) => a.matches(b),
            _ => false,
        }
    }

    /// Whether this reference contains an `Error` node.
    pub fn has_error(&self) -> bool {
        match self {
            TypeRef::Error => true,
            TypeRef::Named { args, .. } => args.iter().any(TypeRef::has_error),
            TypeRef::Array { element } => element.has_error(),
            TypeRef::Param { .. } => false,
        }
    }
}

/// Compose a hierarchy edge's argument list with an outer substitution.
///
/// Walking derived → base, each edge's arguments are written in terms of
/// the type above them; composing them rewrites the next edge in terms of
/// the original (most-derived) viewer so an ancestor's signature can be
/// compared directly against the viewer's.
pub fn compose_substitution(outer: &[TypeRef], edge_args: &[TypeRef]) -> Vec<TypeRef> {
    edge_args.iter().map(|t| t.substitute(outer)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(n: u32) -> TypeDefId {
        TypeDefId(n)
    }

    #[test]
    fn test_substitute_replaces_type_params() {
        // List<T0> with T0 := int
        let list_of_t = TypeRef::generic(def(1), vec![TypeRef::type_param(0)]);
        let int = TypeRef::named(def(2));
        let substituted = list_of_t.substitute(std::slice::from_ref(&int));
        assert!(substituted.matches(&TypeRef::generic(def(1), vec![int])));
    }

    #[test]
    fn test_substitute_leaves_method_params() {
        let m0 = TypeRef::method_param(0);
        let substituted = m0.substitute(&[TypeRef::named(def(9))]);
        assert!(substituted.matches(&TypeRef::method_param(0)));
    }

    #[test]
    fn test_out_of_range_param_degrades_to_error() {
        let t1 = TypeRef::type_param(1);
        let substituted = t1.substitute(&[TypeRef::named(def(3))]);
        assert!(substituted.has_error());
        assert!(!substituted.matches(&substituted.clone()));
    }

    #[test]
    fn test_compose_substitution_through_two_edges() {
        // D : B<int>, B<T0> : C<List<T0>>; C's T0 seen from D is List<int>.
        let int = TypeRef::named(def(10));
        let edge_d_to_b = vec![int.clone()];
        let edge_b_to_c = vec![TypeRef::generic(def(20), vec![TypeRef::type_param(0)])];
        let composed = compose_substitution(&edge_d_to_b, &edge_b_to_c);
        assert_eq!(composed.len(), 1);
        assert!(composed[0].matches(&TypeRef::generic(def(20), vec![int])));
    }

    #[test]
    fn test_error_never_matches() {
        assert!(!TypeRef::Error.matches(&TypeRef::Error));
        let arr = TypeRef::array(TypeRef::Error);
        assert!(!arr.matches(&arr.clone()));
    }
}
