//! String interner for identifier deduplication.
//!
//! Member and type names are interned into a pool and passed around as u32
//! indices (`Atom`s). Name comparisons during candidate collection become
//! integer comparisons instead of string comparisons, which matters when
//! every declared member scans every base type for same-named entries.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `Interner::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Well-known member names the resolver asks about by identity, plus the
/// special-name accessor prefixes the emitter attaches to synthesized
/// accessors. Pre-interned so lookups never miss the map.
const COMMON_STRINGS: &[&str] = &[
    "Equals",
    "GetHashCode",
    "ToString",
    "Finalize",
    "MemberwiseClone",
    "GetType",
    "Object",
    "ValueType",
    "get_",
    "set_",
    "add_",
    "remove_",
    "Item",
    "value",
];

/// String interner that deduplicates strings and returns `Atom` handles.
#[derive(Default)]
pub struct Interner {
    /// Map from string to atom index
    map: FxHashMap<Arc<str>, Atom>,
    /// Vector of all interned strings (index 0 is empty string)
    strings: Vec<Arc<str>>,
}

impl Interner {
    /// Create a new interner with the empty string pre-interned at index 0
    /// and the well-known member names preloaded.
    pub fn new() -> Self {
        let mut interner = Interner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        // Index 0 is reserved for empty/none
        let empty: Arc<str> = Arc::from("");
        interner.strings.push(empty.clone());
        interner.map.insert(empty, Atom::NONE);
        for s in COMMON_STRINGS {
            interner.intern(s);
        }
        interner
    }

    /// Intern a string, returning its `Atom` handle.
    /// If the string was already interned, returns the existing `Atom`.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Atom {
        if let Some(&atom) = self.map.get(s) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        self.strings.push(owned.clone());
        self.map.insert(owned, atom);
        atom
    }

    /// Resolve an `Atom` back to its string value.
    /// Returns the empty string if the atom is out of bounds (error recovery).
    #[inline]
    pub fn resolve(&self, atom: Atom) -> &str {
        self.strings
            .get(atom.0 as usize)
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    /// Try to resolve an `Atom`, returning None if invalid.
    #[inline]
    pub fn try_resolve(&self, atom: Atom) -> Option<&str> {
        self.strings.get(atom.0 as usize).map(|s| s.as_ref())
    }

    /// Get the number of interned strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the interner is empty (only has the preloaded entries).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1 + COMMON_STRINGS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interner_deduplication() {
        let mut interner = Interner::new();

        let a1 = interner.intern("Method");
        let a2 = interner.intern("Method");
        let a3 = interner.intern("OtherMethod");

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
        assert_eq!(interner.resolve(a1), "Method");
    }

    #[test]
    fn test_interner_none_is_empty_string() {
        let interner = Interner::new();
        assert_eq!(interner.resolve(Atom::NONE), "");
        assert!(Atom::NONE.is_none());
    }

    #[test]
    fn test_common_names_preloaded() {
        let mut interner = Interner::new();
        let before = interner.len();
        interner.intern("GetHashCode");
        interner.intern("Equals");
        assert_eq!(interner.len(), before);
    }
}
