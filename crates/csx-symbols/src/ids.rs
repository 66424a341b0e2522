//! Arena handles for assemblies, type definitions, and members.
//!
//! Handles are plain u32 newtypes. Index 0 is reserved as an invalid
//! sentinel so an uninitialized handle can never alias a real entry.

use serde::Serialize;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name(pub u32);

        impl $name {
            /// Sentinel value for an invalid handle.
            pub const INVALID: Self = Self(0);

            /// First valid handle value.
            pub const FIRST_VALID: u32 = 1;

            /// Check if this handle is valid.
            pub const fn is_valid(self) -> bool {
                self.0 >= Self::FIRST_VALID
            }

            /// Arena slot for this handle.
            pub(crate) const fn slot(self) -> usize {
                (self.0 - 1) as usize
            }
        }
    };
}

define_id! {
    /// Handle to an assembly in the symbol table.
    AssemblyId
}

define_id! {
    /// Handle to a type definition in the symbol table.
    TypeDefId
}

define_id! {
    /// Handle to a member (method, property, event, field, nested type
    /// marker, or accessor) in the symbol table.
    MemberId
}
