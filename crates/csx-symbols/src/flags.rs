//! Declared-modifier and binary-attribute flag sets.

use bitflags::bitflags;

bitflags! {
    /// Source-level modifiers as declared on a member.
    ///
    /// Imported (metadata) members carry [`BinaryAttributes`] instead; the
    /// table maps those back onto the closest declared shape when a member
    /// is loaded.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MemberModifiers: u16 {
        const VIRTUAL  = 1 << 0;
        const ABSTRACT = 1 << 1;
        const SEALED   = 1 << 2;
        const OVERRIDE = 1 << 3;
        const NEW      = 1 << 4;
        const STATIC   = 1 << 5;
        const EXTERN   = 1 << 6;
    }
}

bitflags! {
    /// Binary object-model attributes, both as persisted on imported
    /// members and as synthesized for emission.
    ///
    /// `STRICT` restricts overriding of a virtual member to the defining
    /// assembly; the vtable slot mechanism itself knows nothing about
    /// source accessibility.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BinaryAttributes: u8 {
        const VIRTUAL  = 1 << 0;
        const NEW_SLOT = 1 << 1;
        const FINAL    = 1 << 2;
        const STRICT   = 1 << 3;
    }
}

impl MemberModifiers {
    /// Declared with any modifier that makes the member participate in
    /// virtual dispatch (virtual, abstract, or override).
    pub fn is_virtual_or_abstract(self) -> bool {
        self.intersects(Self::VIRTUAL | Self::ABSTRACT | Self::OVERRIDE)
    }

    pub fn declares_override(self) -> bool {
        self.contains(Self::OVERRIDE)
    }

    pub fn declares_new(self) -> bool {
        self.contains(Self::NEW)
    }

    pub fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    pub fn is_sealed(self) -> bool {
        self.contains(Self::SEALED)
    }

    pub fn is_abstract(self) -> bool {
        self.contains(Self::ABSTRACT)
    }
}
