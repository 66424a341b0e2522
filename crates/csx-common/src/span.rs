//! Source location tracking (byte offsets).

use serde::Serialize;

/// A half-open byte range in a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub length: u32,
}

impl Span {
    pub const fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// A zero-width span at offset 0, used for members with no source
    /// location (imported metadata, synthesized accessors).
    pub const fn empty() -> Self {
        Self {
            start: 0,
            length: 0,
        }
    }

    pub const fn end(self) -> u32 {
        self.start + self.length
    }

    pub const fn is_empty(self) -> bool {
        self.length == 0
    }
}
