//! Member override and hiding resolution for the csx compiler.
//!
//! For every member declared in a type, this crate decides whether it
//! overrides an inherited virtual/abstract slot, hides an inherited
//! member, is unrelated, or is erroneous, and derives the binary
//! attributes the member must carry (virtual, new-slot, final, strict)
//! plus diagnostics. The language matches members by name and signature
//! under generic substitution; the binary object model matches vtable
//! slots by raw signature alone, and reconciling the two is where all the
//! corner cases live.
//!
//! Pipeline per declared member:
//!
//! Candidate Collector → Signature Matcher → Resolution Engine →
//! Attribute Synthesizer / Diagnostic Emitter
//!
//! Resolution is a pure computation over the post-declaration
//! [`csx_symbols::SymbolTable`]; [`resolve_all`] schedules it
//! base-before-derived and runs unrelated hierarchies in parallel.

pub mod collect;
pub use collect::{Candidate, CandidateCollector, CandidateSet};

pub mod matcher;
pub use matcher::{
    hides, hides_by_name_alone, override_equivalent, params_equivalent, returns_match,
    runtime_collision,
};

pub mod outcome;
pub use outcome::{
    AccessorResolution, EmittedModifiers, MemberAttributes, MemberResolution, ResolutionError,
    ResolutionOutcome, SynthesizedAccessor,
};

pub mod resolve;
pub use resolve::{OverrideResolver, TypeResolution};

pub mod synthesize;
pub use synthesize::AttributeSynthesizer;

pub mod emit;
pub use emit::DiagnosticEmitter;

pub mod schedule;
pub use schedule::{ResolutionSet, resolve_all};
