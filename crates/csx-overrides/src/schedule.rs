//! Base-before-derived scheduling over the whole symbol table.
//!
//! A derived type's resolution needs its base's complete member list, so
//! types are grouped by inheritance depth and processed level by level;
//! within a level all types are unrelated (no type can derive from a type
//! at its own depth) and resolve in parallel over the shared immutable
//! table. Each type's result is written exactly once, so no locking beyond
//! the level ordering is required. Imported assemblies' metadata is
//! already finalized and is never re-resolved.

use crate::outcome::{MemberAttributes, MemberResolution, ResolutionOutcome};
use crate::resolve::{OverrideResolver, TypeResolution};
use csx_common::diagnostics::Diagnostic;
use csx_symbols::{MemberId, SymbolTable, TypeDefId};
use dashmap::DashMap;
use indexmap::IndexMap;
use rayon::prelude::*;

/// All member resolutions and diagnostics for one compilation, with
/// deterministic declaration order regardless of parallel execution.
pub struct ResolutionSet {
    members: IndexMap<MemberId, MemberResolution>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolutionSet {
    pub fn member(&self, id: MemberId) -> Option<&MemberResolution> {
        self.members.get(&id)
    }

    pub fn outcome(&self, id: MemberId) -> Option<&ResolutionOutcome> {
        self.members.get(&id).map(|r| &r.outcome)
    }

    pub fn attributes(&self, id: MemberId) -> Option<&MemberAttributes> {
        self.members.get(&id).map(|r| &r.attributes)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemberResolution> {
        self.members.values()
    }

    pub fn diagnostics_with_code(&self, code: u32) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == csx_common::DiagnosticCategory::Error)
            .count()
    }
}

/// Resolve every source type in the table.
pub fn resolve_all(table: &SymbolTable) -> ResolutionSet {
    let resolver = OverrideResolver::new(table);

    // Group source types by chain depth; bases always land in an earlier
    // level than anything derived from them, including across assembly
    // boundaries.
    let mut levels: Vec<Vec<TypeDefId>> = Vec::new();
    for ty in table.type_ids() {
        if table.assembly(table.type_def(ty).assembly).is_metadata {
            continue;
        }
        let depth = table.base_chain(ty).len();
        if levels.len() <= depth {
            levels.resize_with(depth + 1, Vec::new);
        }
        levels[depth].push(ty);
    }

    let results: DashMap<TypeDefId, TypeResolution> = DashMap::new();
    for (depth, level) in levels.iter().enumerate() {
        tracing::debug!("resolving {} types at depth {depth}", level.len());
        level.par_iter().for_each(|&ty| {
            let resolution = resolver.resolve_type(ty);
            let previous = results.insert(ty, resolution);
            debug_assert!(previous.is_none(), "type resolved twice");
        });
    }

    // Flatten in TypeDefId order so output order is declaration order, not
    // completion order.
    let mut members = IndexMap::new();
    let mut diagnostics = Vec::new();
    for ty in table.type_ids() {
        if let Some((_, resolution)) = results.remove(&ty) {
            for member_resolution in resolution.members {
                members.insert(member_resolution.member, member_resolution);
            }
            diagnostics.extend(resolution.diagnostics);
        }
    }

    ResolutionSet {
        members,
        diagnostics,
    }
}

#[cfg(test)]
#[path = "tests/schedule_tests.rs"]
mod tests;
