//! # Graph Store Contract
//!
//! This is THE contract between the kinship engine and any persistence
//! layer. All operations are family-scoped CRUD over persons, relation
//! edges, and title-override maps.
//!
//! The engine assumes read-after-write consistency within a single request
//! but not across concurrent requests; there is no transaction surface:
//! the reciprocity manager and closure engine write each edge as an
//! independent store operation and recover from partial failure by
//! idempotent re-derivation.
//!
//! | Implementation | Module | Description |
//! |----------------|--------|-------------|
//! | `MemoryStore` | `memory` | In-memory reference store for testing/embedding |

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::model::{EdgeId, FamilyId, Person, PersonId, PersonSpec, PersonUpdate, RelationEdge};
use crate::title::{OverrideMap, OverrideMapId, OverrideMapSpec};
use crate::vocab::RelationKind;
use crate::Result;

// ============================================================================
// Edge predicate
// ============================================================================

/// Predicate for `find_edges`. Unset fields match everything; `kinds`
/// restricts to any of the listed kinds.
#[derive(Debug, Clone, Default)]
pub struct EdgeFilter {
    pub from: Option<PersonId>,
    pub to: Option<PersonId>,
    pub kinds: Option<Vec<RelationKind>>,
}

impl EdgeFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from(person: PersonId) -> Self {
        Self { from: Some(person), ..Self::default() }
    }

    pub fn to(person: PersonId) -> Self {
        Self { to: Some(person), ..Self::default() }
    }

    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = RelationKind>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    pub fn matches(&self, edge: &RelationEdge) -> bool {
        self.from.is_none_or(|p| edge.from == p)
            && self.to.is_none_or(|p| edge.to == p)
            && self.kinds.as_ref().is_none_or(|ks| ks.contains(&edge.kind))
    }
}

// ============================================================================
// GraphStore trait
// ============================================================================

/// The universal store contract. Any adapter that implements this trait can
/// back the kinship engine.
#[async_trait]
pub trait GraphStore: Send + Sync + 'static {
    // ========================================================================
    // Person CRUD
    // ========================================================================

    /// Persist a new person. The store assigns the id and timestamp; the
    /// caller supplies the generation number (seeded from the
    /// generation-delta table).
    async fn insert_person(
        &self,
        family: FamilyId,
        spec: PersonSpec,
        generation: i32,
    ) -> Result<Person>;

    /// Get a person by id within a family. Returns None if the person does
    /// not exist or belongs to a different family.
    async fn get_person(&self, family: FamilyId, id: PersonId) -> Result<Option<Person>>;

    /// Apply a shared-field edit. Returns the updated person.
    async fn update_person(
        &self,
        family: FamilyId,
        id: PersonId,
        update: PersonUpdate,
    ) -> Result<Person>;

    /// Remove a person record. Returns true if it existed. Does NOT touch
    /// edges; cascade deletion is the engine's job.
    async fn delete_person(&self, family: FamilyId, id: PersonId) -> Result<bool>;

    /// All persons of a family, in insertion order.
    async fn persons(&self, family: FamilyId) -> Result<Vec<Person>>;

    // ========================================================================
    // Edge CRUD
    // ========================================================================

    /// Persist a directed relation edge. The store assigns the id and
    /// timestamp. The store does not enforce pair invariants; the
    /// reciprocity manager owns those.
    async fn insert_edge(
        &self,
        family: FamilyId,
        from: PersonId,
        to: PersonId,
        kind: RelationKind,
    ) -> Result<RelationEdge>;

    /// Get an edge by id within a family.
    async fn get_edge(&self, family: FamilyId, id: EdgeId) -> Result<Option<RelationEdge>>;

    /// Delete an edge. Returns true if it existed.
    async fn delete_edge(&self, family: FamilyId, id: EdgeId) -> Result<bool>;

    /// All edges of a family matching the filter, in insertion order.
    async fn find_edges(&self, family: FamilyId, filter: EdgeFilter) -> Result<Vec<RelationEdge>>;

    /// All edges of a family.
    async fn edges(&self, family: FamilyId) -> Result<Vec<RelationEdge>> {
        self.find_edges(family, EdgeFilter::all()).await
    }

    /// The edge for an ordered pair, if present. At most one exists per
    /// ordered pair once the reciprocity manager is the only writer.
    async fn edge_between(
        &self,
        family: FamilyId,
        from: PersonId,
        to: PersonId,
    ) -> Result<Option<RelationEdge>> {
        let mut found = self
            .find_edges(family, EdgeFilter { from: Some(from), to: Some(to), kinds: None })
            .await?;
        Ok(if found.is_empty() { None } else { Some(found.remove(0)) })
    }

    /// Delete every edge with the given person as either endpoint. Returns
    /// the number of edges removed. Used for cascading person deletion.
    async fn delete_edges_touching(&self, family: FamilyId, person: PersonId) -> Result<usize> {
        let mut removed = 0;
        for edge in self.edges(family).await? {
            if edge.from == person || edge.to == person {
                if self.delete_edge(family, edge.id).await? {
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }

    // ========================================================================
    // Title-override maps
    // ========================================================================

    /// Persist a member-authored override map. The store assigns the id.
    async fn insert_override_map(
        &self,
        family: FamilyId,
        spec: OverrideMapSpec,
    ) -> Result<OverrideMap>;

    /// Get an override map by id within a family. A deleted or never-created
    /// map resolves to None; callers degrade to the static catalog.
    async fn get_override_map(
        &self,
        family: FamilyId,
        id: OverrideMapId,
    ) -> Result<Option<OverrideMap>>;

    /// All override maps of a family, in insertion order.
    async fn override_maps(&self, family: FamilyId) -> Result<Vec<OverrideMap>>;

    /// Delete an override map. Returns true if it existed. Members who had
    /// adopted it fall back to the static catalog on their next title query.
    async fn delete_override_map(&self, family: FamilyId, id: OverrideMapId) -> Result<bool>;
}
