//! # famgraph — Collaborative Kinship Graph Engine
//!
//! A family tree as a property graph: persons are nodes, familial relations
//! are directed, typed edges, and every pair of persons resolves to a
//! natural-language kinship title computed from the path between them.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphStore` is the contract between the engine and storage
//! 2. **Mirrored edges**: every relation is a reciprocal pair, maintained as one logical write
//! 3. **Closed vocabulary**: the ten relation kinds are an enum, matched exhaustively
//! 4. **Derivation is idempotent**: re-running closure on an unchanged graph writes nothing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use famgraph::{FamilyGraph, FamilyId, Gender, PersonSpec, RelationKind};
//!
//! # async fn example() -> famgraph::Result<()> {
//! let graph = FamilyGraph::open_memory().await?;
//! let family = FamilyId(1);
//!
//! // Found the family, then add relatives anchored to existing members.
//! let me = graph.add_founder(family, PersonSpec::new("立安", Gender::Male)).await?;
//! let father = graph
//!     .add_relative(family, PersonSpec::new("建国", Gender::Male), me.id, RelationKind::Father)
//!     .await?;
//! let grandpa = graph
//!     .add_relative(family, PersonSpec::new("永福", Gender::Male), father.id, RelationKind::Father)
//!     .await?;
//!
//! // Titles follow the shortest relation chain.
//! assert_eq!(graph.compute_title(family, me.id, grandpa.id, None).await?, "祖父");
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage
//!
//! | Store | Description |
//! |-------|-------------|
//! | Memory | In-memory graph for testing/embedding (default) |
//! | custom | Anything implementing [`GraphStore`] |

// ============================================================================
// Modules
// ============================================================================

pub mod closure;
pub mod model;
pub mod reciprocity;
pub mod snapshot;
pub mod store;
pub mod title;
pub mod vocab;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    EdgeId, FamilyId, Gender, Person, PersonId, PersonSpec, PersonUpdate, RelationEdge,
};

// ============================================================================
// Re-exports: Vocabulary
// ============================================================================

pub use vocab::{RelationCategory, RelationKind};

// ============================================================================
// Re-exports: Storage
// ============================================================================

pub use store::{EdgeFilter, GraphStore, MemoryStore};

// ============================================================================
// Re-exports: Reciprocity and titles
// ============================================================================

pub use reciprocity::{DeletedPair, RelationPair};
pub use snapshot::FamilySnapshot;
pub use title::{
    OverrideMap, OverrideMapId, OverrideMapSpec, TitleCatalog, TitleGraph, TitleKey,
    FALLBACK_TITLE, MAX_TITLE_DEPTH, SELF_TITLE,
};

// ============================================================================
// Top-level FamilyGraph handle
// ============================================================================

/// The primary entry point. A `FamilyGraph` wraps a store and provides
/// person lifecycle, relation maintenance, and title resolution.
pub struct FamilyGraph<S: GraphStore> {
    store: S,
    catalog: TitleCatalog,
}

impl<S: GraphStore> FamilyGraph<S> {
    /// Create a FamilyGraph over the given store, with the default title
    /// catalog.
    pub fn with_store(store: S) -> Self {
        Self { store, catalog: TitleCatalog::default() }
    }

    /// Replace the title catalog (e.g. a trimmed one in tests).
    pub fn with_catalog(mut self, catalog: TitleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Access the underlying store (for advanced use).
    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================================================================
    // Person lifecycle
    // ========================================================================

    /// Add a family's first person, at generation 0.
    pub async fn add_founder(&self, family: FamilyId, spec: PersonSpec) -> Result<Person> {
        self.store.insert_person(family, spec, 0).await
    }

    /// Add a person as "`spec` is `kind` of `reference`".
    ///
    /// The new person's generation is seeded from the reference's, the
    /// reciprocal edge pair is written, and closure derivation runs against
    /// the reference's neighborhood.
    pub async fn add_relative(
        &self,
        family: FamilyId,
        spec: PersonSpec,
        reference: PersonId,
        kind: RelationKind,
    ) -> Result<Person> {
        let reference = self
            .store
            .get_person(family, reference)
            .await?
            .ok_or(Error::PersonNotFound { family, person: reference })?;

        let generation = reference.generation + kind.generation_delta();
        let person = self.store.insert_person(family, spec, generation).await?;

        reciprocity::create_pair(&self.store, family, person.id, reference.id, kind).await?;
        closure::derive(&self.store, family, &person, &reference, kind).await?;
        Ok(person)
    }

    pub async fn person(&self, family: FamilyId, id: PersonId) -> Result<Person> {
        self.store
            .get_person(family, id)
            .await?
            .ok_or(Error::PersonNotFound { family, person: id })
    }

    pub async fn persons(&self, family: FamilyId) -> Result<Vec<Person>> {
        self.store.persons(family).await
    }

    /// Edit shared fields. Gender edits feed straight into reciprocity and
    /// title computation on later reads; existing edges are not rewritten.
    pub async fn update_person(
        &self,
        family: FamilyId,
        id: PersonId,
        update: PersonUpdate,
    ) -> Result<Person> {
        self.store.update_person(family, id, update).await
    }

    /// Remove a person and every edge touching them. Returns the number of
    /// edges removed.
    pub async fn remove_person(&self, family: FamilyId, id: PersonId) -> Result<usize> {
        let removed = self.store.delete_edges_touching(family, id).await?;
        if !self.store.delete_person(family, id).await? {
            return Err(Error::PersonNotFound { family, person: id });
        }
        Ok(removed)
    }

    // ========================================================================
    // Relations
    // ========================================================================

    /// Declare "`from` is `kind` of `to`" between two existing persons.
    ///
    /// Writes the reciprocal pair, then runs closure with `to` as the
    /// reference anchor.
    pub async fn create_relation(
        &self,
        family: FamilyId,
        from: PersonId,
        to: PersonId,
        kind: RelationKind,
    ) -> Result<RelationPair> {
        let pair = reciprocity::create_pair(&self.store, family, from, to, kind).await?;
        let subject = self.person(family, from).await?;
        let reference = self.person(family, to).await?;
        closure::derive(&self.store, family, &subject, &reference, kind).await?;
        Ok(pair)
    }

    /// Delete a relation pair, addressed by either of its edges.
    pub async fn delete_relation(&self, family: FamilyId, edge: EdgeId) -> Result<DeletedPair> {
        reciprocity::delete_pair(&self.store, family, edge).await
    }

    pub async fn edges(&self, family: FamilyId) -> Result<Vec<RelationEdge>> {
        self.store.edges(family).await
    }

    // ========================================================================
    // Titles
    // ========================================================================

    /// Resolve the title `ego` uses for `target`.
    ///
    /// A missing or deleted override map degrades silently to the static
    /// catalog; an unreachable target resolves to the fallback title, never
    /// an error.
    pub async fn compute_title(
        &self,
        family: FamilyId,
        ego: PersonId,
        target: PersonId,
        overrides: Option<OverrideMapId>,
    ) -> Result<String> {
        self.person(family, target).await?;
        if ego == target {
            return Ok(SELF_TITLE.to_owned());
        }

        let overrides = match overrides {
            Some(id) => self.store.get_override_map(family, id).await?,
            None => None,
        };

        let persons = self.store.persons(family).await?;
        let edges = self.store.edges(family).await?;
        let graph = TitleGraph::from_records(&persons, &edges);
        Ok(graph.title(ego, target, &self.catalog, overrides.as_ref()))
    }

    // ========================================================================
    // Override maps
    // ========================================================================

    pub async fn create_override_map(
        &self,
        family: FamilyId,
        spec: OverrideMapSpec,
    ) -> Result<OverrideMap> {
        spec.validate()?;
        self.store.insert_override_map(family, spec).await
    }

    pub async fn override_maps(&self, family: FamilyId) -> Result<Vec<OverrideMap>> {
        self.store.override_maps(family).await
    }

    /// Delete an override map. Returns true if it existed; members who had
    /// adopted it fall back to the static catalog.
    pub async fn delete_override_map(
        &self,
        family: FamilyId,
        id: OverrideMapId,
    ) -> Result<bool> {
        self.store.delete_override_map(family, id).await
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Point-in-time copy of a family's graph, with per-person titles when a
    /// viewer is given.
    pub async fn snapshot(
        &self,
        family: FamilyId,
        viewer: Option<PersonId>,
        overrides: Option<OverrideMapId>,
    ) -> Result<FamilySnapshot> {
        let overrides = match overrides {
            Some(id) => self.store.get_override_map(family, id).await?,
            None => None,
        };
        let persons = self.store.persons(family).await?;
        let edges = self.store.edges(family).await?;
        Ok(FamilySnapshot::build(
            family,
            persons,
            edges,
            viewer,
            &self.catalog,
            overrides.as_ref(),
        ))
    }
}

/// In-memory graph for testing and embedding.
impl FamilyGraph<MemoryStore> {
    pub async fn open_memory() -> Result<Self> {
        Ok(Self::with_store(MemoryStore::new()))
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown relation kind: {0}")]
    UnknownRelationKind(String),

    #[error("a person cannot relate to themselves: {person}")]
    SelfRelation { person: PersonId },

    #[error("person {person} not found in family {family}")]
    PersonNotFound { family: FamilyId, person: PersonId },

    #[error("edge {edge} not found in family {family}")]
    EdgeNotFound { family: FamilyId, edge: EdgeId },

    #[error("invalid override map: {0}")]
    InvalidOverrideMap(String),

    #[error("invalid title key: {0}")]
    InvalidTitleKey(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
