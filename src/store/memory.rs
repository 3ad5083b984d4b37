//! In-memory graph store.
//!
//! This is the reference implementation of `GraphStore`. It uses hash maps
//! protected by RwLock, with per-family index vectors that preserve
//! insertion order; `find_edges` and `persons` return records in the order
//! they were written, which keeps BFS neighbor iteration stable.
//!
//! ## Limitations
//!
//! - **Per-collection locks**: multi-step mutations are NOT atomic. The
//!   engine is designed for that (idempotent re-derivation), but two racing
//!   writers on the same family can interleave.
//! - **No persistence**: everything is lost on drop.
//!
//! Use this store for tests, tools, and embedding the engine in applications
//! that keep the graph elsewhere.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::model::{EdgeId, FamilyId, Person, PersonId, PersonSpec, PersonUpdate, RelationEdge};
use crate::title::{OverrideMap, OverrideMapId, OverrideMapSpec};
use crate::vocab::RelationKind;
use crate::{Error, Result};
use super::{EdgeFilter, GraphStore};

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory kinship graph storage.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

struct MemoryInner {
    persons: RwLock<HashMap<PersonId, Person>>,
    edges: RwLock<HashMap<EdgeId, RelationEdge>>,
    override_maps: RwLock<HashMap<OverrideMapId, OverrideMap>>,
    /// family → person ids in insertion order
    family_persons: RwLock<HashMap<FamilyId, Vec<PersonId>>>,
    /// family → edge ids in insertion order
    family_edges: RwLock<HashMap<FamilyId, Vec<EdgeId>>>,
    /// family → override map ids in insertion order
    family_override_maps: RwLock<HashMap<FamilyId, Vec<OverrideMapId>>>,
    next_person_id: AtomicU64,
    next_edge_id: AtomicU64,
    next_map_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                persons: RwLock::new(HashMap::new()),
                edges: RwLock::new(HashMap::new()),
                override_maps: RwLock::new(HashMap::new()),
                family_persons: RwLock::new(HashMap::new()),
                family_edges: RwLock::new(HashMap::new()),
                family_override_maps: RwLock::new(HashMap::new()),
                next_person_id: AtomicU64::new(1),
                next_edge_id: AtomicU64::new(1),
                next_map_id: AtomicU64::new(1),
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// GraphStore impl
// ============================================================================

#[async_trait]
impl GraphStore for MemoryStore {
    // ========================================================================
    // Person CRUD
    // ========================================================================

    async fn insert_person(
        &self,
        family: FamilyId,
        spec: PersonSpec,
        generation: i32,
    ) -> Result<Person> {
        let id = PersonId(self.inner.next_person_id.fetch_add(1, Ordering::Relaxed));
        let person = Person {
            id,
            family_id: family,
            name: spec.name,
            gender: spec.gender,
            generation,
            birth_year: spec.birth_year,
            is_deceased: spec.is_deceased,
            bound_member_id: spec.bound_member_id,
            created_at: Utc::now(),
        };

        self.inner.persons.write().insert(id, person.clone());
        self.inner.family_persons.write().entry(family).or_default().push(id);

        Ok(person)
    }

    async fn get_person(&self, family: FamilyId, id: PersonId) -> Result<Option<Person>> {
        Ok(self
            .inner
            .persons
            .read()
            .get(&id)
            .filter(|p| p.family_id == family)
            .cloned())
    }

    async fn update_person(
        &self,
        family: FamilyId,
        id: PersonId,
        update: PersonUpdate,
    ) -> Result<Person> {
        let mut persons = self.inner.persons.write();
        let person = persons
            .get_mut(&id)
            .filter(|p| p.family_id == family)
            .ok_or(Error::PersonNotFound { family, person: id })?;

        if let Some(name) = update.name {
            person.name = name;
        }
        if let Some(gender) = update.gender {
            person.gender = gender;
        }
        if let Some(birth_year) = update.birth_year {
            person.birth_year = birth_year;
        }
        if let Some(is_deceased) = update.is_deceased {
            person.is_deceased = is_deceased;
        }
        if let Some(bound) = update.bound_member_id {
            person.bound_member_id = bound;
        }

        Ok(person.clone())
    }

    async fn delete_person(&self, family: FamilyId, id: PersonId) -> Result<bool> {
        let mut persons = self.inner.persons.write();
        let Some(person) = persons.get(&id) else {
            return Ok(false);
        };
        if person.family_id != family {
            return Ok(false);
        }
        persons.remove(&id);
        drop(persons);

        if let Some(ids) = self.inner.family_persons.write().get_mut(&family) {
            ids.retain(|pid| *pid != id);
        }
        Ok(true)
    }

    async fn persons(&self, family: FamilyId) -> Result<Vec<Person>> {
        let index = self.inner.family_persons.read();
        let persons = self.inner.persons.read();
        let ids = index.get(&family).cloned().unwrap_or_default();
        Ok(ids.iter().filter_map(|id| persons.get(id).cloned()).collect())
    }

    // ========================================================================
    // Edge CRUD
    // ========================================================================

    async fn insert_edge(
        &self,
        family: FamilyId,
        from: PersonId,
        to: PersonId,
        kind: RelationKind,
    ) -> Result<RelationEdge> {
        // Verify both endpoints exist in this family.
        {
            let persons = self.inner.persons.read();
            for endpoint in [from, to] {
                if !persons.get(&endpoint).is_some_and(|p| p.family_id == family) {
                    return Err(Error::PersonNotFound { family, person: endpoint });
                }
            }
        }

        let id = EdgeId(self.inner.next_edge_id.fetch_add(1, Ordering::Relaxed));
        let edge = RelationEdge {
            id,
            family_id: family,
            from,
            to,
            kind,
            created_at: Utc::now(),
        };

        self.inner.edges.write().insert(id, edge.clone());
        self.inner.family_edges.write().entry(family).or_default().push(id);

        Ok(edge)
    }

    async fn get_edge(&self, family: FamilyId, id: EdgeId) -> Result<Option<RelationEdge>> {
        Ok(self
            .inner
            .edges
            .read()
            .get(&id)
            .filter(|e| e.family_id == family)
            .cloned())
    }

    async fn delete_edge(&self, family: FamilyId, id: EdgeId) -> Result<bool> {
        let mut edges = self.inner.edges.write();
        let Some(edge) = edges.get(&id) else {
            return Ok(false);
        };
        if edge.family_id != family {
            return Ok(false);
        }
        edges.remove(&id);
        drop(edges);

        if let Some(ids) = self.inner.family_edges.write().get_mut(&family) {
            ids.retain(|eid| *eid != id);
        }
        Ok(true)
    }

    async fn find_edges(&self, family: FamilyId, filter: EdgeFilter) -> Result<Vec<RelationEdge>> {
        let index = self.inner.family_edges.read();
        let edges = self.inner.edges.read();
        let ids = index.get(&family).cloned().unwrap_or_default();
        Ok(ids
            .iter()
            .filter_map(|id| edges.get(id))
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    // ========================================================================
    // Title-override maps
    // ========================================================================

    async fn insert_override_map(
        &self,
        family: FamilyId,
        spec: OverrideMapSpec,
    ) -> Result<OverrideMap> {
        let id = OverrideMapId(self.inner.next_map_id.fetch_add(1, Ordering::Relaxed));
        let map = OverrideMap {
            id,
            family_id: family,
            name: spec.name,
            author: spec.author,
            shared: spec.shared,
            entries: spec.entries,
            created_at: Utc::now(),
        };

        self.inner.override_maps.write().insert(id, map.clone());
        self.inner
            .family_override_maps
            .write()
            .entry(family)
            .or_default()
            .push(id);

        Ok(map)
    }

    async fn get_override_map(
        &self,
        family: FamilyId,
        id: OverrideMapId,
    ) -> Result<Option<OverrideMap>> {
        Ok(self
            .inner
            .override_maps
            .read()
            .get(&id)
            .filter(|m| m.family_id == family)
            .cloned())
    }

    async fn override_maps(&self, family: FamilyId) -> Result<Vec<OverrideMap>> {
        let index = self.inner.family_override_maps.read();
        let maps = self.inner.override_maps.read();
        let ids = index.get(&family).cloned().unwrap_or_default();
        Ok(ids.iter().filter_map(|id| maps.get(id).cloned()).collect())
    }

    async fn delete_override_map(&self, family: FamilyId, id: OverrideMapId) -> Result<bool> {
        let mut maps = self.inner.override_maps.write();
        let Some(map) = maps.get(&id) else {
            return Ok(false);
        };
        if map.family_id != family {
            return Ok(false);
        }
        maps.remove(&id);
        drop(maps);

        if let Some(ids) = self.inner.family_override_maps.write().get_mut(&family) {
            ids.retain(|mid| *mid != id);
        }
        Ok(true)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;

    const FAM: FamilyId = FamilyId(1);

    #[tokio::test]
    async fn test_insert_and_get_person() {
        let store = MemoryStore::new();
        let ada = store
            .insert_person(FAM, PersonSpec::new("Ada", Gender::Female), 0)
            .await
            .unwrap();

        let found = store.get_person(FAM, ada.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Ada");
        assert_eq!(found.generation, 0);

        // Wrong family scope resolves to None.
        assert!(store.get_person(FamilyId(2), ada.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_person_shared_fields() {
        let store = MemoryStore::new();
        let p = store
            .insert_person(FAM, PersonSpec::new("Lin", Gender::Male), 0)
            .await
            .unwrap();

        let updated = store
            .update_person(FAM, p.id, PersonUpdate::rename("Lin Wei"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Lin Wei");
        assert_eq!(updated.generation, 0);
    }

    #[tokio::test]
    async fn test_edge_requires_existing_endpoints() {
        let store = MemoryStore::new();
        let a = store
            .insert_person(FAM, PersonSpec::new("A", Gender::Male), 0)
            .await
            .unwrap();

        let err = store
            .insert_edge(FAM, a.id, PersonId(999), RelationKind::Father)
            .await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn test_find_edges_filters() {
        let store = MemoryStore::new();
        let a = store.insert_person(FAM, PersonSpec::new("A", Gender::Male), 0).await.unwrap();
        let b = store.insert_person(FAM, PersonSpec::new("B", Gender::Male), 1).await.unwrap();
        let c = store.insert_person(FAM, PersonSpec::new("C", Gender::Female), 1).await.unwrap();

        store.insert_edge(FAM, a.id, b.id, RelationKind::Father).await.unwrap();
        store.insert_edge(FAM, b.id, a.id, RelationKind::Son).await.unwrap();
        store.insert_edge(FAM, a.id, c.id, RelationKind::Father).await.unwrap();

        let from_a = store.find_edges(FAM, EdgeFilter::from(a.id)).await.unwrap();
        assert_eq!(from_a.len(), 2);

        let fathers_of_b = store
            .find_edges(FAM, EdgeFilter::to(b.id).with_kinds([RelationKind::Father, RelationKind::Mother]))
            .await
            .unwrap();
        assert_eq!(fathers_of_b.len(), 1);
        assert_eq!(fathers_of_b[0].from, a.id);

        let pair = store.edge_between(FAM, b.id, a.id).await.unwrap().unwrap();
        assert_eq!(pair.kind, RelationKind::Son);
    }

    #[tokio::test]
    async fn test_delete_edges_touching() {
        let store = MemoryStore::new();
        let a = store.insert_person(FAM, PersonSpec::new("A", Gender::Male), 0).await.unwrap();
        let b = store.insert_person(FAM, PersonSpec::new("B", Gender::Male), 1).await.unwrap();
        let c = store.insert_person(FAM, PersonSpec::new("C", Gender::Female), 1).await.unwrap();

        store.insert_edge(FAM, a.id, b.id, RelationKind::Father).await.unwrap();
        store.insert_edge(FAM, b.id, a.id, RelationKind::Son).await.unwrap();
        store.insert_edge(FAM, b.id, c.id, RelationKind::OlderBrother).await.unwrap();
        store.insert_edge(FAM, c.id, b.id, RelationKind::YoungerSister).await.unwrap();

        let removed = store.delete_edges_touching(FAM, b.id).await.unwrap();
        assert_eq!(removed, 4);
        assert!(store.edges(FAM).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_override_map_crud() {
        let store = MemoryStore::new();
        let spec = OverrideMapSpec::new("奶奶家叫法", "member-1");
        let map = store.insert_override_map(FAM, spec).await.unwrap();

        assert!(store.get_override_map(FAM, map.id).await.unwrap().is_some());
        // Family-scoped: invisible from another family.
        assert!(store.get_override_map(FamilyId(7), map.id).await.unwrap().is_none());

        assert!(store.delete_override_map(FAM, map.id).await.unwrap());
        assert!(store.get_override_map(FAM, map.id).await.unwrap().is_none());
    }
}
