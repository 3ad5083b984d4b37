//! Mirrored edge-pair maintenance.
//!
//! Every stored relation is a pair of directed edges: the forward edge
//! `(from, to, kind)` reading "from is kind of to", and its mirror
//! `(to, from, kind')` where `kind'` is the reciprocal of `kind` keyed by
//! the mirror source's gender. All writes go through [`create_pair`] and
//! [`delete_pair`] so the pair invariant holds for every edge in a family.

use tracing::{debug, warn};

use crate::model::{EdgeId, FamilyId, Person, PersonId, RelationEdge};
use crate::store::GraphStore;
use crate::vocab::RelationKind;
use crate::{Error, Result};

/// A mirrored pair of edges, as stored.
#[derive(Debug, Clone)]
pub struct RelationPair {
    pub forward: RelationEdge,
    pub mirror: RelationEdge,
}

/// Outcome of deleting a pair. `mirror` is `None` when the mirror edge was
/// already missing, which indicates earlier corruption but does not fail the
/// delete.
#[derive(Debug, Clone, Copy)]
pub struct DeletedPair {
    pub forward: EdgeId,
    pub mirror: Option<EdgeId>,
}

async fn require_person<S: GraphStore>(
    store: &S,
    family: FamilyId,
    id: PersonId,
) -> Result<Person> {
    store
        .get_person(family, id)
        .await?
        .ok_or(Error::PersonNotFound { family, person: id })
}

/// Store the pair for "`from` is `kind` of `to`".
///
/// Idempotent per ordered endpoint pair: if a forward or mirror edge already
/// connects the pair in that direction, it is kept as is and no duplicate is
/// written.
pub async fn create_pair<S: GraphStore>(
    store: &S,
    family: FamilyId,
    from: PersonId,
    to: PersonId,
    kind: RelationKind,
) -> Result<RelationPair> {
    if from == to {
        return Err(Error::SelfRelation { person: from });
    }
    require_person(store, family, from).await?;
    let to_person = require_person(store, family, to).await?;

    let forward = match store.edge_between(family, from, to).await? {
        Some(existing) => existing,
        None => store.insert_edge(family, from, to, kind).await?,
    };

    let mirror_kind = kind.reciprocal(to_person.gender);
    let mirror = match store.edge_between(family, to, from).await? {
        Some(existing) => existing,
        None => store.insert_edge(family, to, from, mirror_kind).await?,
    };

    debug!(
        %family, %from, %to,
        kind = %forward.kind, mirror = %mirror.kind,
        "stored relation pair"
    );
    Ok(RelationPair { forward, mirror })
}

/// Delete the pair that contains `edge`, addressed by either side.
pub async fn delete_pair<S: GraphStore>(
    store: &S,
    family: FamilyId,
    edge: EdgeId,
) -> Result<DeletedPair> {
    let forward = store
        .get_edge(family, edge)
        .await?
        .ok_or(Error::EdgeNotFound { family, edge })?;

    let mirror = store.edge_between(family, forward.to, forward.from).await?;

    store.delete_edge(family, forward.id).await?;
    let mirror_id = match mirror {
        Some(mirror) => {
            store.delete_edge(family, mirror.id).await?;
            Some(mirror.id)
        }
        None => {
            warn!(%family, edge = %forward.id, "relation pair had no mirror edge");
            None
        }
    };

    debug!(%family, edge = %forward.id, "deleted relation pair");
    Ok(DeletedPair { forward: forward.id, mirror: mirror_id })
}

// ============================================================================
// Tests
// ============================================================================
