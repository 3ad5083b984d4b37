//! RelationEdge — a directed, typed edge in the family graph.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vocab::RelationKind;
use super::{FamilyId, PersonId};

/// Opaque edge identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed relation edge. Semantics: *"`from` is `kind` of `to`."*
///
/// Edges exist only in reciprocal pairs: every stored edge has a mirror with
/// swapped endpoints whose kind is the reciprocal of this one, keyed by the
/// gender of the mirror's source. Edges are never mutated in place; a
/// changed relation is delete-then-recreate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEdge {
    pub id: EdgeId,
    pub family_id: FamilyId,
    pub from: PersonId,
    pub to: PersonId,
    pub kind: RelationKind,
    pub created_at: DateTime<Utc>,
}

impl RelationEdge {
    /// The "other" end of the edge from the given person.
    pub fn other_endpoint(&self, from: PersonId) -> Option<PersonId> {
        if from == self.from {
            Some(self.to)
        } else if from == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    /// True if this edge connects the same ordered pair as `(from, to)`.
    pub fn connects(&self, from: PersonId, to: PersonId) -> bool {
        self.from == from && self.to == to
    }
}
