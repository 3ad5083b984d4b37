//! Kinship title resolution.
//!
//! A title is looked up from the chain of relation kinds along the shortest
//! path from a viewer to a target, plus the target's gender. The chain is
//! found by breadth-first search over the mirrored edge set, so the viewer's
//! outgoing hop to each neighbor is read off the neighbor's side of the pair.
//!
//! Resolution order: adopted override map, then the static catalog, then the
//! generic fallback.

pub mod catalog;

pub use catalog::{
    MAX_OVERRIDE_TITLE_CHARS, OverrideMap, OverrideMapId, OverrideMapSpec, TitleCatalog,
};

use hashbrown::{HashMap, HashSet};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::model::{Gender, Person, PersonId, RelationEdge};
use crate::vocab::RelationKind;
use crate::Error;

/// Longest relation chain a title lookup will follow.
pub const MAX_TITLE_DEPTH: usize = 5;

/// Title a person sees for themselves.
pub const SELF_TITLE: &str = "本人";

/// Title for relatives with no cataloged chain, or none within reach.
pub const FALLBACK_TITLE: &str = "亲属";

/// Chain of relation kinds from viewer to target.
pub type KindPath = SmallVec<[RelationKind; MAX_TITLE_DEPTH]>;

// ============================================================================
// TitleKey
// ============================================================================

/// Catalog key: the relation chain plus the target's gender.
///
/// The wire form is `"FATHER>FATHER|male"`; both the static catalog and
/// override maps are keyed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleKey {
    pub path: KindPath,
    pub gender: Gender,
}

impl TitleKey {
    pub fn new(path: impl IntoIterator<Item = RelationKind>, gender: Gender) -> Self {
        Self { path: path.into_iter().collect(), gender }
    }
}

impl fmt::Display for TitleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(">")?;
            }
            f.write_str(kind.as_str())?;
        }
        write!(f, "|{}", self.gender)
    }
}

impl FromStr for TitleKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let bad = || Error::InvalidTitleKey(s.to_owned());

        let (chain, gender) = s.split_once('|').ok_or_else(bad)?;
        let gender = match gender {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => return Err(bad()),
        };

        if chain.is_empty() {
            return Err(bad());
        }
        let mut path = KindPath::new();
        for part in chain.split('>') {
            path.push(part.parse().map_err(|_| bad())?);
        }

        Ok(Self { path, gender })
    }
}

impl Serialize for TitleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TitleKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

// ============================================================================
// TitleGraph
// ============================================================================

/// Immutable snapshot of a family's edges, indexed for title BFS.
///
/// Neighbor lists keep edge insertion order, which makes the shortest-path
/// tie-break deterministic across runs.
#[derive(Debug, Default)]
pub struct TitleGraph {
    adjacency: HashMap<PersonId, Vec<(PersonId, RelationKind)>>,
    genders: HashMap<PersonId, Gender>,
}

impl TitleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(persons: &[Person], edges: &[RelationEdge]) -> Self {
        let mut graph = Self::new();
        for person in persons {
            graph.add_person(person.id, person.gender);
        }
        for edge in edges {
            graph.add_edge(edge.from, edge.to, edge.kind);
        }
        graph
    }

    pub fn add_person(&mut self, id: PersonId, gender: Gender) {
        self.genders.insert(id, gender);
    }

    /// Record that `from` is `kind` of `to`.
    pub fn add_edge(&mut self, from: PersonId, to: PersonId, kind: RelationKind) {
        self.adjacency.entry(from).or_default().push((to, kind));
    }

    fn gender_of(&self, id: PersonId) -> Gender {
        self.genders.get(&id).copied().unwrap_or_default()
    }

    /// Shortest relation chain from `ego` to `target`, if one exists within
    /// [`MAX_TITLE_DEPTH`] hops.
    pub fn chain(&self, ego: PersonId, target: PersonId) -> Option<TitleKey> {
        if ego == target {
            return None;
        }

        let mut visited = HashSet::new();
        visited.insert(ego);
        let mut queue: VecDeque<(PersonId, KindPath)> = VecDeque::new();
        queue.push_back((ego, KindPath::new()));

        while let Some((current, path)) = queue.pop_front() {
            if path.len() >= MAX_TITLE_DEPTH {
                continue;
            }
            let Some(neighbors) = self.adjacency.get(&current) else {
                continue;
            };
            for &(neighbor, kind) in neighbors {
                if visited.contains(&neighbor) {
                    continue;
                }
                // Edge reads "current is kind of neighbor"; the chain needs
                // the neighbor's relation to current, which is the mirror.
                let hop = kind.reciprocal(self.gender_of(neighbor));
                let mut next = path.clone();
                next.push(hop);
                if neighbor == target {
                    return Some(TitleKey { path: next, gender: self.gender_of(neighbor) });
                }
                visited.insert(neighbor);
                queue.push_back((neighbor, next));
            }
        }
        None
    }

    /// Resolve the title `ego` uses for `target`.
    pub fn title(
        &self,
        ego: PersonId,
        target: PersonId,
        catalog: &TitleCatalog,
        overrides: Option<&OverrideMap>,
    ) -> String {
        if ego == target {
            return SELF_TITLE.to_owned();
        }
        let Some(key) = self.chain(ego, target) else {
            return FALLBACK_TITLE.to_owned();
        };
        overrides
            .and_then(|map| map.lookup(&key))
            .or_else(|| catalog.lookup(&key))
            .unwrap_or(FALLBACK_TITLE)
            .to_owned()
    }
}

// ============================================================================
// Tests
// ============================================================================
