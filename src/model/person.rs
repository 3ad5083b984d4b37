//! Person — a node in the family graph.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque person identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub u64);

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque family identifier. Every person and edge is scoped to exactly one
/// family; there are no cross-family edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyId(pub u64);

impl std::fmt::Display for FamilyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender feeds directly into reciprocal-kind computation and title lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Male
    }
}

/// A person in the family graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub family_id: FamilyId,
    pub name: String,
    pub gender: Gender,
    /// Generation relative to the family's founding person (founder = 0,
    /// parents negative, children positive). Advisory layout metadata seeded
    /// from the generation-delta table at creation time; not an enforced
    /// invariant across disconnected insertion paths.
    pub generation: i32,
    pub birth_year: Option<i32>,
    pub is_deceased: bool,
    /// External account this person is bound to, if any.
    pub bound_member_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a person. The store assigns the id and timestamp; the
/// engine supplies the generation number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonSpec {
    pub name: String,
    pub gender: Gender,
    pub birth_year: Option<i32>,
    pub is_deceased: bool,
    pub bound_member_id: Option<String>,
}

impl PersonSpec {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            birth_year: None,
            is_deceased: false,
            bound_member_id: None,
        }
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    pub fn bound_to(mut self, member_id: impl Into<String>) -> Self {
        self.bound_member_id = Some(member_id.into());
        self
    }
}

/// Shared-field edit. `generation` is computed at creation and not directly
/// editable; a `None` field is left untouched.
#[derive(Debug, Clone, Default)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_year: Option<Option<i32>>,
    pub is_deceased: Option<bool>,
    pub bound_member_id: Option<Option<String>>,
}

impl PersonUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gender.is_none()
            && self.birth_year.is_none()
            && self.is_deceased.is_none()
            && self.bound_member_id.is_none()
    }
}
