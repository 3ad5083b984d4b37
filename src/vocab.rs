//! # Relation Vocabulary
//!
//! The closed set of ten relation kinds, their four categories, the
//! reciprocity table, and the generation-delta table. Pure, static data;
//! everything else in the crate depends on this module.
//!
//! A kind always describes the edge's *source*: an edge `(A, B, Father)`
//! reads "A is the father of B". The reciprocal of a kind is therefore keyed
//! by the gender of the node that becomes the mirror edge's source.

use serde::{Deserialize, Serialize};

use crate::model::Gender;
use crate::Error;

/// One of the four closure categories a relation kind belongs to. The
/// Relationship Closure Engine selects its derivation rules by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationCategory {
    Parent,
    Child,
    Spouse,
    Sibling,
}

/// The ten-value relation vocabulary. Wire form is the SCREAMING_SNAKE name
/// (`"FATHER"`, `"OLDER_BROTHER"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
    Father,
    Mother,
    Son,
    Daughter,
    Husband,
    Wife,
    OlderBrother,
    YoungerBrother,
    OlderSister,
    YoungerSister,
}

impl RelationKind {
    /// Every member of the vocabulary, in declaration order.
    pub const ALL: [RelationKind; 10] = [
        RelationKind::Father,
        RelationKind::Mother,
        RelationKind::Son,
        RelationKind::Daughter,
        RelationKind::Husband,
        RelationKind::Wife,
        RelationKind::OlderBrother,
        RelationKind::YoungerBrother,
        RelationKind::OlderSister,
        RelationKind::YoungerSister,
    ];

    /// The closure category this kind belongs to.
    pub fn category(self) -> RelationCategory {
        match self {
            RelationKind::Father | RelationKind::Mother => RelationCategory::Parent,
            RelationKind::Son | RelationKind::Daughter => RelationCategory::Child,
            RelationKind::Husband | RelationKind::Wife => RelationCategory::Spouse,
            RelationKind::OlderBrother
            | RelationKind::YoungerBrother
            | RelationKind::OlderSister
            | RelationKind::YoungerSister => RelationCategory::Sibling,
        }
    }

    /// The reciprocity table: the kind of the mirror edge, keyed by the
    /// gender of the node that becomes the mirror's source.
    ///
    /// Parent kinds reciprocate to child kinds and vice versa; spouse kinds
    /// reciprocate to the opposite spouse kind regardless of gender; sibling
    /// kinds flip birth order and follow the mirror source's gender.
    pub fn reciprocal(self, mirror_source: Gender) -> RelationKind {
        use RelationKind::*;
        match (self, mirror_source) {
            (Father | Mother, Gender::Male) => Son,
            (Father | Mother, Gender::Female) => Daughter,
            (Son | Daughter, Gender::Male) => Father,
            (Son | Daughter, Gender::Female) => Mother,
            (Husband, _) => Wife,
            (Wife, _) => Husband,
            (OlderBrother | OlderSister, Gender::Male) => YoungerBrother,
            (OlderBrother | OlderSister, Gender::Female) => YoungerSister,
            (YoungerBrother | YoungerSister, Gender::Male) => OlderBrother,
            (YoungerBrother | YoungerSister, Gender::Female) => OlderSister,
        }
    }

    /// Generation delta applied to a reference person's generation when a new
    /// person is created as `self` of the reference. Advisory layout
    /// metadata, not an enforced invariant.
    pub fn generation_delta(self) -> i32 {
        match self.category() {
            RelationCategory::Parent => -1,
            RelationCategory::Child => 1,
            RelationCategory::Spouse | RelationCategory::Sibling => 0,
        }
    }

    /// The parent kind for a person of the given gender.
    pub fn parent_for(gender: Gender) -> RelationKind {
        match gender {
            Gender::Male => RelationKind::Father,
            Gender::Female => RelationKind::Mother,
        }
    }

    /// The spouse kind for a person of the given gender.
    pub fn spouse_for(gender: Gender) -> RelationKind {
        match gender {
            Gender::Male => RelationKind::Husband,
            Gender::Female => RelationKind::Wife,
        }
    }

    /// The older-sibling kind for a person of the given gender.
    pub fn older_sibling_for(gender: Gender) -> RelationKind {
        match gender {
            Gender::Male => RelationKind::OlderBrother,
            Gender::Female => RelationKind::OlderSister,
        }
    }

    /// Wire form, as stored by the surrounding system.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Father => "FATHER",
            RelationKind::Mother => "MOTHER",
            RelationKind::Son => "SON",
            RelationKind::Daughter => "DAUGHTER",
            RelationKind::Husband => "HUSBAND",
            RelationKind::Wife => "WIFE",
            RelationKind::OlderBrother => "OLDER_BROTHER",
            RelationKind::YoungerBrother => "YOUNGER_BROTHER",
            RelationKind::OlderSister => "OLDER_SISTER",
            RelationKind::YoungerSister => "YOUNGER_SISTER",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::UnknownRelationKind(s.to_string()))
    }
}
