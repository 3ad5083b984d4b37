//! Whole-family snapshots for rendering and export.
//!
//! A snapshot carries the persons and edges of one family, plus, when a
//! viewer is given, the title that viewer uses for every person. The JSON
//! form is what tree-rendering clients consume.

use serde::Serialize;
use std::io::Write;

use crate::model::{FamilyId, Person, PersonId, RelationEdge};
use crate::title::{OverrideMap, TitleCatalog, TitleGraph};
use crate::Result;

#[derive(Debug, Clone, Serialize)]
pub struct TitleEntry {
    pub person: PersonId,
    pub title: String,
}

/// Point-in-time copy of one family's graph.
#[derive(Debug, Clone, Serialize)]
pub struct FamilySnapshot {
    pub family_id: FamilyId,
    pub persons: Vec<Person>,
    pub edges: Vec<RelationEdge>,
    /// One entry per person, viewer's perspective. Empty without a viewer.
    pub titles: Vec<TitleEntry>,
}

impl FamilySnapshot {
    pub fn build(
        family_id: FamilyId,
        persons: Vec<Person>,
        edges: Vec<RelationEdge>,
        viewer: Option<PersonId>,
        catalog: &TitleCatalog,
        overrides: Option<&OverrideMap>,
    ) -> Self {
        let titles = match viewer {
            Some(viewer) => {
                let graph = TitleGraph::from_records(&persons, &edges);
                persons
                    .iter()
                    .map(|p| TitleEntry {
                        person: p.id,
                        title: graph.title(viewer, p.id, catalog, overrides),
                    })
                    .collect()
            }
            None => Vec::new(),
        };
        Self { family_id, persons, edges, titles }
    }

    pub fn title_of(&self, person: PersonId) -> Option<&str> {
        self.titles
            .iter()
            .find(|t| t.person == person)
            .map(|t| t.title.as_str())
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn export_json<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use crate::title::SELF_TITLE;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn person(id: u64, name: &str, gender: Gender, generation: i32) -> Person {
        Person {
            id: PersonId(id),
            family_id: FamilyId(1),
            name: name.into(),
            gender,
            generation,
            birth_year: None,
            is_deceased: false,
            bound_member_id: None,
            created_at: Utc::now(),
        }
    }

    fn edge(id: u64, from: u64, to: u64, kind: crate::vocab::RelationKind) -> RelationEdge {
        RelationEdge {
            id: crate::model::EdgeId(id),
            family_id: FamilyId(1),
            from: PersonId(from),
            to: PersonId(to),
            kind,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_snapshot_titles_from_viewer() {
        use crate::vocab::RelationKind::*;

        let persons = vec![
            person(1, "我", Gender::Male, 0),
            person(2, "父", Gender::Male, -1),
        ];
        let edges = vec![edge(1, 2, 1, Father), edge(2, 1, 2, Son)];
        let snap = FamilySnapshot::build(
            FamilyId(1),
            persons,
            edges,
            Some(PersonId(1)),
            &TitleCatalog::default(),
            None,
        );

        assert_eq!(snap.title_of(PersonId(1)), Some(SELF_TITLE));
        assert_eq!(snap.title_of(PersonId(2)), Some("父亲"));
    }

    #[test]
    fn test_export_json_shape() {
        let snap = FamilySnapshot::build(
            FamilyId(1),
            vec![person(1, "我", Gender::Male, 0)],
            vec![],
            None,
            &TitleCatalog::default(),
            None,
        );

        let mut out = Vec::new();
        snap.export_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["persons"][0]["name"], "我");
        assert!(value["titles"].as_array().unwrap().is_empty());
    }
}
