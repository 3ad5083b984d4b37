//! End-to-end integration tests for graph maintenance.
//!
//! Tests person lifecycle, reciprocal edge pairs, closure derivation across
//! all four relation categories, idempotency, and cascade deletion, all
//! against MemoryStore through the public FamilyGraph API.

use famgraph::{
    EdgeFilter, FamilyGraph, FamilyId, Gender, GraphStore, MemoryStore, Person, PersonSpec,
    PersonUpdate, RelationKind,
};
use pretty_assertions::assert_eq;

const FAM: FamilyId = FamilyId(1);

// ============================================================================
// Helper: a two-generation household.
//
// Husband and wife at generation 0, their son at generation 1, wired up
// through add_founder/add_relative so closure has run.
// ============================================================================

/// Returns (graph, husband, wife, son).
async fn setup_household() -> (FamilyGraph<MemoryStore>, Person, Person, Person) {
    let graph = FamilyGraph::open_memory().await.unwrap();

    let husband = graph
        .add_founder(FAM, PersonSpec::new("建国", Gender::Male))
        .await
        .unwrap();
    let wife = graph
        .add_relative(FAM, PersonSpec::new("秀兰", Gender::Female), husband.id, RelationKind::Wife)
        .await
        .unwrap();
    let son = graph
        .add_relative(FAM, PersonSpec::new("立安", Gender::Male), husband.id, RelationKind::Son)
        .await
        .unwrap();

    (graph, husband, wife, son)
}

async fn kind_between(
    graph: &FamilyGraph<MemoryStore>,
    from: &Person,
    to: &Person,
) -> RelationKind {
    graph
        .store()
        .edge_between(FAM, from.id, to.id)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("no edge {} -> {}", from.name, to.name))
        .kind
}

// ============================================================================
// 1. Generation seeding
// ============================================================================

#[tokio::test]
async fn test_generation_seeded_from_reference() {
    let (graph, husband, wife, son) = setup_household().await;

    assert_eq!(husband.generation, 0);
    assert_eq!(wife.generation, 0);
    assert_eq!(son.generation, 1);

    let grandpa = graph
        .add_relative(FAM, PersonSpec::new("永福", Gender::Male), husband.id, RelationKind::Father)
        .await
        .unwrap();
    assert_eq!(grandpa.generation, -1);
}

// ============================================================================
// 2. Reciprocity invariant over the whole edge set
// ============================================================================

#[tokio::test]
async fn test_every_edge_is_mirrored() {
    let (graph, _husband, _wife, son) = setup_household().await;

    // Grow the graph a bit more before checking.
    graph
        .add_relative(FAM, PersonSpec::new("小梅", Gender::Female), son.id, RelationKind::YoungerSister)
        .await
        .unwrap();

    let edges = graph.edges(FAM).await.unwrap();
    assert!(!edges.is_empty());
    for edge in &edges {
        assert_ne!(edge.from, edge.to, "self-loop stored");
        let to = graph.person(FAM, edge.to).await.unwrap();
        let mirrors = graph
            .store()
            .find_edges(FAM, EdgeFilter { from: Some(edge.to), to: Some(edge.from), kinds: None })
            .await
            .unwrap();
        assert_eq!(mirrors.len(), 1, "edge {} -> {} must have exactly one mirror", edge.from, edge.to);
        assert_eq!(mirrors[0].kind, edge.kind.reciprocal(to.gender));
    }
}

// ============================================================================
// 3. Sibling closure: shared parents, no duplicate edges
// ============================================================================

#[tokio::test]
async fn test_sibling_closure_inherits_parents() {
    let graph = FamilyGraph::open_memory().await.unwrap();
    let r = graph.add_founder(FAM, PersonSpec::new("小弟", Gender::Male)).await.unwrap();
    let father = graph
        .add_relative(FAM, PersonSpec::new("父", Gender::Male), r.id, RelationKind::Father)
        .await
        .unwrap();

    let n = graph
        .add_relative(FAM, PersonSpec::new("大哥", Gender::Male), r.id, RelationKind::OlderBrother)
        .await
        .unwrap();

    assert_eq!(kind_between(&graph, &father, &n).await, RelationKind::Father);
    assert_eq!(kind_between(&graph, &n, &father).await, RelationKind::Son);

    // The pre-existing father edge toward R was not duplicated.
    let father_edges = graph
        .store()
        .find_edges(FAM, EdgeFilter { from: Some(father.id), to: Some(r.id), kinds: None })
        .await
        .unwrap();
    assert_eq!(father_edges.len(), 1);
}

// ============================================================================
// 4. Spouse closure: new wife wired to existing children
// ============================================================================

#[tokio::test]
async fn test_spouse_closure_links_children() {
    let graph = FamilyGraph::open_memory().await.unwrap();
    let r = graph.add_founder(FAM, PersonSpec::new("父", Gender::Male)).await.unwrap();
    let daughter = graph
        .add_relative(FAM, PersonSpec::new("女", Gender::Female), r.id, RelationKind::Daughter)
        .await
        .unwrap();

    let wife = graph
        .add_relative(FAM, PersonSpec::new("妻", Gender::Female), r.id, RelationKind::Wife)
        .await
        .unwrap();

    assert_eq!(kind_between(&graph, &wife, &daughter).await, RelationKind::Mother);
    assert_eq!(kind_between(&graph, &daughter, &wife).await, RelationKind::Daughter);
}

// ============================================================================
// 5. Relation creation between existing persons is idempotent
// ============================================================================

#[tokio::test]
async fn test_create_relation_idempotent() {
    let (graph, husband, wife, _son) = setup_household().await;
    let before = graph.edges(FAM).await.unwrap().len();

    // Re-declaring the marriage changes nothing.
    graph
        .create_relation(FAM, husband.id, wife.id, RelationKind::Husband)
        .await
        .unwrap();
    assert_eq!(graph.edges(FAM).await.unwrap().len(), before);
}

// ============================================================================
// 6. Relation deletion removes both sides
// ============================================================================

#[tokio::test]
async fn test_delete_relation_removes_pair() {
    let graph = FamilyGraph::open_memory().await.unwrap();
    let a = graph.add_founder(FAM, PersonSpec::new("甲", Gender::Male)).await.unwrap();
    let b = graph
        .add_relative(FAM, PersonSpec::new("乙", Gender::Female), a.id, RelationKind::Wife)
        .await
        .unwrap();

    let pair = graph
        .store()
        .edge_between(FAM, b.id, a.id)
        .await
        .unwrap()
        .unwrap();
    let deleted = graph.delete_relation(FAM, pair.id).await.unwrap();
    assert!(deleted.mirror.is_some());
    assert!(graph.edges(FAM).await.unwrap().is_empty());
}

// ============================================================================
// 7. Cascade person deletion
// ============================================================================

#[tokio::test]
async fn test_remove_person_cascades_edges() {
    let (graph, husband, _wife, _son) = setup_household().await;

    let removed = graph.remove_person(FAM, husband.id).await.unwrap();
    assert!(removed >= 4, "expected both relation pairs gone, removed {removed}");

    let remaining = graph.edges(FAM).await.unwrap();
    for edge in &remaining {
        assert_ne!(edge.from, husband.id);
        assert_ne!(edge.to, husband.id);
    }
    assert!(graph.person(FAM, husband.id).await.is_err());
}

// ============================================================================
// 8. Validation failures
// ============================================================================

#[tokio::test]
async fn test_validation_errors() {
    let (graph, husband, _wife, _son) = setup_household().await;

    let err = graph
        .create_relation(FAM, husband.id, husband.id, RelationKind::Husband)
        .await;
    assert!(matches!(err, Err(famgraph::Error::SelfRelation { .. })));

    let ghost = famgraph::PersonId(999);
    let err = graph
        .create_relation(FAM, husband.id, ghost, RelationKind::Father)
        .await;
    assert!(matches!(err, Err(famgraph::Error::PersonNotFound { .. })));

    // Another family cannot see this one's persons.
    let err = graph.person(FamilyId(2), husband.id).await;
    assert!(matches!(err, Err(famgraph::Error::PersonNotFound { .. })));
}

// ============================================================================
// 9. Shared-field edits
// ============================================================================

#[tokio::test]
async fn test_update_person_fields() {
    let (graph, _husband, _wife, son) = setup_household().await;

    let updated = graph
        .update_person(FAM, son.id, PersonUpdate::rename("立国"))
        .await
        .unwrap();
    assert_eq!(updated.name, "立国");
    assert_eq!(updated.generation, son.generation);
}
