//! End-to-end integration tests for kinship title resolution.
//!
//! Tests chain resolution across generations and in-law paths, override-map
//! adoption and staleness, the depth bound, and snapshot export, all against
//! MemoryStore through the public FamilyGraph API.

use famgraph::{
    FamilyGraph, FamilyId, Gender, MemoryStore, OverrideMapSpec, Person, PersonSpec, RelationKind,
    FALLBACK_TITLE, SELF_TITLE,
};
use pretty_assertions::assert_eq;

const FAM: FamilyId = FamilyId(1);

// ============================================================================
// Helper: three paternal generations plus an aunt by marriage.
//
// ego -> father -> grandfather, grandfather's second son (uncle), and the
// uncle's wife. All wiring goes through add_relative so closure has run.
// ============================================================================

struct Clan {
    graph: FamilyGraph<MemoryStore>,
    ego: Person,
    father: Person,
    grandfather: Person,
    uncle: Person,
    aunt: Person,
}

async fn setup_clan() -> Clan {
    let graph = FamilyGraph::open_memory().await.unwrap();

    let ego = graph.add_founder(FAM, PersonSpec::new("立安", Gender::Male)).await.unwrap();
    let father = graph
        .add_relative(FAM, PersonSpec::new("建国", Gender::Male), ego.id, RelationKind::Father)
        .await
        .unwrap();
    let grandfather = graph
        .add_relative(FAM, PersonSpec::new("永福", Gender::Male), father.id, RelationKind::Father)
        .await
        .unwrap();
    let uncle = graph
        .add_relative(FAM, PersonSpec::new("建军", Gender::Male), father.id, RelationKind::YoungerBrother)
        .await
        .unwrap();
    let aunt = graph
        .add_relative(FAM, PersonSpec::new("桂香", Gender::Female), uncle.id, RelationKind::Wife)
        .await
        .unwrap();

    Clan { graph, ego, father, grandfather, uncle, aunt }
}

async fn title(clan: &Clan, ego: &Person, target: &Person) -> String {
    clan.graph
        .compute_title(FAM, ego.id, target.id, None)
        .await
        .unwrap()
}

// ============================================================================
// 1. Direct and two-hop chains
// ============================================================================

#[tokio::test]
async fn test_lineal_titles() {
    let clan = setup_clan().await;

    assert_eq!(title(&clan, &clan.ego, &clan.father).await, "父亲");
    assert_eq!(title(&clan, &clan.father, &clan.ego).await, "儿子");
    assert_eq!(title(&clan, &clan.ego, &clan.grandfather).await, "祖父");
    assert_eq!(title(&clan, &clan.grandfather, &clan.ego).await, "孙子");
}

// ============================================================================
// 2. Collateral and in-law chains
// ============================================================================

#[tokio::test]
async fn test_collateral_titles() {
    let clan = setup_clan().await;

    // Father's younger brother, and his wife.
    assert_eq!(title(&clan, &clan.ego, &clan.uncle).await, "叔父");
    assert_eq!(title(&clan, &clan.ego, &clan.aunt).await, "婶母");
    // The uncle sees ego through the sibling edge closure derived.
    assert_eq!(title(&clan, &clan.uncle, &clan.ego).await, "侄子");
}

// ============================================================================
// 3. Self title
// ============================================================================

#[tokio::test]
async fn test_self_title() {
    let clan = setup_clan().await;
    assert_eq!(title(&clan, &clan.ego, &clan.ego).await, SELF_TITLE);
}

// ============================================================================
// 4. Unreachable target resolves to the fallback, not an error
// ============================================================================

#[tokio::test]
async fn test_unconnected_person_falls_back() {
    let clan = setup_clan().await;
    let stranger = clan
        .graph
        .add_founder(FAM, PersonSpec::new("路人", Gender::Female))
        .await
        .unwrap();

    assert_eq!(title(&clan, &clan.ego, &stranger).await, FALLBACK_TITLE);
    assert_eq!(title(&clan, &stranger, &clan.ego).await, FALLBACK_TITLE);
}

// ============================================================================
// 5. Depth bound: six lineal generations up is out of reach
// ============================================================================

#[tokio::test]
async fn test_depth_bound() {
    let graph = FamilyGraph::open_memory().await.unwrap();
    let ego = graph.add_founder(FAM, PersonSpec::new("我", Gender::Male)).await.unwrap();

    let mut anchor = ego.clone();
    let mut ancestors = Vec::new();
    for name in ["父", "祖", "曾祖", "高祖", "天祖", "烈祖"] {
        anchor = graph
            .add_relative(FAM, PersonSpec::new(name, Gender::Male), anchor.id, RelationKind::Father)
            .await
            .unwrap();
        ancestors.push(anchor.clone());
    }

    // Four hops has a catalog entry; five hops is still reachable; six is
    // beyond the bound.
    assert_eq!(
        graph.compute_title(FAM, ego.id, ancestors[3].id, None).await.unwrap(),
        "高祖父",
    );

    let persons = graph.persons(FAM).await.unwrap();
    let edges = graph.edges(FAM).await.unwrap();
    let chains = famgraph::TitleGraph::from_records(&persons, &edges);
    assert!(chains.chain(ego.id, ancestors[4].id).is_some());
    assert!(chains.chain(ego.id, ancestors[5].id).is_none());
    assert_eq!(
        graph.compute_title(FAM, ego.id, ancestors[5].id, None).await.unwrap(),
        FALLBACK_TITLE,
    );
}

// ============================================================================
// 6. Override maps: adoption, precedence, fallthrough
// ============================================================================

#[tokio::test]
async fn test_override_map_precedence() {
    let clan = setup_clan().await;

    let map = clan
        .graph
        .create_override_map(
            FAM,
            OverrideMapSpec::new("我们家的叫法", "member-1")
                .with_entry("FATHER>FATHER|male", "爷爷")
                .shared(),
        )
        .await
        .unwrap();

    let with_map = clan
        .graph
        .compute_title(FAM, clan.ego.id, clan.grandfather.id, Some(map.id))
        .await
        .unwrap();
    assert_eq!(with_map, "爷爷");

    // Chains the map does not define fall through to the static catalog.
    let father_title = clan
        .graph
        .compute_title(FAM, clan.ego.id, clan.father.id, Some(map.id))
        .await
        .unwrap();
    assert_eq!(father_title, "父亲");
}

#[tokio::test]
async fn test_stale_override_map_degrades_silently() {
    let clan = setup_clan().await;

    let map = clan
        .graph
        .create_override_map(
            FAM,
            OverrideMapSpec::new("旧叫法", "member-1").with_entry("FATHER>FATHER|male", "阿公"),
        )
        .await
        .unwrap();
    assert!(clan.graph.delete_override_map(FAM, map.id).await.unwrap());

    // The deleted map id still resolves, through the static catalog.
    let after = clan
        .graph
        .compute_title(FAM, clan.ego.id, clan.grandfather.id, Some(map.id))
        .await
        .unwrap();
    assert_eq!(after, "祖父");
}

#[tokio::test]
async fn test_override_map_validation() {
    let clan = setup_clan().await;

    let err = clan
        .graph
        .create_override_map(FAM, OverrideMapSpec::new("   ", "member-1"))
        .await;
    assert!(matches!(err, Err(famgraph::Error::InvalidOverrideMap(_))));

    let err = clan
        .graph
        .create_override_map(
            FAM,
            OverrideMapSpec::new("坏键", "member-1").with_entry("GRANDPA|male", "爷爷"),
        )
        .await;
    assert!(matches!(err, Err(famgraph::Error::InvalidTitleKey(_))));
}

// ============================================================================
// 7. Snapshot export
// ============================================================================

#[tokio::test]
async fn test_snapshot_with_viewer_titles() {
    let clan = setup_clan().await;

    let snap = clan
        .graph
        .snapshot(FAM, Some(clan.ego.id), None)
        .await
        .unwrap();

    assert_eq!(snap.title_of(clan.ego.id), Some(SELF_TITLE));
    assert_eq!(snap.title_of(clan.grandfather.id), Some("祖父"));
    assert_eq!(snap.persons.len(), 5);

    let mut out = Vec::new();
    snap.export_json(&mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["titles"].as_array().unwrap().len(), 5);
    assert_eq!(value["edges"].as_array().unwrap().len(), snap.edges.len());
}
