//! Relationship closure.
//!
//! When a person N is linked to a reference person R, structure already
//! present around R implies further edges: a new sibling shares R's parents
//! and siblings, a new child is wired to R's spouse and other children, and
//! so on. [`derive`] walks R's neighborhood once and materializes those
//! pairs through the reciprocity layer.
//!
//! The pass is idempotent: each candidate ordered pair is skipped when an
//! edge already connects it, so re-running derivation on an unchanged graph
//! writes nothing. A derivation that fails mid-way leaves a partially
//! closed graph; that is logged and left for the next idempotent re-run
//! rather than rolled back.

use tracing::{debug, warn};

use crate::model::{FamilyId, Person, PersonId};
use crate::reciprocity;
use crate::store::{EdgeFilter, GraphStore};
use crate::vocab::{RelationCategory, RelationKind};
use crate::Result;

fn kinds_in(category: RelationCategory) -> Vec<RelationKind> {
    RelationKind::ALL.into_iter().filter(|k| k.category() == category).collect()
}

/// Derive the edges implied by the just-created relation "`subject` is
/// `kind` of `reference`". Returns the number of pairs written.
///
/// Single pass: only `reference`'s neighborhood at call time is inspected,
/// never the edges this pass itself creates.
pub async fn derive<S: GraphStore>(
    store: &S,
    family: FamilyId,
    subject: &Person,
    reference: &Person,
    kind: RelationKind,
) -> Result<usize> {
    let derived = match kind.category() {
        RelationCategory::Sibling => {
            let mut n = share_parents(store, family, subject, reference).await?;
            n += share_siblings(store, family, subject, reference).await?;
            n
        }
        RelationCategory::Child => {
            let mut n = link_other_parent(store, family, subject, reference).await?;
            n += link_other_children(store, family, subject, reference).await?;
            n
        }
        RelationCategory::Parent => {
            let mut n = adopt_reference_siblings(store, family, subject, reference, kind).await?;
            n += marry_other_parent(store, family, subject, reference).await?;
            n
        }
        RelationCategory::Spouse => link_spouse_children(store, family, subject, reference).await?,
    };

    if derived > 0 {
        debug!(%family, subject = %subject.id, reference = %reference.id, derived, "closure pass");
    }
    Ok(derived)
}

async fn pair_missing<S: GraphStore>(
    store: &S,
    family: FamilyId,
    from: PersonId,
    to: PersonId,
) -> Result<bool> {
    Ok(store.edge_between(family, from, to).await?.is_none())
}

/// Write one derived pair, downgrading failures to warnings so one bad
/// candidate does not abort the rest of the pass.
async fn put_pair<S: GraphStore>(
    store: &S,
    family: FamilyId,
    from: PersonId,
    to: PersonId,
    kind: RelationKind,
    count: &mut usize,
) {
    match reciprocity::create_pair(store, family, from, to, kind).await {
        Ok(_) => *count += 1,
        Err(err) => warn!(%family, %from, %to, %kind, error = %err, "derived pair not written"),
    }
}

/// New sibling of R: every parent of R is a parent of N.
async fn share_parents<S: GraphStore>(
    store: &S,
    family: FamilyId,
    subject: &Person,
    reference: &Person,
) -> Result<usize> {
    let parent_edges = store
        .find_edges(
            family,
            EdgeFilter::to(reference.id).with_kinds(kinds_in(RelationCategory::Parent)),
        )
        .await?;

    let mut count = 0;
    for edge in parent_edges {
        let parent = edge.from;
        if parent == subject.id || !pair_missing(store, family, parent, subject.id).await? {
            continue;
        }
        put_pair(store, family, parent, subject.id, edge.kind, &mut count).await;
    }
    Ok(count)
}

/// New sibling of R: N relates to each of R's siblings the way R does.
async fn share_siblings<S: GraphStore>(
    store: &S,
    family: FamilyId,
    subject: &Person,
    reference: &Person,
) -> Result<usize> {
    let sibling_edges = store
        .find_edges(
            family,
            EdgeFilter::from(reference.id).with_kinds(kinds_in(RelationCategory::Sibling)),
        )
        .await?;

    let mut count = 0;
    for edge in sibling_edges {
        let sibling = edge.to;
        if sibling == subject.id || !pair_missing(store, family, subject.id, sibling).await? {
            continue;
        }
        put_pair(store, family, subject.id, sibling, edge.kind, &mut count).await;
    }
    Ok(count)
}

/// New child of R: R's spouse is N's other parent.
async fn link_other_parent<S: GraphStore>(
    store: &S,
    family: FamilyId,
    subject: &Person,
    reference: &Person,
) -> Result<usize> {
    let spouse_edges = store
        .find_edges(
            family,
            EdgeFilter::from(reference.id).with_kinds(kinds_in(RelationCategory::Spouse)),
        )
        .await?;

    let mut count = 0;
    for edge in spouse_edges {
        let spouse_id = edge.to;
        if !pair_missing(store, family, spouse_id, subject.id).await? {
            continue;
        }
        let Some(spouse) = store.get_person(family, spouse_id).await? else {
            warn!(%family, person = %spouse_id, "spouse endpoint missing");
            continue;
        };
        let kind = RelationKind::parent_for(spouse.gender);
        put_pair(store, family, spouse_id, subject.id, kind, &mut count).await;
    }
    Ok(count)
}

/// New child of R: R's existing children become N's siblings. The new
/// arrival takes the older-sibling side toward each existing child, which
/// is the longstanding ordering policy here; birth years do not enter it.
async fn link_other_children<S: GraphStore>(
    store: &S,
    family: FamilyId,
    subject: &Person,
    reference: &Person,
) -> Result<usize> {
    let child_edges = store
        .find_edges(
            family,
            EdgeFilter::to(reference.id).with_kinds(kinds_in(RelationCategory::Child)),
        )
        .await?;

    let mut count = 0;
    for edge in child_edges {
        let other = edge.from;
        if other == subject.id || !pair_missing(store, family, subject.id, other).await? {
            continue;
        }
        let Some(other_child) = store.get_person(family, other).await? else {
            warn!(%family, person = %other, "child endpoint missing");
            continue;
        };
        let kind = RelationKind::older_sibling_for(other_child.gender);
        put_pair(store, family, subject.id, other, kind, &mut count).await;
    }
    Ok(count)
}

/// New parent of R: R's siblings are N's children too, with the same
/// parent kind N used toward R.
async fn adopt_reference_siblings<S: GraphStore>(
    store: &S,
    family: FamilyId,
    subject: &Person,
    reference: &Person,
    parent_kind: RelationKind,
) -> Result<usize> {
    let sibling_edges = store
        .find_edges(
            family,
            EdgeFilter::from(reference.id).with_kinds(kinds_in(RelationCategory::Sibling)),
        )
        .await?;

    let mut count = 0;
    for edge in sibling_edges {
        let sibling = edge.to;
        if sibling == subject.id || !pair_missing(store, family, subject.id, sibling).await? {
            continue;
        }
        put_pair(store, family, subject.id, sibling, parent_kind, &mut count).await;
    }
    Ok(count)
}

/// New parent of R: R's other parent becomes N's spouse.
async fn marry_other_parent<S: GraphStore>(
    store: &S,
    family: FamilyId,
    subject: &Person,
    reference: &Person,
) -> Result<usize> {
    let parent_edges = store
        .find_edges(
            family,
            EdgeFilter::to(reference.id).with_kinds(kinds_in(RelationCategory::Parent)),
        )
        .await?;

    let mut count = 0;
    for edge in parent_edges {
        let other = edge.from;
        if other == subject.id || !pair_missing(store, family, subject.id, other).await? {
            continue;
        }
        let kind = RelationKind::spouse_for(subject.gender);
        put_pair(store, family, subject.id, other, kind, &mut count).await;
    }
    Ok(count)
}

/// New spouse of R: R's children become N's children.
async fn link_spouse_children<S: GraphStore>(
    store: &S,
    family: FamilyId,
    subject: &Person,
    reference: &Person,
) -> Result<usize> {
    let child_edges = store
        .find_edges(
            family,
            EdgeFilter::to(reference.id).with_kinds(kinds_in(RelationCategory::Child)),
        )
        .await?;

    let mut count = 0;
    for edge in child_edges {
        let child = edge.from;
        if child == subject.id || !pair_missing(store, family, subject.id, child).await? {
            continue;
        }
        let kind = RelationKind::parent_for(subject.gender);
        put_pair(store, family, subject.id, child, kind, &mut count).await;
    }
    Ok(count)
}

// ============================================================================
// Tests
// ============================================================================
