//! # Kinship Graph Model
//!
//! Clean DTOs for the family-scoped kinship graph. These types cross every
//! boundary: store ↔ reciprocity manager ↔ closure engine ↔ title resolver.
//!
//! Design rule: this module is pure data. No I/O, no state, no async.

pub mod person;
pub mod edge;

pub use person::{FamilyId, Gender, Person, PersonId, PersonSpec, PersonUpdate};
pub use edge::{EdgeId, RelationEdge};
