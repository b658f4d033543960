//! Core data model for Zorki.
//!
//! Two closed classification axes and the one record that gets journaled:
//! an observation of an object, tagged with the object's lifecycle stage and
//! the observer's role relative to it.

mod human_role;
mod object_state;
mod observation;

pub use human_role::HumanRole;
pub use object_state::ObjectState;
pub use observation::Observation;
pub(crate) use observation::now_millis;
