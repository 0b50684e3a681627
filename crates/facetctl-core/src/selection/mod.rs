//! Selection sets: the committed baseline and the working copy.
//!
//! `CommittedState` mirrors the filters in the page URL and is only replaced
//! by re-initialization. `SelectionState` is the working copy that toggles
//! mutate. Keeping them as separate values is what makes dirty detection a
//! plain equality check.

mod order;
mod set;
mod state;

pub use order::{ordered_members, CommitOrder};
pub use set::SelectionSet;
pub use state::{CommittedState, InitialSelection, SelectionState};
