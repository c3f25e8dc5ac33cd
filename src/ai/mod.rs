//! Computer players: move selection policies and the delayed opponent that drives them.

mod opponent;
mod selector;

pub use opponent::Opponent;
pub use selector::{FirstLegalMoveSelector, MoveSelector, RandomSelector};
