//! Card definitions and the interning catalog.

mod card;
mod catalog;

pub use card::{Card, CardId, CardKind, Effect};
pub use catalog::Catalog;
