//! Strike/ball solving algorithms
//!
//! Two guess selectors share one trait; a session drives either of them.

pub mod entropy;
pub mod frequency;
pub mod openings;
mod session;
pub mod strategy;

pub use entropy::EntropySelector;
pub use frequency::FrequencySelector;
pub use session::{Session, SessionState, Turn, configure};
pub use strategy::{Selector, SelectorKind};
