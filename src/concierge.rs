//! Concierge response engine.
//!
//! A deterministic template engine over a set of user-picked intent tags:
//!
//! ```text
//! SelectionSet ──┬─ classify()   static catalog lookup   (catalog.rs)
//!                │                 food style / occasion / constraint
//!                ├─ fired_rules() pairwise rule table     (rules.rs)
//!                v
//!            compose(set, free text) ─▶ reply String       (compose.rs)
//! ```
//!
//! There is no model call, randomness, or shared state: the same selection
//! and text always produce the same reply. New combinations are added as rows
//! in `PAIR_RULES`, not as new branches.
//!
//! Tags may be given either as catalog keys (`"BBQ"`, `"date-spot"`) or as the
//! chip labels shown in the UI (`"🥩 BBQ 맛집"`). Unknown tags stay in the set
//! and are echoed nowhere but the user message.

#[path = "concierge/catalog.rs"]
mod catalog;
#[path = "concierge/compose.rs"]
mod compose;
#[path = "concierge/rules.rs"]
mod rules;
#[path = "concierge/selection.rs"]
mod selection;

#[cfg(test)]
#[path = "concierge/tests.rs"]
mod tests;

pub use catalog::{Category, TAG_CATALOG, TagSpec, lookup_tag};
pub use compose::{Classification, can_send, classify, compose, topic_reply, user_message};
pub use rules::{PAIR_RULES, PairRule, fired_rules};
pub use selection::{SelectionSet, SelectionState, clear_all, toggle_tag};
