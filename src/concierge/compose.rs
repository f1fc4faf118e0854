//! Reply synthesis.
//!
//! ```text
//! empty set ─────────────▶ GENERIC_REPLY
//! non-empty set ─┬─ OPENING
//!                ├─ one line per non-empty category
//!                ├─ free-text echo (if any)
//!                ├─ RESULTS_HEADER + one line per fired pair rule
//!                └─ CLOSING
//! ```

use super::catalog::{Category, lookup_tag};
use super::rules::fired_rules;
use super::selection::SelectionSet;

const GENERIC_REPLY: &str = "말씀해주신 내용을 바탕으로 맞춤 추천을 해드릴게요! 조금 더 구체적인 정보를 알려주시면 더 정확한 추천이 가능해요 😊";
const OPENING: &str = "선택해주신 조건들을 종합해서 완벽한 추천을 해드릴게요! ✨\n\n";
const RESULTS_HEADER: &str = "\n🔍 **맞춤 추천 결과**:\n";
const CLOSING: &str = "\n더 구체적인 정보(지역, 예산, 시간 등)를 알려주시면 더 정확한 추천을 해드릴게요! 🎯";
const TOPIC_FALLBACK: &str = "좋은 선택이에요! 더 자세한 추천을 위해 조금 더 알려주세요 😊\n\n• 선호하는 지역이 있나요?\n• 예산대는 어느 정도인가요?\n• 몇 명이서 가실 예정인가요?\n• 특별한 상황이나 목적이 있나요?";
const USER_OPTIONS_PREFIX: &str = "선택한 옵션: ";

/// Selected tags partitioned by category, each in selection order.
///
/// Tags missing from the catalog appear in none of the lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    pub food_styles: Vec<&'a str>,
    pub occasions: Vec<&'a str>,
    pub constraints: Vec<&'a str>,
}

impl Classification<'_> {
    pub fn is_empty(&self) -> bool {
        self.food_styles.is_empty() && self.occasions.is_empty() && self.constraints.is_empty()
    }
}

/// Partition `set` through the catalog.
pub fn classify(set: &SelectionSet) -> Classification<'_> {
    let mut out = Classification::default();
    for tag in set.iter() {
        match lookup_tag(tag).map(|spec| spec.category) {
            Some(Category::FoodStyle) => out.food_styles.push(tag),
            Some(Category::Occasion) => out.occasions.push(tag),
            Some(Category::Constraint) => out.constraints.push(tag),
            None => {}
        }
    }
    out
}

/// Compose the concierge reply for `set` plus optional free text.
pub fn compose(set: &SelectionSet, free_text: &str) -> String {
    if set.is_empty() {
        return GENERIC_REPLY.to_string();
    }

    let classes = classify(set);
    let mut out = String::from(OPENING);

    match classes.food_styles.as_slice() {
        [] => {}
        [only] => out.push_str(&format!("**음식 선호**: {only}\n")),
        many => out.push_str(&format!("**다양한 음식 스타일**: {}\n", many.join(", "))),
    }
    if !classes.occasions.is_empty() {
        out.push_str(&format!("**상황/목적**: {}\n", classes.occasions.join(", ")));
    }
    if !classes.constraints.is_empty() {
        out.push_str(&format!("**특별 조건**: {}\n", classes.constraints.join(", ")));
    }

    let text = free_text.trim();
    if !text.is_empty() {
        out.push_str(&format!("**추가 요청사항**: \"{text}\"\n"));
    }

    out.push_str(RESULTS_HEADER);
    let fired = fired_rules(set);
    tracing::trace!(tags = set.len(), fired = fired.len(), "concierge compose");
    for rule in fired {
        out.push_str(rule.line);
        out.push('\n');
    }

    out.push_str(CLOSING);
    out
}

/// Text of the user's own chat bubble for this send.
pub fn user_message(set: &SelectionSet, free_text: &str) -> String {
    let text = free_text.trim();
    let options = set.tags().join(", ");
    match (set.is_empty(), text.is_empty()) {
        (true, _) => text.to_string(),
        (false, true) => format!("{USER_OPTIONS_PREFIX}{options}"),
        (false, false) => format!("{USER_OPTIONS_PREFIX}{options}\n\n{text}"),
    }
}

/// A send is possible once something is selected or typed.
pub fn can_send(set: &SelectionSet, free_text: &str) -> bool {
    !set.is_empty() || !free_text.trim().is_empty()
}

/// Detail reply for a single tag, with a generic follow-up for unknown tags.
pub fn topic_reply(tag: &str) -> &'static str {
    lookup_tag(tag).map_or(TOPIC_FALLBACK, |spec| spec.topic)
}
