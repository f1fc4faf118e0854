//! Pairwise combination rules.
//!
//! Each row fires when both of its tags are selected. Rows are independent:
//! every matching row contributes its line, in table order.

use super::catalog::canonical_key;
use super::selection::SelectionSet;

/// Two catalog keys and the line appended when both are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairRule {
    pub first: &'static str,
    pub second: &'static str,
    pub line: &'static str,
}

impl PairRule {
    /// Whether both sides are present in `set`, by key or label.
    pub fn matches(&self, set: &SelectionSet) -> bool {
        let has = |key: &str| set.iter().any(|t| canonical_key(t) == key);
        has(self.first) && has(self.second)
    }
}

pub static PAIR_RULES: &[PairRule] = &[
    pair_rule!("date-spot" + "spicy" => "🌶️ **신사동 가마솥 김치찌개**: 로맨틱한 분위기의 매운 맛집"),
    pair_rule!("team-dinner" + "BBQ" => "🥩 **강남 왕갈비**: 넓은 룸과 최고급 한우 갈비"),
    pair_rule!("family" + "soup" => "🍜 **명동 설렁탕**: 3대째 이어온 전통 사골국물"),
    pair_rule!("value" + "solo" => "🍚 **혼밥천국 비빔밥**: 8,000원 푸짐한 1인분"),
    pair_rule!("date-spot" + "BBQ" => "🔥 **한남동 숯불연가**: 프라이빗 룸에서 즐기는 숙성 한우 구이"),
];

/// All rules matching `set`, in table order.
pub fn fired_rules(set: &SelectionSet) -> Vec<&'static PairRule> {
    PAIR_RULES.iter().filter(|rule| rule.matches(set)).collect()
}
