/// Compile a regex once and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect("static regex must compile"));
        &*RE
    }};
}

/// Declare a concierge catalog entry.
///
/// ```text
/// tag!(FoodStyle, "BBQ", "🥩 BBQ 맛집", "topic reply ...")
///      ^category  ^key   ^chip label    ^single-topic reply
/// ```
macro_rules! tag {
    ($category:ident, $key:literal, $label:literal, $topic:expr $(,)?) => {
        $crate::concierge::TagSpec {
            key: $key,
            label: $label,
            category: $crate::concierge::Category::$category,
            topic: $topic,
        }
    };
}

/// Declare a pairwise combination rule.
///
/// Both sides are catalog keys; the rule fires when both are selected.
macro_rules! pair_rule {
    ($first:literal + $second:literal => $line:expr $(,)?) => {
        $crate::concierge::PairRule { first: $first, second: $second, line: $line }
    };
}
