use crate::concierge::{
    Classification, SelectionSet, SelectionState, can_send, classify, clear_all, compose, toggle_tag, topic_reply,
    user_message,
};

fn set_of(tags: &[&str]) -> SelectionSet {
    tags.iter().copied().collect()
}

#[test]
fn classification_examples() {
    // (selected tags, food styles, occasions, constraints)
    let cases: [(&[&str], &[&str], &[&str], &[&str]); 5] = [
        (&["BBQ", "date-spot"], &["BBQ"], &["date-spot"], &[]),
        (&["vegan", "spicy", "rice"], &["spicy", "rice"], &[], &["vegan"]),
        (&["💰 가성비 맛집", "😋 혼밥 추천"], &[], &["😋 혼밥 추천"], &["💰 가성비 맛집"]),
        (&["rooftop", "solo"], &[], &["solo"], &[]),
        (&[], &[], &[], &[]),
    ];

    for (tags, food, occasion, constraint) in cases {
        let set = set_of(tags);
        let expected =
            Classification { food_styles: food.to_vec(), occasions: occasion.to_vec(), constraints: constraint.to_vec() };
        assert_eq!(classify(&set), expected, "tags: {tags:?}");
    }
}

#[test]
fn unknown_tags_stay_in_the_set() {
    let set = set_of(&["rooftop"]);
    assert!(classify(&set).is_empty());
    assert!(set.contains("rooftop"));
    assert_eq!(set.state(), SelectionState::NonEmpty);
}

#[test]
fn empty_selection_gets_generic_reply() {
    let empty = SelectionSet::new();
    let with_text = compose(&empty, "강남 근처에서");
    assert_eq!(with_text, compose(&empty, "홍대 근처"));
    assert_eq!(compose(&empty, ""), compose(&empty, ""));
    assert_eq!(compose(&empty, ""), with_text);
    assert!(!with_text.contains("강남"));
}

#[test]
fn bbq_date_spot_with_free_text() {
    let set = set_of(&["BBQ", "date-spot"]);
    let reply = compose(&set, "근처로");

    assert!(reply.contains("**음식 선호**: BBQ\n"), "{reply}");
    assert!(reply.contains("**상황/목적**: date-spot\n"), "{reply}");
    assert!(reply.contains("**추가 요청사항**: \"근처로\"\n"), "{reply}");
    assert!(reply.contains("한남동 숯불연가"), "{reply}");
    assert!(!reply.contains("**특별 조건**"), "{reply}");
}

#[test]
fn reply_sections_appear_in_order() {
    let set = set_of(&["🍻 회식 장소", "🥩 BBQ 맛집", "spicy", "24h"]);
    let reply = compose(&set, "  2만원 이하로 ");

    let pos = |needle: &str| reply.find(needle).unwrap_or_else(|| panic!("missing {needle} in {reply}"));
    assert!(pos("선택해주신 조건들을") < pos("**다양한 음식 스타일**: 🥩 BBQ 맛집, spicy"));
    assert!(pos("**다양한 음식 스타일**") < pos("**상황/목적**: 🍻 회식 장소"));
    assert!(pos("**상황/목적**") < pos("**특별 조건**: 24h"));
    assert!(pos("**특별 조건**") < pos("**추가 요청사항**: \"2만원 이하로\""));
    assert!(pos("**추가 요청사항**") < pos("맞춤 추천 결과"));
    assert!(pos("맞춤 추천 결과") < pos("강남 왕갈비"));
    assert!(reply.ends_with("더 정확한 추천을 해드릴게요! 🎯"));
}

#[test]
fn no_rule_still_has_header_and_closing() {
    let set = set_of(&["michelin"]);
    let reply = compose(&set, "");
    assert!(reply.contains("맞춤 추천 결과"));
    assert!(reply.ends_with("🎯"));
    assert!(!reply.contains("추가 요청사항"));
}

#[test]
fn compose_is_deterministic() {
    let set = set_of(&["value", "solo", "family", "soup"]);
    let first = compose(&set, "주말 점심");
    for _ in 0..5 {
        assert_eq!(compose(&set, "주말 점심"), first);
    }
    assert!(first.contains("명동 설렁탕"));
    assert!(first.contains("혼밥천국 비빔밥"));
}

#[test]
fn compose_does_not_mutate_selection() {
    let set = set_of(&["BBQ", "team-dinner"]);
    let before = set.clone();
    let _ = compose(&set, "x");
    assert_eq!(set, before);
}

#[test]
fn double_toggle_restores_the_set() {
    let mut set = set_of(&["BBQ", "family"]);
    let before = set.clone();
    toggle_tag(&mut set, "vegan");
    toggle_tag(&mut set, "vegan");
    assert_eq!(set, before);

    clear_all(&mut set);
    assert_eq!(compose(&set, "아무거나"), compose(&SelectionSet::new(), ""));
}

#[test]
fn user_message_examples() {
    let cases: [(&[&str], &str, &str); 3] = [
        (&["BBQ", "date-spot"], " 근처로 ", "선택한 옵션: BBQ, date-spot\n\n근처로"),
        (&["vegan"], "", "선택한 옵션: vegan"),
        (&[], "혼밥 하기 좋은 곳", "혼밥 하기 좋은 곳"),
    ];
    for (tags, text, expected) in cases {
        assert_eq!(user_message(&set_of(tags), text), expected);
    }
}

#[test]
fn send_gate() {
    assert!(!can_send(&SelectionSet::new(), "   "));
    assert!(can_send(&SelectionSet::new(), "hi"));
    assert!(can_send(&set_of(&["solo"]), ""));
}

#[test]
fn topic_replies() {
    assert!(topic_reply("BBQ").starts_with("한국 BBQ는 정말 최고죠!"));
    assert_eq!(topic_reply("🥩 BBQ 맛집"), topic_reply("BBQ"));
    assert!(topic_reply("rooftop").starts_with("좋은 선택이에요!"));
}
