//! Static tag catalog.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FoodStyle,
    Occasion,
    Constraint,
}

/// One selectable intent tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    /// Short stable key used by rules.
    pub key: &'static str,
    /// Chip label as shown to the user.
    pub label: &'static str,
    pub category: Category,
    /// Reply used when the tag is asked about on its own.
    pub topic: &'static str,
}

pub static TAG_CATALOG: &[TagSpec] = &[
    // food style
    tag!(
        FoodStyle,
        "korean",
        "🍲 한식 추천",
        "한식 전체 카테고리에서 추천 드릴게요! 🇰🇷\n\n• **전통 한식**: 한정식, 궁중요리\n• **캐주얼 한식**: 김치찌개, 불고기, 비빔밥\n• **모던 한식**: 퓨전 스타일, 창작 요리\n\n어떤 스타일을 선호하시나요?"
    ),
    tag!(
        FoodStyle,
        "spicy",
        "🌶️ 매운 음식",
        "매콤한 한식 좋아하시는군요! 🔥\n\n• **김치찌개**: 클래식한 매운맛\n• **떡볶이**: 달콤매콤한 인기 간식\n• **매운갈비찜**: 진짜 매운 걸 원한다면\n\n매운 정도는 어느 정도까지 괜찮으신가요?"
    ),
    tag!(
        FoodStyle,
        "BBQ",
        "🥩 BBQ 맛집",
        "한국 BBQ는 정말 최고죠! 🥩\n\n• **삼겹살 전문점**: 두툼한 생삼겹\n• **갈비 맛집**: LA갈비, 왕갈비\n• **소고기 전문점**: 한우, 와규\n\n어떤 고기를 가장 좋아하시나요?"
    ),
    tag!(
        FoodStyle,
        "soup",
        "🍜 국물 요리",
        "따뜻한 국물 요리로 몸과 마음을 따뜻하게! 🍜\n\n• **설렁탕**: 진한 사골 국물\n• **순두부찌개**: 부드럽고 얼큰한\n• **냉면**: 시원한 물냉면, 비냉면\n\n따뜻한 국물과 차가운 국물 중 어떤 걸 원하시나요?"
    ),
    tag!(
        FoodStyle,
        "stew",
        "🥘 전골/찌개",
        "여럿이 함께 나눠 먹는 전골/찌개! 🥘\n\n• **부대찌개**: 햄, 소시지가 들어간\n• **생선찌개**: 신선한 생선으로\n• **버섯전골**: 다양한 버섯의 조화\n\n몇 명이서 드실 예정인가요?"
    ),
    tag!(
        FoodStyle,
        "rice",
        "🍚 밥류",
        "든든한 한국 밥 요리들! 🍚\n\n• **비빔밥**: 영양 만점 컬러풀\n• **김치볶음밥**: 고소하고 짭짤한\n• **굴밥**: 바다의 우유와 함께\n\n어떤 토핑을 좋아하시나요?"
    ),
    // occasion
    tag!(
        Occasion,
        "date-spot",
        "💑 데이트 맛집",
        "로맨틱한 데이트에 완벽한 곳들이에요! 💕\n\n• **분위기 좋은 곳**: 조명, 인테리어\n• **조용한 곳**: 대화하기 좋은\n• **술과 안주**: 분위기 있는 주점\n\n어떤 분위기를 원하시나요?"
    ),
    tag!(
        Occasion,
        "family",
        "👨‍👩‍👧‍👦 가족식사",
        "온 가족이 함께 즐길 수 있는 곳들! 👨‍👩‍👧‍👦\n\n• **넓은 룸**: 아이들과 편안하게\n• **아이 친화적**: 유아용 의자, 키즈 메뉴\n• **주차 편리**: 가족 나들이에 필수\n\n가족 구성원은 어떻게 되시나요?"
    ),
    tag!(
        Occasion,
        "team-dinner",
        "🍻 회식 장소",
        "회식하기 좋은 장소들을 추천해드릴게요! 🍻\n\n• **고기 + 술**: 삼겹살, 갈비와 소주\n• **단체 룸**: 많은 인원 수용 가능\n• **노래방 연계**: 2차까지 한 번에\n\n몇 명 정도 회식인가요?"
    ),
    tag!(
        Occasion,
        "solo",
        "😋 혼밥 추천",
        "혼자서도 편안하게 즐길 수 있는 곳들! 😋\n\n• **카운터석**: 혼자 앉기 편한\n• **빠른 서빙**: 기다리지 않고\n• **키오스크 주문**: 말 안 해도 되는\n\n어떤 음식이 먹고 싶으신가요?"
    ),
    // constraint
    tag!(
        Constraint,
        "vegan",
        "🌱 비건 메뉴",
        "건강한 비건 한식 옵션들! 🌱\n\n• **사찰음식**: 100% 식물성 재료\n• **나물 비빔밥**: 영양 가득한\n• **두부 요리**: 단백질 보충까지\n\n완전 비건식을 원하시나요, 아니면 일부 채식 메뉴만?"
    ),
    tag!(
        Constraint,
        "24h",
        "🕰️ 24시간 운영",
        "언제든 찾을 수 있는 24시간 맛집! 🕰️\n\n• **야식 메뉴**: 밤늦게 생각나는\n• **해장 요리**: 속 풀리는 국물\n• **접근성 좋은 곳**: 지하철역 근처\n\n언제쯤 방문 예정이신가요?"
    ),
    tag!(
        Constraint,
        "value",
        "💰 가성비 맛집",
        "맛있고 저렴한 가성비 끝판왕! 💰\n\n• **양 많은 곳**: 배부르게 먹을 수 있는\n• **만원 이하**: 부담 없는 가격대\n• **무한리필**: 밑반찬, 국물 등\n\n예산대는 어느 정도로 생각하고 계시나요?"
    ),
    tag!(
        Constraint,
        "michelin",
        "🌟 미슐랭 맛집",
        "특별한 날을 위한 미슐랭 맛집! 🌟\n\n• **미슐랭 스타**: 세계가 인정한 맛\n• **빕 구르망**: 가성비 좋은 미슐랭\n• **코스 요리**: 품격 있는 식사\n\n어떤 특별한 날인지 알려주시면 더 좋은 추천을 해드릴게요!"
    ),
];

// Keys and labels share one index; the catalog guarantees they never collide.
static INDEX: Lazy<HashMap<&'static str, &'static TagSpec>> = Lazy::new(|| {
    let mut m = HashMap::with_capacity(TAG_CATALOG.len() * 2);
    for spec in TAG_CATALOG {
        m.insert(spec.key, spec);
        m.insert(spec.label, spec);
    }
    m
});

/// Find a tag by key or label. Matching is exact.
pub fn lookup_tag(tag: &str) -> Option<&'static TagSpec> {
    INDEX.get(tag).copied()
}

/// Canonical key for `tag`, or the tag itself when it is not in the catalog.
pub(crate) fn canonical_key(tag: &str) -> &str {
    lookup_tag(tag).map_or(tag, |spec| spec.key)
}
