//! Static learning profiles keyed by type code.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Canned description and study tips for one code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningProfile {
    /// Code this profile belongs to; `None` for the fallback profile.
    pub code: Option<&'static str>,
    pub label: &'static str,
    #[serde(rename = "desc")]
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

impl LearningProfile {
    pub fn is_default(&self) -> bool {
        self.code.is_none()
    }
}

/// Returned for any code not in the table.
pub static DEFAULT_PROFILE: LearningProfile = LearningProfile {
    code: None,
    label: "맞춤 프로필",
    description: "당신의 응답을 바탕으로 학습 성향을 요약했습니다.",
    tips: &["핵심 개념 먼저 정리", "오답 원인 기록", "주 1회 메타인지 점검"],
};

static PROFILES: [LearningProfile; 16] = [
    LearningProfile {
        code: Some("ISTJ"),
        label: "체계적 실천가",
        description: "계획과 규칙에 강점. 체크리스트와 예제 반복으로 탄탄히 실력 쌓기.",
        tips: &[
            "단원별 체크리스트로 진도 관리",
            "예제 → 변형문제 → 서술형 순서로 난이도 상승",
            "오답노트에 ‘왜 틀렸는지’ 원인 기록",
        ],
    },
    LearningProfile {
        code: Some("ISFJ"),
        label: "성실한 서포터",
        description: "세심하고 꾸준함. 루틴과 자료정리로 안정감 있게 학습.",
        tips: &[
            "매일 같은 시간 25분 집중(포모도로) + 5분 정리",
            "요약 노트에 키워드-정의-예시 고정 포맷",
            "친구에게 설명하며 복습(티칭 효과)",
        ],
    },
    LearningProfile {
        code: Some("INFJ"),
        label: "통찰형 설계자",
        description: "핵심 의미를 파악해 구조화. 큰 그림 → 세부 구현에 강함.",
        tips: &[
            "개념지도를 그려 흐름 정리",
            "‘왜 중요한가?’ 질문으로 본질 점검",
            "프로젝트형 과제로 응용",
        ],
    },
    LearningProfile {
        code: Some("INTJ"),
        label: "전략가 플래너",
        description: "목표 지향적. 최소 노력으로 최대 효과를 설계.",
        tips: &[
            "시험 역산 스케줄(마감→주간→일간)",
            "핵심 20% 개념에 우선순위",
            "약점 과목은 ‘원인-대안’ 실험 로그",
        ],
    },
    LearningProfile {
        code: Some("ISTP"),
        label: "문제 해결 장인",
        description: "손으로 부딪치며 배우는 유형. 실습/코딩/실험 적합.",
        tips: &[
            "이론 30% → 실습 70% 비율",
            "디버깅/오류 노트 관리",
            "짧은 과제 여러 번 제출",
        ],
    },
    LearningProfile {
        code: Some("ISFP"),
        label: "감각적 탐색가",
        description: "차분하고 감각지향. 예시·케이스로 이해.",
        tips: &[
            "사례→개념→정리 순서",
            "시각 자료(도표/그림) 활용",
            "조용한 개인학습 공간 확보",
        ],
    },
    LearningProfile {
        code: Some("INFP"),
        label: "의미 추구자",
        description: "가치와 의미를 찾을 때 몰입. 글쓰기/프로젝트 학습에 강점.",
        tips: &[
            "학습 목표를 ‘나의 가치’와 연결",
            "저널링으로 배운 점/느낀 점 기록",
            "창작형 과제(포스터·블로그)로 확장",
        ],
    },
    LearningProfile {
        code: Some("INTP"),
        label: "개념 탐구자",
        description: "개념 간 연결·이론화에 강함. 깊게 파고드는 스타일.",
        tips: &[
            "정의-정리-증명 흐름으로 정리",
            "‘반례’ 찾기 훈련",
            "스터디에서 개념 질의응답 리드",
        ],
    },
    LearningProfile {
        code: Some("ESTP"),
        label: "액션 러너",
        description: "빠른 실행과 피드백 선호. 실전 문제로 배우기.",
        tips: &[
            "시간 제한 모의고사로 실전감각",
            "오답 유형별 즉시 처치",
            "성과 로그(점수, 소요시간) 기록",
        ],
    },
    LearningProfile {
        code: Some("ESFP"),
        label: "에너지 메이커",
        description: "사교적·현장형 학습. 활동 중심 과제 선호.",
        tips: &[
            "스몰 그룹 스터디 진행",
            "퀴즈/게임화로 동기 부여",
            "발표·티칭으로 아웃풋 내기",
        ],
    },
    LearningProfile {
        code: Some("ENFP"),
        label: "아이디어 점프러",
        description: "다양한 관심사와 창의성. 흥미 연결이 핵심.",
        tips: &[
            "학습 목표를 프로젝트와 연결",
            "할 일은 3가지 이하로 제한",
            "‘시작 장벽’을 낮추는 5분 규칙",
        ],
    },
    LearningProfile {
        code: Some("ENTP"),
        label: "토론형 혁신가",
        description: "질문과 반박으로 배우는 유형. 토의·디베이트 적합.",
        tips: &[
            "개념마다 ‘왜?’ 3회 질문",
            "상반된 관점 비교 표 만들기",
            "발표 과제로 정리",
        ],
    },
    LearningProfile {
        code: Some("ESTJ"),
        label: "운영 매니저",
        description: "규율·체계·실행력. 계획대로 밀어붙이는 힘.",
        tips: &[
            "주간 계획-일일 점검 루틴",
            "과제 체크리스트 완료율 관리",
            "학습 공간/자료 정리 시스템화",
        ],
    },
    LearningProfile {
        code: Some("ESFJ"),
        label: "협력 코디네이터",
        description: "사람 중심 협업형. 함께할 때 시너지.",
        tips: &[
            "역할 분담형 스터디",
            "피드백 교환 루틴",
            "서로 가르치기(페어 티칭)",
        ],
    },
    LearningProfile {
        code: Some("ENFJ"),
        label: "코치 리더",
        description: "동기 부여·조직화 강점. 팀 프로젝트에 적합.",
        tips: &[
            "팀 목표-역할-마감 명확화",
            "피어 리뷰 체크리스트",
            "성과 공유 시간 운영",
        ],
    },
    LearningProfile {
        code: Some("ENTJ"),
        label: "지휘 전략가",
        description: "목표 설정·자원 배치에 강함. 성과 중심.",
        tips: &[
            "OKR 방식(목표-핵심결과) 적용",
            "생산성 지표(시간/점수) 추적",
            "리소스(교재/도구) 최적 조합",
        ],
    },
];

static BY_CODE: Lazy<HashMap<&'static str, &'static LearningProfile>> = Lazy::new(|| {
    PROFILES
        .iter()
        .filter_map(|p| p.code.map(|code| (code, p)))
        .collect()
});

/// Profile for `code`, or [`DEFAULT_PROFILE`] when there is no exact match.
///
/// Matching is exact: `"estj"` falls back to the default.
pub fn profile_for(code: &str) -> &'static LearningProfile {
    BY_CODE.get(code).copied().unwrap_or(&DEFAULT_PROFILE)
}
