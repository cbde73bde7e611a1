//! # 프로젝션 엔진
//!
//! 날것의 버전 이력을 화면이 원하는 모양으로 접는 순수 함수들입니다.
//! - 목록 화면: 제목마다 최신 버전 하나 (`latest_per_title`)
//! - 상세 화면의 이력/복구 목록: 한 제목의 모든 버전 (`history_for_title`)

use crate::models::RecipeVersion;

/// 제목별 최신 버전 하나씩만 남깁니다.
///
/// 같은 제목 안에서는 version이 가장 큰 항목이 살아남습니다.
/// 같은 최댓값이 둘 이상이면(정상 운영에서는 없지만 두 탭 동시 저장으로
/// 생길 수 있음) 입력 순서상 나중 항목이 이깁니다 — `>=` 비교 하나가
/// 이 last-wins 규칙 전부입니다.
///
/// 출력 순서는 각 제목이 처음 등장한 순서입니다. 호출자가 이 순서에
/// 의존해서는 안 되지만, 결정적이어서 테스트하기 편합니다.
pub fn latest_per_title(collection: &[RecipeVersion]) -> Vec<RecipeVersion> {
    let mut latest: Vec<RecipeVersion> = Vec::new();
    for entry in collection {
        match latest.iter_mut().find(|kept| kept.title == entry.title) {
            Some(kept) => {
                if entry.version >= kept.version {
                    *kept = entry.clone();
                }
            }
            None => latest.push(entry.clone()),
        }
    }
    latest
}

/// 한 제목의 전체 이력을 버전 오름차순으로 돌려줍니다.
///
/// 어댑터가 정렬되지 않은 컬렉션을 돌려줘도 표시 순서는 여기서 보장합니다.
pub fn history_for_title(collection: &[RecipeVersion], title: &str) -> Vec<RecipeVersion> {
    let mut history: Vec<RecipeVersion> = collection
        .iter()
        .filter(|entry| entry.title == title)
        .cloned()
        .collect();
    history.sort_by_key(|entry| entry.version);
    history
}
