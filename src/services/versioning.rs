//! # 버전 엔진
//!
//! 레시피 이력 관리의 핵심 규칙이 모여 있는 모듈입니다.
//! 전부 메모리 위의 컬렉션 값만 다루는 순수 함수라서 저장 매체나
//! HTTP와 무관하게 단독으로 테스트할 수 있습니다.
//!
//! 규칙 요약:
//! - 저장은 항상 "추가"입니다. 기존 버전은 절대 수정/삭제되지 않습니다.
//! - 새 버전 번호 = 해당 제목의 기존 버전들 중 최댓값 + 1 (없으면 1).
//!   마지막 항목의 번호 + 1이 아닙니다 — 부분집합이 정렬되어 있다는
//!   보장이 없기 때문입니다.
//! - 제목 단위 삭제만이 유일한 제거 연산이며, 그 제목의 모든 버전을
//!   되돌릴 수 없게 제거합니다.

use crate::error::AppError;
use crate::models::{RecipeVersion, SaveRecipeRequest};

/// 저장 직전의 입력 검증. 어떤 계산보다도 먼저 실행됩니다.
///
/// - 제목은 공백 제거 후 비어 있으면 안 됩니다.
/// - tags / ingredients / steps의 각 항목도 공백 제거 후 비어 있으면
///   안 됩니다. 목록 자체가 빈 것은 허용합니다 (편집 화면이 항상 빈
///   슬롯 하나를 깔아두므로 실제로는 도달하지 않는 경우지만, 호출자가
///   이를 전제해서는 안 됩니다).
///
/// 실패 시 문제가 된 첫 필드의 이름을 담은 `Validation` 에러를 돌려줍니다.
pub fn validate_draft(draft: &SaveRecipeRequest) -> Result<(), AppError> {
    if draft.title.trim().is_empty() {
        return Err(AppError::Validation {
            field: "title",
            reason: "title must not be empty".to_string(),
        });
    }

    let list_fields = [
        ("tags", &draft.tags),
        ("ingredients", &draft.ingredients),
        ("steps", &draft.steps),
    ];
    for (field, items) in list_fields {
        if items.iter().any(|item| item.trim().is_empty()) {
            return Err(AppError::Validation {
                field,
                reason: format!("every {field} entry must be non-blank"),
            });
        }
    }

    Ok(())
}

/// 주어진 제목의 다음 버전 번호를 계산합니다.
///
/// 제목이 일치하는 항목들의 version 최댓값 + 1. 일치하는 항목이 없으면 1.
pub fn next_version(collection: &[RecipeVersion], title: &str) -> i64 {
    collection
        .iter()
        .filter(|entry| entry.title == title)
        .map(|entry| entry.version)
        .max()
        .map_or(1, |max| max + 1)
}

/// 검증 → 버전 계산 → 새 버전 주조 → 추가.
///
/// 입력 컬렉션은 건드리지 않고, 새 버전이 덧붙은 **새 컬렉션 값**과
/// 방금 주조된 버전을 돌려줍니다. 영속화는 호출자가 스토어 어댑터로
/// 수행합니다. `created_at`은 호출 시점의 타임스탬프 문자열입니다.
pub fn append_version(
    collection: &[RecipeVersion],
    draft: &SaveRecipeRequest,
    created_at: String,
) -> Result<(Vec<RecipeVersion>, RecipeVersion), AppError> {
    validate_draft(draft)?;

    let minted = RecipeVersion {
        title: draft.title.clone(),
        tags: draft.tags.clone(),
        ingredients: draft.ingredients.clone(),
        steps: draft.steps.clone(),
        version: next_version(collection, &draft.title),
        created_at,
    };

    let mut next = collection.to_vec();
    next.push(minted.clone());
    Ok((next, minted))
}

/// 복구 선택: (제목, 버전) 쌍과 정확히 일치하는 항목을 찾습니다.
///
/// 읽기 전용 연산입니다 — 새 버전을 만들지도, 저장소를 건드리지도
/// 않습니다. 찾은 버전을 현재 보기/편집 대상으로 삼는 것은 호출자의
/// 몫입니다.
pub fn find_version<'a>(
    collection: &'a [RecipeVersion],
    title: &str,
    version: i64,
) -> Option<&'a RecipeVersion> {
    collection
        .iter()
        .find(|entry| entry.title == title && entry.version == version)
}

/// 제목 단위 삭제: 제목이 다른 항목들만 남긴 새 컬렉션을 만듭니다.
/// 순서는 보존됩니다.
pub fn without_title(collection: &[RecipeVersion], title: &str) -> Vec<RecipeVersion> {
    collection
        .iter()
        .filter(|entry| entry.title != title)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, version: i64) -> RecipeVersion {
        RecipeVersion {
            title: title.to_string(),
            tags: vec!["tag".to_string()],
            ingredients: vec!["ingredient".to_string()],
            steps: vec!["step".to_string()],
            version,
            created_at: format!("2024-06-0{version}T00:00:00.000Z"),
        }
    }

    fn draft(title: &str) -> SaveRecipeRequest {
        SaveRecipeRequest {
            title: title.to_string(),
            tags: vec!["spicy".to_string()],
            ingredients: vec!["kimchi".to_string(), "pork".to_string()],
            steps: vec!["boil".to_string(), "simmer".to_string()],
        }
    }

    #[test]
    fn first_save_of_a_title_is_version_one() {
        assert_eq!(next_version(&[], "Kimchi Stew"), 1);
    }

    #[test]
    fn next_version_takes_max_over_unsorted_subset() {
        // 부분집합이 정렬되어 있지 않아도 최댓값 기준으로 계산해야 한다
        let collection = vec![entry("A", 2), entry("B", 7), entry("A", 1)];
        assert_eq!(next_version(&collection, "A"), 3);
        assert_eq!(next_version(&collection, "B"), 8);
    }

    #[test]
    fn versions_stay_monotonic_across_interleaved_titles() {
        // 다른 제목의 저장이 사이에 끼어도 각 제목의 버전은 1..N
        let mut collection: Vec<RecipeVersion> = Vec::new();
        for title in ["A", "B", "A", "C", "A", "B"] {
            let (next, _) =
                append_version(&collection, &draft(title), "t".to_string()).unwrap();
            collection = next;
        }

        let versions_of = |title: &str| {
            collection
                .iter()
                .filter(|e| e.title == title)
                .map(|e| e.version)
                .collect::<Vec<_>>()
        };
        assert_eq!(versions_of("A"), vec![1, 2, 3]);
        assert_eq!(versions_of("B"), vec![1, 2]);
        assert_eq!(versions_of("C"), vec![1]);
    }

    #[test]
    fn append_preserves_prior_entries_unchanged() {
        let collection = vec![entry("Kimchi Stew", 1), entry("Kimchi Stew", 2)];
        let (next, minted) =
            append_version(&collection, &draft("Kimchi Stew"), "t3".to_string()).unwrap();

        assert_eq!(minted.version, 3);
        assert_eq!(next.len(), 3);
        // 기존 항목들은 그대로 앞자리에 남아 있어야 한다
        assert_eq!(&next[..2], &collection[..]);
        // 입력 컬렉션 자체도 변하지 않았다
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn minted_version_carries_draft_content_and_timestamp() {
        let (_, minted) =
            append_version(&[], &draft("Kimchi Stew"), "2024-06-01T00:00:00.000Z".to_string())
                .unwrap();
        assert_eq!(minted.title, "Kimchi Stew");
        assert_eq!(minted.tags, vec!["spicy"]);
        assert_eq!(minted.ingredients, vec!["kimchi", "pork"]);
        assert_eq!(minted.steps, vec!["boil", "simmer"]);
        assert_eq!(minted.version, 1);
        assert_eq!(minted.created_at, "2024-06-01T00:00:00.000Z");
    }

    #[test]
    fn blank_title_is_rejected_before_anything_else() {
        let mut bad = draft("   ");
        bad.steps = vec!["".to_string()]; // 다른 필드도 틀렸지만 title이 먼저다
        let err = append_version(&[], &bad, "t".to_string()).unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "title", .. }));
    }

    #[test]
    fn blank_list_entries_are_rejected_with_field_name() {
        let mut bad = draft("Kimchi Stew");
        bad.tags.push(" ".to_string());
        assert!(matches!(
            validate_draft(&bad).unwrap_err(),
            AppError::Validation { field: "tags", .. }
        ));

        let mut bad = draft("Kimchi Stew");
        bad.ingredients.push("".to_string());
        assert!(matches!(
            validate_draft(&bad).unwrap_err(),
            AppError::Validation { field: "ingredients", .. }
        ));

        let mut bad = draft("Kimchi Stew");
        bad.steps.push("\t".to_string());
        assert!(matches!(
            validate_draft(&bad).unwrap_err(),
            AppError::Validation { field: "steps", .. }
        ));
    }

    #[test]
    fn empty_tag_list_is_allowed() {
        let mut ok = draft("Plain Rice");
        ok.tags = Vec::new();
        assert!(validate_draft(&ok).is_ok());
    }

    #[test]
    fn find_version_matches_exact_pair_only() {
        let collection = vec![entry("A", 1), entry("A", 2), entry("B", 1)];
        assert_eq!(find_version(&collection, "A", 2), Some(&collection[1]));
        assert_eq!(find_version(&collection, "A", 3), None);
        assert_eq!(find_version(&collection, "C", 1), None);
    }

    #[test]
    fn without_title_removes_every_version_of_that_title() {
        let collection = vec![entry("A", 1), entry("B", 1), entry("A", 2)];
        let remaining = without_title(&collection, "A");
        assert_eq!(remaining, vec![entry("B", 1)]);

        // 전부 지우면 빈 컬렉션
        assert!(without_title(&remaining, "B").is_empty());
    }
}
