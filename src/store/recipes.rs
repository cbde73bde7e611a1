//! # 레시피 스토어 어댑터
//!
//! identity(사용자 이메일) 하나의 레시피 컬렉션 전체를 key-value 저장소에서
//! 읽고 쓰는 계층입니다. 저장 단위는 언제나 컬렉션 전체입니다 — 부분
//! 업데이트나 낙관적 잠금 토큰은 없고, identity-컬렉션 단위로 마지막
//! 저장이 이깁니다.
//!
//! 읽기는 관대하고 쓰기는 엄격합니다:
//! - 손상되었거나 옛 형태의 페이로드는 경고 로그 후 빈 컬렉션으로
//!   강등됩니다. 목록 화면은 항상 떠야 합니다.
//! - 쓰기 실패(쿼터 초과 등)는 그대로 호출자에게 전파됩니다.

use crate::error::AppError;
use crate::models::RecipeVersion;
use crate::store::kv::KeyValueStore;
use serde_json::Value;

/// 초기 버전이 쓰던 저장 키. identity를 JSON 문자열로 감싼 형태였습니다
/// (따옴표가 키에 포함된 `"user@example.com"` 꼴). 지금은 identity 원문을
/// 키로 쓰고, 이 형태는 읽기 폴백으로만 남겨둡니다.
fn legacy_key(identity: &str) -> String {
    serde_json::to_string(identity).unwrap_or_else(|_| format!("\"{identity}\""))
}

/// identity의 레시피 컬렉션을 불러옵니다.
///
/// 키가 없으면(레거시 키 포함) 빈 컬렉션. 페이로드가 기대한 모양이
/// 아니면 경고를 남기고 빈 컬렉션 — 파싱 문제로 에러를 돌려주는 일은
/// 없습니다. 단일 객체 하나만 저장돼 있으면 1개짜리 컬렉션으로
/// 감싸서 돌려줍니다.
pub async fn load_collection(
    store: &dyn KeyValueStore,
    identity: &str,
) -> Result<Vec<RecipeVersion>, AppError> {
    let raw = match store.get(identity).await? {
        Some(raw) => Some(raw),
        // 정규화 이전에 저장된 데이터는 JSON 따옴표가 붙은 키 밑에 있다
        None => store.get(&legacy_key(identity)).await?,
    };

    Ok(match raw {
        Some(raw) => parse_collection(&raw, identity),
        None => Vec::new(),
    })
}

/// identity의 컬렉션 전체를 직렬화해 덮어씁니다.
///
/// 항상 정규화된 키(원문 identity) 밑에 저장합니다. 매체가 쓰기를
/// 거부하면 `Storage` 에러가 그대로 올라가고, 저장소의 기존 페이로드는
/// 변하지 않습니다 (부분 커밋 없음).
pub async fn save_collection(
    store: &dyn KeyValueStore,
    identity: &str,
    collection: &[RecipeVersion],
) -> Result<(), AppError> {
    let payload = serde_json::to_string(collection)
        .map_err(|e| AppError::Internal(format!("Failed to serialize collection: {e}")))?;
    store.set(identity, &payload).await?;
    Ok(())
}

/// 저장된 페이로드를 관대하게 해석합니다.
///
/// - JSON 배열 → 컬렉션 (항목 모양이 틀리면 경고 후 빈 컬렉션)
/// - JSON 객체 → 1개짜리 컬렉션으로 래핑
/// - 그 외 → 경고 후 빈 컬렉션
fn parse_collection(raw: &str, identity: &str) -> Vec<RecipeVersion> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("stored payload for '{}' is not valid JSON: {}", identity, e);
            return Vec::new();
        }
    };

    match value {
        Value::Array(_) => serde_json::from_value::<Vec<RecipeVersion>>(value).unwrap_or_else(|e| {
            tracing::warn!(
                "stored payload for '{}' is not a recipe collection: {}",
                identity,
                e
            );
            Vec::new()
        }),
        Value::Object(_) => match serde_json::from_value::<RecipeVersion>(value) {
            Ok(single) => vec![single],
            Err(e) => {
                tracing::warn!("stored payload for '{}' is not a recipe: {}", identity, e);
                Vec::new()
            }
        },
        _ => {
            tracing::warn!("stored payload for '{}' is not a sequence", identity);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;

    const IDENTITY: &str = "cook@example.com";

    fn entry(title: &str, version: i64) -> RecipeVersion {
        RecipeVersion {
            title: title.to_string(),
            tags: vec!["spicy".to_string()],
            ingredients: vec!["kimchi".to_string(), "pork".to_string()],
            steps: vec!["boil".to_string(), "simmer".to_string()],
            version,
            created_at: "2024-06-01T00:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn absent_key_loads_as_empty_collection() {
        let store = MemoryStore::new();
        let collection = load_collection(&store, IDENTITY).await.unwrap();
        assert!(collection.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let store = MemoryStore::new();
        let collection = vec![entry("Kimchi Stew", 1)];

        save_collection(&store, IDENTITY, &collection).await.unwrap();
        let loaded = load_collection(&store, IDENTITY).await.unwrap();

        assert_eq!(loaded, collection);
    }

    #[tokio::test]
    async fn malformed_payload_degrades_to_empty() {
        let store = MemoryStore::with_entries([(IDENTITY, "{not json at all")]);
        assert!(load_collection(&store, IDENTITY).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_sequence_payload_degrades_to_empty() {
        let store = MemoryStore::with_entries([(IDENTITY, "42")]);
        assert!(load_collection(&store, IDENTITY).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn array_of_wrong_shape_degrades_to_empty() {
        let store = MemoryStore::with_entries([(IDENTITY, r#"[{"name":"not a recipe"}]"#)]);
        assert!(load_collection(&store, IDENTITY).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn single_object_payload_is_wrapped_into_collection() {
        let single = serde_json::to_string(&entry("Kimchi Stew", 1)).unwrap();
        let store = MemoryStore::with_entries([(IDENTITY, single)]);

        let loaded = load_collection(&store, IDENTITY).await.unwrap();
        assert_eq!(loaded, vec![entry("Kimchi Stew", 1)]);
    }

    #[tokio::test]
    async fn legacy_quoted_key_is_read_as_fallback() {
        // 정규화 전에는 JSON.stringify(email)이 그대로 키였다
        let payload = serde_json::to_string(&vec![entry("Kimchi Stew", 1)]).unwrap();
        let store = MemoryStore::with_entries([(format!("\"{IDENTITY}\""), payload)]);

        let loaded = load_collection(&store, IDENTITY).await.unwrap();
        assert_eq!(loaded, vec![entry("Kimchi Stew", 1)]);
    }

    #[tokio::test]
    async fn normalized_key_wins_over_legacy_key() {
        let normalized = serde_json::to_string(&vec![entry("New", 1)]).unwrap();
        let legacy = serde_json::to_string(&vec![entry("Old", 1)]).unwrap();
        let store = MemoryStore::with_entries([
            (IDENTITY.to_string(), normalized),
            (format!("\"{IDENTITY}\""), legacy),
        ]);

        let loaded = load_collection(&store, IDENTITY).await.unwrap();
        assert_eq!(loaded, vec![entry("New", 1)]);
    }

    #[tokio::test]
    async fn write_failure_surfaces_as_storage_error() {
        let store = MemoryStore::with_capacity(4);
        let err = save_collection(&store, IDENTITY, &[entry("Kimchi Stew", 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn collections_are_namespaced_per_identity() {
        let store = MemoryStore::new();
        save_collection(&store, "a@example.com", &[entry("A", 1)])
            .await
            .unwrap();
        save_collection(&store, "b@example.com", &[entry("B", 1)])
            .await
            .unwrap();

        assert_eq!(
            load_collection(&store, "a@example.com").await.unwrap(),
            vec![entry("A", 1)]
        );
        assert_eq!(
            load_collection(&store, "b@example.com").await.unwrap(),
            vec![entry("B", 1)]
        );
    }
}
