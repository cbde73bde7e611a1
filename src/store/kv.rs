//! # key-value 저장소 추상화
//!
//! 원본 서비스가 브라우저 localStorage에 기대던 계약을 그대로 옮긴
//! 최소한의 인터페이스입니다: `get(key) -> Option<String>`, `set(key, value)`.
//! 트랜잭션도, 부분 업데이트도 없습니다. 값은 언제나 통째로 교체됩니다.
//!
//! 백엔드는 두 가지입니다:
//! - `SqliteStore`: 프로덕션용. key-value 테이블 하나를 가진 SQLite
//! - `MemoryStore`: 테스트용. HashMap + RwLock (용량 제한 시뮬레이션 가능)

use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

/// 저장 매체 수준의 실패.
///
/// 읽기 실패와 쓰기 실패를 구분합니다. 쓰기 실패(용량 초과 등)는
/// 호출자에게 그대로 전달되어야 하는 반면, 읽기 쪽 이상은 상위의
/// 스토어 어댑터가 빈 컬렉션으로 강등시킬 수도 있기 때문입니다.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// localStorage 모양의 key-value 저장소 인터페이스.
///
/// `async_trait`을 쓰는 이유: async 메서드를 가진 트레이트를
/// `Arc<dyn KeyValueStore>`로 상태에 주입하기 위해서입니다.
/// 핵심 로직(버전 엔진, 프로젝션)은 이 트레이트 뒤의 매체가
/// 무엇인지 전혀 모릅니다.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 키에 저장된 원문 문자열을 돌려줍니다. 키가 없으면 `None`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// 키의 값을 통째로 덮어씁니다. 매체가 쓰기를 거부하면 에러.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// SQLite를 매체로 쓰는 프로덕션 백엔드.
///
/// `recipe_collections` 테이블이 localStorage 역할을 합니다.
/// payload는 SQL 입장에서 불투명한 문자열입니다 — 쿼리가 JSON 내부를
/// 들여다보는 일은 없습니다.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        sqlx::query_scalar::<_, String>(
            "SELECT payload FROM recipe_collections WHERE identity = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Read(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO recipe_collections (identity, payload)
            VALUES (?, ?)
            ON CONFLICT(identity) DO UPDATE SET
                payload = excluded.payload,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Write(e.to_string()))?;

        Ok(())
    }
}

/// 테스트용 인메모리 백엔드.
///
/// `RwLock<HashMap>`이라 모든 메서드가 `&self`로 동작합니다.
/// `with_capacity`로 localStorage 쿼터 초과 같은 쓰기 실패를 흉내낼 수
/// 있습니다 (저장된 값들의 총 바이트 수가 한도를 넘으면 set이 실패).
#[cfg(test)]
pub struct MemoryStore {
    capacity: Option<usize>,
    entries: tokio::sync::RwLock<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self {
            capacity: None,
            entries: tokio::sync::RwLock::new(std::collections::HashMap::new()),
        }
    }

    /// 키-값 쌍들로 미리 채워진 스토어를 만듭니다.
    pub fn with_entries(
        entries: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            capacity: None,
            entries: tokio::sync::RwLock::new(map),
        }
    }

    /// 총 저장 바이트 한도를 지정합니다. 한도를 넘기는 set은 실패합니다.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            capacity: Some(bytes),
            ..Self::new()
        }
    }
}

#[cfg(test)]
#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;

        if let Some(capacity) = self.capacity {
            let replaced = entries.get(key).map(|v| v.len()).unwrap_or(0);
            let total: usize = entries.values().map(|v| v.len()).sum();
            if total - replaced + value.len() > capacity {
                return Err(StoreError::Write("quota exceeded".to_string()));
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
