//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `users` 컬렉션에 대한 CRUD 연산을 제공합니다.
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다.
//!
//! - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
//! - 존재하지 않는 id나 ObjectId 형식이 아닌 id는 에러가 아니라
//!   "없음"(`None` / `false`)으로 취급합니다. NotFound 판정은 서비스
//!   계층의 책임입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let repo = UserRepository::new(database.clone());
//!
//! let created = repo.insert(User::new("Maria Brown".into(), "maria@gmail.com".into())).await?;
//! let user_id = created.id_string().unwrap();
//!
//! let found = repo.find_by_id(&user_id).await?;
//! let removed = repo.delete(&user_id).await?;
//! ```

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;
use crate::db::Database;
use crate::domain::entities::user::User;
use crate::errors::AppError;

/// `users` 컬렉션 이름
const COLLECTION_NAME: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// `Arc<Database>`를 명시적으로 주입받아 생성되며,
/// `users` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    /// 새 리포지토리 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 전체 사용자 조회
    ///
    /// 저장 순서(자연 순서) 그대로 반환하며 페이지네이션은 없습니다.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// ObjectId 형식이 아닌 id는 존재할 수 없으므로 `Ok(None)`으로
    /// 처리합니다. 호출자 입장에서는 "없는 id"와 구분되지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 id의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 삽입
    ///
    /// 저장소가 부여한 id를 엔티티에 채워 반환합니다.
    pub async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let inserted_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| {
                AppError::InternalError("저장소가 ObjectId를 반환하지 않았습니다".to_string())
            })?;

        user.id = Some(inserted_id);
        Ok(user)
    }

    /// 사용자 문서 전체 교체
    ///
    /// 엔티티의 id를 기준으로 문서를 통째로 교체합니다.
    /// 사전 존재 확인 없이 upsert로 동작합니다 (원본 save 의미론).
    pub async fn replace(&self, user: &User) -> Result<(), AppError> {
        let object_id = user.id.ok_or_else(|| {
            AppError::InternalError("교체할 문서에 id가 없습니다".to_string())
        })?;

        self.collection()
            .replace_one(doc! { "_id": object_id }, user)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 사용자 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 문서가 삭제된 경우
    /// * `Ok(false)` - 해당 id의 문서가 없던 경우
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
