//! # 게시물 리포지토리 구현
//!
//! 게시물 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `posts` 컬렉션에 대한 조회와 두 가지 검색 쿼리를 제공합니다.
//!
//! ## 쿼리 구성
//!
//! 원본 시스템이 선언적으로 기술하던 두 쿼리 형태를
//! `bson::doc!` 기반의 명시적 필터 구성 함수로 재현합니다.
//!
//! 1. **제목 검색**: 단일 필드에 대한 대소문자 무시 정규식 포함 검사
//!    ```text
//!    { "title": { "$regex": text, "$options": "i" } }
//!    ```
//! 2. **통합 검색**: 날짜 범위 AND (제목 ∨ 본문 ∨ 댓글 텍스트) 포함 검사
//!    ```text
//!    { "$and": [
//!        { "date": { "$gte": min } },
//!        { "date": { "$lte": max } },
//!        { "$or": [ title, body, comments.text ] } ] }
//!    ```
//!
//! 랭킹/페이지네이션/프로젝션은 적용하지 않으며 결과 순서는 저장소의
//! 자연 순서를 따릅니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use crate::db::Database;
use crate::domain::entities::post::Post;
use crate::errors::AppError;

/// `posts` 컬렉션 이름
const COLLECTION_NAME: &str = "posts";

/// 단일 필드에 대한 대소문자 무시 부분 문자열 필터를 만듭니다.
///
/// 앵커 없는 정규식 포함 검사이므로 "XYZ ABC 123"은 "abc"에 매칭됩니다.
fn contains_ci(field: &str, text: &str) -> Document {
    doc! { field: { "$regex": text, "$options": "i" } }
}

/// 제목 검색 필터를 만듭니다.
pub fn title_search_filter(text: &str) -> Document {
    contains_ci("title", text)
}

/// 통합 검색 필터를 만듭니다.
///
/// 날짜가 `[min_date, max_date]` 범위 안에 있고, 제목/본문/내장 댓글
/// 텍스트 중 하나라도 `text`를 포함하는 게시물을 찾습니다.
/// 상한 보정(+1일)은 서비스 계층에서 이미 적용된 값을 받습니다.
pub fn full_search_filter(text: &str, min_date: DateTime, max_date: DateTime) -> Document {
    doc! {
        "$and": [
            { "date": { "$gte": min_date } },
            { "date": { "$lte": max_date } },
            { "$or": [
                contains_ci("title", text),
                contains_ci("body", text),
                contains_ci("comments.text", text),
            ] },
        ]
    }
}

/// 게시물 데이터 액세스 리포지토리
///
/// `Arc<Database>`를 명시적으로 주입받아 생성되며,
/// `posts` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
pub struct PostRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl PostRepository {
    /// 새 리포지토리 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Post> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 전체 게시물 조회
    ///
    /// 저장 순서(자연 순서) 그대로 반환하며 페이지네이션은 없습니다.
    pub async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        self.find_with(doc! {}).await
    }

    /// ID로 게시물 조회
    ///
    /// ObjectId 형식이 아닌 id는 `Ok(None)`으로 처리합니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 제목 부분 문자열 검색
    ///
    /// 대소문자를 무시하고 제목에 `text`가 포함된 게시물을 찾습니다.
    pub async fn search_title(&self, text: &str) -> Result<Vec<Post>, AppError> {
        self.find_with(title_search_filter(text)).await
    }

    /// 통합 검색 (텍스트 + 날짜 범위)
    ///
    /// [`full_search_filter`]로 구성한 복합 필터를 실행합니다.
    pub async fn full_search(
        &self,
        text: &str,
        min_date: DateTime,
        max_date: DateTime,
    ) -> Result<Vec<Post>, AppError> {
        self.find_with(full_search_filter(text, min_date, max_date)).await
    }

    /// 날짜 범위 쿼리를 위한 인덱스를 생성합니다.
    ///
    /// 시작 시점에 한 번 호출되며, 이미 존재하는 인덱스는 무시됩니다.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let date_index = IndexModel::builder()
            .keys(doc! { "date": -1 })
            .options(IndexOptions::builder()
                .name("date_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_index(date_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_with(&self, filter: Document) -> Result<Vec<Post>, AppError> {
        let cursor = self
            .collection()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_filter_is_case_insensitive_containment() {
        let filter = title_search_filter("abc");
        let title = filter.get_document("title").unwrap();

        // 앵커 없는 정규식 + 대소문자 무시 옵션
        assert_eq!(title.get_str("$regex").unwrap(), "abc");
        assert_eq!(title.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_title_filter_empty_text_matches_everything() {
        let filter = title_search_filter("");
        let title = filter.get_document("title").unwrap();

        // 빈 패턴은 모든 제목에 매칭된다
        assert_eq!(title.get_str("$regex").unwrap(), "");
    }

    #[test]
    fn test_full_search_filter_shape() {
        let min = DateTime::from_millis(0);
        let max = DateTime::from_millis(1_704_931_200_000);
        let filter = full_search_filter("viagem", min, max);

        let and = filter.get_array("$and").unwrap();
        assert_eq!(and.len(), 3);

        let gte = and[0].as_document().unwrap().get_document("date").unwrap();
        assert_eq!(gte.get_datetime("$gte").unwrap(), &min);

        let lte = and[1].as_document().unwrap().get_document("date").unwrap();
        assert_eq!(lte.get_datetime("$lte").unwrap(), &max);
    }

    #[test]
    fn test_full_search_filter_covers_title_body_and_comment_text() {
        let min = DateTime::from_millis(0);
        let max = DateTime::from_millis(86_400_000);
        let filter = full_search_filter("bom dia", min, max);

        let and = filter.get_array("$and").unwrap();
        let or = and[2].as_document().unwrap().get_array("$or").unwrap();
        assert_eq!(or.len(), 3);

        let fields: Vec<&str> = or
            .iter()
            .map(|branch| {
                branch
                    .as_document()
                    .unwrap()
                    .keys()
                    .next()
                    .unwrap()
                    .as_str()
            })
            .collect();

        assert_eq!(fields, vec!["title", "body", "comments.text"]);

        for branch in or {
            let field_doc = branch.as_document().unwrap();
            let inner = field_doc.values().next().unwrap().as_document().unwrap();
            assert_eq!(inner.get_str("$regex").unwrap(), "bom dia");
            assert_eq!(inner.get_str("$options").unwrap(), "i");
        }
    }
}
