//! # 게시물 서비스 구현
//!
//! 게시물 조회/검색의 비즈니스 로직을 담당하는 서비스입니다.
//!
//! ## 상한 날짜 보정
//!
//! 통합 검색의 `maxDate`는 `yyyy-MM-dd` 형태로 들어와 자정(00:00:00)으로
//! 해석됩니다. 호출자가 의도한 마지막 달력일 전체를 포함시키기 위해
//! 상한에 정확히 하루(86,400,000ms)를 더한 뒤 쿼리합니다.
//! "그날의 끝으로 자르기"가 아니라 +24h 덧셈이라는 점이 중요합니다.

use std::sync::Arc;
use chrono::{DateTime, Duration, Utc};
use crate::domain::entities::post::Post;
use crate::errors::{AppError, AppResult};
use crate::repositories::posts::post_repo::PostRepository;

/// NotFound 메시지 (게시물)
const POST_NOT_FOUND: &str = "게시물을 찾을 수 없습니다";

/// 상한 날짜에 하루를 더합니다.
///
/// 정확히 86,400,000ms를 더해 `maxDate` 달력일 전체가 범위에 포함되도록
/// 합니다.
fn adjust_max_date(max_date: DateTime<Utc>) -> DateTime<Utc> {
    max_date + Duration::days(1)
}

/// 게시물 비즈니스 로직 서비스
pub struct PostService {
    post_repo: Arc<PostRepository>,
}

impl PostService {
    /// 새 서비스 인스턴스를 생성합니다.
    pub fn new(post_repo: Arc<PostRepository>) -> Self {
        Self { post_repo }
    }

    /// 전체 게시물 조회
    pub async fn find_all(&self) -> AppResult<Vec<Post>> {
        self.post_repo.find_all().await
    }

    /// ID로 게시물 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Post)` - 게시물 (내장 댓글 포함)
    /// * `Err(AppError::NotFound)` - 해당 id의 게시물이 존재하지 않음
    pub async fn find_by_id(&self, id: &str) -> AppResult<Post> {
        Self::require_post(self.post_repo.find_by_id(id).await?)
    }

    /// 조회 결과의 "없음"을 도메인 에러로 변환합니다.
    fn require_post(post: Option<Post>) -> AppResult<Post> {
        post.ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))
    }

    /// 제목 부분 문자열 검색
    ///
    /// 대소문자를 무시하고 제목에 `text`가 포함된 게시물을 반환합니다.
    pub async fn find_by_title(&self, text: &str) -> AppResult<Vec<Post>> {
        self.post_repo.search_title(text).await
    }

    /// 통합 검색 (텍스트 + 날짜 범위)
    ///
    /// 날짜가 `[min_date, max_date + 1일]` 범위 안에 있고, 제목/본문/댓글
    /// 텍스트 중 하나라도 `text`를 포함하는 게시물을 반환합니다.
    pub async fn full_search(
        &self,
        text: &str,
        min_date: DateTime<Utc>,
        max_date: DateTime<Utc>,
    ) -> AppResult<Vec<Post>> {
        let max_date = adjust_max_date(max_date);

        self.post_repo
            .full_search(
                text,
                mongodb::bson::DateTime::from_chrono(min_date),
                mongodb::bson::DateTime::from_chrono(max_date),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::domain::entities::post::AuthorRef;

    #[test]
    fn test_missing_post_maps_to_not_found() {
        let result = PostService::require_post(None);

        match result {
            Err(AppError::NotFound(message)) => assert_eq!(message, POST_NOT_FOUND),
            other => panic!("NotFound가 아님: {:?}", other.map(|p| p.title)),
        }
    }

    #[test]
    fn test_found_post_passes_through() {
        let post = Post::new(
            mongodb::bson::DateTime::now(),
            "Partiu viagem".to_string(),
            "Vou viajar para São Paulo. Abraços!".to_string(),
            AuthorRef {
                id: "507f1f77bcf86cd799439011".to_string(),
                name: "Maria Brown".to_string(),
            },
        );

        let found = PostService::require_post(Some(post.clone())).unwrap();

        assert_eq!(found, post);
    }

    #[test]
    fn test_chrono_to_bson_conversion_preserves_millis() {
        let max = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let converted = mongodb::bson::DateTime::from_chrono(max);

        assert_eq!(converted.timestamp_millis(), max.timestamp_millis());
    }

    #[test]
    fn test_adjustment_adds_exactly_one_day_in_millis() {
        let max = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let adjusted = adjust_max_date(max);

        assert_eq!(
            adjusted.timestamp_millis() - max.timestamp_millis(),
            86_400_000
        );
    }

    #[test]
    fn test_adjusted_upper_bound_covers_full_calendar_day() {
        // maxDate=2024-01-10 → 상한은 2024-01-11T00:00:00Z
        let max = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let adjusted = adjust_max_date(max);

        let late_on_max_day = Utc.with_ymd_and_hms(2024, 1, 10, 23, 59, 0).unwrap();
        let just_past_boundary = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 1).unwrap();

        assert!(late_on_max_day <= adjusted);
        assert!(just_past_boundary > adjusted);
    }

    #[test]
    fn test_adjustment_is_addition_not_truncation() {
        // 자정이 아닌 시각도 그대로 +24h 된다 (그날의 끝으로 자르지 않음)
        let max = Utc.with_ymd_and_hms(2024, 1, 10, 15, 30, 45).unwrap();
        let adjusted = adjust_max_date(max);

        assert_eq!(
            adjusted,
            Utc.with_ymd_and_hms(2024, 1, 11, 15, 30, 45).unwrap()
        );
    }
}
