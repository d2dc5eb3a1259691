//! # Post HTTP Handlers
//!
//! 게시물 조회/검색 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 게시물은 이 시스템에서 조회 전용이며 생성/수정/삭제 엔드포인트는
//! 없습니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `GET` | `/posts` | 전체 게시물 조회 | 200 | — |
//! | `GET` | `/posts/{id}` | 게시물 조회 | 200 | 404 |
//! | `GET` | `/posts/titlesearch?text=` | 제목 검색 | 200 | — |
//! | `GET` | `/posts/fullsearch?text=&minDate=&maxDate=` | 통합 검색 | 200 | — |
//!
//! ## 쿼리 파라미터 규칙
//!
//! - `text`: 기본값은 빈 문자열 (모든 문서에 매칭). 퍼센트 디코딩 실패 시
//!   빈 문자열로 대체.
//! - `minDate`/`maxDate`: `yyyy-MM-dd` (UTC). 누락되거나 파싱 불가하면
//!   min은 epoch, max는 요청 시점의 현재 시각으로 대체.

use actix_web::{get, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use crate::errors::AppError;
use crate::services::posts::post_service::PostService;
use crate::utils::url;

/// 제목 검색 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct TitleSearchParams {
    /// 검색할 텍스트 (기본값: 빈 문자열)
    #[serde(default)]
    pub text: String,
}

/// 통합 검색 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct FullSearchParams {
    /// 검색할 텍스트 (기본값: 빈 문자열)
    #[serde(default)]
    pub text: String,
    /// 시작 날짜 `yyyy-MM-dd` (기본값: epoch)
    #[serde(default, rename = "minDate")]
    pub min_date: String,
    /// 끝 날짜 `yyyy-MM-dd` (기본값: 현재 시각)
    #[serde(default, rename = "maxDate")]
    pub max_date: String,
}

/// 전체 게시물 조회 핸들러
///
/// `GET /posts`
#[get("")]
pub async fn get_posts(
    service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let posts = service.find_all().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// 게시물 조회 핸들러
///
/// `GET /posts/{id}`
///
/// 내장 댓글을 포함한 게시물 전체를 반환합니다.
/// 존재하지 않는 id면 구조화된 404 본문을 반환합니다.
#[get("/{id}")]
pub async fn get_post(
    service: web::Data<PostService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = service.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// 제목 검색 핸들러
///
/// `GET /posts/titlesearch?text=`
///
/// 대소문자를 무시하는 부분 문자열 검색입니다.
///
/// # 사용 예제
///
/// ```bash
/// curl "http://localhost:8080/posts/titlesearch?text=bom%20dia"
/// ```
#[get("/titlesearch")]
pub async fn title_search(
    service: web::Data<PostService>,
    query: web::Query<TitleSearchParams>,
) -> Result<HttpResponse, AppError> {
    let text = url::decode_param(&query.text);

    let posts = service.find_by_title(&text).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// 통합 검색 핸들러
///
/// `GET /posts/fullsearch?text=&minDate=&maxDate=`
///
/// 날짜 범위와 텍스트 포함 조건을 결합한 복합 검색입니다.
/// 날짜 기본값 처리 후에도 상한 +1일 보정은 서비스에서 항상 적용됩니다.
///
/// # 사용 예제
///
/// ```bash
/// curl "http://localhost:8080/posts/fullsearch?text=viagem&minDate=2024-01-01&maxDate=2024-01-10"
/// ```
#[get("/fullsearch")]
pub async fn full_search(
    service: web::Data<PostService>,
    query: web::Query<FullSearchParams>,
) -> Result<HttpResponse, AppError> {
    let text = url::decode_param(&query.text);

    // 누락/불량 날짜는 에러 대신 문서화된 기본값으로 처리한다
    let min_date = url::convert_date(&query.min_date, DateTime::<Utc>::UNIX_EPOCH);
    let max_date = url::convert_date(&query.max_date, Utc::now());

    let posts = service.full_search(&text, min_date, max_date).await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_search_params_default_text() {
        let query = web::Query::<TitleSearchParams>::from_query("").unwrap();
        assert_eq!(query.text, "");

        let query = web::Query::<TitleSearchParams>::from_query("text=viagem").unwrap();
        assert_eq!(query.text, "viagem");
    }

    #[test]
    fn test_full_search_params_defaults() {
        let query = web::Query::<FullSearchParams>::from_query("").unwrap();

        assert_eq!(query.text, "");
        assert_eq!(query.min_date, "");
        assert_eq!(query.max_date, "");
    }

    #[test]
    fn test_full_search_params_camel_case_names() {
        let query = web::Query::<FullSearchParams>::from_query(
            "text=bom&minDate=2024-01-01&maxDate=2024-01-10",
        )
        .unwrap();

        assert_eq!(query.text, "bom");
        assert_eq!(query.min_date, "2024-01-01");
        assert_eq!(query.max_date, "2024-01-10");
    }
}
