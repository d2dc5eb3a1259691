//! 게시물 서비스 모듈
//!
//! 게시물 조회와 제목/통합 검색 비즈니스 로직을 담당합니다.

pub mod post_service;
