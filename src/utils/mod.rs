//! 유틸리티 모듈
//!
//! HTTP 쿼리 파라미터 처리를 위한 헬퍼 함수들을 제공합니다.

pub mod url;
