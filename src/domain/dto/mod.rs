//! 경계 DTO 모듈
//!
//! HTTP 와이어 표현을 저장 표현에서 분리하는 DTO들을 제공합니다.
//! 현재 시스템에서 필드가 달라지는 경우는 없지만, 노출 범위를 통제하는
//! 경계 역할을 위해 유지합니다.

pub mod user_dto;
