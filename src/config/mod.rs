//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반의 서버 설정을 제공합니다.
//! 모든 설정은 합리적인 기본값을 가지며, 환경 변수로 재정의할 수 있습니다.
//!
//! # Environment Variables
//!
//! - `HOST`: 바인딩할 호스트 주소 (기본값: "127.0.0.1")
//! - `PORT`: 바인딩할 포트 (기본값: 8080)
//! - `SERVER_WORKERS`: 워커 스레드 수 (기본값: 4)

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소를 반환합니다.
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// HTTP 워커 스레드 수를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_WORKERS`: 커스텀 워커 수 설정 (기본값: 4)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .unwrap_or(4)
    }
}
