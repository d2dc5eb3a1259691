//! URL 파라미터 헬퍼
//!
//! 쿼리 파라미터 디코딩과 날짜 변환을 담당합니다.
//! 이 모듈의 함수들은 절대 에러를 전파하지 않습니다. 디코딩/파싱에
//! 실패하면 항상 안전한 기본값으로 대체됩니다.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// 퍼센트 인코딩된 파라미터를 디코딩합니다.
///
/// 예: `"bom%20dia"` → `"bom dia"`
///
/// 디코딩에 실패하면 (UTF-8이 아닌 바이트 시퀀스 등) 에러 대신
/// 빈 문자열을 반환합니다.
pub fn decode_param(text: &str) -> String {
    urlencoding::decode(text)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_default()
}

/// `yyyy-MM-dd` 형태의 문자열을 UTC 자정 시각으로 변환합니다.
///
/// 비어 있거나 파싱할 수 없는 문자열이면 `default`를 그대로 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let min = convert_date("2024-01-10", DateTime::<Utc>::UNIX_EPOCH);
/// let max = convert_date("", Utc::now()); // 기본값 사용
/// ```
pub fn convert_date(text: &str, default: DateTime<Utc>) -> DateTime<Utc> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_decode_param_valid_sequence() {
        assert_eq!(decode_param("bom%20dia"), "bom dia");
        assert_eq!(decode_param("viagem"), "viagem");
        assert_eq!(decode_param(""), "");
    }

    #[test]
    fn test_decode_param_invalid_sequence_yields_empty_string() {
        // 0xFF는 유효한 UTF-8이 아니므로 디코딩이 실패한다
        assert_eq!(decode_param("%FF"), "");
        assert_eq!(decode_param("abc%FF%FEdef"), "");
    }

    #[test]
    fn test_convert_date_parses_at_utc_midnight() {
        let default = DateTime::<Utc>::UNIX_EPOCH;
        let parsed = convert_date("2024-01-10", default);

        assert_eq!(parsed.to_rfc3339(), "2024-01-10T00:00:00+00:00");
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_convert_date_invalid_returns_default_unchanged() {
        let default = Utc::now();

        assert_eq!(convert_date("not-a-date", default), default);
        assert_eq!(convert_date("2024/01/10", default), default);
        assert_eq!(convert_date("", default), default);
    }

    #[test]
    fn test_convert_date_epoch_default_for_missing_min() {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;

        assert_eq!(convert_date("", epoch), epoch);
        assert_eq!(epoch.timestamp_millis(), 0);
    }
}
