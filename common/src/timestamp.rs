//! 表示用日時（`YYYY/MM/DD HH:MM`）の組み立て
//!
//! 日付規則に一致すればその日付を、時刻のみなら「今日」の日付を使う。
//! 今日の日付は [`DateProvider`] で注入する。

use crate::date::{find_dated_match, CanonicalDate};
use crate::hour::{to_24_hour, PM_MARKER};
use crate::patterns::{pattern_table, Meridiem};
use chrono::NaiveDate;
use regex::Regex;

/// 「今日」の供給元
pub trait DateProvider {
    fn today(&self) -> NaiveDate;
}

/// ローカル時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl DateProvider for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// 固定日付（テスト・再処理用）
impl DateProvider for NaiveDate {
    fn today(&self) -> NaiveDate {
        *self
    }
}

fn parse_minute(text: Option<&str>) -> String {
    text.and_then(|m| m.parse::<u32>().ok())
        .filter(|m| *m <= 59)
        .map(|m| format!("{:02}", m))
        .unwrap_or_else(|| "00".to_string())
}

/// OCRテキストを `YYYY/MM/DD HH:MM` 形式に整形する
///
/// 時を含まない日付規則なら `YYYY/MM/DD` のみ。
/// 何も解釈できなければ元の文字列を返す。
pub fn format_timestamp(raw: &str, now: &impl DateProvider) -> String {
    if raw.is_empty() {
        return String::new();
    }

    if let Some(matched) = find_dated_match(raw) {
        let mut result = matched.date.slash_format();

        let hour = matched
            .rule
            .hour_part(&matched.caps)
            .and_then(|h| h.parse::<u32>().ok())
            .filter(|h| *h <= 23);
        if let Some(hour) = hour {
            let minute = parse_minute(matched.rule.minute_part(&matched.caps));
            // この経路ではテキスト全体の `오후` を見る
            let hour = to_24_hour(hour, raw.contains(PM_MARKER));
            result.push_str(&format!(" {:02}:{}", hour, minute));
        }

        return result;
    }

    lazy_static::lazy_static! {
        static ref MINUTE_RE: Regex = Regex::new(r"([0-9]{1,2}):([0-9]{1,2})").unwrap();
    }

    for rule in pattern_table().time_rules() {
        let Some(caps) = rule.regex.captures(raw) else {
            continue;
        };
        let Some(hour) = rule
            .hour_part(&caps)
            .and_then(|h| h.parse::<u32>().ok())
            .filter(|h| *h <= 23)
        else {
            continue;
        };

        let today = CanonicalDate::from(now.today()).slash_format();
        // 分はテキスト中の最初の `H:M` から読む
        let minute = MINUTE_RE.captures(raw).and_then(|c| c.get(2)).map(|m| m.as_str());
        let minute = parse_minute(minute);
        let hour = to_24_hour(hour, rule.meridiem == Meridiem::Pm);

        return format!("{} {:02}:{}", today, hour, minute);
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_timestamp("", &fixed()), "");
    }

    #[test]
    fn test_full_datetime() {
        assert_eq!(format_timestamp("2025. 4. 23. 18: 21:56", &fixed()), "2025/04/23 18:21");
        assert_eq!(format_timestamp("25.04.09 17:59", &fixed()), "2025/04/09 17:59");
        assert_eq!(format_timestamp("25.04.2510:08", &fixed()), "2025/04/25 10:08");
        assert_eq!(format_timestamp("2025. 4. 3. 9:5", &fixed()), "2025/04/03 09:05");
    }

    #[test]
    fn test_four_digit_year_not_repivoted() {
        // `YYYY.MM.DD` の後ろの空白区切り時刻は日付規則に含まれない
        assert_eq!(format_timestamp("2050.01.01 10:00", &fixed()), "2050/01/01");
        assert_eq!(format_timestamp("1945.08.15 12:00", &fixed()), "1945/08/15");
    }

    #[test]
    fn test_date_only() {
        assert_eq!(format_timestamp("2025-04-23", &fixed()), "2025/04/23");
        assert_eq!(format_timestamp("99.01.01", &fixed()), "1999/01/01");
    }

    #[test]
    fn test_pm_marker_anywhere() {
        assert_eq!(format_timestamp("25.04.09 03:10 오후", &fixed()), "2025/04/09 15:10");
    }

    #[test]
    fn test_invalid_hour_keeps_date() {
        assert_eq!(format_timestamp("25.04.09 27:10", &fixed()), "2025/04/09");
    }

    #[test]
    fn test_invalid_minute_defaults_to_zero() {
        assert_eq!(format_timestamp("25.04.09 17:75", &fixed()), "2025/04/09 17:00");
    }

    #[test]
    fn test_time_only_uses_today() {
        assert_eq!(format_timestamp("오후 3:20", &fixed()), "2025/05/01 15:20");
        assert_eq!(format_timestamp("오전 9:05", &fixed()), "2025/05/01 09:05");
        assert_eq!(format_timestamp("14:05:33", &fixed()), "2025/05/01 14:05");
        assert_eq!(format_timestamp("21시 결제", &fixed()), "2025/05/01 21:00");
    }

    #[test]
    fn test_unmatched_returns_input() {
        assert_eq!(format_timestamp("영수증", &fixed()), "영수증");
        assert_eq!(format_timestamp("2025.02.30", &fixed()), "2025.02.30");
    }

    #[test]
    fn test_system_clock_produces_date() {
        let result = format_timestamp("10:30", &SystemClock);
        assert_eq!(result.len(), "YYYY/MM/DD HH:MM".len());
        assert!(result.ends_with(" 10:30"));
    }
}
