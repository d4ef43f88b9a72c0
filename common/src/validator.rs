//! 日付・時刻の妥当性検証

/// 受け付ける年の範囲
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// 年月日時分秒がカレンダー上有効か判定する
///
/// 日付のみを検証する場合は時・分・秒に 0 を渡す。
pub fn validate(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> bool {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return false;
    }
    if !(1..=12).contains(&month) {
        return false;
    }
    if hour > 23 || minute > 59 || second > 59 {
        return false;
    }

    day >= 1 && day <= days_in_month(year, month)
}

/// 日付のみの検証
pub fn validate_date(year: i32, month: u32, day: u32) -> bool {
    validate(year, month, day, 0, 0, 0)
}

/// 月の日数（月が範囲外なら 0）
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// 閏年判定
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_february_29() {
        assert!(validate_date(2024, 2, 29));
        assert!(validate_date(2000, 2, 29));
        assert!(!validate_date(1900, 2, 29));
        assert!(!validate_date(2023, 2, 29));
        assert!(!validate_date(2024, 2, 30));
    }

    #[test]
    fn test_days_per_month() {
        assert!(validate_date(2025, 1, 31));
        assert!(!validate_date(2025, 4, 31));
        assert!(validate_date(2025, 4, 30));
        assert!(!validate_date(2025, 6, 31));
        assert!(validate_date(2025, 12, 31));
        assert!(!validate_date(2025, 1, 0));
    }

    #[test]
    fn test_year_and_month_range() {
        assert!(validate_date(1900, 1, 1));
        assert!(validate_date(2100, 12, 31));
        assert!(!validate_date(1899, 12, 31));
        assert!(!validate_date(2101, 1, 1));
        assert!(!validate_date(2025, 0, 1));
        assert!(!validate_date(2025, 13, 1));
    }

    #[test]
    fn test_time_range() {
        assert!(validate(2025, 4, 23, 0, 0, 0));
        assert!(validate(2025, 4, 23, 23, 59, 59));
        assert!(!validate(2025, 4, 23, 24, 0, 0));
        assert!(!validate(2025, 4, 23, 12, 60, 0));
        assert!(!validate(2025, 4, 23, 12, 0, 60));
    }

    #[test]
    fn test_days_in_month_out_of_range() {
        assert_eq!(days_in_month(2025, 0), 0);
        assert_eq!(days_in_month(2025, 13), 0);
        assert_eq!(days_in_month(2024, 2), 29);
    }
}
