//! 비고(摘要)・支払日・金額の整形
//!
//! 帳票出力側が使う補助関数。日付は [`crate::date`] の正規化結果を使う。

use crate::category::CategoryCode;
use crate::date::parse_date;
use chrono::{Datelike, Months, NaiveDate};
use regex::Regex;

/// テンプレートのまま残った摘要を示す文字列
const TEMPLATE_MARKERS: [&str; 2] = ["임시_", "MM/DD"];

/// 摘要の組み立てに使う入力
#[derive(Debug, Clone, Default)]
pub struct RemarkContext<'a> {
    pub user_name: &'a str,
    /// 同席者（カンマ区切りで利用者名に連結）
    pub additional_names: &'a str,
    /// 利用者が入力した摘要
    pub remarks: &'a str,
    /// 국내출장 専用: 出張内容
    pub business_content: &'a str,
    /// 국내출장 専用: 用途
    pub purpose: &'a str,
}

impl RemarkContext<'_> {
    fn attendees(&self) -> String {
        if self.additional_names.is_empty() {
            self.user_name.to_string()
        } else {
            format!("{},{}", self.user_name, self.additional_names)
        }
    }
}

/// 既定の摘要 `MM/DD_<利用者>_<カテゴリ>`
///
/// 利用者名が空なら `카테고리: <ラベル>`、日付が取れなければ `MM/DD` のまま。
pub fn default_remark(issue_date_raw: &str, user_name: &str, category: &CategoryCode) -> String {
    if user_name.is_empty() {
        return format!("카테고리: {}", category.label());
    }

    let month_day = parse_date(issue_date_raw)
        .map(|date| format!("{:02}/{:02}", date.month(), date.day()))
        .unwrap_or_else(|| "MM/DD".to_string());

    format!("{}_{}_{}", month_day, user_name, category.label())
}

/// 摘要を決める
///
/// - 국내출장: `<出張内容>_<利用者>_<用途>`
/// - 入力済みの摘要があればそれを使う（テンプレートのままなら無視）
/// - それ以外は [`default_remark`]
pub fn build_remark(
    ctx: &RemarkContext<'_>,
    issue_date_raw: &str,
    category: &CategoryCode,
) -> String {
    if *category == CategoryCode::DomesticTravel {
        return format!("{}_{}_{}", ctx.business_content, ctx.attendees(), ctx.purpose);
    }

    let is_template = TEMPLATE_MARKERS.iter().any(|m| ctx.remarks.contains(m));
    if !ctx.remarks.is_empty() && !is_template {
        return ctx.remarks.to_string();
    }

    default_remark(issue_date_raw, &ctx.attendees(), category)
}

/// 支払日（`YYYYMMDD`）
///
/// `today` の日が `cutoff_day` 以下なら当月、超えていれば翌月の `payment_day` 日。
/// 月末を超える `payment_day` はその月の末日に丸める。
pub fn payment_date(today: NaiveDate, cutoff_day: u32, payment_day: u32) -> String {
    let base = if today.day() <= cutoff_day {
        today
    } else {
        today.checked_add_months(Months::new(1)).unwrap_or(today)
    };

    let last_day = crate::validator::days_in_month(base.year(), base.month());
    let day = payment_day.clamp(1, last_day.max(1));

    format!("{:04}{:02}{:02}", base.year(), base.month(), day)
}

lazy_static::lazy_static! {
    static ref AMOUNT_RE: Regex = Regex::new(r"[0-9,]+").unwrap();
}

/// 金額文字列から最初の数字列を取り出す（カンマ除去）
pub fn clean_amount(text: &str) -> String {
    match AMOUNT_RE.find(text) {
        Some(m) => m.as_str().replace(',', ""),
        None => text.to_string(),
    }
}

/// 金額文字列を数値にする（読めなければ 0）
fn parse_amount(text: &str) -> u64 {
    AMOUNT_RE
        .find(text)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
        .unwrap_or(0)
}

/// 사용액を決める
///
/// 사용액が空または 0 なら 공급가 + 부가세 の合計。どちらも無ければ空文字。
pub fn calculate_amount(amount: &str, supply: &str, vat: &str) -> String {
    if parse_amount(amount) > 0 {
        return amount.to_string();
    }

    let supply = parse_amount(supply);
    let vat = parse_amount(vat);
    if supply == 0 && vat == 0 {
        return String::new();
    }

    supply.saturating_add(vat).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_remark() {
        assert_eq!(
            default_remark("25.04.09 17:59", "김철수", &CategoryCode::Dinner),
            "04/09_김철수_석식"
        );
        assert_eq!(
            default_remark("판독불가", "김철수", &CategoryCode::Lunch),
            "MM/DD_김철수_중식"
        );
        assert_eq!(default_remark("25.04.09", "", &CategoryCode::Lunch), "카테고리: 중식");
    }

    #[test]
    fn test_build_remark_domestic_travel() {
        let ctx = RemarkContext {
            user_name: "김철수",
            additional_names: "이영희",
            business_content: "고객사 미팅",
            purpose: "교통비",
            ..Default::default()
        };
        assert_eq!(
            build_remark(&ctx, "2025.04.23", &CategoryCode::DomesticTravel),
            "고객사 미팅_김철수,이영희_교통비"
        );
    }

    #[test]
    fn test_build_remark_keeps_user_input() {
        let ctx = RemarkContext {
            user_name: "김철수",
            remarks: "팀 회식",
            ..Default::default()
        };
        assert_eq!(build_remark(&ctx, "2025.04.23", &CategoryCode::Dinner), "팀 회식");
    }

    #[test]
    fn test_build_remark_replaces_template() {
        let ctx = RemarkContext {
            user_name: "김철수",
            additional_names: "박민수",
            remarks: "MM/DD_김철수_석식",
            ..Default::default()
        };
        assert_eq!(
            build_remark(&ctx, "2025.04.23", &CategoryCode::Lunch),
            "04/23_김철수,박민수_중식"
        );

        let ctx = RemarkContext {
            user_name: "김철수",
            remarks: "임시_메모",
            ..Default::default()
        };
        assert_eq!(
            build_remark(&ctx, "2025.04.23", &CategoryCode::Breakfast),
            "04/23_김철수_조식"
        );
    }

    #[test]
    fn test_payment_date() {
        assert_eq!(payment_date(date(2025, 4, 10), 10, 15), "20250415");
        assert_eq!(payment_date(date(2025, 4, 11), 10, 15), "20250515");
        assert_eq!(payment_date(date(2025, 12, 20), 10, 15), "20260115");
        assert_eq!(payment_date(date(2025, 1, 31), 10, 15), "20250215");
        assert_eq!(payment_date(date(2025, 1, 5), 10, 31), "20250131");
        assert_eq!(payment_date(date(2025, 1, 20), 10, 31), "20250228");
    }

    #[test]
    fn test_clean_amount() {
        assert_eq!(clean_amount("12,000원"), "12000");
        assert_eq!(clean_amount("합계: 1,234,500 원"), "1234500");
        assert_eq!(clean_amount("금액 없음"), "금액 없음");
    }

    #[test]
    fn test_calculate_amount_prefers_amount() {
        assert_eq!(calculate_amount("12,000원", "10,000", "1,000"), "12,000원");
    }

    #[test]
    fn test_calculate_amount_from_supply_and_vat() {
        assert_eq!(calculate_amount("", "10,000", "1,000"), "11000");
        assert_eq!(calculate_amount("0원", "20,000원", ""), "20000");
        assert_eq!(calculate_amount("", "", "1,500"), "1500");
    }

    #[test]
    fn test_calculate_amount_missing() {
        assert_eq!(calculate_amount("", "", ""), "");
        assert_eq!(calculate_amount("0", "0", "없음"), "");
    }
}
