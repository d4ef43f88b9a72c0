//! 経費カテゴリと時間帯による再分類
//!
//! | 時間帯 | カテゴリ |
//! |---|---|
//! | 4〜9時 | 조식 (6110) |
//! | 10〜14時 | 중식 (6120) |
//! | 16〜23時, 0〜3時 | 석식 (6130) |
//! | 15時台 | 変更しない |
//!
//! 국내출장 (6320) は時間帯に関わらず変更しない。

use crate::hour::{extract_hour, Hour};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// 経費カテゴリ（コード文字列で入出力）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryCode {
    /// 조식
    Breakfast,
    /// 중식
    Lunch,
    /// 석식（未指定時の既定値）
    #[default]
    Dinner,
    /// 교통정산
    Transportation,
    /// 국내출장
    DomesticTravel,
    /// 未知のコード
    Other(String),
}

impl CategoryCode {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "6110" => CategoryCode::Breakfast,
            "6120" => CategoryCode::Lunch,
            "6130" => CategoryCode::Dinner,
            "6310" => CategoryCode::Transportation,
            "6320" => CategoryCode::DomesticTravel,
            other => CategoryCode::Other(other.to_string()),
        }
    }

    /// 帳票に出力するコード
    pub fn code(&self) -> &str {
        match self {
            CategoryCode::Breakfast => "6110",
            CategoryCode::Lunch => "6120",
            CategoryCode::Dinner => "6130",
            CategoryCode::Transportation => "6310",
            CategoryCode::DomesticTravel => "6320",
            CategoryCode::Other(code) => code,
        }
    }

    /// 表示ラベル（未知のコードはコードそのもの）
    pub fn label(&self) -> &str {
        match self {
            CategoryCode::Breakfast => "조식",
            CategoryCode::Lunch => "중식",
            CategoryCode::Dinner => "석식",
            CategoryCode::Transportation => "교통정산",
            CategoryCode::DomesticTravel => "국내출장",
            CategoryCode::Other(code) => code,
        }
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CategoryCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl From<String> for CategoryCode {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<CategoryCode> for String {
    fn from(category: CategoryCode) -> Self {
        category.code().to_string()
    }
}

/// 時から決まる食事時間帯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealBand {
    Breakfast,
    Lunch,
    Dinner,
    /// 15時台（どちらとも言えない）
    Ambiguous,
}

impl MealBand {
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            10..=14 => MealBand::Lunch,
            15 => MealBand::Ambiguous,
            4..=9 => MealBand::Breakfast,
            _ => MealBand::Dinner,
        }
    }

    /// 対応するカテゴリ（曖昧帯は `None`）
    pub fn category(&self) -> Option<CategoryCode> {
        match self {
            MealBand::Breakfast => Some(CategoryCode::Breakfast),
            MealBand::Lunch => Some(CategoryCode::Lunch),
            MealBand::Dinner => Some(CategoryCode::Dinner),
            MealBand::Ambiguous => None,
        }
    }
}

/// 時から再分類する（本体）
///
/// 時が取れない場合と 15時台は元のカテゴリのまま。
pub fn classify_hour(current: CategoryCode, hour: Hour) -> CategoryCode {
    if current == CategoryCode::DomesticTravel {
        return current;
    }

    hour.value()
        .and_then(|hour| MealBand::from_hour(hour).category())
        .unwrap_or(current)
}

/// OCR日時テキストの時刻でカテゴリを再分類する
///
/// `enabled` が false、국내출장、時刻が取れない場合は元のカテゴリを返す。
pub fn reclassify_by_time(category: CategoryCode, raw: &str, enabled: bool) -> CategoryCode {
    if category == CategoryCode::DomesticTravel || !enabled {
        return category;
    }

    classify_hour(category, extract_hour(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in ["6110", "6120", "6130", "6310", "6320", "9999"] {
            assert_eq!(CategoryCode::from_code(code).code(), code);
        }
        assert_eq!(CategoryCode::from_code("9999"), CategoryCode::Other("9999".into()));
    }

    #[test]
    fn test_labels() {
        assert_eq!(CategoryCode::Breakfast.label(), "조식");
        assert_eq!(CategoryCode::DomesticTravel.label(), "국내출장");
        assert_eq!(CategoryCode::Other("7000".into()).label(), "7000");
    }

    #[test]
    fn test_serde_as_code_string() {
        let json = serde_json::to_string(&CategoryCode::Lunch).unwrap();
        assert_eq!(json, "\"6120\"");
        let parsed: CategoryCode = serde_json::from_str("\"6320\"").unwrap();
        assert_eq!(parsed, CategoryCode::DomesticTravel);
        let unknown: CategoryCode = serde_json::from_str("\"1234\"").unwrap();
        assert_eq!(unknown, CategoryCode::Other("1234".into()));
    }

    #[test]
    fn test_meal_band_boundaries() {
        assert_eq!(MealBand::from_hour(3), MealBand::Dinner);
        assert_eq!(MealBand::from_hour(4), MealBand::Breakfast);
        assert_eq!(MealBand::from_hour(9), MealBand::Breakfast);
        assert_eq!(MealBand::from_hour(10), MealBand::Lunch);
        assert_eq!(MealBand::from_hour(14), MealBand::Lunch);
        assert_eq!(MealBand::from_hour(15), MealBand::Ambiguous);
        assert_eq!(MealBand::from_hour(16), MealBand::Dinner);
        assert_eq!(MealBand::from_hour(23), MealBand::Dinner);
        assert_eq!(MealBand::from_hour(0), MealBand::Dinner);
    }

    #[test]
    fn test_domestic_travel_never_changes() {
        assert_eq!(
            reclassify_by_time(CategoryCode::DomesticTravel, "2025/04/23 08:00", true),
            CategoryCode::DomesticTravel
        );
        assert_eq!(
            classify_hour(CategoryCode::DomesticTravel, Hour::Found(12)),
            CategoryCode::DomesticTravel
        );
    }

    #[test]
    fn test_reclassify() {
        assert_eq!(
            reclassify_by_time(CategoryCode::Lunch, "25.04.09 16:10", true),
            CategoryCode::Dinner
        );
        assert_eq!(
            reclassify_by_time(CategoryCode::Dinner, "2025. 4. 23. 8: 21:56", true),
            CategoryCode::Breakfast
        );
        assert_eq!(
            reclassify_by_time(CategoryCode::Dinner, "오후 12:30", true),
            CategoryCode::Lunch
        );
        assert_eq!(
            reclassify_by_time(CategoryCode::Transportation, "01:30", true),
            CategoryCode::Dinner
        );
    }

    #[test]
    fn test_ambiguous_band_unchanged() {
        assert_eq!(
            reclassify_by_time(CategoryCode::Lunch, "25.04.09 15:40", true),
            CategoryCode::Lunch
        );
        assert_eq!(
            reclassify_by_time(CategoryCode::Breakfast, "오후 3:20", true),
            CategoryCode::Breakfast
        );
    }

    #[test]
    fn test_missing_hour_unchanged() {
        assert_eq!(
            reclassify_by_time(CategoryCode::Lunch, "2025.04.23", true),
            CategoryCode::Lunch
        );
        assert_eq!(reclassify_by_time(CategoryCode::Lunch, "", true), CategoryCode::Lunch);
    }

    #[test]
    fn test_disabled_flag() {
        let categories = [
            CategoryCode::Breakfast,
            CategoryCode::Lunch,
            CategoryCode::Dinner,
            CategoryCode::Transportation,
            CategoryCode::Other("7000".into()),
        ];
        for category in categories {
            for text in ["25.04.09 16:10", "오전 7:00", "12:00", ""] {
                assert_eq!(reclassify_by_time(category.clone(), text, false), category);
            }
        }
    }
}
