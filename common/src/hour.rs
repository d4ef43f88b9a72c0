//! 時（0〜23）の抽出
//!
//! 1. 日付規則のうち時グループを持つものを優先順位順に試す
//!    （`오후` がテキストのどこかにあれば12時間補正）
//! 2. 見つからなければ時刻のみ規則を試す
//!    （補正は一致した規則自身の午前/午後指定に従う）

use crate::patterns::{pattern_table, Meridiem};
use serde::Serialize;
use std::fmt;

/// 午後マーカー
pub const PM_MARKER: &str = "오후";

/// 抽出した時
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "Option<u8>")]
pub enum Hour {
    Found(u8),
    NotFound,
}

impl Hour {
    /// 0〜23 の範囲内なら `Found`
    pub fn from_value(value: u32) -> Option<Self> {
        (value <= 23).then_some(Hour::Found(value as u8))
    }

    pub fn value(&self) -> Option<u8> {
        match self {
            Hour::Found(hour) => Some(*hour),
            Hour::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Hour::Found(_))
    }
}

impl From<Hour> for Option<u8> {
    fn from(hour: Hour) -> Self {
        hour.value()
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hour::Found(hour) => write!(f, "{}", hour),
            Hour::NotFound => write!(f, "not found"),
        }
    }
}

/// 午後なら12時間補正する（12時以降はそのまま）
pub fn to_24_hour(hour: u32, pm: bool) -> u32 {
    if pm && hour < 12 {
        hour + 12
    } else {
        hour
    }
}

/// OCRテキストから時を抽出する
pub fn extract_hour(raw: &str) -> Hour {
    if raw.is_empty() {
        return Hour::NotFound;
    }

    let table = pattern_table();
    let pm_in_text = raw.contains(PM_MARKER);

    for rule in table.full_rules() {
        if rule.hour_group.is_none() {
            continue;
        }
        let Some(caps) = rule.regex.captures(raw) else {
            continue;
        };
        let Some(hour) = rule.hour_part(&caps).and_then(|h| h.parse::<u32>().ok()) else {
            continue;
        };
        if let Some(found) = Hour::from_value(to_24_hour(hour, pm_in_text)) {
            return found;
        }
    }

    for rule in table.time_rules() {
        let Some(caps) = rule.regex.captures(raw) else {
            continue;
        };
        let Some(hour) = rule.hour_part(&caps).and_then(|h| h.parse::<u32>().ok()) else {
            continue;
        };
        if let Some(found) = Hour::from_value(to_24_hour(hour, rule.meridiem == Meridiem::Pm)) {
            return found;
        }
    }

    Hour::NotFound
}
