//! 日付の正規化（`YYYYMMDD`）
//!
//! ## 処理フロー
//! 1. 既に `YYYYMMDD` になっていればそのまま採用
//! 2. 日付規則を優先順位順に試す
//! 3. 2桁年を4桁に展開し、カレンダー検証に通ったものを採用
//! 4. どれにも当てはまらなければ元の文字列を返す

use crate::patterns::{pattern_table, PatternRule};
use crate::validator;
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::fmt;

/// 2桁年の境界（未満は2000年代、以上は1900年代）
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

/// 検証済みの日付
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CanonicalDate {
    /// カレンダー上有効な場合のみ生成する
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        validator::validate_date(year, month, day).then_some(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// `YYYY/MM/DD` 形式
    pub fn slash_format(&self) -> String {
        format!("{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CanonicalDate {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// 日付規則に一致し、検証も通った結果
#[derive(Debug)]
pub(crate) struct DatedMatch<'r, 't> {
    pub rule: &'r PatternRule,
    pub caps: Captures<'t>,
    pub date: CanonicalDate,
}

/// 2桁年を4桁に展開する（4桁はそのまま）
pub fn expand_year(year: &str) -> Option<i32> {
    let value: i32 = year.parse().ok()?;
    if year.len() != 2 {
        return Some(value);
    }
    if value < TWO_DIGIT_YEAR_PIVOT {
        Some(2000 + value)
    } else {
        Some(1900 + value)
    }
}

/// 優先順位順に規則を試し、最初に有効な日付となった一致を返す
///
/// 一致しても日付が不正・数値変換不可なら次の規則へ進む。
pub(crate) fn find_dated_match(text: &str) -> Option<DatedMatch<'static, '_>> {
    pattern_table().full_rules().iter().find_map(|rule| {
        let caps = rule.regex.captures(text)?;
        let date = resolve_date(rule, &caps)?;
        Some(DatedMatch { rule, caps, date })
    })
}

fn resolve_date(rule: &PatternRule, caps: &Captures<'_>) -> Option<CanonicalDate> {
    let (year, month, day) = rule.date_parts(caps)?;
    CanonicalDate::new(expand_year(year)?, month.parse().ok()?, day.parse().ok()?)
}

/// 連続8桁の数字のうち、最初に有効な日付となるものを返す
fn existing_canonical(text: &str) -> Option<CanonicalDate> {
    lazy_static::lazy_static! {
        static ref CANONICAL_RE: Regex = Regex::new(r"([0-9]{4})([0-9]{2})([0-9]{2})").unwrap();
    }

    CANONICAL_RE.captures_iter(text).find_map(|caps| {
        CanonicalDate::new(caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
    })
}

/// OCRテキストから日付を解釈する
pub fn parse_date(raw: &str) -> Option<CanonicalDate> {
    if raw.is_empty() {
        return None;
    }

    existing_canonical(raw).or_else(|| find_dated_match(raw).map(|m| m.date))
}

/// OCRテキストを `YYYYMMDD` に正規化する
///
/// 解釈できない場合は元の文字列をそのまま返す（空文字は空文字）。
pub fn normalize_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.to_string(),
        None => raw.to_string(),
    }
}
