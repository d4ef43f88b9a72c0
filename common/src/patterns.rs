//! 日時抽出規則テーブル
//!
//! OCRテキストから年・月・日・時・分・秒を取り出す正規表現規則の一覧。
//! プロセス起動後に一度だけ構築され、以降は読み取り専用。
//!
//! ## 優先順位
//! `priority` の小さい規則から順に試す。同順位は宣言順。
//! より厳密な形（秒あり・区切りなし）を先に並べることで、
//! 緩い規則が部分一致で先取りするのを防ぐ。
//! 2桁年の規則は直前が数字でないことを要求し、4桁年の下2桁には当たらない。

use regex::{Captures, Regex};

/// 午前/午後の指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// 오전
    Am,
    /// 오후
    Pm,
    /// 24時間表記（指定なし）
    Unspecified,
}

/// 日付（＋時刻）規則
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub regex: Regex,
    pub label: &'static str,
    pub priority: u32,
    pub year_group: usize,
    pub month_group: usize,
    pub day_group: usize,
    pub hour_group: Option<usize>,
    pub minute_group: Option<usize>,
    pub second_group: Option<usize>,
}

impl PatternRule {
    fn date(label: &'static str, priority: u32, pattern: &str) -> Self {
        Self {
            regex: compile(pattern),
            label,
            priority,
            year_group: 1,
            month_group: 2,
            day_group: 3,
            hour_group: None,
            minute_group: None,
            second_group: None,
        }
    }

    fn date_hm(label: &'static str, priority: u32, pattern: &str) -> Self {
        Self {
            hour_group: Some(4),
            minute_group: Some(5),
            ..Self::date(label, priority, pattern)
        }
    }

    fn date_hms(label: &'static str, priority: u32, pattern: &str) -> Self {
        Self {
            second_group: Some(6),
            ..Self::date_hm(label, priority, pattern)
        }
    }

    /// 年・月・日の文字列を取り出す
    pub fn date_parts<'t>(&self, caps: &Captures<'t>) -> Option<(&'t str, &'t str, &'t str)> {
        Some((
            caps.get(self.year_group)?.as_str(),
            caps.get(self.month_group)?.as_str(),
            caps.get(self.day_group)?.as_str(),
        ))
    }

    pub fn hour_part<'t>(&self, caps: &Captures<'t>) -> Option<&'t str> {
        group(caps, self.hour_group)
    }

    pub fn minute_part<'t>(&self, caps: &Captures<'t>) -> Option<&'t str> {
        group(caps, self.minute_group)
    }

    pub fn second_part<'t>(&self, caps: &Captures<'t>) -> Option<&'t str> {
        group(caps, self.second_group)
    }
}

/// 時刻のみの規則（日付なし）
///
/// 分は規則ごとには持たない。表示用日時ではテキスト中の最初の `H:M` から読む。
#[derive(Debug, Clone)]
pub struct TimeRule {
    pub regex: Regex,
    pub label: &'static str,
    pub meridiem: Meridiem,
    pub hour_group: usize,
}

impl TimeRule {
    fn new(label: &'static str, meridiem: Meridiem, pattern: &str) -> Self {
        Self {
            regex: compile(pattern),
            label,
            meridiem,
            hour_group: 1,
        }
    }

    pub fn hour_part<'t>(&self, caps: &Captures<'t>) -> Option<&'t str> {
        group(caps, Some(self.hour_group))
    }
}

/// 規則テーブル
#[derive(Debug)]
pub struct PatternTable {
    full: Vec<PatternRule>,
    time_only: Vec<TimeRule>,
}

impl PatternTable {
    /// 既定の規則で構築する
    pub fn new() -> Self {
        Self::from_rules(default_full_rules(), default_time_rules())
    }

    /// 任意の規則から構築する（優先順位で安定ソート）
    pub fn from_rules(mut full: Vec<PatternRule>, time_only: Vec<TimeRule>) -> Self {
        full.sort_by_key(|rule| rule.priority);
        Self { full, time_only }
    }

    /// 日付規則（優先順位順）
    pub fn full_rules(&self) -> &[PatternRule] {
        &self.full
    }

    /// 時刻のみ規則（宣言順）
    pub fn time_rules(&self) -> &[TimeRule] {
        &self.time_only
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// プロセス共通の規則テーブル
    pub static ref PATTERN_TABLE: PatternTable = PatternTable::new();
}

/// 既定の規則テーブルを取得する
pub fn pattern_table() -> &'static PatternTable {
    &PATTERN_TABLE
}

fn compile(pattern: &str) -> Regex {
    // 規則はすべて定数文字列
    Regex::new(pattern).unwrap()
}

fn group<'t>(caps: &Captures<'t>, index: Option<usize>) -> Option<&'t str> {
    index.and_then(|i| caps.get(i)).map(|m| m.as_str())
}

fn default_full_rules() -> Vec<PatternRule> {
    vec![
        // 区切りなしで時刻が続く4桁年
        PatternRule::date_hms(
            "YYYY.MM.DDHH:MM:SS",
            1,
            r"([0-9]{4})\.([0-9]{2})\.([0-9]{2})([0-9]{2}):([0-9]{2}):([0-9]{2})",
        ),
        PatternRule::date_hm(
            "YYYY.MM.DDHH:MM",
            2,
            r"([0-9]{4})\.([0-9]{2})\.([0-9]{2})([0-9]{2}):([0-9]{2})",
        ),
        PatternRule::date_hms(
            "YYYY. M. D. HH:MM:SS",
            6,
            concat!(
                r"([0-9]{4})\.\s*([0-9]{1,2})\.\s*([0-9]{1,2})\.",
                r"\s*([0-9]{1,2}):\s*([0-9]{1,2}):\s*([0-9]{1,2})",
            ),
        ),
        PatternRule::date_hm(
            "YYYY. M. D. HH:MM",
            7,
            r"([0-9]{4})\.\s*([0-9]{1,2})\.\s*([0-9]{1,2})\.\s*([0-9]{1,2}):\s*([0-9]{1,2})",
        ),
        PatternRule::date(
            "YYYY. M. D",
            8,
            r"([0-9]{4})\.\s*([0-9]{1,2})\.\s*([0-9]{1,2})",
        ),
        PatternRule::date("YYYY.MM.DD", 9, r"([0-9]{4})\.([0-9]{2})\.([0-9]{2})"),
        // 2桁年: 直前に数字があれば4桁年の一部
        PatternRule::date_hms(
            "YY.MM.DD HH:MM:SS",
            3,
            concat!(
                r"(?:^|[^0-9])([0-9]{2})\.([0-9]{2})\.([0-9]{2})",
                r"\s+([0-9]{1,2}):\s*([0-9]{1,2}):\s*([0-9]{1,2})",
            ),
        ),
        // カード端末の縦線区切り（`|` が `I` に化けることがある）
        PatternRule::date_hms(
            "YY.MM.DD I HH:MM:SS",
            10,
            concat!(
                r"(?:^|[^0-9])([0-9]{2})\.([0-9]{2})\.([0-9]{2})",
                r"\s+[I|]\s+([0-9]{1,2}):\s*([0-9]{1,2}):\s*([0-9]{1,2})",
            ),
        ),
        PatternRule::date_hm(
            "YY.MM.DD HH:MM",
            4,
            r"(?:^|[^0-9])([0-9]{2})\.([0-9]{2})\.([0-9]{2})\s+([0-9]{1,2}):\s*([0-9]{1,2})",
        ),
        PatternRule::date_hm(
            "YY.MM.DDHH:MM",
            11,
            r"(?:^|[^0-9])([0-9]{2})\.([0-9]{2})\.([0-9]{2})([0-9]{2}):([0-9]{2})",
        ),
        PatternRule::date("YY.MM.DD", 5, r"^([0-9]{2})\.([0-9]{2})\.([0-9]{2})$"),
        PatternRule::date_hms(
            "YYYY-MM-DD HH:MM:SS",
            12,
            r"([0-9]{4})-([0-9]{2})-([0-9]{2})\s+([0-9]{2}):([0-9]{2}):([0-9]{2})",
        ),
        PatternRule::date("YYYY-MM-DD", 13, r"([0-9]{4})-([0-9]{2})-([0-9]{2})"),
        PatternRule::date_hms(
            "YYYY/MM/DD HH:MM:SS",
            14,
            r"([0-9]{4})/([0-9]{2})/([0-9]{2})\s+([0-9]{2}):([0-9]{2}):([0-9]{2})",
        ),
        PatternRule::date("YYYY/MM/DD", 15, r"([0-9]{4})/([0-9]{2})/([0-9]{2})"),
    ]
}

// 数字の境界は ASCII 基準（`오후3:20` のようにハングルに密着した数字も拾う）。
// `시` の後ろは Unicode 境界で `3시간` を除外する。
fn default_time_rules() -> Vec<TimeRule> {
    vec![
        TimeRule::new(
            "오후 HH:MM",
            Meridiem::Pm,
            r"오후\s*([0-9]{1,2}):([0-9]{1,2})"
        ),
        TimeRule::new(
            "오전 HH:MM",
            Meridiem::Am,
            r"오전\s*([0-9]{1,2}):([0-9]{1,2})"
        ),
        TimeRule::new(
            "HH:MM:SS",
            Meridiem::Unspecified,
            r"(?-u:\b)([0-9]{1,2}):([0-9]{1,2}):[0-9]{1,2}(?-u:\b)"
        ),
        TimeRule::new(
            "HH:MM",
            Meridiem::Unspecified,
            r"(?-u:\b)([0-9]{1,2}):([0-9]{1,2})(?-u:\b)"
        ),
        TimeRule::new(
            "HH시MM분SS초",
            Meridiem::Unspecified,
            r"(?-u:\b)([0-9]{1,2})시\s*([0-9]{1,2})분\s*[0-9]{1,2}초"
        ),
        TimeRule::new(
            "HH시MM분",
            Meridiem::Unspecified,
            r"(?-u:\b)([0-9]{1,2})시\s*([0-9]{1,2})분"
        ),
        TimeRule::new("HH시", Meridiem::Unspecified, r"(?-u:\b)([0-9]{1,2})시\b"),
    ]
}
