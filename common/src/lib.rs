//! Receipt DateTime Common Library
//!
//! 영수증 OCR の日時テキストを正規化するエンジン。
//! I/O を持たない純粋関数のみ（「今日」は [`DateProvider`] で注入）。
//!
//! ## 処理の流れ
//! - 生テキスト → [`normalize_date`] / [`extract_hour`]（どちらも [`PatternTable`] を使用）
//! - → [`format_timestamp`]（表示用）、[`reclassify_by_time`]（カテゴリ判定）

pub mod patterns;
pub mod validator;
pub mod date;
pub mod hour;
pub mod timestamp;
pub mod category;
pub mod remark;

pub use patterns::{pattern_table, Meridiem, PatternRule, PatternTable, TimeRule};
pub use date::{normalize_date, parse_date, CanonicalDate};
pub use hour::{extract_hour, Hour};
pub use timestamp::{format_timestamp, DateProvider, SystemClock};
pub use category::{classify_hour, reclassify_by_time, CategoryCode, MealBand};
pub use remark::{
    build_remark, calculate_amount, clean_amount, default_remark, payment_date, RemarkContext,
};
