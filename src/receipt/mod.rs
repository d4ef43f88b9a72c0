//! 領収書の一括処理
//!
//! OCR結果1件ごとに日付正規化・表示用日時・時間帯カテゴリ補正・摘要・支払日を求める。
//! 各レコードは独立しているので rayon で並列に処理し、最後に사용일順に並べる。

mod loader;
mod types;

pub use loader::{load_records, write_results};
pub use types::{ProcessedReceipt, ReceiptRecord};

use crate::config::Config;
use rayon::prelude::*;
use receipt_datetime_common::{
    build_remark, calculate_amount, clean_amount, extract_hour, format_timestamp, normalize_date,
    payment_date, reclassify_by_time, CategoryCode, DateProvider, Hour, MealBand, RemarkContext,
};

/// 一括処理の設定
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub user_name: String,
    pub time_category_enabled: bool,
    pub payment_cutoff_day: u32,
    pub payment_day: u32,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ProcessOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            user_name: config.user_name.clone(),
            time_category_enabled: config.time_category_enabled(),
            payment_cutoff_day: config.payment_cutoff_day,
            payment_day: config.payment_day,
        }
    }
}

/// 1件を処理する
pub fn process_receipt(
    record: &ReceiptRecord,
    options: &ProcessOptions,
    today: &impl DateProvider,
) -> ProcessedReceipt {
    let raw = record.issue_date.as_str();
    let hour = extract_hour(raw);
    let category = reclassify_by_time(record.category.clone(), raw, options.time_category_enabled);
    if options.time_category_enabled {
        log_classification(&record.file_name, &record.category, &category, hour);
    }

    let ctx = RemarkContext {
        user_name: &options.user_name,
        additional_names: &record.additional_names,
        remarks: &record.remarks,
        business_content: &record.business_content,
        purpose: &record.business_purpose,
    };
    let remark = build_remark(&ctx, raw, &category);

    ProcessedReceipt {
        file_name: record.file_name.clone(),
        category_label: category.label().to_string(),
        category,
        remark,
        purpose: record.purpose.clone(),
        amount: clean_amount(&calculate_amount(
            &record.amount,
            &record.supply_amount,
            &record.vat_amount,
        )),
        issue_date: normalize_date(raw),
        original_issue_date: format_timestamp(raw, today),
        pay_date: payment_date(today.today(), options.payment_cutoff_day, options.payment_day),
        hour: hour.value(),
    }
}

fn log_classification(file_name: &str, before: &CategoryCode, after: &CategoryCode, hour: Hour) {
    if before != after {
        tracing::debug!(
            "{}: 카테고리 변경 {}({}) → {}({}) [{}시]",
            file_name,
            before.label(),
            before,
            after.label(),
            after,
            hour
        );
        return;
    }

    match hour.value() {
        None => tracing::debug!("{}: 시간 정보 없음, 카테고리 유지: {}", file_name, before),
        Some(h) if MealBand::from_hour(h) == MealBand::Ambiguous => {
            tracing::debug!("{}: 애매한 시간대({}시), 카테고리 유지: {}", file_name, h, before)
        }
        Some(_) => {}
    }
}

/// 全件を処理して사용일順に返す
pub fn process_receipts(
    records: &[ReceiptRecord],
    options: &ProcessOptions,
    today: &(impl DateProvider + Sync),
) -> Vec<ProcessedReceipt> {
    process_receipts_with(records, options, today, |_| {})
}

/// 1件処理するごとに `on_done` を呼ぶ（進捗表示用）
pub fn process_receipts_with<F>(
    records: &[ReceiptRecord],
    options: &ProcessOptions,
    today: &(impl DateProvider + Sync),
    on_done: F,
) -> Vec<ProcessedReceipt>
where
    F: Fn(&ProcessedReceipt) + Sync,
{
    let mut results: Vec<ProcessedReceipt> = records
        .par_iter()
        .map(|record| {
            let processed = process_receipt(record, options, today);
            on_done(&processed);
            processed
        })
        .collect();

    results.sort_by(|a, b| a.issue_date.cmp(&b.issue_date));

    tracing::debug!("{}건 처리 완료", results.len());
    results
}
