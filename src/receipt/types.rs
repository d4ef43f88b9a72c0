use receipt_datetime_common::CategoryCode;
use serde::{Deserialize, Serialize};

/// OCR済みの領収書1件（入力）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptRecord {
    pub file_name: String,

    /// 利用者が選んだカテゴリ
    pub category: CategoryCode,

    /// OCRの사용일テキスト（未加工）
    pub issue_date: String,

    /// OCRの金額テキスト（사용액）
    pub amount: String,

    /// 사용액が読めない場合に合算する 공급가 / 부가세
    pub supply_amount: String,
    pub vat_amount: String,

    pub purpose: String,          // 사용처
    pub remarks: String,          // 비고
    pub additional_names: String, // 동석자

    /// 국내출장 専用
    pub business_content: String,
    pub business_purpose: String,
}

/// 処理結果（帳票の1行）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedReceipt {
    pub file_name: String,
    /// 時間帯で補正したカテゴリ
    pub category: CategoryCode,
    pub category_label: String,
    pub remark: String,
    pub purpose: String,
    pub amount: String,
    /// `YYYYMMDD`（解釈できなければ元テキスト）
    pub issue_date: String,
    /// `YYYY/MM/DD HH:MM`（解釈できなければ元テキスト）
    pub original_issue_date: String,
    pub pay_date: String,
    /// 抽出した時（なければ null）
    pub hour: Option<u8>,
}
