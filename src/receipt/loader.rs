use super::types::{ProcessedReceipt, ReceiptRecord};
use crate::error::{ReceiptError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use walkdir::WalkDir;

/// JSONファイル、またはJSONファイルを含むフォルダ（直下のみ）から読み込む
///
/// フォルダの場合はファイル名順に連結する。
pub fn load_records(path: &Path) -> Result<Vec<ReceiptRecord>> {
    if !path.exists() {
        return Err(ReceiptError::InputNotFound(path.display().to_string()));
    }

    if path.is_file() {
        return read_json_file(path);
    }

    let mut files: Vec<_> = WalkDir::new(path)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_json(p))
        .collect();
    files.sort();

    let mut records = Vec::new();
    for file in files {
        records.extend(read_json_file(&file)?);
    }

    tracing::debug!("{}건 로드: {}", records.len(), path.display());
    Ok(records)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn read_json_file(path: &Path) -> Result<Vec<ReceiptRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    if !value.is_array() {
        return Err(ReceiptError::InvalidInput(format!(
            "{}: 최상위가 배열이 아닙니다",
            path.display()
        )));
    }
    Ok(serde_json::from_value(value)?)
}

/// 処理結果をJSONで保存
pub fn write_results(path: &Path, results: &[ProcessedReceipt]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}
