use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("입력 파일을 찾을 수 없습니다: {0}")]
    InputNotFound(String),

    #[error("입력 형식이 올바르지 않습니다: {0}")]
    InvalidInput(String),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
