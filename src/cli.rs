use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "receipt-datetime")]
#[command(about = "영수증 OCR 일시 정규화・시간대 카테고리 분류 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 날짜를 YYYYMMDD로 정규화
    Date {
        /// OCR 일시 텍스트
        #[arg(required = true)]
        text: String,
    },

    /// 시(0-23) 추출
    Hour {
        /// OCR 일시 텍스트
        #[arg(required = true)]
        text: String,
    },

    /// YYYY/MM/DD HH:MM 형식으로 변환
    Timestamp {
        /// OCR 일시 텍스트
        #[arg(required = true)]
        text: String,

        /// 시간만 있을 때 사용할 날짜 (YYYY-MM-DD, 기본: 오늘)
        #[arg(long)]
        today: Option<chrono::NaiveDate>,
    },

    /// 시간대로 카테고리 재분류
    Classify {
        /// 현재 카테고리 코드 (6110/6120/6130/6310/6320)
        #[arg(short, long, default_value = "6130")]
        category: String,

        /// OCR 일시 텍스트
        #[arg(required = true)]
        text: String,

        /// 시간대 재분류를 끔 (설정・환경변수보다 우선)
        #[arg(long)]
        no_time_category: bool,
    },

    /// OCR 결과 JSON을 일괄 처리
    Batch {
        /// 입력 JSON 파일 또는 폴더
        #[arg(required = true)]
        input: PathBuf,

        /// 출력 JSON 파일 (기본: 표준 출력)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 사용자 이름 (비고 생성용, 기본: 설정값)
        #[arg(short, long)]
        user_name: Option<String>,

        /// 시간대 재분류를 끔
        #[arg(long)]
        no_time_category: bool,

        /// 시간만 있을 때 사용할 날짜 (YYYY-MM-DD, 기본: 오늘)
        #[arg(long)]
        today: Option<chrono::NaiveDate>,
    },

    /// 설정 표시/편집
    Config {
        /// 사용자 이름 설정
        #[arg(long)]
        set_user_name: Option<String>,

        /// 시간대 재분류 설정 (true/false)
        #[arg(long)]
        set_time_category: Option<bool>,

        /// 현재 설정 표시
        #[arg(long)]
        show: bool,
    },
}
