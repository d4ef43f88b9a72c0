use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use receipt_datetime::{cli, config, error, receipt};
use receipt_datetime_common::{
    extract_hour, format_timestamp, normalize_date, reclassify_by_time, CategoryCode, DateProvider,
    SystemClock,
};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn today_or_clock(today: Option<chrono::NaiveDate>) -> chrono::NaiveDate {
    today.unwrap_or_else(|| SystemClock.today())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Date { text } => {
            println!("{}", normalize_date(&text));
        }

        Commands::Hour { text } => {
            println!("{}", extract_hour(&text));
        }

        Commands::Timestamp { text, today } => {
            println!("{}", format_timestamp(&text, &today_or_clock(today)));
        }

        Commands::Classify { category, text, no_time_category } => {
            let enabled = !no_time_category && config.time_category_enabled();
            let current = CategoryCode::from_code(&category);
            let result = reclassify_by_time(current, &text, enabled);
            println!("{} ({})", result.code(), result.label());
        }

        Commands::Batch { input, output, user_name, no_time_category, today } => {
            let records = receipt::load_records(&input)?;
            eprintln!("✔ {}건 로드: {}", records.len(), input.display());

            let mut options = receipt::ProcessOptions::from_config(&config);
            if let Some(name) = user_name {
                options.user_name = name;
            }
            if no_time_category {
                options.time_category_enabled = false;
            }

            let bar = ProgressBar::new(records.len() as u64);
            if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len}") {
                bar.set_style(style);
            }
            let results = receipt::process_receipts_with(
                &records,
                &options,
                &today_or_clock(today),
                |_| bar.inc(1),
            );
            bar.finish_and_clear();

            match output {
                Some(path) => {
                    receipt::write_results(&path, &results)?;
                    eprintln!("✔ 결과 저장: {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&results)?),
            }
        }

        Commands::Config { set_user_name, set_time_category, show } => {
            let mut config = config;
            let changed = config.update(set_user_name, set_time_category);
            if changed {
                config.save()?;
                println!("✔ 설정을 저장했습니다: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let user_name = if config.user_name.is_empty() {
                    "(미설정)"
                } else {
                    config.user_name.as_str()
                };
                let time_category = if config.time_category_enabled() {
                    "사용"
                } else {
                    "사용 안 함"
                };
                println!("설정:");
                println!("  사용자 이름: {}", user_name);
                println!("  시간대 재분류: {}", time_category);
                println!(
                    "  결제일: 매월 {}일 (기준일 {}일)",
                    config.payment_day, config.payment_cutoff_day
                );
            }
        }
    }

    Ok(())
}
