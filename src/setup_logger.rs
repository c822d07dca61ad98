use crate::config::AppConfig;
use crate::error::InitProcessError;
use env_logger::{Builder, Target};
use std::fs::File;
use std::io::Write;

pub fn setup_logger(config: &AppConfig) -> Result<(), InitProcessError> {
    let mut builder = Builder::new();

    builder
        // ログレベルの設定
        .filter_level(config.log_level)
        // タイムスタンプ付きのフォーマット
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        });

    // ログファイルが指定されていればファイルに、なければ標準エラーに出力
    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| InitProcessError::LoggerError(format!("{}: {}", path.display(), e)))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder
        .try_init()
        .map_err(|e| InitProcessError::LoggerError(e.to_string()))
}
