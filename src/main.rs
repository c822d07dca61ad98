use log::{error, info};
use tcp_header_view::config::{AppConfig, OutputFormat};
use tcp_header_view::error::InitProcessError;
use tcp_header_view::input::parse_header_arg;
use tcp_header_view::setup_logger::setup_logger;
use tcp_header_view::{HeaderView, TcpHeaderSummary};

// 引数が無いときにデコードするサンプルヘッダ
const SAMPLE_HEADER: &str = "b7 4e 01 bb b1 46 a4 61 00 00 00 00 a0 02 fa f0 9b ba 00 00";

fn main() -> Result<(), InitProcessError> {
    let config = AppConfig::from_env()?;
    setup_logger(&config)?;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        info!("ヘッダが指定されていないためサンプルをデコードします");
        args.push(SAMPLE_HEADER.to_string());
    }

    let mut failed = 0;
    for (index, arg) in args.iter().enumerate() {
        // 失敗したヘッダはスキップして次へ
        let bytes = match parse_header_arg(arg) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("ヘッダ{}の読み込みに失敗しました: {}", index + 1, e);
                failed += 1;
                continue;
            }
        };

        let view = match HeaderView::new(&bytes) {
            Ok(view) => view,
            Err(e) => {
                error!("ヘッダ{}のデコードに失敗しました: {}", index + 1, e);
                failed += 1;
                continue;
            }
        };

        let summary = TcpHeaderSummary::from(&view);
        match config.output {
            OutputFormat::Text => {
                if args.len() > 1 {
                    println!("--- ヘッダ{} ---", index + 1);
                }
                println!("{}", summary);
            }
            OutputFormat::Json => match summary.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("ヘッダ{}のJSON変換に失敗しました: {}", index + 1, e);
                    failed += 1;
                }
            },
        }
    }

    info!("{}件中{}件のヘッダをデコードしました", args.len(), args.len() - failed);
    Ok(())
}
