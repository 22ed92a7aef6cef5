use clap::Parser;
use visual_search::{cli, client, config, controller, error, output, progress, upload};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { file, url, format, output, backend } => {
            let backend = config.backend(backend.as_deref())?;
            log::debug!("バックエンド: {}", backend.base_url());

            let upload = file.as_deref().map(upload::load_image).transpose()?;

            let transport = client::HttpTransport::new(config.timeout())?;
            let mut controller = controller::SearchController::new(transport, backend);

            // 標準出力に書く場合でもスピナーは標準エラー側に出る
            let mut sink = if cli.verbose {
                progress::SpinnerSink::quiet()
            } else {
                progress::SpinnerSink::new()
            };

            let invocation = controller
                .handle_search_invocation(upload, url.as_deref().unwrap_or(""), &mut sink)
                .await;

            if !invocation.is_success() {
                // ログとアラートは出力済み
                output::write_failure(&invocation, format, output.as_deref())?;
                drop(sink);
                std::process::exit(1);
            }

            output::write_invocation(&invocation, format, output.as_deref())?;
        }

        Commands::Config { set_backend, set_timeout, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_backend {
                config.set_backend_url(url)?;
                changed = true;
                println!("✔ バックエンドURLを設定しました");
            }

            if let Some(secs) = set_timeout {
                config.timeout_seconds = (secs > 0).then_some(secs);
                changed = true;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  バックエンドURL: {}", config.backend_url);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
