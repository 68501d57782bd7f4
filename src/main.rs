use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use voucher_reader::{cli, client, config, error, panel, record, scanner};
use voucher_reader_common::{messages, save_fields, Phase, UploadSession};
use cli::{Cli, Commands};
use client::{HttpVoucherApi, SystemClipboard};
use config::Config;
use error::{Result, VoucherError};
use panel::PanelAction;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Extract { file, save, output, allow_pdf, interactive } => {
            println!("🧾 voucher-reader - {}\n", messages::TITLE);

            let policy = config.accept_policy().with_pdf(config.allow_pdf || allow_pdf);
            let mut session = UploadSession::new(policy);

            // 1. 読み込み・検証
            println!("[1/3] ファイルを読み込み中...");
            let local = scanner::load_file(&file)?;
            if !session.accept([local]) {
                return Err(rejected(&session));
            }
            if let Some(selected) = session.file() {
                println!("✔ {} {} ({} bytes)\n", messages::SELECTED_FILE, selected.name, selected.size_bytes);
            }

            let api = build_api(&config)?;
            let clipboard = SystemClipboard::default();

            // 2. 抽出
            println!("[2/3] 抽出中...");
            run_extraction(&mut session, &api).await;

            if interactive {
                run_panel(&mut session, &api, &clipboard).await?;
            } else {
                if session.error().is_some() {
                    return Err(rejected(&session));
                }
                print_result(&session);

                // 3. コピー・保存
                if save {
                    println!("[3/3] コピー・保存中...");
                    session.save(&api, &clipboard).await;
                    print_status(&session);
                }
            }

            if let (Some(path), Some(result)) = (output, session.result()) {
                let source = session.file().map(|f| f.name.clone()).unwrap_or_default();
                record::write_record(&path, &record::ExtractionRecord::new(source, result.clone()))?;
                println!("✔ 結果を保存: {}", path.display());
            }

            hold_clipboard(&clipboard, &config)?;
            if !interactive && (session.error().is_some() || session.clipboard_error().is_some()) {
                return Err(rejected(&session));
            }

            println!("\n✅ 完了");
        }

        Commands::Save { input } => {
            println!("💾 voucher-reader - 保存\n");

            let result = record::read_result(&input)?;
            println!("{}\n", panel::render_result(&result));

            let api = build_api(&config)?;
            let clipboard = SystemClipboard::default();
            let outcome = save_fields(&api, &clipboard, &result).await;

            match &outcome.clipboard {
                Ok(()) => println!("✔ {}", messages::CLIPBOARD_COPIED),
                Err(e) => println!("✖ {}", e.user_message()),
            }
            if let Err(e) = &outcome.server {
                println!("✖ {}", e.user_message());
            }

            hold_clipboard(&clipboard, &config)?;
            if let Err(e) = outcome.server {
                return Err(VoucherError::Rejected(e.user_message()));
            }

            println!("\n✅ 保存完了");
        }

        Commands::Preview { file } => {
            let local = scanner::load_file(&file)?;
            println!("{}", scanner::describe(&local));

            if let Err(e) = config.accept_policy().check(&local) {
                println!("⚠ {}", e);
            }
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  ベースURL: {}", config.resolved_base_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  PDF受付: {}", if config.allow_pdf { "有効" } else { "無効" });
                println!("  クリップボード保持: {}秒", config.clipboard_hold_seconds);
                println!("  {}", config.accept_policy().hint());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "voucher_reader=debug,voucher_reader_common=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();
}

fn build_api(config: &Config) -> Result<HttpVoucherApi> {
    let api = HttpVoucherApi::new(config.endpoints(), Duration::from_secs(config.timeout_seconds))?;
    tracing::debug!(base_url = api.endpoints().base_url(), "extraction service");
    Ok(api)
}

/// 終了でクリップボードの中身が消える環境では、貼り付けられるまで保持する
fn hold_clipboard(clipboard: &SystemClipboard, config: &Config) -> Result<()> {
    if !client::SERVES_SELECTION || !clipboard.has_text() || config.clipboard_hold_seconds == 0 {
        return Ok(());
    }
    println!(
        "⏳ クリップボードを{}秒間保持します（貼り付け後は Ctrl+C で終了）",
        config.clipboard_hold_seconds
    );
    clipboard.keep_alive(Duration::from_secs(config.clipboard_hold_seconds))?;
    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

async fn run_extraction(session: &mut UploadSession<Vec<u8>>, api: &HttpVoucherApi) {
    let pb = spinner(messages::ACTION_EXTRACTING);
    session.extract(api).await;
    pb.finish_and_clear();

    if session.retry_attempted() {
        tracing::debug!("extraction used the automatic retry");
    }
}

/// 対話式の結果パネル
async fn run_panel(
    session: &mut UploadSession<Vec<u8>>,
    api: &HttpVoucherApi,
    clipboard: &SystemClipboard,
) -> Result<()> {
    loop {
        print_result(session);
        print_status(session);

        match panel::choose_action(session.phase())? {
            PanelAction::Extract | PanelAction::Refresh => run_extraction(session, api).await,
            PanelAction::Copy => {
                session.save(api, clipboard).await;
            }
            PanelAction::Remove => {
                session.discard();
                println!("✔ 破棄しました");
                return Ok(());
            }
            PanelAction::Quit => return Ok(()),
        }
    }
}

fn print_result<H>(session: &UploadSession<H>) {
    if session.phase() != Phase::ResultReady {
        return;
    }
    if let Some(result) = session.result() {
        println!("{}\n", panel::render_result(result));
    }
}

fn print_status<H>(session: &UploadSession<H>) {
    for line in panel::render_status(session) {
        println!("{}", line);
    }
}

fn rejected<H>(session: &UploadSession<H>) -> VoucherError {
    let message = session
        .error()
        .or(session.clipboard_error())
        .map(|e| e.message.clone())
        .unwrap_or_else(|| messages::UPLOAD_FAILED.to_string());
    VoucherError::Rejected(message)
}
