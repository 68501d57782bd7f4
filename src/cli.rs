use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "voucher-reader")]
#[command(about = "Lector de comprobantes: extrae nombre, monto, fecha y número de operación", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をアップロードして4項目を抽出
    Extract {
        /// 画像ファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// 抽出後にクリップボードへコピーし保存エンドポイントへ送る
        #[arg(short, long)]
        save: bool,

        /// 抽出結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// PDFも受け付ける
        #[arg(long)]
        allow_pdf: bool,

        /// 抽出後に操作を対話で選ぶ（Copiar / Actualizar / Remover）
        #[arg(short, long)]
        interactive: bool,
    },

    /// 抽出結果JSONをクリップボードへコピーし保存エンドポイントへ送る
    Save {
        /// 抽出結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// ファイルのプレビュー情報を表示
    Preview {
        /// 画像ファイルのパス
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 抽出サービスのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
