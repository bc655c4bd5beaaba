use clap::{Parser, Subcommand};
use fancy_serial_common::{stats, Condition, Denomination};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fancy-serial")]
#[command(about = "米国紙幣シリアル番号のファンシーパターン判定・評価ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 結果をJSONで出力
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// シリアル番号を判定して評価額を表示
    Check {
        /// シリアル番号（例: A12345678B, A12345678*）
        #[arg(required = true)]
        serial: String,

        /// 額面 (1/2/5/10/20/50/100)
        #[arg(short, long)]
        denomination: Option<Denomination>,

        /// 状態 (uncirculated/excellent/fine/fair/poor)
        #[arg(short, long)]
        condition: Option<Condition>,
    },

    /// ファイル内のシリアル番号（1行1件）を一括判定
    Batch {
        /// 入力ファイル（空行と # で始まる行は無視）
        #[arg(required = true)]
        input: PathBuf,

        /// 額面 (1/2/5/10/20/50/100)
        #[arg(short, long)]
        denomination: Option<Denomination>,

        /// 状態 (uncirculated/excellent/fine/fair/poor)
        #[arg(short, long)]
        condition: Option<Condition>,

        /// 該当パターンのあるシリアルのみ表示
        #[arg(long)]
        fancy_only: bool,
    },

    /// 対話的にシリアル番号を判定
    Interactive,

    /// パターン一覧を表示（絞り込み可）
    Patterns {
        /// 名前・説明・例・タグで検索
        #[arg(short, long)]
        search: Option<String>,

        /// ティア (1-6)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
        tier: Option<u8>,

        /// 最低価格（ドル）
        #[arg(long, requires = "max")]
        min: Option<u64>,

        /// 最高価格（ドル）
        #[arg(long, requires = "min")]
        max: Option<u64>,

        /// パターン種別タグ (solid/ladder/binary/radar/repeater/low/high/date)
        #[arg(short, long = "pattern")]
        patterns: Vec<String>,

        /// 希少度 (extremely-rare/very-rare/rare/uncommon/somewhat-common/common)
        #[arg(short, long)]
        rarity: Option<String>,
    },

    /// ティア情報を表示
    Tiers {
        /// 特定のティアのみ表示
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
        tier: Option<u8>,
    },

    /// カタログの集計値を表示
    Stats {
        /// 価格比較に表示する件数
        #[arg(long, default_value_t = stats::DEFAULT_COMPARISON_LIMIT)]
        limit: usize,
    },

    /// 設定を表示/編集
    Config {
        /// カスタムカタログJSONを設定
        #[arg(long, conflicts_with = "clear_catalog")]
        set_catalog: Option<PathBuf>,

        /// カスタムカタログを解除（組み込みカタログに戻す）
        #[arg(long)]
        clear_catalog: bool,

        /// カタログ欠落時に起動エラーにする (true/false)
        #[arg(long)]
        strict: Option<bool>,

        /// 既定の額面
        #[arg(long)]
        denomination: Option<Denomination>,

        /// 既定の状態
        #[arg(long)]
        condition: Option<Condition>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
