use clap::Parser;
use fancy_serial::{batch, checker, cli, config, error, interactive, report};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use fancy_serial_common::{filter, stats, FilterCriteria, PatternDefinition};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Check { serial, denomination, condition } => {
            let classifier = config.build_classifier()?;
            let result = checker::check_serial(
                &classifier,
                &serial,
                denomination.unwrap_or(config.default_denomination),
                condition.unwrap_or(config.default_condition),
            )?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("💵 fancy-serial - シリアル判定\n");
                print!("{}", report::render_result(&result));
            }
        }

        Commands::Batch { input, denomination, condition, fancy_only } => {
            let classifier = config.build_classifier()?;
            let entries = batch::check_file(
                &classifier,
                &input,
                denomination.unwrap_or(config.default_denomination),
                condition.unwrap_or(config.default_condition),
            )?;
            let summary = batch::summarize(&entries);

            let shown: Vec<&batch::BatchEntry> = entries
                .iter()
                .filter(|e| !fancy_only || e.is_fancy())
                .collect();

            if cli.json {
                let output = serde_json::json!({ "entries": shown, "summary": summary });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("💵 fancy-serial - 一括判定\n");
                for entry in &shown {
                    match (&entry.result, &entry.error) {
                        (Some(result), _) if result.is_face_value() => {
                            println!("{:>4}: {}  該当なし", entry.line, entry.input);
                        }
                        (Some(result), _) => {
                            let names: Vec<&str> = result
                                .matched_patterns
                                .iter()
                                .map(|m| m.pattern_name.as_str())
                                .collect();
                            println!(
                                "{:>4}: {}  {}  ({})",
                                entry.line,
                                entry.input,
                                report::format_dollars(result.estimated_value),
                                names.join(", ")
                            );
                        }
                        (None, error) => {
                            println!(
                                "{:>4}: {}  ⚠ {}",
                                entry.line,
                                entry.input,
                                error.as_deref().unwrap_or("")
                            );
                        }
                    }
                }
                println!(
                    "\n✔ {}件を判定（ファンシー {}件 / 不正 {}件 / 推定合計 {}）",
                    summary.total,
                    summary.fancy,
                    summary.invalid,
                    report::format_dollars(summary.total_estimated_value)
                );
            }
        }

        Commands::Interactive => {
            println!("💵 fancy-serial - 対話判定\n");
            let classifier = config.build_classifier()?;
            interactive::run_interactive(
                &classifier,
                config.default_denomination,
                config.default_condition,
            )?;
        }

        Commands::Patterns { search, tier, min, max, patterns, rarity } => {
            let catalog = config.load_catalog()?;
            let criteria = FilterCriteria {
                search,
                tier,
                value_range: min.zip(max),
                pattern_types: patterns,
                rarity,
            };

            let mut found = filter::filter_patterns(catalog.patterns(), &criteria);
            filter::sort_for_display(&mut found);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                print!("{}", report::render_patterns(&found));
            }
        }

        Commands::Tiers { tier } => {
            let catalog = config.load_catalog()?;
            let tiers: Vec<_> = match tier {
                Some(n) => catalog.tier(n).into_iter().collect(),
                None => catalog.tiers().iter().collect(),
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tiers)?);
            } else {
                for info in tiers {
                    let mut members: Vec<&PatternDefinition> = catalog
                        .patterns()
                        .iter()
                        .filter(|p| p.tier == info.tier)
                        .collect();
                    filter::sort_for_display(&mut members);
                    println!("{}", report::render_tier(info, &members));
                }
                if tier.is_none() {
                    print!("{}", report::render_value_factors(catalog.value_factors()));
                }
            }
        }

        Commands::Stats { limit } => {
            let catalog = config.load_catalog()?;
            let mut all: Vec<&PatternDefinition> = catalog.patterns().iter().collect();
            filter::sort_for_display(&mut all);

            let values = stats::value_comparison(&all, limit);
            let rarity = stats::rarity_breakdown(&all);
            let tiers = stats::tier_distribution(&all, catalog.tiers());

            if cli.json {
                let output = serde_json::json!({
                    "valueComparison": values,
                    "rarityBreakdown": rarity,
                    "tierDistribution": tiers,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", report::render_stats(&values, &rarity, &tiers));
            }
        }

        Commands::Config { set_catalog, clear_catalog, strict, denomination, condition, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_catalog {
                config.set_catalog(Some(path))?;
                changed = true;
            }
            if clear_catalog {
                config.set_catalog(None)?;
                changed = true;
            }
            if let Some(strict) = strict {
                config.strict_catalog = strict;
                changed = true;
            }
            if let Some(denomination) = denomination {
                config.default_denomination = denomination;
                changed = true;
            }
            if let Some(condition) = condition {
                config.default_condition = condition;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!(
                    "  カタログ: {}",
                    config
                        .resolved_catalog_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".to_string())
                );
                println!("  厳格モード: {}", if config.strict_catalog { "有効" } else { "無効" });
                println!("  既定の額面: {}", config.default_denomination);
                println!("  既定の状態: {}", config.default_condition);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
