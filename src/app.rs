use crate::adapters::{ConsoleProgress, LocalStorage};
use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::core::recolorer::BatchRecolorer;
use crate::core::{ConfigProvider, PlannedOutput};
use crate::utils::error::RecolorError;
use crate::utils::validation::Validate;
use std::io::Write;

/// Runs one invocation of the CLI and returns the process exit code.
///
/// Progress lines and the dry-run plan go to `out`; logs and user-facing
/// errors go through `tracing` and stderr.
pub fn execute<W: Write>(cli: &CliConfig, out: W) -> i32 {
    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(mut config) => {
                    config.apply_overrides(cli);
                    tracing::info!("📋 Job: {}", config.job_name());
                    let monitor_enabled = cli.monitor || config.monitoring_enabled();
                    run(config, cli, monitor_enabled, out)
                }
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    e.exit_code()
                }
            }
        }
        None => run(cli.clone(), cli, cli.monitor, out),
    }
}

fn run<C, W>(config: C, cli: &CliConfig, monitor_enabled: bool, mut out: W) -> i32
where
    C: ConfigProvider + Validate,
    W: Write,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return e.exit_code();
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    log_config_summary(&config);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No images will be loaded or written");
        let recolorer = BatchRecolorer::new(LocalStorage::new(), config, ConsoleProgress::new(std::io::sink()));
        return match recolorer.plan() {
            Ok(plan) => {
                if let Err(e) = write_plan(&mut out, &plan) {
                    tracing::warn!("Failed to print dry run plan: {}", e);
                }
                0
            }
            Err(e) => report_failure(&e),
        };
    }

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let mut recolorer = BatchRecolorer::new_with_monitoring(
        LocalStorage::new(),
        config,
        ConsoleProgress::new(out),
        monitor_enabled,
    );

    match recolorer.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Recolored {} entries, wrote {} file(s)",
                summary.entries_processed,
                summary.outputs.len()
            );
            0
        }
        Err(e) => report_failure(&e),
    }
}

fn log_config_summary<C: ConfigProvider>(config: &C) {
    tracing::info!("📋 Configuration Summary:");
    for source in config.sources() {
        if source.suffix.is_empty() {
            tracing::info!("  Source: {}", source.path.display());
        } else {
            tracing::info!("  Source: {} (suffix '{}')", source.path.display(), source.suffix);
        }
    }
    tracing::info!("  Output: {}", config.output_dir().display());
    tracing::info!("  Quality: {}", config.quality());
    tracing::info!("  Entries: {}", config.entries().len());
}

fn write_plan<W: Write>(out: &mut W, plan: &[PlannedOutput]) -> std::io::Result<()> {
    writeln!(out, "🔍 Dry Run Plan ({} file(s)):", plan.len())?;
    for item in plan {
        writeln!(
            out,
            "  [{}] {} on {} -> {}",
            item.index,
            item.source.display(),
            item.color,
            item.output.display()
        )?;
    }
    Ok(())
}

fn report_failure(e: &RecolorError) -> i32 {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Recolor failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    e.exit_code()
}
