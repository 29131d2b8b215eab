use clap::Parser;
use product_recolor::utils::logger;
use product_recolor::{app, CliConfig};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting product-recolor");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = app::execute(&cli, std::io::stdout());
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
