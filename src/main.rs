use clap::Parser;
use delegation_playground::app::demo;
use delegation_playground::utils::{logger, validation::Validate};
use delegation_playground::{CliConfig, DelegationError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting delegation-playground");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Could not load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let report = match demo::run(&config) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("❌ Walkthrough failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(if e.is_delegate_failure() { 2 } else { 1 });
        }
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(DelegationError::from)?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "🍪 Baked cookie: size {}, chocolate chips: {} ({} delivered)",
        report.cookie.size, report.cookie.has_chocolate_chips, report.cookies_delivered
    );
    println!(
        "🔗 Bakery delegate after releasing the shop: {}",
        if report.bakery_delegate_after_release { "still set" } else { "gone" }
    );
    println!("📋 {}: {:?}", report.list_title, report.items);
    match report.selected {
        Some(index) => println!(
            "👉 Selected row {} ({} selection(s) delivered)",
            index, report.selections_delivered
        ),
        None => println!("👉 No row selected"),
    }

    Ok(())
}
