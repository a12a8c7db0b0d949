use anyhow::Context;
use clap::Parser;
use pizza_dough::utils::error::ErrorSeverity;
use pizza_dough::utils::{logger, validation::Validate};
use pizza_dough::{render_outcomes, CliConfig, DoughError, RecipeEngine, RecipeFile};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // Logging goes to stderr so stdout only carries the recipe
    logger::init_logger(config.log_format, config.verbose);

    tracing::info!("🍕 Starting pizza-dough");
    tracing::debug!("CLI config: {:?}", config);

    // Check the flags themselves; recipe values are checked by the engine
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    // Recipe file takes precedence over the three input flags
    let (outcomes, format) = match &config.recipe_file {
        Some(path) => {
            tracing::info!("📁 Loading recipes from: {}", path);
            let file = match RecipeFile::from_file(path).and_then(|f| f.validate().map(|_| f)) {
                Ok(file) => file,
                Err(e) => exit_with(&e),
            };
            let format = config.format.unwrap_or_else(|| file.output_format());
            (RecipeEngine::with_sources(file.recipes).run_batch(), format)
        }
        None => (
            RecipeEngine::new(config.clone()).run_batch(),
            config.format.unwrap_or_default(),
        ),
    };

    // Render and print, errors included
    let rendered = match render_outcomes(&outcomes, format) {
        Ok(rendered) => rendered,
        Err(e) => exit_with(&e),
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end())
        .and_then(|_| stdout.flush())
        .context("failed to write recipe output")?;

    // Rejected recipes were already printed; only the exit code is left
    let mut exit_code = 0;
    for outcome in outcomes {
        let name = outcome.name.clone();
        if let Err(e) = outcome.into_result() {
            tracing::warn!("❌ Recipe '{}' rejected: {}", name, e);
            exit_code = exit_code.max(exit_code_for(&e));
        }
    }
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    tracing::info!("✅ Done");
    Ok(())
}

fn exit_code_for(e: &DoughError) -> i32 {
    match e.severity() {
        ErrorSeverity::Critical => 3,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Low | ErrorSeverity::High => 1,
    }
}

fn exit_with(e: &DoughError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code_for(e));
}
