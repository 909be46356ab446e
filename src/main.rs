use anyhow::Context;
use clap::Parser;
use sumlog::utils::logger;
use sumlog::{log, log_to, parse_operand, sum, CliConfig, Command, Settings, Stdout, SumlogError};

fn main() {
    let config = CliConfig::parse();

    let settings = match load_settings(&config) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let format = config.log_format.unwrap_or(settings.logging.format);
    logger::init_cli_logger(config.verbose, &settings.logging.level, format);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config.command) {
        exit_with(&e);
    }
}

fn load_settings(config: &CliConfig) -> anyhow::Result<Settings> {
    match &config.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Sum { a, b } => {
            let a = parse_operand("a", &a)?;
            let b = parse_operand("b", &b)?;
            let total = sum(a, b);
            tracing::info!(a, b, total, "computed sum");
            log_to(Stdout, &total.to_string())?;
        }
        Command::Log { message } => {
            tracing::debug!(len = message.len(), "logging message");
            log(&message);
        }
    }
    Ok(())
}

fn exit_with(err: &anyhow::Error) -> ! {
    match err.downcast_ref::<SumlogError>() {
        Some(e) => {
            tracing::error!(
                "Command failed: {} (Category: {:?}, Severity: {:?})",
                err,
                e.category(),
                e.severity()
            );
            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
        None => {
            tracing::error!("Command failed: {:#}", err);
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}
