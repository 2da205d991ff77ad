use clap::Parser;
use tracing_subscriber::EnvFilter;

use auth_forms::cli::commands::{cmd_check_email, cmd_check_password, cmd_flash, cmd_submit};
use auth_forms::cli::config::{Cli, Commands, load_config};
use auth_forms::form::field::FieldName;
use auth_forms::form::form_model::FormKind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());
    let base_url = cli.base_url.as_deref();
    let trace = cli.trace.as_deref();

    let ok = match &cli.command {
        Commands::Login { email, password } => cmd_submit(
            FormKind::Login,
            &[(FieldName::Email, email.as_str()), (FieldName::Password, password.as_str())],
            &config,
            base_url,
            trace,
        )?,
        Commands::Register {
            nome,
            telefone,
            instagram,
            email,
            password,
            confirm_password,
        } => cmd_submit(
            FormKind::Register,
            &[
                (FieldName::Name, nome.as_str()),
                (FieldName::Phone, telefone.as_str()),
                (FieldName::Handle, instagram.as_str()),
                (FieldName::Email, email.as_str()),
                (FieldName::Password, password.as_str()),
                (FieldName::ConfirmPassword, confirm_password.as_str()),
            ],
            &config,
            base_url,
            trace,
        )?,
        Commands::CheckEmail { value } => cmd_check_email(value),
        Commands::CheckPassword { value } => cmd_check_password(value),
        Commands::Flash { category, text } => !cmd_flash(&config, category, text).is_empty(),
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}

/// RUST_LOG wins; otherwise -v raises the level from warn.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
