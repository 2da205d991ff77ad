use std::io::Write;
use std::time::{Duration, Instant};

use clap::Parser;
use tempfile::NamedTempFile;
use auth_forms::cli::commands::{cmd_check_email, cmd_check_password, cmd_flash, format_submit_report};
use auth_forms::cli::config::{
    AppConfig, Cli, Commands, ConfigError, DEFAULT_BASE_URL, load_config, load_config_strict,
    resolve_base_url,
};
use auth_forms::form::error::{FieldError, SubmissionError};
use auth_forms::form::field::FieldName;
use auth_forms::form::form_model::{FormKind, SubmissionOutcome};
use auth_forms::form::messages;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_login() {
    let cli = Cli::parse_from(["auth-forms", "login", "--email", "a@b.c", "--password", "pw"]);
    match cli.command {
        Commands::Login { email, password } => {
            assert_eq!(email, "a@b.c");
            assert_eq!(password, "pw");
        }
        _ => panic!("Expected Login command"),
    }
    assert_eq!(cli.verbose, 0);
    assert!(cli.base_url.is_none());
}

#[test]
fn cli_parse_login_defaults_to_empty_fields() {
    let cli = Cli::parse_from(["auth-forms", "login"]);
    match cli.command {
        Commands::Login { email, password } => {
            assert!(email.is_empty());
            assert!(password.is_empty());
        }
        _ => panic!("Expected Login command"),
    }
}

#[test]
fn cli_parse_register_all_args() {
    let cli = Cli::parse_from([
        "auth-forms",
        "register",
        "--nome",
        "Maria",
        "--telefone",
        "11 99999-0000",
        "--instagram",
        "@maria",
        "--email",
        "maria@example.com",
        "--password",
        "segredo123",
        "--confirm-password",
        "segredo123",
    ]);
    match cli.command {
        Commands::Register {
            nome,
            telefone,
            instagram,
            email,
            password,
            confirm_password,
        } => {
            assert_eq!(nome, "Maria");
            assert_eq!(telefone, "11 99999-0000");
            assert_eq!(instagram, "@maria");
            assert_eq!(email, "maria@example.com");
            assert_eq!(password, "segredo123");
            assert_eq!(confirm_password, "segredo123");
        }
        _ => panic!("Expected Register command"),
    }
}

#[test]
fn cli_parse_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "auth-forms",
        "check-email",
        "a@b.c",
        "-vv",
        "--base-url",
        "http://auth.test",
        "--trace",
        "trace.jsonl",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.base_url.as_deref(), Some("http://auth.test"));
    assert_eq!(cli.trace.as_deref(), Some("trace.jsonl"));
    assert!(matches!(cli.command, Commands::CheckEmail { ref value } if value == "a@b.c"));
}

#[test]
fn check_commands_report_validity() {
    assert!(cmd_check_email(" a@b.c "));
    assert!(!cmd_check_email("a@b"));
    assert!(cmd_check_password("12345678"));
    assert!(!cmd_check_password("1234567"));
}

// ============================================================================
// Config File Tests
// ============================================================================

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn path_of(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

#[test]
fn missing_config_file_yields_defaults() {
    let config = load_config(Some("/definitely/not/here.yaml"));
    assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.flash.dismiss_after_secs, 5);
    assert!(config.timeout().is_none());
}

#[test]
fn malformed_config_falls_back_but_strict_load_reports() {
    let file = write_temp("server: [unclosed");

    let config = load_config(Some(path_of(&file)));
    assert_eq!(config.server.base_url, DEFAULT_BASE_URL);

    let err = load_config_strict(path_of(&file)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn partial_config_overrides_only_what_it_names() {
    let file = write_temp(
        r#"
server:
  base_url: "https://auth.example.com"
  timeout_secs: 10
paths:
  home: "/dashboard"
login:
  caption: "Sign in"
  rejected_message: "Wrong email or password"
flash:
  dismiss_after_secs: 2
"#,
    );

    let config = load_config_strict(path_of(&file)).unwrap();

    assert_eq!(config.server.base_url, "https://auth.example.com");
    assert_eq!(config.timeout(), Some(Duration::from_secs(10)));

    let login = config.form_settings(FormKind::Login);
    assert_eq!(login.idle_caption, "Sign in");
    assert_eq!(login.rejected_message, "Wrong email or password");
    assert_eq!(login.transport_failed_message, messages::LOGIN_TRANSPORT_FAILED);
    assert_eq!(login.busy_caption, messages::BUSY_CAPTION);
    assert_eq!(login.endpoint, "/login");
    assert_eq!(login.home_path, "/dashboard");

    let register = config.form_settings(FormKind::Register);
    assert_eq!(register.idle_caption, messages::REGISTER_CAPTION);
    assert_eq!(register.confirmation_pending_path, "/register/success");
}

#[test]
fn configured_flash_delay_reaches_the_board() {
    let file = write_temp("flash:\n  dismiss_after_secs: 2\n");
    let config = load_config_strict(path_of(&file)).unwrap();

    let start = Instant::now();
    let mut board = config.flash_board();
    board.push("success", "Registro realizado com sucesso!", start);

    assert_eq!(board.next_deadline(), Some(start + Duration::from_secs(2)));
    assert!(board.sweep(start + Duration::from_millis(1999)).is_empty());
    assert_eq!(board.sweep(start + Duration::from_secs(2)).len(), 1);
    assert!(board.visible().is_empty());
}

#[test]
fn flash_command_waits_out_the_configured_delay() {
    let mut config = AppConfig::default();
    config.flash.dismiss_after_secs = 0;

    let dismissed = cmd_flash(&config, "danger", "Credenciais inválidas");

    assert_eq!(dismissed.len(), 1);
    assert_eq!(dismissed[0].category, "danger");
    assert_eq!(dismissed[0].text, "Credenciais inválidas");
}

#[test]
fn cli_parse_flash_defaults_category() {
    let cli = Cli::parse_from(["auth-forms", "flash", "Bem-vindo"]);
    match cli.command {
        Commands::Flash { category, text } => {
            assert_eq!(category, "info");
            assert_eq!(text, "Bem-vindo");
        }
        _ => panic!("Expected Flash command"),
    }
}

#[test]
fn base_url_prefers_cli_over_config() {
    let config = AppConfig::default();
    assert_eq!(resolve_base_url(None, &config), DEFAULT_BASE_URL);
    assert_eq!(resolve_base_url(Some("http://cli.test"), &config), "http://cli.test");
}

// ============================================================================
// Report formatting
// ============================================================================

#[test]
fn report_lists_every_field_error() {
    let result = Err(SubmissionError::Validation(vec![
        FieldError::new(FieldName::Name, messages::NAME_REQUIRED),
        FieldError::new(FieldName::ConfirmPassword, messages::PASSWORDS_DIFFER),
    ]));

    let (report, navigated) = format_submit_report(&result);

    assert!(!navigated);
    assert_eq!(
        report,
        format!("nome: {}\nconfirm-password: {}", messages::NAME_REQUIRED, messages::PASSWORDS_DIFFER)
    );
}

#[test]
fn report_for_success_mentions_pending_confirmation() {
    let result = Ok(SubmissionOutcome::Success {
        redirect_url: "/register/success".into(),
        requires_confirmation: true,
    });

    let (report, navigated) = format_submit_report(&result);

    assert!(navigated);
    assert_eq!(report, "OK -> /register/success (email confirmation pending)");
}

#[test]
fn report_for_rejection_uses_designated_field() {
    let result = Ok(SubmissionOutcome::Failure {
        status: 401,
        message: messages::LOGIN_REJECTED.into(),
    });

    let (report, navigated) = format_submit_report(&result);

    assert!(!navigated);
    assert_eq!(report, format!("email: {}", messages::LOGIN_REJECTED));
}
