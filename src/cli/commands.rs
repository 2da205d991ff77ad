use std::time::Instant;

use tracing::debug;

use crate::browser::navigator::LogNavigator;
use crate::browser::transport::HttpTransport;
use crate::cli::config::{AppConfig, resolve_base_url};
use crate::form::controller::FormController;
use crate::form::error::SubmissionError;
use crate::form::field::FieldName;
use crate::form::form_model::{DESIGNATED_ERROR_FIELD, FormKind, SubmissionOutcome};
use crate::form::validator::{is_valid_email, is_valid_password};
use crate::trace::logger::TraceLogger;
use crate::ui::flash::FlashMessage;

// ============================================================================
// login / register subcommands
// ============================================================================

/// Fill a form with `values`, submit it once, and report what the user
/// would see. Returns whether the form navigated away.
pub fn cmd_submit(
    kind: FormKind,
    values: &[(FieldName, &str)],
    config: &AppConfig,
    base_url: Option<&str>,
    trace_path: Option<&str>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let base_url = resolve_base_url(base_url, config);
    let transport = HttpTransport::with_timeout(base_url, config.timeout())?;
    let tracer = trace_path.map(TraceLogger::new).unwrap_or_default();

    let mut controller = FormController::new(
        kind,
        config.form_settings(kind),
        Box::new(transport),
        Box::new(LogNavigator),
    )
    .with_tracer(tracer);

    for &(field, value) in values {
        controller.input(field, value);
    }

    let result = controller.submit();
    let (report, navigated) = format_submit_report(&result);
    if navigated {
        println!("{}", report);
    } else {
        eprintln!("{}", report);
    }

    Ok(navigated)
}

/// Render a submission result the way the form would show it.
pub fn format_submit_report(result: &Result<SubmissionOutcome, SubmissionError>) -> (String, bool) {
    match result {
        Ok(SubmissionOutcome::Success {
            redirect_url,
            requires_confirmation,
        }) => {
            let mut out = format!("OK -> {}", redirect_url);
            if *requires_confirmation {
                out.push_str(" (email confirmation pending)");
            }
            (out, true)
        }
        Ok(SubmissionOutcome::Failure { message, .. } | SubmissionOutcome::NetworkError { message }) => {
            (format!("{}: {}", DESIGNATED_ERROR_FIELD, message), false)
        }
        Err(SubmissionError::Validation(errors)) => {
            let lines: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            (lines.join("\n"), false)
        }
        Err(e) => (e.to_string(), false),
    }
}

// ============================================================================
// check-email / check-password subcommands
// ============================================================================

pub fn cmd_check_email(value: &str) -> bool {
    let valid = is_valid_email(value.trim());
    println!("{}", if valid { "valid" } else { "invalid" });
    valid
}

pub fn cmd_check_password(value: &str) -> bool {
    let valid = is_valid_password(value);
    println!("{}", if valid { "valid" } else { "invalid" });
    valid
}

// ============================================================================
// flash subcommand
// ============================================================================

/// Print a flash message, wait out the configured dismiss delay, and return
/// what the board removed.
pub fn cmd_flash(config: &AppConfig, category: &str, text: &str) -> Vec<FlashMessage> {
    let mut board = config.flash_board();
    board.push(category, text, Instant::now());
    println!("[{}] {}", category, text);

    let mut dismissed = Vec::new();
    while let Some(deadline) = board.next_deadline() {
        std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
        dismissed.extend(board.sweep(Instant::now()));
    }

    for message in &dismissed {
        debug!(category = %message.category, "flash dismissed");
        println!("dismissed [{}]", message.category);
    }
    dismissed
}
