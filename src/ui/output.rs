//! Terminal rendering for forms, errors and notifications

use colored::*;
use event_hub::api::logging::redact_endpoint;
use event_hub::api::SubmissionGateway;
use event_hub::forms::{schema, FieldKind, FieldSchema, FormSchema, FormType, ValidationErrors};
use event_hub::notify::{Notification, Notifier, Severity};

/// Prints notifications to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        log::info!("Notification: {}", notification.title);
        println!();
        match notification.severity {
            Severity::Default => {
                println!("{} {}", "✓".bright_green().bold(), notification.title.bright_green().bold())
            }
            Severity::Destructive => {
                println!("{} {}", "✗".bright_red().bold(), notification.title.bright_red().bold())
            }
        }
        println!("  {}", notification.description.dimmed());
    }
}

pub fn print_forms(forms: &[FormType]) {
    println!();
    println!("  {}", "Available forms:".bright_white().bold());
    for &form_type in forms {
        println!(
            "  {} {:<12} {} ({} fields)",
            "●".bright_green(),
            form_type.slug().bright_green().bold(),
            form_type.wire_name(),
            schema(form_type).fields().len()
        );
    }
    println!();
}

fn describe_constraints(field: &FieldSchema) -> String {
    let presence = if field.is_required() { "required" } else { "optional" };
    let mut parts = vec![presence.to_string()];
    match (field.kind, field.max_len) {
        (FieldKind::MultiChoice, _) if field.min_selected > 0 => {
            parts.push(format!("at least {} selected", field.min_selected))
        }
        (FieldKind::Text | FieldKind::LongText | FieldKind::Phone, Some(max)) => {
            parts.push(format!("{}-{} chars", field.min_len, max))
        }
        (FieldKind::Date, _) => parts.push("YYYY-MM-DD".to_string()),
        _ => {}
    }
    parts.join(", ")
}

pub fn print_schema(schema: &FormSchema) {
    println!();
    println!(
        "  {} ({})",
        schema.form_type.wire_name().bright_white().bold(),
        schema.form_type.slug().dimmed()
    );
    for field in schema.fields() {
        println!(
            "  {} {:<24} {:<13} {}",
            "○".bright_green(),
            field.name.bright_green(),
            field.kind.as_str().cyan(),
            describe_constraints(field).dimmed()
        );
        if let Some(cond) = field.visible_when {
            println!("      {}", format!("shown when {} includes '{}'", cond.field, cond.option).dimmed());
        }
        for option in &field.options {
            if option.value == option.label {
                println!("      - {}", option.value);
            } else {
                println!("      - {} {}", option.value, format!("({})", option.label).dimmed());
            }
        }
    }
    println!();
}

pub fn print_validation_errors(schema: &FormSchema, errors: &ValidationErrors) {
    println!();
    println!("  {}", "Please fix the following fields:".bright_yellow().bold());
    for error in errors.iter() {
        let label = schema.field(error.field).map(|f| f.label).unwrap_or(error.field);
        println!("  {} {}: {}", "✗".bright_red(), label.bright_white(), error.message.red());
    }
    println!();
}

pub fn print_gateway_banner(gateway: &SubmissionGateway) {
    match gateway.endpoint() {
        Some(endpoint) => println!(
            "  {} {} ({})",
            "Collector:".dimmed(),
            redact_endpoint(endpoint).cyan(),
            gateway.delivery_mode()
        ),
        None => println!(
            "  {} {}",
            "⚠️ ".bright_yellow(),
            format!(
                "No collector configured; submissions are simulated ({} ms delay)",
                gateway.stub_delay().as_millis()
            )
            .bright_yellow()
        ),
    }
}

pub fn print_endpoint_status(effective: Option<&str>, configured: Option<&str>) {
    match (effective, configured) {
        (Some(effective), Some(configured)) if effective == configured.trim() => {
            println!("  {} {}", "Collector:".bright_white().bold(), redact_endpoint(effective).cyan())
        }
        (Some(effective), _) => println!(
            "  {} {} {}",
            "Collector:".bright_white().bold(),
            redact_endpoint(effective).cyan(),
            "(from environment)".dimmed()
        ),
        (None, _) => println!(
            "  {} {}",
            "Collector:".bright_white().bold(),
            "none, stub mode".bright_yellow()
        ),
    }
}
