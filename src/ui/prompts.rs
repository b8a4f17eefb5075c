use anyhow::Result;
use colored::*;
use dialoguer::{Input, MultiSelect, Select};
use event_hub::forms::{FieldKind, FieldSchema, FormValues};

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

/// Prompts for one field and stores the answer in `values`.
///
/// The current value is offered as the starting point; `error` is shown
/// above the prompt when the field is being corrected.
pub fn prompt_field(field: &FieldSchema, values: &mut FormValues, error: Option<&str>) -> Result<()> {
    if let Some(message) = error {
        println!("  {} {}", "✗".bright_red(), message.red());
    }

    match field.kind {
        FieldKind::Choice => {
            let labels: Vec<&str> = field.options.iter().map(|o| o.label).collect();
            let current = values.text(field.name);
            let mut select = Select::new().with_prompt(field.label).items(&labels);
            if let Some(index) = field.options.iter().position(|o| o.value == current) {
                select = select.default(index);
            }
            let index = select.interact()?;
            values.set_text(field.name, field.options[index].value);
        }
        FieldKind::MultiChoice => {
            let labels: Vec<&str> = field.options.iter().map(|o| o.label).collect();
            let checked: Vec<bool> = field
                .options
                .iter()
                .map(|o| values.is_selected(field.name, o.value))
                .collect();
            let picked = MultiSelect::new()
                .with_prompt(format!("{} (space to toggle)", field.label))
                .items(&labels)
                .defaults(&checked)
                .interact()?;
            let selection = picked
                .into_iter()
                .map(|i| field.options[i].value.to_string())
                .collect();
            values.set_selection(field.name, selection);
        }
        _ => {
            let prompt = match field.kind {
                FieldKind::Date => format!("{} (YYYY-MM-DD)", field.label),
                _ if !field.is_required() => format!("{} (optional)", field.label),
                _ => field.label.to_string(),
            };
            let answer: String = Input::new()
                .with_prompt(prompt)
                .with_initial_text(values.text(field.name))
                .allow_empty(!field.is_required())
                .interact_text()?;
            values.set_text(field.name, answer);
        }
    }

    Ok(())
}
