pub mod config;
pub mod fill;
pub mod forms;
pub mod submit;

use clap::ValueEnum;
use event_hub::forms::FormType;

/// Form selector accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormArg {
    /// Event booking request
    Booking,
    /// Career application
    Career,
    /// Contact message
    Contact,
    /// Manpower requirement posting
    Requirement,
}

impl From<FormArg> for FormType {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Booking => FormType::Booking,
            FormArg::Career => FormType::Career,
            FormArg::Contact => FormType::Contact,
            FormArg::Requirement => FormType::Requirement,
        }
    }
}

/// Parses `name=value`; the value may be empty or contain further `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}
