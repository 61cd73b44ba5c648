use form_core::ValidationOutcome;
use models::{Field, FieldState, Validity};

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::process::ExitCode;

/// Final state of one checked field.
#[derive(Debug, Clone)]
pub struct FieldReport {
    pub field: Field,
    pub state: FieldState,
    pub outcome: ValidationOutcome,
}

impl FieldReport {
    fn verdict(&self) -> String {
        match (&self.outcome, self.state.validity()) {
            (ValidationOutcome::Unchanged, _) => "unchecked: service unreachable".to_string(),
            (ValidationOutcome::Skipped, _) => "skipped".to_string(),
            (_, Validity::Valid) => "valid".to_string(),
            (_, Validity::Invalid) => {
                format!("invalid: {}", self.state.message().unwrap_or_default())
            }
            (_, Validity::Unset) => "not validated".to_string(),
        }
    }
}

/// Everything `shorty-check` prints after a run.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub prefix: String,
    pub fields: Vec<FieldReport>,
}

impl CheckReport {
    pub fn has_invalid(&self) -> bool {
        self.fields.iter().any(|f| f.outcome.is_invalid())
    }

    pub fn has_unchecked(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.outcome == ValidationOutcome::Unchanged)
    }

    /// `0` all valid, `1` something invalid, `2` something could not be checked.
    pub fn exit_status(&self) -> u8 {
        if self.has_unchecked() {
            2
        } else if self.has_invalid() {
            1
        } else {
            0
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl Display for CheckReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        writeln!(formatter, "prefix       {}", self.prefix)?;
        for report in &self.fields {
            writeln!(
                formatter,
                "{:<12} {} -> {}",
                report.field.to_string(),
                report.state.value,
                report.verdict()
            )?;
        }
        Ok(())
    }
}
