use std::fmt;

use crate::RESULT_SEPARATOR;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelayOutcome {
    Success,
    Failure,
}

impl RelayOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            RelayOutcome::Success => "ส่งสำเร็จ",
            RelayOutcome::Failure => "ล้มเหลว",
        }
    }
}

impl From<bool> for RelayOutcome {
    fn from(success: bool) -> Self {
        if success {
            RelayOutcome::Success
        } else {
            RelayOutcome::Failure
        }
    }
}

impl fmt::Display for RelayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayResult {
    pub file_name: String,
    pub outcome: RelayOutcome,
}

impl RelayResult {
    pub fn new(file_name: impl Into<String>, outcome: RelayOutcome) -> Self {
        Self {
            file_name: file_name.into(),
            outcome,
        }
    }

    /// Renders a batch as the plain-text response body.
    pub fn join(results: &[RelayResult]) -> String {
        results
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(RESULT_SEPARATOR)
    }
}

impl fmt::Display for RelayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file_name, self.outcome)
    }
}
