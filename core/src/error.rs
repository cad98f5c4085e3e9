use std::fmt;
use thiserror::Error;

/// The wizard step a blocking error points the user back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Scenario,
    Equipment,
    Deployment,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::Scenario   => "scenario builder",
            WizardStep::Equipment  => "equipment selection",
            WizardStep::Deployment => "deployment visualization",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    /// A downstream stage was invoked before its input exists. Blocking;
    /// the user must complete the named step first.
    #[error("Required data is missing. Please complete the {step} step first.")]
    MissingInput { step: WizardStep },

    /// Proceeding with zero selected equipment. Recoverable by
    /// reselecting.
    #[error("Please select at least one piece of equipment")]
    EmptySelection,

    /// A required scenario form field was empty at submission.
    #[error("Scenario field '{field}' is required")]
    InvalidScenario { field: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
