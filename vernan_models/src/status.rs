/// Lifecycle of a submission as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether a success or failure banner is currently displayed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    /// The banner text, empty while idle or submitting.
    pub fn message(&self) -> &str {
        match self {
            Self::Idle | Self::Submitting => "",
            Self::Succeeded(message) | Self::Failed(message) => message,
        }
    }
}
