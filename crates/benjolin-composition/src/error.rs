//! Error and validation-issue types for compositions.

use thiserror::Error;

/// Issue codes for composition validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// C001: Composition has no elements
    EmptyComposition,
    /// C002: Transition not enclosed by two states
    UnenclosedTransition,
    /// C003: Element duration outside the allowed range
    DurationOutOfRange,
    /// C004: Total duration exceeds the composition cap
    CompositionTooLong,
}

impl IssueCode {
    /// Returns the issue code string (e.g., "C001").
    pub fn code(&self) -> &'static str {
        match self {
            IssueCode::EmptyComposition => "C001",
            IssueCode::UnenclosedTransition => "C002",
            IssueCode::DurationOutOfRange => "C003",
            IssueCode::CompositionTooLong => "C004",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation issue with code, message, and the offending element.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// The issue code.
    pub code: IssueCode,
    /// Human-readable message.
    pub message: String,
    /// Index of the offending element, when the issue is local to one.
    pub element: Option<usize>,
}

impl ValidationIssue {
    /// Creates a composition-level issue.
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            element: None,
        }
    }

    /// Creates an issue anchored to one element.
    pub fn at_element(code: IssueCode, message: impl Into<String>, element: usize) -> Self {
        Self {
            code,
            message: message.into(),
            element: Some(element),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(element) = self.element {
            write!(f, "{}: {} (element {})", self.code, self.message, element)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Errors raised when building or persisting a composition.
#[derive(Debug, Error)]
pub enum CompositionError {
    /// Adding the element would push the composition past its cap.
    #[error(
        "composition is full: {current_ms}ms held, adding {element_ms}ms would exceed {cap_ms}ms"
    )]
    Full {
        /// Total duration already on the timeline.
        current_ms: u64,
        /// Duration of the rejected element.
        element_ms: u64,
        /// The composition cap.
        cap_ms: u64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when rendering a composition into a schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The composition failed structural validation.
    #[error("composition failed validation with {} issue(s)", issues.len())]
    Invalid {
        /// The validation issues found.
        issues: Vec<ValidationIssue>,
    },

    /// A state's coordinate has no matching dataset point.
    #[error("element {element}: state coordinate has no matching dataset point")]
    UnresolvedState {
        /// Index of the offending element.
        element: usize,
    },

    /// Latent-space query error.
    #[error(transparent)]
    Space(#[from] benjolin_space::SpaceError),
}
