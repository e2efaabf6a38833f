//! Error types. Search outcomes ([`crate::search::SearchResult`]) are not
//! errors and live with the search engines.

use crate::parsed_types::{Name, Requirement};
use crate::search::{GroundLiteral, Task};
use std::path::PathBuf;
use thiserror::Error;

/// Malformed PDDL text. The location is that of the furthest point the parser
/// reached before failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub line: u32,
    pub column: usize,
    pub message: String,
}

/// A domain or problem that parses but cannot be turned into a task. Always
/// reported before any search begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroundingError {
    #[error("problem is for domain `{problem_domain}` but the domain is `{domain}`")]
    DomainMismatch { domain: Name, problem_domain: Name },
    #[error("requirement `{0}` is not supported")]
    UnsupportedRequirement(Requirement),
    #[error("unknown type `{name}` in {context}")]
    UnknownType { name: Name, context: String },
    #[error("type hierarchy is cyclic at `{0}`")]
    CyclicTypes(Name),
    #[error("duplicate {kind} `{name}`")]
    Duplicate { kind: &'static str, name: Name },
    #[error("unknown predicate `{predicate}` in {context}")]
    UnknownPredicate { predicate: Name, context: String },
    #[error("unknown parameter `?{parameter}` in action `{action}`")]
    UnknownParameter { action: Name, parameter: Name },
    #[error("unknown object `{object}` in {context}")]
    UnknownObject { object: Name, context: String },
    #[error("variable `?{variable}` in {context}, which must be ground")]
    UnexpectedVariable { variable: Name, context: String },
    #[error("predicate `{predicate}` takes {expected} arguments but {context} gives {found}")]
    ArityMismatch {
        predicate: Name,
        expected: usize,
        found: usize,
        context: String,
    },
    #[error("object `{object}` is not of type `{expected}` in {context}")]
    TypeMismatch {
        object: Name,
        expected: Name,
        context: String,
    },
    #[error("negative literal `{0}` in the initial state")]
    NegativeInitialFact(String),
    #[error("unsupported condition `{condition}` in {context}")]
    UnsupportedCondition { condition: String, context: String },
}

/// Why a plan step failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailureKind {
    #[error("precondition {literal:?} is violated")]
    PreconditionViolated { literal: GroundLiteral },
    #[error("goal literal {literal:?} is not reached")]
    GoalNotReached { literal: GroundLiteral },
}

/// A plan that does not solve its task. `step` is the index of the offending
/// action, or the plan length when the plan runs to completion but misses the
/// goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step {step}: {kind}")]
pub struct ValidationFailure {
    pub step: usize,
    pub kind: ValidationFailureKind,
}

impl ValidationFailure {
    pub fn precondition_violated(step: usize, literal: GroundLiteral) -> Self {
        Self {
            step,
            kind: ValidationFailureKind::PreconditionViolated { literal },
        }
    }

    pub fn goal_not_reached(step: usize, literal: GroundLiteral) -> Self {
        Self {
            step,
            kind: ValidationFailureKind::GoalNotReached { literal },
        }
    }

    pub fn literal(&self) -> &GroundLiteral {
        match &self.kind {
            ValidationFailureKind::PreconditionViolated { literal }
            | ValidationFailureKind::GoalNotReached { literal } => literal,
        }
    }

    pub fn is_goal_failure(&self) -> bool {
        matches!(self.kind, ValidationFailureKind::GoalNotReached { .. })
    }

    /// Renders the failure with object and predicate names.
    pub fn describe(&self, task: &Task) -> String {
        match &self.kind {
            ValidationFailureKind::PreconditionViolated { literal } => format!(
                "step {}: precondition {} is violated",
                self.step,
                literal.to_string(task)
            ),
            ValidationFailureKind::GoalNotReached { literal } => format!(
                "goal literal {} is not reached after {} steps",
                literal.to_string(task),
                self.step
            ),
        }
    }
}

/// Everything that can go wrong between reading input and producing a
/// search result or a validation verdict.
#[derive(Debug, Error)]
pub enum PlanningError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Grounding(#[from] GroundingError),
    #[error("invalid plan step {step}: {reason}")]
    InvalidPlanStep { step: usize, reason: String },
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write `{path}`: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PlanningError {
    /// Whether the error stems from malformed or unreadable input rather
    /// than from a plan that fails to validate or from writing results.
    pub fn is_malformed_input(&self) -> bool {
        !matches!(
            self,
            PlanningError::Validation(_) | PlanningError::Output { .. }
        )
    }
}
