//! Session history of accepted operations.
//!
//! History is an immutable value: recording returns a new history and leaves
//! the original untouched. Only accepted operations are recorded.

use super::phase::Phase;
use super::token::TokenId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Operation that produced a transition.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Operation {
    Select(TokenId),
    /// Carries the drawn token, not the selected one
    Draw(TokenId),
    Decrement(TokenId),
    Reset,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Draw(_) => "draw",
            Self::Decrement(_) => "decrement",
            Self::Reset => "reset",
        }
    }
}

/// Record of a single accepted operation.
///
/// # Example
///
/// ```rust
/// use menagerie::core::{Operation, Phase, PhaseTransition, TokenId};
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     from: Phase::Idle,
///     to: Phase::Selected,
///     operation: Operation::Select(TokenId::new("🐼")),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed_phase());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Phase before the operation
    pub from: Phase,
    /// Phase after the operation
    pub to: Phase,
    /// What was done
    pub operation: Operation,
    /// When it was accepted
    pub timestamp: DateTime<Utc>,
}

impl PhaseTransition {
    /// Record `operation` as happening now.
    pub fn now(from: Phase, to: Phase, operation: Operation) -> Self {
        Self {
            from,
            to,
            operation,
            timestamp: Utc::now(),
        }
    }

    /// Whether the operation moved the machine to a different phase.
    pub fn changed_phase(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of accepted operations in a session.
///
/// # Example
///
/// ```rust
/// use menagerie::core::{Operation, Phase, PhaseHistory, PhaseTransition, TokenId};
///
/// let history = PhaseHistory::new()
///     .record(PhaseTransition::now(
///         Phase::Idle,
///         Phase::Selected,
///         Operation::Select(TokenId::new("🐼")),
///     ))
///     .record(PhaseTransition::now(
///         Phase::Selected,
///         Phase::Drawn,
///         Operation::Draw(TokenId::new("🦁")),
///     ));
///
/// assert_eq!(history.get_path(), vec![Phase::Idle, Phase::Selected, Phase::Drawn]);
/// assert_eq!(history.draws(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: PhaseTransition) {
        self.transitions.push(transition);
    }

    /// Phases traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last recorded operation.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of accepted draws.
    pub fn draws(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| matches!(t.operation, Operation::Draw(_)))
            .count()
    }

    /// Tokens drawn so far, oldest first.
    pub fn winners(&self) -> impl Iterator<Item = &TokenId> {
        self.transitions.iter().filter_map(|t| match &t.operation {
            Operation::Draw(id) => Some(id),
            _ => None,
        })
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
