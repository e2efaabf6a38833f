//! Contains requirements via the [`Requirement`] and [`Requirements`] types.

use std::ops::Deref;
use strum_macros::{Display, EnumIter, EnumString};

/// A `:requirements` key. Every key of the PDDL 3.1 requirement list can be
/// read, but only [`Requirement::is_supported`] ones can be planned for.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString, EnumIter)]
pub enum Requirement {
    #[strum(serialize = ":strips")]
    Strips,
    #[strum(serialize = ":typing")]
    Typing,
    #[strum(serialize = ":negative-preconditions")]
    NegativePreconditions,
    #[strum(serialize = ":disjunctive-preconditions")]
    DisjunctivePreconditions,
    #[strum(serialize = ":equality")]
    Equality,
    #[strum(serialize = ":existential-preconditions")]
    ExistentialPreconditions,
    #[strum(serialize = ":universal-preconditions")]
    UniversalPreconditions,
    #[strum(serialize = ":quantified-preconditions")]
    QuantifiedPreconditions,
    #[strum(serialize = ":conditional-effects")]
    ConditionalEffects,
    #[strum(serialize = ":fluents")]
    Fluents,
    #[strum(serialize = ":numeric-fluents")]
    NumericFluents,
    #[strum(serialize = ":object-fluents")]
    ObjectFluents,
    #[strum(serialize = ":adl")]
    Adl,
    #[strum(serialize = ":durative-actions")]
    DurativeActions,
    #[strum(serialize = ":duration-inequalities")]
    DurationInequalities,
    #[strum(serialize = ":continuous-effects")]
    ContinuousEffects,
    #[strum(serialize = ":derived-predicates")]
    DerivedPredicates,
    #[strum(serialize = ":timed-initial-literals")]
    TimedInitialLiterals,
    #[strum(serialize = ":preferences")]
    Preferences,
    #[strum(serialize = ":constraints")]
    Constraints,
    #[strum(serialize = ":action-costs")]
    ActionCosts,
}

impl Requirement {
    pub const fn is_supported(&self) -> bool {
        matches!(
            self,
            Requirement::Strips
                | Requirement::Typing
                | Requirement::NegativePreconditions
                | Requirement::Equality
        )
    }
}

/// The requirements of a domain or problem.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Requirements(Vec<Requirement>);

impl Requirements {
    pub fn new<I: IntoIterator<Item = Requirement>>(requirements: I) -> Self {
        Self(requirements.into_iter().collect())
    }

    /// The first requirement that the engine cannot plan for, if any.
    pub fn first_unsupported(&self) -> Option<Requirement> {
        self.0.iter().copied().find(|r| !r.is_supported())
    }
}

impl Deref for Requirements {
    type Target = [Requirement];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
