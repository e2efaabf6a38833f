//! The syntactic representation of domains, problems and plans. This is what
//! the [`crate::parsers`] produce and what [`crate::search::Task`] consumes.
//! Values can also be built by hand, without any PDDL text.

mod action_definition;
mod atom;
mod domain;
mod name;
mod plan;
mod problem;
mod prop_condition;
mod requirement;
mod term;
mod typed;
mod variable;

pub use action_definition::{ActionDefinition, PredicateDefinition};
pub use atom::{Atom, Literal, NameLiteral};
pub use domain::Domain;
pub use name::Name;
pub use plan::{Plan, PlanStep};
pub use problem::Problem;
pub use prop_condition::{PropCondition, PropEffect};
pub use requirement::{Requirement, Requirements};
pub use term::Term;
pub use typed::{ToTyped, Type, Typed, TypedList, OBJECT_TYPE_NAME};
pub use variable::Variable;
