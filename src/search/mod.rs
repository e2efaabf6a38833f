mod action;
mod action_schema;
mod atom;
mod atom_schema;
mod condition;
mod grounder;
mod negatable;
mod object;
mod plan;
mod predicate;
pub mod search_engines;
mod solve;
mod state;
pub(crate) mod symbols;
mod task;
mod type_hierarchy;
mod validate;
mod verbosity;

pub use action::Action;
pub use action_schema::{ActionSchema, SchemaLiteral, SchemaParameter};
pub use atom::{Atom, ObjectTuple};
pub use atom_schema::{AtomSchema, SchemaArgument};
pub use condition::{Condition, GroundLiteral};
pub use grounder::ground_actions;
pub use negatable::Negatable;
pub use object::Object;
pub use plan::Plan;
pub use predicate::Predicate;
pub use solve::{solve, solve_problem, solve_task, validate_problem};
pub use state::{apply, satisfies, State};
pub use task::Task;
pub use type_hierarchy::{TypeHierarchy, OBJECT_TYPE};
pub use validate::validate;
pub use verbosity::Verbosity;
