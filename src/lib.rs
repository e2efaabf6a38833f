#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

//! A grounding STRIPS planner: PDDL front end, grounder, breadth-first
//! search engines and an independent plan validator.
//!
//! ```
//! # use groundplan::config::SearchConfig;
//! # use groundplan::search::{search_engines::SearchResult, solve_task, Task};
//! let domain = "(define (domain lamps) (:predicates (on ?l))
//!     (:action switch-on :parameters (?l) :precondition (not (on ?l)) :effect (on ?l)))";
//! let problem = "(define (problem two) (:domain lamps) (:objects l1 l2)
//!     (:init) (:goal (and (on l1) (on l2))))";
//!
//! let task = Task::from_text(domain, problem).unwrap();
//! match solve_task(&task, &SearchConfig::default()).unwrap() {
//!     SearchResult::Success(plan) => {
//!         assert_eq!(plan.to_string(&task), "(switch-on l1)\n(switch-on l2)")
//!     }
//!     other => panic!("unexpected outcome {}", other),
//! }
//! ```

// Crate dependencies used in binary but not in library. Unfortunately cargo
// does not yet allow specifying dependencies for binaries only.
use tracing_subscriber as _;

pub mod config;
pub mod error;
pub mod parsed_types;
pub mod parsers;
pub mod search;

#[cfg(test)]
mod test_utils;
