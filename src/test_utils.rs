use crate::search::search_engines::SearchResult;
use crate::search::Plan;

pub const RESEARCH_DOMAIN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/research/domain.pddl"
));

pub const RESEARCH_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/research/problem.pddl"
));

pub const RESEARCH_PROBLEM_NO_WEBSEARCH_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/research/problem-no-websearch.pddl"
));

pub const RESEARCH_PLAN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/research/plan.txt"
));

pub const BLOCKSWORLD_DOMAIN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocksworld/domain.pddl"
));

pub const BLOCKSWORLD_PROBLEM01_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocksworld/p01.pddl"
));

pub fn expect_plan(result: SearchResult) -> Plan {
    match result {
        SearchResult::Success(plan) => plan,
        other => panic!("expected a plan, got {:?}", other),
    }
}
