use crate::error::{GroundingError, PlanningError};
use crate::parsed_types::{Domain, Name, Problem};
use crate::parsers::Parser;
use crate::search::symbols::Symbols;
use crate::search::{ActionSchema, Condition, Object, Predicate, State, TypeHierarchy};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A domain and problem with every name resolved to an index: the input of
/// the grounder, the search engines and the validator.
#[derive(Debug, Clone)]
pub struct Task {
    domain_name: Name,
    problem_name: Name,
    pub types: TypeHierarchy,
    /// Problem objects in declaration order, followed by domain constants.
    pub objects: Vec<Object>,
    pub predicates: Vec<Predicate>,
    pub initial_state: State,
    pub goal: Condition,
    action_schemas: Vec<ActionSchema>,
    /// For each type, the objects of that type or a descendant, by index.
    objects_per_type: Vec<Vec<usize>>,
}

impl Task {
    pub fn from_path(domain_path: &Path, problem_path: &Path) -> Result<Self, PlanningError> {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|source| PlanningError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        Self::from_text(&read(domain_path)?, &read(problem_path)?)
    }

    pub fn from_text(domain_text: &str, problem_text: &str) -> Result<Self, PlanningError> {
        let domain = Domain::from_str(domain_text)?;
        let problem = Problem::from_str(problem_text)?;
        Ok(Self::new(&domain, &problem)?)
    }

    pub fn new(domain: &Domain, problem: &Problem) -> Result<Self, GroundingError> {
        if domain.name() != problem.domain() {
            return Err(GroundingError::DomainMismatch {
                domain: *domain.name(),
                problem_domain: *problem.domain(),
            });
        }
        if let Some(requirement) = domain
            .requirements()
            .first_unsupported()
            .or_else(|| problem.requirements().first_unsupported())
        {
            return Err(GroundingError::UnsupportedRequirement(requirement));
        }

        let types = TypeHierarchy::new(domain.types())?;

        let mut objects = Vec::with_capacity(problem.objects().len() + domain.constants().len());
        let mut object_names = HashSet::new();
        for object in problem.objects().iter().chain(domain.constants().iter()) {
            if !object_names.insert(*object.value()) {
                return Err(GroundingError::Duplicate {
                    kind: "object",
                    name: *object.value(),
                });
            }
            objects.push(Object::new(objects.len(), object, &types)?);
        }

        let mut predicates = Vec::with_capacity(domain.predicates().len());
        let mut predicate_names = HashSet::new();
        for (index, predicate) in domain.predicates().iter().enumerate() {
            if !predicate_names.insert(*predicate.name()) {
                return Err(GroundingError::Duplicate {
                    kind: "predicate",
                    name: *predicate.name(),
                });
            }
            predicates.push(Predicate::new(index, predicate, &types)?);
        }

        let symbols = Symbols::new(&predicates, &objects, &types);

        let mut action_schemas = Vec::with_capacity(domain.actions().len());
        let mut action_names = HashSet::new();
        for (index, action) in domain.actions().iter().enumerate() {
            if !action_names.insert(*action.name()) {
                return Err(GroundingError::Duplicate {
                    kind: "action",
                    name: *action.name(),
                });
            }
            action_schemas.push(ActionSchema::new(index, action, &symbols)?);
        }

        let initial_state = State::new(
            problem
                .init()
                .iter()
                .map(|literal| symbols.initial_fact(literal))
                .collect::<Result<Vec<_>, _>>()?,
        );
        let goal = Condition::from_parsed(problem.goal(), &symbols, "the goal")?;

        let objects_per_type = (0..types.len())
            .map(|type_index| {
                objects
                    .iter()
                    .filter(|object| types.is_subtype(object.type_index, type_index))
                    .map(|object| object.index)
                    .collect()
            })
            .collect();

        info!(
            domain = %domain.name(),
            problem = %problem.name(),
            types = types.len(),
            objects = objects.len(),
            predicates = predicates.len(),
            action_schemas = action_schemas.len(),
            initial_atoms = initial_state.len(),
            goal_literals = goal.len(),
            "loaded task"
        );

        let task = Self {
            domain_name: *domain.name(),
            problem_name: *problem.name(),
            types,
            objects,
            predicates,
            initial_state,
            goal,
            action_schemas,
            objects_per_type,
        };
        debug!(initial_state = %task.initial_state.to_string(&task));
        Ok(task)
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn problem_name(&self) -> &str {
        &self.problem_name
    }

    pub fn action_schemas(&self) -> &[ActionSchema] {
        self.action_schemas.as_slice()
    }

    /// The objects usable for a slot of the given type, in index order.
    pub fn objects_of_type(&self, type_index: usize) -> &[usize] {
        &self.objects_per_type[type_index]
    }

    pub(crate) fn symbols(&self) -> Symbols<'_> {
        Symbols::new(&self.predicates, &self.objects, &self.types)
    }
}
