use super::graph;
use super::model::{Connection, FlowElement};
use serde::{Deserialize, Serialize};

/// Decides whether a user-drawn connection may become an edge.
///
/// Returning `Err(reason)` rejects the connection and leaves the flow untouched.
pub trait ConnectionValidator {
    fn check(&self, elements: &[FlowElement], connection: &Connection) -> Result<(), String>;
}

/// Accepts every connection, including duplicates and cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ConnectionValidator for AcceptAll {
    fn check(&self, _elements: &[FlowElement], _connection: &Connection) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RejectSelfLoops;

impl ConnectionValidator for RejectSelfLoops {
    fn check(&self, _elements: &[FlowElement], connection: &Connection) -> Result<(), String> {
        if connection.source == connection.target {
            return Err(format!("'{}' cannot depend on itself", connection.source));
        }
        Ok(())
    }
}

/// Rejects a second edge between the same source and target.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectDuplicates;

impl ConnectionValidator for RejectDuplicates {
    fn check(&self, elements: &[FlowElement], connection: &Connection) -> Result<(), String> {
        let exists = graph::outgoing(elements, &connection.source)
            .any(|edge| edge.target == connection.target);
        if exists {
            return Err(format!(
                "'{}' already runs after '{}'",
                connection.target, connection.source
            ));
        }
        Ok(())
    }
}

/// Keeps the flow acyclic. Also rejects self-loops and duplicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectCycles;

impl ConnectionValidator for RejectCycles {
    fn check(&self, elements: &[FlowElement], connection: &Connection) -> Result<(), String> {
        RejectSelfLoops.check(elements, connection)?;
        RejectDuplicates.check(elements, connection)?;
        if graph::reaches(elements, &connection.target, &connection.source) {
            return Err(format!(
                "'{}' already leads back to '{}'",
                connection.target, connection.source
            ));
        }
        Ok(())
    }
}

/// Validation selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    None,
    RejectSelfLoops,
    RejectDuplicates,
    RejectCycles,
}

impl ValidationMode {
    pub fn validator(self) -> Box<dyn ConnectionValidator> {
        match self {
            ValidationMode::None => Box::new(AcceptAll),
            ValidationMode::RejectSelfLoops => Box::new(RejectSelfLoops),
            ValidationMode::RejectDuplicates => Box::new(RejectDuplicates),
            ValidationMode::RejectCycles => Box::new(RejectCycles),
        }
    }
}
