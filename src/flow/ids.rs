use super::model::NodeType;

/// Hands out ids for nodes dropped onto the canvas.
///
/// Tasks and triggers are numbered by two independent counters that both start at 1 and
/// never go back, so `task 3` is only ever issued once per generator.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next_task: u64,
    next_trigger: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            next_task: 1,
            next_trigger: 1,
        }
    }

    pub fn next_task(&mut self) -> String {
        let id = self.next_task;
        self.next_task += 1;
        format!("task {}", id)
    }

    pub fn next_trigger(&mut self) -> String {
        let id = self.next_trigger;
        self.next_trigger += 1;
        format!("trigger {}", id)
    }

    pub fn next_for(&mut self, node_type: NodeType) -> String {
        match node_type {
            NodeType::Default => self.next_task(),
            NodeType::Trigger => self.next_trigger(),
        }
    }
}

/// Numeric suffix of a generated id (`"task 12"` -> `12`).
pub fn id_number(id: &str) -> Option<u64> {
    id.rsplit_once(' ')
        .and_then(|(_, number)| number.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_independent() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_task(), "task 1");
        assert_eq!(ids.next_trigger(), "trigger 1");
        assert_eq!(ids.next_trigger(), "trigger 2");
        assert_eq!(ids.next_for(NodeType::Default), "task 2");
    }

    #[test]
    fn parses_suffix() {
        assert_eq!(id_number("task 12"), Some(12));
        assert_eq!(id_number("task"), None);
    }
}
