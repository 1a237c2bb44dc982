use std::collections::HashMap;

use super::coordinator::Coordinator;

/// Identity of one started flow. Never reused within a navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowId(u64);

pub(crate) struct FlowNode {
    pub(crate) coordinator: Box<dyn Coordinator>,
    pub(crate) parent: Option<FlowId>,
    /// Named child slots, each holding one live child flow.
    pub(crate) children: HashMap<&'static str, FlowId>,
}

/// Owner of every live coordinator.
#[derive(Default)]
pub(crate) struct FlowArena {
    nodes: HashMap<FlowId, FlowNode>,
    next: u64,
}

impl FlowArena {
    pub(crate) fn insert(
        &mut self,
        coordinator: Box<dyn Coordinator>,
        parent: Option<FlowId>,
    ) -> FlowId {
        self.next += 1;
        let id = FlowId(self.next);
        self.nodes.insert(
            id,
            FlowNode {
                coordinator,
                parent,
                children: HashMap::new(),
            },
        );
        id
    }

    pub(crate) fn get(&self, id: FlowId) -> Option<&FlowNode> {
        self.nodes.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: FlowId) -> Option<&mut FlowNode> {
        self.nodes.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: FlowId) -> Option<FlowNode> {
        self.nodes.remove(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
