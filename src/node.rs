use std::ops::{Index, IndexMut};

/// Stable handle for a node slot. Ids stay valid across unrelated
/// insertions and removals; a removed id may be reissued later.
pub type NodeId = usize;

/// One element and its tower of forward links. `forward[i]` is the next
/// node in the level-`i` chain, `None` at the end of the chain. A node
/// built for level `l` carries `l + 1` links.
pub struct Node<T> {
    pub value: T,
    pub forward: Vec<Option<NodeId>>,
}

impl<T> Node<T> {
    pub fn new(value: T, level: usize) -> Self {
        Node {
            value,
            forward: vec![None; level + 1],
        }
    }

    /// Highest level this node participates in.
    pub fn level(&self) -> usize {
        self.forward.len() - 1
    }
}

/// Sole owner of every node in a set.
///
/// Nodes live in slots addressed by [`NodeId`]; vacated slots are recycled
/// through a free list. Links between nodes are plain ids, so the link
/// graph owns nothing and dropping the arena releases every element no
/// matter how the chains are wired.
pub struct NodeArena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live nodes. The set tracks its own count; this one backs
    /// the consistency checks in tests.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Stores a node, reusing a vacant slot when one exists.
    pub fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Takes the node out of its slot and recycles the id.
    ///
    /// Panics if the slot is vacant; callers only hold ids of live nodes.
    pub fn remove(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id].take().expect("invalid index");
        self.free.push(id);
        node
    }

    /// Drops every node and forgets all ids.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        self.slots[id].as_ref().expect("invalid index")
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id].as_mut().expect("invalid index")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_and_remove() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Node::new("a", 0));
        let b = arena.alloc(Node::new("b", 2));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[a].value, "a");
        assert_eq!(arena[b].forward.len(), 3);

        let node = arena.remove(a);
        assert_eq!(node.value, "a");
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn freed_slots_are_recycled() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Node::new(1, 0));
        let _b = arena.alloc(Node::new(2, 0));
        arena.remove(a);

        let c = arena.alloc(Node::new(3, 1));
        assert_eq!(c, a);
        assert_eq!(arena[c].value, 3);
        assert_eq!(arena[c].level(), 1);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn ids_stay_stable_across_removals() {
        let mut arena = NodeArena::new();
        let ids: Vec<NodeId> = (0..10).map(|i| arena.alloc(Node::new(i, 0))).collect();
        arena.remove(ids[3]);
        arena.remove(ids[7]);
        for (i, &id) in ids.iter().enumerate() {
            if i != 3 && i != 7 {
                assert_eq!(arena[id].value, i);
            }
        }
    }

    #[test]
    #[should_panic(expected = "invalid index")]
    fn vacant_slot_panics() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Node::new(1, 0));
        arena.remove(a);
        let _ = &arena[a];
    }
}
