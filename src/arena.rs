//! Index-addressed node storage for the linked containers.
//!
//! Nodes refer to each other by slot index instead of by owning
//! pointers, so a node may be reachable from both of its neighbours (or
//! from itself, in a one-element ring).  Released slots are recycled
//! through a free list, which keeps the arena's footprint proportional to
//! the container's high-water mark.
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub(crate) struct NodeArena<Node> {
    slots: Vec<Option<Node>>,
    // Released slots, most recent last.
    free: SmallVec<[usize; 4]>,
}

impl<Node> Default for NodeArena<Node> {
    fn default() -> Self {
        NodeArena {
            slots: Vec::new(),
            free: SmallVec::new(),
        }
    }
}

impl<Node> NodeArena<Node> {
    /// Stores `node` and returns its slot index.
    pub(crate) fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(idx) => {
                debug_assert!(self.slots[idx].is_none());
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Removes and returns the node at `idx`.
    ///
    /// Panics if `idx` is vacant: linked containers only release nodes
    /// they have just unlinked.
    pub(crate) fn release(&mut self, idx: usize) -> Node {
        let node = self.slots[idx].take().expect("released node must be live");
        self.free.push(idx);
        node
    }

    #[inline(always)]
    pub(crate) fn get(&self, idx: usize) -> &Node {
        self.slots[idx].as_ref().expect("node index must be live")
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, idx: usize) -> &mut Node {
        self.slots[idx].as_mut().expect("node index must be live")
    }

    #[inline(always)]
    pub(crate) fn is_live(&self, idx: usize) -> bool {
        matches!(self.slots.get(idx), Some(Some(_)))
    }
}

#[test]
fn test_recycle_miri() {
    let mut arena = NodeArena::default();

    let a = arena.alloc('a');
    let b = arena.alloc('b');
    assert_ne!(a, b);
    assert!(arena.is_live(a));
    assert!(!arena.is_live(b + 1));

    assert_eq!(arena.release(a), 'a');
    assert!(!arena.is_live(a));

    // The freed slot is reused first.
    let c = arena.alloc('c');
    assert_eq!(c, a);
    assert_eq!(*arena.get(c), 'c');

    *arena.get_mut(b) = 'B';
    assert_eq!(*arena.get(b), 'B');
}
