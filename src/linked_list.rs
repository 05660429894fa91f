//! The `linked_list` module defines [`DoublyLinkedBase`], a doubly
//! linked list bounded by two permanent sentinel nodes.
//!
//! Because the header and trailer always exist, splicing a node in or
//! out never has to special-case an empty list or a boundary node: every
//! live element always has a predecessor and a successor.
use crate::arena::NodeArena;

/// Handle to a node in a [`DoublyLinkedBase`].
///
/// Handles stay valid until their node is deleted; after that, the slot
/// may be reused by a later insertion.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node<T> {
    // `None` only for the sentinels.
    element: Option<T>,
    prev: usize,
    next: usize,
}

const HEADER: usize = 0;
const TRAILER: usize = 1;

#[derive(Clone)]
pub struct DoublyLinkedBase<T> {
    nodes: NodeArena<Node<T>>,
    len: usize,
}

impl<T> DoublyLinkedBase<T> {
    /// Creates an empty list: just the header and trailer, linked to
    /// each other.
    pub fn new() -> Self {
        let mut nodes = NodeArena::default();
        let header = nodes.alloc(Node {
            element: None,
            prev: HEADER,
            next: TRAILER,
        });
        let trailer = nodes.alloc(Node {
            element: None,
            prev: HEADER,
            next: TRAILER,
        });
        debug_assert_eq!((header, trailer), (HEADER, TRAILER));

        DoublyLinkedBase { nodes, len: 0 }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The sentinel before the first element.
    #[inline(always)]
    pub fn header(&self) -> NodeId {
        NodeId(HEADER)
    }

    /// The sentinel after the last element.
    #[inline(always)]
    pub fn trailer(&self) -> NodeId {
        NodeId(TRAILER)
    }

    /// Returns the node after `id`, or `None` for the trailer.
    ///
    /// # Panics
    ///
    /// Panics if `id` refers to a deleted node.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        (id.0 != TRAILER).then(|| NodeId(self.nodes.get(id.0).next))
    }

    /// Returns the node before `id`, or `None` for the header.
    ///
    /// # Panics
    ///
    /// Panics if `id` refers to a deleted node.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        (id.0 != HEADER).then(|| NodeId(self.nodes.get(id.0).prev))
    }

    /// Returns the element stored at `id`; sentinels and deleted nodes
    /// have none.
    pub fn element(&self, id: NodeId) -> Option<&T> {
        if !self.nodes.is_live(id.0) {
            return None;
        }

        self.nodes.get(id.0).element.as_ref()
    }

    /// Links a new node holding `element` between the adjacent nodes
    /// `predecessor` and `successor`, and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if `predecessor` or `successor` refers to a deleted node, or
    /// if `successor` is not immediately after `predecessor`.
    pub fn insert_between(
        &mut self,
        element: T,
        predecessor: NodeId,
        successor: NodeId,
    ) -> NodeId {
        assert_eq!(
            self.nodes.get(predecessor.0).next,
            successor.0,
            "insert_between requires adjacent nodes"
        );

        let newest = self.nodes.alloc(Node {
            element: Some(element),
            prev: predecessor.0,
            next: successor.0,
        });
        self.nodes.get_mut(predecessor.0).next = newest;
        self.nodes.get_mut(successor.0).prev = newest;
        self.len += 1;
        NodeId(newest)
    }

    /// Unlinks the node at `id` and returns its element.
    ///
    /// # Panics
    ///
    /// Panics if `id` is a sentinel or has already been deleted.
    pub fn delete_node(&mut self, id: NodeId) -> T {
        assert!(
            id.0 != HEADER && id.0 != TRAILER,
            "sentinels cannot be deleted"
        );

        let node = self.nodes.release(id.0);
        self.nodes.get_mut(node.prev).next = node.next;
        self.nodes.get_mut(node.next).prev = node.prev;
        self.len -= 1;
        node.element.expect("non-sentinel nodes hold an element")
    }
}

impl<T> Default for DoublyLinkedBase<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists the elements from header to trailer.
impl<T: std::fmt::Debug> std::fmt::Debug for DoublyLinkedBase<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = f.debug_list();
        let mut cursor = self.nodes.get(HEADER).next;
        while cursor != TRAILER {
            let node = self.nodes.get(cursor);
            if let Some(element) = &node.element {
                entries.entry(element);
            }
            cursor = node.next;
        }
        entries.finish()
    }
}

#[cfg(test)]
fn walk<T: Copy>(list: &DoublyLinkedBase<T>) -> Vec<T> {
    let mut ret = Vec::new();
    let mut cursor = list.next(list.header());
    while let Some(id) = cursor {
        if id == list.trailer() {
            break;
        }
        ret.push(*list.element(id).unwrap());
        cursor = list.next(id);
    }
    ret
}

#[test]
fn test_splice_miri() {
    let mut list = DoublyLinkedBase::new();

    assert!(list.is_empty());
    assert_eq!(list.next(list.header()), Some(list.trailer()));
    assert_eq!(list.prev(list.trailer()), Some(list.header()));
    assert_eq!(list.next(list.trailer()), None);
    assert_eq!(list.prev(list.header()), None);
    assert_eq!(list.element(list.header()), None);

    let b = list.insert_between(2, list.header(), list.trailer());
    let a = list.insert_between(1, list.header(), b);
    let c = list.insert_between(3, b, list.trailer());
    assert_eq!(list.len(), 3);
    assert_eq!(walk(&list), [1, 2, 3]);
    assert_eq!(list.prev(c), Some(b));

    assert_eq!(list.delete_node(b), 2);
    assert_eq!(walk(&list), [1, 3]);
    assert_eq!(list.next(a), Some(c));
    assert_eq!(list.element(b), None);

    assert_eq!(list.delete_node(a), 1);
    assert_eq!(list.delete_node(c), 3);
    assert!(list.is_empty());
    assert_eq!(list.next(list.header()), Some(list.trailer()));
}

#[test]
fn test_debug_logical_order_miri() {
    let mut list = DoublyLinkedBase::new();
    assert_eq!(format!("{:?}", list), "[]");

    let b = list.insert_between('b', list.header(), list.trailer());
    list.insert_between('a', list.header(), b);
    list.insert_between('c', b, list.trailer());
    assert_eq!(format!("{:?}", list), "['a', 'b', 'c']");
}

#[test]
#[should_panic(expected = "sentinels cannot be deleted")]
fn test_delete_sentinel() {
    let mut list: DoublyLinkedBase<u8> = DoublyLinkedBase::new();
    let header = list.header();
    list.delete_node(header);
}

#[test]
#[should_panic(expected = "adjacent")]
fn test_insert_non_adjacent() {
    let mut list = DoublyLinkedBase::new();
    list.insert_between(1, list.header(), list.trailer());
    // The header is now followed by the new node, not the trailer.
    list.insert_between(2, list.header(), list.trailer());
}

#[test]
#[should_panic(expected = "node index must be live")]
fn test_next_of_deleted_node() {
    let mut list = DoublyLinkedBase::new();
    let a = list.insert_between(1, list.header(), list.trailer());
    list.delete_node(a);
    let _ = list.next(a);
}

#[test]
#[should_panic(expected = "node index must be live")]
fn test_insert_after_deleted_node() {
    let mut list = DoublyLinkedBase::new();
    let a = list.insert_between(1, list.header(), list.trailer());
    list.delete_node(a);
    list.insert_between(2, a, list.trailer());
}
