//! Index-addressed node storage for the cache recency lists.
//!
//! Nodes live in a slot vector and reference each other by index, so list
//! surgery never touches raw pointers and vacated slots can be recycled
//! through a free list. A [`LinkedList`] is just a head/tail/len handle; it
//! borrows the arena for every operation, which lets the LFU cache thread
//! many per-frequency lists through a single arena.

/// One linked node. `prev`/`next` are slot indices, `None` at the ends.
struct Node<T> {
    data: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Slot vector with free-list reuse.
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Store `data` in an unlinked node and return its slot index.
    pub(crate) fn insert(&mut self, data: T) -> usize {
        let node = Node {
            data,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Vacate `idx` and reclaim its slot. The node must already be unlinked
    /// from whatever list held it.
    pub(crate) fn remove(&mut self, idx: usize) -> Option<T> {
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node.data)
    }

    pub(crate) fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx)?.as_ref().map(|node| &node.data)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx)?.as_mut().map(|node| &mut node.data)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.slots.get(idx)?.as_ref()
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(idx)?.as_mut()
    }
}

/// Doubly-linked list threaded through an [`Arena`].
///
/// Head is the least-recently-used end, tail the most-recently-used.
#[derive(Default)]
pub(crate) struct LinkedList {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl LinkedList {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `idx` at the most-recent end.
    pub(crate) fn push_back<T>(&mut self, arena: &mut Arena<T>, idx: usize) {
        if let Some(node) = arena.node_mut(idx) {
            node.prev = self.tail;
            node.next = None;
        } else {
            return;
        }

        match self.tail {
            Some(tail_idx) => {
                if let Some(tail) = arena.node_mut(tail_idx) {
                    tail.next = Some(idx);
                }
            }
            None => {
                self.head = Some(idx);
            }
        }

        self.tail = Some(idx);
        self.len += 1;
    }

    /// Detach `idx` from the list, leaving its slot occupied.
    pub(crate) fn unlink<T>(&mut self, arena: &mut Arena<T>, idx: usize) {
        let (prev, next) = match arena.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = arena.node_mut(prev_idx) {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = arena.node_mut(next_idx) {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }

        if let Some(node) = arena.node_mut(idx) {
            node.prev = None;
            node.next = None;
        }
        self.len -= 1;
    }

    /// Detach and return the index at the least-recent end.
    pub(crate) fn pop_front<T>(&mut self, arena: &mut Arena<T>) -> Option<usize> {
        let idx = self.head?;
        self.unlink(arena, idx);
        Some(idx)
    }

    /// Move `idx` to the most-recent end.
    pub(crate) fn move_to_back<T>(&mut self, arena: &mut Arena<T>, idx: usize) {
        if self.tail == Some(idx) {
            return; // Already most recent
        }
        self.unlink(arena, idx);
        self.push_back(arena, idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_front(list: &mut LinkedList, arena: &mut Arena<u32>) -> Vec<u32> {
        let mut out = Vec::new();
        while let Some(idx) = list.pop_front(arena) {
            out.push(arena.remove(idx).unwrap());
        }
        out
    }

    #[test]
    fn test_push_pop_order() {
        let mut arena = Arena::with_capacity(4);
        let mut list = LinkedList::default();

        for v in [10, 20, 30] {
            let idx = arena.insert(v);
            list.push_back(&mut arena, idx);
        }

        assert_eq!(list.len(), 3);
        assert_eq!(drain_front(&mut list, &mut arena), vec![10, 20, 30]);
        assert!(list.is_empty());
    }

    #[test]
    fn test_unlink_middle() {
        let mut arena = Arena::with_capacity(4);
        let mut list = LinkedList::default();

        let a = arena.insert(1);
        let b = arena.insert(2);
        let c = arena.insert(3);
        list.push_back(&mut arena, a);
        list.push_back(&mut arena, b);
        list.push_back(&mut arena, c);

        list.unlink(&mut arena, b);
        arena.remove(b);

        assert_eq!(drain_front(&mut list, &mut arena), vec![1, 3]);
    }

    #[test]
    fn test_move_to_back() {
        let mut arena = Arena::with_capacity(4);
        let mut list = LinkedList::default();

        let a = arena.insert(1);
        let b = arena.insert(2);
        list.push_back(&mut arena, a);
        list.push_back(&mut arena, b);

        list.move_to_back(&mut arena, a);

        assert_eq!(drain_front(&mut list, &mut arena), vec![2, 1]);
    }

    #[test]
    fn test_slot_reuse() {
        let mut arena = Arena::with_capacity(2);

        let a = arena.insert(1);
        arena.remove(a);
        let b = arena.insert(2);

        // Vacated slot is recycled before the vector grows
        assert_eq!(a, b);
        assert_eq!(arena.get(b), Some(&2));
    }
}
