use crate::graph::NodeId;

/// Intrusive list hooks stored on each node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrontierLink {
    prev: Option<NodeId>,
    next: Option<NodeId>,
    member: bool,
}

impl FrontierLink {
    pub fn is_member(&self) -> bool {
        self.member
    }

    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// Storage that holds a [`FrontierLink`] per node id
pub trait FrontierSlots {
    fn slot(&self, id: NodeId) -> &FrontierLink;

    fn slot_mut(&mut self, id: NodeId) -> &mut FrontierLink;
}

impl FrontierSlots for [FrontierLink] {
    fn slot(&self, id: NodeId) -> &FrontierLink {
        &self[id.index()]
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut FrontierLink {
        &mut self[id.index()]
    }
}

/// Doubly-linked list of the nodes eligible for relaxation.
///
/// The list itself only stores the ends and the length; the links live in
/// the nodes (through [`FrontierSlots`]), so insertion at the head and
/// removal of any member are O(1).
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Frontier::default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn first(&self) -> Option<NodeId> {
        self.head
    }

    pub fn last(&self) -> Option<NodeId> {
        self.tail
    }

    /// Member following `id`, read from its hooks
    pub fn next<S: FrontierSlots + ?Sized>(&self, slots: &S, id: NodeId) -> Option<NodeId> {
        slots.slot(id).next
    }

    /// Inserts `id` at the head. Returns false (and does nothing) if it is
    /// already a member.
    pub fn push_front<S: FrontierSlots + ?Sized>(&mut self, slots: &mut S, id: NodeId) -> bool {
        if slots.slot(id).member {
            debug_assert!(false, "node {} is already in the frontier", id);
            return false;
        }
        let old_head = self.head;
        *slots.slot_mut(id) = FrontierLink {
            prev: None,
            next: old_head,
            member: true,
        };
        match old_head {
            Some(head) => slots.slot_mut(head).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        true
    }

    /// Unlinks `id`. Returns false (and does nothing) if it is not a member.
    ///
    /// The removed node's hooks are cleared; callers iterating the list
    /// must read the successor before removing the current node.
    pub fn remove<S: FrontierSlots + ?Sized>(&mut self, slots: &mut S, id: NodeId) -> bool {
        let link = *slots.slot(id);
        if !link.member {
            debug_assert!(false, "node {} is not in the frontier", id);
            return false;
        }
        match link.prev {
            Some(prev) => slots.slot_mut(prev).next = link.next,
            None => self.head = link.next,
        }
        match link.next {
            Some(next) => slots.slot_mut(next).prev = link.prev,
            None => self.tail = link.prev,
        }
        *slots.slot_mut(id) = FrontierLink::default();
        self.len -= 1;
        true
    }

    /// Unlinks every member
    pub fn clear<S: FrontierSlots + ?Sized>(&mut self, slots: &mut S) {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            cursor = slots.slot(id).next;
            *slots.slot_mut(id) = FrontierLink::default();
        }
        *self = Frontier::default();
    }

    /// Walks the members from head to tail
    pub fn iter<'a, S: FrontierSlots + ?Sized>(&self, slots: &'a S) -> FrontierIter<'a, S> {
        FrontierIter {
            slots,
            cursor: self.head,
        }
    }
}

/// Borrowing iterator over a [`Frontier`]
pub struct FrontierIter<'a, S: ?Sized> {
    slots: &'a S,
    cursor: Option<NodeId>,
}

impl<'a, S: FrontierSlots + ?Sized> Iterator for FrontierIter<'a, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cursor?;
        self.cursor = self.slots.slot(id).next;
        Some(id)
    }
}
