use std::fmt;

use crate::trucks::truck::Truck;

/// A singly linked list node owning one [`Truck`]
///
/// The held truck is fixed at construction. The successor link is owned and
/// can be replaced at any time; the node keeps no head, tail or length
/// bookkeeping.
///
/// # Examples
///
/// ```rust
/// use trucks::trucks::{node::TruckListNode, truck::Truck};
///
/// let truck = Truck::builder().license_plate("ABC 123").build();
/// let mut node = TruckListNode::new(truck.clone());
/// assert_eq!(node.truck(), &truck);
/// assert!(node.next().is_none());
///
/// node.set_next(Some(TruckListNode::new(Truck::random())));
/// assert!(node.next().is_some());
///
/// node.set_next(None);
/// assert!(node.next().is_none());
/// ```
pub struct TruckListNode {
    item: Truck,
    next: Option<Box<TruckListNode>>,
}

impl TruckListNode {
    pub fn new(item: Truck) -> Self {
        Self { item, next: None }
    }

    pub fn truck(&self) -> &Truck {
        &self.item
    }

    /// The following node, or `None` at the end of the list
    pub fn next(&self) -> Option<&TruckListNode> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut TruckListNode> {
        self.next.as_deref_mut()
    }

    /// Replace the successor, returning the previously linked tail
    ///
    /// Passing `None` truncates the list at this node.
    pub fn set_next(&mut self, next: Option<TruckListNode>) -> Option<TruckListNode> {
        std::mem::replace(&mut self.next, next.map(Box::new)).map(|old| *old)
    }

    /// Detach and return the tail starting at the successor
    pub fn take_next(&mut self) -> Option<TruckListNode> {
        self.set_next(None)
    }

    /// Consume the node and return its truck
    ///
    /// Any linked tail is dropped; call [`TruckListNode::take_next`] first to keep it.
    pub fn into_truck(mut self) -> Truck {
        // `item` cannot be moved out of a type implementing Drop.
        std::mem::replace(&mut self.item, Truck::builder().build())
    }
}

// Lists the trucks from this node onwards without recursing per node.
impl fmt::Debug for TruckListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cursor = Some(self);
        while let Some(node) = cursor {
            list.entry(&node.item);
            cursor = node.next();
        }
        list.finish()
    }
}

impl fmt::Display for TruckListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.item, f)
    }
}

// Unlink iteratively so long chains do not recurse once per node.
impl Drop for TruckListNode {
    fn drop(&mut self) {
        let mut cursor = self.next.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}
