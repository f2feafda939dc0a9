//! Singly linked lists with owned nodes, and cycle detection over index links.

#[derive(Debug, PartialEq, Eq)]
pub struct ListNode<T> {
    pub val: T,
    pub next: List<T>,
}

pub type List<T> = Option<Box<ListNode<T>>>;

pub fn from_vec<T>(values: Vec<T>) -> List<T> {
    values
        .into_iter()
        .rev()
        .fold(None, |next, val| Some(Box::new(ListNode { val, next })))
}

pub fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut curr = list;
    while let Some(node) = curr {
        out.push(node.val.clone());
        curr = &node.next;
    }
    out
}

pub fn reverse_list<T>(mut head: List<T>) -> List<T> {
    let mut prev = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

/// Splices two ascending lists into one; on ties `a`'s node comes first.
pub fn merge_two_sorted<T: Ord>(mut a: List<T>, mut b: List<T>) -> List<T> {
    let mut head: List<T> = None;
    let mut tail = &mut head;
    loop {
        let from_a = match (&a, &b) {
            (Some(x), Some(y)) => x.val <= y.val,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let src = if from_a { &mut a } else { &mut b };
        let Some(mut node) = src.take() else {
            break;
        };
        *src = node.next.take();
        tail = &mut tail.insert(node).next;
    }
    head
}

/// Floyd's tortoise and hare over `next[i]` links starting at `head`.
///
/// A link outside `next` ends the list.
pub fn has_cycle(next: &[Option<usize>], head: Option<usize>) -> bool {
    let step = |i: usize| next.get(i).copied().flatten();
    let (mut slow, mut fast) = (head, head);
    loop {
        let Some(f) = fast.and_then(step).and_then(step) else {
            return false;
        };
        fast = Some(f);
        slow = slow.and_then(step);
        if slow == fast {
            return true;
        }
    }
}
