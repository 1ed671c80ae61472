//! An ordered, rooted tree with a value at every node.
//!
//! Trees are immutable once built and are always assembled bottom-up: a node
//! is created from its value and its already finished children. Children are
//! reference counted, so cloning or relabeling a subtree is cheap, and two
//! trees compare equal iff their values and children are equal in order.

use std::fmt::{Display, Formatter};
use std::mem;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    value: T,
    children: Rc<[Tree<T>]>,
}

impl<T> Tree<T> {
    /// A leaf holding `value`.
    pub fn new(value: T) -> Self {
        Tree { value, children: no_children() }
    }

    pub fn with_children(value: T, children: Vec<Tree<T>>) -> Self {
        Tree { value, children: children.into() }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &[Tree<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes, this one included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of edges on the longest path down to a leaf.
    pub fn height(&self) -> usize {
        self.children.iter().map(|c| c.height() + 1).max().unwrap_or(0)
    }

    /// A node with a new value over the same children.
    pub fn relabel(&self, value: T) -> Tree<T> {
        Tree { value, children: Rc::clone(&self.children) }
    }

    /// Visit every node in pre-order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { stack: vec![self] }
    }
}

pub struct Iter<'a, T> {
    stack: Vec<&'a Tree<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Tree<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push in reverse so the leftmost child comes out first.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

fn no_children<T>() -> Rc<[Tree<T>]> {
    Rc::from(Vec::<Tree<T>>::new())
}

// The derived drop would recurse once per level, which overflows the stack on
// trees as deep as a long game. Detach uniquely owned child lists instead and
// free them from a work list; shared lists just lose a reference.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending = vec![mem::replace(&mut self.children, no_children())];
        while let Some(mut children) = pending.pop() {
            if let Some(nodes) = Rc::get_mut(&mut children) {
                for node in nodes.iter_mut().filter(|n| !n.children.is_empty()) {
                    pending.push(mem::replace(&mut node.children, no_children()));
                }
            }
        }
    }
}

impl<T: Display> Display for Tree<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Tree({}", self.value)?;
        if !self.children.is_empty() {
            write!(f, ", [")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, "]")?;
        }
        write!(f, ")")
    }
}

#[test]
fn test_leaf_equals_empty_children() {
    let t1 = Tree::new(5);
    let t2 = Tree::with_children(5, vec![]);
    assert_eq!(t1, t2);
    assert!(t1.is_leaf());
    let t3 = Tree::with_children(5, vec![t1.clone()]);
    assert_ne!(t2, t3);
}

#[test]
fn test_equality_is_ordered() {
    let a = Tree::with_children(0, vec![Tree::new(1), Tree::new(2)]);
    let b = Tree::with_children(0, vec![Tree::new(2), Tree::new(1)]);
    assert_ne!(a, b);
    let c = Tree::with_children(0, vec![Tree::new(1), Tree::new(2)]);
    assert_eq!(a, c);
}

#[test]
fn test_shape() {
    let t = Tree::with_children(
        1,
        vec![Tree::with_children(2, vec![Tree::new(4), Tree::new(5)]), Tree::new(3)],
    );
    assert_eq!(t.len(), 5);
    assert_eq!(t.height(), 2);
    assert_eq!(Tree::new(7).height(), 0);
    let order: Vec<i32> = t.iter().map(|n| *n.value()).collect();
    assert_eq!(order, vec![1, 2, 4, 5, 3]);
}

#[test]
fn test_relabel_shares_children() {
    let t = Tree::with_children("a", vec![Tree::new("b"), Tree::new("c")]);
    let r = t.relabel("z");
    assert_eq!(*r.value(), "z");
    assert_eq!(r.children(), t.children());
    assert!(Rc::ptr_eq(&r.children, &t.children));
}

#[test]
fn test_deep_tree() {
    let mut t = Tree::new(0);
    for i in 1..200_000 {
        t = Tree::with_children(i, vec![t]);
    }
    assert_eq!(t.len(), 200_000);
    assert_eq!(t.iter().last().map(|n| *n.value()), Some(0));
    let shared = t.children()[0].relabel(-1);
    drop(t);
    assert_eq!(shared.children()[0].len(), 199_998);
    drop(shared);
}

#[test]
fn test_display() {
    assert_eq!(Tree::new(5).to_string(), "Tree(5)");
    let t = Tree::with_children(7, vec![Tree::new(5), Tree::with_children(6, vec![Tree::new(1)])]);
    assert_eq!(t.to_string(), "Tree(7, [Tree(5), Tree(6, [Tree(1)])])");
}
