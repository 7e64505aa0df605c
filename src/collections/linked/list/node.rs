pub(crate) type Link<T> = Option<Box<Node<T>>>;

// Each node is owned by its predecessor through `next`, so the whole chain is owned by the
// list's head link. The only other pointer into the chain is the list's cached tail, which
// holds no ownership claim.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
