pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Box<Node<T>> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}
