mod deque;

pub use deque::*;
