//! Collection types backed by a circular buffer. Namely the FIFO [`Queue`] and the double-ended
//! [`Deque`], both thin adapters over [`VecDeque`](std::collections::VecDeque).

pub mod deque;
pub mod queue;

#[doc(inline)]
pub use deque::Deque;
#[doc(inline)]
pub use queue::Queue;
