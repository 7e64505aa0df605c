use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use super::{Bfs, Dfs, VertexNotFound, Vertices};
use crate::collections::traits::Collection;
use crate::util::result::ResultExtension;

/// A directed graph stored as a mapping from each vertex identity to its set of direct
/// neighbors. Edges are unweighted and deduplicated by the set.
///
/// Every vertex mentioned by any edge is a key of the mapping: [`add_edge`](Graph::add_edge)
/// inserts both of its endpoints. Vertices and edges can only be added, never removed.
///
/// # Traversal Order
/// [`bfs`](Graph::bfs) visits vertices in breadth-first layers. Within a layer, sibling order
/// follows the neighbor set's hash iteration order and is left unspecified; only the starting
/// vertex's position (first) and the set of visited vertices are guaranteed.
/// [`dfs`](Graph::dfs) is fully deterministic: neighbors are explored in ascending order, which
/// is why it additionally requires `V: Ord`.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add_vertex` | `O(1)` |
/// | `add_edge` | `O(1)` |
/// | `neighbors` | `O(degree)` |
/// | `bfs`/`dfs` | `O(vertices + edges)` over the full traversal |
pub struct Graph<V: Hash + Eq> {
    pub(crate) adjacency: HashMap<V, HashSet<V>>,
}

impl<V: Hash + Eq> Graph<V> {
    /// Creates a new Graph with no vertices.
    pub fn new() -> Graph<V> {
        Graph {
            adjacency: HashMap::new(),
        }
    }

    /// Returns the number of vertices in the Graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the Graph contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Ensures the provided vertex is part of the Graph, with an empty neighbor set if it
    /// wasn't already known. Idempotent: an existing vertex keeps its neighbors.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Adds a directed edge from `source` to `destination`, inserting either endpoint as a
    /// vertex first if required. The reverse edge is not implied. Idempotent: repeated
    /// insertions of the same edge are deduplicated by the neighbor set.
    pub fn add_edge(&mut self, source: V, destination: V)
    where
        V: Clone,
    {
        self.add_vertex(destination.clone());
        self.adjacency.entry(source).or_default().insert(destination);
    }

    /// Returns true if the provided vertex is known to the Graph.
    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.contains_key(vertex)
    }

    /// Returns a copy of the provided vertex's neighbor set, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the vertex is not part of the Graph.
    pub fn neighbors(&self, vertex: &V) -> HashSet<V>
    where
        V: Clone + Debug,
    {
        self.try_neighbors(vertex).throw()
    }

    /// Returns a copy of the provided vertex's neighbor set, returning an [`Err`] carrying the
    /// unknown vertex on a failure rather than panicking.
    pub fn try_neighbors(&self, vertex: &V) -> Result<HashSet<V>, VertexNotFound<V>>
    where
        V: Clone + Debug,
    {
        match self.adjacency.get(vertex) {
            Some(neighbors) => Ok(neighbors.clone()),
            None => Err(VertexNotFound {
                vertex: vertex.clone(),
            }),
        }
    }

    /// Returns a lazy breadth-first traversal from `start`, panicking on a failure. See the
    /// type-level notes on traversal order.
    ///
    /// # Panics
    /// Panics if the starting vertex is not part of the Graph.
    pub fn bfs(&self, start: &V) -> Bfs<'_, V>
    where
        V: Clone + Debug,
    {
        self.try_bfs(start).throw()
    }

    /// Returns a lazy breadth-first traversal from `start`, returning an [`Err`] carrying the
    /// unknown vertex on a failure rather than panicking.
    ///
    /// The traversal yields `start` first, then every vertex reachable from it exactly once,
    /// layer by layer.
    pub fn try_bfs(&self, start: &V) -> Result<Bfs<'_, V>, VertexNotFound<V>>
    where
        V: Clone + Debug,
    {
        match self.adjacency.get_key_value(start) {
            Some((key, _)) => Ok(Bfs::new(self, key)),
            None => Err(VertexNotFound {
                vertex: start.clone(),
            }),
        }
    }

    /// Returns a lazy depth-first traversal from `start`, panicking on a failure. Neighbors are
    /// explored in ascending order, making the visitation order deterministic.
    ///
    /// # Panics
    /// Panics if the starting vertex is not part of the Graph.
    pub fn dfs(&self, start: &V) -> Dfs<'_, V>
    where
        V: Ord + Clone + Debug,
    {
        self.try_dfs(start).throw()
    }

    /// Returns a lazy depth-first traversal from `start`, returning an [`Err`] carrying the
    /// unknown vertex on a failure rather than panicking.
    ///
    /// The traversal yields `start` first, then every vertex reachable from it exactly once,
    /// exploring each vertex's neighbors in ascending order.
    pub fn try_dfs(&self, start: &V) -> Result<Dfs<'_, V>, VertexNotFound<V>>
    where
        V: Ord + Clone + Debug,
    {
        match self.adjacency.get_key_value(start) {
            Some((key, _)) => Ok(Dfs::new(self, key)),
            None => Err(VertexNotFound {
                vertex: start.clone(),
            }),
        }
    }

    /// Returns an iterator over all vertex identities in the Graph, in no particular order.
    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices {
            inner: self.adjacency.keys(),
        }
    }
}

impl<V: Hash + Eq> Collection for Graph<V> {
    fn len(&self) -> usize {
        self.adjacency.len()
    }
}

impl<V: Hash + Eq> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Hash + Eq + Debug> Debug for Graph<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("adjacency", &self.adjacency)
            .field("len", &self.len())
            .finish()
    }
}
