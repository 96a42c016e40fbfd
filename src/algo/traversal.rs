/*!
Graph traversals and the results derived from them.

This module provides:
- Lazy forest iterators ([`BreadthFirstForest`], [`DepthFirstForest`]) that restart at the next
  unvisited vertex (in index order) whenever the current tree is exhausted.
- [`TraversalResult`], the owned record of a complete traversal: visitation order, discovery
  numbers and spanning-tree edges.
- The [`Traversal`] trait exposing all traversals directly as methods on every graph.

Breadth-first search marks a vertex when it is enqueued, so every vertex enters the queue at most
once. The iterative depth-first search defers marking until a vertex is popped: a vertex may be
pushed several times and stale copies are skipped. It records a spanning edge for every push, so
its edge list may hold several edges into the same vertex, while [`TraversalResult::parents`]
follows the copy that was actually claimed. The two disciplines produce different discovery
orders and spanning edges on branching graphs.
*/

use super::*;
use std::{
    collections::VecDeque,
    fmt::{Display, Formatter},
};
use tracing::trace;

/// The traversal strategy a [`TraversalResult`] was produced by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    RecursiveDepthFirst,
    IterativeDepthFirst,
    BreadthFirst,
}

impl Display for TraversalKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalKind::RecursiveDepthFirst => write!(f, "DFS(RECURSIVE)"),
            TraversalKind::IterativeDepthFirst => write!(f, "DFS(ITERATIVE)"),
            TraversalKind::BreadthFirst => write!(f, "BFS"),
        }
    }
}

/// A vertex as it is discovered by a traversal, together with the tree edge that led to it.
/// Roots of the traversal forest have no parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discovery<W> {
    pub node: Node,
    pub parent: Option<(Node, W)>,
}

impl<W: Copy> Discovery<W> {
    /// A vertex starting a new traversal tree
    pub fn root(node: Node) -> Self {
        Self { node, parent: None }
    }

    /// A vertex reached from `parent` via an edge of weight `weight`
    pub fn child(node: Node, parent: Node, weight: W) -> Self {
        Self {
            node,
            parent: Some((parent, weight)),
        }
    }

    /// Returns *true* if the vertex starts a new traversal tree
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the spanning-tree edge `parent -> node` if it exists
    pub fn tree_edge(&self) -> Option<WeightedEdge<W>> {
        self.parent
            .map(|(p, w)| WeightedEdge::new(p, self.node, w))
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// items during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T>: Default {
    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
}

/// Lazy traversal over the whole graph, yielding one [`Discovery`] per vertex.
///
/// The frontier type `S` decides between queue and stack order; `MARK_ON_PUSH` decides whether a
/// vertex is marked visited when it enters the frontier (eager) or when it leaves it (deferred).
/// Neighbors are pushed in the natural order of the representation.
pub struct ForestSearch<'a, G, S, const MARK_ON_PUSH: bool>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer<Discovery<G::Weight>>,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    next_root: Node,
    num_discovered: usize,
}

/// Breadth-first forest with eager marking
pub type BreadthFirstForest<'a, G> =
    ForestSearch<'a, G, VecDeque<Discovery<<G as WeightedAdjacencyList>::Weight>>, true>;

/// Depth-first forest using an explicit stack with deferred marking
pub type DepthFirstForest<'a, G> =
    ForestSearch<'a, G, Vec<Discovery<<G as WeightedAdjacencyList>::Weight>>, false>;

impl<'a, G, S, const MARK_ON_PUSH: bool> ForestSearch<'a, G, S, MARK_ON_PUSH>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer<Discovery<G::Weight>>,
{
    /// Creates a new search; the first tree is rooted at vertex `0`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            sequencer: S::default(),
            next_root: 0,
            num_discovered: 0,
        }
    }

    /// Returns *true* if `u` was already marked visited
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    /// Finds the smallest unvisited vertex that has not been a root candidate before
    fn next_unvisited_root(&mut self) -> Option<Discovery<G::Weight>> {
        while self.next_root < self.graph.number_of_nodes() {
            let u = self.next_root;
            self.next_root += 1;

            if !self.visited[u as usize] {
                if MARK_ON_PUSH {
                    self.visited.set(u as usize, true);
                }
                return Some(Discovery::root(u));
            }
        }
        None
    }

    /// Like [`Iterator::next`], but additionally passes the edge `u -> v` to `on_push` whenever
    /// an unvisited neighbor `v` of the returned vertex `u` enters the frontier.
    pub fn next_with<F>(&mut self, mut on_push: F) -> Option<Discovery<G::Weight>>
    where
        F: FnMut(WeightedEdge<G::Weight>),
    {
        let graph = self.graph;

        let item = loop {
            let item = match self.sequencer.pop() {
                Some(item) => item,
                None => self.next_unvisited_root()?,
            };

            // stale copies of already claimed vertices are skipped
            if MARK_ON_PUSH || !self.visited.replace(item.node as usize, true) {
                break item;
            }
        };

        let u = item.node;
        for (v, w) in graph.weighted_neighbors_of(u) {
            if !self.visited[v as usize] {
                if MARK_ON_PUSH {
                    self.visited.set(v as usize, true);
                }
                self.sequencer.push(Discovery::child(v, u, w));
                on_push(WeightedEdge::new(u, v, w));
            }
        }

        self.num_discovered += 1;
        Some(item)
    }
}

impl<G, S, const MARK_ON_PUSH: bool> Iterator for ForestSearch<'_, G, S, MARK_ON_PUSH>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer<Discovery<G::Weight>>,
{
    type Item = Discovery<G::Weight>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with(|_| {})
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.len() - self.num_discovered;
        (remaining, Some(remaining))
    }
}

impl<G, S, const MARK_ON_PUSH: bool> ExactSizeIterator for ForestSearch<'_, G, S, MARK_ON_PUSH>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer<Discovery<G::Weight>>,
{
}

/// Outcome of a complete traversal.
///
/// Created fresh by every traversal call and read-only afterwards. Every vertex of the graph is
/// visited exactly once, so the discovery number of `u` is its position in [`TraversalResult::order`].
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalResult<W> {
    kind: TraversalKind,
    discovery: Vec<Option<OptionalNode>>,
    order: Vec<Node>,
    roots: Vec<Node>,
    parents: Vec<Node>,
    tree_edges: Vec<WeightedEdge<W>>,
}

impl<W: Weight> TraversalResult<W> {
    fn new(kind: TraversalKind, n: NumNodes) -> Self {
        Self {
            kind,
            discovery: vec![None; n as usize],
            order: Vec::with_capacity(n as usize),
            roots: Vec::new(),
            parents: (0..n).collect(),
            tree_edges: Vec::new(),
        }
    }

    /// Assigns the next discovery number to the discovered vertex and remembers its parent
    fn visit(&mut self, item: Discovery<W>) {
        let u = item.node;
        self.discovery[u as usize] = OptionalNode::new(self.order.len() as Node);
        self.order.push(u);

        match item.parent {
            Some((p, _)) => self.parents[u as usize] = p,
            None => self.roots.push(u),
        }
    }

    /// Visits the discovered vertex and stores the edge that led to it
    fn record(&mut self, item: Discovery<W>) {
        self.visit(item);
        if let Some(edge) = item.tree_edge() {
            self.tree_edges.push(edge);
        }
    }

    /// Collects a traversal result from a sequence of discoveries over `n` vertices.
    ///
    /// # Examples
    /// ```
    /// use dualgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_data(ListGraphData::from_edges(
    ///     vec!['A', 'B'],
    ///     true,
    ///     [WeightedEdge::new(0, 1, 3)],
    /// ).unwrap()).unwrap();
    ///
    /// let res = TraversalResult::from_discoveries(
    ///     TraversalKind::BreadthFirst,
    ///     g.number_of_nodes(),
    ///     g.bfs_forest(),
    /// );
    /// assert_eq!(res, g.breadth_first_traversal());
    /// ```
    pub fn from_discoveries<I>(kind: TraversalKind, n: NumNodes, discoveries: I) -> Self
    where
        I: IntoIterator<Item = Discovery<W>>,
    {
        let mut result = Self::new(kind, n);
        for item in discoveries {
            result.record(item);
        }
        result
    }

    /// Returns the strategy that produced this result
    pub fn kind(&self) -> TraversalKind {
        self.kind
    }

    /// Returns all visited vertices in visitation order
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Returns the discovery number of `u`, i.e. its position in the visitation order.
    /// ** Panics if `u >= n` **
    pub fn discovery_number(&self, u: Node) -> Option<Node> {
        self.discovery[u as usize].map(|x| x.get())
    }

    /// Returns the discovery numbers of all vertices in index order
    pub fn discovery_numbers(&self) -> impl Iterator<Item = Option<Node>> + '_ {
        self.discovery.iter().map(|x| x.map(|x| x.get()))
    }

    /// Returns all spanning-tree edges `parent -> child` in the order they were recorded.
    ///
    /// Recursive DFS and BFS record exactly the edges of the traversal forest. Iterative DFS
    /// records one edge per push, which may include several edges into the same vertex.
    pub fn tree_edges(&self) -> &[WeightedEdge<W>] {
        &self.tree_edges
    }

    /// Returns the root of every tree of the traversal forest in ascending order
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Returns the number of trees of the traversal forest
    pub fn number_of_trees(&self) -> usize {
        self.roots.len()
    }

    /// Returns *true* if every vertex was visited
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.discovery.len()
    }

    /// Returns the parent of every vertex in the traversal forest.
    /// Roots (and unvisited vertices) are their own parent.
    pub fn parents(&self) -> Vec<Node> {
        self.parents.clone()
    }

    /// Returns the depth of every vertex in the traversal forest (roots have depth 0)
    pub fn depths(&self) -> Vec<Node> {
        let parents = self.parents();
        let mut depths = vec![0; self.discovery.len()];
        for &u in &self.order {
            let p = parents[u as usize];
            if p != u {
                depths[u as usize] = depths[p as usize] + 1;
            }
        }
        depths
    }

    /// Returns a printable report that resolves vertex indices to the labels of `graph`
    pub fn report<'a, G>(&'a self, graph: &'a G) -> TraversalReport<'a, G, W>
    where
        G: LabelledNodes,
    {
        TraversalReport {
            graph,
            result: self,
        }
    }
}

/// Labelled rendering of a [`TraversalResult`]:
///
/// ```text
/// [BFS RESULTS]
/// TRAVERSAL LIST: ([0]A) ([1]B)
/// TRAVERSAL NUMBERS: ([0]A:0) ([1]B:1)
/// SPANNING TREE EDGES: ([0]A-[1]B@5)
/// ```
pub struct TraversalReport<'a, G, W> {
    graph: &'a G,
    result: &'a TraversalResult<W>,
}

impl<G, W> Display for TraversalReport<'_, G, W>
where
    G: LabelledNodes,
    W: Weight,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = |u: Node| self.graph.label_of(u);

        writeln!(f, "[{} RESULTS]", self.result.kind)?;

        write!(f, "TRAVERSAL LIST:")?;
        for &u in self.result.order() {
            write!(f, " ([{u}]{})", label(u))?;
        }
        writeln!(f)?;

        write!(f, "TRAVERSAL NUMBERS:")?;
        for (u, k) in self.result.discovery_numbers().enumerate() {
            if let Some(k) = k {
                write!(f, " ([{u}]{}:{k})", label(u as Node))?;
            }
        }
        writeln!(f)?;

        write!(f, "SPANNING TREE EDGES:")?;
        for e in self.result.tree_edges() {
            write!(
                f,
                " ([{}]{}-[{}]{}@{})",
                e.source,
                label(e.source),
                e.target,
                label(e.target),
                e.weight
            )?;
        }
        writeln!(f)
    }
}

/// Recursive pre-order visit: marks `item` on entry, then descends into every neighbor that is
/// still unvisited at the time it is reached in the neighborhood scan.
fn dfs_recursive_visit<G>(
    graph: &G,
    item: Discovery<G::Weight>,
    visited: &mut NodeBitSet,
    result: &mut TraversalResult<G::Weight>,
) where
    G: WeightedAdjacencyList,
{
    let u = item.node;
    visited.set(u as usize, true);
    result.record(item);

    for (v, w) in graph.weighted_neighbors_of(u) {
        if !visited[v as usize] {
            dfs_recursive_visit(graph, Discovery::child(v, u, w), visited, result);
        }
    }
}

/// Provides all traversals as methods on every graph.
///
/// Every traversal covers the whole graph: once a tree is exhausted, it restarts at the smallest
/// unvisited vertex.
pub trait Traversal: WeightedAdjacencyList {
    /// Returns a lazy breadth-first forest iterator.
    ///
    /// # Examples
    /// ```
    /// use dualgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_data(ListGraphData::from_edges(
    ///     vec!['A', 'B', 'C'],
    ///     true,
    ///     [WeightedEdge::new(1, 0, 2)],
    /// ).unwrap()).unwrap();
    ///
    /// let order: Vec<_> = g.bfs_forest().map(|d| d.node).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs_forest(&self) -> BreadthFirstForest<'_, Self> {
        ForestSearch::new(self)
    }

    /// Returns a lazy depth-first forest iterator with deferred marking.
    ///
    /// # Examples
    /// ```
    /// use dualgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_data(ListGraphData::from_edges(
    ///     vec!['A', 'B', 'C'],
    ///     true,
    ///     [WeightedEdge::new(0, 1, 1), WeightedEdge::new(0, 2, 1)],
    /// ).unwrap()).unwrap();
    ///
    /// // the last pushed neighbor is expanded first
    /// let order: Vec<_> = g.dfs_forest().map(|d| d.node).collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn dfs_forest(&self) -> DepthFirstForest<'_, Self> {
        ForestSearch::new(self)
    }

    /// Runs a full depth-first traversal, either recursively or with an explicit stack
    fn depth_first_traversal(&self, iterative: bool) -> TraversalResult<Self::Weight> {
        if iterative {
            self.iterative_depth_first_traversal()
        } else {
            self.recursive_depth_first_traversal()
        }
    }

    /// Runs a full recursive depth-first traversal.
    ///
    /// The recursion depth is bounded by the longest path the search descends; use
    /// [`Traversal::iterative_depth_first_traversal`] for very deep graphs.
    fn recursive_depth_first_traversal(&self) -> TraversalResult<Self::Weight> {
        let kind = TraversalKind::RecursiveDepthFirst;
        let mut result = TraversalResult::new(kind, self.number_of_nodes());
        let mut visited = self.vertex_bitset_unset();

        for u in self.vertices_range() {
            if !visited[u as usize] {
                dfs_recursive_visit(self, Discovery::root(u), &mut visited, &mut result);
            }
        }

        trace!(
            %kind,
            nodes = result.order().len(),
            trees = result.number_of_trees(),
            "traversal finished"
        );
        result
    }

    /// Runs a full iterative depth-first traversal with deferred marking.
    ///
    /// A spanning edge is recorded each time an unvisited neighbor is pushed.
    ///
    /// # Examples
    /// ```
    /// use dualgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListGraph::from_data(ListGraphData::from_edges(
    ///     vec!['A', 'B', 'C'],
    ///     true,
    ///     [WeightedEdge::new(0, 1, 1), WeightedEdge::new(0, 2, 2), WeightedEdge::new(2, 1, 3)],
    /// ).unwrap()).unwrap();
    ///
    /// let res = g.iterative_depth_first_traversal();
    /// assert_eq!(res.order(), &[0, 2, 1]);
    /// assert_eq!(res.tree_edges().len(), 3);
    /// assert_eq!(res.parents(), vec![0, 2, 0]);
    /// ```
    fn iterative_depth_first_traversal(&self) -> TraversalResult<Self::Weight> {
        let kind = TraversalKind::IterativeDepthFirst;
        let mut result = TraversalResult::new(kind, self.number_of_nodes());

        let mut search = self.dfs_forest();
        while let Some(item) = search.next_with(|edge| result.tree_edges.push(edge)) {
            result.visit(item);
        }

        trace!(
            %kind,
            nodes = result.order().len(),
            trees = result.number_of_trees(),
            "traversal finished"
        );
        result
    }

    /// Runs a full breadth-first traversal with eager marking
    fn breadth_first_traversal(&self) -> TraversalResult<Self::Weight> {
        let kind = TraversalKind::BreadthFirst;
        let result = TraversalResult::from_discoveries(kind, self.number_of_nodes(), self.bfs_forest());

        trace!(
            %kind,
            nodes = result.order().len(),
            trees = result.number_of_trees(),
            "traversal finished"
        );
        result
    }
}

impl<G> Traversal for G where G: WeightedAdjacencyList {}
