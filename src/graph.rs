use std::collections::{HashMap, VecDeque};
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Both endpoints must be added as vertices before an edge can join them
    #[error("edge endpoint is not a vertex of the graph")]
    UnknownEndpoint,
}

/// Visit state used by the traversals: white is untouched, gray is
/// discovered, black is fully explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Undirected graph over an adjacency list.
///
/// Vertices keep their insertion order, which fixes the traversal starting
/// point and the neighbor visit order.
#[derive(Debug)]
pub struct Graph<T: Eq + Hash + Clone> {
    vertices: Vec<T>,
    adjacency: HashMap<T, Vec<T>>,
}

impl<T: Eq + Hash + Clone> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex with no edges. Re-adding an existing vertex is a no-op
    /// so its adjacency list survives.
    pub fn add_vertex(&mut self, value: T) {
        if self.adjacency.contains_key(&value) {
            return;
        }
        self.adjacency.insert(value.clone(), Vec::new());
        self.vertices.push(value);
    }

    /// Joins two existing vertices; the edge is recorded on both ends.
    pub fn add_edge(&mut self, a: &T, b: &T) -> Result<(), GraphError> {
        if !self.adjacency.contains_key(a) || !self.adjacency.contains_key(b) {
            return Err(GraphError::UnknownEndpoint);
        }

        if let Some(adjacent) = self.adjacency.get_mut(a) {
            adjacent.push(b.clone());
        }
        if let Some(adjacent) = self.adjacency.get_mut(b) {
            adjacent.push(a.clone());
        }
        Ok(())
    }

    pub fn neighbors(&self, vertex: &T) -> Option<&[T]> {
        self.adjacency.get(vertex).map(|adjacent| adjacent.as_slice())
    }

    /// Breadth-first traversal from the first inserted vertex, calling
    /// `visit` once per reachable vertex in discovery order.
    pub fn bfs(&self, mut visit: impl FnMut(&T)) {
        let Some(start) = self.vertices.first() else {
            return;
        };

        let mut colors = self.initial_colors();
        let mut queue = VecDeque::from([start.clone()]);
        colors.insert(start.clone(), Color::Gray);

        while let Some(current) = queue.pop_front() {
            if let Some(adjacent) = self.adjacency.get(&current) {
                for next in adjacent {
                    if colors.get(next) == Some(&Color::White) {
                        colors.insert(next.clone(), Color::Gray);
                        queue.push_back(next.clone());
                    }
                }
            }
            colors.insert(current.clone(), Color::Black);
            visit(&current);
        }
    }

    /// Depth-first traversal covering every component, calling `visit` once
    /// per vertex in preorder.
    pub fn dfs(&self, mut visit: impl FnMut(&T)) {
        let mut colors = self.initial_colors();
        for vertex in &self.vertices {
            if colors.get(vertex) == Some(&Color::White) {
                self.dfs_visit(vertex, &mut colors, &mut visit);
            }
        }
    }

    // [private]

    fn dfs_visit(&self, vertex: &T, colors: &mut HashMap<T, Color>, visit: &mut impl FnMut(&T)) {
        colors.insert(vertex.clone(), Color::Gray);
        visit(vertex);

        if let Some(adjacent) = self.adjacency.get(vertex) {
            for next in adjacent {
                if colors.get(next) == Some(&Color::White) {
                    self.dfs_visit(next, colors, visit);
                }
            }
        }
        colors.insert(vertex.clone(), Color::Black);
    }

    fn initial_colors(&self) -> HashMap<T, Color> {
        self.vertices
            .iter()
            .map(|v| (v.clone(), Color::White))
            .collect()
    }
}

impl<T: Eq + Hash + Clone + Display> Display for Graph<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{vertex} ->")?;
            if let Some(adjacent) = self.adjacency.get(vertex) {
                for next in adjacent {
                    write!(f, " {next}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
