//! Algorithm and generator kinds — the dispatch boundary.
//!
//! Unknown names are rejected here with a descriptive error; the engine
//! crates only ever see the enumerated kinds.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// The five pathfinding algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    AStar,
    Dijkstra,
    Bfs,
    Dfs,
    Bidirectional,
}

impl AlgorithmKind {
    /// Every kind, in comparison-mode order.
    pub const ALL: [Self; 5] = [
        Self::AStar,
        Self::Dijkstra,
        Self::Bfs,
        Self::Dfs,
        Self::Bidirectional,
    ];

    /// The stable lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Bidirectional => "bidirectional",
        }
    }

    /// Human-facing metadata about the algorithm.
    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::AStar => AlgorithmInfo {
                name: "A* Search",
                description: "Uses heuristics to find optimal path efficiently",
                time_complexity: "O(b^d)",
                space_complexity: "O(b^d)",
                optimal: true,
                complete: true,
            },
            Self::Dijkstra => AlgorithmInfo {
                name: "Dijkstra's Algorithm",
                description: "Guarantees shortest path, explores uniformly",
                time_complexity: "O((V + E) log V)",
                space_complexity: "O(V)",
                optimal: true,
                complete: true,
            },
            Self::Bfs => AlgorithmInfo {
                name: "Breadth-First Search",
                description: "Explores level by level, guarantees shortest path",
                time_complexity: "O(V + E)",
                space_complexity: "O(V)",
                optimal: true,
                complete: true,
            },
            Self::Dfs => AlgorithmInfo {
                name: "Depth-First Search",
                description: "Explores as far as possible before backtracking",
                time_complexity: "O(V + E)",
                space_complexity: "O(V)",
                optimal: false,
                complete: true,
            },
            Self::Bidirectional => AlgorithmInfo {
                name: "Bidirectional Search",
                description: "Searches from both start and end simultaneously",
                time_complexity: "O(b^(d/2))",
                space_complexity: "O(b^(d/2))",
                optimal: true,
                complete: true,
            },
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astar" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "bidirectional" => Ok(Self::Bidirectional),
            other => Err(ParseKindError {
                what: "algorithm",
                got: other.to_string(),
                expected: "astar|dijkstra|bfs|dfs|bidirectional",
            }),
        }
    }
}

/// The four maze generation modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Recursive,
    Prim,
    Kruskal,
    Empty,
}

impl GeneratorKind {
    pub const ALL: [Self; 4] = [Self::Recursive, Self::Prim, Self::Kruskal, Self::Empty];

    /// The stable lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(Self::Recursive),
            "prim" => Ok(Self::Prim),
            "kruskal" => Ok(Self::Kruskal),
            "empty" => Ok(Self::Empty),
            other => Err(ParseKindError {
                what: "generator",
                got: other.to_string(),
                expected: "recursive|prim|kruskal|empty",
            }),
        }
    }
}

/// Metadata describing an algorithm for display purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub optimal: bool,
    pub complete: bool,
}

/// An unknown algorithm or generator name reached the dispatch boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKindError {
    what: &'static str,
    got: String,
    expected: &'static str,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}' (expected {})",
            self.what, self.got, self.expected
        )
    }
}

impl Error for ParseKindError {}
