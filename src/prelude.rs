pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::error::{GraphError, Result};
pub use crate::graph::{DirectedGraph, Graph, UndirectedGraph};
pub use crate::path::Path;
pub use crate::vertex::Vertex;
pub use crate::{VertexIndex, Weight};
