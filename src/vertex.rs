/// A graph vertex. Vertices are identified by their index in the graph, not
/// by their label, so labels may repeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vertex {
    label: char,
}

impl Vertex {
    pub fn new(label: char) -> Self {
        Vertex { label }
    }

    pub fn label(&self) -> char {
        self.label
    }
}

impl From<char> for Vertex {
    fn from(label: char) -> Self {
        Vertex::new(label)
    }
}
