/// Mesh geometry asset, referenced by renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geometry {
    pub name: String,
    pub vertex_count: u32,
}

impl Geometry {
    #[must_use]
    pub fn new(name: &str, vertex_count: u32) -> Self {
        Self {
            name: name.to_string(),
            vertex_count,
        }
    }
}
