/// Texture asset.
///
/// The auditor only needs identity, so the CPU-side description is kept to
/// what a report would show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    #[must_use]
    pub fn new_2d(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
        }
    }
}

impl Default for Texture {
    fn default() -> Self {
        Self::new_2d("Texture", 1, 1)
    }
}
