use serde::{Deserialize, Serialize};

/// How the page context relates to the host's privileged surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsolationMode {
    /// Page sees only the frozen bridge object.
    #[default]
    Isolated,
    /// Legacy: page also gets a raw IPC sender and a mutable bridge object.
    Shared,
}

/// Logical window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Grow each dimension to at least `min`.
    pub fn at_least(self, min: Size) -> Size {
        Size {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }

    /// Whether both dimensions meet `min`.
    pub fn satisfies(&self, min: Size) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}
