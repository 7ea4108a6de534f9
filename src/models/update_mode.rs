//! Update path selection.

/// How a filter change reaches the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Re-render in place and keep the query string in sync (default)
    #[default]
    Live,
    /// Write the query string and reload so the server re-renders
    Reload,
}

impl UpdateMode {
    /// Parse a `data-update-mode` attribute value.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "live" => Some(Self::Live),
            "reload" => Some(Self::Reload),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Reload => "reload",
        }
    }
}
