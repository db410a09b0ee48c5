//! Build mode resolution
//!
//! The original scripts read the `ENV` variable directly inside the build
//! logic; here the value is resolved once at the CLI boundary and the rest
//! of the code receives an explicit [`BuildMode`].

/// Build mode selecting the compiler flag set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Debug tag, no path trimming, no forced rebuild
    Development,
    /// Path trimming and a full dependency rebuild
    Production,
}

impl BuildMode {
    /// Resolve a mode from the `ENV` value; `dev` selects development,
    /// anything else (including unset) is production
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("dev") => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl std::fmt::Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}
