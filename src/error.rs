use std::fmt;

/// Failure while loading or checking engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The source could not be deserialized.
    Parse(String),
    /// The values deserialized but are unusable. One message per problem.
    Invalid(Vec<String>),
}

impl ConfigError {
    /// Problems reported by [`ConfigError::Invalid`]; empty for parse errors.
    pub fn problems(&self) -> &[String] {
        match self {
            ConfigError::Parse(_) => &[],
            ConfigError::Invalid(problems) => problems,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid configuration: {}", msg),
            ConfigError::Invalid(problems) => {
                for (i, problem) in problems.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "✖ {}", problem)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}
