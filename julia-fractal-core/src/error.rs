use std::fmt;

use thiserror::Error;

/// Which input of a generation call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Width,
    Height,
    Zoom,
    Extent,
    MaxIterations,
    EscapeRadius,
    C,
    Center,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Zoom => "zoom",
            Self::Extent => "extent",
            Self::MaxIterations => "max_iterations",
            Self::EscapeRadius => "escape_radius",
            Self::C => "c",
            Self::Center => "center",
        };
        f.write_str(name)
    }
}

/// Errors originating from the core fractal engine.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument { argument: Argument, reason: String },
}

impl CoreError {
    pub(crate) fn invalid(argument: Argument, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// The rejected input.
    pub fn argument(&self) -> Argument {
        match self {
            Self::InvalidArgument { argument, .. } => *argument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_argument() {
        let err = CoreError::invalid(Argument::MaxIterations, "must be >= 1, got 0");
        assert_eq!(
            err.to_string(),
            "invalid argument `max_iterations`: must be >= 1, got 0"
        );
        assert_eq!(err.argument(), Argument::MaxIterations);
    }
}
