use std::fmt;

/// Contract violations detected while building a [`DrawerController`].
///
/// [`DrawerController`]: crate::DrawerController
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerError {
    MissingSide,
    MissingChild,
    MissingProgressSource,
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for DrawerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawerError::MissingSide => write!(f, "drawer controller requires a side"),
            DrawerError::MissingChild => write!(f, "drawer controller requires a child panel"),
            DrawerError::MissingProgressSource => write!(
                f,
                "drawer controller requires a progress source or a frame clock"
            ),
            DrawerError::InvalidConfig { field, reason } => {
                write!(f, "invalid drawer config `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for DrawerError {}
