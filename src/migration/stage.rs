/// Progress of a migration run.
///
/// Runs only move forward, one step at a time. A failure leaves the run at
/// the last stage it reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    #[default]
    Unconfigured,
    Configured,
    Connected,
    SchemaEnsured,
    FileOpen,
    Loaded,
    Committed,
    Closed,
}

impl Stage {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Unconfigured,
            Self::Configured,
            Self::Connected,
            Self::SchemaEnsured,
            Self::FileOpen,
            Self::Loaded,
            Self::Committed,
            Self::Closed,
        ]
    }
    /// The only stage reachable from this one.
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Unconfigured => Some(Self::Configured),
            Self::Configured => Some(Self::Connected),
            Self::Connected => Some(Self::SchemaEnsured),
            Self::SchemaEnsured => Some(Self::FileOpen),
            Self::FileOpen => Some(Self::Loaded),
            Self::Loaded => Some(Self::Committed),
            Self::Committed => Some(Self::Closed),
            Self::Closed => None,
        }
    }
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unconfigured => write!(f, "unconfigured"),
            Self::Configured => write!(f, "configured"),
            Self::Connected => write!(f, "connected"),
            Self::SchemaEnsured => write!(f, "schema ensured"),
            Self::FileOpen => write!(f, "file open"),
            Self::Loaded => write!(f, "loaded"),
            Self::Committed => write!(f, "committed"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_chain() {
        let chain = std::iter::successors(Some(Stage::default()), Stage::next).collect::<Vec<_>>();
        assert!(chain == Stage::all());
    }

    #[test]
    fn strictly_increasing() {
        for pair in Stage::all().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn only_closed_is_terminal() {
        let terminal = Stage::all()
            .iter()
            .filter(|s| s.is_terminal())
            .collect::<Vec<_>>();
        assert!(terminal == [&Stage::Closed]);
    }
}
