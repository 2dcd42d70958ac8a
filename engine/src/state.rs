//! Engine lifecycle states.

use std::fmt;

/// Engine lifecycle state.
///
/// `Uninitialized → Loading → {Detecting | Ready} → Ready`. `Error` can be
/// entered from any step and always resolves to `Ready` with defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Engine has not been started.
    Uninitialized,
    /// Reading persisted preferences.
    Loading,
    /// Running the location detector for a first run.
    Detecting,
    /// Preferences loaded and a quote committed.
    Ready,
    /// A step failed; startup continues with defaults.
    Error,
}

impl EngineState {
    /// Check if the engine can serve conversions from its own preferences.
    pub fn is_ready(&self) -> bool {
        matches!(self, EngineState::Ready)
    }

    /// Check if startup is still in progress.
    pub fn is_starting(&self) -> bool {
        matches!(
            self,
            EngineState::Loading | EngineState::Detecting | EngineState::Error
        )
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineState::Uninitialized => "uninitialized",
            EngineState::Loading => "loading",
            EngineState::Detecting => "detecting",
            EngineState::Ready => "ready",
            EngineState::Error => "error",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        assert!(EngineState::Ready.is_ready());
        assert!(!EngineState::Uninitialized.is_ready());
        assert!(EngineState::Error.is_starting());
        assert!(!EngineState::Ready.is_starting());
        assert_eq!(EngineState::Detecting.to_string(), "detecting");
    }
}
