//! Whole-machine networking kill switch via the NetworkManager CLI.

use std::process::Command;

/// Displayed connectivity state. Optimistic: it tracks what was requested,
/// not what the OS reports, and can diverge when nmcli fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Connected,
    Disconnected,
}

/// Two-state toggle shelling out to `nmcli networking on|off`
#[derive(Debug)]
pub struct NetworkToggle {
    state: ToggleState,
    program: String,
}

impl NetworkToggle {
    pub fn new() -> Self {
        Self::with_program("nmcli")
    }

    /// Use a different networking command (tests point this at a stub)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { state: ToggleState::Connected, program: program.into() }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Action label for the footer: what pressing the key will do next
    pub fn label(&self) -> &'static str {
        match self.state {
            ToggleState::Connected => "Disconnect",
            ToggleState::Disconnected => "Reconnect",
        }
    }

    /// Invoke the networking command for the opposite state and flip the
    /// displayed state. The exit status is not checked and a failed spawn
    /// still flips; the divergence is logged only.
    pub fn toggle(&mut self) {
        let arg = match self.state {
            ToggleState::Connected => "off",
            ToggleState::Disconnected => "on",
        };

        match Command::new(&self.program).args(["networking", arg]).output() {
            Ok(output) if !output.status.success() => {
                log::warn!(
                    "{} networking {} exited with {}",
                    self.program,
                    arg,
                    output.status
                );
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("failed to run {} networking {}: {}", self.program, arg, e);
            }
        }

        self.state = match self.state {
            ToggleState::Connected => ToggleState::Disconnected,
            ToggleState::Disconnected => ToggleState::Connected,
        };
    }
}

impl Default for NetworkToggle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_connected_with_disconnect_label() {
        let t = NetworkToggle::new();
        assert_eq!(t.state(), ToggleState::Connected);
        assert_eq!(t.label(), "Disconnect");
    }

    #[test]
    fn flips_on_every_invocation() {
        let mut t = NetworkToggle::with_program("true");
        t.toggle();
        assert_eq!(t.state(), ToggleState::Disconnected);
        assert_eq!(t.label(), "Reconnect");
        t.toggle();
        assert_eq!(t.state(), ToggleState::Connected);
        assert_eq!(t.label(), "Disconnect");
    }

    #[test]
    fn flips_even_when_the_command_cannot_spawn() {
        let mut t = NetworkToggle::with_program("/nonexistent/netmon-test-nmcli");
        t.toggle();
        assert_eq!(t.state(), ToggleState::Disconnected);
    }
}
