// Dashboard panel state
// Idle shows the call-to-action; Open(topic) shows exactly one dashboard and
// freezes the widget. Switching topics goes straight from Open to Open.

use super::dispatch::Topic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Open(Topic),
}

#[derive(Debug, Default)]
pub struct PanelController {
    selected: Option<Topic>,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, topic: Topic) {
        if self.selected != Some(topic) {
            log::debug!("panel: {:?} -> Open({topic:?})", self.state());
        }
        self.selected = Some(topic);
    }

    pub fn close(&mut self) {
        if let Some(topic) = self.selected.take() {
            log::debug!("panel: Open({topic:?}) -> Idle");
        }
    }

    pub fn selected(&self) -> Option<Topic> {
        self.selected
    }

    pub fn state(&self) -> PanelState {
        match self.selected {
            Some(topic) => PanelState::Open(topic),
            None => PanelState::Idle,
        }
    }

    /// The freeze flag read by the rotation engine.
    pub fn is_frozen(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let panel = PanelController::new();
        assert_eq!(panel.state(), PanelState::Idle);
        assert!(!panel.is_frozen());
    }

    #[test]
    fn test_switch_topics_without_idle() {
        let mut panel = PanelController::new();
        panel.open(Topic::Coding);
        panel.open(Topic::Status);
        assert_eq!(panel.state(), PanelState::Open(Topic::Status));
        assert!(panel.is_frozen());
    }

    #[test]
    fn test_close_always_returns_to_idle() {
        for topic in Topic::ALL {
            let mut panel = PanelController::new();
            panel.open(topic);
            panel.close();
            assert_eq!(panel.selected(), None);
            assert!(!panel.is_frozen());
        }
        let mut panel = PanelController::new();
        panel.close();
        assert_eq!(panel.state(), PanelState::Idle);
    }
}
