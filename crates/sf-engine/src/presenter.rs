//! Result presentation

use log::debug;

use sf_core::Prize;

use crate::host::ResultPanel;

/// Formats the winning prize and reveals it on the result panel
#[derive(Debug, Clone)]
pub struct ResultPresenter {
    /// Congratulation line shown above the prize name
    pub title: String,
}

impl Default for ResultPresenter {
    fn default() -> Self {
        Self {
            title: "Congratulations! The draw brings you".to_string(),
        }
    }
}

impl ResultPresenter {
    /// Create a presenter with a custom congratulation line
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Write the prize onto the panel, reveal it, and mark the win state.
    ///
    /// Idempotent: calling again simply overwrites the displayed content.
    pub fn present(&self, panel: &mut dyn ResultPanel, prize: &Prize) {
        debug!("presenting prize {}", prize.id);
        panel.set_text(&self.title, &format!("“{}”", prize.name));
        panel.reveal();
        panel.set_celebrating(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::IconRef;

    #[derive(Default)]
    struct FakePanel {
        title: String,
        description: String,
        visible: bool,
        celebrating: bool,
        reveal_calls: u32,
    }

    impl ResultPanel for FakePanel {
        fn set_text(&mut self, title: &str, description: &str) {
            self.title = title.to_string();
            self.description = description.to_string();
        }
        fn reveal(&mut self) {
            self.visible = true;
            self.reveal_calls += 1;
        }
        fn hide(&mut self) {
            self.visible = false;
        }
        fn set_celebrating(&mut self, on: bool) {
            self.celebrating = on;
        }
    }

    #[test]
    fn test_present_reveals_and_celebrates() {
        let presenter = ResultPresenter::default();
        let prize = Prize::new("p1", "Rice Crackers", "Crisp and light", IconRef::new("rice"));
        let mut panel = FakePanel::default();

        presenter.present(&mut panel, &prize);

        assert!(panel.visible);
        assert!(panel.celebrating);
        assert!(panel.description.contains("Rice Crackers"));
    }

    #[test]
    fn test_present_is_idempotent() {
        let presenter = ResultPresenter::default();
        let prize = Prize::new("p1", "Rice Crackers", "Crisp and light", IconRef::new("rice"));
        let mut panel = FakePanel::default();

        presenter.present(&mut panel, &prize);
        let first_text = (panel.title.clone(), panel.description.clone());

        presenter.present(&mut panel, &prize);
        assert_eq!((panel.title.clone(), panel.description.clone()), first_text);
        assert!(panel.visible);
        assert_eq!(panel.reveal_calls, 2);
    }

    #[test]
    fn test_present_overwrites_previous_prize() {
        let presenter = ResultPresenter::default();
        let mut panel = FakePanel::default();

        let first = Prize::new("p0", "Honey Pork Strips", "Sweet", IconRef::new("pork"));
        let second = Prize::new("p2", "Scallion Biscuits", "Savory", IconRef::new("scallion"));

        presenter.present(&mut panel, &first);
        presenter.present(&mut panel, &second);

        assert!(panel.description.contains("Scallion Biscuits"));
        assert!(!panel.description.contains("Honey"));
    }
}
