use crate::PortalScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Single-active-screen selector. There is no back stack.
pub struct ScreenRouter {
    active: PortalScreen,
}

impl ScreenRouter {
    pub fn new(active: PortalScreen) -> Self {
        Self { active }
    }

    pub fn active(&self) -> PortalScreen {
        self.active
    }

    /// Activates `screen` and returns the screen that was left.
    ///
    /// Re-selecting the active screen is a no-op and returns `None`.
    pub fn show(&mut self, screen: PortalScreen) -> Option<PortalScreen> {
        if self.active == screen {
            return None;
        }
        let previous = self.active;
        self.active = screen;
        Some(previous)
    }
}
