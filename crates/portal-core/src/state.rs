use crate::{
    ChatWidget, PageKey, PortalLocale, PortalRole, PortalScreen, PortalSession, ScreenRouter,
    SessionStore, StaffLiveChat,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `ModalDialog` in `portal-core`.
pub struct ModalDialog {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Complete application state, owned by exactly one controller.
///
/// Each component's state is only mutated by the reducer arm handling that
/// component's events; everything else reads the role through
/// [`PortalState::role`].
pub struct PortalState {
    pub locale: PortalLocale,
    pub session: SessionStore,
    pub router: ScreenRouter,
    pub portal: Option<PortalSession>,
    pub chat: ChatWidget,
    pub staff_chat: StaffLiveChat,
    pub modal: Option<ModalDialog>,
}

impl PortalState {
    pub fn new(locale: PortalLocale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn role(&self) -> PortalRole {
        self.session.role()
    }

    pub fn screen(&self) -> PortalScreen {
        self.router.active()
    }

    pub fn current_page(&self) -> Option<PageKey> {
        self.portal.map(|session| session.current_page())
    }

    /// Role of the active portal session, when the portal is showing.
    pub fn portal_role(&self) -> Option<PortalRole> {
        match (self.screen(), self.portal) {
            (PortalScreen::Portal, Some(session)) => Some(session.role()),
            _ => None,
        }
    }
}
