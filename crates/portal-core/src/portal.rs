use crate::{PageKey, PortalRole};

pub const DEFAULT_PAGE: PageKey = PageKey::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Ordered `(page, label)` pair; table order is menu render order.
pub struct MenuEntry {
    pub page: PageKey,
    pub label: &'static str,
}

const STAFF_MENU: &[MenuEntry] = &[
    MenuEntry {
        page: PageKey::Dashboard,
        label: "Dashboard",
    },
    MenuEntry {
        page: PageKey::Students,
        label: "Student Records",
    },
    MenuEntry {
        page: PageKey::Visa,
        label: "Visa & Medical Processing",
    },
    MenuEntry {
        page: PageKey::Documents,
        label: "Document Verification",
    },
    MenuEntry {
        page: PageKey::Appointments,
        label: "Appointments Management",
    },
    MenuEntry {
        page: PageKey::Chat,
        label: "Chatbot & Live Chat",
    },
    MenuEntry {
        page: PageKey::Reports,
        label: "Reports & Analytics",
    },
];

const STUDENT_MENU: &[MenuEntry] = &[
    MenuEntry {
        page: PageKey::Dashboard,
        label: "Dashboard",
    },
    MenuEntry {
        page: PageKey::Visa,
        label: "Visa & Medical Status",
    },
    MenuEntry {
        page: PageKey::Documents,
        label: "Documents",
    },
    MenuEntry {
        page: PageKey::Appointments,
        label: "Appointments",
    },
];

pub fn menu_entries(role: PortalRole) -> &'static [MenuEntry] {
    match role {
        PortalRole::Student => STUDENT_MENU,
        PortalRole::Staff => STAFF_MENU,
    }
}

pub fn role_has_page(role: PortalRole, page: PageKey) -> bool {
    menu_entries(role).iter().any(|entry| entry.page == page)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Active portal session. `current_page` is always a key of the role's menu.
pub struct PortalSession {
    role: PortalRole,
    current_page: PageKey,
}

impl PortalSession {
    pub fn new(role: PortalRole) -> Self {
        Self {
            role,
            current_page: DEFAULT_PAGE,
        }
    }

    pub fn role(&self) -> PortalRole {
        self.role
    }

    pub fn current_page(&self) -> PageKey {
        self.current_page
    }

    /// Switches the active page when `page` belongs to this role's menu.
    pub fn select_page(&mut self, page: PageKey) -> bool {
        if !role_has_page(self.role, page) {
            return false;
        }
        self.current_page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{menu_entries, role_has_page, PortalSession, DEFAULT_PAGE};
    use crate::{PageKey, PortalRole};

    #[test]
    fn unit_menu_tables_keep_declared_order() {
        let staff: Vec<&str> = menu_entries(PortalRole::Staff)
            .iter()
            .map(|entry| entry.page.as_str())
            .collect();
        assert_eq!(
            staff,
            vec![
                "dashboard",
                "students",
                "visa",
                "documents",
                "appointments",
                "chat",
                "reports"
            ]
        );
        assert_eq!(menu_entries(PortalRole::Student).len(), 4);
    }

    #[test]
    fn unit_new_session_starts_on_dashboard() {
        let session = PortalSession::new(PortalRole::Staff);
        assert_eq!(session.current_page(), DEFAULT_PAGE);
        assert_eq!(session.current_page(), PageKey::Dashboard);
    }

    #[test]
    fn regression_student_session_rejects_staff_only_page() {
        let mut session = PortalSession::new(PortalRole::Student);
        assert!(!role_has_page(PortalRole::Student, PageKey::Students));
        assert!(!session.select_page(PageKey::Students));
        assert!(!session.select_page(PageKey::Chat));
        assert_eq!(session.current_page(), PageKey::Dashboard);
        assert!(session.select_page(PageKey::Visa));
        assert_eq!(session.current_page(), PageKey::Visa);
    }
}
