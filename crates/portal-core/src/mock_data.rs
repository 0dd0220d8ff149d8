//! Static demo content consumed by the page renderers.

use crate::{ChatMessage, ChatSender, PageKey, PortalRole, StaffConversation};

pub const SUPPORT_GREETING: &str = "Hello! How can I help you today?";
pub const SUPPORT_GREETING_TIME: &str = "10:30 AM";
pub const USER_MESSAGE_TIME: &str = "Now";
pub const NOTIFICATION_COUNT: u32 = 3;
pub const STAFF_PAGE_PENDING_NOTE: &str =
    "Staff screens will be implemented after student screens are finalized.";
pub const STUDENT_PAGE_PENDING_NOTE: &str = "Student page under development.";

const ICON_FILES: &[(&str, &str)] = &[
    ("bell", "icon-bell.png"),
    ("dashboard", "icon-home.png"),
    ("visa", "icon-visa.png"),
    ("documents", "icon-documents.png"),
    ("appointments", "icon-appointments.png"),
    ("chat", "icon-chat.png"),
    ("medical", "icon-medical.png"),
    ("avatarStudent", "icon-avatar-student.png"),
];

/// Returns the asset file for an icon key, or `None` for keys without artwork.
pub fn icon_file(key: &str) -> Option<&'static str> {
    ICON_FILES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, file)| *file)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Display identity shown in the portal chrome for a role.
pub struct PortalPersona {
    pub display_name: &'static str,
    pub role_label: &'static str,
    pub portal_type: &'static str,
    pub portal_title: &'static str,
    pub portal_subtitle: &'static str,
}

pub fn persona(role: PortalRole) -> PortalPersona {
    match role {
        PortalRole::Student => PortalPersona {
            display_name: "Ahmed A.",
            role_label: "",
            portal_type: "Student Portal",
            portal_title: "Student Portal",
            portal_subtitle: "",
        },
        PortalRole::Staff => PortalPersona {
            display_name: "Officer Lim",
            role_label: "Administrator",
            portal_type: "Staff Portal",
            portal_title: "International Office Portal",
            portal_subtitle: "Administrative Dashboard",
        },
    }
}

/// Heading used by the placeholder pages of each role.
pub fn placeholder_heading(role: PortalRole, page: PageKey) -> Option<&'static str> {
    match (role, page) {
        (PortalRole::Staff, PageKey::Dashboard) => Some("Staff Dashboard"),
        (PortalRole::Staff, PageKey::Students) => Some("Student Records"),
        (PortalRole::Staff, PageKey::Visa) => Some("Visa & Medical Processing"),
        (PortalRole::Staff, PageKey::Documents) => Some("Document Verification"),
        (PortalRole::Staff, PageKey::Appointments) => Some("Appointments Management"),
        (PortalRole::Staff, PageKey::Chat) => Some("Live Chat"),
        (PortalRole::Staff, PageKey::Reports) => Some("Reports & Analytics"),
        (PortalRole::Student, PageKey::Visa) => Some("Visa & Medical Status"),
        (PortalRole::Student, PageKey::Documents) => Some("Documents"),
        (PortalRole::Student, PageKey::Appointments) => Some("Appointments"),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub pill: &'static str,
    pub pill_tone: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineStepState {
    Done,
    Active,
    Pending,
}

impl TimelineStepState {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Active => "active",
            Self::Pending => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStep {
    pub marker: &'static str,
    pub label: &'static str,
    pub state: TimelineStepState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentUpdate {
    pub title: &'static str,
    pub age: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Content for the student dashboard page.
pub struct StudentDashboard {
    pub welcome: String,
    pub visa: StatusCard,
    pub visa_progress_percent: u8,
    pub medical: StatusCard,
    pub medical_completed_on: &'static str,
    pub next_appointment_title: &'static str,
    pub next_appointment_when: &'static str,
    pub timeline: Vec<TimelineStep>,
    pub recent_updates: Vec<RecentUpdate>,
}

pub fn student_dashboard() -> StudentDashboard {
    StudentDashboard {
        welcome: format!("Welcome, {}", persona(PortalRole::Student).display_name),
        visa: StatusCard {
            title: "Visa Application Status",
            icon: "visa",
            label: "EMGS Review",
            pill: "In Progress",
            pill_tone: "amber",
        },
        visa_progress_percent: 60,
        medical: StatusCard {
            title: "Medical Check",
            icon: "medical",
            label: "Health Screening",
            pill: "Completed",
            pill_tone: "green",
        },
        medical_completed_on: "28 Oct 2025",
        next_appointment_title: "Document Verification",
        next_appointment_when: "5 Nov 2025, 10:00 AM",
        timeline: vec![
            TimelineStep {
                marker: "✓",
                label: "Submitted",
                state: TimelineStepState::Done,
            },
            TimelineStep {
                marker: "2",
                label: "EMGS Review",
                state: TimelineStepState::Active,
            },
            TimelineStep {
                marker: "3",
                label: "Immigration",
                state: TimelineStepState::Pending,
            },
            TimelineStep {
                marker: "4",
                label: "Approved",
                state: TimelineStepState::Pending,
            },
        ],
        recent_updates: vec![RecentUpdate {
            title: "Passport Document Approved",
            age: "2 hours ago",
        }],
    }
}

pub fn support_chat_seed() -> Vec<ChatMessage> {
    vec![ChatMessage::new(
        ChatSender::Support,
        SUPPORT_GREETING,
        SUPPORT_GREETING_TIME,
    )]
}

pub fn staff_conversations() -> Vec<StaffConversation> {
    vec![
        StaffConversation {
            name: "Ahmed A.".to_string(),
            preview: "When will my EMGS review finish?".to_string(),
            messages: vec![
                ChatMessage::new(
                    ChatSender::User,
                    "When will my EMGS review finish?",
                    "10:12 AM",
                ),
                ChatMessage::new(
                    ChatSender::Support,
                    "It is currently at 60%. We will notify you on completion.",
                    "10:15 AM",
                ),
            ],
        },
        StaffConversation {
            name: "Mei Ling T.".to_string(),
            preview: "Can I reschedule my medical check?".to_string(),
            messages: vec![ChatMessage::new(
                ChatSender::User,
                "Can I reschedule my medical check?",
                "9:48 AM",
            )],
        },
        StaffConversation {
            name: "Rahul K.".to_string(),
            preview: "Uploaded my passport copy.".to_string(),
            messages: vec![ChatMessage::new(
                ChatSender::User,
                "Uploaded my passport copy.",
                "Yesterday",
            )],
        },
    ]
}
