//! Pure view-model derivation. Nothing here mutates state.

use crate::mock_data::{persona, NOTIFICATION_COUNT};
use crate::{
    menu_entries, AuthRequestKind, ChatMessage, ChatSender, PageKey, PortalRole, PortalState,
    StaffLiveChat,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginViewModel {
    pub role: PortalRole,
    pub student_tab_active: bool,
    pub staff_tab_active: bool,
    pub id_label: &'static str,
    pub id_placeholder: &'static str,
    pub submit_label: &'static str,
    pub identity: String,
    pub error: String,
    pub busy: bool,
}

pub fn login_view_model(state: &PortalState) -> LoginViewModel {
    let messages = state.locale.messages();
    let role = state.role();
    LoginViewModel {
        role,
        student_tab_active: role == PortalRole::Student,
        staff_tab_active: role == PortalRole::Staff,
        id_label: messages.id_label(role),
        id_placeholder: messages.id_placeholder(role),
        submit_label: messages.login_button(role),
        identity: state.session.identity_input().to_string(),
        error: state.session.login_error().to_string(),
        busy: state.session.in_flight() == Some(AuthRequestKind::Login),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpViewModel {
    pub hint: String,
    pub cells: Vec<String>,
    pub error: String,
    pub verify_busy: bool,
    pub resend_busy: bool,
}

pub fn otp_view_model(state: &PortalState) -> OtpViewModel {
    let in_flight = state.session.in_flight();
    OtpViewModel {
        hint: state.session.otp_hint().to_string(),
        cells: state.session.otp_cells().to_vec(),
        error: state.session.otp_error().to_string(),
        verify_busy: in_flight == Some(AuthRequestKind::VerifyOtp),
        resend_busy: in_flight == Some(AuthRequestKind::ResendOtp),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarGlyph {
    Letter(char),
    Icon(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemView {
    pub page: PageKey,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Chrome description for the portal screen of one role.
pub struct ShellViewModel {
    pub role: PortalRole,
    pub current_page: PageKey,
    pub mode_class: &'static str,
    pub chip_class: &'static str,
    pub portal_type: &'static str,
    pub portal_title: &'static str,
    pub portal_subtitle: &'static str,
    pub user_name: &'static str,
    pub user_role: &'static str,
    pub avatar: AvatarGlyph,
    pub notification_count: u32,
    pub menu: Vec<MenuItemView>,
}

/// Derives the chrome for `(role, current_page)`; exactly the menu entry
/// whose key equals `current_page` is marked active.
pub fn shell_view_model(role: PortalRole, current_page: PageKey) -> ShellViewModel {
    let persona = persona(role);
    let (mode_class, chip_class, avatar) = match role {
        PortalRole::Staff => (
            "staff-mode",
            "staff-chip",
            AvatarGlyph::Letter(persona.display_name.chars().next().unwrap_or('?')),
        ),
        PortalRole::Student => (
            "student-mode",
            "student-chip",
            AvatarGlyph::Icon("avatarStudent"),
        ),
    };
    ShellViewModel {
        role,
        current_page,
        mode_class,
        chip_class,
        portal_type: persona.portal_type,
        portal_title: persona.portal_title,
        portal_subtitle: persona.portal_subtitle,
        user_name: persona.display_name,
        user_role: persona.role_label,
        avatar,
        notification_count: NOTIFICATION_COUNT,
        menu: menu_entries(role)
            .iter()
            .map(|entry| MenuItemView {
                page: entry.page,
                label: entry.label,
                icon: entry.page.as_str(),
                active: entry.page == current_page,
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessageView {
    pub sender_class: &'static str,
    pub text: String,
    pub timestamp: String,
}

fn chat_message_views(
    messages: &[ChatMessage],
    user_class: &'static str,
    support_class: &'static str,
) -> Vec<ChatMessageView> {
    messages
        .iter()
        .map(|message| ChatMessageView {
            sender_class: match message.sender {
                ChatSender::User => user_class,
                ChatSender::Support => support_class,
            },
            text: message.text.clone(),
            timestamp: message.timestamp.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatWidgetViewModel {
    pub open: bool,
    pub title: &'static str,
    pub draft: String,
    pub placeholder: &'static str,
    pub messages: Vec<ChatMessageView>,
}

/// The support widget exists only inside a student portal session.
pub fn chat_widget_view_model(state: &PortalState) -> Option<ChatWidgetViewModel> {
    if state.portal_role() != Some(PortalRole::Student) {
        return None;
    }
    let messages = state.locale.messages();
    Some(ChatWidgetViewModel {
        open: state.chat.is_open(),
        title: messages.chat_title,
        draft: state.chat.draft().to_string(),
        placeholder: messages.chat_placeholder,
        messages: chat_message_views(
            state.chat.messages(),
            "student-chat-user",
            "student-chat-support",
        ),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffConversationView {
    pub name: String,
    pub preview: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffChatViewModel {
    pub active_name: String,
    pub conversations: Vec<StaffConversationView>,
    pub messages: Vec<ChatMessageView>,
    pub draft: String,
}

pub fn staff_chat_view_model(chat: &StaffLiveChat) -> StaffChatViewModel {
    let active_index = chat.active_index();
    let active = chat.active();
    StaffChatViewModel {
        active_name: active.map(|entry| entry.name.clone()).unwrap_or_default(),
        conversations: chat
            .conversations()
            .iter()
            .enumerate()
            .map(|(index, conversation)| StaffConversationView {
                name: conversation.name.clone(),
                preview: conversation.preview.clone(),
                active: index == active_index,
            })
            .collect(),
        messages: active
            .map(|entry| {
                chat_message_views(&entry.messages, "staff-chat-student", "staff-chat-agent")
            })
            .unwrap_or_default(),
        draft: chat.draft().to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalViewModel {
    pub title: String,
    pub body: String,
}

pub fn modal_view_model(state: &PortalState) -> Option<ModalViewModel> {
    state.modal.as_ref().map(|modal| ModalViewModel {
        title: modal.title.clone(),
        body: modal.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::{shell_view_model, staff_chat_view_model, AvatarGlyph};
    use crate::{PageKey, PortalRole, StaffLiveChat};

    #[test]
    fn unit_shell_marks_exactly_one_active_entry() {
        let shell = shell_view_model(PortalRole::Staff, PageKey::Reports);
        let active: Vec<PageKey> = shell
            .menu
            .iter()
            .filter(|item| item.active)
            .map(|item| item.page)
            .collect();
        assert_eq!(active, vec![PageKey::Reports]);
    }

    #[test]
    fn functional_shell_maps_role_chrome() {
        let staff = shell_view_model(PortalRole::Staff, PageKey::Dashboard);
        assert_eq!(staff.portal_title, "International Office Portal");
        assert_eq!(staff.avatar, AvatarGlyph::Letter('O'));
        assert_eq!(staff.notification_count, 3);
        assert_eq!(staff.mode_class, "staff-mode");

        let student = shell_view_model(PortalRole::Student, PageKey::Dashboard);
        assert_eq!(student.portal_type, "Student Portal");
        assert_eq!(student.avatar, AvatarGlyph::Icon("avatarStudent"));
        assert_eq!(student.menu.len(), 4);
    }

    #[test]
    fn regression_shell_with_foreign_page_marks_nothing_active() {
        let shell = shell_view_model(PortalRole::Student, PageKey::Students);
        assert!(shell.menu.iter().all(|item| !item.active));
    }

    #[test]
    fn unit_staff_chat_view_model_tracks_active_conversation() {
        let mut chat = StaffLiveChat::default();
        assert!(chat.select("Mei Ling T."));
        let view = staff_chat_view_model(&chat);
        assert_eq!(view.active_name, "Mei Ling T.");
        assert_eq!(
            view.conversations.iter().filter(|entry| entry.active).count(),
            1
        );
        assert_eq!(view.messages[0].sender_class, "staff-chat-student");
    }
}
