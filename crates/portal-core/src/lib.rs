//! View-state machine and role-scoped view models for the student/staff portal.
//!
//! The portal is modeled as `PortalState × PortalEvent → Vec<PortalEffect>`.
//! Every UI event runs through [`reduce`], which mutates the single owned
//! [`PortalState`] and returns the side effects (auth requests, token
//! persistence, region re-renders) for the controller to execute. View models
//! are derived from state by pure functions in [`view_model`], so the state
//! machine can be exercised without any rendering environment.

pub mod binding;
pub mod chat;
pub mod event;
pub mod locale;
pub mod mock_data;
pub mod portal;
pub mod reducer;
pub mod role;
pub mod router;
pub mod session;
pub mod state;
pub mod view_model;


pub use binding::{UiBinding, UiIntent, UiTrigger};
pub use chat::{ChatMessage, ChatSender, ChatWidget, StaffConversation, StaffLiveChat};
pub use event::{
    AuthRequestKind, LoginGrant, LoginRequest, PortalEffect, PortalEvent, ResendOtpRequest,
    StoredCredentials, TokenGrant, VerifyOtpRequest,
};
pub use locale::{MessageTable, PortalLocale};
pub use portal::{menu_entries, role_has_page, MenuEntry, PortalSession, DEFAULT_PAGE};
pub use reducer::reduce;
pub use role::{PageKey, PortalParseError, PortalRole, PortalScreen};
pub use router::ScreenRouter;
pub use session::{
    Completion, PendingRequest, SessionStore, Submission, OTP_CODE_LENGTH, PASSWORD_MIN_LENGTH,
};
pub use state::{ModalDialog, PortalState};
pub use view_model::{
    chat_widget_view_model, login_view_model, modal_view_model, otp_view_model,
    shell_view_model, staff_chat_view_model, AvatarGlyph, ChatMessageView, ChatWidgetViewModel,
    LoginViewModel, MenuItemView, ModalViewModel, OtpViewModel, ShellViewModel,
    StaffChatViewModel, StaffConversationView,
};
