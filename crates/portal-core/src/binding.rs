//! Handler bindings emitted alongside rendered markup.
//!
//! A render call returns the bindings for the nodes it produced; the document
//! replaces the bindings of a region wholesale whenever that region is
//! redrawn, so handlers never accumulate across re-renders.

use crate::PortalEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiTrigger {
    Click,
    Input,
    KeyDown,
}

impl UiTrigger {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
            Self::KeyDown => "keydown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a bound node turns into when its trigger fires.
pub enum UiIntent {
    /// Fires a fixed event regardless of payload.
    Fire(PortalEvent),
    IdentityField,
    PasswordField,
    OtpCell(usize),
    ChatDraft,
    ChatKey,
    StaffChatDraft,
    StaffChatKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `UiBinding` in `portal-core`.
pub struct UiBinding {
    pub element_id: String,
    pub trigger: UiTrigger,
    pub intent: UiIntent,
}

impl UiBinding {
    pub fn click(element_id: impl Into<String>, event: PortalEvent) -> Self {
        Self {
            element_id: element_id.into(),
            trigger: UiTrigger::Click,
            intent: UiIntent::Fire(event),
        }
    }

    pub fn input(element_id: impl Into<String>, intent: UiIntent) -> Self {
        Self {
            element_id: element_id.into(),
            trigger: UiTrigger::Input,
            intent,
        }
    }

    pub fn key_down(element_id: impl Into<String>, intent: UiIntent) -> Self {
        Self {
            element_id: element_id.into(),
            trigger: UiTrigger::KeyDown,
            intent,
        }
    }

    /// Converts a fired trigger into an event. `payload` is the input value
    /// for `Input` triggers and the key name for `KeyDown` triggers.
    pub fn to_event(&self, payload: Option<&str>) -> Option<PortalEvent> {
        let value = || payload.unwrap_or_default().to_string();
        match &self.intent {
            UiIntent::Fire(event) => Some(event.clone()),
            UiIntent::IdentityField => Some(PortalEvent::IdentityInput(value())),
            UiIntent::PasswordField => Some(PortalEvent::PasswordInput(value())),
            UiIntent::OtpCell(index) => Some(PortalEvent::OtpCellInput {
                index: *index,
                value: value(),
            }),
            UiIntent::ChatDraft => Some(PortalEvent::ChatInput(value())),
            UiIntent::ChatKey => payload.map(|key| PortalEvent::ChatKeyDown(key.to_string())),
            UiIntent::StaffChatDraft => Some(PortalEvent::StaffChatInput(value())),
            UiIntent::StaffChatKey => {
                payload.map(|key| PortalEvent::StaffChatKeyDown(key.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{UiBinding, UiIntent};
    use crate::{PageKey, PortalEvent};

    #[test]
    fn unit_click_binding_fires_fixed_event() {
        let binding = UiBinding::click("menu-visa", PortalEvent::SelectPage(PageKey::Visa));
        assert_eq!(
            binding.to_event(Some("ignored")),
            Some(PortalEvent::SelectPage(PageKey::Visa))
        );
    }

    #[test]
    fn unit_input_binding_carries_payload() {
        let binding = UiBinding::input("otp-3", UiIntent::OtpCell(3));
        assert_eq!(
            binding.to_event(Some("7")),
            Some(PortalEvent::OtpCellInput {
                index: 3,
                value: "7".to_string()
            })
        );
    }

    #[test]
    fn regression_key_binding_without_key_yields_nothing() {
        let binding = UiBinding::key_down("chat-input", UiIntent::ChatKey);
        assert_eq!(binding.to_event(None), None);
    }
}
