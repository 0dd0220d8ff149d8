use serde::{Deserialize, Serialize};

use crate::mock_data::{staff_conversations, support_chat_seed, USER_MESSAGE_TIME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Public enum `ChatSender` in `portal-core`.
pub enum ChatSender {
    User,
    Support,
}

impl ChatSender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Support => "support",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Public struct `ChatMessage` in `portal-core`.
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(sender: ChatSender, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Student support widget state: open flag, draft buffer, append-only log.
pub struct ChatWidget {
    is_open: bool,
    draft: String,
    messages: Vec<ChatMessage>,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self {
            is_open: false,
            draft: String::new(),
            messages: support_chat_seed(),
        }
    }
}

impl ChatWidget {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Appends the trimmed draft as a user message and opens the panel.
    ///
    /// Blank drafts are left untouched and return `false`.
    pub fn send(&mut self) -> bool {
        let text = self.draft.trim();
        if text.is_empty() {
            return false;
        }
        self.messages
            .push(ChatMessage::new(ChatSender::User, text, USER_MESSAGE_TIME));
        self.draft.clear();
        self.is_open = true;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `StaffConversation` in `portal-core`.
pub struct StaffConversation {
    pub name: String,
    pub preview: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Staff live-chat page state: conversation selector plus per-conversation log.
pub struct StaffLiveChat {
    conversations: Vec<StaffConversation>,
    active: usize,
    draft: String,
}

impl Default for StaffLiveChat {
    fn default() -> Self {
        Self::new(staff_conversations())
    }
}

impl StaffLiveChat {
    pub fn new(conversations: Vec<StaffConversation>) -> Self {
        Self {
            conversations,
            active: 0,
            draft: String::new(),
        }
    }

    pub fn conversations(&self) -> &[StaffConversation] {
        &self.conversations
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&StaffConversation> {
        self.conversations.get(self.active)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Makes `name` the active conversation. Unknown names are ignored.
    pub fn select(&mut self, name: &str) -> bool {
        match self
            .conversations
            .iter()
            .position(|conversation| conversation.name == name)
        {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    pub fn send(&mut self) -> bool {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return false;
        }
        let Some(conversation) = self.conversations.get_mut(self.active) else {
            return false;
        };
        conversation.preview = text.clone();
        conversation
            .messages
            .push(ChatMessage::new(ChatSender::Support, text, USER_MESSAGE_TIME));
        self.draft.clear();
        true
    }
}
