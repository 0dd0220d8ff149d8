//! Scripted UI sessions. Each step is played through the handler bindings
//! of the currently rendered document, the same way a user's clicks and
//! keystrokes would reach the controller.

use std::path::{Path, PathBuf};

use portal_auth::{AuthGateway, TokenStore};
use portal_core::{PageKey, PortalRole, UiTrigger};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Cli;
use crate::controller::PortalController;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    ChooseRole { role: PortalRole },
    Login { identity: String, password: String },
    Otp { code: String },
    Resend,
    Page { page: PageKey },
    ToggleChat,
    Chat { text: String },
    SelectConversation { name: String },
    StaffReply { text: String },
    DemoAction { name: String },
    DismissModal,
    Logout,
}

impl ScenarioStep {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChooseRole { .. } => "choose_role",
            Self::Login { .. } => "login",
            Self::Otp { .. } => "otp",
            Self::Resend => "resend",
            Self::Page { .. } => "page",
            Self::ToggleChat => "toggle_chat",
            Self::Chat { .. } => "chat",
            Self::SelectConversation { .. } => "select_conversation",
            Self::StaffReply { .. } => "staff_reply",
            Self::DemoAction { .. } => "demo_action",
            Self::DismissModal => "dismiss_modal",
            Self::Logout => "logout",
        }
    }
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario script {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("step {step} ({action}): no {trigger} handler for '{element_id}' on the {screen} screen")]
    MissingBinding {
        step: usize,
        action: &'static str,
        element_id: String,
        trigger: &'static str,
        screen: &'static str,
    },
    #[error("step {step}: no staff conversation named '{name}'")]
    UnknownConversation { step: usize, name: String },
}

pub fn load_script(path: &Path) -> Result<Vec<ScenarioStep>, ScenarioError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ScenarioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Translates the step flags into a script: choose the role, log in when
/// credentials are given, then visit pages, chat and optionally log out.
pub fn steps_from_cli(cli: &Cli) -> Vec<ScenarioStep> {
    let mut steps = vec![ScenarioStep::ChooseRole { role: cli.role }];
    if let (Some(identity), Some(password)) = (&cli.identity, &cli.password) {
        steps.push(ScenarioStep::Login {
            identity: identity.clone(),
            password: password.clone(),
        });
        if let Some(code) = &cli.otp {
            steps.push(ScenarioStep::Otp { code: code.clone() });
        }
    }
    steps.extend(
        cli.pages
            .iter()
            .map(|page| ScenarioStep::Page { page: *page }),
    );
    if !cli.chat.is_empty() {
        match cli.role {
            PortalRole::Student => {
                steps.push(ScenarioStep::ToggleChat);
                steps.extend(
                    cli.chat
                        .iter()
                        .map(|text| ScenarioStep::Chat { text: text.clone() }),
                );
            }
            PortalRole::Staff => {
                if cli.pages.last() != Some(&PageKey::Chat) {
                    steps.push(ScenarioStep::Page {
                        page: PageKey::Chat,
                    });
                }
                steps.extend(
                    cli.chat
                        .iter()
                        .map(|text| ScenarioStep::StaffReply { text: text.clone() }),
                );
            }
        }
    }
    if cli.logout {
        steps.push(ScenarioStep::Logout);
    }
    steps
}

struct StepDriver<'c, G, S> {
    controller: &'c mut PortalController<G, S>,
    step: usize,
    action: &'static str,
}

impl<G, S> StepDriver<'_, G, S>
where
    G: AuthGateway,
    S: TokenStore,
{
    fn fire(
        &mut self,
        element_id: &str,
        trigger: UiTrigger,
        payload: Option<&str>,
    ) -> Result<(), ScenarioError> {
        match self
            .controller
            .dispatch_binding(element_id, trigger, payload)
        {
            Some(_) => Ok(()),
            None => Err(ScenarioError::MissingBinding {
                step: self.step,
                action: self.action,
                element_id: element_id.to_string(),
                trigger: trigger.as_str(),
                screen: self.controller.state().screen().as_str(),
            }),
        }
    }

    fn click(&mut self, element_id: &str) -> Result<(), ScenarioError> {
        self.fire(element_id, UiTrigger::Click, None)
    }

    fn type_text(&mut self, element_id: &str, text: &str) -> Result<(), ScenarioError> {
        self.fire(element_id, UiTrigger::Input, Some(text))
    }
}

/// Plays `steps` against `controller`, settling outstanding auth requests
/// after every step.
pub async fn run_scenario<G, S>(
    controller: &mut PortalController<G, S>,
    steps: &[ScenarioStep],
) -> Result<(), ScenarioError>
where
    G: AuthGateway,
    S: TokenStore,
{
    for (index, step) in steps.iter().enumerate() {
        let step_number = index + 1;
        tracing::info!(step = step_number, action = step.name(), "scenario step");
        let mut driver = StepDriver {
            controller: &mut *controller,
            step: step_number,
            action: step.name(),
        };
        match step {
            ScenarioStep::ChooseRole { role } => {
                let landing = format!("landing-role-{}", role.as_str());
                if driver.click(&landing).is_err() {
                    driver.click(&format!("login-tab-{}", role.as_str()))?;
                }
            }
            ScenarioStep::Login { identity, password } => {
                driver.type_text("login-identity", identity)?;
                driver.type_text("login-password", password)?;
                driver.click("login-submit")?;
            }
            ScenarioStep::Otp { code } => {
                for (cell, digit) in code.chars().enumerate() {
                    driver.type_text(&format!("otp-cell-{cell}"), &digit.to_string())?;
                }
                driver.click("otp-verify")?;
            }
            ScenarioStep::Resend => driver.click("otp-resend")?,
            ScenarioStep::Page { page } => driver.click(&format!("portal-menu-{}", page.as_str()))?,
            ScenarioStep::ToggleChat => driver.click("chat-toggle")?,
            ScenarioStep::Chat { text } => {
                driver.type_text("chat-input", text)?;
                driver.click("chat-send")?;
            }
            ScenarioStep::SelectConversation { name } => {
                let position = driver
                    .controller
                    .state()
                    .staff_chat
                    .conversations()
                    .iter()
                    .position(|conversation| &conversation.name == name)
                    .ok_or_else(|| ScenarioError::UnknownConversation {
                        step: step_number,
                        name: name.clone(),
                    })?;
                driver.click(&format!("staff-chat-conversation-{position}"))?;
            }
            ScenarioStep::StaffReply { text } => {
                driver.type_text("staff-chat-input", text)?;
                driver.click("staff-chat-send")?;
            }
            ScenarioStep::DemoAction { name } => {
                driver.click(&format!("portal-action-{name}"))?;
            }
            ScenarioStep::DismissModal => driver.click("portal-modal-ok")?,
            ScenarioStep::Logout => driver.click("portal-logout")?,
        }
        controller.settle().await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{run_scenario, steps_from_cli, ScenarioError, ScenarioStep};
    use crate::config::Cli;
    use crate::controller::PortalController;
    use portal_auth::{MemoryTokenStore, MockAuthGateway};
    use portal_core::{ChatSender, PageKey, PortalLocale, PortalRole, PortalScreen};

    fn controller() -> PortalController<MockAuthGateway, MemoryTokenStore> {
        PortalController::new(
            PortalLocale::English,
            MockAuthGateway::default(),
            MemoryTokenStore::new(),
        )
    }

    fn login_steps(role: PortalRole) -> Vec<ScenarioStep> {
        vec![
            ScenarioStep::ChooseRole { role },
            ScenarioStep::Login {
                identity: "ST123456".to_string(),
                password: "secret1".to_string(),
            },
            ScenarioStep::Otp {
                code: "123456".to_string(),
            },
        ]
    }

    #[test]
    fn unit_script_steps_use_action_tag() {
        let steps: Vec<ScenarioStep> = serde_json::from_str(
            r#"[
                {"action": "choose_role", "role": "staff"},
                {"action": "page", "page": "reports"},
                {"action": "demo_action", "name": "view-visa-status"},
                {"action": "dismiss_modal"}
            ]"#,
        )
        .expect("script");
        assert_eq!(
            steps,
            vec![
                ScenarioStep::ChooseRole {
                    role: PortalRole::Staff
                },
                ScenarioStep::Page {
                    page: PageKey::Reports
                },
                ScenarioStep::DemoAction {
                    name: "view-visa-status".to_string()
                },
                ScenarioStep::DismissModal,
            ]
        );
    }

    #[test]
    fn functional_staff_chat_flags_open_chat_page_first() {
        let cli = Cli::try_parse_from([
            "portal-shell",
            "--role",
            "staff",
            "--identity",
            "STAFF01",
            "--password",
            "secret1",
            "--otp",
            "123456",
            "--chat",
            "On it",
            "--logout",
        ])
        .expect("cli");
        let steps = steps_from_cli(&cli);
        let names: Vec<&str> = steps.iter().map(ScenarioStep::name).collect();
        assert_eq!(
            names,
            vec!["choose_role", "login", "otp", "page", "staff_reply", "logout"]
        );
    }

    #[test]
    fn unit_missing_credentials_skip_login() {
        let cli = Cli::try_parse_from(["portal-shell", "--otp", "123456"]).expect("cli");
        assert_eq!(
            steps_from_cli(&cli),
            vec![ScenarioStep::ChooseRole {
                role: PortalRole::Student
            }]
        );
    }

    #[tokio::test]
    async fn functional_student_scenario_reaches_portal_and_chats() {
        let mut controller = controller();
        let mut steps = login_steps(PortalRole::Student);
        steps.extend([
            ScenarioStep::Page {
                page: PageKey::Documents,
            },
            ScenarioStep::ToggleChat,
            ScenarioStep::Chat {
                text: "Where is my visa?".to_string(),
            },
        ]);
        run_scenario(&mut controller, &steps)
            .await
            .expect("scenario");

        let state = controller.state();
        assert_eq!(state.screen(), PortalScreen::Portal);
        assert_eq!(state.current_page(), Some(PageKey::Documents));
        assert!(state.chat.is_open());
        let last = state.chat.messages().last().expect("message");
        assert_eq!(last.sender, ChatSender::User);
        assert_eq!(last.text, "Where is my visa?");
    }

    #[tokio::test]
    async fn functional_staff_scenario_replies_in_selected_conversation() {
        let mut controller = controller();
        let name = {
            let staff_chat = &controller.state().staff_chat;
            staff_chat.conversations()[1].name.clone()
        };
        let mut steps = login_steps(PortalRole::Staff);
        steps.extend([
            ScenarioStep::Page {
                page: PageKey::Chat,
            },
            ScenarioStep::SelectConversation { name: name.clone() },
            ScenarioStep::StaffReply {
                text: "Your documents are ready".to_string(),
            },
        ]);
        run_scenario(&mut controller, &steps)
            .await
            .expect("scenario");

        let active = controller.state().staff_chat.active().expect("active");
        assert_eq!(active.name, name);
        assert_eq!(active.preview, "Your documents are ready");
    }

    #[tokio::test]
    async fn functional_demo_action_step_opens_and_dismisses_modal() {
        let mut controller = controller();
        let mut steps = login_steps(PortalRole::Student);
        steps.push(ScenarioStep::DemoAction {
            name: "view-visa-status".to_string(),
        });
        run_scenario(&mut controller, &steps)
            .await
            .expect("scenario");
        let modal = controller.state().modal.as_ref().expect("modal open");
        assert_eq!(modal.body, "Triggered: view-visa-status");

        run_scenario(&mut controller, &[ScenarioStep::DismissModal])
            .await
            .expect("dismiss");
        assert!(controller.state().modal.is_none());
    }

    #[tokio::test]
    async fn regression_step_on_wrong_screen_reports_missing_binding() {
        let mut controller = controller();
        let steps = vec![ScenarioStep::Page {
            page: PageKey::Visa,
        }];
        let error = run_scenario(&mut controller, &steps)
            .await
            .expect_err("not logged in");
        match error {
            ScenarioError::MissingBinding {
                step,
                element_id,
                screen,
                ..
            } => {
                assert_eq!(step, 1);
                assert_eq!(element_id, "portal-menu-visa");
                assert_eq!(screen, "landing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
