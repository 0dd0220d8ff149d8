use leptos::prelude::*;
use portal_core::{
    login_view_model, otp_view_model, LoginViewModel, OtpViewModel, PortalEvent, PortalRole,
    PortalScreen, PortalState, UiBinding, UiIntent,
};

use crate::{flag, RenderedRegion};

/// Renders the active top-level screen. The portal screen is only a frame;
/// its chrome, body and chat widget are separate regions.
pub fn render_screen(state: &PortalState) -> RenderedRegion {
    match state.screen() {
        PortalScreen::Landing => render_landing(),
        PortalScreen::Login => render_login(&login_view_model(state)),
        PortalScreen::OtpVerify => render_otp(&otp_view_model(state)),
        PortalScreen::Portal => {
            let role = state.role().as_str();
            let html = view! {
                <section id="portal-screen" class="screen active" data-screen="portal" data-role=role>
                    <div id="portal-shell-slot"></div>
                    <div id="portal-page-slot"></div>
                </section>
            }
            .to_html();
            RenderedRegion::new(html, Vec::new())
        }
    }
}

fn render_landing() -> RenderedRegion {
    let html = view! {
        <section id="landing-screen" class="screen active" data-screen="landing">
            <h1>"International Student Portal"</h1>
            <p class="landing-tagline">"Choose how you want to sign in."</p>
            <div class="landing-roles">
                <button id="landing-role-student" class="role-card" data-role="student" type="button">
                    "I am a Student"
                </button>
                <button id="landing-role-staff" class="role-card" data-role="staff" type="button">
                    "I am Staff"
                </button>
            </div>
            <a id="landing-go-login" class="landing-login-link" href="#login">"Go to login"</a>
        </section>
    }
    .to_html();
    let bindings = vec![
        UiBinding::click(
            "landing-role-student",
            PortalEvent::ChooseRole(PortalRole::Student),
        ),
        UiBinding::click(
            "landing-role-staff",
            PortalEvent::ChooseRole(PortalRole::Staff),
        ),
        UiBinding::click("landing-go-login", PortalEvent::GoToLogin),
    ];
    RenderedRegion::new(html, bindings)
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "role-tab active"
    } else {
        "role-tab"
    }
}

fn render_login(model: &LoginViewModel) -> RenderedRegion {
    let role = model.role.as_str();
    let error_hidden = flag(model.error.is_empty());
    let html = view! {
        <section id="login-screen" class="screen active" data-screen="login" data-role=role>
            <button id="login-back" class="back-link" type="button">"Back"</button>
            <div class="role-tabs" role="tablist">
                <button
                    id="login-tab-student"
                    class=tab_class(model.student_tab_active)
                    data-role="student"
                    aria-selected=flag(model.student_tab_active)
                    type="button"
                >
                    "Student"
                </button>
                <button
                    id="login-tab-staff"
                    class=tab_class(model.staff_tab_active)
                    data-role="staff"
                    aria-selected=flag(model.staff_tab_active)
                    type="button"
                >
                    "Staff"
                </button>
            </div>
            <form id="login-form">
                <label id="login-id-label" for="login-identity">{model.id_label}</label>
                <input
                    id="login-identity"
                    type="text"
                    autocomplete="username"
                    placeholder=model.id_placeholder
                    value=model.identity.clone()
                />
                <label for="login-password">"Password"</label>
                <input id="login-password" type="password" autocomplete="current-password" />
                <p id="login-error" class="form-error" aria-hidden=error_hidden>
                    {model.error.clone()}
                </p>
                <button
                    id="login-submit"
                    type="submit"
                    data-busy=flag(model.busy)
                    aria-busy=flag(model.busy)
                >
                    {model.submit_label}
                </button>
            </form>
        </section>
    }
    .to_html();
    let bindings = vec![
        UiBinding::click("login-back", PortalEvent::BackToLanding),
        UiBinding::click(
            "login-tab-student",
            PortalEvent::SelectRoleTab(PortalRole::Student),
        ),
        UiBinding::click(
            "login-tab-staff",
            PortalEvent::SelectRoleTab(PortalRole::Staff),
        ),
        UiBinding::input("login-identity", UiIntent::IdentityField),
        UiBinding::input("login-password", UiIntent::PasswordField),
        UiBinding::click("login-submit", PortalEvent::SubmitLogin),
    ];
    RenderedRegion::new(html, bindings)
}

fn render_otp(model: &OtpViewModel) -> RenderedRegion {
    let error_hidden = flag(model.error.is_empty());
    let cells = model
        .cells
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let cell_id = format!("otp-cell-{index}");
            view! {
                <input
                    id=cell_id
                    class="otp-cell"
                    type="text"
                    inputmode="numeric"
                    maxlength="1"
                    data-index=index.to_string()
                    value=value.clone()
                />
            }
        })
        .collect_view();
    let html = view! {
        <section id="otp-screen" class="screen active" data-screen="otp">
            <h2>"Verify your identity"</h2>
            <p id="otp-hint" class="otp-hint">{model.hint.clone()}</p>
            <div id="otp-cells" class="otp-cells">{cells}</div>
            <p id="otp-error" class="form-error" aria-hidden=error_hidden>
                {model.error.clone()}
            </p>
            <button id="otp-verify" type="button" data-busy=flag(model.verify_busy)>
                "Verify"
            </button>
            <a id="otp-resend" class="otp-resend" href="#resend" data-busy=flag(model.resend_busy)>
                "Resend OTP"
            </a>
        </section>
    }
    .to_html();
    let mut bindings: Vec<UiBinding> = (0..model.cells.len())
        .map(|index| UiBinding::input(format!("otp-cell-{index}"), UiIntent::OtpCell(index)))
        .collect();
    bindings.push(UiBinding::click("otp-verify", PortalEvent::VerifyOtp));
    bindings.push(UiBinding::click("otp-resend", PortalEvent::ResendOtp));
    RenderedRegion::new(html, bindings)
}
