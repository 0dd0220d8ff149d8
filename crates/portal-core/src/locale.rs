//! Message tables for the portal's user-facing strings.
//!
//! Both portal variants share one state machine; they differ only in the
//! table selected here.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{PortalParseError, PortalRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Public enum `PortalLocale` in `portal-core`.
pub enum PortalLocale {
    #[default]
    English,
    Bilingual,
}

impl PortalLocale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Bilingual => "bilingual",
        }
    }

    pub fn messages(self) -> &'static MessageTable {
        match self {
            Self::English => &ENGLISH_MESSAGES,
            Self::Bilingual => &BILINGUAL_MESSAGES,
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Bilingual => "en-MY",
        }
    }
}

impl fmt::Display for PortalLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortalLocale {
    type Err = PortalParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "bilingual" | "en-ms" | "ms" => Ok(Self::Bilingual),
            _ => Err(PortalParseError::UnsupportedLocale(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `MessageTable` in `portal-core`.
pub struct MessageTable {
    pub missing_credentials: &'static str,
    pub password_too_short: &'static str,
    pub login_first: &'static str,
    pub incomplete_otp: &'static str,
    pub request_failed: &'static str,
    pub otp_sent_hint: &'static str,
    pub otp_resent_fallback: &'static str,
    pub resend_otp_title: &'static str,
    pub demo_action_title: &'static str,
    pub demo_action_prefix: &'static str,
    pub student_id_label: &'static str,
    pub staff_id_label: &'static str,
    pub student_id_placeholder: &'static str,
    pub staff_id_placeholder: &'static str,
    pub login_as_student: &'static str,
    pub login_as_staff: &'static str,
    pub chat_placeholder: &'static str,
    pub chat_title: &'static str,
}

impl MessageTable {
    pub fn id_label(&self, role: PortalRole) -> &'static str {
        match role {
            PortalRole::Student => self.student_id_label,
            PortalRole::Staff => self.staff_id_label,
        }
    }

    pub fn id_placeholder(&self, role: PortalRole) -> &'static str {
        match role {
            PortalRole::Student => self.student_id_placeholder,
            PortalRole::Staff => self.staff_id_placeholder,
        }
    }

    pub fn login_button(&self, role: PortalRole) -> &'static str {
        match role {
            PortalRole::Student => self.login_as_student,
            PortalRole::Staff => self.login_as_staff,
        }
    }

    pub fn demo_action_body(&self, action: &str) -> String {
        format!("{}: {action}", self.demo_action_prefix)
    }
}

static ENGLISH_MESSAGES: MessageTable = MessageTable {
    missing_credentials: "Please enter ID and password",
    password_too_short: "Password must be at least 6 characters",
    login_first: "Please login first",
    incomplete_otp: "Please enter complete 6-digit OTP",
    request_failed: "Request failed",
    otp_sent_hint: "We've sent a 6-digit code to your email",
    otp_resent_fallback: "OTP has been resent.",
    resend_otp_title: "Resend OTP",
    demo_action_title: "Demo Action",
    demo_action_prefix: "Triggered",
    student_id_label: "Student ID",
    staff_id_label: "Staff ID",
    student_id_placeholder: "Enter your student ID",
    staff_id_placeholder: "Enter your staff ID",
    login_as_student: "Login as Student",
    login_as_staff: "Login as Staff",
    chat_placeholder: "Type a message...",
    chat_title: "Support Chat",
};

static BILINGUAL_MESSAGES: MessageTable = MessageTable {
    missing_credentials: "Please enter ID and password / Sila masukkan ID dan kata laluan",
    password_too_short:
        "Password must be at least 6 characters / Kata laluan mesti sekurang-kurangnya 6 aksara",
    login_first: "Please login first / Sila log masuk dahulu",
    incomplete_otp: "Please enter complete 6-digit OTP / Sila masukkan OTP 6 digit yang lengkap",
    request_failed: "Request failed / Permintaan gagal",
    otp_sent_hint:
        "We've sent a 6-digit code to your email / Kod 6 digit telah dihantar ke e-mel anda",
    otp_resent_fallback: "OTP has been resent. / OTP telah dihantar semula.",
    resend_otp_title: "Resend OTP / Hantar Semula OTP",
    demo_action_title: "Demo Action / Tindakan Demo",
    demo_action_prefix: "Triggered / Dicetuskan",
    student_id_label: "Student ID / ID Pelajar",
    staff_id_label: "Staff ID / ID Kakitangan",
    student_id_placeholder: "Enter your student ID / Masukkan ID pelajar anda",
    staff_id_placeholder: "Enter your staff ID / Masukkan ID kakitangan anda",
    login_as_student: "Login as Student / Log Masuk Pelajar",
    login_as_staff: "Login as Staff / Log Masuk Kakitangan",
    chat_placeholder: "Type a message... / Taip mesej...",
    chat_title: "Support Chat / Sembang Sokongan",
};
