use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Portal persona selecting the menu table and the page resolver table.
pub enum PortalRole {
    #[default]
    Student,
    Staff,
}

impl PortalRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Staff => "staff",
        }
    }

    pub fn is_staff(self) -> bool {
        matches!(self, Self::Staff)
    }
}

impl fmt::Display for PortalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Top-level mutually exclusive UI mode.
pub enum PortalScreen {
    #[default]
    Landing,
    Login,
    OtpVerify,
    Portal,
}

impl PortalScreen {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Login => "login",
            Self::OtpVerify => "otp",
            Self::Portal => "portal",
        }
    }
}

impl fmt::Display for PortalScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Content panel identifier within the Portal screen.
///
/// Keys are shared between roles where the menus overlap; whether a
/// key is valid for a role is decided by [`crate::menu_entries`].
pub enum PageKey {
    Dashboard,
    Students,
    Visa,
    Documents,
    Appointments,
    Chat,
    Reports,
}

impl PageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Students => "students",
            Self::Visa => "visa",
            Self::Documents => "documents",
            Self::Appointments => "appointments",
            Self::Chat => "chat",
            Self::Reports => "reports",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Enumerates parse failures for portal identifiers.
pub enum PortalParseError {
    #[error("unsupported role '{0}'; supported roles are student, staff")]
    UnsupportedRole(String),
    #[error("unsupported page '{0}'; supported pages are dashboard, students, visa, documents, appointments, chat, reports")]
    UnsupportedPage(String),
    #[error("unsupported locale '{0}'; supported locales are english, bilingual")]
    UnsupportedLocale(String),
}

impl FromStr for PortalRole {
    type Err = PortalParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "staff" => Ok(Self::Staff),
            _ => Err(PortalParseError::UnsupportedRole(value.to_string())),
        }
    }
}

impl FromStr for PageKey {
    type Err = PortalParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Self::Dashboard),
            "students" => Ok(Self::Students),
            "visa" => Ok(Self::Visa),
            "documents" => Ok(Self::Documents),
            "appointments" => Ok(Self::Appointments),
            "chat" => Ok(Self::Chat),
            "reports" => Ok(Self::Reports),
            _ => Err(PortalParseError::UnsupportedPage(value.to_string())),
        }
    }
}
