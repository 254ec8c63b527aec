//! Résumé content, bundled as `content/profile.json` and deserialized once at
//! start-up. Every list renders in file order; nothing is sorted or deduplicated.

use serde::{Deserialize, Serialize};

use crate::components::badge::BadgeVariant;
use crate::error::PortfolioError;

const BUNDLED_PROFILE: &str = include_str!("../content/profile.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub contacts: Vec<ContactLink>,
    pub objective: String,
    pub skill_groups: Vec<SkillGroup>,
    pub soft_skills: Vec<String>,
    pub education: Vec<EducationRecord>,
    pub certifications: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub personal_details: Vec<PersonalDetail>,
    pub copyright: String,
}

impl Profile {
    pub fn from_json(json: &str) -> Result<Self, PortfolioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bundled() -> Result<Self, PortfolioError> {
        Self::from_json(BUNDLED_PROFILE)
    }

    /// Contacts repeated in the footer (everything except the phone number).
    pub fn footer_contacts(&self) -> impl Iterator<Item = &ContactLink> {
        self.contacts.iter().filter(|c| c.kind != ContactKind::Phone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Linkedin,
    Github,
}

impl ContactKind {
    pub fn icon(self) -> &'static str {
        match self {
            ContactKind::Email => "\u{2709}",
            ContactKind::Phone => "\u{260E}",
            ContactKind::Linkedin => "in",
            ContactKind::Github => "\u{2325}",
        }
    }

    /// Profile links open in a new tab; `mailto:`/`tel:` do not.
    pub fn is_external(self) -> bool {
        matches!(self, ContactKind::Linkedin | ContactKind::Github)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ContactKind::Email => "contact-chip contact-email",
            ContactKind::Phone => "contact-chip contact-phone",
            ContactKind::Linkedin => "contact-chip contact-linkedin",
            ContactKind::Github => "contact-chip contact-github",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl EducationRecord {
    /// CGPA badge (outlined) followed by the status badge.
    pub fn badges(&self) -> Vec<(String, BadgeVariant)> {
        let mut badges = Vec::new();
        if let Some(cgpa) = &self.cgpa {
            badges.push((format!("CGPA: {}", cgpa), BadgeVariant::Outline));
        }
        if let Some(status) = &self.status {
            badges.push((status.clone(), BadgeVariant::Default));
        }
        badges
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub duration: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetail {
    pub label: String,
    pub value: String,
}
