use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Every input control bound to the application form, keyed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "fullName")]
    FullName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "phoneNumber")]
    PhoneNumber,
    #[serde(rename = "applyingForPosition")]
    ApplyingForPosition,
    #[serde(rename = "relevantExperience")]
    RelevantExperience,
    #[serde(rename = "portfolioURL")]
    PortfolioUrl,
    #[serde(rename = "managementExperience")]
    ManagementExperience,
    #[serde(rename = "additionalSkills")]
    AdditionalSkills,
    #[serde(rename = "preferredInterviewTime")]
    PreferredInterviewTime,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::FullName,
        FormField::Email,
        FormField::PhoneNumber,
        FormField::ApplyingForPosition,
        FormField::RelevantExperience,
        FormField::PortfolioUrl,
        FormField::ManagementExperience,
        FormField::AdditionalSkills,
        FormField::PreferredInterviewTime,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::PhoneNumber => "phoneNumber",
            FormField::ApplyingForPosition => "applyingForPosition",
            FormField::RelevantExperience => "relevantExperience",
            FormField::PortfolioUrl => "portfolioURL",
            FormField::ManagementExperience => "managementExperience",
            FormField::AdditionalSkills => "additionalSkills",
            FormField::PreferredInterviewTime => "preferredInterviewTime",
        }
    }

    /// Human readable label shown next to the control.
    pub const fn label(self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Email => "Email",
            FormField::PhoneNumber => "Phone Number",
            FormField::ApplyingForPosition => "Applying for Position",
            FormField::RelevantExperience => "Relevant Experience (years)",
            FormField::PortfolioUrl => "Portfolio URL",
            FormField::ManagementExperience => "Management Experience",
            FormField::AdditionalSkills => "Additional Skills",
            FormField::PreferredInterviewTime => "Preferred Interview Time",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = UnknownFieldName;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == value)
            .ok_or_else(|| UnknownFieldName(value.to_string()))
    }
}

/// Skills offered as checkboxes. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Cpp,
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
    Java,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Cpp,
        Skill::JavaScript,
        Skill::Css,
        Skill::Python,
        Skill::Java,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Skill::Cpp => "Cpp",
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
            Skill::Java => "Java",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Skill {
    type Err = UnknownSkillName;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.name() == value)
            .ok_or_else(|| UnknownSkillName(value.to_string()))
    }
}

/// A control reported a field name the form does not know about.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownFieldName(pub String);

/// A checkbox reported a skill the form does not offer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill checkbox '{0}'")]
pub struct UnknownSkillName(pub String);

/// Position selected in the single-select control.
///
/// Values outside the offered options are kept verbatim so the form can echo
/// them back; they never enable any conditional field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    Unset,
    Developer,
    Designer,
    Manager,
    Unrecognized(String),
}

impl Position {
    /// Options offered by the select control, in display order.
    pub const OFFERED: [Position; 3] = [Position::Developer, Position::Designer, Position::Manager];

    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "" => Position::Unset,
            "Developer" => Position::Developer,
            "Designer" => Position::Designer,
            "Manager" => Position::Manager,
            other => Position::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Position::Unset => "",
            Position::Developer => "Developer",
            Position::Designer => "Designer",
            Position::Manager => "Manager",
            Position::Unrecognized(raw) => raw,
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Position::from_raw(&raw))
    }
}

/// Checkbox state for every offered skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSelection(BTreeMap<Skill, bool>);

/// Skills missing from the input stay unchecked.
impl<'de> Deserialize<'de> for SkillSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let given = BTreeMap::<Skill, bool>::deserialize(deserializer)?;
        let mut selection = SkillSelection::default();
        selection.0.extend(given);
        Ok(selection)
    }
}

impl Default for SkillSelection {
    fn default() -> Self {
        Self(Skill::ALL.into_iter().map(|skill| (skill, false)).collect())
    }
}

impl SkillSelection {
    pub fn is_checked(&self, skill: Skill) -> bool {
        self.0.get(&skill).copied().unwrap_or(false)
    }

    pub fn set(&mut self, skill: Skill, checked: bool) {
        self.0.insert(skill, checked);
    }

    /// Flip a checkbox, returning its new state.
    pub fn toggle(&mut self, skill: Skill) -> bool {
        let checked = !self.is_checked(skill);
        self.set(skill, checked);
        checked
    }

    pub fn any_checked(&self) -> bool {
        self.0.values().any(|checked| *checked)
    }

    pub fn checked(&self) -> impl Iterator<Item = Skill> + '_ {
        self.0
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(skill, _)| *skill)
    }
}

/// Everything the applicant has typed so far, including values of fields that
/// are currently hidden.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub applying_for_position: Position,
    pub relevant_experience: String,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: SkillSelection,
    pub preferred_interview_time: String,
}

impl FormData {
    /// Overwrite a text-like field. The skill checkboxes are left alone.
    pub(crate) fn set_text(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::PhoneNumber => &mut self.phone_number,
            FormField::ApplyingForPosition => {
                self.applying_for_position = Position::from_raw(&value);
                return;
            }
            FormField::RelevantExperience => &mut self.relevant_experience,
            FormField::PortfolioUrl => &mut self.portfolio_url,
            FormField::ManagementExperience => &mut self.management_experience,
            FormField::PreferredInterviewTime => &mut self.preferred_interview_time,
            FormField::AdditionalSkills => return,
        };
        *slot = value;
    }
}
