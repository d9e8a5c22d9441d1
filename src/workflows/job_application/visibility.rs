use serde::Serialize;

use super::domain::{FormField, Position};

/// Conditional fields enabled by the selected position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityFlags {
    pub show_relevant_experience: bool,
    #[serde(rename = "showPortfolioURL")]
    pub show_portfolio_url: bool,
    pub show_management_experience: bool,
}

impl VisibilityFlags {
    /// Conditional fields in display order.
    pub const CONDITIONAL: [FormField; 3] = [
        FormField::RelevantExperience,
        FormField::PortfolioUrl,
        FormField::ManagementExperience,
    ];

    pub fn for_position(position: &Position) -> Self {
        match position {
            Position::Developer => Self {
                show_relevant_experience: true,
                ..Self::default()
            },
            Position::Designer => Self {
                show_relevant_experience: true,
                show_portfolio_url: true,
                ..Self::default()
            },
            Position::Manager => Self {
                show_management_experience: true,
                ..Self::default()
            },
            Position::Unset | Position::Unrecognized(_) => Self::default(),
        }
    }

    /// Fields without a visibility rule are always shown.
    pub fn is_visible(&self, field: FormField) -> bool {
        match field {
            FormField::RelevantExperience => self.show_relevant_experience,
            FormField::PortfolioUrl => self.show_portfolio_url,
            FormField::ManagementExperience => self.show_management_experience,
            _ => true,
        }
    }

    pub fn hidden_fields(&self) -> Vec<FormField> {
        Self::CONDITIONAL
            .into_iter()
            .filter(|field| !self.is_visible(*field))
            .collect()
    }
}
