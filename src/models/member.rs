//! Member model and related types

use validator::Validate;

use crate::error::AppResult;

/// Library member. Identifiers are supplied by the caller and are not
/// checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub id: String,
    pub contact_info: String,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            contact_info: contact_info.into(),
        }
    }

    /// Formatted details, or `None` when `member_id` is given and names
    /// another member.
    pub fn display_details(&self, member_id: Option<&str>) -> Option<String> {
        match member_id {
            Some(id) if id != self.id => None,
            _ => Some(self.to_string()),
        }
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "ID: {}", self.id)?;
        write!(f, "Contact Info: {}", self.contact_info)
    }
}

/// Member registration input
#[derive(Debug, Clone, Validate)]
pub struct NewMember {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "ID is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Contact info is required"))]
    pub contact_info: String,
}

impl NewMember {
    pub fn into_member(self) -> AppResult<Member> {
        self.validate()?;
        Ok(Member::new(self.name, self.id, self.contact_info))
    }
}
