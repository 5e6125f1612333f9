//! Request field validation shared across routes.

use crate::constants::ERR_EMPTY_TEAM;
use crate::error::{AppError, Result};

/// Reject a blank or whitespace-only required field, reporting `message`
pub fn require_field(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

/// Reject a blank team name; every route is team-scoped
pub fn require_team(team_name: &str) -> Result<()> {
    require_field(team_name, ERR_EMPTY_TEAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field_accepts_content() {
        assert!(require_field("ann", "missing").is_ok());
    }

    #[test]
    fn test_require_field_rejects_blank_and_whitespace() {
        assert!(require_field("", "missing").is_err());
        assert!(require_field("   ", "missing").is_err());
    }

    #[test]
    fn test_require_team_reports_team_message() {
        let err = require_team(" ").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Invalid input: {}", ERR_EMPTY_TEAM)
        );
    }
}
