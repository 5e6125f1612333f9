/// Column holding the team roster (one user name per row)
pub const ROSTER_COL: char = 'A';

/// First column of the attack ledger (attacker, victim, timestamp span D..F)
pub const ATTACK_START_COL: char = 'D';

/// Last column of the attack ledger
pub const ATTACK_END_COL: char = 'F';

/// Number of cells in one attack row
pub const ATTACK_WIDTH: usize = 3;

/// Default base URL of the Google Sheets values/batchUpdate API
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Default OAuth token refresh endpoint
pub const DEFAULT_OAUTH_TOKEN_URL: &str = "https://www.googleapis.com/oauth2/v4/token";

/// Timeout applied to every outbound request against the sheet store
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a blank or missing team name
pub const ERR_EMPTY_TEAM: &str = "Team name must not be empty";

/// Error message for a blank user name on registration
pub const ERR_EMPTY_NAME: &str = "User name must not be empty";

/// Error message for a missing attacker or victim on attack registration
pub const ERR_MISSING_PARTICIPANT: &str = "Both attacker and victim are required";

/// Error message for a delete index outside the submitted snapshot
pub const ERR_INDEX_OUT_OF_RANGE: &str = "Delete index is outside the submitted list";
