//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Static Content
// =============================================================================

/// Directory served under `/public`
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Landing page served at `/`
pub const DEFAULT_INDEX_FILE: &str = "views/index.html";

/// URL prefix for static assets
pub const PUBLIC_ROUTE_PREFIX: &str = "/public";

// =============================================================================
// Exercises
// =============================================================================

/// Calendar rendering used for exercise dates (e.g. `Mon Jan 01 2024`)
pub const CALENDAR_DATE_FORMAT: &str = "%a %b %d %Y";

/// Path id the legacy form submits when no user id was entered
pub const PLACEHOLDER_USER_ID: &str = "0";

// =============================================================================
// Error Messages
// =============================================================================

pub const MSG_USERNAME_REQUIRED: &str = "username is required";
pub const MSG_USERNAME_TAKEN: &str = "username already exists";
pub const MSG_USER_ID_REQUIRED: &str = "_id is required";
pub const MSG_DESCRIPTION_REQUIRED: &str = "description is required";
pub const MSG_DURATION_REQUIRED: &str = "duration is required";
pub const MSG_DURATION_NOT_NUMBER: &str = "duration is not a number";
pub const MSG_DURATION_TOO_SHORT: &str = "duration must be at least 1 minute";
pub const MSG_DATE_INVALID: &str = "date is invalid";
pub const MSG_FROM_DATE_INVALID: &str = "from date is invalid";
pub const MSG_TO_DATE_INVALID: &str = "to date is invalid";
pub const MSG_LIMIT_NOT_NUMBER: &str = "limit is not a number";
pub const MSG_USER_NOT_FOUND: &str = "user not found";

/// Body of the plain-text 404 for unmatched routes
pub const MSG_ROUTE_NOT_FOUND: &str = "not found";

/// Body of the plain-text 500 response
pub const MSG_INTERNAL_ERROR: &str = "Internal Server Error";
