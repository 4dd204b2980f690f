//! Build-Time Configuration

/// Base URL of the remote task service.
///
/// Override at build time with `TASKDECK_API_URL`; the default `/api` prefix
/// is what the trunk dev proxy forwards to the backend.
pub fn api_base_url() -> &'static str {
    option_env!("TASKDECK_API_URL").unwrap_or("/api")
}
