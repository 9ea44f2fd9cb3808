//! Stop references and service alerts.

/// A reference to a physical stop or platform.
///
/// `global_id` is the upstream API's stable identifier and the only field
/// guaranteed consistent across requests; `name` and `platform` are display
/// hints. Platform stays a free-form string here because some platform
/// codes are not purely numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRef {
    /// Display name of the stop.
    pub name: String,
    /// Platform label; empty when not reported.
    pub platform: String,
    /// Stable upstream identifier.
    pub global_id: String,
}

/// A service notice attached to a leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Upstream priority label (e.g. "high", "normal").
    pub priority: String,
    pub title: String,
    /// Notice body; may span multiple lines.
    pub content: String,
    pub url: String,
}
