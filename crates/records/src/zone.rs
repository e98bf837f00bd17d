//! Zones and the conversion of record names between zone-relative and
//! zone-absolute form.
//!
//! Trailing root dots are ignored on input throughout: providers disagree on
//! whether they use fully-qualified names, and callers are free to pass
//! `"example.com."` or `"example.com"`.

use serde::{Deserialize, Serialize};

/// Label used for the zone apex in relative form.
pub const APEX: &str = "@";

/// A DNS zone, identified by its domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone(String);

impl Zone {
    /// Creates a zone from a domain exactly as the caller spelled it.
    pub fn new(domain: impl Into<String>) -> Self {
        Self(domain.into())
    }

    /// Returns the domain as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the domain with a single trailing root `.` removed.
    pub fn unqualified(&self) -> &str {
        self.0.strip_suffix('.').unwrap_or(&self.0)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Zone {
    fn from(domain: &str) -> Self {
        Self::new(domain)
    }
}

impl From<String> for Zone {
    fn from(domain: String) -> Self {
        Self::new(domain)
    }
}

// ---------------------------------------------------------------------------
// Name conversion
// ---------------------------------------------------------------------------

/// Converts `fqdn` into a name relative to `zone`.
///
/// The zone apex becomes [`APEX`]. The zone suffix is only removed on a label
/// boundary, so `"fooexample.com"` is not inside `"example.com"`. Names outside
/// the zone come back unchanged apart from a trailing dot.
pub fn relative_name(fqdn: &str, zone: &str) -> String {
    let name = fqdn.trim_end_matches('.');
    let zone = zone.trim_end_matches('.');

    if zone.is_empty() {
        return name.to_string();
    }
    if name.eq_ignore_ascii_case(zone) {
        return APEX.to_string();
    }

    let split = name.len().saturating_sub(zone.len());
    if split > 1 && name.is_char_boundary(split) {
        let (head, tail) = name.split_at(split);
        if tail.eq_ignore_ascii_case(zone) {
            if let Some(label) = head.strip_suffix('.') {
                return label.to_string();
            }
        }
    }

    name.to_string()
}

/// Converts a zone-relative `name` into a fully-qualified name without the
/// trailing root dot.
///
/// `""` and [`APEX`] denote the zone itself. A name that already ends in `.`
/// is taken to be fully qualified and is returned as-is minus that dot.
pub fn absolute_name(name: &str, zone: &str) -> String {
    let zone = zone.trim_end_matches('.');

    if zone.is_empty() {
        return name.trim_matches('.').to_string();
    }
    if name.is_empty() || name == APEX {
        return zone.to_string();
    }
    if let Some(fqdn) = name.strip_suffix('.') {
        return fqdn.to_string();
    }

    format!("{name}.{zone}")
}
