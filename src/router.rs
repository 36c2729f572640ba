//! Two-segment fragment codec and the location capability.
//!
//! The fragment (`#`, `#<category>` or `#<category>/<project>`, each segment
//! percent-encoded independently) is the only shareable navigation state.
//! The codec never validates ids against the catalog; resolution does.

/// Reads and writes the navigation fragment. `write` pushes a history
/// entry; hosts call `App::sync_from_location` when the fragment changes
/// underneath them (back/forward, deep links).
pub trait Location {
    fn read(&self) -> String;
    fn write(&mut self, fragment: &str);
}

/// In-memory location with a history stack: the browser stand-in used by
/// hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryLocation {
    history: Vec<String>,
}

impl MemoryLocation {
    pub fn new() -> MemoryLocation {
        MemoryLocation::with_fragment("")
    }

    pub fn with_fragment(fragment: &str) -> MemoryLocation {
        MemoryLocation {
            history: vec![fragment.to_string()],
        }
    }

    /// Browser back: drop the newest entry, landing on the previous one.
    /// Returns false when already at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }

    /// Number of history entries, for asserting that redundant transitions
    /// push nothing.
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Location for MemoryLocation {
    fn read(&self) -> String {
        self.history.last().cloned().unwrap_or_default()
    }

    fn write(&mut self, fragment: &str) {
        self.history.push(fragment.to_string());
    }
}

/// Canonical fragment for a selection pair. A missing category always
/// collapses to the bare `#`, whatever the project argument says.
pub fn format_fragment(category: Option<&str>, project: Option<&str>) -> String {
    let category = match category.filter(|c| !c.is_empty()) {
        Some(c) => c,
        None => return "#".to_string(),
    };
    match project.filter(|p| !p.is_empty()) {
        Some(project) => format!("#{}/{}", percent_encode(category), percent_encode(project)),
        None => format!("#{}", percent_encode(category)),
    }
}

/// Splits a fragment into its decoded segments. Tolerant by design: a
/// malformed escape or an empty segment comes back as `None`, never an
/// error.
pub fn parse_fragment(fragment: &str) -> (Option<String>, Option<String>) {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment).trim();
    if raw.is_empty() {
        return (None, None);
    }
    let mut parts = raw.splitn(2, '/');
    let category = parts
        .next()
        .and_then(percent_decode)
        .filter(|s| !s.is_empty());
    let project = parts
        .next()
        .and_then(percent_decode)
        .filter(|s| !s.is_empty());
    (category, project)
}

/// Writes the canonical fragment for the pair, skipping the write when it
/// matches the current one (no redundant history entries, no redundant
/// change notifications).
pub fn set_fragment<L: Location>(location: &mut L, category: Option<&str>, project: Option<&str>) {
    let fragment = format_fragment(category, project);
    let current = location.read();
    let bare_current = current.strip_prefix('#').unwrap_or(&current);
    let bare_next = fragment.strip_prefix('#').unwrap_or(&fragment);
    if bare_current != bare_next {
        location.write(&fragment);
    }
}

/// Encodes a single segment. Unreserved bytes pass through; everything
/// else, including `/` and `#`, becomes `%XX` so segment boundaries stay
/// unambiguous.
pub fn percent_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(b as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", b));
            }
        }
    }
    result
}

fn percent_decode(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hi = (hex[0] as char).to_digit(16)?;
            let lo = (hex[1] as char).to_digit(16)?;
            out.push((hi * 16 + lo) as u8);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
