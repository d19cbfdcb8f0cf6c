//! Append-only audit trail of transaction outcomes.

use serde::Serialize;

/// Prefix that marks an entry as a successful outcome.
pub const SUCCESS_PREFIX: &str = "Audit: ";

/// One recorded outcome. Never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuditEntry {
    text: String,
}

impl AuditEntry {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_success(&self) -> bool {
        self.text.starts_with(SUCCESS_PREFIX)
    }
}

impl core::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered audit messages, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a plain (error) message.
    pub fn append(&mut self, message: impl Into<String>) -> &AuditEntry {
        self.push(message.into())
    }

    /// Record a success acknowledgment.
    pub fn append_success(&mut self, message: impl AsRef<str>) -> &AuditEntry {
        self.push(format!("{SUCCESS_PREFIX}{}", message.as_ref()))
    }

    pub fn all(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_success()).count()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    fn push(&mut self, text: String) -> &AuditEntry {
        self.entries.push(AuditEntry { text });
        &self.entries[self.entries.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_entries_carry_the_prefix() {
        let mut log = AuditLog::new();
        let entry = log.append_success("Part P1 added successfully.");
        assert_eq!(entry.text(), "Audit: Part P1 added successfully.");
        assert!(entry.is_success());
    }

    #[test]
    fn plain_entries_are_stored_verbatim() {
        let mut log = AuditLog::new();
        let entry = log.append("Part P9 not found for change.");
        assert_eq!(entry.text(), "Part P9 not found for change.");
        assert!(!entry.is_success());
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let mut log = AuditLog::new();
        log.append("first");
        log.append_success("second");
        log.append("first");

        let texts: Vec<&str> = log.iter().map(AuditEntry::text).collect();
        assert_eq!(texts, vec!["first", "Audit: second", "first"]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.success_count(), 1);
    }
}
