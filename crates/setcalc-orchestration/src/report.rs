//! Report entries and the shared, append-only report.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use setcalc_core::{ResultKind, ResultValue, ValueFormat};

/// One line of the report: a task name and its rendered result.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// Task name.
    pub name: String,
    /// Rendered result.
    pub text: String,
    /// The value that was rendered.
    pub value: ResultValue,
}

impl ReportEntry {
    /// Render `value` and pair it with `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: ResultValue, format: ValueFormat) -> Self {
        Self {
            name: name.into(),
            text: value.render(format),
            value,
        }
    }

    /// Kind of the rendered value.
    #[must_use]
    pub fn kind(&self) -> ResultKind {
        self.value.kind()
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.text)
    }
}

/// Report handle shared by the collectors while the pipeline runs.
///
/// Appends are serialized by a mutex; entry order is the order in which
/// collectors acquired it.
#[derive(Debug, Clone, Default)]
pub struct SharedReport {
    entries: Arc<Mutex<Vec<ReportEntry>>>,
}

impl SharedReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&self, entry: ReportEntry) {
        self.entries.lock().push(entry);
    }

    /// Number of entries appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Copy the current entries into a finished `Report`.
    #[must_use]
    pub fn snapshot(&self) -> Report {
        Report {
            entries: self.entries.lock().clone(),
        }
    }
}

/// The finished report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Build a report from entries, keeping their order.
    #[must_use]
    pub fn from_entries(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    /// Entries in append order.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry for a task name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Task names in entry order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Reorder entries to follow `order`; names not listed keep their
    /// relative order at the end.
    #[must_use]
    pub fn ordered_by(mut self, order: &[&str]) -> Self {
        self.entries.sort_by_key(|e| {
            order
                .iter()
                .position(|name| *name == e.name)
                .unwrap_or(order.len())
        });
        self
    }

    /// Sort entries by task name.
    #[must_use]
    pub fn sorted_by_name(mut self) -> Self {
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
        self
    }

    /// Iterate entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ReportEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a ReportEntry;
    type IntoIter = std::slice::Iter<'a, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn entry(name: &str) -> ReportEntry {
        ReportEntry::new(name, ResultValue::Boolean(true), ValueFormat::default())
    }

    #[test]
    fn entry_display() {
        let e = ReportEntry::new(
            "Mean",
            ResultValue::Float(3.0),
            ValueFormat::default(),
        );
        assert_eq!(e.to_string(), "Mean: 3.000000");
        assert_eq!(e.kind(), ResultKind::Float);
    }

    #[test]
    fn entry_sequence_display() {
        let e = ReportEntry::new(
            "Union",
            ResultValue::Sequence(vec![1, 2, 3, 4]),
            ValueFormat::default(),
        );
        assert_eq!(e.to_string(), "Union: 1 2 3 4");
    }

    #[test]
    fn shared_report_concurrent_appends() {
        let report = SharedReport::new();
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let report = report.clone();
                thread::spawn(move || {
                    for j in 0..50 {
                        report.append(entry(&format!("t{i}-{j}")));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(report.len(), 16 * 50);
    }

    #[test]
    fn snapshot_is_detached() {
        let report = SharedReport::new();
        report.append(entry("a"));
        let snap = report.snapshot();
        report.append(entry("b"));
        assert_eq!(snap.len(), 1);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn ordered_by_declared_names() {
        let report = Report::from_entries(vec![entry("c"), entry("x"), entry("a"), entry("b")]);
        let ordered = report.ordered_by(&["a", "b", "c"]);
        assert_eq!(ordered.names(), vec!["a", "b", "c", "x"]);
    }

    #[test]
    fn sorted_by_name() {
        let report = Report::from_entries(vec![entry("b"), entry("a")]);
        assert_eq!(report.sorted_by_name().names(), vec!["a", "b"]);
    }

    #[test]
    fn get_and_display() {
        let report = Report::from_entries(vec![entry("Subset")]);
        assert_eq!(report.get("Subset").unwrap().text, "true");
        assert!(report.get("Mode").is_none());
        assert_eq!(report.to_string(), "Subset: true\n");
    }

    #[test]
    fn empty_report() {
        let report = SharedReport::new();
        assert!(report.is_empty());
        assert!(report.snapshot().is_empty());
    }
}
