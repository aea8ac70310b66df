//! Scenario
//!
//! An ordered set of decoded records with a playback cursor. Records are kept
//! in arrival order; playback with [`Scenario::next`] wraps back to the first
//! record after the last one, so a consumer can replay a scenario forever.

use thiserror::Error;

use crate::record::TelemetryRecord;

/// Errors raised when modifying a scenario
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("Scenario is frozen; conversion already completed")]
    Frozen,
}

/// Ordered telemetry records with a wrap-around cursor
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    /// Records in arrival order
    records: Vec<TelemetryRecord>,
    /// Current playback position
    position: usize,
    /// Set once conversion completes
    frozen: bool,
}

impl Scenario {
    /// Create an empty scenario
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end
    pub fn append(&mut self, record: TelemetryRecord) -> Result<(), ScenarioError> {
        if self.frozen {
            return Err(ScenarioError::Frozen);
        }
        self.records.push(record);
        Ok(())
    }

    /// Stop accepting records
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether the scenario still accepts records
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the record at the cursor
    pub fn current(&self) -> Option<&TelemetryRecord> {
        self.records.get(self.position)
    }

    /// Return the record at the cursor and advance, wrapping past the end
    ///
    /// Only returns `None` for an empty scenario.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&TelemetryRecord> {
        if self.records.is_empty() {
            return None;
        }

        let index = self.position;
        self.position += 1;
        if self.position >= self.records.len() {
            tracing::debug!("reached end of scenario, restarting from beginning");
            self.position = 0;
        }

        self.records.get(index)
    }

    /// Move the cursor back to the first record
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Get all records
    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    /// Iterate records in order without touching the cursor
    pub fn iter(&self) -> std::slice::Iter<'_, TelemetryRecord> {
        self.records.iter()
    }

    /// Take ownership of the records
    pub fn into_records(self) -> Vec<TelemetryRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Scenario {
    type Item = &'a TelemetryRecord;
    type IntoIter = std::slice::Iter<'a, TelemetryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: &str, rpm: i32) -> TelemetryRecord {
        TelemetryRecord {
            time: time.into(),
            engine_rpm: rpm,
            ..Default::default()
        }
    }

    fn make_test_scenario() -> Scenario {
        let mut scenario = Scenario::new();
        scenario.append(record("00:00:01", 1000)).unwrap();
        scenario.append(record("00:00:02", 2000)).unwrap();
        scenario.append(record("00:00:03", 3000)).unwrap();
        scenario
    }

    #[test]
    fn test_append_keeps_arrival_order() {
        let mut scenario = Scenario::new();
        scenario.append(record("00:00:09", 1)).unwrap();
        scenario.append(record("00:00:01", 2)).unwrap();
        scenario.append(record("00:00:01", 2)).unwrap();

        let times: Vec<_> = scenario.iter().map(|r| r.time.as_str()).collect();
        assert_eq!(times, vec!["00:00:09", "00:00:01", "00:00:01"]);
        assert_eq!(scenario.len(), 3);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut scenario = make_test_scenario();

        let rpms: Vec<_> = (0..7).map(|_| scenario.next().unwrap().engine_rpm).collect();
        assert_eq!(rpms, vec![1000, 2000, 3000, 1000, 2000, 3000, 1000]);
        assert_eq!(scenario.position(), 1);
    }

    #[test]
    fn test_single_record_repeats() {
        let mut scenario = Scenario::new();
        scenario.append(record("00:00:01", 850)).unwrap();

        for _ in 0..3 {
            assert_eq!(scenario.next().unwrap().engine_rpm, 850);
            assert_eq!(scenario.position(), 0);
        }
    }

    #[test]
    fn test_into_records_keeps_order() {
        let mut scenario = make_test_scenario();
        scenario.next();
        scenario.freeze();

        let rpms: Vec<_> = scenario.into_records().iter().map(|r| r.engine_rpm).collect();
        assert_eq!(rpms, vec![1000, 2000, 3000]);
    }

    #[test]
    fn test_empty_scenario() {
        let mut scenario = Scenario::new();
        assert!(scenario.is_empty());
        assert!(scenario.next().is_none());
        assert!(scenario.current().is_none());
    }

    #[test]
    fn test_frozen_rejects_append() {
        let mut scenario = make_test_scenario();
        scenario.freeze();

        assert_eq!(
            scenario.append(record("00:00:04", 4000)),
            Err(ScenarioError::Frozen)
        );
        assert_eq!(scenario.len(), 3);

        // playback still works once frozen
        scenario.next();
        assert_eq!(scenario.current().unwrap().engine_rpm, 2000);
        scenario.rewind();
        assert_eq!(scenario.position(), 0);
    }
}
