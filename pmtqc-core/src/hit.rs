//! Columnar (`SoA`) hit batch read from one input file.
//!
//! Hit records are immutable once read; estimators only aggregate over
//! them, so the batch stores plain parallel vectors rather than an array
//! of structs.

use crate::error::{Error, Result};

/// A batch of PMT hits in Structure of Arrays (`SoA`) format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitColumns {
    /// Arrival times in nanoseconds.
    pub time_ns: Vec<f64>,
    /// PMT channel ids.
    pub pmt_id: Vec<u32>,
    /// Event ids.
    pub event_id: Vec<u32>,
}

impl HitColumns {
    /// Creates a new empty batch with specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            time_ns: Vec::with_capacity(capacity),
            pmt_id: Vec::with_capacity(capacity),
            event_id: Vec::with_capacity(capacity),
        }
    }

    /// Builds a batch from already-read parallel columns.
    ///
    /// # Errors
    /// Returns [`Error::RaggedColumns`] if the columns differ in length.
    pub fn from_columns(time_ns: Vec<f64>, pmt_id: Vec<u32>, event_id: Vec<u32>) -> Result<Self> {
        if time_ns.len() != pmt_id.len() || time_ns.len() != event_id.len() {
            return Err(Error::RaggedColumns {
                times: time_ns.len(),
                pmts: pmt_id.len(),
                events: event_id.len(),
            });
        }
        Ok(Self {
            time_ns,
            pmt_id,
            event_id,
        })
    }

    /// Returns the number of hits in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time_ns.len()
    }

    /// Returns true if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time_ns.is_empty()
    }

    /// Pushes a single hit into the batch.
    pub fn push(&mut self, time_ns: f64, pmt_id: u32, event_id: u32) {
        self.time_ns.push(time_ns);
        self.pmt_id.push(pmt_id);
        self.event_id.push(event_id);
    }

    /// Appends all hits from another batch to this one.
    pub fn append(&mut self, other: &HitColumns) {
        self.time_ns.extend_from_slice(&other.time_ns);
        self.pmt_id.extend_from_slice(&other.pmt_id);
        self.event_id.extend_from_slice(&other.event_id);
    }

    /// Iterates over `(time_ns, pmt_id, event_id)` rows.
    pub fn iter(&self) -> impl Iterator<Item = (f64, u32, u32)> + '_ {
        self.time_ns
            .iter()
            .zip(&self.pmt_id)
            .zip(&self.event_id)
            .map(|((&t, &p), &e)| (t, p, e))
    }
}
