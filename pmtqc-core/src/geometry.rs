//! PMT geometry table and time-of-flight conversion.

use std::collections::HashMap;

/// Speed of light in vacuum, in millimetres per nanosecond.
pub const C_MM_PER_NS: f64 = 299.792_458;

/// 3-D position of a PMT (or the light-emission reference point), in
/// millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PmtPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PmtPosition {
    /// Creates a new position.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position, in millimetres.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Light travel time over `distance_mm` in a medium with effective
/// refractive index `n_eff`, in nanoseconds.
#[inline]
#[must_use]
pub fn time_of_flight_ns(n_eff: f64, distance_mm: f64) -> f64 {
    n_eff * distance_mm / C_MM_PER_NS
}

/// Read-only lookup table mapping a PMT id to its position.
///
/// Loaded once per run; an empty table means no geometry was supplied and
/// geometry-dependent corrections are skipped.
#[derive(Debug, Clone, Default)]
pub struct GeometryTable {
    positions: HashMap<u32, PmtPosition>,
}

impl GeometryTable {
    /// Inserts a PMT position, replacing any previous entry for the id.
    pub fn insert(&mut self, pmt_id: u32, position: PmtPosition) {
        self.positions.insert(pmt_id, position);
    }

    /// Looks up the position of a PMT.
    #[must_use]
    pub fn get(&self, pmt_id: u32) -> Option<&PmtPosition> {
        self.positions.get(&pmt_id)
    }

    /// Returns the number of PMTs in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no geometry was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<(u32, PmtPosition)> for GeometryTable {
    fn from_iter<I: IntoIterator<Item = (u32, PmtPosition)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = PmtPosition::new(0.0, 0.0, 0.0);
        let b = PmtPosition::new(3.0, 4.0, 0.0);
        assert_relative_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_time_of_flight_vacuum() {
        // One light-nanosecond in vacuum.
        assert_relative_eq!(time_of_flight_ns(1.0, C_MM_PER_NS), 1.0);
    }

    #[test]
    fn test_time_of_flight_water() {
        assert_relative_eq!(
            time_of_flight_ns(1.33, 300.0),
            1.33 * 300.0 / 299.792_458,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_table_lookup() {
        let table: GeometryTable = [(5, PmtPosition::new(1.0, 2.0, 3.0))].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert!(table.get(5).is_some());
        assert!(table.get(6).is_none());
    }
}
