//! Streets and vehicle paths.

use ts_core::IntersectionId;

/// A directed, named street from one intersection to another.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Street {
    /// Unique across the network.
    pub name: String,
    pub from: IntersectionId,
    /// The intersection whose light controls the end of this street.
    pub to: IntersectionId,
    /// Seconds to drive from one end to the other.  Not used by scheduling.
    pub travel_time: u32,
}

/// One vehicle's route as an ordered list of street names.
///
/// Names are not checked against any network; a path may mention streets
/// that do not exist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehiclePath {
    streets: Vec<String>,
}

impl VehiclePath {
    pub fn new(streets: Vec<String>) -> Self {
        Self { streets }
    }

    pub fn streets(&self) -> &[String] {
        &self.streets
    }

    pub fn len(&self) -> usize {
        self.streets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.streets.iter()
    }
}

impl From<Vec<String>> for VehiclePath {
    fn from(streets: Vec<String>) -> Self {
        Self::new(streets)
    }
}

impl<S: Into<String>> FromIterator<S> for VehiclePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a VehiclePath {
    type Item     = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.streets.iter()
    }
}
