//! Schedule types produced by the builder.

use ts_core::IntersectionId;

/// One green light in an intersection's cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreenPhase {
    pub street: String,
    /// Seconds of green, always ≥ 1.
    pub duration: u32,
}

impl GreenPhase {
    pub fn new(street: impl Into<String>, duration: u32) -> Self {
        Self { street: street.into(), duration }
    }
}

/// Which rule produced an intersection's phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AllocationPolicy {
    /// Durations proportional to demand; zero-rounded streets dropped.
    Proportional,
    /// No vehicle uses any incoming street: one second each.
    ZeroDemand,
    /// Demand exists but every share rounded to zero: one second each.
    DegenerateRounding,
}

/// The light cycle at one intersection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionSchedule {
    pub intersection: IntersectionId,
    /// Never empty.  Follows the intersection's incoming-street order.
    pub phases: Vec<GreenPhase>,
    pub policy: AllocationPolicy,
    /// Incoming streets left out because their share rounded to 0.
    pub dropped: usize,
}

impl IntersectionSchedule {
    /// Total green time of one cycle.  Need not equal the configured cycle
    /// length.
    pub fn cycle_time(&self) -> u64 {
        self.phases.iter().map(|p| p.duration as u64).sum()
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Light cycles for every intersection that has incoming streets, in
/// ascending intersection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    entries: Vec<IntersectionSchedule>,
}

impl Schedule {
    /// `entries` must be sorted by intersection with no duplicates and no
    /// empty phase lists.
    pub(crate) fn from_sorted(entries: Vec<IntersectionSchedule>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].intersection < w[1].intersection));
        debug_assert!(entries.iter().all(|e| !e.phases.is_empty()));
        Self { entries }
    }

    /// Number of scheduled intersections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IntersectionSchedule> {
        self.entries.iter()
    }

    pub fn get(&self, intersection: IntersectionId) -> Option<&IntersectionSchedule> {
        self.entries
            .binary_search_by_key(&intersection, |e| e.intersection)
            .ok()
            .map(|i| &self.entries[i])
    }

    pub fn contains(&self, intersection: IntersectionId) -> bool {
        self.get(intersection).is_some()
    }

    /// Fold per-intersection outcomes into run totals.
    pub fn summary(&self) -> ScheduleSummary {
        let mut s = ScheduleSummary { intersections: self.entries.len(), ..Default::default() };
        for entry in &self.entries {
            match entry.policy {
                AllocationPolicy::Proportional       => s.proportional += 1,
                AllocationPolicy::ZeroDemand         => s.zero_demand += 1,
                AllocationPolicy::DegenerateRounding => s.degenerate_rounding += 1,
            }
            s.dropped_streets += entry.dropped;
            s.green_phases += entry.phases.len();
        }
        s
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item     = &'a IntersectionSchedule;
    type IntoIter = std::slice::Iter<'a, IntersectionSchedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Run totals over a [`Schedule`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleSummary {
    pub intersections:       usize,
    pub proportional:        usize,
    pub zero_demand:         usize,
    pub degenerate_rounding: usize,
    pub dropped_streets:     usize,
    pub green_phases:        usize,
}
