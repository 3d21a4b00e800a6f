//! Street network representation and builder.
//!
//! # Data layout
//!
//! Streets are stored in input order and indexed by `StreetId`.  Incoming
//! streets are grouped by destination in **Compressed Sparse Row (CSR)**
//! form.  Given an `IntersectionId i`, the streets that end at `i` are:
//!
//! ```text
//! in_streets[ in_start[i] .. in_start[i+1] ]
//! ```
//!
//! The grouping sort is stable, so within one intersection the incoming
//! streets keep the order in which they were added.  A schedule's fallback
//! ordering relies on this.

use std::collections::HashMap;

use ts_core::{IntersectionId, StreetId};

use crate::{NetworkError, NetworkResult, Street};

// ── StreetNetwork ─────────────────────────────────────────────────────────────

/// Directed street graph with an incoming-street index per intersection.
///
/// Do not construct directly; use [`StreetNetworkBuilder`].
#[derive(Clone, Debug)]
pub struct StreetNetwork {
    intersection_count: u32,

    /// All streets in input order.  Indexed by `StreetId`.
    streets: Vec<Street>,

    /// Street name → `StreetId`.
    by_name: HashMap<String, StreetId>,

    /// CSR row pointer.  Length = `intersection_count + 1`.
    in_start: Vec<u32>,

    /// Street ids grouped by destination, input order within a group.
    in_streets: Vec<StreetId>,
}

impl StreetNetwork {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn intersection_count(&self) -> u32 {
        self.intersection_count
    }

    pub fn street_count(&self) -> usize {
        self.streets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streets.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn street(&self, id: StreetId) -> &Street {
        &self.streets[id.index()]
    }

    pub fn streets(&self) -> &[Street] {
        &self.streets
    }

    pub fn street_id(&self, name: &str) -> Option<StreetId> {
        self.by_name.get(name).copied()
    }

    pub fn street_by_name(&self, name: &str) -> Option<&Street> {
        self.street_id(name).map(|id| self.street(id))
    }

    // ── Topology ──────────────────────────────────────────────────────────

    /// All intersection ids in ascending order, including those with no
    /// incoming streets.
    pub fn intersections(&self) -> impl Iterator<Item = IntersectionId> + use<> {
        (0..self.intersection_count).map(IntersectionId)
    }

    /// Ids of the streets ending at `intersection`, in input order.
    ///
    /// Empty for an intersection nothing drives into, or for an id outside
    /// the network.
    #[inline]
    pub fn incoming_ids(&self, intersection: IntersectionId) -> &[StreetId] {
        let i = intersection.index();
        if i >= self.intersection_count as usize {
            return &[];
        }
        let start = self.in_start[i] as usize;
        let end   = self.in_start[i + 1] as usize;
        &self.in_streets[start..end]
    }

    /// The streets ending at `intersection`, in input order.
    pub fn incoming(&self, intersection: IntersectionId) -> impl Iterator<Item = &Street> + '_ {
        self.incoming_ids(intersection)
            .iter()
            .map(move |&id| self.street(id))
    }

    /// Number of streets ending at `intersection`.
    #[inline]
    pub fn in_degree(&self, intersection: IntersectionId) -> usize {
        self.incoming_ids(intersection).len()
    }
}

// ── StreetNetworkBuilder ──────────────────────────────────────────────────────

/// Construct a [`StreetNetwork`] incrementally, then call [`build`](Self::build).
///
/// Out-of-range endpoints and duplicate names are rejected as they are
/// added, so a built network always satisfies both invariants.
///
/// # Example
///
/// ```
/// use ts_core::IntersectionId;
/// use ts_network::StreetNetworkBuilder;
///
/// let mut b = StreetNetworkBuilder::new(2);
/// b.add_street("rue-de-londres", IntersectionId(0), IntersectionId(1), 1).unwrap();
/// b.add_street("rue-d-amsterdam", IntersectionId(0), IntersectionId(1), 1).unwrap();
/// let net = b.build();
/// assert_eq!(net.in_degree(IntersectionId(1)), 2);
/// assert_eq!(net.in_degree(IntersectionId(0)), 0);
/// ```
#[derive(Debug)]
pub struct StreetNetworkBuilder {
    intersection_count: u32,
    streets:            Vec<Street>,
    by_name:            HashMap<String, StreetId>,
}

impl StreetNetworkBuilder {
    pub fn new(intersection_count: u32) -> Self {
        Self::with_capacity(intersection_count, 0)
    }

    /// Pre-allocate for the expected number of streets.
    pub fn with_capacity(intersection_count: u32, streets: usize) -> Self {
        Self {
            intersection_count,
            streets: Vec::with_capacity(streets),
            by_name: HashMap::with_capacity(streets),
        }
    }

    /// Add a directed street and return its `StreetId` (sequential from 0).
    pub fn add_street(
        &mut self,
        name:        impl Into<String>,
        from:        IntersectionId,
        to:          IntersectionId,
        travel_time: u32,
    ) -> NetworkResult<StreetId> {
        let name = name.into();
        for endpoint in [from, to] {
            if endpoint.0 >= self.intersection_count {
                return Err(NetworkError::IntersectionOutOfRange {
                    street:       name,
                    intersection: endpoint,
                    count:        self.intersection_count,
                });
            }
        }
        if self.by_name.contains_key(&name) {
            return Err(NetworkError::DuplicateStreet(name));
        }

        let id = StreetId::try_from(self.streets.len()).map_err(|_| NetworkError::Parse {
            line:    0,
            message: format!("too many streets (street {name:?})"),
        })?;
        self.by_name.insert(name.clone(), id);
        self.streets.push(Street { name, from, to, travel_time });
        Ok(id)
    }

    pub fn street_count(&self) -> usize {
        self.streets.len()
    }

    /// Consume the builder and produce a [`StreetNetwork`].
    ///
    /// Time complexity: O(S log S) for the stable grouping sort.
    pub fn build(self) -> StreetNetwork {
        let node_count = self.intersection_count as usize;

        // Stable: keeps input order within each destination.
        let mut in_streets: Vec<StreetId> = (0..self.streets.len() as u32).map(StreetId).collect();
        in_streets.sort_by_key(|id| self.streets[id.index()].to.0);

        let mut in_start = vec![0u32; node_count + 1];
        for s in &self.streets {
            in_start[s.to.index() + 1] += 1;
        }
        for i in 1..=node_count {
            in_start[i] += in_start[i - 1];
        }
        debug_assert_eq!(in_start[node_count] as usize, self.streets.len());

        StreetNetwork {
            intersection_count: self.intersection_count,
            streets: self.streets,
            by_name: self.by_name,
            in_start,
            in_streets,
        }
    }
}
