//! Schedule builder.
//!
//! Walks intersections in ascending order and allocates green time at each
//! one independently.  See the crate docs for the allocation rules.

use log::{debug, info, warn};

use ts_core::{IntersectionId, RoundingRule, ScheduleConfig};
use ts_network::{Problem, Street, StreetNetwork};

use crate::{
    AllocationPolicy, GreenPhase, IntersectionSchedule, Schedule, ScheduleResult, UsageMap,
    aggregate,
};

/// Minimal green given to every street when demand gives no usable split.
const FALLBACK_DURATION: u32 = 1;

// ── Public API ────────────────────────────────────────────────────────────────

/// Build the light schedule for `network` from precomputed `usage`.
///
/// Cannot fail: `config` already guarantees a positive cycle length, and
/// usage entries for unknown streets are simply never looked up.
pub fn build_schedule(network: &StreetNetwork, usage: &UsageMap, config: &ScheduleConfig) -> Schedule {
    let mut entries = Vec::new();
    let mut incoming: Vec<&Street> = Vec::new();

    for intersection in network.intersections() {
        incoming.clear();
        incoming.extend(network.incoming(intersection));
        if incoming.is_empty() {
            continue;
        }
        let entry = allocate(intersection, &incoming, usage, config);
        debug!(
            "intersection {intersection}: {:?}, {} phases, {} dropped",
            entry.policy,
            entry.phases.len(),
            entry.dropped,
        );
        entries.push(entry);
    }

    let schedule = Schedule::from_sorted(entries);
    info!(
        "scheduled {} of {} intersections (F={}, rounding {})",
        schedule.len(),
        network.intersection_count(),
        config.cycle_length(),
        config.rounding(),
    );
    schedule
}

/// Validate the cycle length, aggregate demand, and build the schedule for a
/// loaded problem.
pub fn plan(problem: &Problem, rounding: RoundingRule) -> ScheduleResult<Schedule> {
    let config = problem.header.schedule_config(rounding)?;
    let usage = aggregate(&problem.paths);

    let unknown = usage.unknown_streets(&problem.network);
    if !unknown.is_empty() {
        warn!("{} street names in vehicle paths are not in the network", unknown.len());
    }

    Ok(build_schedule(&problem.network, &usage, &config))
}

// ── Allocation ────────────────────────────────────────────────────────────────

fn allocate(
    intersection: IntersectionId,
    incoming:     &[&Street],
    usage:        &UsageMap,
    config:       &ScheduleConfig,
) -> IntersectionSchedule {
    let total: u64 = incoming.iter().map(|s| usage.get(&s.name)).sum();
    if total == 0 {
        return fallback(intersection, incoming, AllocationPolicy::ZeroDemand);
    }

    let phases: Vec<GreenPhase> = incoming
        .iter()
        .filter_map(|s| {
            let duration = config.proportional_duration(usage.get(&s.name), total);
            (duration > 0).then(|| GreenPhase::new(s.name.as_str(), duration))
        })
        .collect();

    if phases.is_empty() {
        return fallback(intersection, incoming, AllocationPolicy::DegenerateRounding);
    }

    IntersectionSchedule {
        intersection,
        dropped: incoming.len() - phases.len(),
        phases,
        policy: AllocationPolicy::Proportional,
    }
}

fn fallback(
    intersection: IntersectionId,
    incoming:     &[&Street],
    policy:       AllocationPolicy,
) -> IntersectionSchedule {
    IntersectionSchedule {
        intersection,
        phases: incoming
            .iter()
            .map(|s| GreenPhase::new(s.name.as_str(), FALLBACK_DURATION))
            .collect(),
        policy,
        dropped: 0,
    }
}
