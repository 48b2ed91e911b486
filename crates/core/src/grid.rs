//! # Weekly Grid
//!
//! Lays class sessions out on a weekly grid of fixed-length slots for
//! rendering. Every session is placed once, in the cell where it starts,
//! together with the number of slots its block has to cover.
//!
//! ## Layout rules
//!
//! 1. A session occupies a cell when it is on that cell's day and the slot
//!    time lies in the half-open interval `[start, end)`. A class ending at
//!    10:30 does not occupy the 10:30 slot.
//! 2. A block spans `ceil(duration / slot length)` slots.
//! 3. Sessions must start exactly on a slot boundary to be placed. Sessions
//!    that cannot be placed are listed in [`WeeklyGrid::omitted`] together
//!    with the reason.
//! 4. Sessions of one day that overlap in time are laid out side by side:
//!    each gets a lane within its cluster of overlapping sessions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{clock::MINUTES_PER_DAY, ClockTime, Day, Session};

pub const DEFAULT_SLOT_MINUTES: u16 = 30;
pub const DEFAULT_SLOT_COUNT: usize = 24;
pub const DEFAULT_FIRST_SLOT: ClockTime = ClockTime::hm(8, 0);

/// Shape of the weekly grid: which days form the columns and which slot
/// marks form the rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDefinition {
    pub days: Vec<Day>,
    pub first_slot: ClockTime,
    pub slot_minutes: u16,
    pub slot_count: usize,
}

impl Default for GridDefinition {
    /// Monday to Friday, 24 half-hour slots from 08:00 to 20:00.
    fn default() -> Self {
        Self {
            days: Day::SCHOOL_WEEK.to_vec(),
            first_slot: DEFAULT_FIRST_SLOT,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            slot_count: DEFAULT_SLOT_COUNT,
        }
    }
}

impl GridDefinition {
    /// Slot marks in order. Marks that would fall past midnight are dropped.
    pub fn slots(&self) -> Vec<ClockTime> {
        (0..self.slot_count)
            .map_while(|i| {
                let offset = u16::try_from(i).ok()?.checked_mul(self.slot_minutes)?;
                self.first_slot.checked_add_minutes(offset)
            })
            .collect()
    }

    /// Number of slot marks, i.e. `slots().len()` without building the list.
    pub fn slot_len(&self) -> usize {
        if self.slot_minutes == 0 {
            return self.slot_count.min(usize::from(u16::MAX) + 1);
        }

        let before_midnight =
            usize::from((MINUTES_PER_DAY - 1 - self.first_slot.minutes()) / self.slot_minutes) + 1;
        self.slot_count.min(before_midnight)
    }

    /// Minutes since midnight at which the last slot ends.
    pub fn closes_at(&self) -> u32 {
        u32::from(self.first_slot.minutes())
            + u32::from(self.slot_minutes) * self.slot_len() as u32
    }

    pub fn day_index(&self, day: Day) -> Option<usize> {
        self.days.iter().position(|d| *d == day)
    }

    /// Row of the slot labelled exactly `time`, if any.
    pub fn slot_index(&self, time: ClockTime) -> Option<usize> {
        if self.slot_minutes == 0 || time < self.first_slot {
            return None;
        }

        let offset = time.minutes() - self.first_slot.minutes();
        if offset % self.slot_minutes != 0 {
            return None;
        }

        let index = usize::from(offset / self.slot_minutes);
        (index < self.slot_len()).then_some(index)
    }

    /// Whether `time` falls inside the grid's opening hours `[first, close)`.
    pub fn contains(&self, time: ClockTime) -> bool {
        time >= self.first_slot && u32::from(time.minutes()) < self.closes_at()
    }
}

/// Number of slots a block from `start` to `end` covers, rounded up.
///
/// For half-hour slots this is `ceil((end - start) * 2)` in fractional
/// hours: 09:00 to 10:30 spans 3 slots, 09:00 to 09:40 spans 2.
pub fn span_slots(start: ClockTime, end: ClockTime, slot_minutes: u16) -> u32 {
    if slot_minutes == 0 || end <= start {
        return 0;
    }

    let duration = u32::from(end.minutes() - start.minutes());
    duration.div_ceil(u32::from(slot_minutes))
}

/// Membership test for a single cell, half-open on the session's end.
///
/// Sessions with unparseable or inverted times occupy nothing.
pub fn occupies(session: &Session, day: Day, slot: ClockTime) -> bool {
    if session.day != day {
        return false;
    }

    match session.interval() {
        Ok((start, end)) => start <= slot && slot < end,
        Err(_) => false,
    }
}

/// A session drawn at its starting cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub session: Session,
    /// Height of the block in slots
    pub span: u32,
    /// Horizontal position among overlapping sessions, starting at 0
    pub lane: u32,
    /// Number of lanes in this session's overlap cluster
    pub lanes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub day: Day,
    pub slot: ClockTime,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OmissionReason {
    /// Start time is inside opening hours but not on a slot mark
    Unaligned,
    /// Day is not a grid column, or start is outside opening hours
    OutsideGrid,
    /// Malformed `HH:MM` value, or end not after start
    InvalidTime,
    /// Another session with the same id was already placed
    DuplicateId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Omission {
    pub session_id: String,
    pub reason: OmissionReason,
    pub detail: String,
}

/// Result of a grid build. Cells are stored day-major: all slots of the
/// first day, then all slots of the second, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyGrid {
    pub days: Vec<Day>,
    pub slots: Vec<ClockTime>,
    pub cells: Vec<GridCell>,
    pub omitted: Vec<Omission>,
}

impl WeeklyGrid {
    pub fn cell(&self, day: Day, slot: ClockTime) -> Option<&GridCell> {
        let day_index = self.days.iter().position(|d| *d == day)?;
        let slot_index = self.slots.iter().position(|s| *s == slot)?;
        self.cells.get(day_index * self.slots.len() + slot_index)
    }

    /// Placements starting at `(day, slot)`, in lane order.
    pub fn placements_at(&self, day: Day, slot: ClockTime) -> &[Placement] {
        self.cell(day, slot)
            .map(|cell| cell.placements.as_slice())
            .unwrap_or(&[])
    }

    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.cells.iter().flat_map(|cell| cell.placements.iter())
    }

    /// Every placed session covering `(day, slot)`, not only those starting there.
    pub fn occupants(&self, day: Day, slot: ClockTime) -> Vec<&Session> {
        self.placements()
            .map(|placement| &placement.session)
            .filter(|session| occupies(session, day, slot))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.placements.is_empty())
    }
}

struct Block {
    cell: usize,
    position: usize,
    start: ClockTime,
    end: ClockTime,
}

/// Builds the weekly grid for `sessions`.
///
/// Never fails: sessions that cannot be placed end up in
/// [`WeeklyGrid::omitted`]. The set of already-placed ids lives only for the
/// duration of this call.
pub fn build_weekly_grid(sessions: &[Session], definition: &GridDefinition) -> WeeklyGrid {
    let slots = definition.slots();
    let mut cells: Vec<GridCell> = definition
        .days
        .iter()
        .flat_map(|day| {
            slots.iter().map(move |slot| GridCell {
                day: *day,
                slot: *slot,
                placements: Vec::new(),
            })
        })
        .collect();

    let mut placed: HashSet<&str> = HashSet::new();
    let mut omitted = Vec::new();
    let mut blocks_by_day: Vec<Vec<Block>> = definition.days.iter().map(|_| Vec::new()).collect();

    for session in sessions {
        if placed.contains(session.id.as_str()) {
            omitted.push(Omission {
                session_id: session.id.clone(),
                reason: OmissionReason::DuplicateId,
                detail: format!("Session '{}' is already on the grid", session.id),
            });
            continue;
        }

        let (start, end) = match session.interval() {
            Ok(interval) => interval,
            Err(e) => {
                omitted.push(Omission {
                    session_id: session.id.clone(),
                    reason: OmissionReason::InvalidTime,
                    detail: e.to_string(),
                });
                continue;
            }
        };

        let Some(day_index) = definition.day_index(session.day) else {
            omitted.push(Omission {
                session_id: session.id.clone(),
                reason: OmissionReason::OutsideGrid,
                detail: format!("{} is not a column of the grid", session.day),
            });
            continue;
        };

        let Some(slot_index) = definition.slot_index(start) else {
            let reason = if definition.contains(start) {
                OmissionReason::Unaligned
            } else {
                OmissionReason::OutsideGrid
            };
            omitted.push(Omission {
                session_id: session.id.clone(),
                reason,
                detail: format!("Start time {} does not match any slot", start),
            });
            continue;
        };

        placed.insert(session.id.as_str());

        let cell = day_index * slots.len() + slot_index;
        let position = cells[cell].placements.len();
        cells[cell].placements.push(Placement {
            session: session.clone(),
            span: span_slots(start, end, definition.slot_minutes),
            lane: 0,
            lanes: 1,
        });
        blocks_by_day[day_index].push(Block {
            cell,
            position,
            start,
            end,
        });
    }

    for blocks in &mut blocks_by_day {
        assign_lanes(blocks, &mut cells);
    }

    debug!(
        sessions = sessions.len(),
        placed = placed.len(),
        omitted = omitted.len(),
        "Built weekly grid"
    );

    WeeklyGrid {
        days: definition.days.clone(),
        slots,
        cells,
        omitted,
    }
}

/// Greedy first-fit lane assignment over one day's blocks.
///
/// Blocks are visited by start time (insertion order on ties). A cluster
/// closes once a block starts at or after the latest end seen so far; all
/// members of a cluster share its lane count.
fn assign_lanes(blocks: &mut [Block], cells: &mut [GridCell]) {
    blocks.sort_by_key(|block| block.start);

    let mut lane_ends: Vec<ClockTime> = Vec::new();
    let mut cluster: Vec<(usize, usize, u32)> = Vec::new();
    let mut cluster_end: Option<ClockTime> = None;

    for block in blocks.iter() {
        if cluster_end.is_some_and(|end| block.start >= end) {
            close_cluster(&mut cluster, lane_ends.len() as u32, cells);
            lane_ends.clear();
            cluster_end = None;
        }

        let lane = match lane_ends.iter().position(|end| *end <= block.start) {
            Some(free) => {
                lane_ends[free] = block.end;
                free
            }
            None => {
                lane_ends.push(block.end);
                lane_ends.len() - 1
            }
        };

        cluster.push((block.cell, block.position, lane as u32));
        cluster_end = Some(cluster_end.map_or(block.end, |end| end.max(block.end)));
    }

    close_cluster(&mut cluster, lane_ends.len() as u32, cells);
}

fn close_cluster(cluster: &mut Vec<(usize, usize, u32)>, lanes: u32, cells: &mut [GridCell]) {
    for (cell, position, lane) in cluster.drain(..) {
        let placement = &mut cells[cell].placements[position];
        placement.lane = lane;
        placement.lanes = lanes;
    }
}
