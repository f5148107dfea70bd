//! Zone projection — segments, handle positions and labels derived from a
//! [`ThresholdSet`]. Stateless; renderers call these every frame.

use crate::thresholds::{Threshold, ThresholdSet, MAX_PERCENT};

pub const TITLE: &str = "RAG Thresholds";
pub const CAPTION: &str = "4-stage (R/A/G/Empty)";

/// One of the four bands of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Red,
    Amber,
    Green,
    Empty,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Red, Zone::Amber, Zone::Green, Zone::Empty];

    /// The zone a threshold closes; its handle is drawn in this colour.
    pub fn closed_by(threshold: Threshold) -> Zone {
        match threshold {
            Threshold::RedEnd => Zone::Red,
            Threshold::AmberEnd => Zone::Amber,
            Threshold::GreenEnd => Zone::Green,
        }
    }
}

/// A contiguous span of the bar, `[start, end]` in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub zone: Zone,
    pub start: u8,
    pub end: u8,
}

impl Segment {
    /// Whether `percent` falls inside this segment. The start is exclusive
    /// for every zone but Red, so each percent belongs to one segment.
    pub fn contains(&self, percent: f64) -> bool {
        let start = f64::from(self.start);
        let end = f64::from(self.end);
        match self.zone {
            Zone::Red => percent >= start && percent <= end,
            _ => percent > start && percent <= end,
        }
    }
}

/// The four segments `[0, t0]`, `[t0, t1]`, `[t1, t2]`, `[t2, 100]`.
pub fn segments(set: &ThresholdSet) -> [Segment; 4] {
    let [t0, t1, t2] = set.as_array();
    [
        Segment {
            zone: Zone::Red,
            start: 0,
            end: t0,
        },
        Segment {
            zone: Zone::Amber,
            start: t0,
            end: t1,
        },
        Segment {
            zone: Zone::Green,
            start: t1,
            end: t2,
        },
        Segment {
            zone: Zone::Empty,
            start: t2,
            end: MAX_PERCENT,
        },
    ]
}

/// Handle positions in percent, one per threshold.
pub fn handle_positions(set: &ThresholdSet) -> [u8; 3] {
    set.as_array()
}

/// Zone a percentage along the bar falls into.
pub fn zone_at(set: &ThresholdSet, percent: f64) -> Zone {
    segments(set)
        .into_iter()
        .find(|s| s.contains(percent))
        .map(|s| s.zone)
        .unwrap_or(if percent < 0.0 { Zone::Red } else { Zone::Empty })
}

/// Legend text for a zone, e.g. `Red ≤ 30%` or `Empty > 85%`.
pub fn label(set: &ThresholdSet, zone: Zone) -> String {
    match zone {
        Zone::Red => format!("Red ≤ {}%", set.red_end()),
        Zone::Amber => format!("Amber ≤ {}%", set.amber_end()),
        Zone::Green => format!("Green ≤ {}%", set.green_end()),
        Zone::Empty => format!("Empty > {}%", set.green_end()),
    }
}

/// All four legend entries in bar order.
pub fn labels(set: &ThresholdSet) -> [String; 4] {
    Zone::ALL.map(|z| label(set, z))
}
