//! Section numbering state machine.
//!
//! The outline position is kept as a prefix path: a caller-supplied root id followed by one
//! counter per nesting level. Each heading moves the path by at most one level, so a jump from
//! H2 straight to H4 nests only once and the emitted TOC depth can differ from the tag depth.
//!
//! Stepping out past the first counter consumes a numeric root: root `"2"` becomes the single
//! segment `"3"` at TOC depth 0, and numbering continues from that shorter path.

use std::fmt;

use log::{debug, warn};

/// Which branch of the state machine handled a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Depth-1 heading while a minor counter was still on the stack
    ForcedReset,
    /// Depth-1 heading whose removed counter was the minor counter itself
    SoftReset,
    Same,
    Deeper,
    Shallower,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transition::ForcedReset => "<- reset (forced)",
            Transition::SoftReset => "<- reset (soft)",
            Transition::Same => "same",
            Transition::Deeper => "deeper ->",
            Transition::Shallower => "<- shallower",
        };
        f.write_str(name)
    }
}

/// Result of numbering a single heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMeta {
    /// Dotted section identifier such as "2.1.3"
    pub section_id: String,
    /// Segment count of `section_id` minus one
    pub toc_depth: usize,
    pub transition: Transition,
}

/// Per-run outline position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    /// `None` once a shallower step has consumed the root
    root: Option<String>,
    counters: Vec<u32>,
    last_tag_depth: u32,
}

impl CounterState {
    /// Start a run under `root_id` with a root counter of zero.
    pub fn new(root_id: impl Into<String>) -> Self {
        Self::with_counter(root_id, 0)
    }

    pub fn with_counter(root_id: impl Into<String>, root_counter: u32) -> Self {
        Self {
            root: Some(root_id.into()),
            counters: vec![root_counter],
            last_tag_depth: 1,
        }
    }

    /// Number of path segments, root included
    pub fn stack_len(&self) -> usize {
        self.counters.len() + usize::from(self.root.is_some())
    }

    pub fn section_id(&self) -> String {
        let mut segments: Vec<String> = self.root.iter().cloned().collect();
        segments.extend(self.counters.iter().map(|c| c.to_string()));
        segments.join(".")
    }

    /// Consume one heading depth and return the next state with the heading's numbering.
    pub fn advance(mut self, tag_depth: u32) -> (CounterState, SectionMeta) {
        debug!("-------- advance ------------------------------------------------");
        debug!("lastTagDepth   : {}", self.last_tag_depth);
        debug!("newTagDepth    : {}", tag_depth);

        // The counter array always holds at least one entry between calls.
        let removed = self.counters.pop().unwrap_or(0);

        let transition = if tag_depth == 1 {
            // Without a root the major number is the first counter.
            let (major, minor_slot) = match self.root {
                Some(_) => (None, self.counters.first().copied()),
                None => (self.counters.first().copied(), self.counters.get(1).copied()),
            };
            let (minor, transition) = match minor_slot {
                Some(minor) => (minor, Transition::ForcedReset),
                None => (removed, Transition::SoftReset),
            };
            self.counters.clear();
            self.counters.extend(major);
            self.counters.push(minor + 1);
            transition
        } else if tag_depth == self.last_tag_depth {
            self.counters.push(removed + 1);
            Transition::Same
        } else if tag_depth > self.last_tag_depth {
            self.counters.push(removed);
            self.counters.push(1);
            Transition::Deeper
        } else {
            // Step out one level and bump the parent.
            match self.counters.pop() {
                Some(parent) => self.counters.push(parent + 1),
                None => self.step_out_of_root(removed),
            }
            Transition::Shallower
        };

        self.last_tag_depth = tag_depth;

        let meta = SectionMeta {
            section_id: self.section_id(),
            toc_depth: self.stack_len() - 1,
            transition,
        };

        debug!("op             : {}", meta.transition);
        debug!("tocDepth       : {}", meta.toc_depth);
        debug!("sectionId      : {}", meta.section_id);

        (self, meta)
    }

    /// Shallower step with no counter left above the root: the root itself is the parent.
    fn step_out_of_root(&mut self, removed: u32) {
        let next_root = self
            .root
            .as_deref()
            .and_then(|root| root.trim().parse::<u32>().ok())
            .and_then(|root| root.checked_add(1));

        match next_root {
            Some(next) => {
                self.root = None;
                self.counters.push(next);
            }
            None => {
                warn!(
                    "Cannot step above root {:?}; incrementing the current counter instead",
                    self.root.as_deref().unwrap_or("")
                );
                self.counters.push(removed + 1);
            }
        }
    }
}
