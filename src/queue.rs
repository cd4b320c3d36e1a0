//! Worklist entries driving the tracer (part of component E): the
//! pending-code queue, the deferred post-call queue, and the dedup sets
//! that keep the cyclic worklist graph terminating.

use std::collections::{HashSet, VecDeque};

use crate::offsets::ReferenceKind;

/// A pending code address, annotated with where it came from and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEntry {
    pub addr: u16,
    pub from: Option<u16>,
    pub kind: ReferenceKind,
    /// Affects label naming: a branch destination gets an auto
    /// `_label_<hex>` on first classification.
    pub from_branch: bool,
    /// The enclosing function context to propagate to this address.
    pub context: u16,
}

/// An address immediately following a `call` instruction, whose
/// classification is deferred until the jump-engine detector has had a
/// chance to claim it as a function-pointer table instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnEntry {
    pub addr: u16,
    pub call_site: u16,
    pub context: u16,
    /// The address the `call` targeted. Recorded so that a jump engine
    /// recognised *after* this entry was deferred can still find and
    /// reclaim it (see `WorkQueues::take_returns_for_callee`).
    pub callee: u16,
}

/// FIFO worklists plus their dedup sets, so each address enters either
/// queue at most once.
#[derive(Debug, Default)]
pub struct WorkQueues {
    parse_queue: VecDeque<ParseEntry>,
    parse_added: HashSet<u16>,
    return_queue: VecDeque<ReturnEntry>,
    return_added: HashSet<u16>,
}

impl WorkQueues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_parse(&mut self, entry: ParseEntry) {
        if self.parse_added.insert(entry.addr) {
            self.parse_queue.push_back(entry);
        }
    }

    pub fn pop_parse(&mut self) -> Option<ParseEntry> {
        self.parse_queue.pop_front()
    }

    #[must_use]
    pub fn parse_is_empty(&self) -> bool {
        self.parse_queue.is_empty()
    }

    pub fn push_return(&mut self, entry: ReturnEntry) {
        if self.return_added.insert(entry.addr) {
            self.return_queue.push_back(entry);
        }
    }

    #[must_use]
    pub fn return_is_empty(&self) -> bool {
        self.return_queue.is_empty()
    }

    /// Removes and returns a deferred return-address entry, if present.
    /// Used by the jump-engine detector to reclaim a post-call byte as
    /// the start of a function-pointer table.
    pub fn take_return(&mut self, addr: u16) -> Option<ReturnEntry> {
        let pos = self.return_queue.iter().position(|e| e.addr == addr)?;
        self.return_queue.remove(pos)
    }

    /// Removes and returns every deferred return entry whose `call_site`
    /// targeted `callee`. Used when a context is recognised as a jump
    /// engine only *after* one of its callers' `JSR` was already
    /// dispatched (and so deferred its fallthrough instead of claiming it
    /// immediately): recognition reaches back for those stragglers rather
    /// than leaving them to rot into ordinary code on the next sweep.
    pub fn take_returns_for_callee(&mut self, callee: u16) -> Vec<ReturnEntry> {
        let (matching, rest): (VecDeque<_>, VecDeque<_>) =
            self.return_queue.drain(..).partition(|e| e.callee == callee);
        self.return_queue = rest;
        matching.into_iter().collect()
    }

    /// Drains every remaining deferred return address into the parse
    /// queue, re-marking it for dedup under the parse set. Called once
    /// both worklists and the jump-engine scanner have stopped making
    /// progress within a round.
    pub fn promote_returns_to_parse(&mut self) {
        while let Some(entry) = self.return_queue.pop_front() {
            self.push_parse(ParseEntry {
                addr: entry.addr,
                from: Some(entry.call_site),
                kind: ReferenceKind::Call,
                from_branch: false,
                context: entry.context,
            });
        }
    }

    #[must_use]
    pub fn is_fully_drained(&self) -> bool {
        self.parse_is_empty() && self.return_is_empty()
    }
}
