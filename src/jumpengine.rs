//! Jump-engine detector (component F): recognises the classic indirect-
//! dispatch idiom (a function ending in `JMP (addr)` that is fed a
//! function-pointer table placed immediately after each of its callers),
//! and walks those tables as they're discovered.
//!
//! Engines are keyed by the address of the enclosing function context
//! (its call-destination address), matching the source behaviour the
//! specification's own open question describes: a context containing
//! more than one independent indirect dispatcher is not distinguished,
//! the first one recognised registers that context. This implementation
//! deliberately keeps that limitation rather than keying by the `JMP
//! (ind)` instruction's own address, since the latter would change which
//! addresses a caller's `JSR` is matched against (see DESIGN.md).

use std::collections::HashMap;

use crate::memory::MemoryView;
use crate::offsets::{OffsetFlags, ReferenceKind, Store};
use crate::queue::{ParseEntry, WorkQueues};

/// Bookkeeping for one caller's function-pointer table.
#[derive(Debug, Clone, Copy)]
struct CallerRecord {
    engine: u16,
    table_start: u16,
    entries: usize,
    terminated: bool,
}

#[derive(Debug, Default)]
pub struct JumpEngineState {
    /// Context address -> the smaller of the two adjacent absolute
    /// references that triggered recognition (diagnostic only).
    engines: HashMap<u16, u16>,
    /// Call-site address -> its table's walking state.
    callers: HashMap<u16, CallerRecord>,
    /// Insertion order of `callers`, for deterministic tie-breaking.
    caller_order: Vec<u16>,
}

impl JumpEngineState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_engine(&self, context: u16) -> bool {
        self.engines.contains_key(&context)
    }

    /// Examines the most recent (up to 16) absolute data references
    /// collected for `context` and recognises it as a jump engine if two
    /// of them are adjacent (same base, or low/high byte pair: addresses
    /// differ by 0 or 1). Returns whether this call is what newly
    /// recognised it, so the caller can reclaim any callers whose `JSR`
    /// was dispatched before recognition happened.
    pub fn try_recognize_engine(&mut self, context: u16, recent_refs: &[u16]) -> bool {
        if self.engines.contains_key(&context) {
            return false;
        }
        let window = &recent_refs[recent_refs.len().saturating_sub(16)..];
        for (i, &a) in window.iter().enumerate() {
            for &b in &window[i + 1..] {
                if a.abs_diff(b) <= 1 {
                    self.engines.insert(context, a.min(b));
                    log::debug!("jump engine recognised at context {context:#06x}");
                    return true;
                }
            }
        }
        false
    }

    /// Reclaims every caller whose `JSR` targeted `context` and was
    /// already dispatched (its fallthrough deferred to the return queue)
    /// before `context` was recognised as an engine. Call once
    /// immediately after `try_recognize_engine` returns `true`.
    pub fn claim_pending_callers(&mut self, context: u16, queues: &mut WorkQueues) {
        for entry in queues.take_returns_for_callee(context) {
            self.register_caller(entry.call_site, context, entry.addr, queues);
        }
    }

    /// Called when a `call` instruction targets a known engine: reclaims
    /// the deferred post-call return address as the start of that
    /// caller's function-pointer table.
    pub fn register_caller(
        &mut self,
        call_site: u16,
        engine_context: u16,
        table_start: u16,
        queues: &mut WorkQueues,
    ) {
        if self.callers.contains_key(&call_site) {
            return;
        }
        // The byte range is no longer a classification candidate via the
        // ordinary post-call path; the table walker owns it now.
        queues.take_return(table_start);
        self.callers.insert(
            call_site,
            CallerRecord {
                engine: engine_context,
                table_start,
                entries: 0,
                terminated: false,
            },
        );
        self.caller_order.push(call_site);
        log::debug!(
            "call site {call_site:#06x} reinterpreted as jump table starting at {table_start:#06x}"
        );
    }

    /// Advances the non-terminated caller table with the fewest
    /// processed entries by exactly one step: either it accepts one new
    /// entry (enqueuing its target) or it terminates. Returns `false`
    /// only when there is no active table left to advance.
    pub fn scan_for_new_entry(
        &mut self,
        store: &mut Store,
        memory: &MemoryView<'_>,
        queues: &mut WorkQueues,
    ) -> bool {
        let Some(call_site) = self.pick_smallest_active() else {
            return false;
        };
        let record = *self.callers.get(&call_site).unwrap();
        let entry_addr = record
            .table_start
            .wrapping_add((record.entries as u16).wrapping_mul(2));

        let in_range = memory.contains(entry_addr) && memory.contains(entry_addr.wrapping_add(1));
        let dest = in_range.then(|| memory.read_word(entry_addr).ok()).flatten();

        let already_code = store.is_type(entry_addr, OffsetFlags::CODE)
            || store.is_type(entry_addr.wrapping_add(1), OffsetFlags::CODE);

        let Some(dest) = dest.filter(|d| {
            !already_code && *d >= memory.code_base() && *d < memory.last_code_address()
        }) else {
            self.terminate(call_site, if in_range { "already code" } else { "out of range" });
            return true;
        };

        if let Some(o) = store.get_mut(entry_addr) {
            o.bytes = dest.to_le_bytes().to_vec();
            o.flags.insert(OffsetFlags::FUNCTION_REFERENCE);
            if record.entries == 0 {
                o.flags.insert(OffsetFlags::JUMP_TABLE);
            }
        }
        store.set_type(entry_addr.wrapping_add(1), OffsetFlags::FUNCTION_REFERENCE);
        store.add_inbound_branch(dest, entry_addr, ReferenceKind::JumpTableEntry);

        queues.push_parse(ParseEntry {
            addr: dest,
            from: Some(entry_addr),
            kind: ReferenceKind::JumpTableEntry,
            from_branch: true,
            context: dest,
        });

        if let Some(record) = self.callers.get_mut(&call_site) {
            record.entries += 1;
        }
        true
    }

    fn terminate(&mut self, call_site: u16, why: &'static str) {
        if let Some(record) = self.callers.get_mut(&call_site) {
            record.terminated = true;
            log::debug!(
                "jump table for call site {call_site:#06x} terminated ({why}) after {} entries",
                record.entries
            );
        }
    }

    fn pick_smallest_active(&self) -> Option<u16> {
        self.caller_order
            .iter()
            .filter(|site| self.callers.get(site).is_some_and(|r| !r.terminated))
            .min_by_key(|site| self.callers[site].entries)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_adjacent_absolute_references() {
        let mut state = JumpEngineState::new();
        state.try_recognize_engine(0x8000, &[0x1234, 0x0200, 0x0201]);
        assert!(state.is_engine(0x8000));
    }

    #[test]
    fn does_not_recognise_unrelated_references() {
        let mut state = JumpEngineState::new();
        state.try_recognize_engine(0x8000, &[0x1234, 0x5678]);
        assert!(!state.is_engine(0x8000));
    }

    #[test]
    fn walks_table_and_terminates_out_of_range() {
        let mut store = Store::new(0x8000, 0x20);
        let prg = [0u8; 0x20];
        let memory = MemoryView::new(&prg, 0x8000);
        let mut queues = WorkQueues::new();
        let mut state = JumpEngineState::new();

        state.try_recognize_engine(0x8000, &[0x0300, 0x0301]);
        state.register_caller(0x8010, 0x8000, 0x8012, &mut queues);
        // entry at 0x8012 reads prg bytes which are all zero -> dest 0x0000,
        // outside [code_base, last_code_address) -> terminates immediately.
        assert!(state.scan_for_new_entry(&mut store, &memory, &mut queues));
        assert!(state.callers.get(&0x8010).unwrap().terminated);
    }
}
