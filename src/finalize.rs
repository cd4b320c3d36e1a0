//! Finaliser (component G): the pass that runs once the tracer and
//! jump-engine detector have both stopped producing work. Sweeps every
//! byte the tracer never visited into plain data, fills in their raw
//! content, checksums the image, and sanity-checks that every offset
//! carrying an inbound reference also carries a label.

use crc32fast::Hasher;

use crate::memory::MemoryView;
use crate::offsets::{OffsetFlags, Store};
use crate::symbols::SymbolTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksums {
    pub prg: u32,
    pub chr: u32,
    pub combined: u32,
}

impl Checksums {
    #[must_use]
    pub fn compute(prg: &[u8], chr: &[u8]) -> Self {
        let prg_crc = crc32fast::hash(prg);
        let chr_crc = crc32fast::hash(chr);
        let mut combined = Hasher::new();
        combined.update(prg);
        combined.update(chr);
        Self {
            prg: prg_crc,
            chr: chr_crc,
            combined: combined.finalize(),
        }
    }
}

pub struct FinalizedImage {
    pub store: Store,
    pub symbols: SymbolTables,
    pub checksums: Checksums,
}

/// Runs the finalisation pass described above and returns the
/// immutable result an emitter consumes.
#[must_use]
pub fn finalize(
    mut store: Store,
    symbols: SymbolTables,
    memory: &MemoryView<'_>,
    chr: &[u8],
) -> FinalizedImage {
    sweep_untyped_to_data(&mut store, memory);
    check_labeled_references(&store);
    let checksums = Checksums::compute(memory.as_slice(), chr);
    FinalizedImage {
        store,
        symbols,
        checksums,
    }
}

/// Every byte the tracer never classified one way or another becomes
/// plain data, one offset per byte (no attempt to group it into words
/// or runs -- a dialect emitter may coalesce adjacent `DataOffset` bytes
/// into a `.byte` list itself).
fn sweep_untyped_to_data(store: &mut Store, memory: &MemoryView<'_>) {
    let untyped: Vec<u16> = store
        .iter()
        .filter(|o| {
            !o.intersects_type(
                OffsetFlags::CODE | OffsetFlags::CODE_AS_DATA | OffsetFlags::DATA_OFFSET,
            )
        })
        .map(|o| o.address)
        .collect();
    for addr in untyped {
        store.set_type(addr, OffsetFlags::DATA_OFFSET);
        if let Ok(byte) = memory.read(addr) {
            store.set_bytes_and_code(addr, vec![byte], String::new());
        }
    }
}

fn check_labeled_references(store: &Store) {
    for offset in store.iter() {
        if !offset.inbound_branches.is_empty() && !offset.has_label() {
            log::warn!(
                "offset {:#06x} has inbound references but no label",
                offset.address
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolTables;

    #[test]
    fn sweeps_untouched_bytes_to_data() {
        let store = Store::new(0x8000, 4);
        let prg = [0xDE, 0xAD, 0xBE, 0xEF];
        let memory = MemoryView::new(&prg, 0x8000);
        let result = finalize(store, SymbolTables::new().unwrap(), &memory, &[]);
        for addr in 0x8000..0x8004 {
            assert!(result.store.is_type(addr, OffsetFlags::DATA_OFFSET));
        }
        assert_eq!(result.store.get(0x8000).unwrap().bytes, vec![0xDE]);
    }

    #[test]
    fn checksums_are_deterministic() {
        let a = Checksums::compute(&[1, 2, 3], &[4, 5]);
        let b = Checksums::compute(&[1, 2, 3], &[4, 5]);
        assert_eq!(a, b);
        assert_ne!(a.prg, a.chr);
    }
}
