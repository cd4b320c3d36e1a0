//! Loader -> Engine -> dialect pipeline, end to end: builds a synthetic
//! in-memory `.nes` file, parses it with `ines::RomImage`, traces and
//! finalises it, and renders it in all three output dialects.

use nesdisasm::dialect::{self, EmitOptions, OutputDialect};
use nesdisasm::ines::RomImage;
use nesdisasm::Engine;

const HEADER_LEN: usize = 16;
const PRG_BANK_LEN: usize = 16 * 1024;

fn synthetic_nes_file() -> Vec<u8> {
    let mut data = vec![0u8; HEADER_LEN];
    data[0..4].copy_from_slice(b"NES\x1a");
    data[4] = 1; // one 16 KiB PRG bank
    data[5] = 0; // no CHR
    data[6] = 0x01; // vertical mirroring
    data[7] = 0x00;
    data[9] = 0x00; // NTSC
    data[10] = 0x00; // PRG RAM present

    let mut prg = vec![0xEAu8; PRG_BANK_LEN]; // NOP sled
    let reset = 0xC000u16; // code_base for a single 16 KiB bank
    let len = prg.len();
    prg[len - 4] = (reset & 0xFF) as u8;
    prg[len - 3] = (reset >> 8) as u8;
    data.extend(prg);
    data
}

#[test]
fn full_pipeline_renders_in_every_dialect() {
    let data = synthetic_nes_file();
    let rom = RomImage::parse(&data).unwrap();
    assert_eq!(rom.prg.len(), PRG_BANK_LEN);
    assert_eq!(rom.code_base(), 0xC000);

    let mut engine = Engine::new(&rom.prg, rom.code_base()).unwrap();
    engine.trace();
    let image = engine.finalize(&rom.chr);

    assert_eq!(image.symbols.handlers.reset, "Reset");

    for dialect in [OutputDialect::asm6(), OutputDialect::ca65(), OutputDialect::nesasm()] {
        let opts = EmitOptions {
            rom_meta: Some(rom.meta),
            ..EmitOptions::default()
        };
        let text = dialect::render(&image, dialect, opts);
        assert!(text.contains("prg crc32"));
        assert!(text.contains("mapper 0"));
        assert!(text.contains("NTSC"));
        assert!(text.contains("Reset:"));
        assert!(!text.is_empty());
    }
}
