use std::io::Write;

use anyhow::Result;

use crate::{
    bits::{self, BitIndex, IntoBit},
    status::{StatusByte, StatusFlag},
};

const TITLE: &str = "Bit manipulation demo";

/// Bits queried through the generic extractor, in the order they are printed.
const SAMPLE_BITS: [BitIndex; 4] = [
    BitIndex::MSB,
    BitIndex::ALL[6],
    BitIndex::ALL[1],
    BitIndex::LSB,
];

pub fn write_report<W: Write>(out: &mut W, status: StatusByte) -> Result<()> {
    log::debug!("Writing report for status byte {:#04X}", status.bits());

    write_header(out, status)?;
    write_named_flags(out, status)?;
    write_lsb_first(out, status)?;
    write_msb_first(out, status)?;
    write_generic_samples(out, status)?;

    out.flush()?;
    Ok(())
}

fn position_label(index: BitIndex) -> String {
    if index.is_lsb() {
        format!("Bit {} - LSB", index)
    } else if index.is_msb() {
        format!("Bit {} - MSB", index)
    } else {
        format!("Bit {}", index)
    }
}

fn write_header<W: Write>(out: &mut W, status: StatusByte) -> Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;
    writeln!(out, "Status byte (decimal): {}", status.bits())?;
    writeln!(out, "Status byte (binary):  {:08b}", status.bits())?;
    Ok(())
}

fn write_named_flags<W: Write>(out: &mut W, status: StatusByte) -> Result<()> {
    log::debug!("Named flags: {:?}", status.flags());
    log::debug!("Packed fields: {:?}", status.fields());

    writeln!(out)?;
    writeln!(out, "--- Named flags (LSB -> MSB) ---")?;
    for (flag, value) in status.named() {
        let label = format!("{} ({}):", flag.as_ref(), position_label(flag.index()));
        writeln!(out, "  {:<26}{}", label, value.into_bit())?;
    }
    Ok(())
}

fn write_lsb_first<W: Write>(out: &mut W, status: StatusByte) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Manual extraction: LSB -> MSB (bit 0 to bit 7) ---")?;
    for (index, bit) in bits::lsb_first(status.bits()) {
        writeln!(out, "Bit {} (LSB -> MSB): {}", index, bit.into_bit())?;
    }
    Ok(())
}

fn write_msb_first<W: Write>(out: &mut W, status: StatusByte) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Manual extraction: MSB -> LSB (bit 7 to bit 0) ---")?;
    for (index, bit) in bits::msb_first(status.bits()) {
        writeln!(out, "Bit {} (MSB -> LSB): {}", index, bit)?;
    }
    Ok(())
}

fn write_generic_samples<W: Write>(out: &mut W, status: StatusByte) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Generic extractor ---")?;
    for index in SAMPLE_BITS {
        let bit = bits::extract(status.bits(), index)?;
        let label = format!(
            "{} ({}):",
            position_label(index),
            StatusFlag::at(index).as_ref()
        );
        writeln!(out, "{:<26}{}", label, bit.into_bit())?;
    }
    Ok(())
}
