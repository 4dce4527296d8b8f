use statusbits::{consts::STATUS_BYTE, report, status::StatusByte};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Reporting status byte {:#010b}", STATUS_BYTE);

    let stdout = std::io::stdout();
    report::write_report(&mut stdout.lock(), StatusByte::new(STATUS_BYTE))?;

    Ok(())
}
