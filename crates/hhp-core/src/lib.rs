//! Core type aliases, traits, and constants for hand history parsing.
//!
//! This crate provides the foundational types and configuration parameters
//! shared by every crate in the workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and bet amounts in integer minor-currency units.
/// Cents for cash games, whole chips for tournaments and play money.
pub type Chips = i64;
/// Dealer-relative seat index around the table (0 = button).
pub type Position = usize;
/// Raw seat number as printed by the hand history (usually 1-based).
pub type Chair = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Largest table any known layout prints.
pub const MAX_SEATS: usize = 10;
/// Fewest seats a hand can be dealt to.
pub const MIN_SEATS: usize = 2;
/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;
/// Hole cards dealt to each seat.
pub const HOLE_SIZE: usize = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory for timestamped log files written by [`log`].
pub const LOG_DIRECTORY: &str = "logs";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> std::io::Result<()> {
    std::fs::create_dir_all(LOG_DIRECTORY)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIRECTORY, time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))
}
