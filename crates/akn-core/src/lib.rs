//! Core type aliases and constants for akinator.
//!
//! This crate provides the foundational types and tunable parameters
//! shared by every crate in the akinator workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Priors, likelihoods, and posterior confidence scores.
pub type Probability = f32;
/// Number of training rows that reached a node.
pub type Count = usize;
/// Position of a node in traversal (preorder) order. The root is 0.
pub type Index = usize;
/// Column position of a binary attribute in the attribute table.
pub type Attribute = usize;
/// Rank of a label among the sorted distinct labels.
pub type Class = usize;

// ============================================================================
// CONFIDENCE MODEL
// Single-step Bayesian update: p·l / (p·l + (1 - p)(1 - l)).
// ============================================================================
/// Prior before any yes/no answer, and after a rejected guess.
pub const PRIOR: Probability = 0.5;
/// Prior after the most recent answer was "yes".
pub const PRIOR_YES: Probability = 1.0;
/// Prior after the most recent answer was "no".
pub const PRIOR_NO: Probability = 0.0;
/// Floor applied to the prior so the update never divides by zero.
pub const EPSILON: Probability = 1e-9;

// ============================================================================
// DATASET
// ============================================================================
/// Column holding the champion identity.
pub const LABEL_COLUMN: &str = "champion";
/// Field separator of the attribute table on disk.
pub const DELIMITER: char = ',';

// ============================================================================
// PRESENTATION
// ============================================================================
/// File extension of champion portraits.
pub const PORTRAIT_EXTENSION: &str = "jpg";
/// Directory receiving timestamped log files.
pub const LOG_DIRECTORY: &str = "logs";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates the log directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(LOG_DIRECTORY)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOG_DIRECTORY, time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
