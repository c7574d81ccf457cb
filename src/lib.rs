pub mod game;
pub mod play;
pub mod players;

pub type Score = u8;
pub const WINNING_SCORE: Score = 5;

/// Initialize terminal logging.
/// INFO to the terminal, respecting stderr for warnings.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
