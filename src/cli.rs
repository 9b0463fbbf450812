use clap::Parser;

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Draw pieces as Unicode chess glyphs instead of letters
    #[clap(long)]
    pub symbols: bool,
    /// Let a random mover play both sides for at most this many plies
    #[clap(long, value_name = "PLIES")]
    pub autoplay: Option<u32>,
    /// Seed for the random mover
    #[clap(long, value_name = "N", default_value = "0")]
    pub seed: u64,
    /// Log to stderr at this level (error, warn, info, debug, trace)
    #[clap(long, value_name = "LEVEL", default_value = "off")]
    pub log_level: log::LevelFilter,
}
