use clap::Parser;
use roshambo::play::table::Table;

/// Rock-Paper-Scissors in the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// round wins required to take the match
    #[arg(long, default_value_t = roshambo::WINNING_SCORE, value_parser = clap::value_parser!(u8).range(1..))]
    wins: roshambo::Score,
    /// type throws as free text instead of picking from a menu
    #[arg(long)]
    typed: bool,
}

fn main() -> anyhow::Result<()> {
    roshambo::log();
    let args = Args::parse();
    Table::new(args.wins, args.typed).play()
}
