mod cli;
mod logger;

use anyhow::Context;
use chess_rules::board::BoardStyle;
use chess_rules::console::{BoardPrinter, ConsoleInput};
use chess_rules::random::RandomMover;
use chess_rules::Game;

fn main() -> anyhow::Result<()> {
    let cli = <cli::Cli as clap::Parser>::parse();
    logger::init(cli.log_level);

    let style = if cli.symbols {
        BoardStyle::Symbols
    } else {
        BoardStyle::Letters
    };
    let mut output = BoardPrinter::stdout(style);
    let mut game = Game::new();

    let outcome = if let Some(plies) = cli.autoplay {
        let mut mover = RandomMover::new(cli.seed).with_ply_limit(plies);
        game.run(&mut mover, &mut output)
    } else {
        let mut input = ConsoleInput::stdio();
        game.run(&mut input, &mut output)
    };

    if outcome.is_none() {
        println!("Game stopped after {} plies.", game.move_number() - 1);
    }
    std::io::Write::flush(&mut std::io::stdout()).context("failed to flush stdout")?;
    Ok(())
}
