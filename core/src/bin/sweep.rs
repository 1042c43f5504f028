use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use clap::Parser;
use ronin_mines_core::*;

#[derive(Parser, Debug)]
#[command(version, about = "Play Ronin Mines in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset: easy, medium or hard
    #[arg(short, long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Open(Coord2),
    Flag(Coord2),
    Act(Coord2),
    SwitchMode,
    Reset,
    Difficulty(Difficulty),
    Snapshot,
    Quit,
}

fn parse_coords<'a>(mut words: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let row = words.next().context("missing row")?.parse().context("bad row")?;
    let col = words.next().context("missing column")?.parse().context("bad column")?;
    Ok((row, col))
}

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        bail!("empty command");
    };

    Ok(match first {
        "o" | "open" => Command::Open(parse_coords(words)?),
        "f" | "flag" => Command::Flag(parse_coords(words)?),
        "m" | "mode" => Command::SwitchMode,
        "r" | "reset" => Command::Reset,
        "d" | "difficulty" => Command::Difficulty(words.next().context("missing difficulty")?.parse()?),
        "s" | "snapshot" => Command::Snapshot,
        "q" | "quit" => Command::Quit,
        _ => Command::Act(parse_coords(line.split_whitespace())?),
    })
}

fn cell_char(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Mine => '*',
        CellView::Opened(0) => '.',
        CellView::Opened(count) => char::from(b'0' + count),
    }
}

fn render(out: &mut impl Write, game: &Game, mode: InputMode) -> io::Result<()> {
    let (rows, cols) = game.size();
    writeln!(
        out,
        "MINES {}  TIME {}  STATUS {}  MODE {:?}",
        game.mines_remaining(),
        format_clock(game.elapsed()),
        game.status(),
        mode
    )?;
    for row in 0..rows {
        let line: String = (0..cols).map(|col| cell_char(game.cell_view((row, col)))).collect();
        writeln!(out, "{:>3} {}", row, line)?;
    }
    Ok(())
}

fn start_game(difficulty: Difficulty, seed: Option<u64>) -> Game {
    let game = Game::new(difficulty);
    match seed {
        Some(seed) => game.with_seed(seed),
        None => game,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let mut game = start_game(args.difficulty, args.seed);
    let mut mode = InputMode::default();
    let mut out = io::stdout().lock();
    render(&mut out, &game, mode)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "? {:#}", err)?;
                continue;
            }
        };
        log::trace!("{:?}", command);

        match command {
            Command::Open(coords) => {
                game.open_cell(coords);
            }
            Command::Flag(coords) => {
                game.toggle_flag(coords);
            }
            Command::Act(coords) => {
                game.act(mode, coords);
            }
            Command::SwitchMode => mode = mode.toggled(),
            Command::Reset => {
                game.reset();
                if let Some(seed) = args.seed {
                    game = game.with_seed(seed);
                }
            }
            Command::Difficulty(difficulty) => game.set_difficulty(difficulty),
            Command::Snapshot => {
                writeln!(out, "{}", game.snapshot().to_json_pretty()?)?;
                continue;
            }
            Command::Quit => break,
        }

        render(&mut out, &game, mode)?;
    }

    Ok(())
}
