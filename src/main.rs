use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use temple_crawl::engine::Output;
use temple_crawl::{GameState, builtin_dungeon, load_dungeon_from_file, logging};

fn flush_output(out: &Output) -> io::Result<()> {
    if out.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    write!(stdout, "{out}")?;
    stdout.flush()
}

fn main() -> io::Result<()> {
    logging::init();

    // Optional alternative world; the temple is built in.
    let world_path: Option<PathBuf> = env::args().nth(1).map(PathBuf::from);

    let loaded = match &world_path {
        Some(path) => load_dungeon_from_file(path),
        None => builtin_dungeon(),
    };

    let dungeon = match loaded {
        Ok(d) => d,
        Err(e) => {
            match &world_path {
                Some(path) => eprintln!("Failed to load world file '{}': {e}", path.display()),
                None => eprintln!("Failed to build the temple: {e}"),
            }
            std::process::exit(1);
        }
    };

    let mut game = GameState::new(dungeon);
    flush_output(&game.initialize())?;

    let stdin = io::stdin();

    loop {
        print!("Enter choice: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!();
            flush_output(&game.end_of_input())?;
            break;
        }

        let (out, quit) = game.step(&input);
        flush_output(&out)?;

        if quit {
            break;
        }
    }

    Ok(())
}
