use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use hoopzork::config::GameConfig;
use hoopzork::engine::{Output, OutputBlock};
use hoopzork::{FAREWELL, Game, command};

const DEFAULT_CONFIG: &str = "data/game.toml";

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
                printed_anything = true;
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
            OutputBlock::Exits(exits) => {
                println!("{}", exits);
                printed_anything = true;
            }
        }
    }
}

fn load_config(arg: Option<String>) -> Result<GameConfig, hoopzork::error::LoadError> {
    match arg {
        Some(path) => GameConfig::load(Path::new(&path)),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG);
            if path.exists() {
                GameConfig::load(&path)
            } else {
                warn!("{} not found, using built-in defaults", path.display());
                let mut config = GameConfig::default();
                config.rebase(Path::new("data"));
                Ok(config)
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let config = match load_config(env::args().nth(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    let mut game = match Game::from_config(&config) {
        Ok(g) => {
            info!(
                "using {} and {}",
                config.rooms_file.display(),
                config.items_file.display()
            );
            g
        }
        Err(e) => {
            eprintln!("Failed to build the world: {e}");
            std::process::exit(1);
        }
    };

    println!();
    flush_output(game.start());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !game.is_finished() {
        print!("> ");
        io::stdout().flush()?;

        let Some(cmd) = command::read_command(&mut input)? else {
            println!("\n{}", FAREWELL);
            break;
        };

        flush_output(game.step(cmd));
    }

    Ok(())
}
