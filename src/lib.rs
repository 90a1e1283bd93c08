pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod world;

use log::{info, warn};

use command::Command;
use config::GameConfig;
use engine::{
    Output, handle_drop, handle_eat, handle_help, handle_inventory, handle_jump, handle_open,
    handle_shoot, handle_sit, handle_take, has_won, render_room, try_handle_movement,
};
use error::LoadError;
use world::{Inventory, Item, ItemLocation, Room, World, canonical_key, validate_world};

pub use world::{load_world_from_files, load_world_from_str};

pub const FAREWELL: &str = "Thank you for playing.  Good bye.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Died,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Finished(Outcome),
}

/// One play session: owns its world, the player's inventory and the turn state.
pub struct Game {
    pub world: World,
    pub player: Inventory,
    pub current_room_id: String,
    pub state: GameState,
    title: String,
    win_inventory_size: usize,
}

impl Game {
    /// Loads the data files named by `config` and builds a ready-to-play game.
    pub fn from_config(config: &GameConfig) -> Result<Self, LoadError> {
        let world = load_world_from_files(&config.rooms_file, &config.items_file)?;
        Game::new(world, config)
    }

    pub fn new(mut world: World, config: &GameConfig) -> Result<Self, LoadError> {
        let start = canonical_key(&config.start_room);
        if !world.rooms.contains_key(&start) {
            return Err(LoadError::UnknownRoom {
                referenced_by: "start_room".to_string(),
                key: start,
            });
        }

        for seed in &config.start_item {
            let room_key = seed
                .room
                .as_deref()
                .map(canonical_key)
                .unwrap_or_else(|| start.clone());
            if !world.rooms.contains_key(&room_key) {
                return Err(LoadError::UnknownRoom {
                    referenced_by: format!("start_item '{}'", seed.name),
                    key: room_key,
                });
            }

            let item = Item::new(seed.name.as_str(), seed.description.as_str())
                .openable(seed.openable);
            if world.initial_locations.contains_key(&item.key()) {
                return Err(LoadError::DuplicateKey {
                    kind: "item",
                    key: item.key(),
                });
            }
            world
                .initial_locations
                .insert(item.key(), ItemLocation::Room(room_key.clone()));
            if let Some(room) = world.room_mut(&room_key) {
                room.inventory.push(item);
            }
        }

        for problem in validate_world(&world, &start) {
            warn!("{}", problem.message);
        }

        info!("starting in {}", start);
        Ok(Game {
            world,
            player: Inventory::new(),
            current_room_id: start,
            state: GameState::Running,
            title: config.title.clone(),
            win_inventory_size: config.win_inventory_size,
        })
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.world.room(&self.current_room_id)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Running => None,
            GameState::Finished(outcome) => Some(outcome),
        }
    }

    /// Welcome banner and the first look at the start room.
    pub fn start(&self) -> Output {
        let mut out = Output::new();
        out.say(format!("Welcome to {}!", self.title));
        out.say(format!(
            "{} is a new, incredibly boring adventure game.",
            self.title
        ));
        out.say("Type 'help' if you need help.");
        if let Some(room) = self.current_room() {
            render_room(&mut out, room);
        }
        out
    }

    /// Applies one command. Once the game is finished further commands do nothing.
    pub fn step(&mut self, command: Command) -> Output {
        let mut out = Output::new();
        if self.is_finished() {
            return out;
        }

        if let Some(outcome) = self.dispatch(&mut out, command) {
            self.finish(&mut out, outcome);
        } else if has_won(&self.player, self.win_inventory_size) {
            out.event("You have everything a Hall of Famer needs. You win!");
            self.finish(&mut out, Outcome::Won);
        }

        out
    }

    fn finish(&mut self, out: &mut Output, outcome: Outcome) {
        info!("game over: {:?}", outcome);
        self.state = GameState::Finished(outcome);
        out.say(FAREWELL);
    }

    fn dispatch(&mut self, out: &mut Output, command: Command) -> Option<Outcome> {
        match command {
            Command::Unknown => out.say("I don't know what you mean..."),
            Command::Help => {
                if let Some(room) = self.world.room(&self.current_room_id) {
                    handle_help(out, room);
                }
            }
            Command::Go(destination) => try_handle_movement(
                out,
                &mut self.current_room_id,
                &self.world,
                &self.player,
                destination.as_deref(),
            ),
            Command::Quit(Some(_)) => out.say("Quit what?"),
            Command::Quit(None) => return Some(Outcome::Quit),
            Command::Eat(None) => out.say("Eat what?"),
            Command::Eat(Some(food)) => handle_eat(out, &food),
            Command::Jump => {
                handle_jump(out);
                return Some(Outcome::Died);
            }
            Command::Sit => handle_sit(out),
            Command::Take(None) => out.say("Take what?"),
            Command::Take(Some(name)) => handle_take(
                out,
                &mut self.world,
                &mut self.current_room_id,
                &mut self.player,
                &name,
            ),
            Command::Drop(None) => out.say("Drop what?"),
            Command::Drop(Some(name)) => handle_drop(
                out,
                &mut self.world,
                &self.current_room_id,
                &mut self.player,
                &name,
            ),
            Command::Inventory => handle_inventory(out, &self.player),
            Command::Open(None) => out.say("Open what?"),
            Command::Open(Some(name)) => handle_open(out, &self.player, &name),
            Command::Shoot(None) => out.say("Shoot what?"),
            Command::Shoot(Some(target)) => {
                if let Some(room) = self.world.room(&self.current_room_id) {
                    if handle_shoot(out, room, &target) {
                        return Some(Outcome::Won);
                    }
                }
            }
        }
        None
    }
}
