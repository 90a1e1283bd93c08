use log::debug;

use crate::engine::conditions::entry_refusal;
use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::world::{self, Inventory};

/// Moves the player through an exit of the current room.
///
/// `destination` is a full direction token ("north"); aliases are expanded by
/// the parser. A missing exit or a gated room leaves `current_room_id` alone.
pub fn try_handle_movement(
    out: &mut Output,
    current_room_id: &mut String,
    world: &world::World,
    player: &Inventory,
    destination: Option<&str>,
) {
    let Some(direction) = destination else {
        out.say("Go where?");
        return;
    };

    let Some(room) = world.room(current_room_id.as_str()) else {
        out.say(format!("Error: you are in an unknown room '{}'", current_room_id));
        return;
    };

    let Some(next) = room.next_room(direction).and_then(|key| world.room(key)) else {
        out.say("There is no door!");
        return;
    };

    if let Some(refusal) = entry_refusal(next, player) {
        debug!("entry to {} refused", next.key());
        out.say(refusal);
        return;
    }

    debug!("{} -> {} ({})", current_room_id, next.key(), direction);
    *current_room_id = next.key();
    render_room(out, next);
}
