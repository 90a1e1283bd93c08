use log::{debug, info, warn};

use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::world::{self, Inventory};

/// Picking up the ball in the hallway knocks the player back to the attic.
const BALL_ITEM: &str = "ball";
const BALL_ROOM: &str = "Hallway";
const BALL_WAKE_ROOM: &str = "ATTIC";

pub fn handle_inventory(out: &mut Output, player: &Inventory) {
    out.say(player.to_string());
}

pub fn handle_take(
    out: &mut Output,
    world: &mut world::World,
    current_room_id: &mut String,
    player: &mut Inventory,
    item_name: &str,
) {
    let Some(room) = world.room_mut(current_room_id.as_str()) else {
        out.say(format!("Error: you are in an unknown room '{}'", current_room_id));
        return;
    };

    let Some(item) = room.inventory.remove_item(item_name) else {
        out.say(format!("There is no {} here.", item_name));
        return;
    };

    if let Err(item) = player.add_item(item) {
        room.inventory.push(item);
        out.say(format!("You were unable to take the {}", item_name));
        return;
    }

    debug!("took {} from {}", item_name, current_room_id);
    out.say(format!("You have taken the {}", item_name));

    if room.name == BALL_ROOM && item_name == BALL_ITEM {
        match world.room(BALL_WAKE_ROOM) {
            Some(wake_room) => {
                info!("ball pickup: {} -> {}", current_room_id, BALL_WAKE_ROOM);
                *current_room_id = BALL_WAKE_ROOM.to_string();
                out.event(
                    "You seem to be lying on the floor all confused. \
                     It seems you have been here for a while.",
                );
                render_room(out, wake_room);
            }
            None => warn!("no {} room to wake up in", BALL_WAKE_ROOM),
        }
    }
}

pub fn handle_drop(
    out: &mut Output,
    world: &mut world::World,
    current_room_id: &str,
    player: &mut Inventory,
    item_name: &str,
) {
    let Some(room) = world.room_mut(current_room_id) else {
        out.say(format!("Error: you are in an unknown room '{}'", current_room_id));
        return;
    };

    let Some(item) = player.remove_item(item_name) else {
        out.say(format!("You are not carrying a {}.", item_name));
        return;
    };

    if let Err(item) = room.inventory.add_item(item) {
        player.push(item);
        out.say(format!("You were unable to drop the {}", item_name));
        return;
    }

    debug!("dropped {} in {}", item_name, current_room_id);
    out.say(format!("You have dropped the {}", item_name));
}

/// Only looks in the player's own inventory, never the room's.
pub fn handle_open(out: &mut Output, player: &Inventory, item_name: &str) {
    match player.contains(item_name) {
        Some(item) if item.contents.is_empty() => {
            out.say(format!("The {} is empty.", item.name));
        }
        Some(item) => out.say(item.contents.to_string()),
        None => out.say("What is it that you think you have but do not."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{World, load_world_from_str};
    use test_log::test;

    const ROOMS: &str = "\
Room: Attic
Description: Dusty.
Exits: D-Hallway
Room: Hallway
Description: Long.
Exits: U-Attic
";

    const ITEMS: &str = "\
Item: ball
Description: Worn leather.
Openable: false
Room: Hallway
Item: shoe
Description: Size 15.
Openable: false
Room: Hallway
Item: Locker
Description: Metal.
Openable: true
Room: Attic
Item: jersey
Description: Number 23.
Openable: false
Item: Locker
";

    fn world() -> World {
        load_world_from_str(ROOMS, ITEMS).unwrap()
    }

    fn room_items(world: &World, key: &str) -> String {
        world.room(key).unwrap().inventory.to_string()
    }

    #[test]
    fn take_moves_item_from_room_to_player() {
        let mut world = world();
        let mut here = "HALLWAY".to_string();
        let mut player = Inventory::new();
        let mut out = Output::new();

        handle_take(&mut out, &mut world, &mut here, &mut player, "shoe");

        assert_eq!(room_items(&world, "HALLWAY"), "ball");
        assert_eq!(player.to_string(), "shoe");
        assert_eq!(here, "HALLWAY");
        assert_eq!(out.text(), "You have taken the shoe");
    }

    #[test]
    fn take_missing_item_changes_nothing() {
        let mut world = world();
        let mut here = "ATTIC".to_string();
        let mut player = Inventory::new();
        let mut out = Output::new();

        handle_take(&mut out, &mut world, &mut here, &mut player, "ball");

        assert_eq!(out.text(), "There is no ball here.");
        assert!(player.is_empty());
        assert_eq!(room_items(&world, "HALLWAY"), "ball\nshoe");
    }

    #[test]
    fn taking_the_ball_in_the_hallway_wakes_you_in_the_attic() {
        let mut world = world();
        let mut here = "HALLWAY".to_string();
        let mut player = Inventory::new();
        let mut out = Output::new();

        handle_take(&mut out, &mut world, &mut here, &mut player, "ball");

        assert_eq!(here, "ATTIC");
        assert!(player.contains("ball").is_some());
        assert!(out.contains("lying on the floor all confused"));
        assert!(out.contains("Dusty."));
    }

    #[test]
    fn drop_is_the_inverse_of_take() {
        let mut world = world();
        let mut here = "HALLWAY".to_string();
        let mut player = Inventory::new();
        let mut out = Output::new();

        handle_take(&mut out, &mut world, &mut here, &mut player, "shoe");
        handle_drop(&mut out, &mut world, "ATTIC", &mut player, "shoe");

        assert!(player.is_empty());
        assert_eq!(room_items(&world, "ATTIC"), "Locker\nshoe");
        assert!(out.contains("You have dropped the shoe"));
    }

    #[test]
    fn drop_unheld_item_reports_it() {
        let mut world = world();
        let mut player = Inventory::new();
        let mut out = Output::new();

        handle_drop(&mut out, &mut world, "ATTIC", &mut player, "lamp");
        assert_eq!(out.text(), "You are not carrying a lamp.");
    }

    #[test]
    fn open_only_looks_in_player_inventory() {
        let mut world = world();
        let mut here = "ATTIC".to_string();
        let mut player = Inventory::new();

        let mut out = Output::new();
        handle_open(&mut out, &player, "Locker");
        assert_eq!(out.text(), "What is it that you think you have but do not.");

        handle_take(&mut Output::new(), &mut world, &mut here, &mut player, "Locker");

        let mut out = Output::new();
        handle_open(&mut out, &player, "locker");
        assert_eq!(out.text(), "jersey");
    }

    #[test]
    fn open_empty_item_says_so() {
        let mut world = world();
        let mut here = "HALLWAY".to_string();
        let mut player = Inventory::new();
        handle_take(&mut Output::new(), &mut world, &mut here, &mut player, "shoe");

        let mut out = Output::new();
        handle_open(&mut out, &player, "shoe");
        assert_eq!(out.text(), "The shoe is empty.");
    }

    #[test]
    fn inventory_listing_is_names_as_is() {
        let mut player = Inventory::new();
        let mut out = Output::new();
        handle_inventory(&mut out, &player);
        assert!(out.is_empty());

        player.push(crate::world::Item::new("ball", ""));
        player.push(crate::world::Item::new("shoe", ""));
        handle_inventory(&mut out, &player);
        assert_eq!(out.text(), "ball\nshoe");
    }
}
