use std::collections::{HashSet, VecDeque};

use super::model::{Inventory, World};

/// A non-fatal inconsistency in otherwise loadable data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World, start_room: &str) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
        return errors;
    }

    if !world.rooms.contains_key(start_room) {
        errors.push(ValidationError::new(format!(
            "start room '{}' not found among rooms",
            start_room
        )));
    } else {
        let reachable = reachable_from(world, start_room);
        let mut unreachable: Vec<&String> = world
            .rooms
            .keys()
            .filter(|k| !reachable.contains(k.as_str()))
            .collect();
        unreachable.sort();

        for key in unreachable {
            errors.push(ValidationError::new(format!(
                "room '{}' cannot be reached from '{}'",
                key, start_room
            )));
        }
    }

    let mut keys: Vec<&String> = world.rooms.keys().collect();
    keys.sort();

    for key in keys {
        let room = &world.rooms[key];

        for (dir, target) in room.exits() {
            if target == key.as_str() {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit {} leads back to itself",
                    key, dir
                )));
            }
        }

        check_duplicate_names(&room.inventory, &format!("room '{}'", key), &mut errors);
    }

    errors
}

fn reachable_from<'a>(world: &'a World, start: &'a str) -> HashSet<&'a str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    seen.insert(start);
    queue.push_back(start);

    while let Some(key) = queue.pop_front() {
        let Some(room) = world.rooms.get(key) else {
            continue;
        };
        for (_, target) in room.exits() {
            if seen.insert(target) {
                queue.push_back(target);
            }
        }
    }

    seen
}

/// `take`/`drop` always act on the first match, so a second item with the
/// same name is unreachable until the first one moves.
fn check_duplicate_names(inv: &Inventory, label: &str, errors: &mut Vec<ValidationError>) {
    let mut seen: HashSet<String> = HashSet::new();

    for item in inv.iter() {
        if !seen.insert(item.name.to_lowercase()) {
            errors.push(ValidationError::new(format!(
                "{} holds more than one '{}'",
                label, item.name
            )));
        }
        check_duplicate_names(
            &item.contents,
            &format!("item '{}'", item.key()),
            errors,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::load_world_from_str;
    use test_log::test;

    #[test]
    fn clean_world_has_no_warnings() {
        let rooms = "Room: Attic\nDescription: a\nExits: D-Hallway\n\
                     Room: Hallway\nDescription: b\nExits: U-Attic\n";
        let world = load_world_from_str(rooms, "").unwrap();
        assert!(validate_world(&world, "ATTIC").is_empty());
    }

    #[test]
    fn reports_unreachable_rooms_and_self_exits() {
        let rooms = "Room: Attic\nDescription: a\nExits: N-Attic\n\
                     Room: Closet\nDescription: b\nExits: S-Attic\n";
        let world = load_world_from_str(rooms, "").unwrap();
        let messages: Vec<String> = validate_world(&world, "ATTIC")
            .into_iter()
            .map(|e| e.message)
            .collect();

        assert!(messages.iter().any(|m| m.contains("'CLOSET' cannot be reached")));
        assert!(messages.iter().any(|m| m.contains("leads back to itself")));
    }

    #[test]
    fn reports_duplicate_item_names_in_one_container() {
        let rooms = "Room: Attic\nDescription: a\nExits:\n";
        let items = "Item: Ball\nDescription: x\nOpenable: false\nRoom: Attic\n\
                     Item: Bin\nDescription: y\nOpenable: true\nRoom: Attic\n";
        let mut world = load_world_from_str(rooms, items).unwrap();
        world
            .room_mut("ATTIC")
            .unwrap()
            .inventory
            .push(crate::world::Item::new("ball", "another"));

        let errors = validate_world(&world, "ATTIC");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("more than one"));
    }

    #[test]
    fn missing_start_room_is_reported() {
        let rooms = "Room: Attic\nDescription: a\nExits:\n";
        let world = load_world_from_str(rooms, "").unwrap();
        assert!(!validate_world(&world, "COURT").is_empty());
    }
}
