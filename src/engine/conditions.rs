use crate::world::{Inventory, Room};

pub const GATORADE_ROOM: &str = "Gatorade";
pub const HALL_OF_FAME_ROOM: &str = "HallOFFameSpeech";
pub const HALL_OF_FAME_ENTRY_SIZE: usize = 13;

pub fn has_won(player: &Inventory, target_size: usize) -> bool {
    player.size() == target_size
}

pub fn gatorade_unlocked(player: &Inventory) -> bool {
    player.contains("ShootingBoosts").is_some() && player.contains("StaminaBar").is_some()
}

pub fn hall_of_fame_unlocked(player: &Inventory) -> bool {
    player.size() == HALL_OF_FAME_ENTRY_SIZE
}

/// Refusal text if the player may not enter `room` yet; None if the way is open.
pub fn entry_refusal(room: &Room, player: &Inventory) -> Option<&'static str> {
    match room.name.as_str() {
        GATORADE_ROOM if !gatorade_unlocked(player) => {
            Some("You need more things to go to the gatorade facility")
        }
        HALL_OF_FAME_ROOM if !hall_of_fame_unlocked(player) => {
            Some("You haven't collected all the things needed to enter this part in your career")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Item;
    use test_log::test;

    fn carrying(names: &[&str]) -> Inventory {
        let mut inv = Inventory::new();
        for n in names {
            inv.push(Item::new(*n, ""));
        }
        inv
    }

    #[test]
    fn win_needs_exact_size() {
        let names: Vec<String> = (0..15).map(|i| format!("thing{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();

        assert!(!has_won(&carrying(&refs[..13]), 14));
        assert!(has_won(&carrying(&refs[..14]), 14));
        assert!(!has_won(&carrying(&refs[..15]), 14));
    }

    #[test]
    fn gatorade_gate_needs_both_items() {
        let room = Room::new("Gatorade", "Cold drinks.");
        assert!(entry_refusal(&room, &carrying(&["ShootingBoosts"])).is_some());
        assert!(entry_refusal(&room, &carrying(&["shootingboosts", "StaminaBar"])).is_none());
    }

    #[test]
    fn hall_of_fame_gate_needs_thirteen_items() {
        let room = Room::new("HallOFFameSpeech", "A podium.");
        let names: Vec<String> = (0..13).map(|i| format!("trophy{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();

        assert!(entry_refusal(&room, &carrying(&refs[..12])).is_some());
        assert!(entry_refusal(&room, &carrying(&refs)).is_none());
    }

    #[test]
    fn other_rooms_are_never_gated() {
        assert!(entry_refusal(&Room::new("Court", ""), &Inventory::new()).is_none());
    }
}
