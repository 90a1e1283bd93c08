use crate::engine::output::Output;
use crate::world::{self, Direction};

pub fn render_room(out: &mut Output, room: &world::Room) {
    out.title(room.name.clone());
    out.say(room.long_description());

    let mut dirs: Vec<Direction> = room.exits().map(|(d, _)| d).collect();

    if dirs.is_empty() {
        out.set_exits("Exits: (none)");
    } else {
        dirs.sort();
        let list = dirs
            .into_iter()
            .map(Direction::as_str)
            .collect::<Vec<&str>>()
            .join(", ");
        out.set_exits(format!("Exits: {}", list));
    }
}
