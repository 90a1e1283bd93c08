use std::collections::HashMap;
use std::fmt;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Uppercase, trimmed, spaces replaced by underscores: "Great Room" -> "GREAT_ROOM".
pub fn canonical_key(name: &str) -> String {
    name.trim().to_uppercase().replace(' ', "_")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Single-character shorthand used by the room data ("N-Hallway").
    pub fn from_shorthand(c: char) -> Option<Direction> {
        match c.to_ascii_lowercase() {
            'n' => Some(Direction::North),
            's' => Some(Direction::South),
            'e' => Some(Direction::East),
            'w' => Some(Direction::West),
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            _ => None,
        }
    }

    /// Full direction token as typed after "go".
    pub fn from_token(token: &str) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.as_str() == token)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub openable: bool,
    pub contents: Inventory,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            description: description.into(),
            openable: false,
            contents: Inventory::new(),
        }
    }

    pub fn openable(mut self, openable: bool) -> Self {
        self.openable = openable;
        self
    }

    pub fn key(&self) -> String {
        canonical_key(&self.name)
    }
}

/// Ordered item container. Insertion order is display order.
///
/// Items are moved in and out; an `Item` value can only ever live in one
/// inventory at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always accepts today; callers still check the result so a capacity
    /// rule can be added here without touching them. `Err` hands the item back.
    pub fn add_item(&mut self, item: Item) -> Result<(), Item> {
        self.items.push(item);
        Ok(())
    }

    /// Unconditional append for world building and for returning a rejected item.
    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item whose stored name matches exactly.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.name == name)?;
        Some(self.items.remove(idx))
    }

    /// Case-insensitive lookup without removal.
    pub fn contains(&self, name: &str) -> Option<&Item> {
        let wanted = name.to_lowercase();
        self.items.iter().find(|i| i.name.to_lowercase() == wanted)
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

/// Item names joined by newlines; an empty inventory renders as "".
impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.items.iter().map(|i| i.name.as_str()).collect();
        f.write_str(&names.join("\n"))
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub inventory: Inventory,
    exits: HashMap<Direction, String>, // direction -> target room key
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Room {
            name: name.into(),
            description: description.into(),
            inventory: Inventory::new(),
            exits: HashMap::new(),
        }
    }

    pub fn key(&self) -> String {
        canonical_key(&self.name)
    }

    /// Installs an exit. Only the world loader calls this, once every room exists.
    /// Returns false if the shorthand isn't a direction.
    pub fn set_exit(&mut self, shorthand: char, target_key: impl Into<String>) -> bool {
        match Direction::from_shorthand(shorthand) {
            Some(dir) => {
                self.exits.insert(dir, target_key.into());
                true
            }
            None => false,
        }
    }

    /// Key of the neighbouring room, or None when the way is blocked.
    pub fn next_room(&self, direction: &str) -> Option<&str> {
        let dir = Direction::from_token(direction)?;
        self.exits.get(&dir).map(String::as_str)
    }

    pub fn exits(&self) -> impl Iterator<Item = (Direction, &str)> {
        self.exits.iter().map(|(d, k)| (*d, k.as_str()))
    }

    pub fn long_description(&self) -> String {
        let items = self.inventory.to_string();
        if items.is_empty() {
            self.description.clone()
        } else {
            format!("{}\n{}", self.description, items)
        }
    }
}

/// Where an item was placed when the world was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemLocation {
    Room(String),
    Item(String),
}

/// Runtime world type used by the game loop. One per game session.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub rooms: HashMap<String, Room>,
    /// Item key -> the container it was loaded into. Not updated by take/drop;
    /// the inventories themselves are the live state.
    pub initial_locations: HashMap<String, ItemLocation>,
}

impl World {
    pub fn room(&self, key: &str) -> Option<&Room> {
        self.rooms.get(key)
    }

    pub fn room_mut(&mut self, key: &str) -> Option<&mut Room> {
        self.rooms.get_mut(key)
    }
}
