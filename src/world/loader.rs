use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use super::model::{Direction, Item, ItemLocation, Room, World, canonical_key};
use crate::error::LoadError;

/////////////////////
/// RECORD STRUCTS ///
/////////////////////

/// One line of a record: `Label: value`.
struct Field<'a> {
    line: usize,
    label: &'a str,
    value: &'a str,
}

struct RawExit {
    line: usize,
    direction: char,
    target: String,
}

struct ItemRecord {
    line: usize,
    key: String,
    item: Item,
    placement: ItemLocation,
}

const ROOM_FIELDS: usize = 3;
const ITEM_FIELDS: usize = 4;

/////////////////////////
/// LOADER ENTRY POINTS ///
/////////////////////////

/// Public API: load and link a world from the room and item data files.
pub fn load_world_from_files(rooms_path: &Path, items_path: &Path) -> Result<World, LoadError> {
    let rooms_src = read_source(rooms_path)?;
    let items_src = read_source(items_path)?;

    let world = build_world(
        &rooms_src,
        &rooms_path.display().to_string(),
        &items_src,
        &items_path.display().to_string(),
    )?;

    info!(
        "loaded {} rooms and {} items from {} / {}",
        world.rooms.len(),
        world.initial_locations.len(),
        rooms_path.display(),
        items_path.display()
    );
    Ok(world)
}

/// Same as [`load_world_from_files`] but from in-memory record text.
pub fn load_world_from_str(rooms_src: &str, items_src: &str) -> Result<World, LoadError> {
    build_world(rooms_src, "rooms", items_src, "items")
}

fn read_source(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn build_world(
    rooms_src: &str,
    rooms_name: &str,
    items_src: &str,
    items_name: &str,
) -> Result<World, LoadError> {
    let mut builder = WorldBuilder::default();

    for record in records(rooms_src, rooms_name, ROOM_FIELDS)? {
        builder.add_room(&record, rooms_name)?;
    }
    builder.resolve_exits()?;

    let mut item_records = Vec::new();
    for record in records(items_src, items_name, ITEM_FIELDS)? {
        item_records.push(parse_item_record(&record, items_name)?);
    }
    builder.place_items(item_records)?;

    Ok(builder.world)
}

/////////////////////
/// WORLD BUILDER ///
/////////////////////

/// Rooms are instantiated first and their exits kept as raw specs; exits are
/// only resolved once every room exists, so data may reference rooms that
/// appear later in the file.
#[derive(Default)]
struct WorldBuilder {
    world: World,
    pending_exits: Vec<(String, Vec<RawExit>)>,
}

impl WorldBuilder {
    fn add_room(&mut self, record: &[Field<'_>], source_name: &str) -> Result<(), LoadError> {
        let name = expect_field(&record[0], "Room", source_name)?;
        let description = expect_field(&record[1], "Description", source_name)?;
        let exits = expect_field(&record[2], "Exits", source_name)?;

        if name.is_empty() {
            return Err(LoadError::malformed(source_name, record[0].line, "room name is empty"));
        }

        let key = canonical_key(name);
        if self.world.rooms.contains_key(&key) {
            return Err(LoadError::DuplicateKey { kind: "room", key });
        }

        let raw_exits = parse_exits(exits, record[2].line, source_name)?;
        let description = description.replace("<br>", "\n").trim().to_string();

        debug!("room {} ({} exits pending)", key, raw_exits.len());
        self.pending_exits.push((key.clone(), raw_exits));
        self.world.rooms.insert(key, Room::new(name, description));
        Ok(())
    }

    fn resolve_exits(&mut self) -> Result<(), LoadError> {
        for (room_key, raw_exits) in self.pending_exits.drain(..) {
            for raw in raw_exits {
                if !self.world.rooms.contains_key(&raw.target) {
                    return Err(LoadError::UnknownRoom {
                        referenced_by: format!("exit of room '{}' (line {})", room_key, raw.line),
                        key: raw.target,
                    });
                }

                // Both keys were checked above; the direction was checked while parsing.
                if let Some(room) = self.world.rooms.get_mut(&room_key) {
                    room.set_exit(raw.direction, raw.target);
                }
            }
        }
        Ok(())
    }

    /// Registers every item key, then moves each item into its declared
    /// container. Items placed inside other items are assembled bottom-up.
    fn place_items(&mut self, records: Vec<ItemRecord>) -> Result<(), LoadError> {
        for rec in &records {
            if self.world.initial_locations.contains_key(&rec.key) {
                return Err(LoadError::DuplicateKey {
                    kind: "item",
                    key: rec.key.clone(),
                });
            }
            self.world.initial_locations.insert(rec.key.clone(), rec.placement.clone());
        }

        let mut children: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, rec) in records.iter().enumerate() {
            match &rec.placement {
                ItemLocation::Room(room_key) => {
                    if !self.world.rooms.contains_key(room_key) {
                        return Err(LoadError::UnknownRoom {
                            referenced_by: format!("item '{}' (line {})", rec.key, rec.line),
                            key: room_key.clone(),
                        });
                    }
                }
                ItemLocation::Item(parent_key) => {
                    if parent_key == &rec.key {
                        return Err(LoadError::PlacementCycle {
                            key: rec.key.clone(),
                        });
                    }
                    if !self.world.initial_locations.contains_key(parent_key) {
                        return Err(LoadError::UnknownItem {
                            referenced_by: format!("item '{}' (line {})", rec.key, rec.line),
                            key: parent_key.clone(),
                        });
                    }
                    children.entry(parent_key.clone()).or_default().push(idx);
                }
            }
        }

        let mut slots: Vec<Option<ItemRecord>> = records.into_iter().map(Some).collect();

        for idx in 0..slots.len() {
            let room_key = match slots[idx].as_ref().map(|r| &r.placement) {
                Some(ItemLocation::Room(k)) => k.clone(),
                _ => continue,
            };

            if let Some(item) = assemble(idx, &mut slots, &children) {
                debug!("placing {} in {}", item.key(), room_key);
                if let Some(room) = self.world.rooms.get_mut(&room_key) {
                    room.inventory.push(item);
                }
            }
        }

        // Anything still unclaimed hangs off a container chain that never reaches a room.
        if let Some(orphan) = slots.into_iter().flatten().next() {
            return Err(LoadError::PlacementCycle { key: orphan.key });
        }

        Ok(())
    }
}

fn assemble(
    idx: usize,
    slots: &mut [Option<ItemRecord>],
    children: &HashMap<String, Vec<usize>>,
) -> Option<Item> {
    let rec = slots[idx].take()?;
    let mut item = rec.item;

    if let Some(kids) = children.get(&rec.key) {
        for &kid in kids {
            if let Some(child) = assemble(kid, slots, children) {
                item.contents.push(child);
            }
        }
    }

    Some(item)
}

//////////////////////////
/// RECORD PARSE HELPERS ///
//////////////////////////

/// Splits the source into fixed-size groups of `Label: value` lines.
/// Blank lines between records are ignored.
fn records<'a>(
    src: &'a str,
    source_name: &str,
    fields_per_record: usize,
) -> Result<Vec<Vec<Field<'a>>>, LoadError> {
    let mut fields = Vec::new();

    for (idx, line) in src.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (label, value) = line.split_once(':').ok_or_else(|| {
            LoadError::malformed(source_name, line_no, "expected '<Label>: <value>'")
        })?;

        fields.push(Field {
            line: line_no,
            label: label.trim(),
            value: value.trim(),
        });
    }

    let mut out = Vec::new();
    let mut iter = fields.into_iter().peekable();

    while iter.peek().is_some() {
        let record: Vec<Field<'a>> = iter.by_ref().take(fields_per_record).collect();
        if record.len() < fields_per_record {
            let line = record.last().map(|f| f.line).unwrap_or(0);
            return Err(LoadError::malformed(
                source_name,
                line,
                format!(
                    "record is short a field (expected {}, found {})",
                    fields_per_record,
                    record.len()
                ),
            ));
        }
        out.push(record);
    }

    Ok(out)
}

fn expect_field<'a>(
    field: &Field<'a>,
    label: &str,
    source_name: &str,
) -> Result<&'a str, LoadError> {
    if field.label.eq_ignore_ascii_case(label) {
        Ok(field.value)
    } else {
        Err(LoadError::malformed(
            source_name,
            field.line,
            format!("expected '{}:' but found '{}:'", label, field.label),
        ))
    }
}

/// `N-Hallway, S-Great Room` -> raw exit specs with canonical target keys.
fn parse_exits(spec: &str, line: usize, source_name: &str) -> Result<Vec<RawExit>, LoadError> {
    let mut exits = Vec::new();

    for part in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (dir, target) = part.split_once('-').ok_or_else(|| {
            LoadError::malformed(
                source_name,
                line,
                format!("exit '{}' should look like '<dir>-<Room>'", part),
            )
        })?;

        let direction = dir
            .trim()
            .chars()
            .next()
            .filter(|c| Direction::from_shorthand(*c).is_some())
            .ok_or_else(|| {
                LoadError::malformed(
                    source_name,
                    line,
                    format!("exit '{}' has an unknown direction '{}'", part, dir.trim()),
                )
            })?;

        let target = canonical_key(target);
        if target.is_empty() {
            return Err(LoadError::malformed(
                source_name,
                line,
                format!("exit '{}' has no target room", part),
            ));
        }

        exits.push(RawExit {
            line,
            direction,
            target,
        });
    }

    Ok(exits)
}

fn parse_item_record(record: &[Field<'_>], source_name: &str) -> Result<ItemRecord, LoadError> {
    let name = expect_field(&record[0], "Item", source_name)?;
    let description = expect_field(&record[1], "Description", source_name)?;
    let openable = expect_field(&record[2], "Openable", source_name)?;

    if name.is_empty() {
        return Err(LoadError::malformed(source_name, record[0].line, "item name is empty"));
    }

    let openable = parse_bool(openable).ok_or_else(|| {
        LoadError::malformed(
            source_name,
            record[2].line,
            format!("Openable must be true or false, not '{}'", openable),
        )
    })?;

    let placement = parse_placement(&record[3], source_name)?;

    Ok(ItemRecord {
        line: record[0].line,
        key: canonical_key(name),
        item: Item::new(name, description).openable(openable),
        placement,
    })
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// `Room: Attic` places the item in a room; any other label (`Item: TRUNK`)
/// places it inside the named item.
fn parse_placement(field: &Field<'_>, source_name: &str) -> Result<ItemLocation, LoadError> {
    let target = canonical_key(field.value);
    if target.is_empty() {
        return Err(LoadError::malformed(
            source_name,
            field.line,
            format!("placement '{}:' names no container", field.label),
        ));
    }

    if field.label.eq_ignore_ascii_case("room") {
        Ok(ItemLocation::Room(target))
    } else {
        Ok(ItemLocation::Item(target))
    }
}
