mod actions;
mod conditions;
mod items;
mod movement;
mod output;
mod render;

pub use actions::{handle_eat, handle_help, handle_jump, handle_shoot, handle_sit};

pub use conditions::{entry_refusal, gatorade_unlocked, hall_of_fame_unlocked, has_won};

pub use items::{handle_drop, handle_inventory, handle_open, handle_take};

pub use movement::try_handle_movement;
pub use output::{Output, OutputBlock};
pub use render::render_room;
