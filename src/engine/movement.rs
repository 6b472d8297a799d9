use crate::engine::output::Output;
use crate::error::NavigationError;
use crate::world::{Dungeon, RoomId};

/// Walk through the zero-based door `index` of the current room.
/// On error `current` is left untouched.
pub fn take_door(
    out: &mut Output,
    dungeon: &Dungeon,
    current: &mut RoomId,
    index: usize,
) -> Result<(), NavigationError> {
    let target = dungeon.door_target(*current, index)?;

    tracing::debug!(
        from = %dungeon.room(*current).name,
        to = %dungeon.room(target).name,
        "moving through door"
    );

    out.event("You move through the door...");
    *current = target;
    Ok(())
}
