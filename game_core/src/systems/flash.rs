use crate::FlashCounter;
use hecs::World;

/// Count down paddle flash counters, stopping at zero
pub fn decay_flash_counters(world: &mut World) {
    for (_entity, flash) in world.query_mut::<&mut FlashCounter>() {
        flash.decay();
    }
}
