//! Lantern systems - start, input handling, and the per-frame fuel/light update

use duskwick_logic::config::{KeyBindings, LanternTuning};
use duskwick_logic::input::InputFrame;
use duskwick_logic::lantern::{DrainOutcome, LanternToggle};
use hecs::World;

use super::audio::{SoundCue, SoundQueue};
use super::inventory::{Inventory, ItemType};
use crate::components::{Character, Lantern, LanternDial, PointLight};

/// Start phase: reset lanterns seen for the first time.
///
/// Lanterns without a `PointLight` are started anyway (so the warning is
/// logged once) but the frame update skips them.
pub fn lantern_start_system(world: &mut World, tuning: &LanternTuning) {
    let mut unstarted = Vec::new();
    for (entity, (lantern, light, dial)) in
        world.query_mut::<(&mut Lantern, Option<&PointLight>, Option<&mut LanternDial>)>()
    {
        if lantern.started {
            continue;
        }
        lantern.state.reset_to_default(tuning);
        lantern.started = true;
        if let Some(dial) = dial {
            dial.reading = lantern.state.dial_reading(tuning);
        }
        unstarted.push((entity, light.is_some()));
    }

    for (entity, has_light) in unstarted {
        if !has_light {
            log::warn!("Lantern on {:?} was unable to locate a point light", entity);
        }
    }
}

/// Toggle on/off, toggle adjustment mode, scroll the threshold.
pub fn lantern_input_system(
    world: &mut World,
    input: &InputFrame,
    keys: &KeyBindings,
    tuning: &LanternTuning,
    sounds: &mut SoundQueue,
) {
    for (_, (character, lantern, mut dial)) in
        world.query_mut::<(&Character, &mut Lantern, Option<&mut LanternDial>)>()
    {
        if !lantern.started || !character.accepts_input() {
            continue;
        }
        let state = &mut lantern.state;
        let mut dial_dirty = false;

        if input.key_down(keys.lantern_toggle) {
            let cue = match state.toggle() {
                LanternToggle::Lit => SoundCue::LanternLight,
                LanternToggle::Extinguished => SoundCue::LanternExtinguish,
            };
            sounds.play_one_shot(cue);
            dial_dirty = true;
        }

        // Adjustment is held: the key toggles the mode on press and on release
        if input.key_down(keys.lantern_adjust) || input.key_up(keys.lantern_adjust) {
            let adjusting = state.toggle_adjustment_mode();
            if let Some(dial) = dial.as_deref_mut() {
                dial.adjusting = adjusting;
            }
        }

        if state.adjust_threshold(input.scroll_y, tuning) {
            dial_dirty = true;
        }

        if dial_dirty {
            if let Some(dial) = dial {
                dial.reading = state.dial_reading(tuning);
            }
        }
    }
}

/// Drain oil, then animate the light toward its target.
pub fn lantern_system(world: &mut World, inventory: &mut Inventory, tuning: &LanternTuning, dt: f32) {
    for (entity, (lantern, light, dial)) in
        world.query_mut::<(&mut Lantern, &mut PointLight, Option<&mut LanternDial>)>()
    {
        if !lantern.started {
            continue;
        }
        let state = &mut lantern.state;

        match state.drain(&light.light, inventory.quantity(ItemType::Oil), tuning) {
            DrainOutcome::OutOfOil => {
                if let Some(dial) = dial {
                    dial.reading = state.dial_reading(tuning);
                }
            }
            DrainOutcome::ConsumeUnit => {
                inventory.remove(ItemType::Oil, 1);
                log::debug!(
                    "Lantern on {:?} burned one oil ({} left)",
                    entity,
                    inventory.quantity(ItemType::Oil)
                );
            }
            DrainOutcome::Accumulated => {}
        }

        state.step(&mut light.light, dt, tuning);
    }
}
