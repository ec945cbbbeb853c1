//! Duskwick Headless Gameplay Harness
//!
//! Validates the behavior logic and the ECS runtime against the shipped
//! tuning file. Runs entirely in-process: no rendering, no audio, and the
//! built-in `FlatGround` host in place of a physics engine.
//!
//! Usage:
//!   cargo run -p duskwick-simtest
//!   cargo run -p duskwick-simtest -- --verbose
//!   RUST_LOG=debug cargo run -p duskwick-simtest

use duskwick_core::prelude::*;
use duskwick_logic::config::Tuning;
use duskwick_logic::jump::{apex_height, gravity_delta, host_gravity_delta, JumpState};
use duskwick_logic::lantern::{DialReading, DrainOutcome, LanternPhase, LanternState, LightRadii};
use duskwick_logic::projectile::{advance, trigger_response, ColliderTag, TriggerResponse};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Tuning (same JSON a host would ship) ────────────────────────────────
const TUNING_JSON: &str = include_str!("../../../data/tuning.json");

const FRAME: f32 = 1.0 / 60.0;
const SWEEP_SEED: u64 = 42;
const SWEEP_FRAMES: usize = 20_000;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

fn main() {
    env_logger::init();
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Duskwick Gameplay Harness ===\n");

    let mut results = Vec::new();

    // 1. Tuning file validation
    let tuning = match Tuning::from_json_str(TUNING_JSON) {
        Ok(t) => {
            log::info!("Loaded tuning: {} bytes of JSON", TUNING_JSON.len());
            results.push(check("tuning_parse", true, "data/tuning.json parsed and validated"));
            t
        }
        Err(e) => {
            results.push(check("tuning_parse", false, format!("{}", e)));
            Tuning::default()
        }
    };
    results.extend(validate_tuning(&tuning, verbose));

    // 2. Lantern state machine
    results.extend(validate_lantern_logic(&tuning, verbose));

    // 3. Jump arc
    results.extend(validate_jump_logic(&tuning, verbose));

    // 4. Projectile flight and triggers
    results.extend(validate_projectile_logic(&tuning, verbose));

    // 5. Engine scenario with host physics
    results.extend(validate_engine(&tuning, verbose));

    // 6. Randomized input sweep
    results.extend(validate_input_sweep(&tuning, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Tuning ───────────────────────────────────────────────────────────

fn validate_tuning(tuning: &Tuning, verbose: bool) -> Vec<TestResult> {
    println!("--- Tuning ---");
    let mut results = Vec::new();

    results.push(check(
        "tuning_matches_defaults",
        *tuning == Tuning::default(),
        "shipped file equals the compiled-in defaults",
    ));

    let sections = serde_json::from_str::<serde_json::Value>(TUNING_JSON)
        .ok()
        .and_then(|v| v.as_object().map(|o| o.keys().cloned().collect::<Vec<_>>()))
        .unwrap_or_default();
    let expected = ["jump", "keys", "lantern", "projectile"];
    let missing: Vec<_> = expected
        .iter()
        .filter(|s| !sections.iter().any(|k| k == *s))
        .collect();
    results.push(check(
        "tuning_sections_present",
        missing.is_empty(),
        if missing.is_empty() {
            "all sections spelled out".to_string()
        } else {
            format!("missing sections: {:?}", missing)
        },
    ));

    let t = &tuning.lantern;
    let linked = (t.max_outer_radius() - t.max_inner_radius * 4.0).abs() < 1e-6
        && (t.min_outer_radius() - t.min_inner_radius * 4.0).abs() < 1e-6;
    results.push(check(
        "tuning_outer_is_4x_inner",
        linked,
        format!(
            "inner {:.2}..{:.2}, outer {:.2}..{:.2}",
            t.min_inner_radius,
            t.max_inner_radius,
            t.min_outer_radius(),
            t.max_outer_radius()
        ),
    ));

    if verbose {
        println!("  lantern default threshold {:.2}/{:.2}", t.default_inner_radius, t.default_outer_radius());
    }
    results
}

// ── 2. Lantern ──────────────────────────────────────────────────────────

fn validate_lantern_logic(tuning: &Tuning, verbose: bool) -> Vec<TestResult> {
    println!("--- Lantern Logic ---");
    let mut results = Vec::new();
    let t = &tuning.lantern;

    let mut state = LanternState::new(t);
    let mut light = LightRadii::off(t);
    state.toggle();

    let mut frames_to_threshold = None;
    let mut min_i = f32::MAX;
    let mut max_i = f32::MIN;
    for frame in 0..600 {
        match state.step(&mut light, FRAME, t) {
            LanternPhase::Flickering => {
                frames_to_threshold.get_or_insert(frame);
                min_i = min_i.min(light.intensity);
                max_i = max_i.max(light.intensity);
            }
            LanternPhase::Approaching => {}
            other => {
                results.push(check("lantern_lit_phases", false, format!("unexpected {:?}", other)));
                break;
            }
        }
    }
    results.push(check(
        "lantern_reaches_threshold",
        frames_to_threshold.is_some_and(|f| f <= 40),
        format!("threshold reached after {:?} frames", frames_to_threshold),
    ));
    results.push(check(
        "lantern_flicker_bounds",
        min_i >= t.min_intensity - 1e-5 && max_i <= t.max_intensity + 1e-5 && max_i - min_i > 0.1,
        format!("intensity swept {:.3}..{:.3}", min_i, max_i),
    ));

    state.toggle_adjustment_mode();
    for _ in 0..10 {
        state.adjust_threshold(-1.0, t);
    }
    results.push(check(
        "lantern_threshold_clamps_low",
        state.inner_threshold == t.min_inner_radius && state.outer_threshold == t.min_outer_radius(),
        format!("{:.2}/{:.2}", state.inner_threshold, state.outer_threshold),
    ));
    for _ in 0..10 {
        state.adjust_threshold(1.0, t);
    }
    results.push(check(
        "lantern_threshold_clamps_high",
        state.inner_threshold == t.max_inner_radius
            && state.outer_threshold == t.max_outer_radius()
            && state.dial_reading(t) == DialReading::At(1.0),
        format!("{:.2}/{:.2}", state.inner_threshold, state.outer_threshold),
    ));

    // Fuel: one unit per full pool at max radius
    let mut state = LanternState::new(t);
    state.toggle();
    let bright = LightRadii::new(t.max_inner_radius, t.max_outer_radius(), t.max_intensity);
    let mut oil = 3u32;
    let mut ticks = 0;
    while oil > 0 && ticks < 10_000 {
        if state.drain(&bright, oil, t) == DrainOutcome::ConsumeUnit {
            oil -= 1;
        }
        ticks += 1;
    }
    let expected = (t.drain_pool_capacity / t.max_drain_rate) * 3.0;
    results.push(check(
        "lantern_drain_rate",
        oil == 0 && (ticks as f32 - expected).abs() <= 6.0,
        format!("3 units burned in {} ticks (expected ~{:.0})", ticks, expected),
    ));
    let out = state.drain(&bright, 0, t);
    results.push(check(
        "lantern_out_of_oil_forces_off",
        out == DrainOutcome::OutOfOil && !state.is_on,
        format!("{:?}", out),
    ));

    if verbose {
        println!("  burned 3 units in {} ticks", ticks);
    }
    results
}

// ── 3. Jump ─────────────────────────────────────────────────────────────

fn validate_jump_logic(tuning: &Tuning, verbose: bool) -> Vec<TestResult> {
    println!("--- Jump Logic ---");
    let mut results = Vec::new();
    let t = &tuning.jump;

    let mut state = JumpState::new();
    let mut y = 0.0f32;
    let mut velocity = state.jump(y, t);
    let mut peak = 0.0f32;
    let mut airtime = 0.0f32;
    while airtime < 10.0 {
        velocity.y += gravity_delta(velocity.y, FRAME, t) + host_gravity_delta(FRAME, t);
        y += velocity.y * FRAME;
        airtime += FRAME;
        peak = peak.max(y);
        if y <= 0.0 {
            state.update_landed(true, velocity.y);
            break;
        }
    }
    let apex = apex_height(t);
    results.push(check(
        "jump_apex",
        (peak - apex).abs() < apex * 0.05,
        format!("peak {:.2}, closed form {:.2}", peak, apex),
    ));
    results.push(check(
        "jump_lands",
        !state.is_jumping && airtime < 10.0,
        format!("landed after {:.2}s", airtime),
    ));

    let cooldown = duskwick_logic::config::JumpTuning {
        time_between_jumps: 0.5,
        ..*t
    };
    let mut state = JumpState::new();
    state.jump(0.0, &cooldown);
    let blocked = !state.can_jump(true, true, &cooldown);
    state.tick_cooldown(0.5);
    results.push(check(
        "jump_cooldown",
        blocked && state.can_jump(true, true, &cooldown),
        "second jump waits for time_between_jumps",
    ));

    if verbose {
        println!("  apex {:.2} in {:.2}s airtime", peak, airtime);
    }
    results
}

// ── 4. Projectile ───────────────────────────────────────────────────────

fn validate_projectile_logic(tuning: &Tuning, _verbose: bool) -> Vec<TestResult> {
    println!("--- Projectile Logic ---");
    let mut results = Vec::new();
    let t = &tuning.projectile;

    let (position, speed) = advance(Vec2::ZERO, Vec2::RIGHT, t.speed, t.acceleration, 1.0);
    results.push(check(
        "projectile_advance",
        (position.x - t.speed).abs() < 1e-4 && (speed - (t.speed + t.acceleration)).abs() < 1e-4,
        format!("moved to {:.2} at speed {:.2}", position.x, speed),
    ));

    let table = [
        (ColliderTag::Platform, false, TriggerResponse::ReturnToPool),
        (ColliderTag::Interactable, true, TriggerResponse::DamageAndReturn(t.damage)),
        (ColliderTag::Interactable, false, TriggerResponse::Ignore),
        (ColliderTag::Player, false, TriggerResponse::Ignore),
        (ColliderTag::Enemy, true, TriggerResponse::Ignore),
        (ColliderTag::Untagged, false, TriggerResponse::Ignore),
    ];
    let wrong: Vec<_> = table
        .iter()
        .filter(|(tag, breakable, want)| trigger_response(*tag, *breakable, t.damage) != *want)
        .map(|(tag, _, _)| *tag)
        .collect();
    results.push(check(
        "projectile_trigger_table",
        wrong.is_empty(),
        if wrong.is_empty() {
            format!("{} cases", table.len())
        } else {
            format!("wrong response for {:?}", wrong)
        },
    ));
    results
}

// ── 5. Engine ───────────────────────────────────────────────────────────

fn validate_engine(tuning: &Tuning, verbose: bool) -> Vec<TestResult> {
    println!("--- Engine Scenario ---");
    let mut results = Vec::new();

    let mut engine = GameEngine::with_tuning(tuning.clone());
    let mut host = FlatGround::default();
    let player = engine.spawn_player(Vec2::ZERO);
    let barrel = engine.spawn_interactable(Vec2::new(4.0, 0.0), true, tuning.projectile.damage * 2.0);
    engine.spawn_platform(Vec2::new(-4.0, 0.0));
    engine.inventory.add(ItemType::Oil, 3);

    // settle, light the lantern, jump
    for _ in 0..3 {
        engine.update_with_host(FRAME, &InputFrame::new(), &mut host);
    }
    engine.update_with_host(FRAME, &InputFrame::new().press(Key::X).press(Key::Space), &mut host);
    for _ in 0..180 {
        engine.update_with_host(FRAME, &InputFrame::new(), &mut host);
    }

    let lit = engine.lantern(player).map(|l| l.is_on()).unwrap_or(false);
    let light = engine.point_light(player).map(|p| p.light).ok();
    results.push(check(
        "engine_lantern_at_threshold",
        lit && light.is_some_and(|l| l.is_at(tuning.lantern.default_inner_radius, tuning.lantern.default_outer_radius())),
        format!("{:?}", light),
    ));
    results.push(check(
        "engine_jump_recorded",
        engine.achievements.highest_jump_reached > 1.0,
        format!("highest jump {:.2}", engine.achievements.highest_jump_reached),
    ));
    results.push(check(
        "engine_light_sound",
        engine.drain_sounds() == vec![SoundCue::LanternLight],
        "one light cue queued",
    ));

    // two shots break the barrel, one shot returns off the platform
    for _ in 0..2 {
        engine.fire_projectile(Vec2::ZERO, Vec2::RIGHT, true);
        for _ in 0..30 {
            engine.update_with_host(FRAME, &InputFrame::new(), &mut host);
        }
    }
    engine.fire_projectile(Vec2::ZERO, Vec2::new(-1.0, 0.0), false);
    for _ in 0..30 {
        engine.update_with_host(FRAME, &InputFrame::new(), &mut host);
    }
    results.push(check(
        "engine_barrel_broken",
        engine.world.get::<&Broken>(barrel).is_ok(),
        "barrel broke after two hits",
    ));
    results.push(check(
        "engine_projectiles_pooled",
        engine.active_projectile_count() == 0 && engine.projectile_pool.available() == 1,
        format!(
            "{} active, {} pooled",
            engine.active_projectile_count(),
            engine.projectile_pool.available()
        ),
    ));

    if verbose {
        println!("  {} frames, {:.2}s elapsed", engine.frame_count(), engine.elapsed());
    }
    results
}

// ── 6. Randomized Input Sweep ───────────────────────────────────────────

fn validate_input_sweep(tuning: &Tuning, verbose: bool) -> Vec<TestResult> {
    println!("--- Randomized Input Sweep ---");
    let mut results = Vec::new();
    let t = &tuning.lantern;
    let keys = [Key::X, Key::LeftAlt, Key::Space];

    let mut rng = StdRng::seed_from_u64(SWEEP_SEED);
    let mut engine = GameEngine::with_tuning(tuning.clone());
    let mut host = FlatGround::default();
    let player = engine.spawn_player(Vec2::ZERO);
    engine.inventory.add(ItemType::Oil, 5);

    let mut violations = Vec::new();
    let mut oil_seen = engine.inventory.quantity(ItemType::Oil);

    for frame in 0..SWEEP_FRAMES {
        let mut input = InputFrame::new();
        for key in keys {
            if rng.gen_bool(0.02) {
                input = input.press(key);
            }
            if rng.gen_bool(0.02) {
                input = input.release(key);
            }
        }
        if rng.gen_bool(0.05) {
            input = input.scroll(if rng.gen_bool(0.5) { 1.0 } else { -1.0 });
        }
        if rng.gen_bool(0.01) {
            engine.fire_projectile(Vec2::ZERO, Vec2::RIGHT, rng.gen_bool(0.5));
        }
        let dt = rng.gen_range(0.005..0.05);
        engine.update_with_host(dt, &input, &mut host);

        let (Ok(lantern), Ok(light)) = (engine.lantern(player), engine.point_light(player)) else {
            violations.push(format!("frame {}: player lost its lantern", frame));
            break;
        };
        let state = lantern.state;
        let l = light.light;

        if l.inner < t.inner_radius_off - 1e-5 || l.inner > t.max_inner_radius + 1e-5 {
            violations.push(format!("frame {}: inner radius {:.3}", frame, l.inner));
        }
        if l.outer < t.outer_radius_off() - 1e-5 || l.outer > t.max_outer_radius() + 1e-5 {
            violations.push(format!("frame {}: outer radius {:.3}", frame, l.outer));
        }
        if (state.outer_threshold - state.inner_threshold * t.outer_radius_factor).abs() > 1e-4 {
            violations.push(format!(
                "frame {}: thresholds unlinked {:.3}/{:.3}",
                frame, state.inner_threshold, state.outer_threshold
            ));
        }
        if state.drain_pool < 0.0 || state.drain_pool >= t.drain_pool_capacity {
            violations.push(format!("frame {}: drain pool {:.3}", frame, state.drain_pool));
        }
        if l.intensity < t.min_intensity - 1e-5 || l.intensity > t.max_intensity + 1e-5 {
            violations.push(format!("frame {}: intensity {:.3}", frame, l.intensity));
        }
        let oil = engine.inventory.quantity(ItemType::Oil);
        if oil > oil_seen {
            violations.push(format!("frame {}: oil grew {} -> {}", frame, oil_seen, oil));
        }
        // the last unit burns during a frame; the lantern goes out on the next one
        if oil_seen == 0 && state.is_on {
            violations.push(format!("frame {}: lit with no oil", frame));
        }
        oil_seen = oil;

        if violations.len() > 10 {
            log::warn!("Sweep stopped early at frame {}", frame);
            break;
        }
    }

    results.push(check(
        "sweep_invariants",
        violations.is_empty(),
        if violations.is_empty() {
            format!("{} frames, seed {}", SWEEP_FRAMES, SWEEP_SEED)
        } else {
            violations.join("; ")
        },
    ));

    let burned = 5 - engine.inventory.quantity(ItemType::Oil);
    let cues = engine.drain_sounds().len();
    results.push(check(
        "sweep_burned_oil",
        burned > 0 && cues > 0,
        format!("{} oil burned, {} lantern cues", burned, cues),
    ));

    if verbose {
        println!(
            "  {} oil left, highest jump {:.2}",
            engine.inventory.quantity(ItemType::Oil),
            engine.achievements.highest_jump_reached
        );
    }
    results
}
