use glam::Vec2;
use runner_core::*;

const DT: f32 = 1.0 / 60.0;

fn run(sim: &mut GameSimulation, ticks: usize) {
    for _ in 0..ticks {
        sim.update(DT);
    }
}

#[test]
fn test_first_spawn_after_fifty_ticks() {
    let mut sim = GameSimulation::initialize(900.0, 600.0);

    sim.update(DT);
    assert_eq!(sim.world_velocity_x(), -8.0, "No burst, speed stays default");

    run(&mut sim, 49);
    assert!(sim.collectibles().is_empty(), "Nothing within the first 50 ticks");
    assert_eq!(sim.state().spawn_counter, 50);

    sim.update(DT);
    let collectibles = sim.collectibles();
    assert_eq!(collectibles.len(), 1);
    assert!(sim.events().spawned);
    assert_eq!(sim.state().spawn_counter, 0);
    // Spawned at the right edge, then stepped with the rest
    assert_eq!(collectibles[0].pos, Vec2::new(890.0, 80.0));
}

#[test]
fn test_uncollected_collectible_leaves_after_94_ticks() {
    let mut config = Config::new();
    config.collectible_spawn_y = 400.0; // Above the runner's reach
    let mut sim = GameSimulation::new(config);

    run(&mut sim, 51);
    assert_eq!(sim.collectibles()[0].pos.x, 890.0);

    run(&mut sim, 93);
    let first = sim.collectibles()[0];
    assert_eq!(first.pos.x, -40.0, "Right edge exactly at 0 is still on screen");

    sim.update(DT);
    let xs: Vec<f32> = sim.collectibles().iter().map(|c| c.pos.x).collect();
    assert_eq!(xs, vec![460.0], "Only the second spawn remains");
    assert_eq!(sim.events().despawned, 1);
    assert_eq!(sim.score(), 0);
}

#[test]
fn test_grounded_runner_collects_passing_item() {
    let mut sim = GameSimulation::default();

    run(&mut sim, 82);
    assert_eq!(sim.score(), 0);

    // x = 570 is the first position fully inside the runner box
    sim.update(DT);
    assert_eq!(sim.score(), 100);
    assert_eq!(sim.events().collected, 1);
    assert!(sim.collectibles().is_empty());
}

#[test]
fn test_no_input_game_ends_when_chaser_arrives() {
    let mut sim = GameSimulation::default();

    run(&mut sim, 200);
    assert!(sim.is_running(), "Chaser midpoint at 450 is not a catch");

    sim.update(DT);
    assert!(!sim.is_running());
    assert!(sim.events().caught);
    assert_eq!(sim.score(), 300);
    assert_eq!(sim.time().tick, 201);
}

#[test]
fn test_terminal_state_is_frozen() {
    let mut sim = GameSimulation::default();
    while sim.is_running() {
        sim.update(DT);
    }
    sim.update(DT);
    let frozen = sim.snapshot();
    let world_speed = sim.world_velocity_x();
    assert_eq!(frozen.game_over_label, Some(GAME_OVER_LABEL));
    assert!(frozen.runner.as_ref().unwrap().stopped);
    assert!(frozen.chaser.as_ref().unwrap().stopped);

    let latch = sim.input_latch();
    for _ in 0..30 {
        sim.on_primary_input();
        latch.press();
        sim.update(DT);
    }

    assert_eq!(sim.snapshot(), frozen);
    assert!(!sim.is_running());
    assert!(!sim.runner_is_jumping());
    assert_eq!(sim.world_velocity_x(), world_speed);
    assert_eq!(sim.time().tick, 201, "No tick simulated after the catch");
}

#[test]
fn test_double_tap_does_not_double_jump() {
    let mut sim = GameSimulation::default();
    sim.on_primary_input();
    sim.update(DT);
    let vy = sim.runner_body().unwrap().vel.y;

    sim.on_primary_input();
    assert!(sim.runner_is_jumping());
    assert_eq!(sim.runner_body().unwrap().vel.y, vy);
}

#[test]
fn test_jump_arc_lands_and_allows_next_jump() {
    let mut sim = GameSimulation::default();
    sim.on_primary_input();

    let mut peak: f32 = 0.0;
    let mut ticks = 0;
    while sim.runner_is_jumping() {
        sim.update(DT);
        peak = peak.max(sim.runner_body().unwrap().pos.y);
        ticks += 1;
        assert!(ticks < 200, "Runner never landed");
    }

    assert!(peak > 70.0 && peak < 80.0, "peak {peak}");
    assert_eq!(sim.runner_body().unwrap().vel.y, 0.0);

    sim.on_primary_input();
    assert!(sim.runner_is_jumping());
    assert_eq!(sim.runner_body().unwrap().vel.y, 5.0);
}

#[test]
fn test_tap_knocks_chaser_back_then_recovers() {
    let mut sim = GameSimulation::default();
    run(&mut sim, 10);
    let before = sim.chaser_body().unwrap().pos.x;

    sim.on_primary_input();
    sim.update(DT);
    assert_eq!(sim.chaser_body().unwrap().pos.x, before - 1.5);

    run(&mut sim, 300);
    assert_eq!(sim.chaser_body().unwrap().vel.x, 2.0);
}

#[test]
fn test_world_burst_decays_to_default() {
    let mut sim = GameSimulation::default();
    sim.on_primary_input();
    assert_eq!(sim.world_velocity_x(), -11.0);

    sim.update(DT);
    assert!(sim.world_velocity_x() > -11.0 && sim.world_velocity_x() < -8.0);

    // Three units at 1/60 per tick
    run(&mut sim, 200);
    assert_eq!(sim.world_velocity_x(), -8.0);
}

#[test]
fn test_background_tiles_follow_scene() {
    let mut sim = GameSimulation::default();

    sim.update(DT);
    assert!(!sim.events().background_wrapped, "Default scene scrolls without wrapping");
    let tiles = sim.snapshot().tiles;
    assert_eq!(tiles[0].pos.x, -8.0);
    assert_eq!(tiles[1].pos.x, -1808.0);
    assert_eq!(tiles[2].pos.x, -3608.0);

    let mut wrapped_at = None;
    for tick in 2..=200 {
        sim.update(DT);
        if sim.events().background_wrapped {
            wrapped_at = Some(tick);
            break;
        }
    }
    // -8 * 113 + 1800 < 900
    assert_eq!(wrapped_at, Some(113));
    let tiles = sim.snapshot().tiles;
    assert_eq!(tiles[0].pos.x, 900.0);
    assert_eq!(tiles[0].image, "background_3.png");
    assert_eq!(tiles[1].image, "background_1.png");
    assert_eq!(tiles[2].image, "background_2.png");
}

#[test]
fn test_autopilot_survives_and_scores_monotonically() {
    let mut sim = GameSimulation::default();
    let pilot = Autopilot::default();

    let mut last_score = 0;
    let mut collected = 0;
    for _ in 0..3000 {
        pilot.drive(&mut sim, DT);

        let score = sim.score();
        assert!(score >= last_score, "Score never decreases");
        assert_eq!(score - last_score, sim.events().collected * 100);
        collected += sim.events().collected;
        last_score = score;
    }

    assert!(sim.is_running(), "Autopilot keeps the chaser away");
    assert!(collected > 0);
    assert_eq!(sim.score(), collected * 100);
}

#[test]
fn test_fixed_timestep_drives_simulation() {
    let mut sim = GameSimulation::default();
    let mut clock = FixedTimestep::default();

    // Ten host frames at 30 Hz
    let mut ticks = 0;
    for _ in 0..10 {
        for _ in 0..clock.advance(1.0 / 30.0) {
            sim.update(clock.fixed_dt);
            ticks += 1;
        }
    }

    assert!((19..=20).contains(&ticks), "ticks {ticks}");
    assert_eq!(sim.time().tick, ticks as u64);
}

#[test]
fn test_input_from_another_thread() {
    let mut sim = GameSimulation::default();
    let latch = sim.input_latch();

    let handle = std::thread::spawn(move || {
        latch.press();
        latch.press();
    });
    handle.join().unwrap();

    sim.update(DT);
    assert!(sim.runner_is_jumping());
    assert_eq!(sim.world_velocity_x(), -11.0 + DT);
    assert!(!sim.input_latch().is_pending());
}
