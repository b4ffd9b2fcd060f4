use proptest::prelude::*;

use snake_arena::autopilot::Autopilot;
use snake_arena::config::GameConfig;
use snake_arena::data::*;
use snake_arena::procgen::ScenePreset;
use snake_arena::trail::max_trail_len;
use snake_arena::world::WorldController;

const DT: f32 = 1.0 / 60.0;

fn input_from_index(index: u8) -> PlayerInput {
    match index % 5 {
        0 => PlayerInput::NONE,
        1 => PlayerInput::forward(),
        2 => PlayerInput::back(),
        3 => PlayerInput::left(),
        _ => PlayerInput::right(),
    }
}

/// Drive in one direction until the snake dies, returning the ticks taken.
fn drive_until_death(world: &mut WorldController, input: PlayerInput) -> Option<u32> {
    world.set_input(input);
    for tick in 0..1200 {
        if world.tick(DT).died {
            return Some(tick);
        }
    }
    None
}

#[test]
fn test_wall_ring_is_closed_before_door_opens() {
    let world = WorldController::new(GameConfig::default());
    let grid = world.grid();
    let h = world.config().arena.half_extent;

    for i in -h..=h {
        assert!(grid.is_blocked(i, -h), "front wall gap at x={}", i);
        assert!(grid.is_blocked(i, h), "back wall gap at x={}", i);
        assert!(grid.is_blocked(-h, i), "left wall gap at z={}", i);
        assert!(grid.is_blocked(h, i), "right wall gap at z={}", i);
    }
}

#[test]
fn test_door_cells_open_after_reveal() {
    let mut world = WorldController::new(GameConfig::default());
    world.open_door();
    let grid = world.grid();
    let h = world.config().arena.half_extent;

    for x in -1..=1 {
        assert!(!grid.is_blocked(x, -h), "door cell x={} still blocked", x);
    }
    // the rest of the front wall stays
    assert!(grid.is_blocked(3, -h));
    assert!(grid.is_blocked(-3, -h));
    // floor is walkable, stone border is not
    assert!(!grid.is_blocked(0, -h - 5));
    assert!(grid.is_blocked(2, -h - 5));
}

#[test]
fn test_door_opens_once_over_long_run() {
    let mut world = WorldController::new(GameConfig::default());
    let mut openings = 0;
    for _ in 0..(60 * 25) {
        if world.tick(DT).door_opened {
            openings += 1;
        }
    }
    assert_eq!(openings, 1);

    let removed = world.obstacles().iter().filter(|o| !o.is_active()).count();
    assert_eq!(removed, 3);
    assert!(!world.open_door());
}

#[test]
fn test_reset_after_crash_restores_start() {
    let mut world = WorldController::new(GameConfig::default());
    let start = world.snake().start_pose();

    assert!(drive_until_death(&mut world, PlayerInput::right()).is_some());
    let crash_position = world.snake().position();
    assert!(crash_position.x > 0.0);

    world.set_input(PlayerInput::NONE);
    let mut respawned = false;
    for _ in 0..120 {
        let report = world.tick(DT);
        if !respawned {
            // frozen while dying
            assert!(report.respawned || world.snake().position() == crash_position);
        }
        if report.respawned {
            respawned = true;
            break;
        }
    }
    assert!(respawned);

    let snapshot = world.snapshot();
    assert_eq!(snapshot.agent.position, start);
    assert_eq!(snapshot.agent.velocity, glam::Vec3::ZERO);
    assert!(snapshot.agent.alive);
    assert_eq!(snapshot.agent.death_progress, 0.0);
    assert!(snapshot.body.is_empty());
    assert!(snapshot.food.active);
    assert!(world.snake().trail().is_empty());
}

#[test]
fn test_autopilot_collects_food() {
    let mut world = WorldController::new(GameConfig::default());
    let pilot = Autopilot::default();

    let mut eaten = 0;
    for _ in 0..(60 * 60) {
        let input = pilot.steer(&world);
        world.set_input(input);
        let report = world.tick(DT);
        if report.ate_food {
            eaten += 1;
        }
        assert!(world.snake().trail().len() <= max_trail_len(world.snake().body().len()));
    }
    assert!(eaten >= 1, "autopilot never reached the food");
}

#[test]
fn test_same_seed_same_run() {
    let mut config = GameConfig::default();
    config.sim.seed = 42;
    config.path.door_open_delay_secs = 1.0;

    let mut a = WorldController::new(config.clone());
    let mut b = WorldController::new(config);
    let pilot = Autopilot::default();

    for _ in 0..900 {
        let input = pilot.steer(&a);
        assert_eq!(input, pilot.steer(&b));
        a.set_input(input);
        b.set_input(input);
        assert_eq!(a.tick(DT), b.tick(DT));
    }

    let (sa, sb) = (a.snapshot(), b.snapshot());
    assert_ne!(sa.session_id, sb.session_id);
    assert_eq!(sa.obstacles, sb.obstacles);
    assert_eq!(sa.agent, sb.agent);
    assert_eq!(sa.food, sb.food);
    assert_eq!(sa.body, sb.body);
}

#[test]
fn test_scene_round_trip() {
    let mut world = WorldController::new(GameConfig::default());
    for preset in ScenePreset::ALL {
        world.load_scene(preset);
        assert_eq!(world.scene(), preset);
        let snapshot = world.snapshot();
        assert_eq!(snapshot.scene, preset);
        assert!(!snapshot.obstacles.is_empty());
        assert_eq!(snapshot.food.active, !preset.is_showcase());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_motion_invariants(inputs in prop::collection::vec(0u8..5, 1..400)) {
        let config = GameConfig::default();
        let max_speed = config.agent.max_speed;
        let ground = config.agent.ground_height;
        let mut world = WorldController::new(config);

        for index in inputs {
            world.set_input(input_from_index(index));
            world.tick(DT);

            let snake = world.snake();
            let state = snake.state();
            prop_assert!(state.velocity.length() <= max_speed + 1e-4);
            prop_assert_eq!(state.position.y, ground);
            prop_assert!(snake.trail().len() <= max_trail_len(snake.body().len()));
            prop_assert!((0.0..=1.0).contains(&snake.death_progress()));

            if state.is_alive() {
                // a living head never sits inside a blocked cell
                prop_assert!(!world.grid().is_blocked_at(state.position));
            }
            if snake.food().active {
                prop_assert!(snake.food_bounds().contains(snake.food().position));
            }
        }
    }

    #[test]
    fn prop_seeded_food_always_in_bounds(seed in any::<u64>()) {
        let mut config = GameConfig::default();
        config.sim.seed = seed;
        let mut world = WorldController::new(config);

        for _ in 0..20 {
            let food = *world.snake().food();
            prop_assert!(food.active);
            prop_assert!(world.snake().food_bounds().contains(food.position));
            world.rebuild_arena();
        }
    }
}
