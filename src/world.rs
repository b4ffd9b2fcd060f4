use crate::camera::FollowCamera;
use crate::config::GameConfig;
use crate::data::*;
use crate::grid::GridField;
use crate::procgen::scene_presets::build_showcase;
use crate::procgen::{generate_arena, reveal_path, ScenePreset};
use crate::rng::{ChaChaSource, RandomSource};
use crate::snake::{FoodBounds, Snake};
use crate::snapshot::WorldSnapshot;
use glam::Vec3;
use tracing::{debug, info};
use uuid::Uuid;

/// Viewpoint used by the showcase scenes.
const SHOWCASE_CAMERA: Vec3 = Vec3::new(0.0, 10.0, 20.0);
const SHOWCASE_TARGET: Vec3 = Vec3::new(0.0, 4.0, 0.0);

/// One-shot door timer: Closed until the delay elapses, then Open for good.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Door {
    state: DoorState,
    elapsed: f32,
    delay: f32,
}

impl Door {
    pub fn new(delay: f32) -> Self {
        Self {
            state: DoorState::Closed,
            elapsed: 0.0,
            delay,
        }
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Accumulate time while closed. Returns true on the tick the door opens.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.is_open() {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.delay {
            self.state = DoorState::Open;
            return true;
        }
        false
    }

    /// Open immediately. Returns false if it was already open.
    pub fn open_now(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = DoorState::Open;
        true
    }
}

/// What happened during one world tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub tick: u64,
    pub ate_food: bool,
    pub died: bool,
    pub respawned: bool,
    pub door_opened: bool,
}

/// Owns the whole simulation and advances it one tick at a time.
///
/// Every piece of mutable state (obstacles, snake, door, camera) lives here
/// and is only touched from [`WorldController::tick`] and the explicit
/// scene operations. Consumers read [`WorldController::snapshot`] between
/// ticks.
pub struct WorldController {
    config: GameConfig,
    session_id: SessionId,
    scene: ScenePreset,
    tick: u64,
    obstacles: Vec<ObstacleInstance>,
    snake: Snake,
    door: Door,
    camera: FollowCamera,
    input: PlayerInput,
    rng: Box<dyn RandomSource + Send>,
}

impl WorldController {
    /// World with food placement seeded from `config.sim.seed`.
    pub fn new(config: GameConfig) -> Self {
        let seed = config.sim.seed;
        Self::with_random_source(config, Box::new(ChaChaSource::new(seed)))
    }

    /// World drawing food positions from `rng`. Degenerate config values are
    /// clamped first.
    pub fn with_random_source(config: GameConfig, mut rng: Box<dyn RandomSource + Send>) -> Self {
        let config = config.validated();
        let obstacles = generate_arena(&config.arena);
        let snake = Snake::new(config.agent.clone(), FoodBounds::from_config(&config), rng.as_mut());
        let camera = FollowCamera::new(&config.camera, snake.start_pose());
        let door = Door::new(config.path.door_open_delay_secs);
        let session_id = Uuid::new_v4();

        info!(
            "World session {} created: {} obstacles, door opens after {:.1}s",
            session_id,
            obstacles.len(),
            config.path.door_open_delay_secs
        );

        Self {
            config,
            session_id,
            scene: ScenePreset::Arena,
            tick: 0,
            obstacles,
            snake,
            door,
            camera,
            input: PlayerInput::NONE,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn scene(&self) -> ScenePreset {
        self.scene
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Fixed timestep for the configured tick rate.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.config.sim.tick_rate_hz.max(1) as f32
    }

    pub fn obstacles(&self) -> &[ObstacleInstance] {
        &self.obstacles
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn door(&self) -> &Door {
        &self.door
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn set_follow_camera(&mut self, follow: bool) {
        self.camera.follow = follow;
    }

    pub fn input(&self) -> PlayerInput {
        self.input
    }

    /// Latest input direction; consumed by every following tick until replaced.
    pub fn set_input(&mut self, input: PlayerInput) {
        self.input = input;
    }

    /// Collision view over the current obstacles.
    pub fn grid(&self) -> GridField<'_> {
        GridField::new(&self.obstacles, &self.config.grid)
    }

    /// Advance the world by one tick
    ///
    /// Order is fixed: snake, then door timer, then camera. Showcase scenes
    /// are static and only count the tick.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        self.tick += 1;
        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };

        if self.scene.is_showcase() {
            return report;
        }

        let grid = GridField::new(&self.obstacles, &self.config.grid);
        let events = self.snake.tick(self.input, &grid, self.rng.as_mut(), dt);
        report.ate_food = events.ate_food;
        report.died = events.died;
        report.respawned = events.respawned;

        if self.door.advance(dt) {
            self.reveal();
            report.door_opened = true;
        }

        self.camera.update(self.snake.position());

        report
    }

    /// Open the door now instead of waiting for the timer
    ///
    /// Returns false, and changes nothing, if the door is already open.
    pub fn open_door(&mut self) -> bool {
        if !self.door.open_now() {
            return false;
        }
        self.reveal();
        true
    }

    fn reveal(&mut self) {
        let summary = reveal_path(&mut self.obstacles, &self.config);
        info!(
            "Session {}: door opened at tick {} ({} wall blocks removed, {} path blocks, {} plant segments)",
            self.session_id,
            self.tick,
            summary.door_blocks_removed,
            summary.path_blocks_added,
            summary.plant_segments_added
        );
    }

    /// Tear everything down and start a fresh arena session
    pub fn rebuild_arena(&mut self) {
        self.obstacles = generate_arena(&self.config.arena);
        self.door = Door::new(self.config.path.door_open_delay_secs);
        self.snake.reset(self.rng.as_mut());
        self.camera = FollowCamera::new(&self.config.camera, self.snake.start_pose());
        self.input = PlayerInput::NONE;
        self.scene = ScenePreset::Arena;
        self.tick = 0;
        self.session_id = Uuid::new_v4();
        info!("World session {} rebuilt", self.session_id);
    }

    /// Switch to a scene preset
    pub fn load_scene(&mut self, preset: ScenePreset) {
        if !preset.is_showcase() {
            self.rebuild_arena();
            return;
        }

        self.obstacles = build_showcase(preset, &self.config.plant);
        self.snake.clear_for_showcase();
        self.camera.park(SHOWCASE_CAMERA, SHOWCASE_TARGET);
        self.input = PlayerInput::NONE;
        self.scene = preset;
        debug!(
            "Loaded showcase scene {} with {} obstacles",
            preset.name(),
            self.obstacles.len()
        );
    }

    /// Read-only view of the post-tick state.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::from(self)
    }
}
