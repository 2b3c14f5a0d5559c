use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::{TextureId, TextureRegistry};
use crate::components::mesh::Rgb;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::FrameTime;
use crate::error::EngineError;
use crate::input::queue::InputQueue;
use crate::renderer::camera::{CameraConfig, PerspectiveCamera, Viewport};
use crate::renderer::controls::{ControlsConfig, OrbitControls};
use crate::systems::lighting::LightState;
use crate::systems::rings::OrbitRing;
use crate::systems::starfield::Starfield;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum number of mesh instances per frame (default: 32).
    pub max_meshes: usize,
    /// Maximum number of orbit rings (default: 16).
    pub max_rings: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of point lights (default: 4).
    pub max_lights: usize,
    /// Number of background stars (default: 0).
    pub star_count: usize,
    /// Side length of the cube the stars are scattered in.
    pub star_spread: f32,
    /// Clear color.
    pub background: Rgb,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    /// Default RNG seed; the host may supply its own at init.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_meshes: 32,
            max_rings: 16,
            max_events: 32,
            max_lights: 4,
            star_count: 0,
            star_spread: 1000.0,
            background: Rgb::BLACK,
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            seed: 42,
        }
    }
}

/// Optional features reported by the host page at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Pointer-driven orbit camera is wired up on the host side.
    pub orbit_controls: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            orbit_controls: true,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick. `ctx.time` holds this frame's delta.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// A texture registered in `ctx.textures` finished loading on the host.
    /// Failed loads never reach the game; the runner logs them.
    fn texture_ready(&mut self, _ctx: &mut EngineContext, _name: &str, _id: TextureId) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub lights: LightState,
    pub rings: Vec<OrbitRing>,
    pub starfield: Starfield,
    pub textures: TextureRegistry,
    pub camera: PerspectiveCamera,
    /// None when the host lacks orbit controls; the camera then stays put.
    pub controls: Option<OrbitControls>,
    pub viewport: Viewport,
    pub background: Rgb,
    pub events: Vec<GameEvent>,
    pub rng: Rng,
    pub time: FrameTime,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default(), HostCapabilities::default())
    }

    /// Build the context for a game config. Missing host capabilities are
    /// logged and the matching feature is left out.
    pub fn from_config(config: &GameConfig, capabilities: HostCapabilities) -> Self {
        let mut rng = Rng::new(config.seed);
        let starfield = Starfield::generate(config.star_count, config.star_spread, &mut rng);
        let viewport = Viewport::default();
        let controls = if capabilities.orbit_controls {
            Some(OrbitControls::new(config.controls))
        } else {
            log::error!("{}; camera orbiting disabled", EngineError::MissingCapability("orbit controls"));
            None
        };

        Self {
            scene: Scene::new(),
            lights: LightState::with_capacity(config.max_lights),
            rings: Vec::new(),
            starfield,
            textures: TextureRegistry::new(),
            camera: PerspectiveCamera::from_config(&config.camera, viewport.aspect()),
            controls,
            viewport,
            background: config.background,
            events: Vec::with_capacity(config.max_events),
            rng,
            time: FrameTime::default(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Seconds since the previous frame.
    pub fn delta_seconds(&self) -> f64 {
        self.time.delta
    }

    /// Monotonic time of the current frame, in seconds.
    pub fn now(&self) -> f64 {
        self.time.now
    }

    /// Apply a canvas resize: viewport size and camera aspect.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport = Viewport::new(width, height);
        self.camera.resize(width, height);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(b.0, a.0 + 1);
    }

    #[test]
    fn missing_orbit_controls_degrades() {
        let ctx = EngineContext::from_config(
            &GameConfig::default(),
            HostCapabilities { orbit_controls: false },
        );
        assert!(ctx.controls.is_none());
    }

    #[test]
    fn starfield_follows_config() {
        let config = GameConfig {
            star_count: 64,
            ..GameConfig::default()
        };
        let ctx = EngineContext::from_config(&config, HostCapabilities::default());
        assert_eq!(ctx.starfield.len(), 64);
    }

    #[test]
    fn resize_updates_viewport_and_camera() {
        let mut ctx = EngineContext::new();
        ctx.resize(1000.0, 500.0);
        assert_eq!(ctx.viewport, Viewport::new(1000.0, 500.0));
        assert!((ctx.camera.aspect - 2.0).abs() < 1e-6);
        ctx.resize(0.0, 500.0);
        assert_eq!(ctx.viewport.width, 1000.0);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent::new(1.0, 0.0, 0.0, 0.0));
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
