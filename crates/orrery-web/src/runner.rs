use orrery_engine::{
    build_mesh_buffer, build_ring_buffer, AssetManifest, DrawTiming, EngineContext, EngineResult,
    FrameClock, FrameData, Game, GameConfig, HostCapabilities, InputEvent, InputQueue, MeshBuffer,
    ProtocolLayout, Renderer, RingBuffer,
};
use crate::frame_buffer::FrameBuffer;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. The renderer defaults to the shared
/// [`FrameBuffer`]; tests plug in their own backend.
pub struct GameRunner<G: Game, R: Renderer = FrameBuffer> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    renderer: R,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    meshes: MeshBuffer,
    rings: RingBuffer,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let layout = ProtocolLayout::from_config(&game.config());
        Self::with_renderer(game, FrameBuffer::new(layout))
    }

    pub fn frame_buffer_ptr(&self) -> *const f32 {
        self.renderer.as_ptr()
    }
}

impl<G: Game, R: Renderer> GameRunner<G, R> {
    pub fn with_renderer(game: G, renderer: R) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::from_config(&config, HostCapabilities::default()),
            input: InputQueue::new(),
            renderer,
            clock: FrameClock::new(),
            meshes: MeshBuffer::with_capacity(config.max_meshes),
            rings: RingBuffer::with_capacity(config.max_rings),
            layout,
            config,
            initialized: false,
        }
    }

    /// Initialize with the game's default seed and full host capabilities.
    pub fn init(&mut self) {
        let seed = self.game.config().seed;
        self.init_with(seed, HostCapabilities::default());
    }

    /// Initialize the game. Call once after construction.
    pub fn init_with(&mut self, seed: u64, capabilities: HostCapabilities) {
        self.config = self.game.config();
        self.config.seed = seed;
        self.layout = ProtocolLayout::from_config(&self.config);
        self.ctx = EngineContext::from_config(&self.config, capabilities);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame at host time `now_ms` (milliseconds, monotonic).
    ///
    /// Order: clock, resize and camera input, game update, camera controls,
    /// then exactly one draw. A draw failure is returned as-is; the runner
    /// makes no attempt to recover from it.
    pub fn tick(&mut self, now_ms: f64) -> EngineResult<DrawTiming> {
        if !self.initialized {
            return Ok(DrawTiming::default());
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        self.ctx.time = self.clock.tick(now_ms / 1000.0);

        for event in self.input.iter() {
            if let InputEvent::Resize { width, height } = *event {
                self.ctx.resize(width, height);
                self.renderer.resize(width as u32, height as u32);
            }
            if let Some(controls) = self.ctx.controls.as_mut() {
                controls.handle_input(event, &self.ctx.camera, self.ctx.viewport);
            }
        }

        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        if let Some(controls) = self.ctx.controls.as_mut() {
            controls.update(&mut self.ctx.camera);
        }

        build_mesh_buffer(self.ctx.scene.iter(), &mut self.meshes, self.config.max_meshes);
        build_ring_buffer(&self.ctx.rings, &mut self.rings);

        let frame = FrameData {
            frame: self.ctx.time.frame,
            viewport: self.ctx.viewport,
            camera: self.ctx.camera.uniform(),
            background: self.ctx.background,
            meshes: self.meshes.as_slice(),
            rings: self.rings.as_slice(),
            stars: self.ctx.starfield.stars(),
            star_color: self.ctx.starfield.color,
            star_size: self.ctx.starfield.size,
            lights: self.ctx.lights.as_slice(),
            ambient: self.ctx.lights.ambient(),
            events: &self.ctx.events,
        };
        self.renderer.draw(&frame)
    }

    /// Register the textures of a JSON manifest. Entries that already
    /// resolved keep their state. Returns the number of entries read.
    pub fn load_manifest(&mut self, json: &str) -> EngineResult<usize> {
        let manifest = AssetManifest::from_json(json)?;
        let count = self.ctx.textures.register_manifest(&manifest);
        log::info!("manifest loaded: {count} textures");
        Ok(count)
    }

    /// Textures the host still has to fetch, as a manifest JSON.
    pub fn pending_textures_json(&self) -> EngineResult<String> {
        self.ctx
            .textures
            .pending()
            .fold(AssetManifest::default(), |m, (name, path)| m.with_texture(name, path))
            .to_json()
    }

    /// Host callback for a finished texture fetch. Failures are logged and
    /// the material keeps its base color; late or repeated reports are ignored.
    pub fn texture_loaded(&mut self, name: &str, ok: bool, error: &str) {
        if ok {
            if let Some(id) = self.ctx.textures.on_loaded(name) {
                self.game.texture_ready(&mut self.ctx, name, id);
            }
        } else if let Some(err) = self.ctx.textures.on_failed(name, error) {
            log::warn!("{err}; keeping base color");
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_meshes(&self) -> u32 {
        self.layout.max_meshes as u32
    }

    pub fn max_rings(&self) -> u32 {
        self.layout.max_rings as u32
    }

    pub fn max_stars(&self) -> u32 {
        self.layout.max_stars as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_engine::{
        Entity, EngineError, GameEvent, Material, MeshComponent, OrbitRing, Rgb, TextureId,
    };

    #[derive(Default)]
    struct Recording {
        draws: Vec<(u64, usize, usize, Vec<GameEvent>)>,
        resizes: Vec<(u32, u32)>,
        fail: bool,
    }

    impl Renderer for Recording {
        fn backend(&self) -> &'static str {
            "recording"
        }

        fn draw(&mut self, frame: &FrameData) -> EngineResult<DrawTiming> {
            if self.fail {
                return Err(EngineError::Draw {
                    backend: self.backend(),
                    reason: "context lost".into(),
                });
            }
            self.draws.push((frame.frame, frame.meshes.len(), frame.rings.len(), frame.events.to_vec()));
            Ok(DrawTiming::default())
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.resizes.push((width, height));
        }
    }

    #[derive(Default)]
    struct Probe {
        updates: u32,
        deltas: Vec<f64>,
        ready: Vec<(String, TextureId)>,
    }

    impl Game for Probe {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("ball")
                    .with_pos(Vec3::X)
                    .with_mesh(MeshComponent::sphere(1.0, Material::standard(Rgb::WHITE))),
            );
            ctx.rings.push(OrbitRing::new(10.0, 3.0, Rgb::from_hex(0x555555)));
            ctx.textures.register("ball", "assets/ball.jpg");
        }

        fn update(&mut self, ctx: &mut EngineContext, _input: &orrery_engine::InputQueue) {
            self.updates += 1;
            self.deltas.push(ctx.delta_seconds());
            ctx.emit_event(GameEvent::new(self.updates as f32, 0.0, 0.0, 0.0));
        }

        fn texture_ready(&mut self, _ctx: &mut EngineContext, name: &str, id: TextureId) {
            self.ready.push((name.to_string(), id));
        }
    }

    fn runner() -> GameRunner<Probe, Recording> {
        let mut r = GameRunner::with_renderer(Probe::default(), Recording::default());
        r.init();
        r
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut r = GameRunner::with_renderer(Probe::default(), Recording::default());
        r.tick(16.0).unwrap();
        assert_eq!(r.game().updates, 0);
        assert!(r.renderer().draws.is_empty());
    }

    #[test]
    fn one_draw_per_tick_with_scene_data() {
        let mut r = runner();
        r.tick(0.0).unwrap();
        r.tick(16.0).unwrap();
        let draws = &r.renderer().draws;
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[1].0, 2);
        assert_eq!(draws[1].1, 1);
        assert_eq!(draws[1].2, 1);
        // events are per frame
        assert_eq!(draws[1].3, vec![GameEvent::new(2.0, 0.0, 0.0, 0.0)]);
    }

    #[test]
    fn delta_comes_from_host_timestamps() {
        let mut r = runner();
        r.tick(1000.0).unwrap();
        r.tick(1016.0).unwrap();
        r.tick(1010.0).unwrap();
        let d = &r.game().deltas;
        assert_eq!(d[0], 0.0);
        assert!((d[1] - 0.016).abs() < 1e-9);
        assert_eq!(d[2], 0.0);
    }

    #[test]
    fn draw_failure_propagates() {
        let mut r = runner();
        r.renderer.fail = true;
        let err = r.tick(0.0).unwrap_err();
        assert!(err.to_string().contains("context lost"));
    }

    #[test]
    fn resize_reaches_camera_and_renderer() {
        let mut r = runner();
        r.push_input(InputEvent::Resize { width: 400.0, height: 200.0 });
        r.tick(0.0).unwrap();
        assert_eq!(r.renderer().resizes, vec![(400, 200)]);
        assert!((r.ctx().camera.aspect - 2.0).abs() < 1e-6);
        assert_eq!(r.ctx().viewport.width, 400.0);
    }

    #[test]
    fn wheel_zooms_camera_through_controls() {
        let mut r = runner();
        r.tick(0.0).unwrap();
        let before = r.ctx().camera.distance_to_target();
        r.push_input(InputEvent::Wheel { delta_y: -100.0 });
        r.tick(16.0).unwrap();
        assert!(r.ctx().camera.distance_to_target() < before);
    }

    #[test]
    fn no_controls_keeps_camera_fixed() {
        let mut r = GameRunner::with_renderer(Probe::default(), Recording::default());
        r.init_with(7, HostCapabilities { orbit_controls: false });
        let before = r.ctx().camera.position;
        r.push_input(InputEvent::Wheel { delta_y: -100.0 });
        r.tick(0.0).unwrap();
        assert_eq!(r.ctx().camera.position, before);
        assert_eq!(r.renderer().draws.len(), 1);
    }

    #[test]
    fn texture_success_reaches_game_once() {
        let mut r = runner();
        r.texture_loaded("ball", true, "");
        r.texture_loaded("ball", true, "");
        assert_eq!(r.game().ready.len(), 1);
        assert_eq!(r.game().ready[0].0, "ball");
    }

    #[test]
    fn texture_failure_is_not_forwarded() {
        let mut r = runner();
        r.texture_loaded("ball", false, "404");
        r.texture_loaded("ball", true, "");
        assert!(r.game().ready.is_empty());
    }

    #[test]
    fn manifest_adds_pending_textures() {
        let mut r = runner();
        let n = r
            .load_manifest(r#"{"textures":{"moon":{"path":"assets/moon.jpg"}}}"#)
            .unwrap();
        assert_eq!(n, 1);
        let pending = r.pending_textures_json().unwrap();
        let manifest = AssetManifest::from_json(&pending).unwrap();
        assert!(manifest.textures.contains_key("moon"));
        assert!(manifest.textures.contains_key("ball"));
        assert!(r.load_manifest("not json").is_err());
    }
}
