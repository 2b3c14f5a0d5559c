//! Solar System: the sun and eight planets on circular orbits.
//!
//! Orbit camera, hover picking with a name tooltip, per-planet speed
//! sliders, pause and a light/dark panel theme.

use glam::{Vec2, Vec3};
use orrery_engine::*;

use crate::bodies::{BodyRegistry, SUN};
use crate::error::SimResult;
use crate::panel::{ControlPanel, Theme};
use crate::picking::{HoverTransition, PickingController, Visibility};
use crate::simulation::SimulationState;

// ── Scene setup ──────────────────────────────────────────────────────

const BACKGROUND: u32 = 0x0a0a1a;
const STAR_COUNT: usize = 10_000;
const STAR_SPREAD: f32 = 5000.0;
const RING_TUBE: f32 = 3.0;
const RING_COLOR: u32 = 0x555555;
const SUN_LIGHT_INTENSITY: f32 = 5.0;
const SUN_LIGHT_DISTANCE: f32 = 5000.0;
const AMBIENT: u32 = 0x777777;
/// Emissive tint of the hovered planet.
const HIGHLIGHT: u32 = 0x0000ff;

/// Sun rotation per tick, radians. Applied even while paused.
pub const SUN_SPIN_PER_TICK: f64 = 0.005;

// ── Custom event kinds from the host UI ──────────────────────────────

pub const CUSTOM_TOGGLE_PAUSE: u32 = 1;
pub const CUSTOM_TOGGLE_THEME: u32 = 2;

// ── Game event kinds to the host ─────────────────────────────────────

/// a = 1 when paused.
pub const EVENT_PAUSE: f32 = 1.0;
/// a = body index (-1 when none), b, c = tooltip position.
pub const EVENT_TOOLTIP: f32 = 2.0;
/// a = opacity, b = 1 when visible.
pub const EVENT_TOOLTIP_STYLE: f32 = 3.0;
/// a = 0 dark, 1 light.
pub const EVENT_THEME: f32 = 4.0;

pub struct SolarSystem {
    sim: SimulationState,
    panel: ControlPanel,
    picking: PickingController,
    /// Scene entity per body, in registry order.
    body_ids: Vec<EntityId>,
    /// Radians, kept in [0, 2π).
    sun_rotation: f64,
}

impl SolarSystem {
    pub fn new() -> Self {
        let registry = BodyRegistry::solar_system();
        let panel = ControlPanel::new(&registry);
        // Reseeded from the engine RNG in init.
        let sim = SimulationState::new(registry, &mut Rng::new(1));
        Self {
            sim,
            panel,
            picking: PickingController::new(),
            body_ids: Vec::new(),
            sun_rotation: 0.0,
        }
    }

    pub fn sim(&self) -> &SimulationState {
        &self.sim
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn picking(&self) -> &PickingController {
        &self.picking
    }

    pub fn sun_rotation(&self) -> f64 {
        self.sun_rotation
    }

    pub fn body_id(&self, name: &str) -> Option<EntityId> {
        self.sim.registry().index_of(name).and_then(|i| self.body_ids.get(i).copied())
    }

    /// Slider input from the panel; returns the readout text.
    pub fn set_speed(&mut self, name: &str, raw: f64) -> SimResult<String> {
        self.panel.on_input(name, raw, &mut self.sim)
    }

    /// Returns the pause button label for the new state.
    pub fn toggle_pause(&mut self) -> &'static str {
        self.panel.toggle_pause(&mut self.sim)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.panel.toggle_theme()
    }

    pub fn describe_panel(&self) -> serde_json::Result<String> {
        self.panel.describe(&self.sim)
    }

    // ── Per-frame steps ────────────────────────────────────────────

    /// Push every body's position and spin to its scene node. The sun's
    /// spin comes from the per-tick constant instead.
    fn sync_transforms(&self, scene: &mut Scene) {
        for (index, (_, state)) in self.sim.iter().enumerate() {
            let (Some(&id), Some(pos)) = (self.body_ids.get(index), self.sim.position_at(index)) else {
                continue;
            };
            let rotation = if index == SUN { self.sun_rotation } else { state.spin_angle };
            scene.set_transform(id, pos.as_vec3(), rotation as f32);
        }
    }

    fn sync_highlight(&self, scene: &mut Scene) {
        for (index, (_, state)) in self.sim.iter().enumerate().filter(|(i, _)| *i != SUN) {
            let Some(entity) = self.body_ids.get(index).and_then(|&id| scene.get_mut(id)) else {
                continue;
            };
            if let Some(mesh) = entity.mesh.as_mut() {
                mesh.material.emissive = if state.highlighted { Rgb::from_hex(HIGHLIGHT) } else { Rgb::BLACK };
            }
        }
    }

    fn emit_events(&self, ctx: &mut EngineContext) {
        let paused = if self.sim.is_paused() { 1.0 } else { 0.0 };
        ctx.emit_event(GameEvent::new(EVENT_PAUSE, paused, 0.0, 0.0));

        let tip = self.picking.tooltip();
        let index = tip
            .text
            .and_then(|name| self.sim.registry().index_of(name))
            .map_or(-1.0, |i| i as f32);
        ctx.emit_event(GameEvent::new(EVENT_TOOLTIP, index, tip.x, tip.y));

        let visible = if tip.visibility == Visibility::Visible { 1.0 } else { 0.0 };
        ctx.emit_event(GameEvent::new(EVENT_TOOLTIP_STYLE, tip.opacity, visible, 0.0));

        let theme = match self.panel.theme() {
            Theme::Dark => 0.0,
            Theme::Light => 1.0,
        };
        ctx.emit_event(GameEvent::new(EVENT_THEME, theme, 0.0, 0.0));
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_meshes: 16,
            max_rings: 16,
            max_events: 16,
            max_lights: 2,
            star_count: STAR_COUNT,
            star_spread: STAR_SPREAD,
            background: Rgb::from_hex(BACKGROUND),
            camera: CameraConfig {
                fov_y_degrees: 75.0,
                near: 0.1,
                far: 5000.0,
                position: Vec3::new(0.0, 1500.0, 3000.0),
                target: Vec3::ZERO,
            },
            controls: ControlsConfig {
                enable_damping: true,
                damping_factor: 0.05,
                min_distance: 100.0,
                max_distance: 4000.0,
                screen_space_panning: false,
                ..ControlsConfig::default()
            },
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let registry = self.sim.registry().clone();
        self.sim = SimulationState::new(registry, &mut ctx.rng);
        self.panel = ControlPanel::new(self.sim.registry());
        self.picking = PickingController::new();
        self.sun_rotation = 0.0;

        // ── Bodies ───────────────────────────────────────────────────
        self.body_ids.clear();
        for (index, body) in self.sim.registry().iter().enumerate() {
            let material = if index == SUN {
                Material::basic(Rgb::from_hex(body.color))
            } else {
                Material::standard(Rgb::from_hex(body.color))
            };
            let pos = self.sim.position_at(index).unwrap_or_default().as_vec3();
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(body.name)
                    .with_pos(pos)
                    .with_mesh(MeshComponent::sphere(body.visual_radius as f32, material)),
            );
            self.body_ids.push(id);
            ctx.textures.register(body.name, body.texture);

            if body.orbits() {
                ctx.rings.push(OrbitRing::new(
                    body.orbital_radius as f32,
                    RING_TUBE,
                    Rgb::from_hex(RING_COLOR),
                ));
            }
        }

        // ── Lighting ─────────────────────────────────────────────────
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            Rgb::WHITE,
            SUN_LIGHT_INTENSITY,
            SUN_LIGHT_DISTANCE,
        ));
        ctx.lights.set_ambient(Rgb::from_hex(AMBIENT));

        log::info!(
            "solar-system: {} bodies, {} stars, {} textures pending",
            self.body_ids.len(),
            ctx.starfield.len(),
            ctx.textures.pending().count()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            if let InputEvent::Custom { kind, .. } = *event {
                match kind {
                    CUSTOM_TOGGLE_PAUSE => {
                        self.toggle_pause();
                    }
                    CUSTOM_TOGGLE_THEME => {
                        self.toggle_theme();
                    }
                    _ => {}
                }
            }
        }

        // ── Advance and place bodies ─────────────────────────────────
        self.sim.advance(ctx.delta_seconds());
        self.sun_rotation = (self.sun_rotation + SUN_SPIN_PER_TICK).rem_euclid(std::f64::consts::TAU);
        self.sync_transforms(&mut ctx.scene);

        // ── Picking ──────────────────────────────────────────────────
        // Every move counts: a leave and re-enter within one frame must
        // still clear the highlight and re-anchor the tooltip.
        let now = ctx.now();
        for event in input.iter() {
            let InputEvent::PointerMove { x, y } = *event else {
                continue;
            };
            let transition = self.picking.on_pointer_move(
                Vec2::new(x, y),
                ctx.viewport,
                &ctx.camera,
                &mut self.sim,
                now,
            );
            if transition != HoverTransition::Unchanged && transition != HoverTransition::Idle {
                log::debug!("hover: {transition:?}");
            }
        }
        self.picking.tick(now);
        self.sync_highlight(&mut ctx.scene);

        self.emit_events(ctx);
    }

    fn texture_ready(&mut self, ctx: &mut EngineContext, name: &str, id: TextureId) {
        if let Some(mesh) = ctx.scene.find_by_tag_mut(name).and_then(|e| e.mesh.as_mut()) {
            mesh.material.texture = Some(id);
        }
    }
}
