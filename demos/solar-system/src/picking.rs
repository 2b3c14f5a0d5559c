//! Pointer hover picking: highlight the planet under the cursor and drive
//! the name tooltip.
//!
//! Only orbiting bodies are pickable. Hiding the tooltip is two-step:
//! opacity drops to 0 at once and the element is hidden 200 ms later on a
//! non-blocking timer, polled from `tick`.

use glam::Vec2;
use orrery_engine::{EntityId, PerspectiveCamera, PickTarget, Raycaster, TimerId, Timers, Viewport};

use crate::simulation::SimulationState;

/// Tooltip offset from the pointer, CSS pixels.
pub const TOOLTIP_OFFSET: f32 = 10.0;
/// Delay between fading the tooltip out and hiding it, seconds.
pub const TOOLTIP_HIDE_DELAY: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Visual state of the hover tooltip, mirrored to the host every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tooltip {
    pub text: Option<&'static str>,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub visibility: Visibility,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            text: None,
            x: 0.0,
            y: 0.0,
            opacity: 0.0,
            visibility: Visibility::Hidden,
        }
    }
}

/// What a pointer move did to the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Enter(&'static str),
    Leave(&'static str),
    Switch { from: &'static str, to: &'static str },
    /// Same body as before; nothing changes, the tooltip stays put.
    Unchanged,
    /// Nothing hit and nothing was highlighted.
    Idle,
}

/// Pointer position in normalized device coordinates, y up.
pub fn to_ndc(pointer: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        pointer.x / viewport.width * 2.0 - 1.0,
        -(pointer.y / viewport.height) * 2.0 + 1.0,
    )
}

/// Registry index of the nearest planet under `pointer`, if any.
pub fn pick(pointer: Vec2, viewport: Viewport, camera: &PerspectiveCamera, sim: &SimulationState) -> Option<usize> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }
    // Target ids carry the registry index.
    let targets: Vec<PickTarget> = sim
        .registry()
        .orbiting()
        .filter_map(|(index, body)| {
            sim.position_at(index).map(|center| PickTarget {
                id: EntityId(index as u32),
                center: center.as_vec3(),
                radius: body.visual_radius as f32,
            })
        })
        .collect();
    Raycaster::from_camera(to_ndc(pointer, viewport), camera)
        .intersect_nearest(&targets)
        .map(|hit| hit.id.0 as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HideTooltip;

pub struct PickingController {
    tooltip: Tooltip,
    timers: Timers<HideTooltip>,
    pending_hide: Option<TimerId>,
}

impl PickingController {
    pub fn new() -> Self {
        Self {
            tooltip: Tooltip::default(),
            timers: Timers::new(),
            pending_hide: None,
        }
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn hide_pending(&self) -> bool {
        self.pending_hide.is_some()
    }

    /// Ray-pick under the pointer and apply the hover transition.
    /// `now` is the frame time in seconds.
    pub fn on_pointer_move(
        &mut self,
        pointer: Vec2,
        viewport: Viewport,
        camera: &PerspectiveCamera,
        sim: &mut SimulationState,
        now: f64,
    ) -> HoverTransition {
        let hit = pick(pointer, viewport, camera, sim);
        self.apply_hit(hit, pointer, sim, now)
    }

    /// Apply the result of one pick. Touches only highlight bookkeeping in
    /// `sim` and the tooltip.
    pub fn apply_hit(
        &mut self,
        hit: Option<usize>,
        pointer: Vec2,
        sim: &mut SimulationState,
        now: f64,
    ) -> HoverTransition {
        let previous = sim.last_picked();
        let hit_name = hit.and_then(|i| sim.registry().get(i)).map(|b| b.name);

        match (previous, hit_name) {
            (Some(prev), Some(name)) if prev == name => HoverTransition::Unchanged,
            (_, Some(name)) => {
                if sim.highlight(name).is_err() {
                    return HoverTransition::Idle;
                }
                self.show(name, pointer);
                match previous {
                    Some(from) => HoverTransition::Switch { from, to: name },
                    None => HoverTransition::Enter(name),
                }
            }
            (previous, None) => {
                sim.clear_highlight();
                self.begin_hide(now);
                match previous {
                    Some(name) => HoverTransition::Leave(name),
                    None => HoverTransition::Idle,
                }
            }
        }
    }

    /// Fire due timers. Returns true when the tooltip was hidden.
    pub fn tick(&mut self, now: f64) -> bool {
        let fired = !self.timers.due(now).is_empty();
        if fired {
            self.pending_hide = None;
            self.tooltip.visibility = Visibility::Hidden;
        }
        fired
    }

    fn show(&mut self, name: &'static str, pointer: Vec2) {
        if let Some(id) = self.pending_hide.take() {
            self.timers.cancel(id);
        }
        self.tooltip = Tooltip {
            text: Some(name),
            x: pointer.x + TOOLTIP_OFFSET,
            y: pointer.y + TOOLTIP_OFFSET,
            opacity: 1.0,
            visibility: Visibility::Visible,
        };
    }

    fn begin_hide(&mut self, now: f64) {
        self.tooltip.opacity = 0.0;
        if self.tooltip.visibility == Visibility::Visible && self.pending_hide.is_none() {
            self.pending_hide = Some(self.timers.schedule(now, TOOLTIP_HIDE_DELAY, HideTooltip));
        }
    }
}

impl Default for PickingController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyRegistry, EARTH, MARS};
    use glam::Vec3;
    use orrery_engine::Rng;

    fn sim() -> SimulationState {
        SimulationState::new(BodyRegistry::solar_system(), &mut Rng::new(3))
    }

    #[test]
    fn hit_sequence_transitions() {
        let mut sim = sim();
        let mut picking = PickingController::new();
        let p = Vec2::new(100.0, 50.0);

        let seq = [Some(EARTH), Some(EARTH), None, Some(MARS)];
        let got: Vec<HoverTransition> = seq
            .iter()
            .enumerate()
            .map(|(i, hit)| picking.apply_hit(*hit, p, &mut sim, i as f64 * 0.016))
            .collect();

        assert_eq!(
            got,
            vec![
                HoverTransition::Enter("Earth"),
                HoverTransition::Unchanged,
                HoverTransition::Leave("Earth"),
                HoverTransition::Enter("Mars"),
            ]
        );
        assert_eq!(sim.last_picked(), Some("Mars"));
        assert!(!sim.highlighted("Earth"));
    }

    #[test]
    fn switch_between_bodies() {
        let mut sim = sim();
        let mut picking = PickingController::new();
        picking.apply_hit(Some(EARTH), Vec2::ZERO, &mut sim, 0.0);
        let t = picking.apply_hit(Some(MARS), Vec2::ZERO, &mut sim, 0.1);
        assert_eq!(t, HoverTransition::Switch { from: "Earth", to: "Mars" });
        assert!(sim.highlighted("Mars"));
        assert!(!sim.highlighted("Earth"));
    }

    #[test]
    fn tooltip_position_fixed_at_first_enter() {
        let mut sim = sim();
        let mut picking = PickingController::new();
        picking.apply_hit(Some(EARTH), Vec2::new(100.0, 200.0), &mut sim, 0.0);
        picking.apply_hit(Some(EARTH), Vec2::new(150.0, 250.0), &mut sim, 0.1);
        let tip = picking.tooltip();
        assert_eq!((tip.x, tip.y), (110.0, 210.0));
        assert_eq!(tip.text, Some("Earth"));
        assert_eq!(tip.opacity, 1.0);
        assert_eq!(tip.visibility, Visibility::Visible);
    }

    #[test]
    fn tooltip_hides_only_after_delay() {
        let mut sim = sim();
        let mut picking = PickingController::new();
        picking.apply_hit(Some(EARTH), Vec2::ZERO, &mut sim, 1.0);
        picking.apply_hit(None, Vec2::ZERO, &mut sim, 2.0);

        assert_eq!(picking.tooltip().opacity, 0.0);
        assert_eq!(picking.tooltip().visibility, Visibility::Visible);
        assert!(!picking.tick(2.0));
        assert!(!picking.tick(2.19));
        assert_eq!(picking.tooltip().visibility, Visibility::Visible);
        assert!(picking.tick(2.21));
        assert_eq!(picking.tooltip().visibility, Visibility::Hidden);
        assert!(!picking.hide_pending());
    }

    #[test]
    fn reenter_cancels_pending_hide() {
        let mut sim = sim();
        let mut picking = PickingController::new();
        picking.apply_hit(Some(EARTH), Vec2::ZERO, &mut sim, 0.0);
        picking.apply_hit(None, Vec2::ZERO, &mut sim, 0.1);
        assert!(picking.hide_pending());
        picking.apply_hit(Some(MARS), Vec2::ZERO, &mut sim, 0.15);
        assert!(!picking.hide_pending());
        assert!(!picking.tick(1.0));
        assert_eq!(picking.tooltip().visibility, Visibility::Visible);
        assert_eq!(picking.tooltip().text, Some("Mars"));
    }

    #[test]
    fn repeated_misses_keep_first_deadline() {
        let mut sim = sim();
        let mut picking = PickingController::new();
        picking.apply_hit(Some(EARTH), Vec2::ZERO, &mut sim, 0.0);
        assert_eq!(picking.apply_hit(None, Vec2::ZERO, &mut sim, 0.1), HoverTransition::Leave("Earth"));
        assert_eq!(picking.apply_hit(None, Vec2::ZERO, &mut sim, 0.2), HoverTransition::Idle);
        assert!(picking.tick(0.31));
    }

    #[test]
    fn ndc_mapping() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(to_ndc(Vec2::new(0.0, 0.0), vp), Vec2::new(-1.0, 1.0));
        assert_eq!(to_ndc(Vec2::new(400.0, 300.0), vp), Vec2::new(0.0, 0.0));
        assert_eq!(to_ndc(Vec2::new(800.0, 600.0), vp), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn ray_pick_finds_planet_under_pointer_but_not_sun() {
        let sim = sim();
        let vp = Viewport::new(800.0, 600.0);
        let earth = sim.position_at(EARTH).unwrap().as_vec3();

        // Look straight down at Earth from above.
        let mut camera = PerspectiveCamera::new(75.0, vp.aspect(), 0.1, 5000.0)
            .with_position(earth + Vec3::new(0.0, 500.0, 0.01));
        camera.look_at(earth);
        assert_eq!(pick(Vec2::new(400.0, 300.0), vp, &camera, &sim), Some(EARTH));

        let mut camera = PerspectiveCamera::new(75.0, vp.aspect(), 0.1, 5000.0)
            .with_position(Vec3::new(0.0, 1000.0, 0.01));
        camera.look_at(Vec3::ZERO);
        // The sun sits under the pointer but is not pickable.
        assert_eq!(pick(Vec2::new(400.0, 300.0), vp, &camera, &sim), None);
    }
}
