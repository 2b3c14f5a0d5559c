//! Control panel model: one speed slider per orbiting body, the pause
//! button and the theme toggle.
//!
//! The host renders the panel from `describe()` and forwards widget input
//! back by body name, so a reordered registry cannot misbind a slider.

use serde::Serialize;

use crate::bodies::BodyRegistry;
use crate::error::{SimError, SimResult};
use crate::simulation::SimulationState;

pub const SLIDER_STEP: f64 = 0.1;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpeedSlider {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

impl SpeedSlider {
    fn clamp(&self, raw: f64) -> f64 {
        raw.clamp(self.min, self.max)
    }

    /// Value as shown next to the slider, one decimal place.
    pub fn readout(&self) -> String {
        format!("{:.1}", self.value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PanelColors {
    pub background: &'static str,
    pub border: &'static str,
}

impl Theme {
    pub fn colors(self) -> PanelColors {
        match self {
            Theme::Dark => PanelColors {
                background: "#161b22",
                border: "#30363d",
            },
            Theme::Light => PanelColors {
                background: "#ffffff",
                border: "#d1d5db",
            },
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Serialize)]
struct PanelDescription<'a> {
    sliders: &'a [SpeedSlider],
    pause_label: &'static str,
    theme: Theme,
    colors: PanelColors,
}

pub struct ControlPanel {
    sliders: Vec<SpeedSlider>,
    theme: Theme,
}

impl ControlPanel {
    pub fn new(registry: &BodyRegistry) -> Self {
        let sliders = registry
            .orbiting()
            .map(|(_, body)| {
                let rate = body.base_angular_rate();
                SpeedSlider {
                    name: body.name,
                    min: 0.0,
                    max: rate * 2.0,
                    step: SLIDER_STEP,
                    value: rate,
                }
            })
            .collect();
        Self {
            sliders,
            theme: Theme::Dark,
        }
    }

    pub fn sliders(&self) -> &[SpeedSlider] {
        &self.sliders
    }

    pub fn slider(&self, name: &str) -> Option<&SpeedSlider> {
        self.sliders.iter().find(|s| s.name == name)
    }

    /// Slider input for `name`. The raw value is clamped to the slider range
    /// before it reaches the simulation; returns the new readout text.
    pub fn on_input(&mut self, name: &str, raw: f64, sim: &mut SimulationState) -> SimResult<String> {
        let slider = self
            .sliders
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| SimError::unknown_body(name))?;
        if raw.is_nan() {
            log::warn!("ignoring NaN speed for '{name}'");
            return Err(SimError::InvalidArgument(format!("speed for '{name}' is NaN")));
        }
        let value = slider.clamp(raw);
        if let Err(err) = sim.set_speed_override(name, value) {
            log::warn!("speed override rejected: {err}");
            return Err(err);
        }
        slider.value = value;
        Ok(slider.readout())
    }

    /// Flip pause and return the button label for the new state.
    pub fn toggle_pause(&self, sim: &mut SimulationState) -> &'static str {
        sim.toggle_pause();
        self.pause_label(sim)
    }

    /// Label follows the simulation, which owns the pause flag.
    pub fn pause_label(&self, sim: &SimulationState) -> &'static str {
        if sim.is_paused() {
            "Resume"
        } else {
            "Pause"
        }
    }

    /// Switch panel colors. Has no effect on the simulation.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        log::debug!("theme: {:?}", self.theme);
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// JSON description of the whole panel for the host UI.
    pub fn describe(&self, sim: &SimulationState) -> serde_json::Result<String> {
        serde_json::to_string(&PanelDescription {
            sliders: &self.sliders,
            pause_label: self.pause_label(sim),
            theme: self.theme,
            colors: self.theme.colors(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BODIES, EARTH, JUPITER};
    use orrery_engine::Rng;

    fn setup() -> (ControlPanel, SimulationState) {
        let registry = BodyRegistry::solar_system();
        let panel = ControlPanel::new(&registry);
        (panel, SimulationState::new(registry, &mut Rng::new(11)))
    }

    #[test]
    fn one_slider_per_orbiting_body() {
        let (panel, _) = setup();
        assert_eq!(panel.sliders().len(), 8);
        assert!(panel.slider("Sun").is_none());
        let earth = panel.slider("Earth").unwrap();
        let rate = BODIES[EARTH].base_angular_rate();
        assert_eq!(earth.min, 0.0);
        assert_eq!(earth.max, rate * 2.0);
        assert_eq!(earth.step, 0.1);
        assert_eq!(earth.value, rate);
        assert_eq!(earth.readout(), "2.7");
    }

    #[test]
    fn input_is_clamped_and_forwarded() {
        let (mut panel, mut sim) = setup();
        let max = BODIES[JUPITER].base_angular_rate() * 2.0;
        let text = panel.on_input("Jupiter", 100.0, &mut sim).unwrap();
        assert_eq!(sim.state("Jupiter").unwrap().angular_rate_override, max);
        assert_eq!(text, format!("{max:.1}"));

        assert_eq!(panel.on_input("Jupiter", -5.0, &mut sim).unwrap(), "0.0");
        assert_eq!(sim.state("Jupiter").unwrap().angular_rate_override, 0.0);

        assert_eq!(panel.on_input("Earth", 1.24, &mut sim).unwrap(), "1.2");
    }

    #[test]
    fn bad_input_is_rejected() {
        let (mut panel, mut sim) = setup();
        assert!(panel.on_input("Pluto", 1.0, &mut sim).is_err());
        assert!(panel.on_input("Earth", f64::NAN, &mut sim).is_err());
        assert_eq!(
            sim.state("Earth").unwrap().angular_rate_override,
            BODIES[EARTH].base_angular_rate()
        );
    }

    #[test]
    fn pause_label_follows_state() {
        let (panel, mut sim) = setup();
        assert_eq!(panel.pause_label(&sim), "Pause");
        assert_eq!(panel.toggle_pause(&mut sim), "Resume");
        assert!(sim.is_paused());
        assert_eq!(panel.toggle_pause(&mut sim), "Pause");
        assert!(!sim.is_paused());
    }

    #[test]
    fn pause_label_tracks_direct_simulation_toggles() {
        let (panel, mut sim) = setup();
        sim.toggle_pause();
        assert_eq!(panel.pause_label(&sim), "Resume");
        let json: serde_json::Value = serde_json::from_str(&panel.describe(&sim).unwrap()).unwrap();
        assert_eq!(json["pause_label"], "Resume");
        assert_eq!(panel.toggle_pause(&mut sim), "Pause");
    }

    #[test]
    fn theme_toggle_is_visual_only() {
        let (mut panel, sim) = setup();
        let paused = sim.is_paused();
        assert_eq!(panel.toggle_theme(), Theme::Light);
        assert_eq!(panel.theme().colors().background, "#ffffff");
        assert_eq!(panel.toggle_theme(), Theme::Dark);
        assert_eq!(Theme::Dark.colors().border, "#30363d");
        assert_eq!(sim.is_paused(), paused);
    }

    #[test]
    fn describe_lists_sliders_in_registry_order() {
        let (panel, sim) = setup();
        let json: serde_json::Value = serde_json::from_str(&panel.describe(&sim).unwrap()).unwrap();
        assert_eq!(json["sliders"][0]["name"], "Mercury");
        assert_eq!(json["sliders"][7]["name"], "Neptune");
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["pause_label"], "Pause");
        assert_eq!(json["colors"]["background"], "#161b22");
    }
}
