use force_graph::SimulationParameters;
use serde::Deserialize;

/// Where the graph comes from and how it is laid out.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
	pub data_url: String,
	/// Fixed viewport size; the window size is used when unset.
	pub width: Option<f64>,
	pub height: Option<f64>,
	pub node_radius: f64,
	/// Seconds the simulation advances per animation frame.
	pub tick_dt: f32,
	pub simulation: SimulationSettings,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			data_url: "/data/force.json".into(),
			width: None,
			height: None,
			node_radius: 5.0,
			tick_dt: 0.016,
			simulation: SimulationSettings::default(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	pub node_mass: f32,
}

impl Default for SimulationSettings {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			node_mass: 10.0,
		}
	}
}

impl SimulationSettings {
	pub fn parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}
