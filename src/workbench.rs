//! Selective recomputation of the demonstration panels.
//!
//! Each panel depends only on its own inputs, so a single input change
//! refreshes exactly one panel. The harmonic field and the residue integrand
//! take no inputs and are computed once.

use tracing::debug;

use crate::config::LabConfig;
use crate::errors::EmComplexError;
use crate::fields::HarmonicField;
use crate::mapping::{square_grid, MappedGrid};
use crate::math::Scalar;
use crate::phasor::{build_phasors, Phasor, PhasorDiagram};
use crate::residue::reference_residue_series;
use crate::sampling::LineSeries;
use crate::transforms::{clarke_park, RotatingFrameCurrents, ThreePhaseCurrents};

/// Rendered sections of the lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Voltage/current phasor arrows.
    Phasors,
    /// `ln(r)` surface.
    HarmonicField,
    /// `w = z²` point cloud.
    ConformalMap,
    /// `(i_d, i_q)` readout.
    ClarkePark,
    /// `1/(x²+1)` line plot.
    ResidueIntegrand,
}

/// A single edited control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputChange {
    /// New `V0`.
    VoltageAmplitude(Scalar),
    /// New `I0`.
    CurrentAmplitude(Scalar),
    /// New voltage phase.
    VoltagePhase(Scalar),
    /// New current phase.
    CurrentPhase(Scalar),
    /// New conformal-map resolution.
    Resolution(u32),
    /// New `i_a`.
    PhaseA(Scalar),
    /// New `i_b`.
    PhaseB(Scalar),
    /// New `i_c`.
    PhaseC(Scalar),
    /// New Park angle.
    Theta(Scalar),
}

impl InputChange {
    /// Panel whose output depends on this input.
    #[must_use]
    pub const fn panel(&self) -> Panel {
        match self {
            Self::VoltageAmplitude(_)
            | Self::CurrentAmplitude(_)
            | Self::VoltagePhase(_)
            | Self::CurrentPhase(_) => Panel::Phasors,
            Self::Resolution(_) => Panel::ConformalMap,
            Self::PhaseA(_) | Self::PhaseB(_) | Self::PhaseC(_) | Self::Theta(_) => {
                Panel::ClarkePark
            }
        }
    }
}

/// Current value of every control.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabInputs {
    /// Voltage phasor.
    pub voltage: Phasor,
    /// Current phasor.
    pub current: Phasor,
    /// Conformal-map resolution.
    pub resolution: u32,
    /// Phase currents.
    pub phase_currents: ThreePhaseCurrents,
    /// Park angle.
    pub theta: Scalar,
}

impl From<&LabConfig> for LabInputs {
    fn from(config: &LabConfig) -> Self {
        Self {
            voltage: Phasor::new(config.voltage_amplitude.default, config.voltage_phase.default),
            current: Phasor::new(config.current_amplitude.default, config.current_phase.default),
            resolution: config.resolution.default,
            phase_currents: config.phase_currents,
            theta: config.theta.default,
        }
    }
}

/// Latest data for every panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LabOutputs {
    /// Phasor arrows and display bound.
    pub phasors: PhasorDiagram,
    /// Harmonic surface.
    pub harmonic: HarmonicField,
    /// Conformal point cloud.
    pub conformal: MappedGrid,
    /// Rotating-frame currents.
    pub rotating: RotatingFrameCurrents,
    /// Residue integrand series.
    pub residue: LineSeries,
}

/// Holds inputs and outputs, recomputing only what a change affects.
#[derive(Debug, Clone)]
pub struct Workbench {
    config: LabConfig,
    inputs: LabInputs,
    outputs: LabOutputs,
}

impl Workbench {
    /// Validates `config` and evaluates every panel at its defaults.
    pub fn new(config: LabConfig) -> Result<Self, EmComplexError> {
        config.validate()?;
        let inputs = LabInputs::from(&config);
        let outputs = evaluate_all(&inputs)?;
        Ok(Self { config, inputs, outputs })
    }

    /// Workbench over [`LabConfig::default`].
    pub fn with_defaults() -> Result<Self, EmComplexError> {
        Self::new(LabConfig::default())
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Current inputs.
    #[must_use]
    pub const fn inputs(&self) -> &LabInputs {
        &self.inputs
    }

    /// Latest outputs.
    #[must_use]
    pub const fn outputs(&self) -> &LabOutputs {
        &self.outputs
    }

    /// Applies `change` (clamped to its configured range) and refreshes the dependent panel.
    ///
    /// Inputs and outputs are left untouched if the panel cannot be recomputed.
    pub fn apply(&mut self, change: InputChange) -> Result<Panel, EmComplexError> {
        let c = &self.config;
        let mut candidate = self.inputs;
        match change {
            InputChange::VoltageAmplitude(v) => {
                candidate.voltage.amplitude = c.voltage_amplitude.clamp(v);
            }
            InputChange::CurrentAmplitude(v) => {
                candidate.current.amplitude = c.current_amplitude.clamp(v);
            }
            InputChange::VoltagePhase(v) => candidate.voltage.phase = c.voltage_phase.clamp(v),
            InputChange::CurrentPhase(v) => candidate.current.phase = c.current_phase.clamp(v),
            InputChange::Resolution(v) => candidate.resolution = c.resolution.clamp(v),
            InputChange::PhaseA(v) => candidate.phase_currents.a = v,
            InputChange::PhaseB(v) => candidate.phase_currents.b = v,
            InputChange::PhaseC(v) => candidate.phase_currents.c = v,
            InputChange::Theta(v) => candidate.theta = c.theta.clamp(v),
        }
        let panel = change.panel();
        evaluate_panel(&candidate, panel, &mut self.outputs)?;
        self.inputs = candidate;
        Ok(panel)
    }

    /// Recomputes a single panel from the current inputs.
    pub fn refresh(&mut self, panel: Panel) -> Result<(), EmComplexError> {
        evaluate_panel(&self.inputs, panel, &mut self.outputs)
    }

    /// Recomputes every panel.
    pub fn recompute_all(&mut self) -> Result<(), EmComplexError> {
        self.outputs = evaluate_all(&self.inputs)?;
        Ok(())
    }
}

// Each arm computes before assigning, so `out` is unchanged on error.
fn evaluate_panel(
    inputs: &LabInputs,
    panel: Panel,
    out: &mut LabOutputs,
) -> Result<(), EmComplexError> {
    debug!(?panel, "recomputing panel");
    match panel {
        Panel::Phasors => out.phasors = build_phasors(inputs.voltage, inputs.current),
        Panel::HarmonicField => out.harmonic = HarmonicField::reference()?,
        Panel::ConformalMap => out.conformal = square_grid(inputs.resolution as usize)?,
        Panel::ClarkePark => out.rotating = clarke_park(inputs.phase_currents, inputs.theta),
        Panel::ResidueIntegrand => out.residue = reference_residue_series(),
    }
    Ok(())
}

fn evaluate_all(inputs: &LabInputs) -> Result<LabOutputs, EmComplexError> {
    debug!("evaluating all panels");
    Ok(LabOutputs {
        phasors: build_phasors(inputs.voltage, inputs.current),
        harmonic: HarmonicField::reference()?,
        conformal: square_grid(inputs.resolution as usize)?,
        rotating: clarke_park(inputs.phase_currents, inputs.theta),
        residue: reference_residue_series(),
    })
}
