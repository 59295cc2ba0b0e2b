//! The cycle engine: one button press, run to quiescence.
//!
//! [`CycleEngine`] owns a [`Network`] and drives it one press at a time.
//! Each [`press()`](CycleEngine::press) seeds a fresh FIFO queue with the
//! synthetic `button -low-> broadcaster` pulse and drains it. Every
//! dequeued pulse is shown to the observer before the receiving module
//! reacts, and whatever the module emits is appended to the back of the
//! queue. Module state carries over from one press to the next.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, so presses are strictly ordered
//! and no two callers can interleave pulses into the same network.
//! Independent engines over independently built networks share nothing
//! and may run on different threads.
//!
//! # Divergence
//!
//! Termination depends on the network, not on the engine. A press that
//! processes more than [`EngineConfig::pulse_budget`] pulses is abandoned
//! with [`CycleError::Divergence`]. Module state is then mid-press, so the
//! engine poisons itself and every later press returns
//! [`CycleError::Poisoned`]. Rebuild the network to start over.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use pulsenet_core::{CycleError, Level, ModuleId, NullObserver, Pulse, PulseObserver};
use pulsenet_network::{Dispatch, Network};
use tracing::{trace, warn};

use crate::config::{ConfigError, EngineConfig};
use crate::metrics::CycleMetrics;

// Compile-time assertion: CycleEngine is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<CycleEngine>();
    }
};

/// Drives a [`Network`] one button press at a time.
#[derive(Debug)]
pub struct CycleEngine {
    network: Network,
    config: EngineConfig,
    presses: u64,
    poisoned: bool,
    last_metrics: CycleMetrics,
}

impl CycleEngine {
    /// Wrap `network` after validating `config`.
    pub fn new(network: Network, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            network,
            config,
            presses: 0,
            poisoned: false,
            last_metrics: CycleMetrics::default(),
        })
    }

    /// Wrap `network` with [`EngineConfig::default()`].
    pub fn with_defaults(network: Network) -> Self {
        Self {
            network,
            config: EngineConfig::default(),
            presses: 0,
            poisoned: false,
            last_metrics: CycleMetrics::default(),
        }
    }

    /// Run one button press to quiescence.
    ///
    /// `observer` sees every transmitted pulse in FIFO order, starting with
    /// the button pulse and including pulses to unmodeled sinks.
    ///
    /// # Errors
    ///
    /// [`CycleError::Divergence`] if the press exceeds the pulse budget
    /// (the engine is poisoned afterwards), or [`CycleError::Poisoned`] if
    /// an earlier press diverged.
    pub fn press<O>(&mut self, observer: &mut O) -> Result<CycleMetrics, CycleError>
    where
        O: PulseObserver + ?Sized,
    {
        if self.poisoned {
            warn!(presses = self.presses, "press refused: engine poisoned");
            return Err(CycleError::Poisoned);
        }

        let started = Instant::now();
        let press = self.presses + 1;
        let budget = self.config.pulse_budget;
        let mut metrics = CycleMetrics {
            press,
            ..CycleMetrics::default()
        };

        let mut queue = VecDeque::new();
        queue.push_back(Pulse::new(ModuleId::BUTTON, self.network.entry(), Level::Low));

        while let Some(pulse) = queue.pop_front() {
            if metrics.pulses as usize >= budget {
                self.poisoned = true;
                warn!(
                    press,
                    pulses = metrics.pulses,
                    budget,
                    queued = queue.len() + 1,
                    "press diverged"
                );
                return Err(CycleError::Divergence {
                    press,
                    pulses: metrics.pulses as usize,
                    budget,
                });
            }

            metrics.record(&pulse);
            observer.observe(&pulse);

            match self.network.dispatch(pulse.to) {
                Dispatch::Module(module) => {
                    let from = module.id();
                    queue.extend(
                        module
                            .receive(pulse.from, pulse.level)
                            .map(|(to, level)| Pulse::new(from, to, level)),
                    );
                    metrics.peak_queue_depth = metrics.peak_queue_depth.max(queue.len());
                }
                Dispatch::Sink => metrics.sink_pulses += 1,
            }
        }

        metrics.elapsed_us = saturating_micros(started.elapsed());
        self.presses = press;
        self.last_metrics = metrics.clone();
        trace!(
            press,
            pulses = metrics.pulses,
            low = metrics.low,
            high = metrics.high,
            "press complete"
        );
        Ok(metrics)
    }

    /// Run one press without observing individual pulses.
    pub fn press_silent(&mut self) -> Result<CycleMetrics, CycleError> {
        self.press(&mut NullObserver)
    }

    /// Number of presses completed.
    pub fn presses(&self) -> u64 {
        self.presses
    }

    /// Whether a divergence has poisoned this engine.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Metrics from the most recent completed press.
    pub fn last_metrics(&self) -> &CycleMetrics {
        &self.last_metrics
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the network and its current state.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Give the network back, with whatever state it reached.
    pub fn into_network(self) -> Network {
        self.network
    }
}

/// Whole microseconds in `elapsed`, saturating at `u64::MAX`.
fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
