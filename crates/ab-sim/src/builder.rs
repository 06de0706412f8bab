//! Fluent builder for constructing a [`Sim`].

use ab_boarding::{Manifest, SalesPolicy, sell_seats};
use ab_cabin::Cabin;
use ab_core::{BoardingConfig, SimRng};
use tracing::debug;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`BoardingConfig`] — cabin size, seed, sales policy, stall limit, …
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                           |
/// |-------------------|---------------------------------------------------|
/// | `.manifest(m)`    | `sell_seats` with a `SimRng` seeded from config   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   BoardingConfig,
    manifest: Option<Manifest>,
}

impl SimBuilder {
    pub fn new(config: BoardingConfig) -> Self {
        Self {
            config,
            manifest: None,
        }
    }

    /// Supply passengers and queues instead of selling seats at random.
    ///
    /// Must hold one queue per aisle zone of the configured cabin, and every
    /// queued passenger must hold a seat in that queue's zone.
    pub fn manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Validate inputs, lay out the cabin, sell seats if needed, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let cabin = Cabin::build(self.config.rows, self.config.columns)?;

        let manifest = match self.manifest {
            Some(m) => {
                check_manifest(&cabin, &m)?;
                m
            }
            None => {
                let mut rng = SimRng::new(self.config.seed);
                sell_seats(&cabin, &SalesPolicy::from_config(&self.config), &mut rng)
            }
        };

        debug!(
            rows       = cabin.seat_rows(),
            columns    = cabin.seat_columns(),
            aisles     = cabin.aisle_columns().len(),
            passengers = manifest.passengers.len(),
            "simulation built"
        );

        Ok(Sim::new(self.config, cabin, manifest.passengers, manifest.queues))
    }
}

fn check_manifest(cabin: &Cabin, manifest: &Manifest) -> SimResult<()> {
    let expected = cabin.zones().len();
    if manifest.queues.len() != expected {
        return Err(SimError::ZoneCountMismatch {
            expected,
            got: manifest.queues.len(),
        });
    }
    for (zone, queue) in manifest.queues.iter().enumerate() {
        for passenger in queue.iter() {
            let in_zone = manifest
                .passengers
                .get(passenger)
                .and_then(|p| p.seat)
                .and_then(|seat| cabin.zone_of_seat(&seat));
            if in_zone != Some(zone) {
                return Err(SimError::QueueMismatch { passenger, zone });
            }
        }
    }
    Ok(())
}
