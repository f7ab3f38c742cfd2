mod events;
mod ids;
mod market;
mod profile;
mod results;

pub use events::{InjectedEvent, LifeEvent};
pub use ids::{InstanceId, LifeEventId};
pub use market::{NoiseSampler, ReturnNoise};
pub use profile::Profile;
pub use results::{
    AgeBand, MonteCarloResult, PERCENTILE_TOLERANCE, PercentileSet, RetirementImpact,
    RetirementSearch, Trajectory, TrajectoryComparison, TrajectoryPoint, find_percentile_value,
    round_currency,
};
