use super::Field;
use tracing::debug;

/// Starting state written into both fields before the first step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialCondition {
    /// Every cell of U and V set to 0.0.
    #[default]
    Zero,
    /// U = 1.0, V = 0.0 everywhere (the construction-time state).
    Baseline,
}

impl InitialCondition {
    pub fn apply(self, u: &mut Field, v: &mut Field) {
        match self {
            InitialCondition::Zero => init(u, v),
            InitialCondition::Baseline => {
                u.fill(1.0);
                v.fill(0.0);
            }
        }
    }
}

/// Resets both fields to zero, overwriting any prior values.
///
/// No random source is seeded here: nothing in the step rule draws random
/// numbers, so a run is fully determined by its parameters.
pub fn init(u: &mut Field, v: &mut Field) {
    u.fill(0.0);
    v.fill(0.0);
    debug!(
        width = u.width(),
        height = u.height(),
        "fields reset to zero"
    );
}
