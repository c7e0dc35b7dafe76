/// Physical conditions of a simulated meteorite impact. Captured once at
/// simulator construction and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactEvent {
    pub velocity: f64, // km/s, >= 0
    pub angle: f64,    // degrees from vertical, in [0, 90]
    pub composition: String,
}

impl ImpactEvent {
    /// Out-of-range values clamp to the physical domain rather than fail:
    /// velocity to `>= 0`, angle to `[0, 90]`.
    pub fn new(velocity: f64, angle: f64, composition: impl Into<String>) -> Self {
        Self {
            velocity: velocity.max(0.0),
            angle: angle.clamp(0.0, 90.0),
            composition: composition.into(),
        }
    }
}
