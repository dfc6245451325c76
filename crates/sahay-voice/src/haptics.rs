use std::time::Duration;

/// Haptic feedback collaborator. `pulse` is a hint; devices without a
/// vibration motor ignore it.
pub trait HapticEngine {
    fn pulse(&self, duration: Duration);
}

/// Requested feedback strength. Maps to the vibration durations the
/// original patterns used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticIntensity {
    Light,
    Medium,
    Heavy,
}

impl HapticIntensity {
    pub fn duration(self) -> Duration {
        match self {
            Self::Light => Duration::from_millis(10),
            Self::Medium => Duration::from_millis(20),
            Self::Heavy => Duration::from_millis(30),
        }
    }
}

/// Engine for devices without haptics support.
pub struct NullHaptics;

impl HapticEngine for NullHaptics {
    fn pulse(&self, _duration: Duration) {}
}
