/// Board-level configuration filled in by the board initialization hook.
///
/// Only records which pins carry fixed-function roles and which hardware
/// features the board turns on. Driving the hardware is the platform's job.
use heapless::Vec;

/// Maximum number of hardware features a board can enable.
pub const MAX_FEATURES: usize = 8;

/// Named hardware activation routines a board hook can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HardwareFeature {
    /// Drive the enable pin of the Hellen mega module
    MegaEnablePin,
    /// Battery voltage sense input
    BatteryVoltage,
    /// SD card slot sharing its SPI bus with the accelerometer
    SdCardWithAccelerometer,
    /// Default pull-ups on the analog-trigger inputs
    AtPullUps,
}

impl HardwareFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            HardwareFeature::MegaEnablePin => "mega_en_pin",
            HardwareFeature::BatteryVoltage => "vbatt",
            HardwareFeature::SdCardWithAccelerometer => "sd_accelerometer",
            HardwareFeature::AtPullUps => "at_pullups",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub can_tx_pin: Option<crate::gpio::Gpio>,
    pub can_rx_pin: Option<crate::gpio::Gpio>,
    features: Vec<HardwareFeature, MAX_FEATURES>,
}

impl BoardConfig {
    pub const fn new() -> Self {
        Self {
            can_tx_pin: None,
            can_rx_pin: None,
            features: Vec::new(),
        }
    }

    /// Enable `feature`. Returns false if it was already enabled or the
    /// feature list is full.
    pub fn enable(&mut self, feature: HardwareFeature) -> bool {
        if self.is_enabled(feature) {
            return false;
        }
        self.features.push(feature).is_ok()
    }

    pub fn is_enabled(&self, feature: HardwareFeature) -> bool {
        self.features.contains(&feature)
    }

    pub fn features(&self) -> &[HardwareFeature] {
        &self.features
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}
