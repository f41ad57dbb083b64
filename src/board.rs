/// Supported board variants and their static data.
///
/// Each board supplies a generated pin name table plus the override data its
/// initialization hook applies. The active board is selected at compile time
/// via feature flags.
use core::str::FromStr;

use thiserror::Error as ThisError;

use crate::boards;
use crate::config::{BoardConfig, HardwareFeature};
use crate::gpio::Gpio;
use crate::table::BoardPinTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum BoardId {
    S105,
    Uaefi121,
}

/// Fixed-function pin roles and feature activations a board applies at
/// startup. Independent of the pin name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOverrides {
    pub can_tx_pin: Option<Gpio>,
    pub can_rx_pin: Option<Gpio>,
    pub features: &'static [HardwareFeature],
    /// DC (H-bridge) outputs on the board
    pub dc_outputs: u8,
}

impl BoardOverrides {
    pub const NONE: BoardOverrides = BoardOverrides {
        can_tx_pin: None,
        can_rx_pin: None,
        features: &[],
        dc_outputs: 0,
    };

    /// Apply this board's overrides on top of `config`.
    pub fn apply(&self, config: &mut BoardConfig) {
        for &feature in self.features {
            if config.enable(feature) {
                log::info!("Board feature enabled: {}", feature.as_str());
            }
        }
        if let Some(pin) = self.can_tx_pin {
            config.can_tx_pin = Some(pin);
            log::info!("CAN TX on {}", pin);
        }
        if let Some(pin) = self.can_rx_pin {
            config.can_rx_pin = Some(pin);
            log::info!("CAN RX on {}", pin);
        }
    }
}

static UAEFI121_OVERRIDES: BoardOverrides = BoardOverrides {
    can_tx_pin: Some(Gpio::B13),
    can_rx_pin: Some(Gpio::B5),
    features: &[
        HardwareFeature::MegaEnablePin,
        HardwareFeature::BatteryVoltage,
        HardwareFeature::SdCardWithAccelerometer,
        HardwareFeature::AtPullUps,
    ],
    dc_outputs: 2,
};

static NO_OVERRIDES: BoardOverrides = BoardOverrides::NONE;

impl BoardId {
    pub const ALL: &'static [BoardId] = &[BoardId::S105, BoardId::Uaefi121];

    pub const fn name(self) -> &'static str {
        match self {
            BoardId::S105 => "s105",
            BoardId::Uaefi121 => "uaefi121",
        }
    }

    pub fn pin_names(self) -> &'static BoardPinTable {
        match self {
            BoardId::S105 => &boards::s105::PIN_NAMES,
            BoardId::Uaefi121 => &boards::uaefi121::PIN_NAMES,
        }
    }

    /// Generated output list: low-side outputs, then high-side.
    pub fn outputs(self) -> &'static [Gpio] {
        match self {
            BoardId::S105 => boards::s105::OUTPUTS,
            BoardId::Uaefi121 => boards::uaefi121::OUTPUTS,
        }
    }

    pub fn overrides(self) -> &'static BoardOverrides {
        match self {
            BoardId::S105 => &NO_OVERRIDES,
            BoardId::Uaefi121 => &UAEFI121_OVERRIDES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[error("unknown board name")]
pub struct UnknownBoard;

impl FromStr for BoardId {
    type Err = UnknownBoard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardId::ALL
            .iter()
            .copied()
            .find(|board| board.name() == s)
            .ok_or(UnknownBoard)
    }
}

#[cfg(all(feature = "board-s105", feature = "board-uaefi121"))]
compile_error!(
    "board-s105 and board-uaefi121 are both enabled; board-s105 is a default \
     feature, so select another board with `default-features = false`"
);

#[cfg(feature = "board-s105")]
mod hw {
    use super::BoardId;

    pub const ACTIVE_BOARD: Option<BoardId> = Some(BoardId::S105);
    pub const BOARD_NAME: &str = "s105";
}

#[cfg(all(feature = "board-uaefi121", not(feature = "board-s105")))]
mod hw {
    use super::BoardId;

    pub const ACTIVE_BOARD: Option<BoardId> = Some(BoardId::Uaefi121);
    pub const BOARD_NAME: &str = "uaefi121";
}

#[cfg(not(any(feature = "board-s105", feature = "board-uaefi121")))]
mod hw {
    use super::BoardId;

    pub const ACTIVE_BOARD: Option<BoardId> = None;
    pub const BOARD_NAME: &str = "unknown";
}

pub use hw::*;

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn active_board_follows_features() {
        if cfg!(feature = "board-s105") {
            assert_eq!(ACTIVE_BOARD, Some(BoardId::S105));
        } else if cfg!(feature = "board-uaefi121") {
            assert_eq!(ACTIVE_BOARD, Some(BoardId::Uaefi121));
        } else {
            assert_eq!(ACTIVE_BOARD, None);
        }
        assert_eq!(BOARD_NAME, ACTIVE_BOARD.map_or("unknown", BoardId::name));
    }

    #[test]
    fn all_lists_every_board() {
        assert_eq!(BoardId::ALL.len(), BoardId::iter().count());
        for board in BoardId::iter() {
            assert!(BoardId::ALL.contains(&board));
        }
    }

    #[test]
    fn table_belongs_to_its_board() {
        for board in BoardId::iter() {
            assert_eq!(board.pin_names().board, board.name());
        }
    }

    #[test]
    fn generated_tables_are_valid() {
        for board in BoardId::iter() {
            assert_eq!(board.pin_names().validate(), Ok(()), "{}", board.name());
            assert!(!board.pin_names().is_empty());
        }
    }

    #[test]
    fn board_from_name() {
        assert_eq!("s105".parse::<BoardId>(), Ok(BoardId::S105));
        assert_eq!("uaefi121".parse::<BoardId>(), Ok(BoardId::Uaefi121));
        assert_eq!("S105".parse::<BoardId>(), Err(UnknownBoard));
        assert_eq!("".parse::<BoardId>(), Err(UnknownBoard));
    }

    #[test]
    fn outputs_have_no_repeats() {
        for board in BoardId::iter() {
            let outputs = board.outputs();
            for (i, pin) in outputs.iter().enumerate() {
                assert!(!outputs[i + 1..].contains(pin), "{} repeats {pin}", board.name());
            }
        }
    }

    #[test]
    fn s105_outputs_all_have_names() {
        let table = BoardId::S105.pin_names();
        assert_eq!(BoardId::S105.outputs().len(), table.len());
        for &pin in BoardId::S105.outputs() {
            assert!(table.contains(pin), "{pin}");
        }
    }

    #[test]
    fn uaefi121_overrides() {
        let overrides = BoardId::Uaefi121.overrides();
        assert_eq!(overrides.can_tx_pin, Some(Gpio::B13));
        assert_eq!(overrides.can_rx_pin, Some(Gpio::B5));
        assert_eq!(overrides.dc_outputs, 2);
        assert_eq!(overrides.features.len(), 4);
        assert_eq!(*BoardId::S105.overrides(), BoardOverrides::NONE);
    }

    #[test]
    fn apply_sets_can_pins_and_features() {
        let mut config = BoardConfig::new();
        BoardId::Uaefi121.overrides().apply(&mut config);
        assert_eq!(config.can_tx_pin, Some(Gpio::B13));
        assert_eq!(config.can_rx_pin, Some(Gpio::B5));
        assert!(config.is_enabled(HardwareFeature::SdCardWithAccelerometer));
        assert!(config.is_enabled(HardwareFeature::AtPullUps));

        // Applying twice does not duplicate features
        BoardId::Uaefi121.overrides().apply(&mut config);
        assert_eq!(config.features().len(), 4);
    }

    #[test]
    fn apply_without_overrides_keeps_config() {
        let mut config = BoardConfig::new();
        config.can_tx_pin = Some(Gpio::D1);
        BoardId::S105.overrides().apply(&mut config);
        assert_eq!(config.can_tx_pin, Some(Gpio::D1));
        assert_eq!(config.can_rx_pin, None);
        assert!(config.features().is_empty());
    }

    #[test]
    fn can_pins_have_no_display_name() {
        // Electrical roles and display names are independent
        let can_tx = BoardId::Uaefi121.overrides().can_tx_pin.unwrap();
        for board in BoardId::iter() {
            assert_eq!(board.pin_names().lookup(can_tx), None);
        }
    }
}
