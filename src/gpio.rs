/// Platform-wide physical pin identifiers.
///
/// Every board shares one flat enumeration: ports `A` through `K`, sixteen
/// bits each. The discriminant is `port * 16 + bit`, so the enum doubles as a
/// dense index for tables and wire formats.
use core::fmt;
use core::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error as ThisError;

/// Pins per GPIO port.
pub const PORT_WIDTH: u8 = 16;

/// Number of GPIO ports (`A`..=`K`).
pub const PORT_COUNT: u8 = 11;

macro_rules! gpio_pins {
    ($($name:ident),* $(,)?) => {
        /// One physical microcontroller pin.
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(test, derive(strum::EnumIter))]
        pub enum Gpio {
            $($name,)*
        }

        impl Gpio {
            /// Every pin in index order.
            pub const ALL: &'static [Gpio] = &[$(Gpio::$name,)*];

            const NAMES: &'static [&'static str] = &[$(stringify!($name),)*];
        }
    };
}

gpio_pins! {
    A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15,
    B0, B1, B2, B3, B4, B5, B6, B7, B8, B9, B10, B11, B12, B13, B14, B15,
    C0, C1, C2, C3, C4, C5, C6, C7, C8, C9, C10, C11, C12, C13, C14, C15,
    D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15,
    E0, E1, E2, E3, E4, E5, E6, E7, E8, E9, E10, E11, E12, E13, E14, E15,
    F0, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15,
    G0, G1, G2, G3, G4, G5, G6, G7, G8, G9, G10, G11, G12, G13, G14, G15,
    H0, H1, H2, H3, H4, H5, H6, H7, H8, H9, H10, H11, H12, H13, H14, H15,
    I0, I1, I2, I3, I4, I5, I6, I7, I8, I9, I10, I11, I12, I13, I14, I15,
    J0, J1, J2, J3, J4, J5, J6, J7, J8, J9, J10, J11, J12, J13, J14, J15,
    K0, K1, K2, K3, K4, K5, K6, K7, K8, K9, K10, K11, K12, K13, K14, K15,
}

impl Gpio {
    /// Pin for a port letter and bit, if both are in range.
    pub const fn new(port: char, bit: u8) -> Option<Self> {
        if port < 'A' || bit >= PORT_WIDTH {
            return None;
        }
        let port = port as u32 - 'A' as u32;
        if port >= PORT_COUNT as u32 {
            return None;
        }
        Self::from_index(port as u8 * PORT_WIDTH + bit)
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Port letter, `'A'`..=`'K'`.
    pub const fn port(self) -> char {
        (b'A' + self as u8 / PORT_WIDTH) as char
    }

    /// Bit within the port, `0..16`.
    pub const fn bit(self) -> u8 {
        self as u8 % PORT_WIDTH
    }

    /// Bare pin name, e.g. `"D13"`.
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum GpioError {
    #[error("pin index {0} is outside the GPIO range")]
    OutOfRange(u8),
    #[error("not a GPIO pin name")]
    Parse,
}

impl From<Gpio> for u8 {
    fn from(value: Gpio) -> Self {
        value as Self
    }
}

impl TryFrom<u8> for Gpio {
    type Error = GpioError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or(GpioError::OutOfRange(value))
    }
}

/// Accepts `"D13"`, `"PD13"` and `"Gpio::D13"`.
impl FromStr for Gpio {
    type Err = GpioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("Gpio::").unwrap_or(s);
        let s = match s.as_bytes() {
            [b'P', b'A'..=b'Z', ..] => &s[1..],
            _ => s,
        };

        let mut chars = s.chars();
        let port = chars.next().ok_or(GpioError::Parse)?;
        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GpioError::Parse);
        }
        // "D05" is not a pin name
        if digits.len() == 2 && digits.starts_with('0') {
            return Err(GpioError::Parse);
        }
        let bit: u8 = digits.parse().map_err(|_| GpioError::Parse)?;

        Self::new(port, bit).ok_or(GpioError::Parse)
    }
}

impl fmt::Display for Gpio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Gpio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn discriminant_is_port_and_bit() {
        assert_eq!(Gpio::ALL.len(), (PORT_COUNT * PORT_WIDTH) as usize);
        for pin in Gpio::iter() {
            assert_eq!(pin.index(), (pin.port() as u8 - b'A') * PORT_WIDTH + pin.bit());
            assert_eq!(Gpio::from_index(pin.index()), Some(pin));
            assert_eq!(Gpio::new(pin.port(), pin.bit()), Some(pin));
        }
    }

    #[test]
    fn name_matches_variant() {
        assert_eq!(Gpio::A0.name(), "A0");
        assert_eq!(Gpio::D13.name(), "D13");
        assert_eq!(Gpio::K15.name(), "K15");
        for pin in Gpio::iter() {
            assert_eq!(pin.name().parse::<Gpio>(), Ok(pin));
        }
    }

    #[test]
    fn accessors() {
        assert_eq!(Gpio::E10.port(), 'E');
        assert_eq!(Gpio::E10.bit(), 10);
        assert_eq!(Gpio::B5.index(), 21);
    }

    #[test]
    fn out_of_range_index() {
        assert_eq!(Gpio::try_from(176), Err(GpioError::OutOfRange(176)));
        assert_eq!(Gpio::try_from(255), Err(GpioError::OutOfRange(255)));
        assert_eq!(Gpio::try_from(0), Ok(Gpio::A0));
    }

    #[test]
    fn new_rejects_bad_port_or_bit() {
        assert_eq!(Gpio::new('L', 0), None);
        assert_eq!(Gpio::new('a', 0), None);
        assert_eq!(Gpio::new('@', 0), None);
        assert_eq!(Gpio::new('A', 16), None);
    }

    #[test]
    fn parse_accepted_spellings() {
        assert_eq!("D13".parse::<Gpio>(), Ok(Gpio::D13));
        assert_eq!("PD13".parse::<Gpio>(), Ok(Gpio::D13));
        assert_eq!("Gpio::D13".parse::<Gpio>(), Ok(Gpio::D13));
        assert_eq!("Gpio::PB8".parse::<Gpio>(), Ok(Gpio::B8));
        assert_eq!("K0".parse::<Gpio>(), Ok(Gpio::K0));
    }

    #[test]
    fn parse_rejects_garbage() {
        for text in [
            "", "D", "D16", "D013", "D05", "L1", "d13", "D+1", "D1x", "EFI_ADC_0", "P", "PP1",
            "Gpio::",
        ] {
            assert_eq!(text.parse::<Gpio>(), Err(GpioError::Parse), "{text:?}");
        }
    }

    #[test]
    fn display_is_bare_name() {
        let mut buf: heapless::String<8> = heapless::String::new();
        core::fmt::write(&mut buf, format_args!("{}", Gpio::H7)).unwrap();
        assert_eq!(buf.as_str(), "H7");
    }

    #[test]
    fn serializes_as_name() {
        let mut buf = [0u8; 16];
        let len = serde_json_core::to_slice(&Gpio::C6, &mut buf).unwrap();
        assert_eq!(&buf[..len], br#""C6""#);
    }
}
