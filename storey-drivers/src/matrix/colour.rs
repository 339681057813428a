//! Matrix colours

use storey_core::Floor;

/// Pixel colour: red intensity in the low nibble, green in the high one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Colour(pub u8);

impl Colour {
    pub const EMPTY: Colour = Colour(0x00);
    pub const RED: Colour = Colour::rg(0x0F, 0x00);
    pub const GREEN: Colour = Colour::rg(0x00, 0x0F);
    pub const YELLOW: Colour = Colour::rg(0x0F, 0x0F);
    pub const ORANGE: Colour = Colour::rg(0x0F, 0x03);
    pub const LIGHT_GREEN: Colour = Colour::rg(0x04, 0x0F);
    pub const LIGHT_RED: Colour = Colour::rg(0x04, 0x00);

    /// Floor marker rows
    pub const FLOOR: Colour = Colour::YELLOW;
    /// Cabin sprite
    pub const CABIN: Colour = Colour::ORANGE;
    /// Splash door panels
    pub const DOOR: Colour = Colour::LIGHT_RED;

    /// Colour from 4-bit red and green intensities
    pub const fn rg(red: u8, green: u8) -> Self {
        Colour((red & 0x0F) | ((green & 0x0F) << 4))
    }

    pub const fn red(self) -> u8 {
        self.0 & 0x0F
    }

    pub const fn green(self) -> u8 {
        self.0 >> 4
    }

    /// Waiting traveller, coloured by where they want to go
    pub fn traveller(destination: Floor) -> Self {
        match destination {
            Floor::Ground => Colour::RED,
            Floor::First => Colour::GREEN,
            Floor::Second => Colour::LIGHT_GREEN,
            Floor::Third => Colour::LIGHT_RED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibbles() {
        assert_eq!(Colour::RED.0, 0x0F);
        assert_eq!(Colour::GREEN.0, 0xF0);
        assert_eq!(Colour::ORANGE.red(), 0x0F);
        assert_eq!(Colour::ORANGE.green(), 0x03);
    }

    #[test]
    fn test_traveller_colours_distinct() {
        for a in Floor::ALL {
            assert_ne!(Colour::traveller(a), Colour::EMPTY);
            assert_ne!(Colour::traveller(a), Colour::FLOOR);
            assert_ne!(Colour::traveller(a), Colour::CABIN);
            for b in Floor::ALL {
                if a != b {
                    assert_ne!(Colour::traveller(a), Colour::traveller(b));
                }
            }
        }
    }
}
