//! Minimal TOML parser for `elevator.toml`
//!
//! Handles only the subset the configuration file uses. It does NOT
//! support the full TOML grammar.
//!
//! Supported:
//! - `[section]` and `[section.subsection]` headers
//! - `key = value` with integers, strings and single-line arrays
//! - Comments (`# ...`), whole-line and trailing
//!
//! Keys that are absent keep their default value. Pins are written as
//! `"gpio11"`, with `!` for active-low and `^` for a pull-up.

use super::{BoardPins, ElevatorConfig, PinConfig, Tone};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Pin array has the wrong number of entries
    WrongPinCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Tick,
    AckTone,
    ArrivalTone,
    Door,
    Splash,
    Pins,
}

/// Parse TOML text over the default configuration
pub fn parse_config(input: &str) -> Result<ElevatorConfig, ParseError> {
    let mut config = ElevatorConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(&mut config, section, key, value)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "tick" => Ok(Section::Tick),
        "tone.ack" => Ok(Section::AckTone),
        "tone.arrival" => Ok(Section::ArrivalTone),
        "door" => Ok(Section::Door),
        "splash" => Ok(Section::Splash),
        "pins" => Ok(Section::Pins),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    config: &mut ElevatorConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    let controller = &mut config.controller;
    match (section, key) {
        (Section::Tick, "fast_ms") => controller.fast_tick_ms = parse_int(value)?,
        (Section::Tick, "slow_ms") => controller.slow_tick_ms = parse_int(value)?,
        (Section::AckTone, key) => apply_tone(&mut controller.ack_tone, key, value)?,
        (Section::ArrivalTone, key) => apply_tone(&mut controller.arrival_tone, key, value)?,
        (Section::Door, "open_at_ms") => controller.door.open_at_ms = parse_int(value)?,
        (Section::Door, "closing_at_ms") => controller.door.closing_at_ms = parse_int(value)?,
        (Section::Door, "closed_at_ms") => controller.door.closed_at_ms = parse_int(value)?,
        (Section::Splash, "frame_ms") => controller.splash.frame_ms = parse_int(value)?,
        (Section::Splash, "closed_hold_ms") => {
            controller.splash.closed_hold_ms = parse_int(value)?
        }
        (Section::Splash, "open_hold_ms") => controller.splash.open_hold_ms = parse_int(value)?,
        (Section::Pins, key) => apply_pin(&mut config.pins, key, value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_tone(tone: &mut Tone, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "freq_hz" => tone.freq_hz = parse_int(value)?,
        "duration_ms" => tone.duration_ms = parse_int(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn apply_pin(pins: &mut BoardPins, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "buttons" => parse_pin_array(value, &mut pins.buttons),
        "destination_switches" => parse_pin_array(value, &mut pins.destination_switches),
        "rate_switch" => parse_pin(value).map(|pin| pins.rate_switch = pin),
        "door_leds" => parse_pin_array(value, &mut pins.door_leds),
        "segments" => parse_pin_array(value, &mut pins.segments),
        "digit_select" => parse_pin(value).map(|pin| pins.digit_select = pin),
        "matrix_cs" => parse_pin(value).map(|pin| pins.matrix_cs = pin),
        _ => Err(ParseError::UnknownKey),
    }
}

/// Drop a trailing comment unless the `#` is inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse an integer value, allowing `_` separators
fn parse_int<T: TryFrom<u64>>(value: &str) -> Result<T, ParseError> {
    let mut n: u64 = 0;
    let mut digits = 0;
    for c in value.chars() {
        match c {
            '_' => continue,
            '0'..='9' => {
                n = n
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(u64::from(c as u8 - b'0')))
                    .ok_or(ParseError::InvalidValue)?;
                digits += 1;
            }
            _ => return Err(ParseError::InvalidValue),
        }
    }
    if digits == 0 {
        return Err(ParseError::InvalidValue);
    }
    T::try_from(n).map_err(|_| ParseError::InvalidValue)
}

/// Parse a pin string like "gpio11", "!gpio12", "^gpio4"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let mut s = parse_string(value.trim());
    let mut pin = PinConfig::default();

    loop {
        if let Some(rest) = s.strip_prefix('!') {
            pin.inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pin.pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let number = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    pin.pin = parse_int(number).map_err(|_| ParseError::InvalidPin)?;
    Ok(pin)
}

/// Parse `["gpio1", "gpio2"]` into exactly `N` pins
fn parse_pin_array<const N: usize>(
    value: &str,
    out: &mut [PinConfig; N],
) -> Result<(), ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut pins = [PinConfig::default(); N];
    let mut count = 0;
    for item in inner.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let slot = pins.get_mut(count).ok_or(ParseError::WrongPinCount)?;
        *slot = parse_pin(item)?;
        count += 1;
    }
    if count != N {
        return Err(ParseError::WrongPinCount);
    }

    *out = pins;
    Ok(())
}
