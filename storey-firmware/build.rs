//! Build script for storey-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates elevator.toml at compile time

use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// GPIOs routed to the terminal UART, buzzer PWM and matrix SPI
const RESERVED_GPIO: [i64; 5] = [0, 1, 15, 18, 19];

/// Highest RP2040 GPIO
const MAX_GPIO: i64 = 29;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate elevator.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=elevator.toml");

    let config_path = Path::new("elevator.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: elevator.toml not found!                                 ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds an elevator.toml configuration file.        ║\n\
            ║  Please create one in the storey-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read elevator.toml                             ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in elevator.toml                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_layout(&config, &mut errors);
    report("Unknown sections or keys", &errors);

    validate_timing(&config, &mut errors);
    report("Invalid timing configuration", &errors);

    validate_pins(&config, &mut errors);
    report("Invalid pin configuration", &errors);

    println!("cargo:warning=elevator.toml validated successfully");
}

/// Panic with a boxed list of errors, if any
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        format!("{} in elevator.toml", title),
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Section name and the keys it accepts
fn known_sections() -> BTreeMap<&'static str, &'static [&'static str]> {
    let mut sections: BTreeMap<&'static str, &'static [&'static str]> = BTreeMap::new();
    sections.insert("tick", &["fast_ms", "slow_ms"]);
    sections.insert("tone.ack", &["freq_hz", "duration_ms"]);
    sections.insert("tone.arrival", &["freq_hz", "duration_ms"]);
    sections.insert("door", &["open_at_ms", "closing_at_ms", "closed_at_ms"]);
    sections.insert("splash", &["frame_ms", "closed_hold_ms", "open_hold_ms"]);
    sections.insert(
        "pins",
        &[
            "buttons",
            "destination_switches",
            "rate_switch",
            "door_leds",
            "segments",
            "digit_select",
            "matrix_cs",
        ],
    );
    sections
}

/// Look up a dotted section such as "tone.ack"
fn section<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::value::Table> {
    name.split('.')
        .try_fold(config, |value, part| value.get(part))
        .and_then(|value| value.as_table())
}

/// Reject sections and keys the firmware parser does not know
fn validate_layout(config: &toml::Value, errors: &mut Vec<String>) {
    let sections = known_sections();
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        if name == "tone" {
            match value.as_table() {
                Some(tones) => {
                    for tone in tones.keys() {
                        if !sections.contains_key(format!("tone.{}", tone).as_str()) {
                            errors.push(format!("unknown section [tone.{}]", tone));
                        }
                    }
                }
                None => errors.push("'tone' must be a table".to_string()),
            }
        } else if !sections.contains_key(name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("'{}' must be a table", name));
        }
    }

    for (name, keys) in &sections {
        if let Some(table) = section(config, name) {
            for key in table.keys() {
                if !keys.contains(&key.as_str()) {
                    errors.push(format!("[{}] unknown key '{}'", name, key));
                }
            }
        }
    }
}

/// Read an optional integer, checking its range
fn int_in(
    config: &toml::Value,
    section_name: &str,
    key: &str,
    max: i64,
    errors: &mut Vec<String>,
) -> Option<i64> {
    let value = section(config, section_name)?.get(key)?;
    match value.as_integer() {
        Some(n) if (0..=max).contains(&n) => Some(n),
        Some(_) => {
            errors.push(format!("[{}] {} must be 0-{}", section_name, key, max));
            None
        }
        None => {
            errors.push(format!("[{}] {} must be an integer", section_name, key));
            None
        }
    }
}

fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) {
    let u32_max = i64::from(u32::MAX);
    let u16_max = i64::from(u16::MAX);

    // Defaults mirror ControllerConfig::default()
    let fast = int_in(config, "tick", "fast_ms", u32_max, errors).unwrap_or(100);
    let slow = int_in(config, "tick", "slow_ms", u32_max, errors).unwrap_or(200);
    if fast == 0 || slow == 0 {
        errors.push("[tick] intervals must be non-zero".to_string());
    }
    if fast > slow {
        errors.push("[tick] fast_ms must not exceed slow_ms".to_string());
    }

    for tone in ["tone.ack", "tone.arrival"] {
        for key in ["freq_hz", "duration_ms"] {
            if int_in(config, tone, key, u16_max, errors) == Some(0) {
                errors.push(format!("[{}] {} must be non-zero", tone, key));
            }
        }
    }

    let open = int_in(config, "door", "open_at_ms", u32_max, errors).unwrap_or(300);
    let closing = int_in(config, "door", "closing_at_ms", u32_max, errors).unwrap_or(1300);
    let closed = int_in(config, "door", "closed_at_ms", u32_max, errors).unwrap_or(1600);
    if !(open < closing && closing < closed) {
        errors.push("[door] boundaries must strictly increase".to_string());
    }

    if int_in(config, "splash", "frame_ms", u32_max, errors) == Some(0) {
        errors.push("[splash] frame_ms must be non-zero".to_string());
    }
    int_in(config, "splash", "closed_hold_ms", u32_max, errors);
    int_in(config, "splash", "open_hold_ms", u32_max, errors);
}

/// Parse "gpioN" with optional "!" and "^" prefixes
fn parse_pin(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(['!', '^']);
    let number: i64 = s.strip_prefix("gpio")?.parse().ok()?;
    Some(number)
}

fn validate_pins(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(pins) = section(config, "pins") else {
        return;
    };

    let expected: [(&str, usize); 7] = [
        ("buttons", 4),
        ("destination_switches", 2),
        ("rate_switch", 1),
        ("door_leds", 4),
        ("segments", 8),
        ("digit_select", 1),
        ("matrix_cs", 1),
    ];

    let mut used: BTreeMap<i64, String> = BTreeMap::new();

    for (key, count) in expected {
        let Some(value) = pins.get(key) else {
            continue;
        };

        let names: Vec<&toml::Value> = match value {
            toml::Value::Array(items) if count > 1 => items.iter().collect(),
            toml::Value::String(_) if count == 1 => vec![value],
            _ => {
                errors.push(format!("[pins] {} must be {}", key, shape(count)));
                continue;
            }
        };
        if names.len() != count {
            errors.push(format!("[pins] {} needs exactly {} pins", key, count));
            continue;
        }

        for name in names {
            let Some(pin) = name.as_str().and_then(parse_pin) else {
                errors.push(format!("[pins] {} has an invalid pin {}", key, name));
                continue;
            };
            if pin > MAX_GPIO {
                errors.push(format!("[pins] {}: gpio{} out of range", key, pin));
            } else if RESERVED_GPIO.contains(&pin) {
                errors.push(format!("[pins] {}: gpio{} is fixed-function", key, pin));
            } else if let Some(other) = used.insert(pin, key.to_string()) {
                errors.push(format!("[pins] gpio{} used by {} and {}", pin, other, key));
            }
        }
    }
}

fn shape(count: usize) -> String {
    if count == 1 {
        "a pin string".to_string()
    } else {
        format!("an array of {} pin strings", count)
    }
}
