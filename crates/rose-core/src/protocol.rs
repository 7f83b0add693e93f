//! Decoding of sensor lines.
//!
//! Two forms are accepted, one per line:
//!
//! - `"<int>"`: potentiometer reading only.
//! - `"pot:<int>,light:<int>,button:<0|1>"`: all three readings.
//!
//! Anything else is rejected as a whole; partial samples are never produced.

use smallvec::SmallVec;
use thiserror::Error;

/// One decoded input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawSample {
    pub potentiometer: i32,
    pub light: Option<i32>,
    pub button_down: Option<bool>,
}

impl RawSample {
    pub fn potentiometer(value: i32) -> Self {
        Self {
            potentiometer: value,
            light: None,
            button_down: None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("empty line")]
    Empty,
    #[error("expected 3 fields, got {0}")]
    FieldCount(usize),
    #[error("field `{0}` has no `:` separator")]
    MissingSeparator(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("key `{0}` given more than once")]
    DuplicateKey(&'static str),
    #[error("`{0}` is not an integer")]
    NotANumber(String),
    #[error("button value must be 0 or 1, got {0}")]
    InvalidButton(i32),
}

fn parse_int(token: &str) -> Result<i32, ProtocolError> {
    token
        .trim()
        .parse::<i32>()
        .map_err(|_| ProtocolError::NotANumber(token.trim().to_string()))
}

fn set_once<T>(slot: &mut Option<T>, key: &'static str, value: T) -> Result<(), ProtocolError> {
    if slot.is_some() {
        return Err(ProtocolError::DuplicateKey(key));
    }
    *slot = Some(value);
    Ok(())
}

pub fn decode_line(line: &str) -> Result<RawSample, ProtocolError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ProtocolError::Empty);
    }
    if !line.contains(',') && !line.contains(':') {
        return parse_int(line).map(RawSample::potentiometer);
    }

    let fields: SmallVec<[&str; 3]> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(ProtocolError::FieldCount(fields.len()));
    }

    let mut pot = None;
    let mut light = None;
    let mut button = None;
    for field in fields {
        let (key, value) = field
            .split_once(':')
            .ok_or_else(|| ProtocolError::MissingSeparator(field.trim().to_string()))?;
        let value = parse_int(value)?;
        match key.trim() {
            "pot" => set_once(&mut pot, "pot", value)?,
            "light" => set_once(&mut light, "light", value)?,
            "button" => {
                let down = match value {
                    0 => false,
                    1 => true,
                    other => return Err(ProtocolError::InvalidButton(other)),
                };
                set_once(&mut button, "button", down)?
            }
            other => return Err(ProtocolError::UnknownKey(other.to_string())),
        }
    }

    // three distinct known keys were seen, so all are present
    match (pot, light, button) {
        (Some(potentiometer), Some(light), Some(button_down)) => Ok(RawSample {
            potentiometer,
            light: Some(light),
            button_down: Some(button_down),
        }),
        _ => Err(ProtocolError::FieldCount(3)),
    }
}
