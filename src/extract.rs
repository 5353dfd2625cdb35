//! Flattening of the nested room -> frequency -> chores list into ordered records.

use crate::chore::{ChoreRecord, Frequency};
use crate::error::{ConfigError, ConfigResult};
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Read and flatten the chore list at `path`.
pub fn load_chore_list<P: AsRef<Path>>(path: P) -> ConfigResult<Vec<ChoreRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let records = parse_chore_list(&content)?;
    info!(
        "loaded {} chores from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

pub fn parse_chore_list(content: &str) -> ConfigResult<Vec<ChoreRecord>> {
    let root: Value = serde_yaml::from_str(content)?;
    extract_records(&root)
}

/// Walk rooms, then frequencies within a room, then chores within a frequency, keeping the
/// declared order at every level.
pub fn extract_records(root: &Value) -> ConfigResult<Vec<ChoreRecord>> {
    let rooms = root.as_mapping().ok_or_else(|| {
        ConfigError::Schema(format!(
            "expected a mapping of rooms at the top level, found {}",
            kind_of(root)
        ))
    })?;

    let mut records = Vec::new();
    for (room_key, frequencies) in rooms {
        let room = scalar_text(room_key)
            .ok_or_else(|| ConfigError::Schema("room names must be scalars".into()))?;
        let frequencies = frequencies.as_mapping().ok_or_else(|| {
            ConfigError::Schema(format!(
                "room '{room}' must map frequencies to chore lists, found {}",
                kind_of(frequencies)
            ))
        })?;

        for (freq_key, chores) in frequencies {
            let tag = scalar_text(freq_key).ok_or_else(|| {
                ConfigError::Schema(format!("room '{room}' has a non-scalar frequency name"))
            })?;
            let chores = chores.as_sequence().ok_or_else(|| {
                ConfigError::Schema(format!(
                    "'{room}' -> '{tag}' must be a list of chores, found {}",
                    kind_of(chores)
                ))
            })?;

            let frequency = Frequency::parse(&tag);
            if !frequency.is_recognized() {
                warn!("room '{room}' uses unknown frequency '{tag}', styling it as Daily");
            }

            for chore in chores {
                let chore = scalar_text(chore).ok_or_else(|| {
                    ConfigError::Schema(format!(
                        "'{room}' -> '{tag}' contains a {} instead of chore text",
                        kind_of(chore)
                    ))
                })?;
                records.push(ChoreRecord::new(room.clone(), chore, frequency.clone()));
            }
        }
    }
    Ok(records)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
