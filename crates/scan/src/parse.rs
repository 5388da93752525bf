//! Parser for recorded scanner dump files.
//!
//! Dumps are serial-port captures of a scanning firmware. Each scan is a run
//! of record lines of the form `"<n>: <name> (<rssi>)"`, optionally followed
//! by an encryption marker; any line without a `:` (blank lines, `scan done`,
//! `13 networks found`) terminates the current record. Whole records that
//! duplicate an earlier record in the same dump are capture artifacts and
//! are dropped.

use tracing::debug;

use crate::error::ScanError;
use crate::observation::Observation;

/// Parses one record line into (source name, rssi).
///
/// Returns `None` when the line does not follow the
/// `"<n>: <name> (<rssi>)"` shape.
fn parse_record_line(line: &str) -> Option<(String, f64)> {
    let (index, rest) = line.split_once(':')?;
    index.trim().parse::<usize>().ok()?;

    // The RSSI sits in the last parenthesized group, so source names
    // containing parentheses still parse.
    let lparen = rest.rfind('(')?;
    let rparen = rest[lparen..].find(')')? + lparen;
    let rssi: f64 = rest[lparen + 1..rparen].trim().parse().ok()?;

    let name = rest[..lparen].trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), rssi))
}

/// Parses a whole dump into its observations.
///
/// Record lines accumulate into the current observation; a non-record line
/// closes it. Duplicate observations are dropped. A line that contains `:`
/// but does not parse as a record is an error carrying its line number.
pub fn parse_dump(text: &str) -> Result<Vec<Observation>, ScanError> {
    let mut observations: Vec<Observation> = Vec::new();
    let mut current: Option<Observation> = None;
    let mut n_duplicates = 0usize;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim_end();
        if line.contains(':') {
            let (name, rssi) =
                parse_record_line(line).ok_or_else(|| ScanError::MalformedLine {
                    line: i + 1,
                    text: line.to_string(),
                })?;
            current.get_or_insert_with(Observation::new).insert(name, rssi);
        } else if let Some(obs) = current.take() {
            push_unique(&mut observations, obs, &mut n_duplicates);
        }
    }
    if let Some(obs) = current.take() {
        push_unique(&mut observations, obs, &mut n_duplicates);
    }

    if n_duplicates > 0 {
        debug!(n_duplicates, "dropped duplicate scan records");
    }
    Ok(observations)
}

fn push_unique(observations: &mut Vec<Observation>, obs: Observation, n_duplicates: &mut usize) {
    if observations.contains(&obs) {
        *n_duplicates += 1;
    } else {
        observations.push(obs);
    }
}
