//! CSV ingestion for network data
//!
//! Two files describe a network: a stations file with a `name` column and
//! a connections file with `origin`, `destination`, `mode`, `price`, and
//! `minutes` columns. Extra columns are ignored. Rows are validated as
//! they load so errors carry the file and line they came from.

use crate::error::{Result, WaypathError};
use crate::network::{Connection, Mode, Network};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// Load a network from a stations file and a connections file.
///
/// Every connection row references stations by name; rows naming a station
/// absent from the stations file fail the load.
pub fn load_network(stations_path: &Path, connections_path: &Path) -> Result<Network> {
    let mut network = Network::new();
    load_stations(&mut network, stations_path)?;
    load_connections(&mut network, connections_path)?;
    tracing::debug!(
        stations = network.len(),
        connections = network.connection_count(),
        "network_loaded"
    );
    Ok(network)
}

fn load_stations(network: &mut Network, path: &Path) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers()?.clone();
    let name_idx = column_index(&headers, path, "name")?;

    for result in reader.records() {
        let record = result?;
        let name = field(&record, name_idx, path, "name")?;
        network.add_station(name);
    }

    Ok(())
}

fn load_connections(network: &mut Network, path: &Path) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers()?.clone();
    let origin_idx = column_index(&headers, path, "origin")?;
    let destination_idx = column_index(&headers, path, "destination")?;
    let mode_idx = column_index(&headers, path, "mode")?;
    let price_idx = column_index(&headers, path, "price")?;
    let minutes_idx = column_index(&headers, path, "minutes")?;

    for result in reader.records() {
        let record = result?;
        let origin = field(&record, origin_idx, path, "origin")?;
        let destination = field(&record, destination_idx, path, "destination")?;
        let mode = Mode::from_str(field(&record, mode_idx, path, "mode")?)?;
        let price = parse_amount(&record, price_idx, path, "price")?;
        let minutes = parse_amount(&record, minutes_idx, path, "minutes")?;

        network.add_connection(Connection {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode,
            price,
            minutes,
        })?;
    }

    Ok(())
}

fn column_index(headers: &csv::StringRecord, path: &Path, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| WaypathError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

fn field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    path: &Path,
    column: &str,
) -> Result<&'r str> {
    match record.get(index) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim()),
        _ => Err(WaypathError::InvalidRecord {
            path: path.to_path_buf(),
            line: record_line(record),
            reason: format!("missing {} field", column),
        }),
    }
}

fn parse_amount(record: &csv::StringRecord, index: usize, path: &Path, column: &str) -> Result<f64> {
    let raw = field(record, index, path, column)?;
    let value: f64 = raw.parse().map_err(|_| WaypathError::InvalidRecord {
        path: path.to_path_buf(),
        line: record_line(record),
        reason: format!("invalid {}: {}", column, raw),
    })?;
    // Finite, non-negative costs are what the finders are specified for.
    if !value.is_finite() || value < 0.0 {
        return Err(WaypathError::InvalidRecord {
            path: path.to_path_buf(),
            line: record_line(record),
            reason: format!("{} must be a non-negative number, got {}", column, raw),
        });
    }
    Ok(value)
}

fn record_line(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_network() {
        let dir = tempdir().unwrap();
        let stations = write_fixture(
            dir.path(),
            "stations.csv",
            "name\nProvidence\nBoston\nNew York City\n",
        );
        let connections = write_fixture(
            dir.path(),
            "connections.csv",
            "origin,destination,mode,price,minutes\n\
             Providence,Boston,train,20,60\n\
             Boston,New York City,plane,150,45\n",
        );

        let network = load_network(&stations, &connections).unwrap();
        assert_eq!(network.len(), 3);
        assert_eq!(network.connection_count(), 2);

        let providence = network.station("Providence").unwrap();
        assert_eq!(providence.outgoing.len(), 1);
        assert_eq!(providence.outgoing[0].destination, "Boston");
        assert_eq!(providence.outgoing[0].mode, Mode::Train);
        assert_eq!(providence.outgoing[0].price, 20.0);
        assert_eq!(providence.outgoing[0].minutes, 60.0);
    }

    #[test]
    fn test_quoted_names_and_extra_columns() {
        let dir = tempdir().unwrap();
        let stations = write_fixture(
            dir.path(),
            "stations.csv",
            "name,country\n\"Washington, D.C.\",USA\nBoston,USA\n",
        );
        let connections = write_fixture(
            dir.path(),
            "connections.csv",
            "origin,destination,mode,price,minutes,operator\n\
             \"Washington, D.C.\",Boston,bus,35,420,Acme\n",
        );

        let network = load_network(&stations, &connections).unwrap();
        assert!(network.contains("Washington, D.C."));
        assert_eq!(
            network.station("Washington, D.C.").unwrap().outgoing[0].destination,
            "Boston"
        );
    }

    #[test]
    fn test_connection_to_unknown_station() {
        let dir = tempdir().unwrap();
        let stations = write_fixture(dir.path(), "stations.csv", "name\nProvidence\n");
        let connections = write_fixture(
            dir.path(),
            "connections.csv",
            "origin,destination,mode,price,minutes\nProvidence,Atlantis,bus,10,30\n",
        );

        let err = load_network(&stations, &connections).unwrap_err();
        assert!(matches!(
            err,
            WaypathError::StationNotFound { ref name } if name == "Atlantis"
        ));
    }

    #[test]
    fn test_unknown_mode() {
        let dir = tempdir().unwrap();
        let stations = write_fixture(dir.path(), "stations.csv", "name\nA\nB\n");
        let connections = write_fixture(
            dir.path(),
            "connections.csv",
            "origin,destination,mode,price,minutes\nA,B,ferry,10,30\n",
        );

        let err = load_network(&stations, &connections).unwrap_err();
        assert!(matches!(err, WaypathError::UnknownMode { .. }));
    }

    #[test]
    fn test_negative_price_reports_line() {
        let dir = tempdir().unwrap();
        let stations = write_fixture(dir.path(), "stations.csv", "name\nA\nB\n");
        let connections = write_fixture(
            dir.path(),
            "connections.csv",
            "origin,destination,mode,price,minutes\nA,B,bus,10,30\nB,A,bus,-5,30\n",
        );

        let err = load_network(&stations, &connections).unwrap_err();
        match err {
            WaypathError::InvalidRecord { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("price"));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_column() {
        let dir = tempdir().unwrap();
        let stations = write_fixture(dir.path(), "stations.csv", "name\nA\nB\n");
        let connections = write_fixture(
            dir.path(),
            "connections.csv",
            "origin,destination,mode,price\nA,B,bus,10\n",
        );

        let err = load_network(&stations, &connections).unwrap_err();
        assert!(matches!(
            err,
            WaypathError::MissingColumn { ref column, .. } if column == "minutes"
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let stations = write_fixture(dir.path(), "stations.csv", "name\nA\n");
        let err = load_network(&stations, &dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, WaypathError::Io(_)));
    }

    #[test]
    fn test_header_only_files() {
        let dir = tempdir().unwrap();
        let stations = write_fixture(dir.path(), "stations.csv", "name\n");
        let connections = write_fixture(
            dir.path(),
            "connections.csv",
            "origin,destination,mode,price,minutes\n",
        );

        let network = load_network(&stations, &connections).unwrap();
        assert!(network.is_empty());
        assert_eq!(network.connection_count(), 0);
    }
}
