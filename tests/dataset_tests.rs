use std::io::Write;

use greenboard::chart::ChartData;
use greenboard::command::{PlotCommand, PlotKind};
use greenboard::dataset::{self, ColumnError, Table, DEFAULT_LOCATION};
use tempfile::NamedTempFile;

fn sample_table() -> Table {
    Table::new(
        vec!["Year".into(), "Region".into(), "TotalWaste".into(), "Recycled".into()],
        vec![
            vec!["2020".into(), "Jakarta".into(), "6800".into(), "1510".into()],
            vec!["2021".into(), "Jakarta".into(), "7000".into(), "1680".into()],
            vec!["2022".into(), "Jakarta".into(), "7200".into(), "1850".into()],
        ],
    )
}

#[tokio::test]
async fn load_reads_header_and_pads_short_rows() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "Year,Region,TotalWaste\n2020,Jakarta,6800\n2021,Jakarta\n").unwrap();

    let table = Table::load(file.path()).await.unwrap();
    assert_eq!(table.headers(), ["Year", "Region", "TotalWaste"]);
    assert_eq!(table.row_count(), 2);
    // The short row is padded to the header width.
    assert_eq!(table.rows()[1], vec!["2021", "Jakarta", ""]);
}

#[tokio::test]
async fn load_fails_for_missing_files() {
    assert!(Table::load("no-such-dataset.csv").await.is_err());
}

#[test]
fn column_resolution_is_case_insensitive() {
    let table = sample_table();
    assert_eq!(table.resolve_column("totalwaste"), Some("TotalWaste"));
    assert_eq!(table.resolve_column("RECYCLED"), Some("Recycled"));
    assert_eq!(table.resolve_column("compost"), None);
}

#[test]
fn numeric_column_names_the_offending_cell() {
    let table = sample_table();
    assert_eq!(table.numeric_column("TotalWaste").unwrap(), vec![6800.0, 7000.0, 7200.0]);

    let err = table.numeric_column("Region").unwrap_err();
    assert_eq!(
        err,
        ColumnError::NotNumeric {
            column: "Region".into(),
            value: "Jakarta".into(),
            row: 1,
        }
    );

    assert_eq!(
        table.numeric_column("compost").unwrap_err(),
        ColumnError::Unknown("compost".into())
    );
}

#[tokio::test]
async fn excerpt_serializes_header_plus_limited_rows() {
    let table = sample_table();
    let excerpt = table.excerpt(2).await.unwrap();

    let lines: Vec<&str> = excerpt.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Year,Region,TotalWaste,Recycled");
    assert_eq!(lines[1], "2020,Jakarta,6800,1510");
}

#[test]
fn geo_points_fall_back_to_the_constant_location() {
    // No latitude/longitude columns at all.
    let no_geo = sample_table();
    assert_eq!(dataset::geo_points(&no_geo), vec![DEFAULT_LOCATION]);

    // Unparsable coordinates fall back row by row.
    let geo = Table::new(
        vec!["Site".into(), "Latitude".into(), "Longitude".into()],
        vec![
            vec!["Bantargebang".into(), "-6.3371".into(), "106.9933".into()],
            vec!["Unknown".into(), "".into(), "".into()],
        ],
    );
    let points = dataset::geo_points(&geo);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0], (-6.3371, 106.9933));
    assert_eq!(points[1], DEFAULT_LOCATION);
}

#[test]
fn line_chart_pairs_points_and_orders_bounds() {
    let table = sample_table();
    let cmd = PlotCommand {
        kind: PlotKind::Line,
        x_column: "TotalWaste".into(),
        y_column: "Recycled".into(),
    };
    let chart = ChartData::from_table(&table, cmd).unwrap();

    assert_eq!(chart.points, vec![(6800.0, 1510.0), (7000.0, 1680.0), (7200.0, 1850.0)]);
    assert!(chart.x_bounds[0] < 6800.0 && chart.x_bounds[1] > 7200.0);
    assert!(chart.y_bounds[0] < 1510.0 && chart.y_bounds[1] > 1850.0);
    assert!(chart.bars.is_empty());
}

#[test]
fn bar_chart_uses_labels_and_clamps_negative_heights() {
    let table = Table::new(
        vec!["Region".into(), "Delta".into()],
        vec![
            vec!["Jakarta".into(), "120".into()],
            vec!["Bandung".into(), "-30".into()],
        ],
    );
    let cmd = PlotCommand {
        kind: PlotKind::Bar,
        x_column: "Region".into(),
        y_column: "Delta".into(),
    };
    let chart = ChartData::from_table(&table, cmd).unwrap();

    assert_eq!(chart.bars, vec![("Jakarta".to_string(), 120), ("Bandung".to_string(), 0)]);
    assert!(chart.points.is_empty());
}

#[test]
fn chart_from_non_numeric_column_is_a_column_error() {
    let table = sample_table();
    let cmd = PlotCommand {
        kind: PlotKind::Scatter,
        x_column: "Region".into(),
        y_column: "Recycled".into(),
    };
    assert!(matches!(
        ChartData::from_table(&table, cmd),
        Err(ColumnError::NotNumeric { .. })
    ));
}
