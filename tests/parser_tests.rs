use greenboard::command::{parse_request, ParseError, PlotKind};

fn columns() -> Vec<String> {
    ["Year", "Region", "TotalWaste", "Recycled"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn rejects_requests_without_a_plot_type() {
    let cols = columns();
    for input in [
        "berapa total sampah tahun 2020?",
        "tolong ringkas datanya",
        "plot TotalWaste dan Recycled",
    ] {
        assert_eq!(parse_request(input, &cols), Ok(None), "input: {input}");
    }
}

#[test]
fn extracts_type_and_columns_for_each_kind() {
    let cols = columns();
    for (word, kind) in [
        ("line", PlotKind::Line),
        ("bar", PlotKind::Bar),
        ("scatter", PlotKind::Scatter),
    ] {
        let input = format!("{} plot TotalWaste dan Recycled", word);
        let cmd = parse_request(&input, &cols).unwrap().unwrap();
        assert_eq!(cmd.kind, kind);
        assert_eq!(cmd.x_column, "TotalWaste");
        assert_eq!(cmd.y_column, "Recycled");
    }
}

#[test]
fn parses_the_canonical_example() {
    let cols = columns();
    let cmd = parse_request("buat line plot TotalWaste dan Recycled", &cols)
        .unwrap()
        .unwrap();
    assert_eq!(cmd.kind, PlotKind::Line);
    assert_eq!(cmd.x_column, "TotalWaste");
    assert_eq!(cmd.y_column, "Recycled");
}

#[test]
fn column_lookup_is_case_insensitive_and_canonical() {
    let cols = columns();
    let cmd = parse_request("bar plot totalwaste dan RECYCLED", &cols)
        .unwrap()
        .unwrap();
    assert_eq!(cmd.x_column, "TotalWaste");
    assert_eq!(cmd.y_column, "Recycled");
}

#[test]
fn missing_separator_is_reported() {
    let cols = columns();
    assert_eq!(
        parse_request("buat line plot TotalWaste Recycled", &cols),
        Err(ParseError::MissingSeparator)
    );
}

#[test]
fn separator_at_either_boundary_is_an_adjacency_error() {
    let cols = columns();
    // First token: nothing before the separator.
    assert_eq!(
        parse_request("dan line plot TotalWaste", &cols),
        Err(ParseError::SeparatorAtEdge)
    );
    // Last token: nothing after the separator.
    assert_eq!(
        parse_request("line plot TotalWaste dan", &cols),
        Err(ParseError::SeparatorAtEdge)
    );
}

#[test]
fn unknown_columns_are_rejected_by_name() {
    let cols = columns();
    assert_eq!(
        parse_request("line plot compost dan Recycled", &cols),
        Err(ParseError::UnknownColumn("compost".to_string()))
    );
}

#[test]
fn token_before_plot_takes_precedence_for_the_kind() {
    let cols = columns();
    let cmd = parse_request("scatter line plot TotalWaste dan Recycled", &cols)
        .unwrap()
        .unwrap();
    assert_eq!(cmd.kind, PlotKind::Line);
}

#[test]
fn errors_render_human_readable_reasons() {
    assert!(ParseError::MissingSeparator.to_string().contains("dan"));
    assert!(ParseError::UnknownColumn("foo".into())
        .to_string()
        .contains("foo"));
}
