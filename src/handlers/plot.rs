//! Forced plot handler: the request must parse into a chart.

use anyhow::{bail, Result};

use crate::chart::ChartData;
use crate::command;
use crate::dataset::Table;

pub fn build(request: &str, table: &Table) -> Result<ChartData> {
    match command::parse_request(request, table.headers())? {
        Some(cmd) => Ok(ChartData::from_table(table, cmd)?),
        None => bail!(
            "not a plot request: name a plot type (line, bar or scatter), e.g. \"buat line plot TotalWaste dan Recycled\""
        ),
    }
}
