mod cli;

use anyhow::{bail, Context, Result};
use greenboard::chart::ChartData;
use greenboard::config::{Config, ModelChoice};
use greenboard::dataset::{self, Table};
use greenboard::dispatch::Dispatcher;
use greenboard::handlers::{ask::AskHandler, dashboard::DashboardHandler, plot};
use greenboard::llm::LlmClient;
use greenboard::tui::{App, View};
use greenboard::{auth, command, printer};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let cfg = Config::load();

    // Resolve model and temperature up front; bad values stop the run here.
    let model: ModelChoice = args
        .model
        .clone()
        .or_else(|| cfg.get("DEFAULT_MODEL"))
        .unwrap_or_else(|| "llama-3.1-70b-versatile".to_string())
        .parse()?;
    let temperature = match args.temperature {
        Some(t) => t,
        None => cfg
            .get("DEFAULT_TEMPERATURE")
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(0.7),
    };

    if args.plot && args.prompt.is_none() {
        bail!("--plot requires a request string");
    }

    // Nothing below runs without the shared secret.
    auth::verify(&cfg, args.password.as_deref())?;

    let data_path = args
        .data
        .clone()
        .or_else(|| cfg.get("DATA_PATH"))
        .unwrap_or_else(|| "datasampah1.csv".to_string());
    let table = Table::load(&data_path)
        .await
        .with_context(|| format!("failed to load dataset '{}'", data_path))?;

    if args.show_data {
        printer::print_table(&table);
        return Ok(());
    }

    let geo_path = args
        .geo_data
        .clone()
        .or_else(|| cfg.get("GEO_DATA_PATH"))
        .unwrap_or_else(|| "datalokasi.csv".to_string());
    let geo = if std::path::Path::new(&geo_path).exists() {
        let geo_table = Table::load(&geo_path)
            .await
            .with_context(|| format!("failed to load geo dataset '{}'", geo_path))?;
        dataset::geo_points(&geo_table)
    } else {
        vec![dataset::DEFAULT_LOCATION]
    };

    let client = LlmClient::from_config(&cfg)?;
    let dispatcher = Dispatcher::new(client, model, temperature)?;

    let excerpt = if args.no_excerpt {
        None
    } else {
        let rows = cfg.get_usize("EXCERPT_ROWS").unwrap_or(20);
        Some(table.excerpt(rows).await?)
    };

    let markdown = if args.no_md {
        false
    } else if args.md {
        true
    } else {
        cfg.get_bool("PRETTIFY_MARKDOWN")
    };

    let app = App::new(table, geo, model.label().to_string());

    match args.prompt.as_deref() {
        Some(request) if args.plot => {
            let chart = plot::build(request, &app.table)?;
            DashboardHandler::run(app.with_chart(chart), dispatcher, excerpt).await
        }
        Some(input) => match command::parse_request(input, app.table.headers()) {
            Ok(Some(cmd)) => {
                let chart = ChartData::from_table(&app.table, cmd)?;
                DashboardHandler::run(app.with_chart(chart), dispatcher, excerpt).await
            }
            Ok(None) => AskHandler::run(input, &dispatcher, excerpt.as_deref(), markdown).await,
            Err(err) => Err(err.into()),
        },
        None if args.map => DashboardHandler::run(app.with_view(View::Map), dispatcher, excerpt).await,
        None => DashboardHandler::run(app, dispatcher, excerpt).await,
    }
}
