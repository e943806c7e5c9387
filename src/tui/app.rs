//! Dashboard state.

use crate::chart::ChartData;
use crate::dataset::Table;
use crate::session::SessionLog;

/// The four panes of the dashboard. Tab cycles through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Chat,
    Data,
    Chart,
    Map,
}

impl View {
    pub fn next(self) -> Self {
        match self {
            Self::Chat => Self::Data,
            Self::Data => Self::Chart,
            Self::Chart => Self::Map,
            Self::Map => Self::Chat,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Data => "data",
            Self::Chart => "chart",
            Self::Map => "map",
        }
    }
}

#[derive(Debug)]
pub struct App {
    /// The fixed dataset, read-only for the session
    pub table: Table,
    /// Map overlay points as (latitude, longitude)
    pub geo: Vec<(f64, f64)>,
    /// Append-only interaction history
    pub log: SessionLog,
    pub view: View,
    pub input: String,
    /// Last rendered plot, if any
    pub chart: Option<ChartData>,
    pub status: String,
    /// Scroll offset from the top of the current pane
    pub scroll: usize,
    pub show_help: bool,
    pub model_label: String,
}

impl App {
    pub fn new(table: Table, geo: Vec<(f64, f64)>, model_label: String) -> Self {
        Self {
            table,
            geo,
            log: SessionLog::new(),
            view: View::Chat,
            input: String::new(),
            chart: None,
            status: "Ready | Tab switches view | F1 help".to_string(),
            scroll: 0,
            show_help: false,
            model_label,
        }
    }

    pub fn with_chart(mut self, chart: ChartData) -> Self {
        self.status = chart.summary();
        self.chart = Some(chart);
        self.view = View::Chart;
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input).trim().to_string()
    }

    pub fn cycle_view(&mut self) {
        self.view = self.view.next();
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
