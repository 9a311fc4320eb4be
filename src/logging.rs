use std::str::FromStr;
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{
    fmt::{format::FmtSpan, Layer},
    prelude::*,
};

/// Installs the global subscriber. Shared by the relay server and the
/// dashboard binary; `json` switches the fmt layer to structured output.
pub fn init(log_level: &str, json: bool) {
    let log_level_filter =
        LevelFilter::from_level(Level::from_str(log_level).unwrap());

    let default_fmt_layer = Layer::default();
    let fmt = match json {
        true => default_fmt_layer
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(log_level_filter)
            .boxed(),
        false => default_fmt_layer
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(log_level_filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(fmt).init();
}
