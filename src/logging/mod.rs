use crate::cli::Args;
use crate::logging::quickwit::QuickwitLoggingLayerBuilder;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;
pub mod quickwit;

pub fn init(args: &Args) {
    let quickwit_logging_layer = args.quickwit_url.clone().map(|quickwit_url| {
        QuickwitLoggingLayerBuilder::new(quickwit_url)
            .marker_field("task")
            .map_marker_to_index("http_request", "http_requests")
            .map_marker_to_index("report_created", "reports_created")
            .map_marker_to_index("proximity_event", "proximity_events")
            .with_batch_size(100)
            .build()
    });
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(
            "radarpet_server=info"
                .parse()
                .expect("Default logging directive is malformed."),
        )
    });
    tracing_subscriber::registry()
        .with(quickwit_logging_layer)
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
