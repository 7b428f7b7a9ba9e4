use darkify_pro::DarkifyApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    // Structured logging; RUST_LOG overrides the default level.
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting Darkify Pro");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 860.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Darkify Pro",
        options,
        Box::new(|cc| {
            darkify_pro::init_egui(&cc.egui_ctx);
            Ok(Box::<DarkifyApp>::default())
        }),
    )
    .map_err(|err| anyhow::anyhow!(err.to_string()))
}
