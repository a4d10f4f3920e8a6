use roundel_editor::prelude::*;
use roundel_engine::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());
    log::info!("starting roundel studio; drag the handles, click the button to copy");

    Application::new()
        .title("Roundel")
        .size(640.0, 720.0)
        .config(EditorConfig::new())
        .run();
}
