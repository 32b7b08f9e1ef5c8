use vitals_voice::app::App;
use vitals_voice::engine::logging::init_logging;
use vitals_voice::engine::{Config, VoiceError};
use vitals_voice::ui::TuiManager;

fn main() -> Result<(), VoiceError> {
    let (config, rejected) = Config::from_env();
    init_logging(&config.logging)?;

    let mut app = App::with_config(&config);
    for item in &rejected {
        tracing::warn!(key = item.key, reason = %item.reason, "environment override ignored");
        app.notice(item.to_string());
    }

    // The TUI restores the terminal when dropped, before the summary prints
    {
        let mut tui = TuiManager::new(&config.ui)?;
        tui.run_event_loop(&mut app)?;
    }

    println!("{}", app.form().summary());

    Ok(())
}
