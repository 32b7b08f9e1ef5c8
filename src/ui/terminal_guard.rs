use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode + alternate screen for as long as the guard lives
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        io::stdout().execute(terminal::EnterAlternateScreen)?;

        set_panic_hook();

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
            tracing::error!(%panic_info, "panic");
            default_hook(panic_info);
        }));
    });
}
