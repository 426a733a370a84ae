use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Puts the terminal back into cooked mode on drop or panic, whichever
/// comes first. Restoration runs at most once.
pub struct TerminalGuard {
    armed: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn arm() -> Self {
        Self {
            armed: Arc::new(AtomicBool::new(true)),
        }
    }

    fn install_panic_hook(&self) {
        let armed = Arc::clone(&self.armed);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if armed.swap(false, Ordering::SeqCst) {
                restore_terminal();
            }
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed.swap(false, Ordering::SeqCst) {
            restore_terminal();
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::arm();
    guard.install_panic_hook();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    // Clicks inside the reader bring the controls back
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
