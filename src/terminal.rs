use std::io;

use crossterm::cursor::Show;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;

/// Runs `restore` when dropped, so early returns still undo setup
pub struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Raw mode + alternate screen. The returned guard puts the terminal back.
pub fn enter() -> io::Result<RestoreGuard<fn()>> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore as fn());
    io::stdout().execute(EnterAlternateScreen)?;
    Ok(guard)
}

/// Best-effort terminal reset; errors are ignored since this also runs
/// while panicking.
pub fn restore() {
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
    let _ = io::stdout().execute(Show);
}

/// Resets the terminal before the default panic message is printed
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn failing_setup(restored: &Cell<u32>) -> io::Result<()> {
        let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
        Err::<(), _>(io::Error::other("no tty"))?;
        Ok(())
    }

    #[test]
    fn guard_restores_on_early_error() {
        let restored = Cell::new(0);
        assert!(failing_setup(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn guard_restores_once_on_normal_exit() {
        let restored = Cell::new(0);
        {
            let _guard = RestoreGuard::new(|| restored.set(restored.get() + 1));
            assert_eq!(restored.get(), 0);
        }
        assert_eq!(restored.get(), 1);
    }
}
