use pengu_engine::core::{App, AppControl, FrameCtx};
use pengu_engine::input::{Event, Key};

use crate::cycle::FrameState;

/// Clears the window to a slowly rotating hue every frame.
///
/// Escape quits.
#[derive(Debug, Default)]
pub struct ColorCycle {
    frames: u64,
}

impl App for ColorCycle {
    fn on_init(&mut self) {
        log::info!("color cycle started");
    }

    fn on_event(&mut self, event: &Event) -> AppControl {
        if event.is_key_press(Key::Escape) {
            log::info!("escape pressed, quitting");
            return AppControl::Stop;
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let state = FrameState::at(ctx.time.elapsed);
        ctx.clear_and_present(state.color);
        self.frames += 1;
        AppControl::Continue
    }

    fn on_cleanup(&mut self) {
        log::info!("color cycle stopped after {} frames", self.frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::cycle_color;
    use pengu_engine::core::{GraphicsService, Harness, HarnessError, Lifecycle};
    use pengu_engine::input::KeyState;
    use pengu_engine::logging::LogSink;
    use pengu_engine::paint::Color;
    use pengu_engine::time::FrameTime;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Clear(Color),
        Present,
        Teardown,
    }

    struct Recorder(Rc<RefCell<Vec<Cmd>>>);

    impl GraphicsService for Recorder {
        fn clear_surface(&mut self, color: Color) {
            self.0.borrow_mut().push(Cmd::Clear(color));
        }

        fn present_frame(&mut self) {
            self.0.borrow_mut().push(Cmd::Present);
        }
    }

    impl Drop for Recorder {
        fn drop(&mut self) {
            self.0.borrow_mut().push(Cmd::Teardown);
        }
    }

    fn running() -> (Harness<ColorCycle, Recorder>, Rc<RefCell<Vec<Cmd>>>) {
        let cmds = Rc::new(RefCell::new(Vec::new()));
        let mut h = Harness::new(ColorCycle::default(), LogSink::silent());
        let rec = Recorder(Rc::clone(&cmds));
        h.start(|| Ok(rec)).unwrap();
        (h, cmds)
    }

    #[test]
    fn one_clear_and_present_per_tick_then_single_teardown() {
        let (mut h, cmds) = running();

        for (i, t) in [0.0, 1.0, 2.0].into_iter().enumerate() {
            h.frame(FrameTime::at(t, i as u64));
        }
        h.event(&Event::CloseRequested);
        h.frame(FrameTime::at(3.0, 3));

        assert_eq!(
            *cmds.borrow(),
            vec![
                Cmd::Clear(cycle_color(0.0)),
                Cmd::Present,
                Cmd::Clear(cycle_color(1.0)),
                Cmd::Present,
                Cmd::Clear(cycle_color(2.0)),
                Cmd::Present,
                Cmd::Teardown,
            ]
        );
        assert_eq!(h.app().frames, 3);
    }

    #[test]
    fn escape_quits() {
        let (mut h, cmds) = running();

        let esc = Event::Key { key: Key::Escape, state: KeyState::Pressed, repeat: false };
        assert_eq!(h.event(&esc), AppControl::Stop);
        assert_eq!(h.state(), Lifecycle::Terminated);
        assert_eq!(*cmds.borrow(), vec![Cmd::Teardown]);
    }

    #[test]
    fn other_keys_do_not_quit() {
        let (mut h, _cmds) = running();

        let q = Event::Key { key: Key::Character('q'), state: KeyState::Pressed, repeat: false };
        assert_eq!(h.event(&q), AppControl::Continue);
        assert!(h.is_running());
    }

    #[test]
    fn startup_failure_reports_once_and_draws_nothing() {
        let emitted = Arc::new(AtomicUsize::new(0));
        let sink = {
            let emitted = Arc::clone(&emitted);
            LogSink::new(move |_, _| {
                emitted.fetch_add(1, Ordering::SeqCst);
            })
        };
        let mut h: Harness<ColorCycle, Recorder> = Harness::new(ColorCycle::default(), sink);

        let err = h.start(|| Err(anyhow::anyhow!("no display"))).unwrap_err();
        h.frame(FrameTime::at(0.0, 0));

        assert!(matches!(err, HarnessError::Initialization(_)));
        assert_eq!(crate::exit_code_of(&Err(err.into())), 1);
        assert_eq!(emitted.load(Ordering::SeqCst), 1);
        assert_eq!(h.app().frames, 0);
    }
}
