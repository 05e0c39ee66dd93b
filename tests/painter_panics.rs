//! Panic hook behaviour while a screen session is active.
//!
//! Kept as a single test: the panic hook is process-global, so hook swaps in parallel tests
//! would race.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use splitpane::render::{install_panic_hook, render};
use splitpane::{painter, InputEvent, Region, SplitSpec};
use std::cell::Cell;
use std::panic;

thread_local! {
    static OUTER_HOOK_CALLS: Cell<usize> = const { Cell::new(0) };
    static SCREEN_RESTORES: Cell<usize> = const { Cell::new(0) };
}

fn outer_hook_calls() -> usize {
    OUTER_HOOK_CALLS.with(Cell::get)
}

fn screen_restores() -> usize {
    SCREEN_RESTORES.with(Cell::get)
}

fn count_restore() {
    SCREEN_RESTORES.with(|count| count.set(count.get() + 1));
}

#[test]
fn session_hook_silences_painter_panics_only() {
    // Stands in for the default hook that would print onto the terminal.
    let original = panic::take_hook();
    panic::set_hook(Box::new(|_| {
        OUTER_HOOK_CALLS.with(|count| count.set(count.get() + 1));
    }));

    let guard = install_panic_hook(count_restore);

    let screen = Rect {
        x: 0,
        y: 0,
        width: 8,
        height: 2,
    };
    let mut root = Region::new(screen);
    root.split(SplitSpec::stacked().painters(
        painter(|pane, _| {
            pane.write(0, 0, "ok");
            Ok(())
        }),
        painter(|_, _| panic!("painter bug")),
    ))
    .unwrap();
    let mut buffer = Buffer::empty(screen);

    let report = render(&mut root, &mut buffer, &InputEvent::NoInput);
    assert_eq!(report.failures, 1);
    assert_eq!(outer_hook_calls(), 0);
    assert_eq!(screen_restores(), 0);

    // Panics outside painters restore the screen and still reach the previous hook.
    let result = panic::catch_unwind(|| panic!("loop bug"));
    assert!(result.is_err());
    assert_eq!(screen_restores(), 1);
    assert_eq!(outer_hook_calls(), 1);

    guard.restore();
    render(&mut root, &mut buffer, &InputEvent::NoInput);
    assert_eq!(outer_hook_calls(), 2);
    assert_eq!(screen_restores(), 1);

    panic::set_hook(original);
}
