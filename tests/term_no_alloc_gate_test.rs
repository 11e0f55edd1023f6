use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_blockfall::core::{GameState, ScriptedPieces};
use tui_blockfall::term::{encode_diff_into, GameView, StatusView, Viewport};
use tui_blockfall::types::ShapeKind;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn term_diff_encoding_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let status = StatusView::default();

    let mut game = GameState::new(10, 20, ScriptedPieces::repeat(ShapeKind::T));
    let before = view.render(&game.snapshot(), &status, viewport);
    game.tick_down();
    let after = view.render(&game.snapshot(), &status, viewport);

    let mut buf: Vec<u8> = Vec::with_capacity(64 * 1024);

    // Warm-up: allow any lazy init.
    encode_diff_into(&before, &after, &mut buf).unwrap();
    assert!(!buf.is_empty());

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            buf.clear();
            encode_diff_into(&before, &after, &mut buf).unwrap();
        }
    });

    assert_eq!(allocs, 0);
}
