//! Benchmarks for key matching and dispatch.

use criterion::{criterion_group, criterion_main, Criterion};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use qgen_review::shortcuts::keys::{CONTROL, DOWN, SHIFT, SPACE, TAB, UP};
use qgen_review::shortcuts::{
    find_conflicts, pressed_keys, Focus, ListenerRegistry, Shortcut, ShortcutDispatcher,
};
use std::hint::black_box;

/// A declaration set the size of the tuple review screen.
fn review_set() -> Vec<Shortcut<u8>> {
    vec![
        Shortcut::new(&[UP], 0),
        Shortcut::new(&["K"], 0),
        Shortcut::new(&[DOWN], 1),
        Shortcut::new(&["J"], 1),
        Shortcut::new(&[SPACE], 2),
        Shortcut::new(&["A"], 3),
        Shortcut::new(&["N"], 4),
        Shortcut::new(&["Y"], 5),
        Shortcut::new(&[SHIFT, "A"], 6),
        Shortcut::new(&["X"], 7),
        Shortcut::new(&["E"], 8),
        Shortcut::new(&[CONTROL, "S"], 9).when(false),
        Shortcut::new(&["R"], 10),
        Shortcut::new(&[TAB], 11),
    ]
}

fn benchmark_pressed_keys(c: &mut Criterion) {
    let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    c.bench_function("pressed_keys", |b| {
        b.iter(|| pressed_keys(black_box(&event)));
    });
}

fn benchmark_dispatch(c: &mut Criterion) {
    let registry = ListenerRegistry::new();
    let dispatcher = ShortcutDispatcher::active(&registry, "bench");
    let set = review_set();
    let last = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
    let miss = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::ALT);

    let mut group = c.benchmark_group("dispatch");
    group.bench_function("last_descriptor", |b| {
        b.iter(|| {
            let mut hit = None;
            dispatcher.dispatch(black_box(&last), Focus::None, &set, |a| hit = Some(*a));
            hit
        });
    });
    group.bench_function("no_match", |b| {
        b.iter(|| dispatcher.dispatch(black_box(&miss), Focus::None, &set, |_| {}));
    });
    group.bench_function("suppressed", |b| {
        b.iter(|| dispatcher.dispatch(black_box(&last), Focus::TextArea, &set, |_| {}));
    });
    group.finish();
}

fn benchmark_conflicts(c: &mut Criterion) {
    let set = review_set();
    c.bench_function("find_conflicts", |b| {
        b.iter(|| find_conflicts(black_box(&set)));
    });
}

criterion_group!(
    benches,
    benchmark_pressed_keys,
    benchmark_dispatch,
    benchmark_conflicts
);
criterion_main!(benches);
