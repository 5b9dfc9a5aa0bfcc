use super::{Driver, Palette, Renderer, RunState};
use crate::Automaton;
use eframe::egui::Color32;
use std::time::{Duration, Instant};

const CELL: u32 = 10;
const INTERVAL: Duration = Duration::from_millis(100);
const PALETTE: Palette = Palette {
    alive: Color32::WHITE,
    dead: Color32::DARK_GRAY,
};

#[derive(Debug, PartialEq)]
enum Op {
    Clear,
    Fill(f32, f32, Color32),
    Grid,
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Renderer for Recorder {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color32) {
        assert_eq!((width, height), (CELL as f32, CELL as f32));
        self.ops.push(Op::Fill(x, y, color));
    }

    fn draw_grid(&mut self) {
        self.ops.push(Op::Grid);
    }
}

fn driver(cols: usize, rows: usize) -> Driver<Recorder> {
    let life = Automaton::new(cols, rows, CELL).unwrap();
    Driver::new(life, Recorder::default(), PALETTE, INTERVAL)
}

#[test]
fn test_init_starts_running() {
    let t0 = Instant::now();
    let mut d = driver(4, 3);
    assert_eq!(d.state(), RunState::Paused);
    d.init(t0);
    assert_eq!(d.state(), RunState::Running);
    assert_eq!(d.next_deadline(), Some(t0));

    // initial picture: background, every cell, grid
    let ops = &d.renderer().ops;
    assert_eq!(ops.len(), 4 * 3 + 2);
    assert_eq!(ops[0], Op::Clear);
    assert_eq!(ops[1], Op::Fill(0., 0., PALETTE.dead));
    assert_eq!(ops[12], Op::Fill(30., 20., PALETTE.dead));
    assert_eq!(ops[13], Op::Grid);
}

#[test]
fn test_frames_follow_interval() {
    let t0 = Instant::now();
    let mut d = driver(5, 5);
    d.init(t0);

    assert!(d.tick(t0));
    assert_eq!(d.generation(), 1);
    assert!(!d.tick(t0));
    assert!(!d.tick(t0 + INTERVAL / 2));
    assert_eq!(d.next_deadline(), Some(t0 + INTERVAL));
    assert!(d.tick(t0 + INTERVAL));
    assert_eq!(d.generation(), 2);
}

#[test]
fn test_frame_draw_order() {
    let t0 = Instant::now();
    let mut d = driver(3, 2);
    d.init(t0);
    let before = d.renderer().ops.len();
    d.tick(t0);
    let frame = &d.renderer().ops[before..];
    assert_eq!(frame.len(), 3 * 2 + 2);
    assert_eq!(frame[0], Op::Clear);
    assert!(frame[1..7].iter().all(|op| matches!(op, Op::Fill(..))));
    assert_eq!(frame[7], Op::Grid);
}

#[test]
fn test_pause_cancels_pending_frame() {
    let t0 = Instant::now();
    let mut d = driver(5, 5);
    d.init(t0);
    d.tick(t0);
    d.pause();
    assert_eq!(d.state(), RunState::Paused);
    assert_eq!(d.next_deadline(), None);
    for i in 1..10 {
        assert!(!d.tick(t0 + INTERVAL * i));
    }
    assert_eq!(d.generation(), 1);
}

#[test]
fn test_pause_then_play_resumes_once() {
    let t0 = Instant::now();
    let mut d = driver(5, 5);
    d.init(t0);
    d.tick(t0);
    assert_eq!(d.generation(), 1);

    let t1 = t0 + INTERVAL / 2;
    d.pause();
    d.play(t1);
    assert!(d.is_running());
    assert!(d.tick(t1));
    assert!(!d.tick(t1));
    assert_eq!(d.generation(), 2);

    // the frame queued before the pause never fires
    assert!(!d.tick(t0 + INTERVAL));
    assert_eq!(d.generation(), 2);
    assert!(d.tick(t1 + INTERVAL));
    assert_eq!(d.generation(), 3);
}

#[test]
fn test_play_while_running_does_not_duplicate() {
    let t0 = Instant::now();
    let mut d = driver(5, 5);
    d.init(t0);
    d.tick(t0);
    d.play(t0);
    d.play(t0);
    assert_eq!(d.next_deadline(), Some(t0 + INTERVAL));
    assert!(!d.tick(t0));
    assert!(d.tick(t0 + INTERVAL));
    assert!(!d.tick(t0 + INTERVAL));
    assert_eq!(d.generation(), 2);
}

#[test]
fn test_click_while_paused_survives_until_resume() {
    let t0 = Instant::now();
    let mut d = driver(6, 6);
    d.init(t0);
    d.pause();

    // a blinker drawn while paused
    d.click(15., 25.);
    d.click(25., 25.);
    d.click(35., 25.);
    assert_eq!(d.renderer().ops.last(), Some(&Op::Fill(30., 20., PALETTE.alive)));
    assert_eq!(d.automaton().population(), 3);
    assert_eq!(d.generation(), 0);

    let t1 = t0 + INTERVAL * 5;
    d.play(t1);
    d.tick(t1);
    assert!(d.automaton().is_alive(2, 1));
    assert!(d.automaton().is_alive(2, 2));
    assert!(d.automaton().is_alive(2, 3));
    assert_eq!(d.automaton().population(), 3);
}

#[test]
fn test_click_outside_draws_nothing() {
    let t0 = Instant::now();
    let mut d = driver(3, 3);
    d.init(t0);
    let before = d.renderer().ops.len();
    d.click(300., 5.);
    d.click(-1., 5.);
    assert_eq!(d.renderer().ops.len(), before);
}

#[test]
fn test_drag_paints_cells() {
    let t0 = Instant::now();
    let mut d = driver(10, 10);
    d.init(t0);
    let before = d.renderer().ops.len();
    d.drag((5., 5.), (5., 35.));
    assert_eq!(
        d.renderer().ops[before..],
        [
            Op::Fill(0., 0., PALETTE.alive),
            Op::Fill(0., 10., PALETTE.alive),
            Op::Fill(0., 20., PALETTE.alive),
            Op::Fill(0., 30., PALETTE.alive),
        ]
    );
}

#[test]
fn test_clear_pauses_and_redraws() {
    let t0 = Instant::now();
    let mut d = driver(4, 4);
    d.init(t0);
    d.click(5., 5.);
    let before = d.renderer().ops.len();

    d.clear();
    assert_eq!(d.state(), RunState::Paused);
    assert_eq!(d.automaton().population(), 0);
    assert_eq!(d.next_deadline(), None);

    let ops = &d.renderer().ops[before..];
    assert_eq!(ops.len(), 4 * 4 + 2);
    assert_eq!(ops[0], Op::Clear);
    assert!(ops[1..17]
        .iter()
        .all(|op| matches!(op, Op::Fill(_, _, c) if *c == PALETTE.dead)));
    assert_eq!(ops[17], Op::Grid);
}
