use std::time::Duration;

use tui_cube::core::CubeConfig;
use tui_cube::engine::{FrameLoop, NoDelay, RunConfig, StopFlag};
use tui_cube::term::{TerminalRenderer, CURSOR_HOME};

fn run_frames(n: u64) -> (FrameLoop, String) {
    let config = RunConfig {
        frame_delay: Duration::from_millis(8),
        max_frames: Some(n),
        log_path: None,
    };
    let mut frame_loop = FrameLoop::new(CubeConfig::default(), config, 80, 23);
    let mut term = TerminalRenderer::with_writer(Vec::new());
    let stats = frame_loop
        .run(&mut term, &mut NoDelay, &mut StopFlag::new())
        .unwrap();
    assert_eq!(stats.frames, n);
    let text = String::from_utf8(term.into_writer()).unwrap();
    (frame_loop, text)
}

#[test]
fn test_each_frame_is_one_home_prefixed_blob() {
    let (frame_loop, text) = run_frames(4);
    assert_eq!(frame_loop.frames(), 4);
    assert_eq!(text.matches(CURSOR_HOME).count(), 4);
    assert!(text.starts_with(CURSOR_HOME));
    assert_eq!(text.matches("\r\n").count(), 4 * 23);
}

#[test]
fn test_frame_buffer_is_blank_between_frames() {
    let (frame_loop, _) = run_frames(3);
    assert_eq!(frame_loop.frame().drawn_cells(), 0);
}

#[test]
fn test_rotation_tracks_frame_count() {
    let (frame_loop, _) = run_frames(20);
    let a = frame_loop.rotation().angles();
    assert!((a.a - 1.0).abs() < 1e-4);
    assert!((a.b - 1.0).abs() < 1e-4);
    assert!((a.c - 0.2).abs() < 1e-4);
}

#[test]
fn test_spinning_cube_shows_several_faces() {
    let (_, text) = run_frames(60);
    let seen = ['@', '#', '%', '=', '^']
        .iter()
        .filter(|&&g| text.contains(g))
        .count();
    assert!(seen >= 4, "only {} faces seen", seen);
}
