use std::time::{Duration, Instant};

use folio_carousel::{
    HeadlessEngine, HeadlessObserver, HeadlessSurface, IntersectionEntry,
    ObserverOptions, PlaybackState, Rect, TrackLayout, TrackMetrics,
};
use folio_model::{CarouselConfig, CarouselItem, LoopMode};

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

fn phones() -> Vec<CarouselItem> {
    (1..=4)
        .map(|i| CarouselItem::portrait(format!("/p/ss{i}.png"), format!("screen {i}")))
        .collect()
}

fn engine(config: CarouselConfig) -> HeadlessEngine {
    HeadlessEngine::new(
        config,
        HeadlessObserver::new(),
        HeadlessSurface::new(),
        ObserverOptions::default(),
    )
}

#[test]
fn scroll_into_view_mounts_measures_and_plays() {
    let t0 = Instant::now();
    let config = CarouselConfig::autoplay_loop(phones());
    let layout = TrackLayout::default();
    let metrics = layout.metrics(&config.items, config.loop_mode, 390.0);
    let mut engine = engine(config);

    engine.attach(t0);
    assert!(engine.observer().is_observing());
    assert_eq!(engine.surface().mounted_copies(), None);

    // Section sits below the fold, then the page scrolls down to it.
    let options = ObserverOptions::default();
    let section = Rect::new(0.0, 1_200.0, 390.0, 600.0);
    let viewport = Rect::new(0.0, 0.0, 390.0, 844.0);
    let far = IntersectionEntry::from_geometry(&section, &viewport, &options);
    engine.on_intersection(far, t0);
    assert!(!engine.has_ever_been_visible());

    let scrolled = Rect::new(0.0, 700.0, 390.0, 844.0);
    let near = IntersectionEntry::from_geometry(&section, &scrolled, &options);
    engine.on_intersection(near, at(t0, 100));
    assert!(engine.has_ever_been_visible());
    assert_eq!(engine.surface().mounted_copies(), Some(3));

    engine.on_layout(metrics, at(t0, 116));
    let bound = engine.scroll_bound().unwrap();
    assert!((bound - (metrics.content_scroll_width / 3.0 + 390.0)).abs() < 1e-3);
    assert_eq!(engine.loop_segment(), Some((0.0, -bound)));

    let mut previous = engine.offset();
    for frame in 1..=60 {
        let offset = engine.tick(at(t0, 116 + frame * 16)).unwrap();
        assert!(offset <= previous);
        assert!(offset >= -bound);
        previous = offset;
    }
    assert!(engine.surface().frame_requests() >= 60);
}

#[test]
fn drag_then_release_resumes_and_hide_show_restarts() {
    let t0 = Instant::now();
    let mut engine = engine(CarouselConfig::autoplay_loop(phones()));
    engine.attach(t0);
    engine.on_intersection(IntersectionEntry::visible(0.8), t0);
    engine.on_layout(folio_carousel::TrackMetrics::new(900.0, 300.0), t0);

    engine.pointer_down(200.0, t0);
    engine.pointer_move(-50.0, at(t0, 20));
    engine.pointer_up(at(t0, 30));
    assert_eq!(engine.loop_segment(), Some((-250.0, -600.0)));

    engine.tick(at(t0, 20_000));
    engine.on_intersection(IntersectionEntry::hidden(), at(t0, 20_000));
    let stopped_at = match engine.state() {
        PlaybackState::Stopped { at_offset } => at_offset,
        other => panic!("expected stopped, got {other:?}"),
    };
    assert!(stopped_at < -250.0);
    assert!(!engine.is_animating());

    engine.on_intersection(IntersectionEntry::visible(1.0), at(t0, 25_000));
    assert_eq!(engine.loop_segment(), Some((0.0, -600.0)));
}

#[test]
fn manual_swipe_never_animates_on_its_own() {
    let t0 = Instant::now();
    let items = vec![
        CarouselItem::landscape("/p/a.png", "landing"),
        CarouselItem::landscape("/p/b.png", "services"),
        CarouselItem::landscape("/p/c.png", "about"),
    ];
    let config = CarouselConfig::manual_swipe(items);
    assert_eq!(config.loop_mode, LoopMode::SinglePass);
    let metrics =
        TrackLayout::default().metrics(&config.items, config.loop_mode, 390.0);
    let mut engine = engine(config);
    engine.attach(t0);
    engine.on_intersection(IntersectionEntry::visible(1.0), t0);
    engine.on_layout(metrics, t0);
    assert_eq!(engine.surface().mounted_copies(), Some(1));
    assert_eq!(engine.state(), PlaybackState::Stopped { at_offset: 0.0 });
    assert_eq!(engine.tick(at(t0, 1_000)), None);

    engine.pointer_down(300.0, at(t0, 1_000));
    engine.pointer_move(100.0, at(t0, 1_016));
    engine.pointer_up(at(t0, 1_032));
    assert_eq!(engine.state(), PlaybackState::Stopped { at_offset: -200.0 });
    assert_eq!(engine.surface().translation(), -200.0);
}

#[test]
fn teardown_leaves_the_host_quiet() {
    let t0 = Instant::now();
    let mut engine = engine(CarouselConfig::autoplay_loop(phones()));
    engine.attach(t0);
    engine.on_intersection(IntersectionEntry::visible(1.0), t0);
    engine.on_layout(folio_carousel::TrackMetrics::new(900.0, 300.0), t0);
    engine.tick(at(t0, 16));

    engine.teardown();
    assert_eq!(engine.observer().disconnect_calls(), 1);
    assert_eq!(engine.surface().frame_cancels(), 1);
    let calls = engine.surface().call_count();

    engine.tick(at(t0, 32));
    engine.on_intersection(IntersectionEntry::hidden(), at(t0, 48));
    engine.on_intersection(IntersectionEntry::visible(1.0), at(t0, 64));
    engine.pointer_down(0.0, at(t0, 80));
    engine.teardown();

    assert_eq!(engine.surface().call_count(), calls);
    assert_eq!(engine.observer().disconnect_calls(), 1);
}

#[test]
fn unsupported_observer_still_shows_content() {
    let t0 = Instant::now();
    let mut engine = HeadlessEngine::new(
        CarouselConfig::autoplay_loop(phones()),
        HeadlessObserver::unsupported(),
        HeadlessSurface::new(),
        ObserverOptions::default(),
    );
    engine.attach(t0);
    assert_eq!(engine.observer().observe_calls(), 1);
    assert!(engine.is_mounted());
    engine.teardown();
    assert_eq!(engine.observer().disconnect_calls(), 0);
}

fn assert_segment(engine: &HeadlessEngine, from: f32, to: f32) {
    let (start, end) = engine.loop_segment().expect("loop should be running");
    assert!((start - from).abs() < 1e-2, "start {start}, expected {from}");
    assert!((end - to).abs() < 1e-2, "end {end}, expected {to}");
}

#[test]
fn resize_while_playing_restarts_from_current_offset() {
    let t0 = Instant::now();
    let mut engine = engine(CarouselConfig::autoplay_loop(phones()));
    engine.attach(t0);
    engine.on_intersection(IntersectionEntry::visible(1.0), t0);
    engine.on_layout(TrackMetrics::new(900.0, 300.0), t0);
    engine.tick(at(t0, 60_000));
    assert!((engine.offset() + 300.0).abs() < 1e-2);

    // Narrower container: 900 / 3 + 150.
    engine.on_layout(TrackMetrics::new(900.0, 150.0), at(t0, 60_000));
    assert_eq!(engine.scroll_bound(), Some(450.0));
    assert!(engine.state().is_playing());
    assert_segment(&engine, -300.0, -450.0);

    // Shrinking below the current offset clamps onto the far end, which
    // wraps the loop back to the start.
    engine.on_layout(TrackMetrics::new(450.0, 100.0), at(t0, 60_000));
    assert_eq!(engine.scroll_bound(), Some(250.0));
    assert_segment(&engine, 0.0, -250.0);
    assert_eq!(engine.surface().translation(), 0.0);
}

#[test]
fn resize_while_stopped_clamps_the_resting_offset() {
    let t0 = Instant::now();
    let mut engine = engine(CarouselConfig::manual_swipe(phones()));
    engine.attach(t0);
    engine.on_intersection(IntersectionEntry::visible(1.0), t0);
    engine.on_layout(TrackMetrics::new(900.0, 300.0), t0);
    assert_eq!(engine.scroll_bound(), Some(600.0));

    engine.pointer_down(500.0, t0);
    engine.pointer_move(0.0, at(t0, 16));
    engine.pointer_up(at(t0, 32));
    assert_eq!(engine.state(), PlaybackState::Stopped { at_offset: -500.0 });
    assert_eq!(engine.surface().translation(), -500.0);

    engine.on_layout(TrackMetrics::new(900.0, 600.0), at(t0, 1_000));
    assert_eq!(engine.scroll_bound(), Some(300.0));
    assert_eq!(engine.state(), PlaybackState::Stopped { at_offset: -300.0 });
    assert_eq!(engine.surface().translation(), -300.0);
    assert!(!engine.is_animating());
}

#[test]
fn resize_while_dragging_leaves_the_gesture_alone() {
    let t0 = Instant::now();
    let mut engine = engine(CarouselConfig::autoplay_loop(phones()));
    engine.attach(t0);
    engine.on_intersection(IntersectionEntry::visible(1.0), t0);
    engine.on_layout(TrackMetrics::new(900.0, 300.0), t0);

    engine.pointer_down(400.0, t0);
    engine.pointer_move(0.0, at(t0, 16));
    assert_eq!(engine.offset(), -400.0);

    engine.on_layout(TrackMetrics::new(900.0, 100.0), at(t0, 32));
    assert_eq!(engine.scroll_bound(), Some(400.0));
    assert!(engine.state().is_dragging());
    assert!(!engine.is_animating());
    assert_eq!(engine.surface().translation(), -400.0);

    // Release lands inside the new bound and resumes from there.
    engine.pointer_move(50.0, at(t0, 48));
    let outcome = engine.pointer_up(at(t0, 64)).unwrap();
    assert_eq!(outcome.resolved_offset, -350.0);
    assert_segment(&engine, -350.0, -400.0);
}
