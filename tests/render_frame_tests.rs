use std::cell::RefCell;
use std::rc::Rc;

use logplot::core::{IndexWindow, RawInput};
use logplot::extensions::{EngineContext, EngineEvent, EngineObserver};
use logplot::interaction::ZoomGesture;
use logplot::render::{NullRenderer, RenderFrame, Renderer};
use logplot::{LogPlotEngine, LogPlotEngineConfig, LogPlotResult};

const LOG: &str = "Time,Engine Speed,Boost,Coolant\n\
                   0,800,0.2,80\n\
                   1,1600,,81\n\
                   2,2400,1.0,82\n\
                   3,3200,1.4,83\n";

#[derive(Default)]
struct CapturingRenderer {
    frames: Vec<RenderFrame>,
}

impl Renderer for CapturingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> LogPlotResult<()> {
        frame.validate()?;
        self.frames.push(frame.clone());
        Ok(())
    }
}

struct RecordingObserver {
    events: Rc<RefCell<Vec<EngineEvent>>>,
}

impl EngineObserver for RecordingObserver {
    fn id(&self) -> &str {
        "recorder"
    }

    fn on_event(&mut self, event: &EngineEvent, _context: EngineContext) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[test]
fn render_hands_windowed_slices_to_renderer() {
    let mut engine = LogPlotEngine::new(CapturingRenderer::default(), LogPlotEngineConfig::default())
        .expect("engine init");
    engine.load(RawInput::Delimited(LOG)).expect("load");
    engine.set_window(1, 2).expect("set");
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    let frame = renderer.frames.last().expect("frame");
    assert_eq!(frame.window, IndexWindow { start: 1, end: 2 });
    assert_eq!(frame.labels, vec!["1", "2"]);
    assert_eq!(frame.series.len(), 3);

    let boost = &frame.series[1];
    assert_eq!(boost.key, "Boost");
    assert_eq!(boost.original, vec![None, Some(1.0)]);
    assert_eq!(boost.normalized.len(), 2);
    assert!(!boost.hidden);
    assert_eq!(boost.color.to_string(), "hsl(90, 70%, 50%)");

    let visible: Vec<&str> = frame.visible_series().map(|s| s.label.as_str()).collect();
    assert_eq!(visible, vec!["Engine Speed", "Boost"]);
}

#[test]
fn render_frame_legend_follows_label_filter() {
    let mut engine = LogPlotEngine::new(NullRenderer::default(), LogPlotEngineConfig::default())
        .expect("engine init");
    engine.load(RawInput::Delimited(LOG)).expect("load");
    engine.set_label_filter("cool");
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_point_count, 4);
    assert_eq!(renderer.last_visible_series, 2);
    assert_eq!(renderer.last_legend_len, 1);
}

#[test]
fn rendering_empty_engine_is_a_no_op() {
    let mut engine = LogPlotEngine::new(NullRenderer::default(), LogPlotEngineConfig::default())
        .expect("engine init");
    engine.render().expect("render");
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn observers_receive_state_transitions() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut engine = LogPlotEngine::new(NullRenderer::default(), LogPlotEngineConfig::default())
        .expect("engine init");
    engine
        .register_observer(Box::new(RecordingObserver {
            events: Rc::clone(&events),
        }))
        .expect("register");

    engine.load(RawInput::Delimited(LOG)).expect("load");
    engine.on_zoom(ZoomGesture::drag(0.6, 2.4)).expect("zoom");
    engine.on_zoom(ZoomGesture::wheel(0.0, 1.0)).expect("wheel");
    engine.toggle_series("Coolant").expect("toggle");
    let _ = engine.load(RawInput::Delimited("t,a\n"));
    engine.render().expect("render");

    let events = events.borrow();
    assert_eq!(
        events[0],
        EngineEvent::DatasetInstalled {
            generation: 1,
            row_count: 4,
            series_count: 3,
        }
    );
    assert_eq!(events[1], EngineEvent::WindowChanged { start: 0, end: 3 });
    assert_eq!(events[2], EngineEvent::WindowChanged { start: 1, end: 2 });
    assert_eq!(
        events[3],
        EngineEvent::SeriesVisibilityChanged {
            key: "Coolant".to_owned(),
            hidden: false,
        }
    );
    assert!(matches!(events[4], EngineEvent::UploadFailed { generation: 2, .. }));
    assert_eq!(events[5], EngineEvent::Rendered);
    assert_eq!(events.len(), 6);
}

#[test]
fn observer_ids_must_be_unique() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut engine = LogPlotEngine::new(NullRenderer::default(), LogPlotEngineConfig::default())
        .expect("engine init");
    engine
        .register_observer(Box::new(RecordingObserver {
            events: Rc::clone(&events),
        }))
        .expect("register");
    assert!(
        engine
            .register_observer(Box::new(RecordingObserver { events }))
            .is_err()
    );
    assert!(engine.has_observer("recorder"));
    assert_eq!(engine.observer_ids().collect::<Vec<_>>(), vec!["recorder"]);
    assert!(engine.unregister_observer("recorder"));
    assert!(!engine.unregister_observer("recorder"));
    assert_eq!(engine.observer_count(), 0);
}

struct AnonymousObserver;

impl EngineObserver for AnonymousObserver {
    fn id(&self) -> &str {
        ""
    }

    fn on_event(&mut self, _event: &EngineEvent, _context: EngineContext) {}
}

#[test]
fn observers_without_id_are_rejected() {
    let mut engine = LogPlotEngine::new(NullRenderer::default(), LogPlotEngineConfig::default())
        .expect("engine init");
    assert!(engine.register_observer(Box::new(AnonymousObserver)).is_err());
    assert_eq!(engine.observer_count(), 0);
}

#[test]
fn extreme_finite_ranges_still_render() {
    let mut engine = LogPlotEngine::new(CapturingRenderer::default(), LogPlotEngineConfig::default())
        .expect("engine init");
    engine
        .load(RawInput::Delimited("t,Boost\n0,-1e308\n1,0\n2,1e308\n"))
        .expect("load");
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    let frame = renderer.frames.last().expect("frame");
    assert_eq!(frame.series[0].normalized, vec![0.0, 50.0, 100.0]);
}
