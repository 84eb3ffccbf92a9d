use std::time::Instant;

use hoodview_app::app::DashboardApp;
use hoodview_app::config::{DashboardConfig, SliderFieldConfig};
use hoodview_data::dataset::Dataset;
use hoodview_data::fields::{
    BATHROOM, BEDROOMS, NEIGHBORHOOD, PROPERTY_TYPE, RENT_AMOUNT, SALE_AMOUNT, YEAR_BUILT,
};
use hoodview_data::record::Record;
use hoodview_eventstream::window::{
    ElementState, MouseButton, TouchPhase, WindowCursorMoved, WindowEvent, WindowMouseInput,
    WindowTouch,
};
use hoodview_scenegraph::marks::mark::SceneMark;
use rstest::rstest;

fn house(hood: &str, kind: &str, beds: f64, baths: f64, sale: f64, year: i64) -> Record {
    Record::new()
        .with(NEIGHBORHOOD, hood)
        .with(PROPERTY_TYPE, kind)
        .with(BEDROOMS, beds)
        .with(BATHROOM, baths)
        .with(SALE_AMOUNT, sale)
        .with(YEAR_BUILT, year)
}

fn dataset() -> Dataset {
    vec![
        house("Shadyside", "Condo", 1.0, 1.0, 200_000.0, 1990),
        house("Shadyside", "Single Family", 5.0, 3.0, 650_000.0, 1925),
        house("Bloomfield", "Townhouse", 3.0, 2.0, 320_000.0, 2005),
    ]
    .into()
}

fn config() -> DashboardConfig {
    DashboardConfig {
        sliders: vec![
            SliderFieldConfig::new(BEDROOMS, "bed-cont", [0.0, 0.0]),
            SliderFieldConfig::new(BATHROOM, "bath-cont", [0.0, 50.0]),
            SliderFieldConfig::new(RENT_AMOUNT, "rent-cont", [0.0, 100.0]),
        ],
        height: 150.0,
        ..Default::default()
    }
}

fn cursor(x: f32, y: f32) -> WindowEvent {
    WindowEvent::CursorMoved(WindowCursorMoved { position: [x, y] })
}

fn mouse(state: ElementState) -> WindowEvent {
    WindowEvent::MouseInput(WindowMouseInput {
        state,
        button: MouseButton::Left,
    })
}

#[test]
fn test_initial_state_shows_everything() {
    let app = DashboardApp::new(dataset(), &config()).unwrap();
    assert_eq!(*app.visible_records(), vec![0, 1, 2]);

    // rent has no values in the dataset
    let state = app.state();
    assert_eq!(state.bank().len(), 2);
    assert_eq!(state.bank().omitted()[0].field, RENT_AMOUNT);
    assert_eq!(state.range_label(), None);
    assert_eq!(app.scene_graph().groups().len(), 2);
}

#[test]
fn test_dragging_bedrooms_max_filters_records() {
    let mut app = DashboardApp::new(dataset(), &config()).unwrap();
    let now = Instant::now();

    // bedrooms domain [1, 5]; max handle at x = 240, y = 15
    assert!(app.update(&cursor(240.0, 15.0), now).is_none());
    assert!(app.update(&mouse(ElementState::Pressed), now).is_none());

    // x = 140 is about 3.26 bedrooms
    let scene_graph = app.update(&cursor(140.0, 15.0), now).unwrap();
    assert!(scene_graph
        .marks
        .iter()
        .any(|mark| matches!(mark, SceneMark::Text(text) if text.name == "range_label")));
    assert_eq!(app.state().range_label(), Some("Range: 1 - 3"));
    assert_eq!(*app.visible_records(), vec![0, 2]);

    let range = *app.criteria().range(BEDROOMS).unwrap();
    assert!(range.narrowed);
    assert!(!app.criteria().range(BATHROOM).unwrap().narrowed);

    assert!(app.update(&mouse(ElementState::Released), now).is_none());
    // moves after release no longer drag
    assert!(app.update(&cursor(10.0, 15.0), now).is_none());
    assert_eq!(*app.visible_records(), vec![0, 2]);
}

#[test]
fn test_release_outside_window_stops_drag() {
    let mut app = DashboardApp::new(dataset(), &config()).unwrap();
    let now = Instant::now();
    app.update(&cursor(240.0, 15.0), now);
    app.update(&mouse(ElementState::Pressed), now);
    assert!(app.update(&cursor(200.0, 15.0), now).is_some());
    let dragged = app.state().bank().get(BEDROOMS).unwrap().state();

    app.update(&WindowEvent::CursorLeft, now);
    app.update(&mouse(ElementState::Released), now);
    assert!(app.state().bank().active().is_none());

    // hovering back in with the button up must not move the handle
    assert!(app.update(&cursor(60.0, 30.0), now).is_none());
    assert!(app.update(&cursor(60.0, 15.0), now).is_none());
    assert_eq!(app.state().bank().get(BEDROOMS).unwrap().state(), dragged);
}

#[test]
fn test_press_off_handle_does_not_drag() {
    let mut app = DashboardApp::new(dataset(), &config()).unwrap();
    let now = Instant::now();
    app.update(&cursor(125.0, 15.0), now);
    app.update(&mouse(ElementState::Pressed), now);
    assert!(app.update(&cursor(20.0, 15.0), now).is_none());
    assert_eq!(*app.visible_records(), vec![0, 1, 2]);
}

#[test]
fn test_touch_drags_like_mouse() {
    let mut app = DashboardApp::new(dataset(), &config()).unwrap();
    let now = Instant::now();
    let touch = |phase, x, y| {
        WindowEvent::Touch(WindowTouch {
            phase,
            position: [x, y],
        })
    };
    // bathroom min handle: x = 10, y = 50 + 15
    app.update(&touch(TouchPhase::Started, 10.0, 65.0), now);
    let scene_graph = app.update(&touch(TouchPhase::Moved, 240.0, 65.0), now);
    assert!(scene_graph.is_some());
    app.update(&touch(TouchPhase::Ended, 240.0, 65.0), now);

    // min stops one below the max of 3 bathrooms
    assert_eq!(app.state().range_label(), Some("Range: 2 - 3"));
    assert_eq!(*app.visible_records(), vec![1, 2]);
}

#[rstest]
#[case(vec!["Shadyside"], vec![], None, vec![0, 1])]
#[case(vec![], vec!["Townhouse", "Condo"], None, vec![0, 2])]
#[case(vec![], vec![], Some(1950), vec![0, 2])]
#[case(vec!["Bloomfield"], vec!["Condo"], None, vec![])]
fn test_categorical_filters(
    #[case] neighborhoods: Vec<&str>,
    #[case] property_types: Vec<&str>,
    #[case] min_year: Option<i64>,
    #[case] expected: Vec<usize>,
) {
    let mut app = DashboardApp::new(dataset(), &config()).unwrap();
    app.set_neighborhoods(neighborhoods);
    app.set_property_types(property_types);
    let visible = app.set_min_year_built(min_year);
    assert_eq!(*visible, expected);
}

#[test]
fn test_categorical_and_slider_filters_combine() {
    let mut app = DashboardApp::new(dataset(), &config()).unwrap();
    let now = Instant::now();
    app.set_neighborhoods(["Shadyside"]);
    app.update(&cursor(240.0, 15.0), now);
    app.update(&mouse(ElementState::Pressed), now);
    app.update(&cursor(140.0, 15.0), now);
    app.update(&mouse(ElementState::Released), now);
    assert_eq!(*app.visible_records(), vec![0]);

    let scene_graph = app.reset_sliders();
    assert_eq!(*app.visible_records(), vec![0, 1]);
    assert!(!scene_graph
        .marks
        .iter()
        .any(|mark| matches!(mark, SceneMark::Text(_))));
}

#[test]
fn test_invalid_layout_fails_construction() {
    let mut config = config();
    config.slider_layout.track_color = "nope".to_string();
    assert!(DashboardApp::new(dataset(), &config).is_err());
}
