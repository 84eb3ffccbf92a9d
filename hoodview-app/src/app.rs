use std::sync::Arc;
use std::time::Instant;

use hoodview_common::value::ScalarOrArray;
use hoodview_data::dataset::Dataset;
use hoodview_data::filter::{filter_records, FilterCriteria};
use hoodview_eventstream::manager::{EventStreamHandler, EventStreamManager};
use hoodview_eventstream::scene::SceneGraphEvent;
use hoodview_eventstream::stream::{EventStreamConfig, UpdateStatus};
use hoodview_eventstream::window::WindowEvent;
use hoodview_scenegraph::marks::mark::SceneMark;
use hoodview_scenegraph::marks::text::SceneTextMark;
use hoodview_scenegraph::scene_graph::SceneGraph;
use hoodview_slider::bank::SliderBank;
use hoodview_slider::slider::SliderChange;

use crate::config::DashboardConfig;
use crate::error::DashboardError;

/// Everything the dashboard handlers read and mutate
#[derive(Debug, Clone)]
pub struct DashboardState {
    dataset: Dataset,
    bank: SliderBank,
    width: f32,
    height: f32,
    label_font_size: f32,
    label_color: [f32; 4],
    // Categorical filters, set from outside the slider panel
    base: FilterCriteria,
    criteria: Arc<FilterCriteria>,
    visible: Arc<Vec<usize>>,
    range_label: Option<String>,
}

impl DashboardState {
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn bank(&self) -> &SliderBank {
        &self.bank
    }

    pub fn criteria(&self) -> Arc<FilterCriteria> {
        self.criteria.clone()
    }

    pub fn visible_records(&self) -> Arc<Vec<usize>> {
        self.visible.clone()
    }

    /// `"Range: X - Y"` of the most recently changed slider
    pub fn range_label(&self) -> Option<&str> {
        self.range_label.as_deref()
    }

    fn apply_change(&mut self, change: &SliderChange) {
        self.range_label = Some(change.range_label());
        self.refilter();
    }

    /// Take a fresh snapshot of the sliders and recompute the visible set
    fn refilter(&mut self) {
        let ranges = self.bank.snapshot().ranges().clone();
        let criteria = self.base.clone().with_ranges(ranges);
        self.visible = Arc::new(filter_records(&self.dataset, &criteria));
        self.criteria = Arc::new(criteria);
        tracing::debug!(visible = self.visible.len(), "Filtered records");
    }
}

fn build_scene_graph(state: &DashboardState) -> SceneGraph {
    let mut marks: Vec<SceneMark> = state
        .bank
        .scene_groups()
        .into_iter()
        .map(SceneMark::Group)
        .collect();

    if let Some(label) = &state.range_label {
        marks.push(SceneMark::Text(Arc::new(SceneTextMark {
            name: "range_label".to_string(),
            text: ScalarOrArray::Scalar(label.clone()),
            y: ScalarOrArray::Scalar(state.height - 4.0),
            color: ScalarOrArray::Scalar(state.label_color),
            font_size: ScalarOrArray::Scalar(state.label_font_size),
            ..Default::default()
        })));
    }

    SceneGraph {
        marks,
        width: state.width,
        height: state.height,
        origin: [0.0, 0.0],
    }
}

fn stream_handlers() -> Vec<(EventStreamConfig, Arc<dyn EventStreamHandler<DashboardState>>)> {
    let press: Arc<dyn EventStreamHandler<DashboardState>> =
        Arc::new(|event: &SceneGraphEvent, state: &mut DashboardState| {
            if let Some(position) = event.position() {
                if let Some((slider, handle)) = state.bank.pointer_down(position) {
                    tracing::debug!(%slider, ?handle, "Grabbed slider handle");
                }
            }
            UpdateStatus::default()
        });

    let drag: Arc<dyn EventStreamHandler<DashboardState>> =
        Arc::new(|event: &SceneGraphEvent, state: &mut DashboardState| {
            let change = event
                .position()
                .and_then(|position| state.bank.pointer_move(position));
            match change {
                Some(change) => {
                    state.apply_change(&change);
                    UpdateStatus::rerender()
                }
                None => UpdateStatus::default(),
            }
        });

    let release: Arc<dyn EventStreamHandler<DashboardState>> =
        Arc::new(|_event: &SceneGraphEvent, state: &mut DashboardState| {
            state.bank.pointer_up();
            UpdateStatus::default()
        });

    vec![
        (EventStreamConfig::left_mouse_down(), press),
        (EventStreamConfig::left_drag(), drag),
        (EventStreamConfig::left_mouse_up(), release),
    ]
}

/// The slider panel of the housing dashboard.
///
/// Window events are routed through an [`EventStreamManager`]; handlers that
/// move a slider rebuild the filter criteria, and the scene graph is rebuilt
/// only when a handler asked for a rerender.
pub struct DashboardApp {
    event_stream_manager: EventStreamManager<DashboardState>,
    scene_graph: Arc<SceneGraph>,
}

impl DashboardApp {
    #[tracing::instrument(skip_all, fields(records = dataset.len()))]
    pub fn new(dataset: Dataset, config: &DashboardConfig) -> Result<Self, DashboardError> {
        let bank = SliderBank::build(
            &dataset,
            &config.field_sliders(),
            &config.slider_layout,
            config.degenerate_domain,
            config.min_separation,
        )?;
        let label_color = config.slider_layout.resolve()?.label;

        let mut state = DashboardState {
            dataset,
            bank,
            width: config.width,
            height: config.height,
            label_font_size: config.slider_layout.font_size,
            label_color,
            base: FilterCriteria::new(),
            criteria: Arc::new(FilterCriteria::new()),
            visible: Arc::new(Vec::new()),
            range_label: None,
        };
        state.refilter();

        let mut event_stream_manager = EventStreamManager::new(state);
        for (config, handler) in stream_handlers() {
            event_stream_manager.register_handler(config, handler);
        }
        let scene_graph = Arc::new(build_scene_graph(event_stream_manager.state()));

        Ok(Self {
            event_stream_manager,
            scene_graph,
        })
    }

    /// Update the state of the app and rebuild the scene graph if needed
    pub fn update(&mut self, event: &WindowEvent, instant: Instant) -> Option<Arc<SceneGraph>> {
        let update_status = self.event_stream_manager.dispatch_event(event, instant);
        if update_status.rerender || update_status.rebuild_geometry {
            self.scene_graph = Arc::new(build_scene_graph(self.event_stream_manager.state()));
        }
        if update_status.rerender {
            Some(self.scene_graph.clone())
        } else {
            None
        }
    }

    pub fn set_neighborhoods<I, S>(&mut self, neighborhoods: I) -> Arc<Vec<usize>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.update_base(|base| base.with_neighborhoods(neighborhoods))
    }

    pub fn set_property_types<I, S>(&mut self, property_types: I) -> Arc<Vec<usize>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.update_base(|base| base.with_property_types(property_types))
    }

    pub fn set_min_year_built(&mut self, year: Option<i64>) -> Arc<Vec<usize>> {
        self.update_base(|base| base.with_min_year_built(year))
    }

    /// Return every slider to its full domain
    pub fn reset_sliders(&mut self) -> Arc<SceneGraph> {
        let state = self.event_stream_manager.state_mut();
        if !state.bank.reset().is_empty() {
            state.range_label = None;
            state.refilter();
            self.scene_graph = Arc::new(build_scene_graph(self.event_stream_manager.state()));
        }
        self.scene_graph.clone()
    }

    pub fn criteria(&self) -> Arc<FilterCriteria> {
        self.state().criteria()
    }

    pub fn visible_records(&self) -> Arc<Vec<usize>> {
        self.state().visible_records()
    }

    pub fn scene_graph(&self) -> &SceneGraph {
        &self.scene_graph
    }

    pub fn state(&self) -> &DashboardState {
        self.event_stream_manager.state()
    }

    fn update_base(
        &mut self,
        f: impl FnOnce(FilterCriteria) -> FilterCriteria,
    ) -> Arc<Vec<usize>> {
        let state = self.event_stream_manager.state_mut();
        state.base = f(std::mem::take(&mut state.base));
        state.refilter();
        state.visible_records()
    }
}
