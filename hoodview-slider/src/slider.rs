use std::fmt;
use std::sync::Arc;

use hoodview_common::value::ScalarOrArray;
use hoodview_scenegraph::marks::group::SceneGroup;
use hoodview_scenegraph::marks::mark::SceneMark;
use hoodview_scenegraph::marks::rule::SceneRuleMark;
use hoodview_scenegraph::marks::symbol::SceneSymbolMark;
use hoodview_scenegraph::marks::text::{SceneTextMark, TextAlignSpec, TextBaselineSpec};
use serde::{Deserialize, Serialize};

use crate::domain::{Domain, MIN_SEPARATION};
use crate::error::SliderError;
use crate::layout::{SliderLayout, SliderStyle};
use crate::mapping::ScaleMapping;
use crate::state::SliderState;

/// Identifier a slider reports in its change events
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliderId(String);

impl SliderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SliderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Where a slider is attached on the dashboard canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountPoint {
    pub key: String,
    /// Top-left corner of the slider in window coordinates
    #[serde(default)]
    pub origin: [f32; 2],
}

impl MountPoint {
    pub fn new(key: impl Into<String>, origin: [f32; 2]) -> Self {
        Self {
            key: key.into(),
            origin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Min,
    Max,
}

/// Emitted whenever a slider's `(min, max)` actually changes
#[derive(Debug, Clone, PartialEq)]
pub struct SliderChange {
    pub id: SliderId,
    pub min: f64,
    pub max: f64,
}

impl SliderChange {
    pub fn range_label(&self) -> String {
        format!(
            "Range: {} - {}",
            format_label(self.min),
            format_label(self.max)
        )
    }
}

pub type ChangeListener = Arc<dyn Fn(&SliderChange) + Send + Sync>;

/// Labels show the bound rounded to the nearest integer
pub fn format_label(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// The visual elements of one slider, in slider-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SliderMarks {
    pub track: SceneRuleMark,
    pub handles: SceneSymbolMark,
    pub labels: SceneTextMark,
}

/// A dual-handle slider over a fixed numeric domain.
///
/// Every mutation re-clamps the state so that `lo <= min`, `max <= hi` and
/// `max - min >= min_separation` hold after it returns, and the marks are
/// re-derived from the state in the same call.
#[derive(Clone)]
pub struct RangeSlider {
    id: SliderId,
    mount: MountPoint,
    domain: Domain,
    min_separation: f64,
    state: SliderState,
    mapping: ScaleMapping,
    layout: SliderLayout,
    marks: SliderMarks,
    active: Option<Handle>,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("id", &self.id)
            .field("mount", &self.mount)
            .field("domain", &self.domain)
            .field("state", &self.state)
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RangeSlider {
    pub fn new(mount: MountPoint, id: SliderId, domain: Domain) -> Result<Self, SliderError> {
        Self::with_layout(mount, id, domain, &SliderLayout::default(), MIN_SEPARATION)
    }

    pub fn with_layout(
        mount: MountPoint,
        id: SliderId,
        domain: Domain,
        layout: &SliderLayout,
        min_separation: f64,
    ) -> Result<Self, SliderError> {
        if !min_separation.is_finite() || min_separation <= 0.0 {
            return Err(SliderError::InvalidSeparation(min_separation));
        }
        if !domain.supports_separation(min_separation) {
            return Err(SliderError::InvalidDomain {
                lo: domain.lo(),
                hi: domain.hi(),
            });
        }
        let style = layout.resolve()?;
        let mapping = ScaleMapping::new(&domain, layout.pixel_range())?;
        let state = SliderState::full(&domain);
        let marks = initial_marks(&id, layout, &style);

        let mut slider = Self {
            id,
            mount,
            domain,
            min_separation,
            state,
            mapping,
            layout: layout.clone(),
            marks,
            active: None,
            listeners: Vec::new(),
        };
        slider.render();
        Ok(slider)
    }

    pub fn id(&self) -> &SliderId {
        &self.id
    }

    pub fn mount(&self) -> &MountPoint {
        &self.mount
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn mapping(&self) -> &ScaleMapping {
        &self.mapping
    }

    pub fn layout(&self) -> &SliderLayout {
        &self.layout
    }

    pub fn marks(&self) -> &SliderMarks {
        &self.marks
    }

    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }

    /// Handle currently being dragged, if any
    pub fn active_handle(&self) -> Option<Handle> {
        self.active
    }

    /// True once either bound has moved away from its domain edge
    pub fn is_narrowed(&self) -> bool {
        self.state.min > self.domain.lo() || self.state.max < self.domain.hi()
    }

    /// The `(min, max)` label text
    pub fn labels(&self) -> (String, String) {
        (format_label(self.state.min), format_label(self.state.max))
    }

    pub fn range_label(&self) -> String {
        self.change().range_label()
    }

    /// Register a listener that is called after every effective change
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Convert a window position into this slider's local coordinates
    pub fn to_local(&self, position: [f32; 2]) -> [f32; 2] {
        [
            position[0] - self.mount.origin[0],
            position[1] - self.mount.origin[1],
        ]
    }

    /// Move the min handle toward the pixel position `x`
    pub fn drag_min(&mut self, x: f32) -> Option<SliderChange> {
        self.drag(Handle::Min, x)
    }

    /// Move the max handle toward the pixel position `x`
    pub fn drag_max(&mut self, x: f32) -> Option<SliderChange> {
        self.drag(Handle::Max, x)
    }

    /// Move one handle toward the local pixel position `x`.
    ///
    /// The value under the pointer is clamped to the domain and kept at least
    /// `min_separation` away from the other handle. Returns the change, or
    /// `None` when the clamped value equals the current one.
    pub fn drag(&mut self, handle: Handle, x: f32) -> Option<SliderChange> {
        if !x.is_finite() {
            tracing::warn!(slider = %self.id, x, "Ignoring non-finite pointer position");
            return None;
        }
        let value = self.mapping.value(x as f64);
        let previous = self.state;
        match handle {
            Handle::Min => {
                self.state.min = value
                    .max(self.domain.lo())
                    .min(self.state.max - self.min_separation);
            }
            Handle::Max => {
                self.state.max = value
                    .min(self.domain.hi())
                    .max(self.state.min + self.min_separation);
            }
        }
        self.commit(previous)
    }

    /// Replace both bounds at once, clamped into the domain
    pub fn set_range(&mut self, min: f64, max: f64) -> Option<SliderChange> {
        let previous = self.state;
        self.state = SliderState::new(min, max);
        self.commit(previous)
    }

    /// Return both handles to the domain edges
    pub fn reset(&mut self) -> Option<SliderChange> {
        self.set_range(self.domain.lo(), self.domain.hi())
    }

    /// Start a drag if `position` (slider-local) is on a handle.
    ///
    /// When both handles are within reach the nearer one wins; on an exact
    /// tie max is taken unless it already sits at the top of the domain.
    pub fn pointer_down(&mut self, position: [f32; 2]) -> Option<Handle> {
        let [x, y] = position;
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!(slider = %self.id, x, y, "Ignoring non-finite pointer position");
            return None;
        }
        let reach = self.layout.handle_radius + self.layout.hit_tolerance;
        let center_y = self.layout.track_y();
        let distance = |value: f64| {
            let center_x = self.mapping.pixel(value) as f32;
            ((x - center_x).powi(2) + (y - center_y).powi(2)).sqrt()
        };
        let to_min = distance(self.state.min);
        let to_max = distance(self.state.max);

        let handle = match (to_min <= reach, to_max <= reach) {
            (false, false) => None,
            (true, false) => Some(Handle::Min),
            (false, true) => Some(Handle::Max),
            (true, true) if to_min < to_max => Some(Handle::Min),
            (true, true) if to_max < to_min => Some(Handle::Max),
            (true, true) if self.state.max >= self.domain.hi() => Some(Handle::Min),
            (true, true) => Some(Handle::Max),
        };
        if handle.is_some() {
            tracing::debug!(slider = %self.id, ?handle, "Drag started");
        }
        self.active = handle;
        handle
    }

    /// Continue the active drag, if any, at `position` (slider-local)
    pub fn pointer_move(&mut self, position: [f32; 2]) -> Option<SliderChange> {
        let handle = self.active?;
        self.drag(handle, position[0])
    }

    /// End the active drag and return the released handle
    pub fn pointer_up(&mut self) -> Option<Handle> {
        self.active.take()
    }

    /// The slider as a group positioned at its mount point
    pub fn scene_group(&self) -> SceneGroup {
        SceneGroup {
            name: self.id.to_string(),
            origin: self.mount.origin,
            width: Some(self.layout.width),
            height: Some(self.layout.height),
            marks: vec![
                SceneMark::Rule(self.marks.track.clone()),
                SceneMark::Symbol(self.marks.handles.clone()),
                SceneMark::Text(Arc::new(self.marks.labels.clone())),
            ],
            zindex: None,
        }
    }

    fn change(&self) -> SliderChange {
        SliderChange {
            id: self.id.clone(),
            min: self.state.min,
            max: self.state.max,
        }
    }

    fn commit(&mut self, previous: SliderState) -> Option<SliderChange> {
        self.render();
        if self.state == previous {
            return None;
        }
        let change = self.change();
        tracing::debug!(
            slider = %self.id,
            min = change.min,
            max = change.max,
            "Slider range changed"
        );
        for listener in &self.listeners {
            listener(&change);
        }
        Some(change)
    }

    /// Re-clamp the state and move handles and labels to match it
    fn render(&mut self) {
        self.state = self.state.normalized(&self.domain, self.min_separation);
        let min_x = self.mapping.pixel(self.state.min) as f32;
        let max_x = self.mapping.pixel(self.state.max) as f32;
        let (min_label, max_label) = self.labels();

        self.marks.handles.x = ScalarOrArray::Array(vec![min_x, max_x]);
        self.marks.labels.text = ScalarOrArray::Array(vec![min_label, max_label]);
        self.marks.labels.x = ScalarOrArray::Array(vec![
            min_x - self.layout.label_offset,
            max_x + self.layout.label_offset,
        ]);
    }
}

fn initial_marks(id: &SliderId, layout: &SliderLayout, style: &SliderStyle) -> SliderMarks {
    let (start, end) = layout.pixel_range();
    let track_y = layout.track_y();

    let track = SceneRuleMark {
        name: format!("{id}_track"),
        len: 1,
        x: start.into(),
        y: track_y.into(),
        x2: end.into(),
        y2: track_y.into(),
        stroke: style.track.into(),
        stroke_width: layout.track_width.into(),
        stroke_cap: style.track_cap.into(),
        zindex: Some(0),
    };

    let handles = SceneSymbolMark {
        name: format!("{id}_handles"),
        len: 2,
        shape: style.handle_shape,
        x: ScalarOrArray::Array(vec![start, end]),
        y: track_y.into(),
        size: SceneSymbolMark::size_for_radius(layout.handle_radius).into(),
        fill: style.handle_fill.into(),
        stroke: style.handle_stroke.into(),
        stroke_width: Some(layout.handle_stroke_width),
        zindex: Some(2),
    };

    let labels = SceneTextMark {
        name: format!("{id}_labels"),
        len: 2,
        text: ScalarOrArray::Array(vec![String::new(), String::new()]),
        x: ScalarOrArray::Array(vec![start, end]),
        y: layout.label_y().into(),
        align: ScalarOrArray::Array(vec![TextAlignSpec::Left, TextAlignSpec::Right]),
        baseline: TextBaselineSpec::Alphabetic.into(),
        color: style.label.into(),
        font: layout.font.clone().into(),
        font_size: layout.font_size.into(),
        zindex: Some(1),
    };

    SliderMarks {
        track,
        handles,
        labels,
    }
}
