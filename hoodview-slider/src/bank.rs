use hoodview_data::dataset::Dataset;
use hoodview_data::filter::{FieldRange, FilterCriteria};
use hoodview_scenegraph::marks::group::SceneGroup;
use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::SliderError;
use crate::layout::SliderLayout;
use crate::slider::{ChangeListener, Handle, MountPoint, RangeSlider, SliderChange, SliderId};

/// What to do with a field whose observed extent is narrower than the
/// minimum handle separation (for example a column where every value is equal)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateDomainPolicy {
    /// Use `[lo, lo + separation]` so the slider can still be shown
    #[default]
    Widen,
    /// Leave the field without a slider
    Omit,
}

/// A numeric field paired with the mount point its slider attaches to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSlider {
    pub field: String,
    pub mount: MountPoint,
}

impl FieldSlider {
    pub fn new(field: impl Into<String>, mount: MountPoint) -> Self {
        Self {
            field: field.into(),
            mount,
        }
    }
}

/// A field that did not get a slider, and why
#[derive(Debug, Clone, PartialEq)]
pub struct OmittedField {
    pub field: String,
    pub reason: SliderError,
}

/// Resolve the domain of a slider from the observed extent of its field
pub fn domain_for_extent(
    field: &str,
    extent: Option<(f64, f64)>,
    policy: DegenerateDomainPolicy,
    min_separation: f64,
) -> Result<Domain, SliderError> {
    let Some((lo, hi)) = extent else {
        return Err(SliderError::EmptyExtent {
            field: field.to_string(),
        });
    };
    let domain = if hi - lo >= min_separation {
        Domain::new(lo, hi)?
    } else {
        match policy {
            DegenerateDomainPolicy::Widen => Domain::new(lo, lo + min_separation)?,
            DegenerateDomainPolicy::Omit => return Err(SliderError::InvalidDomain { lo, hi }),
        }
    };
    if !domain.supports_separation(min_separation) {
        return Err(SliderError::InvalidDomain {
            lo: domain.lo(),
            hi: domain.hi(),
        });
    }
    Ok(domain)
}

/// One slider per numeric field, built from a dataset.
///
/// The bank routes pointer input to whichever slider grabbed it and turns the
/// current slider states into a [`FilterCriteria`] snapshot.
#[derive(Debug, Clone)]
pub struct SliderBank {
    sliders: Vec<RangeSlider>,
    omitted: Vec<OmittedField>,
    active: Option<usize>,
}

impl SliderBank {
    /// Build a slider for each field, in order.
    ///
    /// A field that cannot get a slider is recorded in [`SliderBank::omitted`]
    /// and does not affect the others. Invalid layout or separation fail the
    /// whole bank since they would fail every slider.
    #[tracing::instrument(skip_all, fields(records = dataset.len(), field_count = fields.len()))]
    pub fn build(
        dataset: &Dataset,
        fields: &[FieldSlider],
        layout: &SliderLayout,
        policy: DegenerateDomainPolicy,
        min_separation: f64,
    ) -> Result<Self, SliderError> {
        if !min_separation.is_finite() || min_separation <= 0.0 {
            return Err(SliderError::InvalidSeparation(min_separation));
        }
        layout.resolve()?;

        let mut sliders = Vec::with_capacity(fields.len());
        let mut omitted = Vec::new();
        for spec in fields {
            let slider = domain_for_extent(
                &spec.field,
                dataset.extent(&spec.field),
                policy,
                min_separation,
            )
            .and_then(|domain| {
                RangeSlider::with_layout(
                    spec.mount.clone(),
                    SliderId::new(spec.field.clone()),
                    domain,
                    layout,
                    min_separation,
                )
            });
            match slider {
                Ok(slider) => sliders.push(slider),
                Err(reason) => {
                    tracing::warn!(field = %spec.field, %reason, "Omitting slider");
                    omitted.push(OmittedField {
                        field: spec.field.clone(),
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            sliders = sliders.len(),
            omitted = omitted.len(),
            "Built slider bank"
        );
        Ok(Self {
            sliders,
            omitted,
            active: None,
        })
    }

    pub fn sliders(&self) -> &[RangeSlider] {
        &self.sliders
    }

    pub fn omitted(&self) -> &[OmittedField] {
        &self.omitted
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&RangeSlider> {
        self.sliders.iter().find(|s| s.id().as_str() == field)
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut RangeSlider> {
        self.sliders.iter_mut().find(|s| s.id().as_str() == field)
    }

    /// Register the same listener on every slider
    pub fn subscribe_all(&mut self, listener: ChangeListener) {
        for slider in &mut self.sliders {
            slider.subscribe(listener.clone());
        }
    }

    /// The slider currently being dragged, if any
    pub fn active(&self) -> Option<&RangeSlider> {
        self.active.and_then(|index| self.sliders.get(index))
    }

    /// Immutable filter snapshot of the current slider states
    pub fn snapshot(&self) -> FilterCriteria {
        FilterCriteria::new().with_ranges(self.sliders.iter().map(|slider| {
            let state = slider.state();
            (
                slider.id().to_string(),
                FieldRange::new(state.min, state.max, slider.is_narrowed()),
            )
        }))
    }

    /// Offer a window-space pointer press to each slider until one takes it
    pub fn pointer_down(&mut self, position: [f32; 2]) -> Option<(SliderId, Handle)> {
        self.pointer_up();
        for (index, slider) in self.sliders.iter_mut().enumerate() {
            let local = slider.to_local(position);
            if let Some(handle) = slider.pointer_down(local) {
                self.active = Some(index);
                return Some((slider.id().clone(), handle));
            }
        }
        None
    }

    /// Forward a window-space pointer move to the slider being dragged
    pub fn pointer_move(&mut self, position: [f32; 2]) -> Option<SliderChange> {
        let slider = self.sliders.get_mut(self.active?)?;
        let local = slider.to_local(position);
        slider.pointer_move(local)
    }

    /// Release the active drag; returns true if one was in progress
    pub fn pointer_up(&mut self) -> bool {
        match self.active.take() {
            Some(index) => self
                .sliders
                .get_mut(index)
                .and_then(|slider| slider.pointer_up())
                .is_some(),
            None => false,
        }
    }

    /// Return every slider to its full domain
    pub fn reset(&mut self) -> Vec<SliderChange> {
        self.sliders
            .iter_mut()
            .filter_map(|slider| slider.reset())
            .collect()
    }

    pub fn scene_groups(&self) -> Vec<SceneGroup> {
        self.sliders.iter().map(|s| s.scene_group()).collect()
    }
}
