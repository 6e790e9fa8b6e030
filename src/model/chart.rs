use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{NapchartError, NapchartResult};
use crate::wire::{ChartData, ChartDocument, ColorTagEntry, LaneConfig};

use super::Element;

/// The eight palette colors every fresh chart starts with (all untagged).
pub const COLOR_PALETTE: [&str; 8] = [
    "red", "blue", "brown", "green", "gray", "yellow", "purple", "pink",
];

/// Visual layout of the chart on napchart.com.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartShape {
    #[default]
    Circle,
    Wide,
    Line,
}

/// A full day-schedule chart: lanes, elements, and the color-tag legend.
///
/// Elements and lane configuration keep insertion order, which is the order
/// they serialize in. All mutation is explicit; the chart holds no shared or
/// background state.
#[derive(Debug, Clone)]
pub struct Chart {
    pub name: String,
    pub description: String,
    pub shape: ChartShape,
    lanes_count: u32,
    lanes_config: IndexMap<String, LaneConfig>,
    elements: IndexMap<String, Element>,
    color_tags: IndexMap<String, String>,
}

impl Chart {
    /// Creates a chart with `lanes_count` unlocked lanes, no elements, and
    /// every palette color untagged.
    #[must_use]
    pub fn new(lanes_count: u32) -> Self {
        let lanes_config = (1..=lanes_count)
            .map(|lane| (lane.to_string(), LaneConfig { locked: false }))
            .collect();
        let color_tags = COLOR_PALETTE
            .iter()
            .map(|color| ((*color).to_owned(), String::new()))
            .collect();
        Self {
            name: "Sample Chart".to_owned(),
            description: "Sample Description".to_owned(),
            shape: ChartShape::Circle,
            lanes_count,
            lanes_config,
            elements: IndexMap::new(),
            color_tags,
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: ChartShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn lanes_count(&self) -> u32 {
        self.lanes_count
    }

    /// Lane configuration keyed by one-based lane number as a string.
    #[must_use]
    pub fn lanes_config(&self) -> &IndexMap<String, LaneConfig> {
        &self.lanes_config
    }

    /// Elements keyed by id, in insertion order.
    #[must_use]
    pub fn elements(&self) -> &IndexMap<String, Element> {
        &self.elements
    }

    /// Inserts an element, replacing any existing element with the same id.
    /// The element's lane is not checked against `lanes_count`.
    pub fn add_element(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    /// Removes and returns the element with the given id.
    pub fn remove_element(&mut self, id: &str) -> NapchartResult<Element> {
        self.elements
            .shift_remove(id)
            .ok_or_else(|| NapchartError::ElementNotFound(id.to_owned()))
    }

    /// Locks lane `lane` (one-based).
    pub fn lock_lane(&mut self, lane: u32) -> NapchartResult<()> {
        self.set_lane_locked(lane, true)
    }

    /// Unlocks lane `lane` (one-based).
    pub fn unlock_lane(&mut self, lane: u32) -> NapchartResult<()> {
        self.set_lane_locked(lane, false)
    }

    pub fn lock_all_lanes(&mut self) {
        for config in self.lanes_config.values_mut() {
            config.locked = true;
        }
    }

    pub fn unlock_all_lanes(&mut self) {
        for config in self.lanes_config.values_mut() {
            config.locked = false;
        }
    }

    fn set_lane_locked(&mut self, lane: u32, locked: bool) -> NapchartResult<()> {
        let config = self
            .lanes_config
            .get_mut(lane.to_string().as_str())
            .ok_or_else(|| NapchartError::LaneNotFound(lane.to_string()))?;
        config.locked = locked;
        Ok(())
    }

    /// Sets the legend tag for a palette color. An empty tag marks the color
    /// untagged again. Colors outside [`COLOR_PALETTE`] are accepted, since
    /// imported documents may carry them.
    pub fn set_color_tag(&mut self, color: impl Into<String>, tag: impl Into<String>) {
        self.color_tags.insert(color.into(), tag.into());
    }

    #[must_use]
    pub fn color_tag(&self, color: &str) -> Option<&str> {
        self.color_tags.get(color).map(String::as_str)
    }

    #[must_use]
    pub fn color_tags(&self) -> &IndexMap<String, String> {
        &self.color_tags
    }

    /// Builds the wire document for this chart.
    ///
    /// Snapshots always carry the circle shape on the wire, whatever shape
    /// the model stores; the rest of the document follows the stored state
    /// in mapping iteration order. Only non-empty color tags are emitted.
    #[must_use]
    pub fn to_document(&self) -> ChartDocument {
        let elements = self.elements.values().map(Element::to_wire).collect();
        let color_tags = self
            .color_tags
            .iter()
            .filter(|(_, tag)| !tag.is_empty())
            .map(|(color, tag)| ColorTagEntry {
                color: color.clone(),
                tag: tag.clone(),
            })
            .collect();
        ChartDocument {
            title: self.name.clone(),
            description: self.description.clone(),
            chart_data: ChartData {
                lanes: self.lanes_count,
                shape: ChartShape::Circle,
                elements,
                color_tags,
                lanes_config: self.lanes_config.clone(),
            },
        }
    }

    /// Reconstructs a chart from a wire document.
    ///
    /// Elements are assigned fresh sequential ids (`"1"`, `"2"`, ...) in
    /// document order. A locked lane key outside `1..=lanes` fails with
    /// [`NapchartError::LaneNotFound`].
    pub fn from_document(document: &ChartDocument) -> NapchartResult<Self> {
        let mut chart = Chart::new(document.chart_data.lanes)
            .with_shape(document.chart_data.shape)
            .with_name(document.title.clone())
            .with_description(document.description.clone());

        for (key, config) in &document.chart_data.lanes_config {
            if config.locked {
                let lane: u32 = key
                    .parse()
                    .map_err(|_| NapchartError::LaneNotFound(key.clone()))?;
                chart.lock_lane(lane)?;
            }
        }

        for (index, wire) in document.chart_data.elements.iter().enumerate() {
            let element = Element::new(
                (index + 1).to_string(),
                wire.color.clone(),
                wire.start,
                wire.end,
                wire.lane + 1,
            )
            .with_text(wire.text.clone());
            chart.add_element(element);
        }

        for entry in &document.chart_data.color_tags {
            chart.set_color_tag(entry.color.clone(), entry.tag.clone());
        }

        Ok(chart)
    }
}
