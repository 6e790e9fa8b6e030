use napchart_rs::wire::ChartDocument;
use napchart_rs::{Chart, ChartShape, Element, NapchartError};
use serde_json::json;

fn sample_chart() -> Chart {
    let mut chart = Chart::new(2)
        .with_shape(ChartShape::Wide)
        .with_name("Biphasic")
        .with_description("core plus siesta");
    chart.add_element(Element::new("1", "blue", 1410, 390, 1).with_text("core"));
    chart.add_element(Element::new("2", "yellow", 780, 810, 2).with_text("siesta"));
    chart.lock_lane(2).expect("lane 2 exists");
    chart.set_color_tag("blue", "sleep");
    chart
}

#[test]
fn document_carries_exact_wire_field_names() {
    let value = serde_json::to_value(sample_chart().to_document()).expect("serializes");

    assert_eq!(value["title"], "Biphasic");
    assert_eq!(value["description"], "core plus siesta");
    assert_eq!(value["chartData"]["lanes"], 2);
    assert_eq!(value["chartData"]["lanesConfig"]["1"]["locked"], false);
    assert_eq!(value["chartData"]["lanesConfig"]["2"]["locked"], true);

    let elements = value["chartData"]["elements"]
        .as_array()
        .expect("elements array");
    assert_eq!(elements.len(), 2);
    assert_eq!(
        elements[0],
        json!({"color": "blue", "start": 1410, "end": 390, "lane": 0, "text": "core"})
    );
    assert_eq!(elements[1]["lane"], 1);
}

#[test]
fn document_shape_is_always_circle_on_the_wire() {
    // Stored shape is Wide; the snapshot wire format still says circle.
    let value = serde_json::to_value(sample_chart().to_document()).expect("serializes");
    assert_eq!(value["chartData"]["shape"], "circle");
}

#[test]
fn only_non_empty_color_tags_are_serialized() {
    let value = serde_json::to_value(sample_chart().to_document()).expect("serializes");
    let tags = value["chartData"]["colorTags"]
        .as_array()
        .expect("colorTags array");
    assert_eq!(tags, &[json!({"color": "blue", "tag": "sleep"})]);
}

#[test]
fn from_document_reconstructs_elements_with_sequential_ids() {
    let document: ChartDocument = serde_json::from_value(json!({
        "title": "Imported",
        "description": "from the service",
        "chartData": {
            "lanes": 2,
            "shape": "circle",
            "elements": [
                {"color": "blue", "start": 1410, "end": 390, "lane": 0, "text": "core"},
                {"color": "yellow", "start": 780, "end": 810, "lane": 1, "text": "siesta"},
            ],
            "colorTags": [{"color": "blue", "tag": "sleep"}],
            "lanesConfig": {
                "1": {"locked": false},
                "2": {"locked": true},
            },
        },
    }))
    .expect("valid document");

    let chart = Chart::from_document(&document).expect("reconstructs");
    assert_eq!(chart.name, "Imported");
    assert_eq!(chart.lanes_count(), 2);
    assert!(!chart.lanes_config()["1"].locked);
    assert!(chart.lanes_config()["2"].locked);

    let ids: Vec<&String> = chart.elements().keys().collect();
    assert_eq!(ids, ["1", "2"]);
    // Wire lanes are zero-based; the model keeps them zero-based too, via
    // the one-based constructor round trip.
    assert_eq!(chart.elements()["1"].lane, 0);
    assert_eq!(chart.elements()["2"].lane, 1);
    assert_eq!(chart.elements()["2"].text, "siesta");

    assert_eq!(chart.color_tag("blue"), Some("sleep"));
    for color in ["red", "brown", "green", "gray", "yellow", "purple", "pink"] {
        assert_eq!(chart.color_tag(color), Some(""));
    }
}

#[test]
fn from_document_rejects_locked_lane_outside_lane_set() {
    let document: ChartDocument = serde_json::from_value(json!({
        "title": "Broken",
        "description": "",
        "chartData": {
            "lanes": 3,
            "shape": "circle",
            "elements": [],
            "colorTags": [],
            "lanesConfig": {"5": {"locked": true}},
        },
    }))
    .expect("valid document");

    let err = Chart::from_document(&document).expect_err("lane 5 absent");
    assert!(matches!(err, NapchartError::LaneNotFound(lane) if lane == "5"));
}

#[test]
fn round_trip_preserves_chart_state() {
    let chart = sample_chart();
    let rebuilt = Chart::from_document(&chart.to_document()).expect("round trips");

    assert_eq!(rebuilt.name, chart.name);
    assert_eq!(rebuilt.description, chart.description);
    assert_eq!(rebuilt.lanes_count(), chart.lanes_count());
    assert_eq!(rebuilt.lanes_config(), chart.lanes_config());
    assert_eq!(rebuilt.color_tags(), chart.color_tags());
    // Shape collapses to the wire constant.
    assert_eq!(rebuilt.shape, ChartShape::Circle);

    let original: Vec<_> = chart.elements().values().collect();
    let reconstructed: Vec<_> = rebuilt.elements().values().collect();
    assert_eq!(original.len(), reconstructed.len());
    for (a, b) in original.iter().zip(&reconstructed) {
        assert_eq!(a.color, b.color);
        assert_eq!(a.start, b.start);
        assert_eq!(a.end, b.end);
        assert_eq!(a.lane, b.lane);
        assert_eq!(a.text, b.text);
    }
}

#[test]
fn wire_element_text_defaults_to_empty_when_missing() {
    let document: ChartDocument = serde_json::from_value(json!({
        "title": "",
        "description": "",
        "chartData": {
            "lanes": 1,
            "shape": "line",
            "elements": [{"color": "gray", "start": 0, "end": 60, "lane": 0}],
            "colorTags": [],
            "lanesConfig": {"1": {"locked": false}},
        },
    }))
    .expect("valid document");

    let chart = Chart::from_document(&document).expect("reconstructs");
    assert_eq!(chart.shape, ChartShape::Line);
    assert_eq!(chart.elements()["1"].text, "");
}
