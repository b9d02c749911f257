//! End-to-end widget scenarios against the bundled raster bar chart.
//!
//! Run: cargo test --test widget_scenarios_test

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;

use histogram_widget::binning::{belief_counts, integer_edges};
use histogram_widget::prelude::*;
use proptest::prelude::*;

fn belief_widget(page: &mut Page) -> HistogramWidget<BarChartFactory> {
    let mut anchor = page.anchor(DEFAULT_ANCHOR_ID).unwrap();
    HistogramWidget::new(&mut anchor, BarChartFactory, ["a", "b", "c"], 200, 150, "Belief").unwrap()
}

// ============================================================================
// Scenario walk-through
// ============================================================================

#[test]
fn scenario_construct_render_partial_reset() {
    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let mut widget = belief_widget(&mut page);

    // 1. Fresh widget
    assert_eq!(widget.values(), &[0.0, 0.0, 0.0]);

    // 2. Full render
    widget.render(BTreeMap::from([(0, 5.0), (1, 3.0), (2, 9.0)])).unwrap();
    assert_eq!(widget.values(), &[5.0, 3.0, 9.0]);

    // 3. Partial render keeps untouched bins
    widget.render(BTreeMap::from([(1, 7.0)])).unwrap();
    assert_eq!(widget.values(), &[5.0, 7.0, 9.0]);

    // 4. Reset
    widget.reset().unwrap();
    assert_eq!(widget.values(), &[0.0, 0.0, 0.0]);
    assert_eq!(widget.labels(), &["a", "b", "c"]);
}

#[test]
fn canvas_is_mounted_right_after_anchor() {
    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    page.push_container("footer");
    let widget = belief_widget(&mut page);

    let html = page.to_html();
    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(lines[0], "<div id=\"elements\"></div>");
    assert_eq!(lines[1], widget.canvas().to_html());
    assert_eq!(lines[2], "<div id=\"footer\"></div>");
    assert!(lines[1].contains("border:1px dotted"));
}

#[test]
fn missing_anchor_fails_construction() {
    let mut page = Page::with_anchor("sidebar");
    assert!(matches!(
        page.anchor(DEFAULT_ANCHOR_ID),
        Err(Error::AnchorNotFound(_))
    ));
}

#[test]
fn render_redraws_in_place() {
    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let mut widget = belief_widget(&mut page);
    let fill = widget.chart().data().datasets[0].style.fill_color;

    assert_eq!(widget.canvas().snapshot().unwrap().count_pixels(fill), 0);

    widget.render([(0, 5.0), (1, 3.0), (2, 9.0)]).unwrap();
    assert_eq!(widget.chart().frames(), 2);
    assert!(widget.canvas().snapshot().unwrap().count_pixels(fill) > 0);

    // The page sees the same pixels as the widget
    let mounted = page.canvases().next().unwrap();
    assert_eq!(mounted.snapshot().unwrap(), widget.canvas().snapshot().unwrap());
}

#[test]
fn reset_matches_fresh_widget_pixels() {
    let mut fresh_page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let fresh = belief_widget(&mut fresh_page);

    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let mut widget = belief_widget(&mut page);
    widget.render([(0, 5.0), (1, 3.0), (2, 9.0)]).unwrap();
    widget.reset().unwrap();

    assert_eq!(widget.chart().frames(), 1);
    assert_eq!(
        widget.canvas().snapshot().unwrap(),
        fresh.canvas().snapshot().unwrap()
    );
}

#[test]
fn render_after_reset_matches_fresh_render() {
    let mut fresh_page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let mut fresh = belief_widget(&mut fresh_page);
    fresh.render([(1, 4.0)]).unwrap();

    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let mut widget = belief_widget(&mut page);
    widget.render([(0, 8.0), (2, 2.0)]).unwrap();
    widget.reset().unwrap();
    widget.render([(1, 4.0)]).unwrap();

    assert_eq!(widget.values(), fresh.values());
    assert_eq!(
        widget.canvas().snapshot().unwrap(),
        fresh.canvas().snapshot().unwrap()
    );
}

#[test]
fn out_of_range_render_is_rejected() {
    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let mut widget = belief_widget(&mut page);
    widget.render([(0, 1.0)]).unwrap();
    let before = widget.canvas().snapshot().unwrap();

    let err = widget.render([(5, 1.0)]).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 5, len: 3 }));
    assert_eq!(widget.values(), &[1.0, 0.0, 0.0]);
    assert_eq!(widget.canvas().snapshot().unwrap(), before);
}

#[test]
fn hover_highlights_bar_under_pointer() {
    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let mut widget = belief_widget(&mut page);
    widget.render([(0, 5.0), (1, 3.0), (2, 9.0)]).unwrap();

    let bar = widget.chart().bars()[2].rect;
    let hit = widget
        .hover(bar.x + bar.width / 2.0, bar.y + bar.height / 2.0)
        .unwrap();
    assert_eq!(hit, Some(2));

    let highlight = widget.chart().data().datasets[0].style.highlight_fill;
    assert!(widget.canvas().snapshot().unwrap().count_pixels(highlight) > 0);

    widget.clear_hover().unwrap();
    assert_eq!(widget.canvas().snapshot().unwrap().count_pixels(highlight), 0);
    assert_eq!(widget.values(), &[5.0, 3.0, 9.0]);
}

#[test]
fn belief_counts_feed_the_widget() {
    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let mut widget = belief_widget(&mut page);

    let population = ["A", "A", "B", "C", "C", "C"];
    let counts = belief_counts(population, &integer_edges(4)).unwrap();
    widget.render(counts.iter().copied().enumerate()).unwrap();

    assert_eq!(widget.values(), &[2.0, 1.0, 3.0]);
}

#[test]
fn widget_from_yaml_config() {
    let config = WidgetConfig::from_yaml_str(
        "bins: [A, B, C]\nwidth: 120\nheight: 90\nseries_label: Virtuous beliefs\n",
    )
    .unwrap();
    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let widget = HistogramWidget::from_config(&mut page, BarChartFactory, &config).unwrap();

    assert_eq!(widget.series_label(), "Virtuous beliefs");
    assert_eq!((widget.canvas().width(), widget.canvas().height()), (120, 90));
}

#[test]
fn png_export_after_render() {
    let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
    let mut widget = belief_widget(&mut page);
    widget.render([(2, 3.0)]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beliefs.png");
    let shot = widget.canvas().screenshot().unwrap();
    PngEncoder::write_to_file(&shot, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    assert_eq!((shot.width(), shot.height()), (202, 152));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Construction always yields one zero per bin.
    #[test]
    fn prop_fresh_widget_is_zero(bins in 1usize..12, width in 20u32..120, height in 20u32..120) {
        let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
        let labels: Vec<String> = (0..bins).map(|i| i.to_string()).collect();
        let widget = HistogramWidget::new(
            &mut page.anchor(DEFAULT_ANCHOR_ID).unwrap(),
            BarChartFactory,
            labels,
            width,
            height,
            "p",
        ).unwrap();

        let zeros = vec![0.0; bins];
        prop_assert_eq!(widget.values(), zeros.as_slice());
    }

    /// Partial renders only touch the supplied bins and never change length.
    #[test]
    fn prop_partial_render_touches_only_given_bins(
        first in prop::collection::vec(0.0f64..1000.0, 3),
        updates in prop::collection::btree_map(0usize..3, 0.0f64..1000.0, 0..3)
    ) {
        let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
        let mut widget = belief_widget(&mut page);
        widget.render(first.iter().copied().enumerate()).unwrap();
        widget.render(updates.clone()).unwrap();

        prop_assert_eq!(widget.values().len(), 3);
        for (i, &value) in widget.values().iter().enumerate() {
            let expected = updates.get(&i).copied().unwrap_or(first[i]);
            prop_assert_eq!(value, expected);
        }
    }

    /// Reset restores zeros whatever was rendered before.
    #[test]
    fn prop_reset_restores_zero(values in prop::collection::vec(-50.0f64..50.0, 3)) {
        let mut page = Page::with_anchor(DEFAULT_ANCHOR_ID);
        let mut widget = belief_widget(&mut page);
        widget.render(values.iter().copied().enumerate()).unwrap();
        widget.reset().unwrap();
        widget.reset().unwrap();

        prop_assert_eq!(widget.values(), &[0.0, 0.0, 0.0]);
    }
}
