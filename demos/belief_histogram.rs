//! Render a belief histogram for a toy population and save it as PNG.
//!
//! Run: RUST_LOG=debug cargo run --example belief_histogram -- [config.yaml] [out.png]

use histogram_widget::binning::{belief_counts, integer_edges};
use histogram_widget::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => WidgetConfig::load(path)?,
        None => WidgetConfig {
            series_label: "Emotivist beliefs".to_string(),
            ..WidgetConfig::default()
        },
    };
    let out = args.next().unwrap_or_else(|| "belief_histogram.png".to_string());

    let mut page = Page::with_anchor(&config.anchor_id);
    let mut widget = HistogramWidget::from_config(&mut page, BarChartFactory, &config)?;

    // A few "steps" of a population drifting towards belief B
    let steps: [&[&str]; 3] = [
        &["A", "A", "B", "C", "C", "A", "B"],
        &["A", "B", "B", "C", "B", "A", "B"],
        &["B", "B", "B", "C", "B", "B", "B"],
    ];
    let edges = integer_edges(config.bins.len() + 1);
    for (step, population) in steps.iter().enumerate() {
        let counts = belief_counts(population.iter(), &edges)?;
        widget.render(counts.iter().copied().enumerate())?;
        println!("step {step}: {:?}", widget.values());
    }

    PngEncoder::write_to_file(&widget.canvas().screenshot()?, &out)?;
    println!("{}", page.to_html());
    println!("wrote {out}");
    Ok(())
}
