extern crate plotters;
use plotters::prelude::*;

extern crate meander;
use meander::{Bezier, Point2};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // synthesize a control polygon between two anchors; the seed is fixed
    // so the rendering is reproducible
    let mut rng = StdRng::seed_from_u64(2024);
    let start = Point2::new(0f64, 0f64);
    let end = Point2::new(8f64, 5f64);
    let curve = Bezier::scattered(&mut rng, start, end, 0.35).expect("anchors are finite");

    // render the path of the curve at the default resolution
    let samples = curve.sample().expect("cubic degree cannot overflow");
    let bezier_graph: Vec<(f64, f64)> = samples.iter().map(|p| (p.x(), p.y())).collect();
    let cpoints: Vec<(f64, f64)> = curve
        .control_points()
        .iter()
        .map(|p| (p.x(), p.y()))
        .collect();

    let root = BitMapBackend::new("scattered_bezier.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    // setup the chart
    let mut chart = ChartBuilder::on(&root)
        .caption("Scattered Bezier Curve", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-3f64..11f64, -3f64..8f64)?;

    chart.configure_mesh().draw()?;

    // draw the randomized control polygon of B(t)
    chart.draw_series(PointSeries::of_element(
        cpoints,
        5,
        &BLUE,
        &|coord, size, style| {
            EmptyElement::at(coord)
                + Circle::new((0, 0), size, style)
                + Text::new(
                    format!("{:.2?}", coord),
                    (0, 15),
                    ("sans-serif", 15).into_font(),
                )
        },
    ))?;

    // draw the sampled curve itself
    chart.draw_series(LineSeries::new(bezier_graph, &RED))?;

    root.present()?;
    Ok(())
}
