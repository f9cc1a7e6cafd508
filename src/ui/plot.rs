use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::color::radar_accent;
use crate::data::metrics::ChartPoint;

/// Outermost ring of the radar, i.e. the top of the rating scale.
pub const RADAR_MAX: f64 = 5.0;

/// Label distance from the centre, in rating units.
const LABEL_RADIUS: f64 = RADAR_MAX + 0.9;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Angle of axis `i` out of `n`: the first axis points straight up and the
/// rest follow clockwise.
fn axis_angle(i: usize, n: usize) -> f64 {
    FRAC_PI_2 - TAU * i as f64 / n as f64
}

/// Cartesian vertices for `values` laid out on equally spaced axes.
pub fn radar_vertices(values: &[f64]) -> Vec<[f64; 2]> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let angle = axis_angle(i, n);
            [v * angle.cos(), v * angle.sin()]
        })
        .collect()
}

fn closed(mut vertices: Vec<[f64; 2]>) -> Vec<[f64; 2]> {
    if let Some(&first) = vertices.first() {
        vertices.push(first);
    }
    vertices
}

// ---------------------------------------------------------------------------
// Radar chart (detail view)
// ---------------------------------------------------------------------------

/// Render the per-skill radar chart.
pub fn radar_chart(ui: &mut Ui, points: &[ChartPoint], height: f32) {
    let n = points.len();
    let grid = Color32::from_gray(220);
    let accent = radar_accent();

    Plot::new("radar_chart")
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-LABEL_RADIUS - 1.5)
        .include_x(LABEL_RADIUS + 1.5)
        .include_y(-LABEL_RADIUS)
        .include_y(LABEL_RADIUS)
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            // Rings at every whole rating.
            for ring in 1..=RADAR_MAX as usize {
                let ring_points = closed(radar_vertices(&vec![ring as f64; n]));
                plot_ui.line(
                    Line::new(PlotPoints::from(ring_points))
                        .color(grid)
                        .width(1.0),
                );
            }

            // Spokes and labels.
            for (spoke, point) in radar_vertices(&vec![RADAR_MAX; n]).into_iter().zip(points) {
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[0.0, 0.0], spoke]))
                        .color(grid)
                        .width(1.0),
                );
                let scale = LABEL_RADIUS / RADAR_MAX;
                plot_ui.text(Text::new(
                    PlotPoint::new(spoke[0] * scale, spoke[1] * scale),
                    RichText::new(point.skill).strong(),
                ));
            }

            let values: Vec<f64> = points.iter().map(|p| f64::from(p.value)).collect();
            plot_ui.polygon(
                Polygon::new(PlotPoints::from(radar_vertices(&values)))
                    .name("Rating")
                    .fill_color(accent.gamma_multiply(0.5))
                    .stroke(Stroke::new(2.0, accent)),
            );
        });
}
