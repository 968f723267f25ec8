//! Chart Component
//!
//! Pie, donut, bar and line charts drawn on an HTML5 Canvas from a
//! [`ChartSpec`]. The component only draws; all grouping happens in the
//! `vizboard` pipeline.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use vizboard::pipeline::{palette_color, ChartKind, ChartSpec};

const WIDTH: u32 = 600;
const HEIGHT: u32 = 360;

/// Stroke of the likelihood line
const LINE_COLOR: &str = "#8884d8";
const GRID_COLOR: &str = "#e5e7eb";
const AXIS_TEXT: &str = "#6b7280";
const LABEL_CHARS: usize = 12;

/// A titled card holding one chart
#[component]
pub fn ChartCard(#[prop(into)] spec: Signal<Option<ChartSpec>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the selection produces new data
    create_effect(move |_| {
        let spec = spec.get();
        if let (Some(canvas), Some(spec)) = (canvas_ref.get(), spec) {
            draw_chart(&canvas, &spec);
        }
    });

    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <h3 class="text-lg font-semibold mb-3">
                {move || spec.with(|s| s.as_ref().map(|s| s.title.clone()).unwrap_or_default())}
            </h3>
            <canvas
                node_ref=canvas_ref
                width=WIDTH.to_string()
                height=HEIGHT.to_string()
                class="chart-canvas"
            />
            <ChartLegend spec=spec />
        </div>
    }
}

/// Legend for the categorical charts; the line chart has none
#[component]
fn ChartLegend(spec: Signal<Option<ChartSpec>>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-3 mt-3 max-h-24 overflow-y-auto">
            {move || {
                spec.with(|spec| match spec {
                    Some(spec) if spec.kind != ChartKind::Line => spec
                        .data
                        .pairs()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, (label, value))| {
                            let color = palette_color(idx);
                            let text = format!("{} ({})", display_label(label), value);
                            view! {
                                <div class="flex items-center space-x-1 text-xs text-gray-600">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", color)
                                    />
                                    <span>{text}</span>
                                </div>
                            }
                        })
                        .collect_view(),
                    _ => view! {}.into_view(),
                })
            }}
        </div>
    }
}

/// Draw a chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, spec: &ChartSpec) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let pairs = spec.data.pairs();
    if pairs.is_empty() {
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No data", width / 2.0, height / 2.0);
        return;
    }

    match spec.kind {
        ChartKind::Pie => draw_pie(&ctx, &pairs, width, height, 0.0),
        ChartKind::Donut => draw_pie(&ctx, &pairs, width, height, 0.55),
        ChartKind::Bar => draw_bars(&ctx, &pairs, width, height),
        ChartKind::Line => draw_line(&ctx, &pairs, width, height),
    }
}

/// Pie, or donut when `hole` (fraction of the radius) is non-zero
fn draw_pie(
    ctx: &CanvasRenderingContext2d,
    pairs: &[(&str, f64)],
    width: f64,
    height: f64,
    hole: f64,
) {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (height / 2.0) - 20.0;
    let values: Vec<f64> = pairs.iter().map(|(_, v)| *v).collect();

    for (idx, (start, end)) in slice_angles(&values).into_iter().enumerate() {
        ctx.set_fill_style(&palette_color(idx).into());
        ctx.begin_path();
        if hole > 0.0 {
            let _ = ctx.arc(cx, cy, radius, start, end);
            let _ = ctx.arc_with_anticlockwise(cx, cy, radius * hole, end, start, true);
        } else {
            ctx.move_to(cx, cy);
            let _ = ctx.arc(cx, cy, radius, start, end);
        }
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style(&"#ffffff".into());
        ctx.set_line_width(1.0);
        ctx.stroke();
    }
}

fn draw_bars(ctx: &CanvasRenderingContext2d, pairs: &[(&str, f64)], width: f64, height: f64) {
    let (left, right, top, bottom) = (50.0, 10.0, 10.0, 70.0);
    let plot_w = width - left - right;
    let plot_h = height - top - bottom;

    let max = nice_ceiling(pairs.iter().map(|(_, v)| *v).fold(0.0, f64::max));
    draw_grid(ctx, left, top, plot_w, plot_h, max);

    let slot = plot_w / pairs.len() as f64;
    let bar_w = (slot * 0.7).max(1.0);

    for (idx, (label, value)) in pairs.iter().enumerate() {
        let bar_h = value / max * plot_h;
        let x = left + idx as f64 * slot + (slot - bar_w) / 2.0;
        ctx.set_fill_style(&palette_color(idx).into());
        ctx.fill_rect(x, top + plot_h - bar_h, bar_w, bar_h);

        // Skip labels that would overlap
        if slot >= 14.0 {
            draw_slanted_label(ctx, &display_label(label), x + bar_w / 2.0, top + plot_h + 8.0);
        }
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, pairs: &[(&str, f64)], width: f64, height: f64) {
    let (left, right, top, bottom) = (50.0, 20.0, 10.0, 70.0);
    let plot_w = width - left - right;
    let plot_h = height - top - bottom;

    let max = nice_ceiling(pairs.iter().map(|(_, v)| *v).fold(0.0, f64::max));
    draw_grid(ctx, left, top, plot_w, plot_h, max);

    let step = if pairs.len() > 1 {
        plot_w / (pairs.len() - 1) as f64
    } else {
        0.0
    };
    let point = |idx: usize, value: f64| {
        let x = if pairs.len() > 1 {
            left + idx as f64 * step
        } else {
            left + plot_w / 2.0
        };
        (x, top + plot_h - value / max * plot_h)
    };

    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (idx, (_, value)) in pairs.iter().enumerate() {
        let (x, y) = point(idx, *value);
        if idx == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&LINE_COLOR.into());
    for (idx, (_, value)) in pairs.iter().enumerate() {
        let (x, y) = point(idx, *value);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, PI * 2.0);
        ctx.fill();
    }

    // At most ~20 labels along the x axis
    let every = (pairs.len() / 20).max(1);
    for (idx, (label, _)) in pairs.iter().enumerate().step_by(every) {
        let (x, _) = point(idx, 0.0);
        draw_slanted_label(ctx, &display_label(label), x, top + plot_h + 8.0);
    }
}

/// Dashed horizontal grid with y-axis values
fn draw_grid(ctx: &CanvasRenderingContext2d, left: f64, top: f64, plot_w: f64, plot_h: f64, max: f64) {
    let dash = js_sys::Array::of2(&JsValue::from_f64(3.0), &JsValue::from_f64(3.0));
    let _ = ctx.set_line_dash(&dash);
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("right");
    ctx.set_fill_style(&AXIS_TEXT.into());

    for i in 0..=4 {
        let y = top + (i as f64 / 4.0) * plot_h;
        ctx.begin_path();
        ctx.move_to(left, y);
        ctx.line_to(left + plot_w, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * max;
        let _ = ctx.fill_text(&format_tick(value), left - 6.0, y + 4.0);
    }

    let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_slanted_label(ctx: &CanvasRenderingContext2d, text: &str, x: f64, y: f64) {
    ctx.save();
    let _ = ctx.translate(x, y);
    let _ = ctx.rotate(-PI / 4.0);
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("10px sans-serif");
    ctx.set_text_align("right");
    let _ = ctx.fill_text(text, 0.0, 0.0);
    ctx.restore();
}

/// Start/end angles of each slice, clockwise from twelve o'clock
fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|value| {
            let end = start + value / total * PI * 2.0;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect()
}

/// Round an axis maximum up to 1, 2 or 5 times a power of ten
fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let fraction = max / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Axis and legend text; the missing-value group is shown as "(none)"
fn display_label(label: &str) -> String {
    if label.is_empty() {
        "(none)".to_string()
    } else {
        truncate_label(label, LABEL_CHARS)
    }
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let head: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
