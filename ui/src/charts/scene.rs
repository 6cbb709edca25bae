//! Renderer-neutral chart scenes. Builders turn a small series into positioned
//! shapes; `view` renders them as live SVG nodes and `svg` serialises them for
//! export, so both outputs always agree.

use super::geometry::{
    self, arc_path, bar_layout, donut_path, gauge_fraction, gauge_sweep, slice_angles,
    stroke_arc_path, PlotArea, GAUGE_SPAN, GAUGE_START,
};
use crate::core::format::{format_percent, format_value};
use crate::data::{ChartId, ChartKind, Cohort, Datum, Gauge, Survey};

const INK: &str = "#3b3330";
const MUTED: &str = "#8a7f78";
const TRACK: &str = "#e9e2dc";
const SURFACE: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Path {
        d: String,
        fill: String,
        stroke: Option<(String, f64)>,
        evenodd: bool,
        round_caps: bool,
        datum: Option<usize>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        fill: String,
        datum: Option<usize>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        width: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: Anchor,
        size: f64,
        bold: bool,
        fill: String,
    },
}

impl Shape {
    pub fn datum(&self) -> Option<usize> {
        match self {
            Shape::Path { datum, .. } | Shape::Rect { datum, .. } => *datum,
            _ => None,
        }
    }
}

/// Hover target backing a shape's `datum` index.
#[derive(Debug, Clone, PartialEq)]
pub struct DatumInfo {
    pub label: String,
    pub value: f64,
    pub share: Option<f64>,
    pub tooltip: String,
}

impl DatumInfo {
    fn plain(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
            share: None,
            tooltip: format!("{label}: {}", format_value(value)),
        }
    }

    fn with_share(label: &str, value: f64, share: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
            share: Some(share),
            tooltip: format!(
                "{label}: {} ({})",
                format_value(value),
                format_percent(share)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
    pub data: Vec<DatumInfo>,
}

impl ChartScene {
    fn new(title: &str, width: f64, height: f64) -> Self {
        Self {
            title: title.to_string(),
            width,
            height,
            shapes: Vec::new(),
            data: Vec::new(),
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn tooltip(&self, datum: usize) -> Option<&str> {
        self.data.get(datum).map(|d| d.tooltip.as_str())
    }

    /// Scene for one cohort's chart, picking the builder from the chart kind.
    pub fn for_chart(chart: ChartId, cohort: Cohort, survey: &Survey, title: &str) -> Self {
        let data = survey.cohort(cohort);
        match chart.kind() {
            ChartKind::Pie => pie_scene(title, &data.series(chart), cohort),
            ChartKind::Donut => donut_scene(title, &data.series(chart), cohort),
            ChartKind::Bar => bar_scene(title, &data.series(chart), cohort),
            ChartKind::Gauge => gauge_scene(title, &data.age, cohort),
        }
    }

    /// Both cohorts in one chart. Only bar charts combine; other kinds return `None`
    /// and are shown side by side instead.
    pub fn combined(chart: ChartId, survey: &Survey, title: &str, names: [&str; 2]) -> Option<Self> {
        if chart.kind() != ChartKind::Bar {
            return None;
        }
        Some(grouped_bar_scene(
            title,
            &survey.physical.series(chart),
            &survey.audio.series(chart),
            names,
        ))
    }
}

fn legend_row(scene: &mut ChartScene, x: f64, y: f64, color: &str, text: String) {
    scene.shapes.push(Shape::Rect {
        x,
        y: y - 10.0,
        width: 12.0,
        height: 12.0,
        rx: 3.0,
        fill: color.to_string(),
        datum: None,
    });
    scene.shapes.push(Shape::Text {
        x: x + 20.0,
        y,
        text,
        anchor: Anchor::Start,
        size: 12.0,
        bold: false,
        fill: INK.to_string(),
    });
}

fn pie_like(title: &str, series: &[Datum], cohort: Cohort, inner: Option<f64>) -> ChartScene {
    const CX: f64 = 130.0;
    const CY: f64 = 110.0;
    const R: f64 = 92.0;
    let legend_top = 230.0;
    let mut scene = ChartScene::new(title, 260.0, legend_top + series.len() as f64 * 20.0 + 6.0);
    let palette = cohort.palette();
    let values: Vec<f64> = series.iter().map(|d| d.value).collect();
    let slices = slice_angles(&values);

    for slice in &slices {
        let datum = &series[slice.index];
        scene
            .data
            .push(DatumInfo::with_share(&datum.label, datum.value, slice.share));
    }
    if slices.is_empty() {
        scene.data = series.iter().map(|d| DatumInfo::plain(&d.label, d.value)).collect();
        scene.shapes.push(Shape::Circle {
            cx: CX,
            cy: CY,
            r: R,
            fill: TRACK.to_string(),
        });
    }

    for slice in slices.iter().filter(|s| s.sweep() > 0.0) {
        let d = match inner {
            Some(r_inner) => donut_path(CX, CY, R, r_inner, slice.start, slice.end),
            None => arc_path(CX, CY, R, slice.start, slice.end),
        };
        scene.shapes.push(Shape::Path {
            d,
            fill: palette[slice.index % palette.len()].to_string(),
            stroke: Some((SURFACE.to_string(), 2.0)),
            evenodd: inner.is_some(),
            round_caps: false,
            datum: Some(slice.index),
        });
    }

    if let (Some(_), Some(lead)) = (
        inner,
        slices
            .iter()
            .max_by(|a, b| a.share.total_cmp(&b.share)),
    ) {
        scene.shapes.push(Shape::Text {
            x: CX,
            y: CY + 4.0,
            text: format_percent(lead.share),
            anchor: Anchor::Middle,
            size: 26.0,
            bold: true,
            fill: INK.to_string(),
        });
        scene.shapes.push(Shape::Text {
            x: CX,
            y: CY + 24.0,
            text: series[lead.index].label.clone(),
            anchor: Anchor::Middle,
            size: 11.0,
            bold: false,
            fill: MUTED.to_string(),
        });
    }

    for (i, datum) in series.iter().enumerate() {
        let share = slices.get(i).map(|s| s.share).unwrap_or(0.0);
        legend_row(
            &mut scene,
            24.0,
            legend_top + i as f64 * 20.0 + 10.0,
            palette[i % palette.len()],
            format!("{} · {}", datum.label, format_percent(share)),
        );
    }

    scene
}

pub fn pie_scene(title: &str, series: &[Datum], cohort: Cohort) -> ChartScene {
    pie_like(title, series, cohort, None)
}

pub fn donut_scene(title: &str, series: &[Datum], cohort: Cohort) -> ChartScene {
    pie_like(title, series, cohort, Some(56.0))
}

const BAR_PLOT: PlotArea = PlotArea {
    x: 36.0,
    y: 24.0,
    width: 268.0,
    height: 156.0,
};

fn bar_axes(scene: &mut ChartScene, labels: &[String]) {
    let baseline = BAR_PLOT.baseline();
    scene.shapes.push(Shape::Line {
        x1: BAR_PLOT.x,
        y1: baseline,
        x2: BAR_PLOT.x + BAR_PLOT.width,
        y2: baseline,
        stroke: MUTED.to_string(),
        width: 1.0,
    });
    let slot = BAR_PLOT.width / labels.len().max(1) as f64;
    for (i, label) in labels.iter().enumerate() {
        scene.shapes.push(Shape::Text {
            x: BAR_PLOT.x + slot * (i as f64 + 0.5),
            y: baseline + 18.0,
            text: label.clone(),
            anchor: Anchor::Middle,
            size: 11.0,
            bold: false,
            fill: MUTED.to_string(),
        });
    }
}

fn value_label(scene: &mut ChartScene, rect: &geometry::BarRect, value: f64) {
    scene.shapes.push(Shape::Text {
        x: rect.x + rect.width / 2.0,
        y: rect.y - 6.0,
        text: format_value(value),
        anchor: Anchor::Middle,
        size: 11.0,
        bold: true,
        fill: INK.to_string(),
    });
}

pub fn bar_scene(title: &str, series: &[Datum], cohort: Cohort) -> ChartScene {
    let mut scene = ChartScene::new(title, 320.0, 214.0);
    let values: Vec<f64> = series.iter().map(|d| d.value).collect();
    let labels: Vec<String> = series.iter().map(|d| d.label.clone()).collect();
    scene.data = series.iter().map(|d| DatumInfo::plain(&d.label, d.value)).collect();

    bar_axes(&mut scene, &labels);
    for rect in bar_layout(&values, BAR_PLOT, 0.3) {
        scene.shapes.push(Shape::Rect {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            rx: 4.0,
            fill: cohort.accent().to_string(),
            datum: Some(rect.index),
        });
        value_label(&mut scene, &rect, values[rect.index]);
    }
    scene
}

/// Physical and audio bars side by side per category. Datum indices run over
/// the physical entries first, then the audio entries.
pub fn grouped_bar_scene(
    title: &str,
    physical: &[Datum],
    audio: &[Datum],
    names: [&str; 2],
) -> ChartScene {
    let mut scene = ChartScene::new(title, 320.0, 236.0);
    let n = physical.len().min(audio.len());
    let labels: Vec<String> = physical.iter().take(n).map(|d| d.label.clone()).collect();
    bar_axes(&mut scene, &labels);

    let max = physical
        .iter()
        .chain(audio.iter())
        .map(|d| d.value)
        .fold(0.0_f64, f64::max);
    let slot = BAR_PLOT.width / n.max(1) as f64;

    for (series_idx, (series, cohort)) in [(physical, Cohort::Physical), (audio, Cohort::Audio)]
        .into_iter()
        .enumerate()
    {
        for datum in series.iter().take(n) {
            scene.data.push(DatumInfo::plain(
                &format!("{} · {}", names[series_idx], datum.label),
                datum.value,
            ));
        }
        // Lay out each series in its half of every slot, with a shared scale.
        let half = PlotArea {
            x: BAR_PLOT.x + series_idx as f64 * slot * 0.4 + slot * 0.1,
            ..BAR_PLOT
        };
        for i in 0..n {
            let value = series[i].value;
            let height = if max > 0.0 {
                value / max * half.height
            } else {
                0.0
            };
            let rect = geometry::BarRect {
                index: i,
                x: half.x + slot * i as f64,
                y: half.baseline() - height,
                width: slot * 0.4,
                height,
            };
            scene.shapes.push(Shape::Rect {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                rx: 3.0,
                fill: cohort.accent().to_string(),
                datum: Some(series_idx * n + i),
            });
            value_label(&mut scene, &rect, value);
        }
    }

    for (i, (name, cohort)) in [(names[0], Cohort::Physical), (names[1], Cohort::Audio)]
        .into_iter()
        .enumerate()
    {
        legend_row(
            &mut scene,
            BAR_PLOT.x + i as f64 * 140.0,
            BAR_PLOT.baseline() + 44.0,
            cohort.accent(),
            name.to_string(),
        );
    }

    scene
}

pub fn gauge_scene(title: &str, gauge: &Gauge, cohort: Cohort) -> ChartScene {
    const CX: f64 = 120.0;
    const CY: f64 = 110.0;
    const R: f64 = 80.0;
    let mut scene = ChartScene::new(title, 240.0, 210.0);
    let fraction = gauge_fraction(gauge.value, gauge.max);

    scene.data.push(DatumInfo {
        label: gauge.label.clone(),
        value: gauge.value,
        share: Some(fraction),
        tooltip: format!("{}: {}", gauge.label, format_value(gauge.value)),
    });

    scene.shapes.push(Shape::Path {
        d: stroke_arc_path(CX, CY, R, GAUGE_START, GAUGE_START + GAUGE_SPAN),
        fill: "none".to_string(),
        stroke: Some((TRACK.to_string(), 16.0)),
        evenodd: false,
        round_caps: true,
        datum: Some(0),
    });

    let sweep = gauge_sweep(fraction);
    if sweep > 0.0 {
        scene.shapes.push(Shape::Path {
            d: stroke_arc_path(CX, CY, R, GAUGE_START, GAUGE_START + sweep),
            fill: "none".to_string(),
            stroke: Some((cohort.accent().to_string(), 16.0)),
            evenodd: false,
            round_caps: true,
            datum: Some(0),
        });
    }

    scene.shapes.push(Shape::Text {
        x: CX,
        y: CY + 8.0,
        text: format_value(gauge.value),
        anchor: Anchor::Middle,
        size: 32.0,
        bold: true,
        fill: INK.to_string(),
    });
    let unit = gauge.unit.trim();
    if !unit.is_empty() {
        scene.shapes.push(Shape::Text {
            x: CX,
            y: CY + 28.0,
            text: unit.to_string(),
            anchor: Anchor::Middle,
            size: 12.0,
            bold: false,
            fill: MUTED.to_string(),
        });
    }

    let low = geometry::polar_to_cartesian(CX, CY, R, GAUGE_START);
    let high = geometry::polar_to_cartesian(CX, CY, R, GAUGE_START + GAUGE_SPAN);
    for (point, text) in [(low, "0".to_string()), (high, format_value(gauge.max))] {
        scene.shapes.push(Shape::Text {
            x: point.x,
            y: point.y + 26.0,
            text,
            anchor: Anchor::Middle,
            size: 11.0,
            bold: false,
            fill: MUTED.to_string(),
        });
    }

    scene.shapes.push(Shape::Text {
        x: CX,
        y: 200.0,
        text: gauge.label.clone(),
        anchor: Anchor::Middle,
        size: 12.0,
        bold: false,
        fill: INK.to_string(),
    });

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(&str, f64)]) -> Vec<Datum> {
        values
            .iter()
            .map(|(label, value)| Datum {
                label: label.to_string(),
                value: *value,
            })
            .collect()
    }

    fn datum_shapes(scene: &ChartScene) -> Vec<usize> {
        scene.shapes.iter().filter_map(Shape::datum).collect()
    }

    #[test]
    fn pie_draws_one_wedge_per_nonzero_entry() {
        let scene = pie_scene(
            "Education",
            &series(&[("A", 1.0), ("B", 0.0), ("C", 3.0)]),
            Cohort::Physical,
        );
        assert_eq!(datum_shapes(&scene), vec![0, 2]);
        assert_eq!(scene.tooltip(2), Some("C: 3 (75%)"));
        assert_eq!(scene.tooltip(1), Some("B: 0 (0%)"));
    }

    #[test]
    fn pie_with_no_data_draws_placeholder_disc() {
        let scene = pie_scene("Empty", &series(&[("A", 0.0)]), Cohort::Audio);
        assert!(datum_shapes(&scene).is_empty());
        assert!(scene
            .shapes
            .iter()
            .any(|s| matches!(s, Shape::Circle { .. })));
        assert_eq!(scene.tooltip(0), Some("A: 0"));
    }

    #[test]
    fn donut_labels_leading_share() {
        let scene = donut_scene(
            "Preferences",
            &series(&[("Audio", 58.0), ("Print", 27.0), ("E-books", 15.0)]),
            Cohort::Audio,
        );
        let texts: Vec<&str> = scene
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"58%"));
        assert!(texts.contains(&"Audio"));
        assert!(scene.shapes.iter().any(|s| matches!(s, Shape::Path { evenodd: true, .. })));
    }

    #[test]
    fn bars_use_cohort_accent() {
        let scene = bar_scene("Books", &series(&[("0–5", 9.0), ("6–12", 17.0)]), Cohort::Audio);
        let fills: Vec<&str> = scene
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Rect { fill, datum: Some(_), .. } => Some(fill.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec!["#5a6ea5", "#5a6ea5"]);
        assert_eq!(scene.tooltip(1), Some("6–12: 17"));
    }

    #[test]
    fn grouped_bars_index_physical_then_audio() {
        let scene = grouped_bar_scene(
            "Timeline",
            &series(&[("a", 3.0), ("b", 7.0)]),
            &series(&[("a", 12.0), ("b", 19.0)]),
            ["Physical", "Audiobook"],
        );
        assert_eq!(datum_shapes(&scene), vec![0, 1, 2, 3]);
        assert_eq!(scene.tooltip(2), Some("Audiobook · a: 12"));
        let tallest = scene
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Rect { height, datum: Some(_), .. } => Some(*height),
                _ => None,
            })
            .fold(0.0_f64, f64::max);
        assert!((tallest - BAR_PLOT.height).abs() < 1e-9);
    }

    #[test]
    fn gauge_omits_value_arc_at_zero() {
        let gauge = Gauge {
            label: "Median age".into(),
            value: 0.0,
            max: 70.0,
            unit: "yrs".into(),
        };
        let scene = gauge_scene("Age", &gauge, Cohort::Physical);
        let arcs = scene
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Path { .. }))
            .count();
        assert_eq!(arcs, 1);
        // The unit sits under the dial, not in the tooltip.
        assert_eq!(scene.tooltip(0), Some("Median age: 0"));
    }

    #[test]
    fn for_chart_follows_chart_kind() {
        let survey = Survey::embedded().unwrap();
        let age = ChartScene::for_chart(ChartId::Age, Cohort::Audio, &survey, "Age");
        assert_eq!(age.data.len(), 1);
        assert_eq!(age.data[0].share, Some(29.0 / 70.0));

        let prefs = ChartScene::for_chart(ChartId::Preferences, Cohort::Physical, &survey, "Prefs");
        assert_eq!(prefs.data.len(), 3);

        assert!(ChartScene::combined(ChartId::Education, &survey, "Edu", ["P", "A"]).is_none());
        let books = ChartScene::combined(ChartId::BooksRead, &survey, "Books", ["P", "A"]).unwrap();
        assert_eq!(books.data.len(), 8);
    }
}
