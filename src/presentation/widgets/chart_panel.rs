use crate::domain::entities::{ChartKind, ChartSpec};
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::Line,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Chart, Dataset, GraphType, Paragraph,
        Widget,
    },
};

const NO_DATA: &str = "нет данных";
/// Samples per segment used to fill area charts.
const AREA_STEPS: usize = 16;
/// Bar heights are integers; keep one decimal of precision.
const BAR_SCALE: f64 = 10.0;

#[derive(Default)]
pub struct ChartPanelStyle {
    pub frame: Style,
    pub title: Style,
    pub axis: Style,
    pub series: Style,
    pub fill: Style,
    pub value: Style,
}

impl ChartPanelStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            frame: theme.card_border_style,
            title: theme.selection_style,
            axis: theme.dimmed_style,
            series: Style::default().fg(theme.accent),
            fill: theme.track_style,
            value: theme.badge_style,
        }
    }
}

/// Stacks one chart per [`ChartSpec`] vertically.
pub struct ChartPanel<'a> {
    charts: &'a [ChartSpec],
    style: ChartPanelStyle,
}

impl<'a> ChartPanel<'a> {
    #[must_use]
    pub fn new(charts: &'a [ChartSpec]) -> Self {
        Self {
            charts,
            style: ChartPanelStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: ChartPanelStyle) -> Self {
        self.style = style;
        self
    }

    fn block(&self, spec: &'a ChartSpec) -> Block<'a> {
        let title = if spec.y_label.is_empty() || spec.title.contains(&spec.y_label) {
            format!(" {} ", spec.title)
        } else {
            format!(" {} ({}) ", spec.title, spec.y_label)
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style.frame)
            .title(Line::styled(title, self.style.title))
    }

    fn render_chart(&self, spec: &'a ChartSpec, area: Rect, buf: &mut Buffer) {
        let block = self.block(spec);

        let Some((low, high)) = spec.bounds() else {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Line::styled(NO_DATA, self.style.axis).centered()).render(inner, buf);
            return;
        };

        match spec.kind {
            ChartKind::Bar => self.render_bars(spec, block, area, buf),
            ChartKind::Line | ChartKind::Area => {
                self.render_series(spec, (low, high), block, area, buf);
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_series(
        &self,
        spec: &'a ChartSpec,
        (low, high): (f64, f64),
        block: Block<'a>,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let line: Vec<(f64, f64)> = spec
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value))
            .collect();
        let fill = if spec.kind == ChartKind::Area {
            area_samples(&line)
        } else {
            Vec::new()
        };

        let y_min = low.min(0.0);
        let y_max = if high > y_min { high * 1.1 } else { y_min + 1.0 };
        let x_max = (line.len().saturating_sub(1)).max(1) as f64;

        let mut datasets = Vec::with_capacity(2);
        if !fill.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Bar)
                    .style(self.style.fill)
                    .data(&fill),
            );
        }
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(self.style.series)
                .data(&line),
        );

        let x_labels: Vec<Line> = spec
            .points
            .iter()
            .map(|p| Line::styled(p.label.as_str(), self.style.axis))
            .collect();
        let y_labels = vec![
            Line::styled(format_value(y_min), self.style.axis),
            Line::styled(format_value(y_max), self.style.axis),
        ];

        Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(self.style.axis)
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(self.style.axis)
                    .bounds([y_min, y_max])
                    .labels(y_labels),
            )
            .render(area, buf);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render_bars(&self, spec: &'a ChartSpec, block: Block<'a>, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = spec
            .points
            .iter()
            .map(|p| {
                Bar::default()
                    .value((p.value.max(0.0) * BAR_SCALE).round() as u64)
                    .text_value(format_value(p.value))
                    .label(Line::from(p.label.as_str()))
                    .style(self.style.series)
                    .value_style(self.style.value)
            })
            .collect();

        let inner_width = block.inner(area).width;
        let count = u16::try_from(bars.len()).unwrap_or(u16::MAX).max(1);
        let bar_width = (inner_width.saturating_sub(count) / count).clamp(1, 12);

        BarChart::default()
            .block(block)
            .bar_width(bar_width)
            .bar_gap(1)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}

/// Densely interpolated points under a polyline, for bar-style filling.
#[allow(clippy::cast_precision_loss)]
fn area_samples(line: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut samples = Vec::with_capacity(line.len() * AREA_STEPS);
    for pair in line.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        for step in 0..AREA_STEPS {
            let t = step as f64 / AREA_STEPS as f64;
            samples.push((x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
        }
    }
    if let Some(&last) = line.last() {
        samples.push(last);
    }
    samples
}

fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

impl Widget for ChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.charts.is_empty() || area.height == 0 || area.width == 0 {
            return;
        }

        let areas = Layout::vertical(self.charts.iter().map(|_| Constraint::Fill(1))).split(area);
        for (spec, chart_area) in self.charts.iter().zip(areas.iter()) {
            self.render_chart(spec, *chart_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn population() -> ChartSpec {
        ChartSpec::new("Население", ChartKind::Line)
            .y_label("млн")
            .points([("1926", 2.0), ("1959", 6.0), ("1989", 8.9)])
    }

    #[test]
    fn test_line_chart_draws_title_and_series() {
        let charts = [population()];
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);

        ChartPanel::new(&charts).render(area, &mut buf);

        let rows = rows(&buf);
        assert!(rows[0].contains("Население (млн)"));
        assert!(rows.iter().any(|r| r.contains("1926")));
        let braille = rows
            .iter()
            .flat_map(|r| r.chars())
            .any(|c| ('\u{2801}'..='\u{28FF}').contains(&c));
        assert!(braille, "no series drawn:\n{}", rows.join("\n"));
    }

    #[test]
    fn test_bar_chart_shows_labels_and_values() {
        let charts = [ChartSpec::new("Площадь, км²", ChartKind::Bar)
            .y_label("км²")
            .points([("1991", 1000.0), ("2010", 2500.0)])];
        let area = Rect::new(0, 0, 30, 12);
        let mut buf = Buffer::empty(area);

        ChartPanel::new(&charts).render(area, &mut buf);

        let rows = rows(&buf);
        assert!(rows[0].contains("Площадь, км²"));
        assert!(!rows[0].contains("(км²)"));
        assert!(rows.iter().any(|r| r.contains("1991")));
        assert!(rows.iter().any(|r| r.contains("2500")));
    }

    #[test]
    fn test_empty_series_shows_placeholder() {
        let charts = [ChartSpec::new("Пусто", ChartKind::Area)];
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        ChartPanel::new(&charts).render(area, &mut buf);

        assert!(rows(&buf).iter().any(|r| r.contains(NO_DATA)));
    }

    #[test]
    fn test_area_samples_follow_the_line() {
        let samples = area_samples(&[(0.0, 0.0), (1.0, 2.0)]);
        assert_eq!(samples.len(), AREA_STEPS + 1);
        assert_eq!(samples.first(), Some(&(0.0, 0.0)));
        assert_eq!(samples.last(), Some(&(1.0, 2.0)));
        assert_eq!(samples[AREA_STEPS / 2], (0.5, 1.0));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(2500.0), "2500");
        assert_eq!(format_value(8.9), "8.9");
    }
}
