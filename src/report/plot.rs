use crate::error::{QamError, QamResult};
use crate::qam::Constellation;
use crate::report::table::{SymbolRow, TABLE_HEADERS};
use crate::utils::consts::{LABEL_OFFSET, PLOT_HEIGHT, PLOT_WIDTH, TABLE_HEIGHT, TABLE_WIDTH};
use num_complex::Complex64;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;

const NOISE_COLOR: RGBColor = RGBColor(0xFF, 0x45, 0x00);

fn centered() -> Pos {
    Pos::new(HPos::Center, VPos::Center)
}

/// Render the constellation scatter plot to an SVG file
///
/// Symbols are labelled with their phase-sorted number from `rows`. Excluded
/// corner points are drawn as crosses, noise samples as small translucent dots.
pub fn render_constellation(
    path: &Path,
    constellation: &Constellation,
    rows: &[SymbolRow],
    noise: Option<&[Complex64]>,
) -> QamResult<()> {
    draw_constellation(path, constellation, rows, noise)
        .map_err(|e| QamError::Render(format!("{}: {}", path.display(), e)))
}

fn draw_constellation(
    path: &Path,
    constellation: &Constellation,
    rows: &[SymbolRow],
    noise: Option<&[Complex64]>,
) -> Result<(), Box<dyn Error>> {
    let max_val = (constellation.max_abs_coordinate() + 2) as f64;

    let root = SVGBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{}-QAM Constellation Diagram", constellation.order.value()),
            ("sans-serif", 24),
        )
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(-max_val..max_val, -max_val..max_val)?;

    // Roughly one label per even coordinate
    let ticks = max_val as usize + 1;
    chart
        .configure_mesh()
        .x_labels(ticks.min(25))
        .y_labels(ticks.min(25))
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .x_desc("In-Phase (I)")
        .y_desc("Quadrature (Q)")
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(-max_val, 0.0), (max_val, 0.0)],
        BLACK.stroke_width(2),
    )))?;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, -max_val), (0.0, max_val)],
        BLACK.stroke_width(2),
    )))?;

    let marker = if constellation.len() > 256 { 2 } else { 4 };
    chart
        .draw_series(
            constellation
                .symbols
                .iter()
                .map(|p| Circle::new((p.i as f64, p.q as f64), marker, BLUE.filled())),
        )?
        .label("Included Symbols")
        .legend(|(x, y)| Circle::new((x, y), 4, BLUE.filled()));

    if let Some(samples) = noise {
        chart
            .draw_series(
                samples
                    .iter()
                    .map(|s| Circle::new((s.re, s.im), 1, NOISE_COLOR.mix(0.5).filled())),
            )?
            .label("Noise Points")
            .legend(|(x, y)| Circle::new((x, y), 3, NOISE_COLOR.mix(0.5).filled()));
    }

    if !constellation.order.is_square() {
        chart
            .draw_series(constellation.excluded.iter().map(|p| {
                Cross::new((p.i as f64, p.q as f64), marker + 1, RED.stroke_width(2))
            }))?
            .label("Excluded Symbols")
            .legend(|(x, y)| Cross::new((x, y), 4, RED.stroke_width(2)));
    }

    // Symbol numbers get unreadable past a few hundred points
    if rows.len() <= 256 {
        let label_style = ("sans-serif", 10).into_font().color(&BLUE).pos(centered());
        chart.draw_series(rows.iter().map(|row| {
            let p = row.point();
            Text::new(
                row.symbol.to_string(),
                (p.i as f64, p.q as f64 - LABEL_OFFSET),
                label_style.clone(),
            )
        }))?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4))
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

/// Render one page of the symbol table to an SVG file
pub fn render_table_page(path: &Path, title: &str, rows: &[SymbolRow]) -> QamResult<()> {
    draw_table_page(path, title, rows)
        .map_err(|e| QamError::Render(format!("{}: {}", path.display(), e)))
}

fn draw_table_page(path: &Path, title: &str, rows: &[SymbolRow]) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (TABLE_WIDTH, TABLE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let width = TABLE_WIDTH as i32;
    let margin = 40;
    let top = 60;
    let row_height = 24;
    let col_width = (width - 2 * margin) / TABLE_HEADERS.len() as i32;

    root.draw(&Text::new(
        title.to_string(),
        (width / 2, top / 2),
        ("sans-serif", 20).into_font().color(&BLACK).pos(centered()),
    ))?;

    let header_style = ("sans-serif", 14)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(centered());
    let cell_style = ("sans-serif", 13).into_font().color(&BLACK).pos(centered());

    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    let lines = std::iter::once((header, true))
        .chain(rows.iter().map(|r| (r.cells().to_vec(), false)));

    for (row_idx, (cells, is_header)) in lines.enumerate() {
        let y0 = top + row_idx as i32 * row_height;
        for (col_idx, cell) in cells.into_iter().enumerate() {
            let x0 = margin + col_idx as i32 * col_width;
            let fill = if is_header { RGBColor(0xDD, 0xE6, 0xF5) } else { WHITE };
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + col_width, y0 + row_height)],
                fill.filled(),
            ))?;
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + col_width, y0 + row_height)],
                BLACK.stroke_width(1),
            ))?;
            let style = if is_header { &header_style } else { &cell_style };
            root.draw(&Text::new(
                cell,
                (x0 + col_width / 2, y0 + row_height / 2),
                style.clone(),
            ))?;
        }
    }

    root.present()?;
    Ok(())
}
