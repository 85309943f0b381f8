use std::io::Cursor;
use std::path::Path;
use image::{ImageFormat, RgbImage};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::erp::average::ErpMatrix;
use crate::erp::error::ErpError;
use crate::erp::trial::Finger;
pub const PLOT_TITLE: &str = "Averaged ERP for Each Finger";
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub foreground: RGBColor,
    pub palette: Vec<RGBColor>,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            background: WHITE,
            foreground: BLACK,
            palette: vec![
                RGBColor(31, 119, 180),
                RGBColor(255, 127, 14),
                RGBColor(44, 160, 44),
                RGBColor(214, 39, 40),
                RGBColor(148, 103, 189),
            ],
        }
    }
}
/// Draws one line per finger against the onset-relative time axis and returns PNG bytes.
///
/// The drawing area lives only for the duration of this call.
pub fn render_erp_png(matrix: &ErpMatrix, style: &PlotStyle) -> Result<Vec<u8>, ErpError> {
    if style.palette.is_empty() {
        return Err(ErpError::Plot("plot palette is empty".into()));
    }
    let time = ErpMatrix::time_axis();
    let values = matrix.as_array();
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let y_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let y_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let y_bounds = if !(y_max - y_min).is_finite() || (y_max - y_min).abs() < f64::EPSILON {
            let centre = if y_min.is_finite() { y_min } else { 0.0 };
            (centre - 1.0, centre + 1.0)
        } else {
            let pad = (y_max - y_min) * 0.05;
            (y_min - pad, y_max + pad)
        };
        let x_bounds = (time[0], time[time.len() - 1]);
        let text = style.foreground;
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption(PLOT_TITLE, ("sans-serif", 22).into_font().color(&text))
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 45)
            .build_cartesian_2d(x_bounds.0..x_bounds.1, y_bounds.0..y_bounds.1)?;
        chart
            .configure_mesh()
            .x_desc("Time (ms)")
            .y_desc("Amplitude")
            .light_line_style(&text.mix(0.08))
            .bold_line_style(&text.mix(0.2))
            .axis_desc_style(("sans-serif", 16).into_font().color(&text))
            .draw()?;
        for finger in Finger::all() {
            let color = style.palette[finger.index() % style.palette.len()];
            let row = matrix.row(finger);
            let series = time.iter().copied().zip(row.iter().copied());
            chart
                .draw_series(LineSeries::new(series, &color))?
                .label(finger.label())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }
        chart
            .configure_series_labels()
            .border_style(&text.mix(0.3))
            .background_style(&style.background.mix(0.8))
            .draw()?;
        root.present()?;
    }
    encode_png(buffer, style.width, style.height)
}
/// Renders the matrix and writes the PNG to `path`.
pub fn save_erp_plot(matrix: &ErpMatrix, style: &PlotStyle, path: &Path) -> Result<(), ErpError> {
    let png = render_erp_png(matrix, style)?;
    std::fs::write(path, png)?;
    Ok(())
}
/// Takes ownership of the RGB pixels the bitmap backend drew into.
fn encode_png(pixels: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, ErpError> {
    let frame = RgbImage::from_raw(width, height, pixels).ok_or_else(|| {
        ErpError::Plot(format!("pixel buffer does not match a {width}x{height} RGB frame"))
    })?;
    let mut png = Cursor::new(Vec::new());
    frame.write_to(&mut png, ImageFormat::Png)?;
    Ok(png.into_inner())
}
#[cfg(test)]
mod tests {
    use super::*;
    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    #[test]
    fn renders_png_for_flat_matrix() {
        let png = render_erp_png(&ErpMatrix::zeros(), &PlotStyle::default()).unwrap();
        assert!(png.len() > PNG_SIGNATURE.len());
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }
    #[test]
    fn renders_png_for_averaged_waveforms() {
        use crate::erp::average::compute_mean_erp;
        use crate::erp::trial::Trial;
        let signal: Vec<f64> = (0..4000).map(|i| (i as f64 * 0.02).sin() * 50.0).collect();
        let trials: Vec<Trial> = Finger::all()
            .map(|finger| Trial {
                start: 300 + 400 * finger.index() as i64,
                peak: 0,
                finger,
            })
            .collect();
        let matrix = compute_mean_erp(&trials, &signal).matrix;
        let png = render_erp_png(&matrix, &PlotStyle::default()).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }
    #[test]
    fn saves_png_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("erp.png");
        let style = PlotStyle {
            width: 400,
            height: 300,
            ..PlotStyle::default()
        };
        save_erp_plot(&ErpMatrix::zeros(), &style, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }
    #[test]
    fn mismatched_pixel_buffer_is_a_plot_error() {
        let err = encode_png(vec![0u8; 5], 2, 2).unwrap_err();
        assert!(matches!(err, ErpError::Plot(msg) if msg.contains("2x2")));
    }
    #[test]
    fn empty_palette_is_rejected() {
        let style = PlotStyle {
            palette: vec![],
            ..PlotStyle::default()
        };
        assert!(matches!(
            render_erp_png(&ErpMatrix::zeros(), &style),
            Err(ErpError::Plot(_))
        ));
    }
}
