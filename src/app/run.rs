//! Top-level entry point for running scatterview as a native window.
//!
//! [`run_scatterview`] constructs the application, applies the options,
//! opens a native window, and enters the eframe event loop. The call blocks
//! until the window is closed.

use std::path::PathBuf;

use eframe::egui;

use super::ScatterApp;

/// Startup options for the viewer window.
#[derive(Clone)]
pub struct ScatterViewOptions {
    /// Window title.
    pub title: String,
    /// CSV file to load immediately, if any.
    pub csv: Option<PathBuf>,
    /// Override the default native window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ScatterViewOptions {
    fn default() -> Self {
        Self {
            title: "Scatterview".to_string(),
            csv: None,
            native_options: None,
        }
    }
}

/// Launch the scatterplot viewer in a native window.
pub fn run_scatterview(options: ScatterViewOptions) -> eframe::Result<()> {
    let app = ScatterApp::new(options.csv);

    let mut opts = options.native_options.unwrap_or_default();

    // Try to set the application icon from icon.svg if available.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(1000.0, 700.0));
    }

    eframe::run_native(
        &options.title,
        opts,
        Box::new(|cc| {
            // Install the Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render the bundled `icon.svg` into an [`egui::IconData`], or `None` if
/// it is missing or unrenderable.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let data = std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg")).ok()?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).ok()?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    // Pixmap::new rejects zero dimensions, covering a degenerate SVG.
    let mut pixmap = tiny_skia::Pixmap::new(width, height)?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Some(egui::IconData {
        rgba: pixmap.take(),
        width,
        height,
    })
}
