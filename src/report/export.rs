use crate::error::{QamError, QamResult};
use crate::noise::NoiseConfig;
use crate::pipeline::RunOutcome;
use crate::qam::ModulationOrder;
use crate::report::plot::{render_constellation, render_table_page};
use crate::report::table::paginate;
use crate::ui::progress::{ProgressManager, templates};
use crate::utils::consts::TABLE_PAGE_ROWS;
use crate::utils::dump::ConstellationDump;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// File names for one order's report inside `dir`
pub struct ReportPaths {
    dir: PathBuf,
    prefix: String,
}

impl ReportPaths {
    pub fn new(dir: &Path, order: ModulationOrder) -> Self {
        Self {
            dir: dir.to_path_buf(),
            prefix: format!("{}-QAM", order.value()),
        }
    }

    pub fn constellation(&self) -> PathBuf {
        self.dir.join(format!("{}_constellation.svg", self.prefix))
    }

    /// `page` counts from 1
    pub fn table_page(&self, page: usize) -> PathBuf {
        self.dir.join(format!("{}_table_{:03}.svg", self.prefix, page))
    }

    pub fn json(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.prefix))
    }
}

/// Write the constellation plot, the paginated symbol table and a JSON dump
///
/// Returns every file written, in write order.
pub fn export_report(
    output_dir: &Path,
    outcome: &RunOutcome,
    noise_config: Option<&NoiseConfig>,
) -> QamResult<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    let order = outcome.constellation.order;
    let paths = ReportPaths::new(output_dir, order);
    let mut written = Vec::new();

    let plot_path = paths.constellation();
    render_constellation(
        &plot_path,
        &outcome.constellation,
        &outcome.rows,
        outcome.noise.as_deref(),
    )?;
    info!("Constellation plot written to {}", plot_path.display());
    written.push(plot_path);

    let pages = paginate(&outcome.rows, TABLE_PAGE_ROWS);
    let progress = ProgressManager::new();
    progress
        .create_bar(
            "table",
            pages.len() as u64,
            templates::TABLE_EXPORT,
            &order.to_string(),
        )
        .map_err(QamError::Render)?;
    for (idx, page) in pages.iter().enumerate() {
        let page_path = paths.table_page(idx + 1);
        let title = format!("{} Symbol Table ({}/{})", order, idx + 1, pages.len());
        render_table_page(&page_path, &title, page)?;
        written.push(page_path);
        progress.inc("table", 1).map_err(QamError::Render)?;
    }
    progress.finish("table", "done").map_err(QamError::Render)?;
    info!(
        "Symbol table written to {} page(s) in {}",
        pages.len(),
        output_dir.display()
    );

    let json_path = paths.json();
    let dump = ConstellationDump {
        order,
        symbols: &outcome.rows,
        excluded: &outcome.constellation.excluded,
        noise_config: noise_config.copied(),
        noise_samples: outcome
            .noise
            .iter()
            .flatten()
            .map(|s| [s.re, s.im])
            .collect(),
        quality: outcome.quality,
    };
    let mut writer = BufWriter::new(File::create(&json_path)?);
    serde_json::to_writer_pretty(&mut writer, &dump)?;
    writer.flush()?;
    info!("JSON dump written to {}", json_path.display());
    written.push(json_path);

    Ok(written)
}
