use crate::error::Result;
use crate::recommender::TrackResponse;

use chrono::Local;
use csv::Writer;
use std::fs::{self, File};
use std::io::Write;
use std::str::FromStr;
use tabular::{Row, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Csv,
    Table,
}

impl FileFormat {
    fn extension(self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Csv => "csv",
            FileFormat::Table => "txt",
        }
    }
}

impl FromStr for FileFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(FileFormat::Json),
            "csv" => Ok(FileFormat::Csv),
            "table" => Ok(FileFormat::Table),
            other => Err(format!("unknown format '{other}' (expected json, csv or table)")),
        }
    }
}

pub struct FileHandler;

impl FileHandler {
    ///
    /// # save
    /// Save tracks to a file in the data directory.
    ///
    /// ## Arguments
    /// * `tracks` - Tracks to save
    /// * `format` - File format to save as
    /// * `filename_prefix` - Prefix for the filename
    ///
    /// ## Returns
    /// * `Result<String>` - Filename of the saved file
    pub fn save(
        tracks: &[TrackResponse],
        format: FileFormat,
        filename_prefix: &str,
    ) -> Result<String> {
        fs::create_dir_all("data")?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!(
            "data/{}_{}.{}",
            filename_prefix,
            timestamp,
            format.extension()
        );

        let file = File::create(&filename)?;
        Self::write(tracks, format, file)?;

        Ok(filename)
    }

    ///
    /// # write
    /// Render tracks into any writer.
    pub fn write<W: Write>(tracks: &[TrackResponse], format: FileFormat, writer: W) -> Result<()> {
        match format {
            FileFormat::Json => Self::write_json(tracks, writer),
            FileFormat::Csv => Self::write_csv(tracks, writer),
            FileFormat::Table => Self::write_table(tracks, writer),
        }
    }

    fn write_json<W: Write>(tracks: &[TrackResponse], mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, tracks)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_csv<W: Write>(tracks: &[TrackResponse], writer: W) -> Result<()> {
        let mut writer = Writer::from_writer(writer);

        for track in tracks {
            writer.serialize(track)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn write_table<W: Write>(tracks: &[TrackResponse], mut writer: W) -> Result<()> {
        let mut table = Table::new("{:>}  {:<}  {:<}  {:<}");
        table.add_row(
            Row::new()
                .with_cell("#")
                .with_cell("Artist")
                .with_cell("Track")
                .with_cell("Preview"),
        );

        for (i, track) in tracks.iter().enumerate() {
            table.add_row(
                Row::new()
                    .with_cell(i + 1)
                    .with_cell(track.artist.as_deref().unwrap_or("-"))
                    .with_cell(&track.track)
                    .with_cell(track.preview_url.as_deref().unwrap_or("-")),
            );
        }

        write!(writer, "{table}")?;
        Ok(())
    }
}
