use crate::domain::model::Artwork;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
}

const COLUMNS: [&str; 5] = ["id", "title", "artist_display", "date_display", "image_id"];

pub fn write_artworks<W: Write>(artworks: &[Artwork], format: OutputFormat, mut writer: W) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(artworks, &mut writer)?,
        OutputFormat::Csv => write_delimited(artworks, b',', &mut writer)?,
        OutputFormat::Tsv => write_delimited(artworks, b'\t', &mut writer)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, artworks)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn write_delimited<W: Write>(artworks: &[Artwork], delimiter: u8, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    csv_writer.write_record(COLUMNS)?;
    for artwork in artworks {
        csv_writer.write_record([
            artwork.id.to_string().as_str(),
            artwork.title.as_deref().unwrap_or_default(),
            artwork.artist_display.as_deref().unwrap_or_default(),
            artwork.date_display.as_deref().unwrap_or_default(),
            artwork.image_id.as_deref().unwrap_or_default(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(artworks: &[Artwork], writer: &mut W) -> Result<()> {
    if artworks.is_empty() {
        writeln!(writer, "No artworks found.")?;
        return Ok(());
    }

    for (index, artwork) in artworks.iter().enumerate() {
        writeln!(
            writer,
            "{:>3}. \"{}\" (ID: {})",
            index + 1,
            artwork.title.as_deref().unwrap_or("Untitled"),
            artwork.id
        )?;
        if let Some(artist) = artwork.artist_display.as_deref() {
            // artist_display is multi-line: "Name\nNationality, dates"
            writeln!(writer, "     {}", artist.lines().next().unwrap_or(artist))?;
        }
    }
    Ok(())
}
