use std::path::{Path, PathBuf};

use fieldmorph_imgproc::morph::AnnotatedImage;

use crate::error::IoError;
use crate::functional::read_image_any_rgb8;
use crate::lines::read_control_lines;

/// Name of the meta file inside a dataset directory.
pub const META_FILE: &str = "meta.txt";

/// One tagged image of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEntry {
    /// the name the image is referred to by
    pub tag: String,
    /// path of the image file
    pub image_path: PathBuf,
    /// path of the control line file
    pub lines_path: PathBuf,
}

impl MetaEntry {
    /// Load the image and its control lines.
    pub fn load(&self) -> Result<AnnotatedImage<u8, 3>, IoError> {
        load_annotated_image(self)
    }
}

/// Parse meta file text. Each non-empty line is `tag image_file lines_file`;
/// the file names are resolved against `base_dir`.
pub fn parse_meta(text: &str, base_dir: impl AsRef<Path>) -> Result<Vec<MetaEntry>, IoError> {
    let base_dir = base_dir.as_ref();
    text.lines()
        .enumerate()
        .filter(|(_, content)| !content.trim().is_empty())
        .map(|(i, content)| match content.split_whitespace().collect::<Vec<_>>()[..] {
            [tag, image_file, lines_file] => Ok(MetaEntry {
                tag: tag.to_string(),
                image_path: base_dir.join(image_file),
                lines_path: base_dir.join(lines_file),
            }),
            _ => Err(IoError::InvalidMetaEntry {
                line: i + 1,
                content: content.to_string(),
            }),
        })
        .collect()
}

/// Read the [`META_FILE`] of a dataset directory.
///
/// # Errors
///
/// * [`IoError::FileDoesNotExist`] if the directory has no meta file.
/// * [`IoError::InvalidMetaEntry`] if an entry is malformed.
pub fn read_meta_file(data_dir: impl AsRef<Path>) -> Result<Vec<MetaEntry>, IoError> {
    let data_dir = data_dir.as_ref();
    let meta_path = data_dir.join(META_FILE);
    if !meta_path.exists() {
        return Err(IoError::FileDoesNotExist(meta_path));
    }
    let entries = parse_meta(&std::fs::read_to_string(&meta_path)?, data_dir)?;
    log::debug!("found {} entries in {}", entries.len(), meta_path.display());
    Ok(entries)
}

/// Find the entry with the given tag.
///
/// When a tag is listed more than once the last entry wins.
pub fn find_entry<'a>(entries: &'a [MetaEntry], tag: &str) -> Result<&'a MetaEntry, IoError> {
    entries
        .iter()
        .rev()
        .find(|entry| entry.tag == tag)
        .ok_or_else(|| IoError::UnknownTag(tag.to_string()))
}

/// Read the image and control lines an entry points to.
pub fn load_annotated_image(entry: &MetaEntry) -> Result<AnnotatedImage<u8, 3>, IoError> {
    let image = read_image_any_rgb8(&entry.image_path)?;
    let lines = read_control_lines(&entry.lines_path)?;
    Ok(AnnotatedImage::new(image, lines))
}
