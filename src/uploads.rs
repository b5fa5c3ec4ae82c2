//! Reference images attached to a custom design request.

use log::{debug, warn};

use crate::config::{max_upload_bytes, MAX_UPLOAD_FILES, MAX_UPLOAD_SIZE_MB};
use crate::error::UploadError;

pub const DEFAULT_ZONE_TITLE: &str = "Upload Reference Images";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub mime: String,
    pub size: u64,
    /// Object URL used for the thumbnail, if one was created.
    pub preview_url: Option<String>,
}

impl Upload {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
            preview_url: None,
        }
    }
}

/// Selected files. Removal empties the slot so preview indices stay valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadSlots {
    slots: Vec<Option<Upload>>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub added: Vec<usize>,
    pub rejected: Vec<UploadError>,
}

impl UploadSlots {
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Removed files keep their slot, so only `clear` frees room under the cap.
    pub fn check(&self, upload: &Upload) -> Result<(), UploadError> {
        if self.slots.len() >= MAX_UPLOAD_FILES {
            return Err(UploadError::TooManyFiles {
                max: MAX_UPLOAD_FILES,
            });
        }
        if !upload.mime.starts_with("image/") {
            return Err(UploadError::NotAnImage {
                name: upload.name.clone(),
            });
        }
        if upload.size > max_upload_bytes() {
            return Err(UploadError::TooLarge {
                name: upload.name.clone(),
                limit_mb: MAX_UPLOAD_SIZE_MB,
            });
        }
        Ok(())
    }

    /// Adds files in order. A full list stops the batch, any other rejection
    /// skips just that file. `preview` is only called for accepted files.
    pub fn add_batch<I, T, F>(&mut self, items: I, mut preview: F) -> BatchResult
    where
        I: IntoIterator<Item = (Upload, T)>,
        F: FnMut(T) -> Option<String>,
    {
        let mut result = BatchResult::default();
        for (mut upload, source) in items {
            match self.check(&upload) {
                Ok(()) => {
                    debug!("upload: accepted {} ({} bytes)", upload.name, upload.size);
                    upload.preview_url = preview(source);
                    self.slots.push(Some(upload));
                    result.added.push(self.slots.len() - 1);
                }
                Err(err) => {
                    warn!("upload: rejected: {}", err);
                    let stop = !err.skips_only_this_file();
                    result.rejected.push(err);
                    if stop {
                        break;
                    }
                }
            }
        }
        result
    }

    pub fn remove(&mut self, index: usize) -> Option<Upload> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn get(&self, index: usize) -> Option<&Upload> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Upload)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|upload| (index, upload)))
    }

    pub fn clear(&mut self) -> Vec<Upload> {
        self.slots.drain(..).flatten().collect()
    }

    pub fn zone_title(&self) -> String {
        match self.active_count() {
            0 => DEFAULT_ZONE_TITLE.to_string(),
            1 => "1 file selected".to_string(),
            n => format!("{} files selected", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(name: &str) -> Upload {
        Upload::new(name, "image/png", 200_000)
    }

    fn add<I: IntoIterator<Item = Upload>>(slots: &mut UploadSlots, uploads: I) -> BatchResult {
        slots.add_batch(uploads.into_iter().map(|u| (u, ())), |_| None)
    }

    #[test]
    fn accepts_images_and_updates_title() {
        let mut slots = UploadSlots::default();
        assert_eq!(slots.zone_title(), "Upload Reference Images");
        let result = add(&mut slots, [png("a.png")]);
        assert_eq!(result.added, vec![0]);
        assert_eq!(slots.zone_title(), "1 file selected");
        add(&mut slots, [png("b.png")]);
        assert_eq!(slots.zone_title(), "2 files selected");
    }

    #[test]
    fn rejects_non_images_and_oversized_but_keeps_going() {
        let mut slots = UploadSlots::default();
        let result = add(&mut slots, [
            Upload::new("notes.pdf", "application/pdf", 1_000),
            Upload::new("huge.jpg", "image/jpeg", 10 * 1024 * 1024 + 1),
            png("ok.png"),
        ]);
        assert_eq!(result.added, vec![0]);
        assert_eq!(
            result.rejected,
            vec![
                UploadError::NotAnImage {
                    name: "notes.pdf".to_string()
                },
                UploadError::TooLarge {
                    name: "huge.jpg".to_string(),
                    limit_mb: 10
                },
            ]
        );
        assert_eq!(result.rejected[0].to_string(), "\"notes.pdf\" is not an image file.");
        assert_eq!(result.rejected[1].to_string(), "\"huge.jpg\" exceeds 10MB limit.");
    }

    #[test]
    fn exactly_ten_megabytes_is_allowed() {
        let mut slots = UploadSlots::default();
        let result = add(&mut slots, [Upload::new("edge.webp", "image/webp", 10 * 1024 * 1024)]);
        assert_eq!(result.added.len(), 1);
    }

    #[test]
    fn sixth_file_stops_the_batch() {
        let mut slots = UploadSlots::default();
        let batch: Vec<_> = (0..7).map(|i| png(&format!("{i}.png"))).collect();
        let result = add(&mut slots, batch);
        assert_eq!(result.added.len(), 5);
        assert_eq!(result.rejected, vec![UploadError::TooManyFiles { max: 5 }]);
        assert_eq!(result.rejected[0].to_string(), "Maximum 5 files allowed.");
    }

    #[test]
    fn removal_nulls_slot_and_keeps_indices() {
        let mut slots = UploadSlots::default();
        add(&mut slots, [png("a.png"), png("b.png"), png("c.png")]);
        assert_eq!(slots.remove(1).map(|u| u.name), Some("b.png".to_string()));
        assert_eq!(slots.remove(1), None);
        assert_eq!(slots.get(2).map(|u| u.name.as_str()), Some("c.png"));
        assert_eq!(slots.iter().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 2]);

        let result = add(&mut slots, [png("d.png")]);
        assert_eq!(result.added, vec![3]);
        assert_eq!(slots.zone_title(), "3 files selected");
    }

    #[test]
    fn removed_files_still_count_towards_the_limit() {
        let mut slots = UploadSlots::default();
        add(&mut slots, (0..5).map(|i| png(&format!("{i}.png"))));
        slots.remove(0);
        let result = add(&mut slots, [png("late.png")]);
        assert!(result.added.is_empty());
        assert_eq!(result.rejected, vec![UploadError::TooManyFiles { max: 5 }]);
        assert_eq!(slots.active_count(), 4);
        assert_eq!(slots.zone_title(), "4 files selected");

        slots.clear();
        let result = add(&mut slots, [png("late.png")]);
        assert_eq!(result.added, vec![0]);
    }

    #[test]
    fn clear_returns_remaining_files() {
        let mut slots = UploadSlots::default();
        add(&mut slots, [png("a.png"), png("b.png")]);
        slots.remove(0);
        let cleared = slots.clear();
        assert_eq!(cleared.len(), 1);
        assert_eq!(slots.zone_title(), DEFAULT_ZONE_TITLE);
    }
}
