/// A single image to retrieve: output base name plus source URL.
///
/// The id becomes the output file name, `<id>.png`. The extension is
/// fixed regardless of the actual image format; consumers of the
/// output tree expect `.png` names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTask {
    pub id: String,
    pub url: String,
}

impl ImageTask {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    /// Output file name for this task.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.id)
    }
}

/// Summary of one completed fetch batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub files_written: usize,
    pub bytes_written: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let task = ImageTask::new("acme-launch-vertical", "https://example.com/v.jpg");
        assert_eq!(task.file_name(), "acme-launch-vertical.png");
    }
}
