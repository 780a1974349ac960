use std::collections::HashSet;
use std::path::Path;

use super::data::{ImageId, ImageRecord};
use crate::error::{GalleryError, Result};

/// The Catalog is the gallery's data source: a fixed, ordered list of
/// image records created once at startup.
///
/// Record order is display order. Ids are unique; construction rejects
/// a list that repeats one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ImageRecord>,
}

impl Catalog {
    /// Build a catalog from an ordered list of records
    pub fn new(records: Vec<ImageRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(GalleryError::DuplicateId(record.id));
            }
        }
        Ok(Catalog { records })
    }

    /// The built-in collection
    pub fn builtin() -> Self {
        Catalog {
            records: vec![
                ImageRecord::new(
                    1,
                    "/assets/asset.png",
                    "마법의 숲",
                    "신비로운 숲 속에서 펼쳐지는 환상적인 모험",
                ),
                ImageRecord::new(
                    2,
                    "/assets/asset_1.png",
                    "하늘 위의 성",
                    "구름 위에 떠있는 신비로운 성의 이야기",
                ),
                ImageRecord::new(
                    3,
                    "/assets/asset_2.png",
                    "바다의 비밀",
                    "깊은 바다 속에 숨겨진 보물과 전설",
                ),
                ImageRecord::new(
                    4,
                    "/assets/asset_3.png",
                    "꿈의 정원",
                    "계절이 바뀌어도 영원히 아름다운 정원",
                ),
                ImageRecord::new(
                    5,
                    "/assets/asset_4.png",
                    "별빛 여행",
                    "별들과 함께하는 환상적인 밤하늘 여행",
                ),
            ],
        }
    }

    /// Load a catalog from a JSON manifest (an array of records)
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| GalleryError::io(path, e))?;
        let records: Vec<ImageRecord> =
            serde_json::from_str(&json).map_err(|e| GalleryError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::new(records)
    }

    /// All records in display order
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    #[cfg(test)]
    pub fn get(&self, id: ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_is_ordered_and_unique() {
        let catalog = Catalog::builtin();
        let ids: Vec<ImageId> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.get(2).map(|r| r.title.as_str()), Some("하늘 위의 성"));
        // Rebuilding through the validating constructor must succeed
        assert!(Catalog::new(catalog.records().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let records = vec![
            ImageRecord::new(7, "/a.png", "A", "first"),
            ImageRecord::new(8, "/b.png", "B", "second"),
            ImageRecord::new(7, "/c.png", "C", "third"),
        ];
        assert_eq!(Catalog::new(records), Err(GalleryError::DuplicateId(7)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_manifest_keeps_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 30, "src": "/assets/c.png", "title": "C", "description": "c"}},
                {{"id": 10, "src": "/assets/a.png", "title": "A", "description": "a"}}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::from_manifest(file.path()).unwrap();
        let ids: Vec<ImageId> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![30, 10]);
    }

    #[test]
    fn test_malformed_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not an array").unwrap();

        let result = Catalog::from_manifest(file.path());
        assert!(matches!(result, Err(GalleryError::Config { .. })));
    }
}
