//! Recent-files store persistence and capacity

use crate::common::test_config;
use fb64::database::{RecentFilesStore, SqliteRecentFiles};
use fb64::types::{FileCategory, FileDescriptor};
use tempfile::TempDir;

#[test]
fn test_list_survives_reopen_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);

    {
        let mut store =
            SqliteRecentFiles::open(&config.storage.recent_files_db, config.storage.max_recent_files)
                .unwrap();
        for name in ["one.png", "two.wav", "three.zip"] {
            store.add(FileDescriptor::new(name, 100)).unwrap();
        }
    }

    let store =
        SqliteRecentFiles::open(&config.storage.recent_files_db, config.storage.max_recent_files)
            .unwrap();
    let names: Vec<_> = store.list().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["three.zip", "two.wav", "one.png"]);

    let categories: Vec<_> = store.list().iter().map(|d| d.category).collect();
    assert_eq!(
        categories,
        vec![FileCategory::Archive, FileCategory::Audio, FileCategory::Image]
    );
}

#[test]
fn test_capacity_of_ten() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&temp_dir);
    let mut store =
        SqliteRecentFiles::open(&config.storage.recent_files_db, config.storage.max_recent_files)
            .unwrap();

    for i in 0..11 {
        store
            .add(FileDescriptor::new(format!("file_{}.txt", i), i))
            .unwrap();
    }

    assert_eq!(store.list().len(), 10);
    assert_eq!(store.list()[0].name, "file_10.txt");
    assert!(store.list().iter().all(|d| d.name != "file_0.txt"));
}
