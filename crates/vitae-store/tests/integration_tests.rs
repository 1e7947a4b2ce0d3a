//! Integration tests for vitae-store
//!
//! These tests verify the save, load and delete cycle for resumes and their
//! work history.

use vitae_domain::traits::RecordStore;
use vitae_domain::{ExtractedRecord, WorkExperience};
use vitae_store::SqliteStore;

fn experience(company: &str, skills: &[&str]) -> WorkExperience {
    WorkExperience {
        company_name: company.to_string(),
        customer_name: "N/A".to_string(),
        role: "Developer".to_string(),
        duration: "2019 - 2021".to_string(),
        skills_technologies: skills.iter().map(|s| s.to_string()).collect(),
        industry_domain: "IT".to_string(),
        location: "Remote".to_string(),
    }
}

fn sample_record() -> ExtractedRecord {
    ExtractedRecord {
        full_name: Some("Jane Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        phone_number: None,
        work_experience: vec![
            experience("Acme", &["Rust", "SQL"]),
            experience("Globex", &[]),
        ],
    }
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_save_creates_parent_and_children() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let id = store.save_record(&sample_record(), "jane.pdf").unwrap();
    assert!(id > 0);
    assert_eq!(store.count_resumes().unwrap(), 1);
    assert_eq!(store.count_work_experiences().unwrap(), 2);
}

#[test]
fn test_save_and_get_record() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let record = sample_record();

    let id = store.save_record(&record, "jane.pdf").unwrap();
    let stored = store.get_record(id).unwrap().expect("record should exist");

    assert_eq!(stored.id, id);
    assert_eq!(stored.file_name, "jane.pdf");
    assert_eq!(stored.record, record);
}

#[test]
fn test_get_missing_record() {
    let store = SqliteStore::new(":memory:").unwrap();
    assert!(store.get_record(99).unwrap().is_none());
}

#[test]
fn test_empty_record_is_stored() {
    let mut store = SqliteStore::new(":memory:").unwrap();

    let id = store.save_record(&ExtractedRecord::empty(), "blank.docx").unwrap();
    let stored = store.get_record(id).unwrap().unwrap();

    assert_eq!(stored.record, ExtractedRecord::empty());
    assert_eq!(store.count_work_experiences().unwrap(), 0);
}

#[test]
fn test_delete_cascades_to_work_experiences() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let keep = store.save_record(&sample_record(), "keep.pdf").unwrap();
    let removed = store.save_record(&sample_record(), "drop.pdf").unwrap();
    assert_eq!(store.count_work_experiences().unwrap(), 4);

    assert!(store.delete_record(removed).unwrap());

    assert_eq!(store.count_resumes().unwrap(), 1);
    assert_eq!(store.count_work_experiences().unwrap(), 2);
    assert!(store.get_record(removed).unwrap().is_none());
    assert_eq!(store.get_record(keep).unwrap().unwrap().record.work_experience.len(), 2);
}

#[test]
fn test_delete_missing_record() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    assert!(!store.delete_record(7).unwrap());
}

#[test]
fn test_work_history_order_is_preserved() {
    let mut store = SqliteStore::new(":memory:").unwrap();
    let mut record = sample_record();
    record.work_experience = ["Zeta", "Alpha", "Mu", "Alpha"]
        .iter()
        .map(|c| experience(c, &["Go"]))
        .collect();

    let id = store.save_record(&record, "order.pdf").unwrap();
    let companies: Vec<String> = store
        .get_record(id)
        .unwrap()
        .unwrap()
        .record
        .work_experience
        .into_iter()
        .map(|e| e.company_name)
        .collect();

    assert_eq!(companies, vec!["Zeta", "Alpha", "Mu", "Alpha"]);
}

#[test]
fn test_persistence_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resumes.db");

    let id = {
        let mut store = SqliteStore::new(&path).unwrap();
        store.save_record(&sample_record(), "jane.pdf").unwrap()
    };

    let mut store = SqliteStore::new(&path).unwrap();
    assert_eq!(store.count_resumes().unwrap(), 1);

    // Cascade must also hold on a reopened connection
    assert!(store.delete_record(id).unwrap());
    assert_eq!(store.count_work_experiences().unwrap(), 0);
}
