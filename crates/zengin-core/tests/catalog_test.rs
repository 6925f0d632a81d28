//! Integration tests that build catalogs from a `source-data` directory.

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;
use zengin_core::{Catalog, DirSource, Error};

const BANKS: &str = r#"{
  "0001": {"code": "0001", "name": "みずほ", "kana": "ミズホ", "hira": "みずほ", "roma": "mizuho"},
  "0005": {"code": "0005", "name": "三菱ＵＦＪ", "kana": "ミツビシユーエフジエイ", "hira": "みつびしゆーえふじえい", "roma": "mitsubishiyuuefujiei"},
  "0397": {"code": "0397", "name": "ＳＢＩ新生", "kana": "エスビーアイシンセイ", "hira": "えすびーあいしんせい", "roma": "esubiiaishinsei"}
}"#;

const MIZUHO_BRANCHES: &str = r#"{
  "001": {"code": "001", "name": "東京営業部", "kana": "トウキヨウ", "hira": "とうきよう", "roma": "toukiyou"},
  "004": {"code": "004", "name": "丸の内中央", "kana": "マルノウチチユウオウ", "hira": "まるのうちちゆうおう", "roma": "marunouchichiyuuou"},
  "021": {"code": "021", "name": "東京中央", "kana": "トウキヨウチユウオウ", "hira": "とうきようちゆうおう", "roma": "toukiyouchiyuuou"}
}"#;

const MUFG_BRANCHES: &str = r#"{
  "001": {"code": "001", "name": "本店", "kana": "ホンテン", "hira": "ほんてん", "roma": "honten"}
}"#;

/// Lay out a `source-data` tree. Bank 0397 deliberately has no branch file.
fn write_dataset(root: &Path) {
    let branches = root.join("data").join("branches");
    std::fs::create_dir_all(&branches).unwrap();
    std::fs::write(root.join("data").join("banks.json"), BANKS).unwrap();
    std::fs::write(branches.join("0001.json"), MIZUHO_BRANCHES).unwrap();
    std::fs::write(branches.join("0005.json"), MUFG_BRANCHES).unwrap();
}

fn load() -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().unwrap();
    write_dataset(temp_dir.path());
    let catalog = Catalog::from_source(&DirSource::new(temp_dir.path())).unwrap();
    (temp_dir, catalog)
}

#[test]
fn test_every_bank_code_round_trips() {
    let (_dir, catalog) = load();

    assert_eq!(catalog.len(), 3);
    for code in catalog.bank_codes() {
        assert_eq!(catalog.get_bank(code).unwrap().code, code);
    }
}

#[test]
fn test_bidirectional_links() {
    let (_dir, catalog) = load();

    for bank in catalog.banks() {
        for (code, branch) in &bank.branches {
            assert_eq!(&branch.code, code);
            assert_eq!(branch.bank_code(), bank.code);

            let owner = branch.bank().expect("bank outlives its catalog entry");
            assert!(Arc::ptr_eq(&owner, bank));
            assert_eq!(owner.branches.get(&branch.code), Some(branch));
        }
    }
}

#[test]
fn test_mizuho_tokyo_scenario() {
    let (_dir, catalog) = load();

    assert_eq!(catalog.get_bank("0001").unwrap().name, "みずほ");

    let branch = catalog.get_branch("0001", "001").unwrap();
    assert_eq!(branch.name, "東京営業部");
    assert_eq!(branch.bank().unwrap().code, "0001");
}

#[test]
fn test_absent_codes_are_not_found() {
    let (_dir, catalog) = load();

    assert!(matches!(
        catalog.get_bank("9999"),
        Err(Error::BankNotFound { .. })
    ));
    assert!(matches!(
        catalog.get_branch("9999", "001"),
        Err(Error::BankNotFound { .. })
    ));
    assert!(matches!(
        catalog.get_branch("0001", "999"),
        Err(Error::BranchNotFound { .. })
    ));
}

#[test]
fn test_bank_without_branch_file_has_empty_branches() {
    let (_dir, catalog) = load();

    let branches = catalog.get_all_branches("0397").unwrap();
    assert!(branches.is_empty());
    assert_eq!(catalog.branch_count(), 4);
}

#[test]
fn test_search() {
    let (_dir, catalog) = load();

    let banks = catalog.find_banks_by_name(".*みずほ.*").unwrap();
    assert_eq!(banks.len(), 1);
    assert_eq!(banks[0].code, "0001");

    assert!(catalog.find_banks_by_name("りそな").unwrap().is_empty());
    assert!(matches!(
        catalog.find_banks_by_name("*"),
        Err(Error::InvalidPattern(_))
    ));

    let tokyo = catalog.find_branches_by_name("0001", ".*東京.*").unwrap();
    assert_eq!(tokyo.len(), 2);
    assert!(tokyo.iter().all(|branch| branch.name.contains("東京")));
}

#[test]
fn test_independent_builds_are_identical() {
    let temp_dir = TempDir::new().unwrap();
    write_dataset(temp_dir.path());
    let source = DirSource::new(temp_dir.path());

    let first = Catalog::from_source(&source).unwrap();
    let second = Catalog::from_source(&source).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.bank_codes().collect::<Vec<_>>(),
        second.bank_codes().collect::<Vec<_>>()
    );
    let a = first.get_branch("0001", "001").unwrap();
    let b = second.get_branch("0001", "001").unwrap();
    assert_eq!(a, b);
    assert!(!Arc::ptr_eq(&a.bank().unwrap(), &b.bank().unwrap()));
}

#[test]
fn test_missing_bank_collection_is_source_unavailable() {
    let temp_dir = TempDir::new().unwrap();

    let err = Catalog::from_source(&DirSource::new(temp_dir.path())).unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable { .. }));
}

#[test]
fn test_malformed_branch_file_aborts_build() {
    let temp_dir = TempDir::new().unwrap();
    write_dataset(temp_dir.path());
    std::fs::write(
        temp_dir
            .path()
            .join("data")
            .join("branches")
            .join("0397.json"),
        "{ truncated",
    )
    .unwrap();

    let err = Catalog::from_source(&DirSource::new(temp_dir.path())).unwrap_err();
    match err {
        Error::MalformedData { resource, .. } => assert!(resource.ends_with("0397.json")),
        other => panic!("expected MalformedData, got {other:?}"),
    }
}

#[test]
fn test_back_reference_expires_with_catalog() {
    let (_dir, catalog) = load();
    let branch = catalog.get_branch("0001", "001").unwrap().clone();
    drop(catalog);

    assert!(branch.bank().is_none());
    assert_eq!(branch.bank_code(), "0001");
}
