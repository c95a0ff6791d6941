use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use students::{load_or_empty, persist, restore, Roster, RosterConfig, RosterError};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let base = std::env::temp_dir();
    base.join(format!("studtest-store-{prefix}-{pid}-{t}-{id}"))
}

/// work/ и home/ внутри одного уникального корня.
fn setup(prefix: &str) -> Result<(PathBuf, RosterConfig)> {
    let root = unique_root(prefix);
    let work = root.join("work");
    let home = root.join("home");
    fs::create_dir_all(&work)?;
    fs::create_dir_all(&home)?;
    let cfg = RosterConfig::default()
        .with_work_dir(&work)
        .with_home_dir(&home);
    Ok((root, cfg))
}

fn sample() -> Roster {
    Roster::new()
        .add("Иванов Иван Иванович", Some(21), "5 5 4")
        .add("Петров П.П.", None, "3 3")
        .add("Smith J.", Some(7), "")
}

#[test]
fn persist_moves_file_to_home() -> Result<()> {
    let (_root, cfg) = setup("move")?;
    let name = Path::new("students.json");

    let final_path = persist(&cfg, name, &sample())?;

    // Рабочая копия исчезла, авторитетна домашняя
    assert!(!cfg.working_path(name).exists(), "working copy must be moved away");
    assert_eq!(final_path, cfg.home_path(name)?);
    assert!(final_path.exists());
    Ok(())
}

#[test]
fn restore_after_persist_roundtrip() -> Result<()> {
    let (_root, cfg) = setup("roundtrip")?;
    let name = Path::new("students.json");
    let roster = sample();

    persist(&cfg, name, &roster)?;
    let back = restore(&cfg, name)?;
    assert_eq!(back, roster);
    Ok(())
}

#[test]
fn working_copy_wins_over_home() -> Result<()> {
    let (_root, cfg) = setup("precedence")?;
    let name = Path::new("s.json");

    persist(&cfg, name, &sample())?;
    // Свежий файл в рабочем каталоге (без переноса) должен читаться первым
    let local = Roster::new().add("local", None, "5");
    let no_move = cfg.clone().with_relocate(false);
    persist(&no_move, name, &local)?;

    assert_eq!(restore(&cfg, name)?, local);
    Ok(())
}

#[test]
fn persist_without_relocate_stays_in_work_dir() -> Result<()> {
    let (_root, cfg) = setup("norelocate")?;
    let cfg = cfg.with_relocate(false);
    let name = Path::new("s.json");

    let p = persist(&cfg, name, &sample())?;
    assert_eq!(p, cfg.working_path(name));
    assert!(p.exists());
    assert!(!cfg.home_path(name)?.exists());
    Ok(())
}

#[test]
fn file_is_indented_utf8_json() -> Result<()> {
    let (_root, cfg) = setup("format")?;
    let name = Path::new("s.json");
    let p = persist(&cfg, name, &sample())?;

    let text = fs::read_to_string(&p)?;
    assert!(text.starts_with("[\n    {\n        \"name\": \"Иванов Иван Иванович\""));
    assert!(text.contains("\"group\": null"));
    assert!(text.contains("\"grade\": \"\""));
    Ok(())
}

#[test]
fn missing_file_is_not_found() -> Result<()> {
    let (_root, cfg) = setup("missing")?;
    let name = Path::new("nope.json");

    match restore(&cfg, name) {
        Err(RosterError::NotFound { path }) => assert_eq!(path, cfg.working_path(name)),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(load_or_empty(&cfg, name)?.is_empty());
    Ok(())
}

#[test]
fn malformed_file_is_json_error() -> Result<()> {
    let (_root, cfg) = setup("malformed")?;
    let name = Path::new("bad.json");
    fs::write(cfg.working_path(name), "{ not json")?;

    assert!(matches!(
        load_or_empty(&cfg, name),
        Err(RosterError::Json { .. })
    ));
    Ok(())
}

#[test]
fn persist_into_missing_home_dir_fails() -> Result<()> {
    let (root, cfg) = setup("nohome")?;
    let cfg = cfg.with_home_dir(root.join("does-not-exist"));
    let name = Path::new("s.json");

    let err = persist(&cfg, name, &sample()).unwrap_err();
    assert!(matches!(err, RosterError::Io { .. }), "got {:?}", err);
    // Запись в рабочий каталог уже состоялась
    assert!(cfg.working_path(name).exists());
    Ok(())
}

#[test]
fn reads_file_written_by_hand() -> Result<()> {
    let (_root, cfg) = setup("handwritten")?;
    let name = Path::new("s.json");
    fs::write(
        cfg.working_path(name),
        r#"[{"name": "А", "group": 1, "grade": "5 4"}, {"name": "Б", "grade": "2"}]"#,
    )?;

    let r = restore(&cfg, name)?;
    assert_eq!(r.len(), 2);
    assert_eq!(r.as_slice()[1].group, None);
    let sel = r.select()?;
    assert_eq!(sel.len(), 1);
    assert_eq!(sel.as_slice()[0].name, "А");
    Ok(())
}
