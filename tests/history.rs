use content_lens::history::{HistoryStore, DEFAULT_HISTORY_LIMIT};
use content_lens::{analyze_content, AnalysisOptions};
use tempfile::tempdir;

fn story(idx: usize) -> String {
    format!("Item {:02} covers the council budget debate in detail.", idx)
}

#[tokio::test]
async fn keeps_newest_entries_up_to_limit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("history.json");
    let store = HistoryStore::load(path.clone(), DEFAULT_HISTORY_LIMIT)
        .await
        .unwrap();

    for idx in 0..12 {
        let text = story(idx);
        let result = analyze_content(&text, &AnalysisOptions::default());
        assert!(store.record(&text, &result).await.unwrap().is_some());
    }

    let entries = store.list().await;
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].full_text, story(11));
    assert_eq!(entries[9].full_text, story(2));
    assert_eq!(entries[0].text_snippet, "Item 11 covers the council bud");
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn skips_repeat_of_newest_snippet() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::load(dir.path().join("history.json"), 10)
        .await
        .unwrap();
    let text = story(1);
    let result = analyze_content(&text, &AnalysisOptions::default());

    assert!(store.record(&text, &result).await.unwrap().is_some());
    // same first 30 characters, different tail
    let longer = format!("{} More follows.", text);
    assert!(store.record(&longer, &result).await.unwrap().is_none());
    assert_eq!(store.list().await.len(), 1);

    store.record(&story(2), &result).await.unwrap();
    assert!(store.record(&text, &result).await.unwrap().is_some());
    assert_eq!(store.list().await.len(), 3);
}

#[tokio::test]
async fn entries_survive_reload_and_can_be_fetched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let text = "The disastrous policy implemented by Candidate X has ruined the economy.";
    let result = analyze_content(text, &AnalysisOptions::default());

    let entry = {
        let store = HistoryStore::load(path.clone(), 10).await.unwrap();
        store.record(text, &result).await.unwrap().unwrap()
    };
    assert!(entry.id.starts_with("entry_"));

    let reloaded = HistoryStore::load(path, 10).await.unwrap();
    let fetched = reloaded.get(&entry.id).await.unwrap();
    assert_eq!(fetched, entry);
    assert_eq!(fetched.result, result);
    assert!(reloaded.get("entry_missing").await.is_none());
}

#[tokio::test]
async fn reload_truncates_to_smaller_limit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = HistoryStore::load(path.clone(), 10).await.unwrap();
    for idx in 0..6 {
        let text = story(idx);
        let result = analyze_content(&text, &AnalysisOptions::default());
        store.record(&text, &result).await.unwrap();
    }

    let smaller = HistoryStore::load(path, 3).await.unwrap();
    let entries = smaller.list().await;
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].full_text, story(5));
}

#[tokio::test]
async fn clear_removes_entries_and_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = HistoryStore::load(path.clone(), 10).await.unwrap();
    let result = analyze_content("", &AnalysisOptions::default());
    store.record("something happened", &result).await.unwrap();
    assert!(path.exists());

    store.clear().await.unwrap();
    assert!(store.list().await.is_empty());
    assert!(!path.exists());
    // clearing twice is fine
    store.clear().await.unwrap();
}

#[tokio::test]
async fn failed_write_leaves_history_unchanged() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let store = HistoryStore::load(blocker.join("history.json"), 10)
        .await
        .unwrap();
    let text = story(3);
    let result = analyze_content(&text, &AnalysisOptions::default());

    assert!(store.record(&text, &result).await.is_err());
    assert!(store.list().await.is_empty());
    // the retry is attempted again instead of being treated as a duplicate
    assert!(store.record(&text, &result).await.is_err());
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn malformed_history_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = match HistoryStore::load(path, 10).await {
        Ok(_) => panic!("expected parse failure"),
        Err(err) => err,
    };
    assert!(err.contains("failed to parse history"));
}
