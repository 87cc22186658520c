//! Integration tests for photoview
//!
//! These tests drive the public library API end to end: loading collections
//! from a temporary directory, joining them, dispatching filter actions and
//! rendering the `list` output.

use photoview::{
    Album, FilterAction, FilterState, FilterStore, JoinedPhoto, Photo, Sex, User,
    cli::Cli,
    cli::Commands,
    data::{ALBUMS_FILE, DataError, Dataset, PHOTOS_FILE, USERS_FILE},
    evaluate, join,
    output::{NO_MATCHES, OutputFormat, write_photos},
};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use tempfile::TempDir;

const USERS: &str = r#"[
    {"id": 1, "name": "Bob", "sex": "m"},
    {"id": 2, "name": "Alice", "sex": "f"}
]"#;

const ALBUMS: &str = r#"[
    {"id": 1, "userId": 1, "title": "Cats"},
    {"id": 2, "userId": 1, "title": "Travel"},
    {"id": 3, "userId": 2, "title": "Family"},
    {"id": 4, "userId": 9, "title": "Orphaned"}
]"#;

const PHOTOS: &str = r#"[
    {"id": 1, "albumId": 1, "title": "Sleepy cat", "url": "https://example.org/1"},
    {"id": 2, "albumId": 2, "title": "Sunset in Lisbon", "url": "https://example.org/2"},
    {"id": 3, "albumId": 3, "title": "SUNSET picnic", "url": "https://example.org/3"},
    {"id": 4, "albumId": 4, "title": "Lost sunset", "url": "https://example.org/4"},
    {"id": 5, "albumId": 42, "title": "Unsorted", "url": "https://example.org/5"}
]"#;

/// Helper function to write the three collections into a fresh directory
fn setup_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_collection(dir.path(), USERS_FILE, USERS);
    write_collection(dir.path(), ALBUMS_FILE, ALBUMS);
    write_collection(dir.path(), PHOTOS_FILE, PHOTOS);
    dir
}

fn write_collection(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn ids(photos: &[&JoinedPhoto]) -> Vec<u32> {
    photos.iter().map(|photo| photo.id).collect()
}

fn list(photos: &[&JoinedPhoto], format: OutputFormat) -> String {
    let mut buf = Vec::new();
    write_photos(&mut buf, photos, format, false, false).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_load_and_join_from_directory() {
    let dir = setup_data_dir();
    let dataset = Dataset::load_dir(dir.path()).unwrap();
    assert_eq!(dataset.users.len(), 2);
    assert_eq!(dataset.albums.len(), 4);

    let joined = dataset.joined();
    assert_eq!(joined.len(), 5);
    assert_eq!(joined.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    assert_eq!(joined[2].album_title(), "Family");
    assert_eq!(joined[2].user_name(), "Alice");

    // Album resolves but its owner does not
    assert!(joined[3].album.is_some());
    assert!(joined[3].user.is_none());

    // Neither album nor owner resolves
    assert!(joined[4].album.is_none());
    assert!(joined[4].user.is_none());
}

#[test]
fn test_missing_collection_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_collection(dir.path(), USERS_FILE, USERS);
    write_collection(dir.path(), ALBUMS_FILE, ALBUMS);

    let err = Dataset::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
    assert!(err.to_string().contains(PHOTOS_FILE));
}

#[test]
fn test_malformed_collection_is_an_error() {
    let dir = setup_data_dir();
    write_collection(dir.path(), USERS_FILE, r#"[{"id": 1, "name": "Bob", "sex": "x"}]"#);

    let err = Dataset::load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, DataError::Parse { .. }));
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Dataset::load_dir(dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, DataError::MissingDirectory(_)));
}

#[test]
fn test_default_filters_show_everything_in_order() {
    let dir = setup_data_dir();
    let joined = Dataset::load_dir(dir.path()).unwrap().joined();

    let visible = evaluate(&joined, &FilterState::default());
    assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_search_is_case_insensitive() {
    let dir = setup_data_dir();
    let joined = Dataset::load_dir(dir.path()).unwrap().joined();

    for query in ["set", "SET", "SuNsEt"] {
        let state = FilterState::default().reduce(FilterAction::SetSearchQuery(query.into()));
        assert_eq!(ids(&evaluate(&joined, &state)), vec![2, 3, 4], "query {query:?}");
    }
}

#[test]
fn test_user_filter_excludes_unresolved_owners() {
    let dir = setup_data_dir();
    let joined = Dataset::load_dir(dir.path()).unwrap().joined();

    let state = FilterState::default().reduce(FilterAction::SetSelectedUserId(1));
    assert_eq!(ids(&evaluate(&joined, &state)), vec![1, 2]);

    let state = FilterState::default().reduce(FilterAction::SetSelectedUserId(9));
    assert!(evaluate(&joined, &state).is_empty());
}

#[test]
fn test_album_selection_combines_with_other_filters() {
    let dir = setup_data_dir();
    let joined = Dataset::load_dir(dir.path()).unwrap().joined();

    let albums = [FilterAction::ToggleAlbum(1), FilterAction::ToggleAlbum(2)]
        .into_iter()
        .fold(FilterState::default(), FilterState::reduce);
    assert_eq!(ids(&evaluate(&joined, &albums)), vec![1, 2]);

    let with_search = albums.reduce(FilterAction::SetSearchQuery("sunset".into()));
    assert_eq!(ids(&evaluate(&joined, &with_search)), vec![2]);
}

#[test]
fn test_single_photo_scenario() {
    let joined = join(
        &[Photo::new(1, 1, "Cat", "")],
        &[Album::new(1, 1, "A1")],
        &[User::new(1, "Bob", Sex::Male)],
    );

    let bob = FilterState::default().reduce(FilterAction::SetSelectedUserId(1));
    assert_eq!(ids(&evaluate(&joined, &bob)), vec![1]);

    let other = FilterState::default().reduce(FilterAction::SetSelectedUserId(2));
    assert!(evaluate(&joined, &other).is_empty());
}

#[test]
fn test_store_notifies_and_resets() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = FilterStore::default();
    let sink = Rc::clone(&seen);
    store.subscribe(move |state: &FilterState| sink.borrow_mut().push(state.clone()));

    assert!(store.set_search_query("cat"));
    assert!(store.set_selected_user_id(2));
    assert!(store.toggle_album_filter(3));
    assert!(store.toggle_album_filter(3));
    assert!(store.toggle_album_filter(1));
    assert!(store.clear_all_filters());

    assert_eq!(store.state(), &FilterState::default());
    assert_eq!(store.revision(), 6);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 6);
    assert!(seen[3].selected_album_ids.is_empty());
    assert_eq!(seen[4].selected_album_ids, vec![1]);
    assert_eq!(seen[5], FilterState::default());
}

#[test]
fn test_list_command_end_to_end() {
    let dir = setup_data_dir();
    let data = dir.path().to_string_lossy().into_owned();
    let cli = Cli::parse_from_args(["photoview", "--data", &data, "list", "-s", "sunset", "-u", "2"]);

    let dataset = Dataset::load(cli.data.as_ref()).unwrap();
    let Commands::List { filter_args, format } = cli.get_command() else {
        panic!("Expected List command");
    };
    let joined = dataset.joined();
    let visible = evaluate(&joined, &filter_args.to_filter_state());

    let text = list(&visible, format);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].starts_with('3'));
    assert!(lines[1].contains("SUNSET picnic"));
    assert!(lines[1].ends_with("Alice"));
}

#[test]
fn test_list_reports_no_matches() {
    let dir = setup_data_dir();
    let joined = Dataset::load_dir(dir.path()).unwrap().joined();
    let state = FilterState::default().reduce(FilterAction::SetSearchQuery("zebra".into()));

    let visible = evaluate(&joined, &state);
    assert_eq!(list(&visible, OutputFormat::Table).trim_end(), NO_MATCHES);
    assert_eq!(list(&visible, OutputFormat::Json).trim_end(), "[]");
}

#[test]
fn test_builtin_dataset_is_browsable() {
    let dataset = Dataset::load(None).unwrap();
    let joined = dataset.joined();
    assert!(joined.iter().all(|photo| photo.album.is_some() && photo.user.is_some()));

    let first_user = dataset.users[0].id;
    let state = FilterState::default().reduce(FilterAction::SetSelectedUserId(first_user));
    let visible = evaluate(&joined, &state);
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|photo| photo.user.as_ref().is_some_and(|u| u.id == first_user)));
}
