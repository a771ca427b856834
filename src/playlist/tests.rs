use super::*;
use crate::error::PlaylistError;

fn songs() -> Vec<Track> {
    vec![
        Track::new("lord_knows.mp3", "Lord Knows").with_duration("3:36"),
        Track::new("dnstm.mp3", "#DNSTM").with_art("img/albumcover.jpg"),
        Track::new("chill_out.mp3", "Chill Out"),
    ]
}

#[test]
fn prefix_applies_whether_set_before_or_after_tracks() {
    let before = songs()
        .into_iter()
        .fold(Playlist::new().prefix("music/"), |p, t| p.add(t));
    let after = songs()
        .into_iter()
        .fold(Playlist::new(), |p, t| p.add(t))
        .prefix("music/");

    for (i, song) in songs().iter().enumerate() {
        let expected = format!("music/{}", song.file);
        assert_eq!(before.get(i).unwrap().file, expected);
        assert_eq!(after.get(i).unwrap().file, expected);
    }
}

#[test]
fn art_falls_back_to_default_only_when_missing() {
    let playlist = songs()
        .into_iter()
        .fold(Playlist::new(), |p, t| p.add(t))
        .default_art("img/album2.jpg");

    assert_eq!(playlist.get(0).unwrap().art.as_deref(), Some("img/album2.jpg"));
    assert_eq!(
        playlist.get(1).unwrap().art.as_deref(),
        Some("img/albumcover.jpg")
    );
}

#[test]
fn art_is_none_without_any_default() {
    let playlist = Playlist::new().add(Track::new("a.mp3", "A"));
    assert_eq!(playlist.get(0).unwrap().art, None);
}

#[test]
fn get_out_of_range_fails() {
    let playlist = Playlist::new().add(Track::new("a.mp3", "A"));
    let err = playlist.get(1).unwrap_err();
    assert!(matches!(
        err,
        PlaylistError::IndexOutOfRange { index: 1, len: 1 }
    ));
}

#[test]
fn len_counts_added_tracks() {
    let playlist = songs().into_iter().fold(Playlist::new(), |p, t| p.add(t));
    assert_eq!(playlist.len(), 3);
    assert!(!playlist.is_empty());
    assert!(Playlist::new().is_empty());
}

#[test]
fn iter_yields_resolved_tracks_in_order() {
    let playlist = songs()
        .into_iter()
        .fold(Playlist::new().prefix("m/"), |p, t| p.add(t));
    let titles: Vec<String> = playlist.iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Lord Knows", "#DNSTM", "Chill Out"]);
    assert!(playlist.iter().all(|t| t.file.starts_with("m/")));
}

#[test]
fn load_reads_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("playlist.toml");
    std::fs::write(
        &path,
        r#"
prefix = "music/"
default_art = "img/classical.jpg"

[[tracks]]
file = "chopin-op-25.mp3"
title = "Etude, Op. 25 no. 2"
duration = "2:03"

[[tracks]]
file = "chopin-mazurka.mp3"
title = "Mazurka in A Minor"
art = "img/mazurka.jpg"
"#,
    )
    .unwrap();

    let playlist = Playlist::load(&path).unwrap();
    assert_eq!(playlist.len(), 2);

    let first = playlist.get(0).unwrap();
    assert_eq!(first.file, "music/chopin-op-25.mp3");
    assert_eq!(first.duration.as_deref(), Some("2:03"));
    assert_eq!(first.art.as_deref(), Some("img/classical.jpg"));
    assert_eq!(
        playlist.get(1).unwrap().art.as_deref(),
        Some("img/mazurka.jpg")
    );
}

#[test]
fn load_reports_missing_and_malformed_files() {
    let dir = tempfile::tempdir().unwrap();

    let missing = Playlist::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(missing, PlaylistError::Io { .. }));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[[tracks]]\nfile = 3\n").unwrap();
    let err = Playlist::load(&bad).unwrap_err();
    assert!(matches!(err, PlaylistError::Parse { .. }));
}
