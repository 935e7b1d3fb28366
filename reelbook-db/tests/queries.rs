use reelbook_catalog::Movie;
use reelbook_db::*;

#[test]
fn find_is_case_insensitive() {
    let conn = open_memory().unwrap();
    insert_movie(&conn, &Movie::new("Inception", 2010, "Christopher Nolan", "Sci-Fi")).unwrap();

    let a = find_movie_by_title(&conn, "Inception").unwrap().unwrap();
    let b = find_movie_by_title(&conn, "INCEPTION").unwrap().unwrap();
    assert_eq!(a, b);
}

#[test]
fn find_missing_returns_none() {
    let conn = open_memory().unwrap();
    assert!(find_movie_by_title(&conn, "Nothing").unwrap().is_none());
}

#[test]
fn find_requires_whole_title_match() {
    let conn = open_memory().unwrap();
    insert_movie(&conn, &Movie::new("Alien", 1979, "Ridley Scott", "Horror")).unwrap();
    assert!(find_movie_by_title(&conn, "Alie").unwrap().is_none());
    assert!(find_movie_by_title(&conn, "Aliens").unwrap().is_none());
}

#[test]
fn find_prefers_lowest_id_among_duplicates() {
    let conn = open_memory().unwrap();
    let first = insert_movie(&conn, &Movie::new("Dune", 1984, "David Lynch", "Sci-Fi")).unwrap();
    insert_movie(&conn, &Movie::new("Dune", 2021, "Denis Villeneuve", "Sci-Fi")).unwrap();

    let found = find_movie_by_title(&conn, "dune").unwrap().unwrap();
    assert_eq!(found.id, first);
    assert_eq!(found.release_year, 1984);
}

#[test]
fn count_tracks_inserts_and_deletes() {
    let conn = open_memory().unwrap();
    assert_eq!(count_movies(&conn).unwrap(), 0);
    insert_movie(&conn, &Movie::new("Up", 2009, "Pete Docter", "Animation")).unwrap();
    assert_eq!(count_movies(&conn).unwrap(), 1);
    delete_movies_by_title(&conn, "up").unwrap();
    assert_eq!(count_movies(&conn).unwrap(), 0);
}

#[test]
fn find_reads_years_beyond_32_bits() {
    let conn = open_memory().unwrap();
    conn.execute(
        "INSERT INTO movies (title, release_year, director, genre) VALUES ('Far', 3000000000, 'X', 'Y')",
        [],
    )
    .unwrap();

    let found = find_movie_by_title(&conn, "Far").unwrap().unwrap();
    assert_eq!(found.release_year, 3_000_000_000);

    let changed = update_movie(&conn, found.id, "Far", 3_000_000_001, "X", "Y").unwrap();
    assert_eq!(changed, 1);
    let found = find_movie_by_title(&conn, "far").unwrap().unwrap();
    assert_eq!(found.release_year, 3_000_000_001);
}
