use {
    std::{collections::HashSet, fs, sync::Arc},
    comments_core::{
        data_loading::{ExtractionRule, SourceLoader, SourceSpec},
        models::{Platform, Source},
        normalizer::TextNormalizer,
        output::{save_cleaned_comments, OUTPUT_COLUMNS},
        stopwords::StopwordSet,
    },
};

#[test]
fn three_sources_with_a_schema_mismatch_and_empty_cleanings() {
    let dir = tempfile::tempdir().unwrap();

    let mut reddit = String::from("id,comment\n");
    for i in 0..10 {
        reddit.push_str(&format!("r{},Flood control project number {} is a ghost project\n", i, i));
    }
    fs::write(dir.path().join("reddit.csv"), reddit).unwrap();

    // nothing in here looks like a comment column
    fs::write(dir.path().join("x.csv"), "postUrl,postId\nhttps://x.com/a,1\nhttps://x.com/b,2\n").unwrap();

    let tiktok = "\
Now,2025-09-01 10:00:00
Post URL,https://www.tiktok.com/@abscbn/video/9

ID,Nickname,User @,User URL,Comment Text,Time,Likes,Profile Pic,Is Reply
1,Juan,juan,u,Ibalik ang pera ng bayan,1h,1,p,No
2,Ana,ana,u,@juan the,1h,1,p,Yes
3,Ben,ben,u,Kurakot!!!!! #FloodControlScam,2h,5,p,No
4,Lea,lea,u,http://bit.ly/xyz 😡😡😡,3h,0,p,No
5,Rey,rey,u,Sana may managot sa DPWH,4h,9,p,No
";
    fs::write(dir.path().join("abscbn.csv"), tiktok).unwrap();

    let sources = vec![
        SourceSpec::new(
            Platform::Reddit.into(),
            dir.path().join("reddit.csv"),
            ExtractionRule::column("comment").with_id_column("id"),
        ),
        SourceSpec::new(
            Platform::X.into(),
            dir.path().join("x.csv"),
            ExtractionRule::column("comments").with_id_column("postId"),
        ),
        SourceSpec::new(
            Source::new(Platform::TikTok, "TikTok-ABSCBN"),
            dir.path().join("abscbn.csv"),
            ExtractionRule::column("Comment Text").with_section_header("Comment Text"),
        ),
    ];

    let loader = SourceLoader::new(&["comment".to_owned(), "text".to_owned()]);
    let loaded = loader.load_all(&sources);

    assert_eq!(loaded.comments.len(), 15);
    assert_eq!(loaded.failures.len(), 1);
    assert_eq!(loaded.failures[0].kind(), "schema_mismatch");

    let normalizer = TextNormalizer::new(Arc::new(StopwordSet::new()));
    let cleaned = normalizer.normalize_all(loaded.comments);

    assert_eq!(cleaned.len(), 13);
    let keys: HashSet<_> = cleaned.iter().map(|comment| comment.key()).collect();
    assert_eq!(keys.len(), cleaned.len());

    let output = dir.path().join("preprocessed_comments.csv");
    save_cleaned_comments(&output, &cleaned).unwrap();

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(|h| h.to_owned()).collect();
    assert_eq!(headers, OUTPUT_COLUMNS);

    let rows: Vec<csv::StringRecord> = reader.records().map(|row| row.unwrap()).collect();
    assert_eq!(rows.len(), 13);

    // reddit rows come first, then tiktok, each in file order
    assert_eq!(&rows[0][0], "r0");
    assert_eq!(&rows[0][1], "Reddit");
    assert_eq!(&rows[0][3], "flood control project number ghost project");
    assert_eq!(&rows[10][1], "TikTok-ABSCBN");
    assert_eq!(&rows[10][3], "ibalik pera bayan");
    assert_eq!(&rows[11][0], "TikTok-ABSCBN_2");
    assert_eq!(&rows[11][3], "kurakot floodcontrolscam");
    assert_eq!(&rows[12][3], "sana managot dpwh");
    assert_eq!(&rows[12][6], "3");
}
