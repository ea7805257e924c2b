use super::*;

#[test]
fn lookup_finds_every_listed_project() {
    for p in PROJECTS {
        let found = project(p.id).expect("listed project must resolve");
        assert_eq!(found.title, p.title);
        assert_eq!(found.problem, p.problem);
        assert_eq!(found.solution, p.solution);
        assert_eq!(found.impact, p.impact);
    }
}

#[test]
fn lookup_unknown_id_returns_none() {
    assert!(project("nope").is_none());
    assert!(project("").is_none());
    assert!(project("OBSIDIAN").is_none());
}

#[test]
fn tag_and_screenshot_order_is_preserved() {
    let p = project("obsidian").expect("obsidian exists");
    assert_eq!(
        p.tags,
        ["Web Crypto API", "Supabase", "Zero Knowledge", "AES-GCM"]
    );
    assert_eq!(p.screenshots, ["image1b.png", "image1c.png", "image1d.png"]);
}

#[test]
fn every_project_has_complete_link_and_image_fields() {
    for p in PROJECTS {
        assert!(p.live_url.starts_with("https://"));
        assert!(p.source_url.starts_with("https://"));
        assert!(!p.hero_image.is_empty());
        assert!(!p.screenshots.is_empty());
    }
}
