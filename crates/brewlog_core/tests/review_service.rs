use brewlog_core::{Category, CategoryId, CategoryService, Review, ReviewId, ReviewService};
use chrono::NaiveDate;
use std::sync::Arc;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Beer (1), Wine (2), sentinel (3).
fn services() -> (Arc<CategoryService>, ReviewService) {
    let categories = Arc::new(CategoryService::with_names(["Beer", "Wine"]));
    let reviews = ReviewService::new(Arc::clone(&categories));
    (categories, reviews)
}

fn review(name: &str, category: Option<Category>, score: u32, count: u32, date: NaiveDate) -> Review {
    let mut review = Review::new(name, date);
    review.category = category;
    review.score = score;
    review.count = count;
    review
}

#[test]
fn deleted_category_resolves_to_none_on_next_save() {
    let (categories, reviews) = services();
    assert_eq!(categories.undefined_category().id, Some(CategoryId::new(3)));
    let beer = categories.find_category_by_id(CategoryId::new(1)).expect("category should exist");
    assert_eq!(beer.name, "Beer");

    let ale = review("Ale", Some(beer.clone()), 4, 2, day(2023, 1, 1));
    let stored = reviews.save_review(&ale);
    assert_eq!(stored.id, Some(ReviewId::new(1)));
    assert_eq!(stored.category.as_ref().map(|c| c.name.as_str()), Some("Beer"));

    assert!(categories.delete_category(&beer).expect("delete should succeed"));

    let mut resaved = ale.clone();
    resaved.id = stored.id;
    let updated = reviews.save_review(&resaved);
    assert_eq!(updated.id, Some(ReviewId::new(1)));
    assert_eq!(updated.category, None);
    assert_eq!(
        reviews.find_review_by_id(ReviewId::new(1)).expect("review should exist").category,
        None
    );
    assert_eq!(reviews.len(), 1);
}

#[test]
fn saving_with_missing_category_id_stores_none() {
    let (_categories, reviews) = services();
    let ghost = Category::with_id(CategoryId::new(99), "Ghost");

    let stored = reviews.save_review(&review("Phantom Lager", Some(ghost), 3, 1, day(2022, 5, 5)));
    assert_eq!(stored.category, None);
}

#[test]
fn save_resolves_current_category_name() {
    let (categories, reviews) = services();
    let stale = Category::with_id(CategoryId::new(2), "Old Wine Name");

    let stored = reviews.save_review(&review("Shiraz", Some(stale), 5, 3, day(2021, 8, 1)));
    assert_eq!(
        stored.category,
        categories.find_category_by_id(CategoryId::new(2))
    );
}

#[test]
fn sentinel_reference_stays_on_sentinel() {
    let (categories, reviews) = services();
    let undefined = categories.undefined_category();

    let stored = reviews.save_review(&review("Mystery", Some(undefined.clone()), 2, 1, day(2020, 1, 1)));
    assert_eq!(stored.category, Some(undefined));
}

#[test]
fn update_overwrites_fields_and_category_in_place() {
    let (categories, reviews) = services();
    let beer = categories.find_category_or_throw("Beer").expect("category should resolve");
    let wine = categories.find_category_or_throw("Wine").expect("category should resolve");

    let stored = reviews.save_review(&review("Ale", Some(beer), 4, 2, day(2023, 1, 1)));

    let mut edit = stored.clone();
    edit.name = "Rosé".to_string();
    edit.score = 5;
    edit.count = 7;
    edit.date = day(2023, 6, 30);
    edit.category = Some(wine.clone());
    let updated = reviews.save_review(&edit);
    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.name, "Rosé");
    assert_eq!((updated.score, updated.count), (5, 7));
    assert_eq!(updated.date, day(2023, 6, 30));
    assert_eq!(updated.category, Some(wine));

    edit.category = None;
    assert_eq!(reviews.save_review(&edit).category, None);
    assert_eq!(reviews.len(), 1);
}

#[test]
fn unknown_review_id_gets_fresh_id() {
    let (_categories, reviews) = services();
    let mut orphan = review("Cask Ale", None, 3, 1, day(2019, 3, 3));
    orphan.id = Some(ReviewId::new(40));

    let stored = reviews.save_review(&orphan);
    assert_eq!(stored.id, Some(ReviewId::new(1)));
    assert_eq!(reviews.find_review_by_id(ReviewId::new(40)), None);
}

#[test]
fn returned_reviews_are_independent_copies() {
    let (_categories, reviews) = services();
    let stored = reviews.save_review(&review("Porter", None, 3, 1, day(2019, 3, 3)));

    let mut listed = reviews.find_reviews("");
    listed[0].name = "Tampered".to_string();

    assert_eq!(
        reviews
            .find_review_by_id(stored.id.expect("saved entity has id"))
            .expect("review should exist")
            .name,
        "Porter"
    );
}

#[test]
fn find_reviews_orders_newest_first() {
    let (_categories, reviews) = services();
    for name in ["First", "Second", "Third"] {
        reviews.save_review(&review(name, None, 1, 1, day(2020, 1, 1)));
    }

    let names: Vec<String> = reviews
        .find_reviews("")
        .into_iter()
        .map(|review| review.name)
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[test]
fn find_reviews_matches_category_name_case_insensitively() {
    let (categories, reviews) = services();
    let beer = categories.find_category_or_throw("Beer").expect("category should resolve");
    let wine = categories.find_category_or_throw("Wine").expect("category should resolve");

    let stout = reviews.save_review(&review("Stout", Some(beer), 4, 2, day(2023, 1, 1)));
    reviews.save_review(&review("Merlot", Some(wine), 3, 1, day(2023, 1, 2)));

    for filter in ["beer", "BEER", "Bee"] {
        let found = reviews.find_reviews(filter);
        assert_eq!(found.len(), 1, "filter {filter}");
        assert_eq!(found[0].id, stout.id);
    }
}

#[test]
fn find_reviews_does_not_match_across_field_boundaries() {
    let (categories, reviews) = services();
    let beer = categories.find_category_or_throw("Beer").expect("category should resolve");
    reviews.save_review(&review("Stout", Some(beer), 4, 2, day(2023, 1, 1)));

    // Joined text is "stout\tbeer\t4\t2\t01/01/2023".
    assert!(reviews.find_reviews("stoutbeer").is_empty());
    assert!(reviews.find_reviews("beer4").is_empty());
    assert!(reviews.find_reviews("42").is_empty());
    assert!(reviews.find_reviews("22023").is_empty());
    assert_eq!(reviews.find_reviews("01/01/2023").len(), 1);
}

#[test]
fn find_reviews_renders_missing_category_as_undefined() {
    let (_categories, reviews) = services();
    reviews.save_review(&review("Unlabelled", None, 2, 1, day(2018, 7, 7)));

    assert_eq!(reviews.find_reviews("undefined").len(), 1);
    assert_eq!(reviews.find_reviews("07/07/2018").len(), 1);
}

#[test]
fn delete_review_reports_whether_removed_and_ids_are_not_reused() {
    let (categories, reviews) = services();
    let first = reviews.save_review(&review("Pils", None, 3, 1, day(2020, 1, 1)));
    let categories_before = categories.len();

    assert!(reviews.delete_review(&first));
    assert!(!reviews.delete_review(&first));
    assert_eq!(categories.len(), categories_before);

    for idx in 0..10 {
        let created = reviews.save_review(&review(&format!("Beer {idx}"), None, 1, 1, day(2020, 1, 1)));
        assert_ne!(created.id, first.id);
    }
}

#[test]
fn reviews_in_category_and_uncategorized_split_by_reference() {
    let (categories, reviews) = services();
    let beer = categories.find_category_or_throw("Beer").expect("category should resolve");

    let tagged = reviews.save_review(&review("Bock", Some(beer.clone()), 4, 1, day(2020, 1, 1)));
    let loose = reviews.save_review(&review("Mystery", None, 2, 1, day(2020, 1, 1)));

    let in_beer = reviews.reviews_in_category(beer.id.expect("saved entity has id"));
    assert_eq!(in_beer.len(), 1);
    assert_eq!(in_beer[0].id, tagged.id);

    let uncategorized = reviews.uncategorized_reviews();
    assert_eq!(uncategorized.len(), 1);
    assert_eq!(uncategorized[0].id, loose.id);
}

#[test]
fn concurrent_saves_and_reads_do_not_lose_reviews() {
    let (categories, reviews) = services();
    let beer = categories.find_category_or_throw("Beer").expect("category should resolve");

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let reviews = &reviews;
            let beer = beer.clone();
            scope.spawn(move || {
                for idx in 0..25 {
                    reviews.save_review(&review(
                        &format!("Worker {worker} brew {idx}"),
                        Some(beer.clone()),
                        3,
                        1,
                        day(2020, 1, 1),
                    ));
                    let _ = reviews.find_reviews("brew");
                }
            });
        }
    });

    assert_eq!(reviews.len(), 100);
    assert_eq!(reviews.find_reviews("beer").len(), 100);
}

#[test]
fn category_rename_shows_in_reads_without_resaving_reviews() {
    let (categories, reviews) = services();
    let beer = categories
        .find_category_or_throw("Beer")
        .expect("Beer is seeded");
    let beer_id = beer.id.expect("seeded category has id");
    let stored = reviews.save_review(&review("Stout", Some(beer), 4, 2, day(2023, 1, 1)));
    let stored_id = stored.id.expect("saved review has id");

    categories
        .save_category(&Category::with_id(beer_id, "Lager"))
        .expect("plain category may be renamed");

    let found = reviews.find_reviews("lager");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category_name(), "Lager");
    assert!(reviews.find_reviews("beer").is_empty());
    assert_eq!(
        reviews
            .find_review_by_id(stored_id)
            .expect("review still stored")
            .category_name(),
        "Lager"
    );
    assert_eq!(reviews.reviews_in_category(beer_id)[0].category_name(), "Lager");
}

#[test]
fn deleted_category_keeps_last_name_until_next_save() {
    let (categories, reviews) = services();
    let wine = categories
        .find_category_or_throw("Wine")
        .expect("Wine is seeded");
    let stored = reviews.save_review(&review("Merlot", Some(wine.clone()), 3, 1, day(2022, 2, 2)));

    categories.delete_category(&wine).expect("plain category may be deleted");
    assert_eq!(reviews.find_reviews("wine").len(), 1);

    let resaved = reviews.save_review(&stored);
    assert_eq!(resaved.category_name(), "Undefined");
    assert!(reviews.find_reviews("wine").is_empty());
}
