use psychaid_core::models::category::CategoryId;
use psychaid_instruments::{all_categories, get_category};

#[test]
fn category_maxima_match_option_tables() {
    let expected = [
        (CategoryId::Depression, 13),
        (CategoryId::Anxiety, 12),
        (CategoryId::Social, 12),
        (CategoryId::Cognitive, 12),
        (CategoryId::Behavioral, 12),
    ];
    for (id, max) in expected {
        assert_eq!(get_category(id).max_score(), max, "{id}");
    }
}

#[test]
fn options_are_ordered_and_start_at_zero() {
    for category in all_categories() {
        for q in category.questions() {
            let values: Vec<u32> = q.options.iter().map(|o| o.value).collect();
            let expected: Vec<u32> = (0..values.len() as u32).collect();
            assert_eq!(values, expected, "{}", q.id);
        }
    }
}

#[test]
fn categories_serialize_their_questions() {
    let depression = get_category(CategoryId::Depression);
    let json = serde_json::to_value(depression.questions()).unwrap();
    assert_eq!(json[0]["id"], "dep_1");
    assert_eq!(json[0]["category"], "depression");
    assert_eq!(json[0]["options"][4]["label"], "Almost always");
}
