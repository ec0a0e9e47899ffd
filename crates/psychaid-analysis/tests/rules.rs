use psychaid_analysis::rules::{select_category_recommendations, select_overall_narrative};
use psychaid_core::models::category::CategoryId;
use psychaid_core::models::result::AssessmentResult;
use psychaid_core::models::severity::Severity;
use psychaid_core::models::user::UserInfo;
use psychaid_instruments::{recommendations_for, FALLBACK_RECOMMENDATIONS};

fn result(category: CategoryId, percentage: u32) -> AssessmentResult {
    let severity = Severity::from_percentage(percentage);
    AssessmentResult {
        category,
        score: 0,
        max_score: 12,
        percentage,
        severity,
        recommendations: recommendations_for(category, severity),
    }
}

#[test]
fn unknown_pairs_return_fallback_triple() {
    let fallback: Vec<String> = FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect();
    assert_eq!(select_category_recommendations("nutrition", "low"), fallback);
    assert_eq!(select_category_recommendations("social", "catastrophic"), fallback);
}

#[test]
fn table_covers_every_category_and_severity() {
    let fallback: Vec<String> = FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect();
    for category in CategoryId::ALL {
        for severity in Severity::ALL {
            let recs = select_category_recommendations(category.as_str(), severity.as_str());
            assert_eq!(recs.len(), 3);
            assert_ne!(recs, fallback, "{category}/{severity} fell back");
        }
    }
}

#[test]
fn severe_category_recommendations_follow_band_list() {
    let info = UserInfo::new("Alex Kim", 30, "non-binary");
    let results = vec![
        result(CategoryId::Depression, 100),
        result(CategoryId::Anxiety, 0),
    ];
    // mean of 100 and 0
    let narrative = select_overall_narrative(&info, &results, 50);

    let mut expected: Vec<String> = vec![
        "Seek immediate professional mental health support".to_string(),
        "Consider therapy or counseling services".to_string(),
        "Develop a comprehensive treatment plan with healthcare providers".to_string(),
        "Establish emergency support contacts".to_string(),
    ];
    expected.extend(recommendations_for(CategoryId::Depression, Severity::Severe));

    assert_eq!(narrative.recommendations, expected);
    assert_eq!(
        narrative.diagnosis,
        "Significant psychological concerns requiring attention"
    );
}

#[test]
fn repeated_recommendations_are_not_deduplicated() {
    let info = UserInfo::new("Alex Kim", 30, "female");
    // Both severe, both contribute "Seek immediate professional intervention".
    let results = vec![
        result(CategoryId::Depression, 90),
        result(CategoryId::Anxiety, 90),
        result(CategoryId::Social, 60),
    ];
    let narrative = select_overall_narrative(&info, &results, 80);

    let count = narrative
        .recommendations
        .iter()
        .filter(|r| r.as_str() == "Seek immediate professional intervention")
        .count();
    assert_eq!(count, 2);
    // 4 band items + 3 per elevated category
    assert_eq!(narrative.recommendations.len(), 4 + 3 * 3);
}

#[test]
fn low_and_moderate_categories_add_nothing() {
    let info = UserInfo::new("Sam", 61, "male");
    let results = vec![
        result(CategoryId::Cognitive, 25),
        result(CategoryId::Behavioral, 50),
    ];
    let narrative = select_overall_narrative(&info, &results, 38);
    assert_eq!(narrative.recommendations.len(), 4);
    assert_eq!(
        narrative.diagnosis,
        "Severe psychological distress requiring immediate intervention"
    );
    assert!(narrative.analysis.contains("Sam"));
    assert!(narrative.analysis.contains("38%"));
}
