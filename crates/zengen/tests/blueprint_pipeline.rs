//! End-to-end scenarios running answers through scoring, layout, and PDF
//! rendering via the public service facade.

mod common {
    use std::sync::Mutex;

    use zengen::workflows::blueprint::{Jdi8Score, ScoreStore};

    #[derive(Default)]
    pub(super) struct MemoryScores {
        latest: Mutex<Jdi8Score>,
        writes: Mutex<usize>,
    }

    impl MemoryScores {
        pub(super) fn writes(&self) -> usize {
            *self.writes.lock().expect("writes mutex poisoned")
        }
    }

    impl ScoreStore for MemoryScores {
        fn record(&self, score: Jdi8Score) {
            *self.latest.lock().expect("score mutex poisoned") = score;
            *self.writes.lock().expect("writes mutex poisoned") += 1;
        }

        fn latest(&self) -> Jdi8Score {
            *self.latest.lock().expect("score mutex poisoned")
        }
    }
}

use std::sync::Arc;

use chrono::NaiveDate;
use common::MemoryScores;
use lopdf::content::Content;
use lopdf::{Document, Object};
use serde_json::json;
use zengen::workflows::blueprint::{
    classify, compute_score, layout, select_content, AnalysisVariant, BlueprintService, Catalog,
    CatalogItemKey, IntakeAnswers, Jdi8Score, LineEmphasis, ProtocolIntensity, ReportRequest,
    ReportStamp, Tier,
};

fn stamp() -> ReportStamp {
    ReportStamp::at(
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .and_then(|date| date.and_hms_opt(15, 9, 26))
            .expect("valid timestamp"),
    )
}

fn page_strings(pdf: &Document, page_number: u32) -> Vec<String> {
    let pages = pdf.get_pages();
    let page_id = pages.get(&page_number).expect("page exists");
    let raw = pdf.get_page_content(*page_id).expect("page content");
    Content::decode(&raw)
        .expect("content decodes")
        .operations
        .into_iter()
        .filter(|operation| operation.operator == "Tj")
        .filter_map(|operation| operation.operands.into_iter().next())
        .filter_map(|operand| operand.as_str().ok().map(|bytes| bytes.to_vec()))
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .collect()
}

fn link_targets(pdf: &Document, page_number: u32) -> Vec<String> {
    let pages = pdf.get_pages();
    let page = pdf
        .get_dictionary(pages[&page_number])
        .expect("page dictionary");
    let Ok(annotations) = page.get(b"Annots").and_then(Object::as_array) else {
        return Vec::new();
    };
    annotations
        .iter()
        .filter_map(|annotation| annotation.as_reference().ok())
        .filter_map(|id| pdf.get_dictionary(id).ok())
        .filter_map(|annotation| {
            annotation
                .get(b"A")
                .and_then(Object::as_dict)
                .and_then(|action| action.get(b"URI"))
                .and_then(Object::as_str)
                .ok()
                .map(|uri| String::from_utf8_lossy(uri).into_owned())
        })
        .collect()
}

#[test]
fn moderate_answers_produce_balanced_report() {
    let store = Arc::new(MemoryScores::default());
    let service = BlueprintService::new(store.clone(), Catalog::standard());

    let answers = IntakeAnswers::from_value(&json!({
        "rice": true,
        "miso_soup": true,
        "fish": true,
        "beef_pork": true,
    }));
    let response = service.score(&answers);
    assert_eq!(response.score.value(), 3);
    assert_eq!(response.tier, Tier::Moderate);
    assert_eq!(store.writes(), 1);

    let report = service
        .report_at(ReportRequest::default(), stamp())
        .expect("report renders");
    let pdf = Document::load_mem(&report.bytes).expect("pdf reloads");
    assert_eq!(pdf.get_pages().len(), 2);

    let first = page_strings(&pdf, 1);
    assert!(first.iter().any(|text| text == "3/8"));
    assert!(first.iter().any(|text| text == "RISK REDUCTION: MODERATE"));
    assert!(first
        .iter()
        .any(|text| text == "Generated on: 2025-03-14 | ID: GEN-150926"));
    // Score 3 sits in the foundation protocol and the critical analysis.
    assert!(first
        .iter()
        .any(|text| text == "12:12 eating window. Start the day with Miso soup."));
    assert!(first.iter().any(|text| text.starts_with("CRITICAL:")));
}

#[test]
fn explicit_score_drives_content_selection() {
    let service = BlueprintService::new(Arc::new(MemoryScores::default()), Catalog::standard());
    let report = service
        .report_at(ReportRequest::for_score(4), stamp())
        .expect("report renders");
    let pdf = Document::load_mem(&report.bytes).expect("pdf reloads");

    let first = page_strings(&pdf, 1);
    assert!(first.iter().any(|text| text == "4/8"));
    assert!(first
        .iter()
        .any(|text| text == "16:8 Fasting. Break fast with Miso."));
    assert!(!first.iter().any(|text| text.starts_with("CRITICAL:")));
}

#[test]
fn resources_page_links_every_catalog_item_twice() {
    let catalog =
        Catalog::standard().with_link(CatalogItemKey::Matcha, "https://tea.example/ippodo");
    let service = BlueprintService::new(Arc::new(MemoryScores::default()), catalog.clone());
    let report = service
        .report_at(ReportRequest::for_score(0), stamp())
        .expect("report renders");
    let pdf = Document::load_mem(&report.bytes).expect("pdf reloads");

    assert!(link_targets(&pdf, 1).is_empty());
    let targets = link_targets(&pdf, 2);
    assert_eq!(targets.len(), 10);
    for item in catalog.items() {
        assert_eq!(
            targets.iter().filter(|uri| **uri == item.url).count(),
            2,
            "{} should carry a title link and a button link",
            item.name
        );
    }
    assert!(targets.iter().any(|uri| uri == "https://tea.example/ippodo"));
}

#[test]
fn every_score_lays_out_on_two_pages() {
    for value in 0..=Jdi8Score::MAX as u64 {
        let score = Jdi8Score::saturating(value);
        let tier = classify(score);
        let content = select_content(score, tier, &Catalog::standard());
        let document = layout(score, tier, &content, &stamp()).expect("layout fits");
        assert_eq!(document.pages.len(), 2, "score {value}");

        let expected_intensity = match value {
            0..=3 => ProtocolIntensity::Foundation,
            4..=6 => ProtocolIntensity::Balanced,
            _ => ProtocolIntensity::Optimize,
        };
        assert_eq!(content.intensity, expected_intensity);
        assert_eq!(
            content.analysis_variant,
            if value < 4 {
                AnalysisVariant::Critical
            } else {
                AnalysisVariant::Standard
            }
        );
    }
}

#[test]
fn traditional_staples_without_meat_land_in_the_balanced_plan() {
    let answers = IntakeAnswers::from_value(&json!({
        "rice": true,
        "miso_soup": true,
        "seaweed": true,
        "pickles": false,
        "green_yellow_veg": false,
        "fish": false,
        "green_tea": false,
        "beef_pork": false,
    }));

    let score = compute_score(&answers);
    assert_eq!(score.value(), 4);

    let tier = classify(score);
    assert_eq!(tier, Tier::Moderate);

    let content = select_content(score, tier, &Catalog::standard());
    assert_eq!(content.analysis_variant, AnalysisVariant::Standard);
    assert_eq!(content.analysis.len(), 4);
    assert!(content
        .analysis
        .iter()
        .all(|line| line.emphasis == LineEmphasis::Standard));
    assert_eq!(content.protocol[0].day, "Mon");
    assert_eq!(content.protocol[0].action, "16:8 Fasting. Break fast with Miso.");

    let service = BlueprintService::new(Arc::new(MemoryScores::default()), Catalog::standard());
    let response = service.score(&answers);
    assert_eq!(response.score, score);
    assert_eq!(response.risk_reduction, "Moderate");
}

#[test]
fn key_order_does_not_change_the_score() {
    let forward: IntakeAnswers = serde_json::from_str(
        r#"{"rice": true, "fish": 1, "green_tea": "yes", "beef_pork": true}"#,
    )
    .expect("parses");
    let reversed: IntakeAnswers = serde_json::from_str(
        r#"{"beef_pork": true, "green_tea": "yes", "fish": 1, "rice": true}"#,
    )
    .expect("parses");

    assert_eq!(forward, reversed);
    assert_eq!(compute_score(&forward), compute_score(&reversed));
    assert_eq!(compute_score(&forward).value(), 3);
}

#[test]
fn duplicated_keys_resolve_to_the_last_value() {
    let raw = r#"{"rice": true, "fish": false, "rice": false, "fish": true}"#;

    let parsed: IntakeAnswers = serde_json::from_str(raw).expect("parses");
    let coerced =
        IntakeAnswers::from_value(&serde_json::from_str(raw).expect("parses as a value"));
    let expected = IntakeAnswers::from_value(&json!({ "rice": false, "fish": true }));

    assert_eq!(parsed, expected);
    assert_eq!(coerced, expected);
    // fish plus the low beef_pork point
    assert_eq!(compute_score(&parsed).value(), 2);
}
