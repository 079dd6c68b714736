use anyhow::Result;
use serde_json::json;
use tempfile::tempdir;

use fieldnorm::app::normalize_use_case::NormalizeUseCase;
use fieldnorm::config::NormalizeConfig;
use fieldnorm::infra::ndjson_output_adapter::NdjsonOutputAdapter;
use fieldnorm::pipeline::profile::ProfileRegistry;
use fieldnorm::pipeline::report::BatchReport;
use fieldnorm::pipeline::{FieldOutcome, NormalizedRecord, RawRecord};

fn build_use_case(
    profile_id: &str,
    records_path: &std::path::Path,
    report_path: &std::path::Path,
) -> Result<NormalizeUseCase> {
    let registry = ProfileRegistry::new(&NormalizeConfig::default());
    let profile = registry.get(profile_id)?.clone();
    let adapter = NdjsonOutputAdapter::new(records_path, report_path, true)?;
    Ok(NormalizeUseCase::new(profile, Box::new(adapter)))
}

fn read_output(path: &std::path::Path) -> Vec<NormalizedRecord> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_contacts_batch_end_to_end() -> Result<()> {
    let temp_dir = tempdir()?;
    let records_path = temp_dir.path().join("contacts.ndjson");
    let report_path = temp_dir.path().join("contacts.report.json");
    let use_case = build_use_case("contacts", &records_path, &report_path)?;

    let batch = vec![
        RawRecord::new(
            "contacts",
            "contacts:1",
            json!({
                "first_name": "Frodo",
                "last_name": "Baggins_",
                "phone_number": "123-545-5421",
                "address": "123 Shire Lane, Shire",
                "paying_customer": "Yes",
                "do_not_contact": "No"
            }),
        ),
        // No usable phone number: dropped after normalization
        RawRecord::new(
            "contacts",
            "contacts:2",
            json!({
                "first_name": "Anakin",
                "last_name": "Skywalker",
                "phone_number": "876|678|3",
                "address": "910 Tatooine Road, Tatooine",
                "paying_customer": "Yes",
                "do_not_contact": "N"
            }),
        ),
        // Asked not to be contacted: dropped
        RawRecord::new(
            "contacts",
            "contacts:3",
            json!({
                "first_name": "Creed",
                "last_name": "/Braton",
                "phone_number": "(123) 545-5421",
                "address": null,
                "paying_customer": "N/a",
                "do_not_contact": "Yes"
            }),
        ),
    ];

    let report = use_case.normalize_batch(&batch).await?;
    assert_eq!(report.records_in, 3);
    assert_eq!(report.records_out, 1);
    assert_eq!(report.records_dropped["do_not_contact is set"], 1);
    assert_eq!(report.records_dropped["phone_number is empty"], 1);

    let written = read_output(&records_path);
    assert_eq!(written.len(), 1);
    let survivor = &written[0];
    assert_eq!(
        survivor.outcome("last_name"),
        Some(&FieldOutcome::Known(json!("Baggins")))
    );
    assert_eq!(
        survivor.outcome("phone_number"),
        Some(&FieldOutcome::Known(json!("123-545-5421")))
    );
    match survivor.outcome("address") {
        Some(FieldOutcome::Known(address)) => {
            assert_eq!(address["street"], json!("123 Shire Lane"));
            assert_eq!(address["state"], json!("Shire"));
            assert_eq!(address["zip"], json!(null));
        }
        other => panic!("expected split address, got {:?}", other),
    }

    // The report round-trips from disk
    let report_json = std::fs::read_to_string(&report_path)?;
    let from_disk: BatchReport = serde_json::from_str(&report_json)?;
    assert_eq!(from_disk.records_out, 1);
    Ok(())
}

#[tokio::test]
async fn test_tree_census_inapplicable_fill_end_to_end() -> Result<()> {
    let temp_dir = tempdir()?;
    let records_path = temp_dir.path().join("trees.ndjson");
    let report_path = temp_dir.path().join("trees.report.json");
    let use_case = build_use_case("tree_census", &records_path, &report_path)?;

    let batch = vec![
        RawRecord::new(
            "tree_census",
            "trees:1",
            json!({"status": "Alive", "health": "Good", "spc_latin": "Acer rubrum", "steward": "None", "sidewalk": "NoDamage"}),
        ),
        RawRecord::new("tree_census", "trees:2", json!({"status": "Stump"})),
        RawRecord::new("tree_census", "trees:3", json!({"status": "Dead", "problems": null})),
    ];

    let report = use_case.normalize_batch(&batch).await?;
    assert_eq!(report.records_out, 3);
    // Five condition columns filled for each of the stump and the dead tree
    assert_eq!(report.fields_filled, 10);

    let written = read_output(&records_path);
    // The live tree keeps observed values; its absent problems stay unknown
    assert_eq!(written[0].outcome("health"), Some(&FieldOutcome::Known(json!("Good"))));
    assert!(written[0].outcome("problems").unwrap().is_unknown());
    // Stump and dead records get the inapplicable marker
    for record in &written[1..] {
        assert_eq!(
            record.outcome("health"),
            Some(&FieldOutcome::Known(json!("Not Applicable"))),
            "record {} should be filled",
            record.record_path
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_player_roster_mixed_units_end_to_end() -> Result<()> {
    let temp_dir = tempdir()?;
    let records_path = temp_dir.path().join("roster.ndjson");
    let report_path = temp_dir.path().join("roster.report.json");
    let use_case = build_use_case("player_roster", &records_path, &report_path)?;

    let batch = vec![
        RawRecord::new(
            "player_roster",
            "roster:1",
            json!({
                "club": "\n\n\nFC Barcelona",
                "contract": "2004 ~ 2021",
                "height": "170cm",
                "weight": "72kg",
                "hits": "771",
                "weak_foot": "4 ★",
                "skill_moves": "4 ★",
                "reputation": "5 ★"
            }),
        ),
        RawRecord::new(
            "player_roster",
            "roster:2",
            json!({
                "club": "Juventus",
                "contract": "Jun 30, 2021 On Loan",
                "height": "6'2\"",
                "weight": "154lbs",
                "hits": "1.6K",
                "weak_foot": "3 ★",
                "skill_moves": "2 ★",
                "reputation": "1 ★"
            }),
        ),
        // Free agent with a malformed height: failure surfaced, record kept
        RawRecord::new(
            "player_roster",
            "roster:3",
            json!({"contract": "Free", "height": "tall", "hits": null}),
        ),
    ];

    let report = use_case.normalize_batch(&batch).await?;
    assert_eq!(report.records_in, 3);
    assert_eq!(report.records_out, 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].record_path, "roster:3");
    assert_eq!(report.failures[0].column, "height");

    let written = read_output(&records_path);
    assert_eq!(written[0].outcome("club"), Some(&FieldOutcome::Known(json!("FC Barcelona"))));
    assert_eq!(written[0].outcome("height"), Some(&FieldOutcome::Known(json!(170))));
    match written[0].outcome("contract") {
        Some(FieldOutcome::Known(terms)) => {
            assert_eq!(terms["start_year"], json!(2004));
            assert_eq!(terms["end_year"], json!(2021));
            assert_eq!(terms["length_years"], json!(17));
            assert_eq!(terms["status"], json!("UnderContract"));
        }
        other => panic!("expected contract terms, got {:?}", other),
    }

    assert_eq!(written[1].outcome("height"), Some(&FieldOutcome::Known(json!(188))));
    assert_eq!(written[1].outcome("weight"), Some(&FieldOutcome::Known(json!(70))));
    assert_eq!(written[1].outcome("hits"), Some(&FieldOutcome::Known(json!(1600))));
    match written[1].outcome("contract") {
        Some(FieldOutcome::Known(terms)) => {
            assert_eq!(terms["status"], json!("OnLoan"));
            assert_eq!(terms["length_years"], json!(0));
            assert_eq!(terms["start_year"], json!(null));
        }
        other => panic!("expected contract terms, got {:?}", other),
    }

    // Missing hit count is zero by policy; malformed height is a failure,
    // not a silent default
    assert_eq!(written[2].outcome("hits"), Some(&FieldOutcome::Known(json!(0))));
    assert!(written[2].outcome("height").unwrap().is_failed());
    Ok(())
}
