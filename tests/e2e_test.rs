//! End-to-end tests for bizrules
//!
//! These tests run the CLI against a simulated controller tree and check the
//! report contents: counts, line numbers, per-category details and ordering.

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn get_cmd() -> Command {
    Command::cargo_bin("bizrules").unwrap()
}

fn ap_invoice_controller() -> String {
    let mut lines: Vec<String> = (1..42).map(|i| format!("// line {i}")).collect();
    lines.push("if (amt > limit) return this.JsonResultBadRequest(\"over limit\");".to_string());
    lines.push("var total = TaxAmt = line.TaxAmt;".to_string());
    lines.push("var vat = VatAmt;".to_string());
    lines.join("\n") + "\n"
}

fn create_controller_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Controllers");
    fs::create_dir_all(root.join("Legacy")).unwrap();

    fs::write(root.join("ApInvoiceController.cs"), ap_invoice_controller()).unwrap();
    fs::write(
        root.join("AccountCodeController.cs"),
        "if (!permission.View) return this.JsonResultForbidden();\n",
    )
    .unwrap();
    fs::write(
        root.join("GlJvController.cs"),
        "USING (var TRANSACTION = db.BeginTransaction())\n{\n    jv.Submit(\"draft\");\n}\n",
    )
    .unwrap();
    fs::write(root.join("IncomeController.cs"), "public class IncomeController {}\n").unwrap();
    fs::write(root.join("Helper.cs"), "ModelState.IsValid\n").unwrap();
    fs::write(root.join("Legacy/ArOldController.cs"), "TaxRate\n").unwrap();

    temp_dir
}

fn run(dir: &Path, extra: &[&str]) -> Value {
    get_cmd()
        .current_dir(dir)
        .args([
            "extract",
            "--quiet",
            "--controllers-dir",
            "Controllers",
            "--output-dir",
            "out",
        ])
        .args(extra)
        .assert()
        .code(0);
    read_report(dir)
}

fn read_report(dir: &Path) -> Value {
    let content = fs::read_to_string(dir.join("out/comprehensive-rules.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn e2e_business_rule_validation_line() {
    let tree = create_controller_tree();
    let report = run(tree.path(), &[]);

    let validation = &report["categories"]["validation"];
    assert_eq!(validation["count"], 1);
    let rule = &validation["rules"][0];
    assert_eq!(rule["type"], "Business rule validation");
    assert_eq!(rule["module"], "AP");
    assert_eq!(rule["file"], "ApInvoiceController.cs");
    assert_eq!(rule["line"], 42);
    assert!(rule["pattern"].as_str().unwrap().contains("JsonResultBadRequest"));
}

#[test]
fn e2e_tax_occurrences_per_pattern() {
    let tree = create_controller_tree();
    let report = run(tree.path(), &[]);

    let tax_rules = report["categories"]["tax"]["rules"].as_array().unwrap();
    let labels: Vec<&str> = tax_rules
        .iter()
        .filter(|r| r["module"] == "AP")
        .map(|r| r["type"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Tax amount", "Tax amount", "VAT"]);
    assert_eq!(report["byModule"]["AP"]["tax"], 3);
    assert!(tax_rules.iter().all(|r| r.get("code_snippet").is_none()));
}

#[test]
fn e2e_module_breakdown_is_consistent() {
    let tree = create_controller_tree();
    let report = run(tree.path(), &[]);

    let categories = [
        "validation",
        "calculation",
        "permission",
        "workflow",
        "tax",
        "business_logic",
    ];
    let modules = report["byModule"].as_object().unwrap();

    for category in categories {
        let per_module: u64 = modules.values().map(|m| m[category].as_u64().unwrap()).sum();
        assert_eq!(per_module, report["summary"][category].as_u64().unwrap());
        assert_eq!(
            report["summary"][category],
            report["categories"][category]["count"]
        );
    }
    for totals in modules.values() {
        let sum: u64 = categories.iter().map(|c| totals[*c].as_u64().unwrap()).sum();
        assert_eq!(totals["total"].as_u64().unwrap(), sum);
    }

    let names: Vec<&String> = modules.keys().collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn e2e_modules_without_occurrences_are_absent() {
    let tree = create_controller_tree();
    let report = run(tree.path(), &[]);

    let modules = report["byModule"].as_object().unwrap();
    assert!(!modules.contains_key("Income"));
    assert!(!modules.contains_key("Asset"));
    assert!(!modules.contains_key("AR"));
    assert!(!modules.contains_key("Unclassified"));
}

#[test]
fn e2e_gl_rules_share_one_module() {
    let tree = create_controller_tree();
    let report = run(tree.path(), &[]);

    let gl = &report["byModule"]["GL"];
    assert_eq!(gl["permission"], 2);
    assert_eq!(gl["business_logic"], 1);
    assert_eq!(gl["workflow"], 1);

    let files: Vec<&str> = report["categories"]["permission"]["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["file"].as_str().unwrap())
        .collect();
    assert_eq!(files, vec!["AccountCodeController.cs", "AccountCodeController.cs"]);
}

#[test]
fn e2e_business_logic_ignores_case() {
    let tree = create_controller_tree();
    let report = run(tree.path(), &[]);

    let rule = &report["categories"]["business_logic"]["rules"][0];
    assert_eq!(rule["type"], "Transaction usage");
    assert_eq!(rule["file"], "GlJvController.cs");
    assert_eq!(rule["line"], 1);
}

#[test]
fn e2e_workflow_snippet_and_permission_detail() {
    let tree = create_controller_tree();
    let report = run(tree.path(), &[]);

    let workflow = &report["categories"]["workflow"]["rules"][0];
    assert_eq!(workflow["type"], "Submit action");
    assert_eq!(workflow["code_snippet"], ".Submit(");
    assert_eq!(workflow["line"], 3);

    let permission = &report["categories"]["permission"]["rules"][0];
    assert_eq!(permission["type"], "View permission check");
    assert_eq!(permission["permission"], Value::Null);
}

#[test]
fn e2e_recursive_and_unclassified_from_config() {
    let tree = create_controller_tree();
    fs::write(
        tree.path().join(".bizrules.toml"),
        "recursive = true\ninclude_unclassified = true\n",
    )
    .unwrap();
    let report = run(tree.path(), &[]);

    assert_eq!(report["byModule"]["AR"]["tax"], 1);
    assert_eq!(report["byModule"]["Unclassified"]["validation"], 1);
}

#[test]
fn e2e_sample_limit_caps_rules_not_counts() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Controllers");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("ApBulkController.cs"), "TaxRate\n".repeat(8)).unwrap();

    let report = run(temp_dir.path(), &["--sample-limit", "5"]);

    assert_eq!(report["categories"]["tax"]["count"], 8);
    assert_eq!(report["categories"]["tax"]["rules"].as_array().unwrap().len(), 5);
    assert_eq!(report["summary"]["tax"], 8);
    assert_eq!(report["totalRules"], 8);
}

#[test]
fn e2e_rerun_is_deterministic() {
    let tree = create_controller_tree();

    let mut first = run(tree.path(), &[]);
    let mut second = run(tree.path(), &[]);
    first["extractionDate"] = Value::Null;
    second["extractionDate"] = Value::Null;
    assert_eq!(first, second);

    let first_text = fs::read_to_string(tree.path().join("out/comprehensive-rules.json")).unwrap();
    let third = run(tree.path(), &[]);
    let third_text = fs::read_to_string(tree.path().join("out/comprehensive-rules.json")).unwrap();
    let strip = |text: &str| {
        text.lines()
            .filter(|line| !line.contains("extractionDate"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(strip(&first_text), strip(&third_text));
    assert_eq!(third["totalRules"], second["totalRules"]);
}

#[test]
fn e2e_unreadable_file_is_skipped() {
    let tree = create_controller_tree();
    fs::write(
        tree.path().join("Controllers/ApBrokenController.cs"),
        [0x54u8, 0x61, 0x78, 0xff, 0xfe, 0x0a],
    )
    .unwrap();

    get_cmd()
        .current_dir(tree.path())
        .args([
            "extract",
            "--quiet",
            "--controllers-dir",
            "Controllers",
            "--output-dir",
            "out",
        ])
        .assert()
        .code(1);

    let report = read_report(tree.path());
    assert_eq!(report["byModule"]["AP"]["tax"], 3);
    assert_eq!(report["categories"]["validation"]["count"], 1);
}
