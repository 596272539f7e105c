mod common;
use common::cli::{
    LanesWorkspace, add_note, create_lane, lane_notes, run_lanes, run_lanes_with_stdin,
};

#[test]
fn test_move_note_within_lane() {
    let workspace = LanesWorkspace::initialized();
    let lane = create_lane(&workspace, "Todo");
    let n1 = add_note(&workspace, "one", Some(&lane));
    let n2 = add_note(&workspace, "two", Some(&lane));
    let n3 = add_note(&workspace, "three", Some(&lane));

    let output = run_lanes(&workspace, ["move", &n1, &n2], "move");
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(lane_notes(&workspace, &lane), vec![n2, n1, n3]);
}

#[test]
fn test_move_note_across_lanes() {
    let workspace = LanesWorkspace::initialized();
    let a = create_lane(&workspace, "A");
    let b = create_lane(&workspace, "B");
    let n1 = add_note(&workspace, "n1", Some(&a));
    let n2 = add_note(&workspace, "n2", Some(&a));
    let n3 = add_note(&workspace, "n3", Some(&b));
    let n4 = add_note(&workspace, "n4", Some(&b));

    let output = run_lanes(&workspace, ["move", &n1, &n3], "move");
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(lane_notes(&workspace, &a), vec![n2]);
    assert_eq!(lane_notes(&workspace, &b), vec![n1, n3, n4]);
}

#[test]
fn test_move_unknown_note_fails() {
    let workspace = LanesWorkspace::initialized();
    let lane = create_lane(&workspace, "Todo");
    let n1 = add_note(&workspace, "one", Some(&lane));

    let output = run_lanes(&workspace, ["move", &n1, "note-ghost"], "move");
    assert!(!output.status.success());
    assert!(output.stderr.contains("Note not found: note-ghost"));
    assert_eq!(lane_notes(&workspace, &lane), vec![n1]);
}

#[test]
fn test_move_lane() {
    let workspace = LanesWorkspace::initialized();
    let a = create_lane(&workspace, "A");
    let b = create_lane(&workspace, "B");
    let c = create_lane(&workspace, "C");

    let output = run_lanes(&workspace, ["--json", "lane", "move", &a, &c], "lane_move");
    assert!(output.status.success(), "{}", output.stderr);
    let order: Vec<String> = output
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(order, vec![b, c, a]);
}

#[test]
fn test_move_lane_unknown_target_fails() {
    let workspace = LanesWorkspace::initialized();
    let a = create_lane(&workspace, "A");

    let output = run_lanes(&workspace, ["lane", "move", &a, "lane-nope"], "lane_move");
    assert!(!output.status.success());
    assert!(output.stderr.contains("Lane not found: lane-nope"));
}

#[test]
fn test_apply_actions_from_stdin() {
    let workspace = LanesWorkspace::initialized();
    let todo = create_lane(&workspace, "Todo");
    let done = create_lane(&workspace, "Done");
    let n1 = add_note(&workspace, "one", None);
    let n2 = add_note(&workspace, "two", None);

    let actions = format!(
        r#"{{"action":"attach","lane_id":"{todo}","note_id":"{n1}"}}

{{"action":"attach","lane_id":"{todo}"}}
{{"action":"move_note","source_id":"{n2}","target_id":"{n1}"}}
{{"action":"update","id":"{done}","name":"Shipped"}}
{{"action":"move_lane","source_id":"{done}","target_id":"{todo}"}}
"#
    );
    let output = run_lanes_with_stdin(&workspace, ["apply", "-"], &actions, "apply");
    assert!(output.status.success(), "{}", output.stderr);
    assert!(output.stdout.contains("Applied 5 action(s)"));

    assert_eq!(lane_notes(&workspace, &todo), vec![n2, n1]);
    let output = run_lanes(&workspace, ["--json", "lane", "list"], "list");
    let lanes = output.json();
    assert_eq!(lanes[0]["name"], "Shipped");
    assert_eq!(lanes[1]["id"], todo.as_str());
}

#[test]
fn test_apply_stops_at_first_failure_without_saving() {
    let workspace = LanesWorkspace::initialized();
    let todo = create_lane(&workspace, "Todo");
    let n1 = add_note(&workspace, "one", None);

    let actions = format!(
        "{{\"action\":\"attach\",\"lane_id\":\"{todo}\",\"note_id\":\"{n1}\"}}\n{{\"action\":\"delete\",\"id\":\"lane-missing\"}}\n"
    );
    let output = run_lanes_with_stdin(&workspace, ["apply", "-"], &actions, "apply");
    assert!(!output.status.success());
    assert!(output.stderr.contains("line 2"));
    assert!(lane_notes(&workspace, &todo).is_empty());
}
