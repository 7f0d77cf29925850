#![cfg(test)]
use std::io::Cursor;

use estate_common::building::{Building, BuildingDetails, BuildingKind};
use estate_common::project::BuildingProject;
use estate_core::generator::BuildingGenerator;
use estate_core::session::{Outcome, Session};

struct Transcript {
    outcome: Outcome,
    output: String,
}

fn play(seed: u64, script: &str) -> Transcript {
    play_bytes(seed, script.as_bytes())
}

fn play_bytes(seed: u64, script: &[u8]) -> Transcript {
    let mut session = Session::new(
        Cursor::new(script.to_vec()),
        Vec::new(),
        BuildingGenerator::seeded(seed),
    );
    let outcome = session.run().expect("session should not fail on in-memory I/O");
    let output = String::from_utf8(session.into_output()).expect("output should be UTF-8");
    Transcript { outcome, output }
}

fn project_of(transcript: &Transcript) -> &BuildingProject {
    match &transcript.outcome {
        Outcome::Completed(project) => project,
        Outcome::Exited => panic!("session exited without a project"),
    }
}

/// Text printed after "Final Building Project:".
fn final_render(output: &str) -> &str {
    let (_, render) = output
        .split_once("Final Building Project:\n")
        .expect("final project should be printed");
    render
}

#[test]
fn exit_at_first_prompt() {
    let transcript = play(1, "0\n");

    assert_eq!(transcript.outcome, Outcome::Exited);
    assert!(transcript.output.ends_with("0. Exit\nEnter your choice: Exiting program...\n"));
    assert!(!transcript.output.contains("Generated"));
    assert!(!transcript.output.contains("Project Description"));
}

#[test]
fn single_residential_building() {
    let transcript = play(2, "1\nDowntown\nno\n");
    let project = project_of(&transcript);

    assert_eq!(project.len(), 1);
    assert_eq!(project.description(), "Downtown");

    let building: &Building = &project.buildings()[0];
    assert_eq!(building.kind(), BuildingKind::Residential);
    assert_eq!(
        project.to_string(),
        format!("Project Description: Downtown\nBuildings:\n{building}\n")
    );
    assert_eq!(final_render(&transcript.output), format!("{project}\n"));
}

#[test]
fn residential_then_commercial() {
    let transcript = play(3, "1\nMixed use\nyes\n2\nno\n");
    let project = project_of(&transcript);

    let kinds: Vec<BuildingKind> = project.buildings().iter().map(Building::kind).collect();
    assert_eq!(kinds, [BuildingKind::Residential, BuildingKind::Commercial]);

    let render = final_render(&transcript.output);
    let lines: Vec<&str> = render.lines().collect();
    assert_eq!(lines[0], "Project Description: Mixed use");
    assert_eq!(lines[1], "Buildings:");
    assert!(lines[2].starts_with("Name: Residential Building, "));
    assert!(lines[3].starts_with("Name: Commercial Building, "));
}

#[test]
fn continuation_is_case_insensitive() {
    for answer in ["YES", "Yes", "yes", "yEs"] {
        let script = format!("2\nPark\n{answer}\n1\nno\n");
        let transcript = play(4, &script);
        assert_eq!(project_of(&transcript).len(), 2, "answer {answer:?} should continue");
    }

    for answer in ["", "no", "y", "yes please", " yes"] {
        let script = format!("2\nPark\n{answer}\n1\nno\n");
        let transcript = play(4, &script);
        assert_eq!(project_of(&transcript).len(), 1, "answer {answer:?} should stop");
    }
}

#[test]
fn rejected_menu_input_changes_nothing() {
    let noisy = play(5, "hello\n3\n-2\n1.0\n1\nQuay\nyes\nfoo\n42\n2\nno\n");
    let clean = play(5, "1\nQuay\nyes\n2\nno\n");

    assert_eq!(noisy.outcome, clean.outcome);
    assert_eq!(noisy.output.matches("0. Exit").count(), 5);
    assert_eq!(noisy.output.matches("0. Finish and view project").count(), 3);
}

#[test]
fn many_buildings_keep_insertion_order() {
    let picks = ["1", "2", "2", "1", "2", "1", "1"];
    let mut script = format!("{}\nEstate\n", picks[0]);
    for pick in &picks[1..] {
        script.push_str(&format!("yes\n{pick}\n"));
    }
    script.push_str("no\n");

    let transcript = play(6, &script);
    let project = project_of(&transcript);
    assert_eq!(project.len(), picks.len());

    let render = final_render(&transcript.output);
    let summaries: Vec<&str> = render.lines().skip(2).filter(|l| !l.is_empty()).collect();
    assert_eq!(summaries.len(), picks.len());

    for ((pick, summary), building) in picks.iter().zip(&summaries).zip(project.buildings()) {
        let expected = if *pick == "1" { BuildingKind::Residential } else { BuildingKind::Commercial };
        assert_eq!(building.kind(), expected);
        assert_eq!(*summary, building.to_string());
    }
}

#[test]
fn generated_values_stay_in_range() {
    let transcript = play(7, "1\nRanges\nyes\n2\nno\n");
    let project = project_of(&transcript);

    for building in project.buildings() {
        match building.details() {
            BuildingDetails::Residential { apartments, .. } => {
                assert!((500.0..2000.0).contains(&building.area()));
                assert!((3..20).contains(&building.floors()));
                assert!((1950..2020).contains(&building.year_built()));
                assert!((10..100).contains(apartments));
            }
            BuildingDetails::Commercial { .. } => {
                assert!((1000.0..5000.0).contains(&building.area()));
                assert!((1..10).contains(&building.floors()));
                assert!((1970..2020).contains(&building.year_built()));
            }
        }
    }
}

#[test]
fn undecodable_menu_line_is_rejected() {
    let noisy = play_bytes(8, b"\xff\xfe\n1\nDowntown\nno\n");
    let clean = play(8, "1\nDowntown\nno\n");

    assert_eq!(noisy.outcome, clean.outcome);
    assert_eq!(noisy.output.matches("0. Exit").count(), 2);
}

#[test]
fn undecodable_description_is_kept_lossily() {
    let transcript = play_bytes(9, b"1\nCaf\xe9 district\nno\n");
    let project = project_of(&transcript);

    assert_eq!(project.description(), "Caf\u{FFFD} district");
    assert!(final_render(&transcript.output).starts_with("Project Description: Caf\u{FFFD} district\n"));
}
