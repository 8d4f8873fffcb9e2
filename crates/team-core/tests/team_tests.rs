//! Integration tests for team membership using stock characters

use team_core::{AddAllReport, Character, Member, Team, TeamError};

struct Fixture {
    team: Team<Character>,
    character1: Member<Character>,
    character2: Member<Character>,
    character3: Member<Character>,
}

fn fixture() -> Fixture {
    Fixture {
        team: Team::new(),
        character1: Member::new(Character::new("Character 1")),
        character2: Member::new(Character::new("Character 2")),
        character3: Member::new(Character::new("Character 3")),
    }
}

#[test]
fn test_adding_a_character() {
    let mut f = fixture();
    f.team.add(f.character1.clone()).unwrap();
    assert_eq!(f.team.to_vec(), vec![f.character1]);
}

#[test]
fn test_adding_multiple_characters_without_duplicates() {
    let mut f = fixture();
    f.team.add_all([
        f.character1.clone(),
        f.character2.clone(),
        f.character3.clone(),
    ]);
    assert_eq!(
        f.team.to_vec(),
        vec![f.character1, f.character2, f.character3]
    );
}

#[test]
fn test_adding_multiple_characters_with_duplicates() {
    let mut f = fixture();
    f.team.add(f.character1.clone()).unwrap();
    let report = f.team.add_all([
        f.character2.clone(),
        f.character1.clone(),
        f.character3.clone(),
    ]);

    assert_eq!(report, AddAllReport { added: 2, skipped: 1 });
    assert_eq!(
        f.team.to_vec(),
        vec![f.character1, f.character2, f.character3]
    );
}

#[test]
fn test_snapshot_contains_all_members() {
    let mut f = fixture();
    f.team.add_all([
        f.character1.clone(),
        f.character2.clone(),
        f.character3.clone(),
    ]);

    let members = f.team.to_vec();
    assert!(members.contains(&f.character1));
    assert!(members.contains(&f.character2));
    assert!(members.contains(&f.character3));
}

#[test]
fn test_empty_team_snapshot() {
    let f = fixture();
    assert!(f.team.to_vec().is_empty());
}

#[test]
fn test_adding_a_duplicate_character_fails() {
    let mut f = fixture();
    f.team.add(f.character1.clone()).unwrap();

    let err = f.team.add(f.character1.clone()).unwrap_err();
    assert_eq!(err, TeamError::DuplicateMember { position: 0 });
    assert_eq!(err.to_string(), "member already exists in the team at position 0");
    assert_eq!(f.team.to_vec(), vec![f.character1]);
}

#[test]
fn test_add_all_with_known_members_is_idempotent() {
    let mut f = fixture();
    f.team.add_all([f.character1.clone(), f.character2.clone()]);
    let before = f.team.to_vec();

    let report = f.team.add_all([f.character2.clone(), f.character1.clone()]);
    assert_eq!(report, AddAllReport { added: 0, skipped: 2 });
    assert_eq!(f.team.to_vec(), before);
}

#[test]
fn test_same_name_different_character_is_accepted() {
    let mut f = fixture();
    let twin = Member::new(Character::new("Character 1"));

    f.team.add(f.character1.clone()).unwrap();
    f.team.add(twin.clone()).unwrap();

    let members = f.team.to_vec();
    assert_eq!(members, vec![f.character1, twin]);
    assert_eq!(members[0].name, members[1].name);
}

#[test]
fn test_team_serializes_as_array_in_insertion_order() {
    let mut f = fixture();
    f.team.add(f.character2.clone()).unwrap();
    f.team.add_all([f.character1.clone(), f.character2.clone()]);

    let json = serde_json::to_value(&f.team).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"name": "Character 2"}, {"name": "Character 1"}])
    );
}

#[test]
fn test_team_can_be_shared_behind_a_mutex() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Team<Character>>();
    assert_send_sync::<Member<Character>>();
}
