//! Behaviour every `UserRepository` must show, shared by the in-memory and
//! Postgres test suites.

use time::macros::date;
use uuid::Uuid;

use crate::users::repo::UserRepository;
use crate::users::repo_types::User;

/// User with an email no other test will pick.
pub fn sample_user(tag: &str) -> User {
    User::new(
        "Test",
        tag,
        date!(1985 - 06 - 15),
        "555-0199",
        "Tester",
        format!("{tag}-{}@example.com", Uuid::new_v4()),
        "hashed:test",
    )
}

pub async fn save_without_id_assigns_one<R: UserRepository>(repo: &R) {
    let user = sample_user("insert");
    let saved = repo.save(&user).await.expect("save");

    let id = saved.id.expect("id assigned on insert");
    assert_eq!(saved, user.clone().with_id(id));

    let found = repo.find_by_id(id).await.expect("find_by_id");
    assert_eq!(found, Some(user.with_id(id)));
}

pub async fn save_with_id_overwrites_row<R: UserRepository>(repo: &R) {
    let saved = repo.save(&sample_user("upsert")).await.expect("save");
    let id = saved.id.expect("id");

    let updated = User {
        first_name: "Changed".into(),
        date_of_birth: date!(1970 - 12 - 31),
        phone: "555-0200".into(),
        occupation: "Manager".into(),
        password: "hashed:new".into(),
        ..saved
    };
    let stored = repo.save(&updated).await.expect("upsert");
    assert_eq!(stored, updated);

    let found = repo.find_by_id(id).await.expect("find_by_id");
    assert_eq!(found, Some(updated));

    let copies = repo
        .find_all()
        .await
        .expect("find_all")
        .into_iter()
        .filter(|u| u.id == Some(id))
        .count();
    assert_eq!(copies, 1);
}

pub async fn save_with_fresh_id_inserts<R: UserRepository>(repo: &R) {
    let id = Uuid::new_v4();
    let user = sample_user("fresh").with_id(id);

    let saved = repo.save(&user).await.expect("save");
    assert_eq!(saved, user);
    assert_eq!(repo.find_by_id(id).await.expect("find_by_id"), Some(user));
}

pub async fn missing_lookups_are_none<R: UserRepository>(repo: &R) {
    assert_eq!(repo.find_by_id(Uuid::new_v4()).await.expect("find_by_id"), None);
    let email = format!("nobody-{}@example.com", Uuid::new_v4());
    assert_eq!(repo.find_by_email(&email).await.expect("find_by_email"), None);
}

pub async fn find_all_contains_saved<R: UserRepository>(repo: &R) -> Vec<User> {
    let mut saved = Vec::new();
    for tag in ["all-a", "all-b", "all-c"] {
        saved.push(repo.save(&sample_user(tag)).await.expect("save"));
    }

    let all = repo.find_all().await.expect("find_all");
    for user in &saved {
        assert!(all.contains(user), "missing {:?}", user.id);
    }
    saved
}

pub async fn delete_removes_and_ignores_unknown<R: UserRepository>(repo: &R) {
    let saved = repo.save(&sample_user("delete")).await.expect("save");
    let id = saved.id.expect("id");

    repo.delete_by_id(id).await.expect("delete");
    assert_eq!(repo.find_by_id(id).await.expect("find_by_id"), None);
    assert_eq!(repo.find_by_email(&saved.email).await.expect("find_by_email"), None);

    repo.delete_by_id(id).await.expect("second delete is a no-op");
    repo.delete_by_id(Uuid::new_v4()).await.expect("unknown id is a no-op");
}

pub async fn ana_lee_lifecycle<R: UserRepository>(repo: &R, email: &str) {
    let ana = User::new(
        "Ana",
        "Lee",
        date!(1990 - 01 - 01),
        "555-0100",
        "Engineer",
        email,
        "hashed:abc",
    );

    let saved = repo.save(&ana).await.expect("save");
    let id = saved.id.expect("id assigned");

    let by_email = repo.find_by_email(email).await.expect("find_by_email");
    assert_eq!(by_email, Some(ana.clone().with_id(id)));

    let promoted = User {
        occupation: "Manager".into(),
        ..saved
    };
    repo.save(&promoted).await.expect("upsert");
    let found = repo.find_by_id(id).await.expect("find_by_id").expect("present");
    assert_eq!(found.occupation, "Manager");

    repo.delete_by_id(id).await.expect("delete");
    assert_eq!(repo.find_by_id(id).await.expect("find_by_id"), None);
}
