use collection_actor::{ActorEntity, FrameworkError, ObjectId, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Account {
    id: ObjectId,
    email: String,
    name: String,
    locked: bool,
}

#[derive(Debug)]
struct AccountCreate {
    email: String,
    name: String,
}

#[derive(Debug)]
enum AccountUpdate {
    Rename(String),
    Lock,
    /// Always rejected; used to check that failed updates leave no trace.
    Corrupt(String),
}

#[derive(Debug)]
struct ByEmail(String);

#[derive(Debug, thiserror::Error)]
#[error("Account error: {0}")]
struct AccountError(String);

impl ActorEntity for Account {
    type Id = ObjectId;
    type Create = AccountCreate;
    type Update = AccountUpdate;
    type Filter = ByEmail;
    type Error = AccountError;

    fn from_create_params(id: ObjectId, params: AccountCreate) -> Result<Self, Self::Error> {
        if params.email.is_empty() {
            return Err(AccountError("email required".into()));
        }
        Ok(Self {
            id,
            email: params.email,
            name: params.name,
            locked: false,
        })
    }

    fn matches(&self, filter: &ByEmail) -> bool {
        self.email == filter.0
    }

    fn on_update(&mut self, update: AccountUpdate) -> Result<(), Self::Error> {
        match update {
            AccountUpdate::Rename(name) => self.name = name,
            AccountUpdate::Lock => self.locked = true,
            AccountUpdate::Corrupt(name) => {
                self.name = name;
                return Err(AccountError("rejected".into()));
            }
        }
        Ok(())
    }

    fn from_upsert(id: ObjectId, update: AccountUpdate) -> Option<Self> {
        match update {
            AccountUpdate::Rename(name) => Some(Self {
                id,
                email: String::new(),
                name,
                locked: false,
            }),
            _ => None,
        }
    }
}

fn create(email: &str, name: &str) -> AccountCreate {
    AccountCreate {
        email: email.into(),
        name: name.into(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Account>::new(10, ObjectId::new);
    let handle = tokio::spawn(actor.run());

    // 1. Create returns the stored document
    let alice = client.create(create("alice@example.com", "Alice")).await.unwrap();
    assert_eq!(alice.name, "Alice");
    assert!(!alice.locked);

    // 2. Get
    let fetched = client.get(alice.id).await.unwrap().unwrap();
    assert_eq!(fetched, alice);

    // 3. Update by id, then the same update again
    let first = client.update_by_id(alice.id, AccountUpdate::Lock).await.unwrap();
    assert_eq!((first.matched_count, first.modified_count), (1, 1));
    let second = client.update_by_id(alice.id, AccountUpdate::Lock).await.unwrap();
    assert_eq!((second.matched_count, second.modified_count), (1, 0));

    // 4. Delete, then delete again
    let deleted = client.delete(alice.id).await.unwrap();
    assert_eq!(deleted.deleted_count, 1);
    let again = client.delete(alice.id).await.unwrap();
    assert_eq!(again.deleted_count, 0);
    assert!(client.get(alice.id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_find_returns_matches_in_creation_order() {
    let (actor, client) = ResourceActor::<Account>::new(10, ObjectId::new);
    tokio::spawn(actor.run());

    let a = client.create(create("a@b.com", "first")).await.unwrap();
    client.create(create("c@d.com", "other")).await.unwrap();
    let b = client.create(create("a@b.com", "second")).await.unwrap();

    let matches = client
        .find(Some(ByEmail("a@b.com".into())))
        .await
        .unwrap();
    assert_eq!(matches, vec![a, b]);

    let everything = client.find(None).await.unwrap();
    assert_eq!(everything.len(), 3);

    let none = client.find(Some(ByEmail("x@y.com".into()))).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_update_missing_is_not_an_error() {
    let (actor, client) = ResourceActor::<Account>::new(10, ObjectId::new);
    tokio::spawn(actor.run());

    let outcome = client
        .update_by_id(ObjectId::new(), AccountUpdate::Lock)
        .await
        .unwrap();
    assert_eq!(outcome.matched_count, 0);
    assert_eq!(outcome.modified_count, 0);
    assert_eq!(outcome.upserted_id, None);
}

#[tokio::test]
async fn test_filter_update_touches_first_match_only() {
    let (actor, client) = ResourceActor::<Account>::new(10, ObjectId::new);
    tokio::spawn(actor.run());

    let first = client.create(create("dup@b.com", "one")).await.unwrap();
    let second = client.create(create("dup@b.com", "two")).await.unwrap();

    client
        .update_one(ByEmail("dup@b.com".into()), AccountUpdate::Lock)
        .await
        .unwrap();

    assert!(client.get(first.id).await.unwrap().unwrap().locked);
    assert!(!client.get(second.id).await.unwrap().unwrap().locked);
}

#[tokio::test]
async fn test_upsert_inserts_when_nothing_matches() {
    let (actor, client) = ResourceActor::<Account>::new(10, ObjectId::new);
    tokio::spawn(actor.run());

    let outcome = client
        .upsert_one(ByEmail("new@b.com".into()), AccountUpdate::Rename("Neo".into()))
        .await
        .unwrap();
    assert_eq!(outcome.matched_count, 0);
    assert_eq!(outcome.upserted_count, 1);
    let id = outcome.upserted_id.expect("upserted id");
    assert_eq!(client.get(id).await.unwrap().unwrap().name, "Neo");

    let unsupported = client
        .upsert_one(ByEmail("new@b.com".into()), AccountUpdate::Lock)
        .await;
    assert!(matches!(unsupported, Err(FrameworkError::UpsertUnsupported)));
}

#[tokio::test]
async fn test_failed_update_restores_document() {
    let (actor, client) = ResourceActor::<Account>::new(10, ObjectId::new);
    tokio::spawn(actor.run());

    let acct = client.create(create("e@f.com", "Original")).await.unwrap();
    let result = client
        .update_by_id(acct.id, AccountUpdate::Corrupt("Broken".into()))
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    let stored = client.get(acct.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Original");
}

#[tokio::test]
async fn test_rejected_create_is_not_stored() {
    let (actor, client) = ResourceActor::<Account>::new(10, ObjectId::new);
    tokio::spawn(actor.run());

    let result = client.create(create("", "Nobody")).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert!(client.find(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_closed_actor_reports_unavailable() {
    let (actor, client) = ResourceActor::<Account>::new(10, ObjectId::new);
    drop(actor);

    let err = client.get(ObjectId::new()).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
    assert!(err.is_unavailable());
}
