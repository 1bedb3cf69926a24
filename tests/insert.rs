use routrie::{InsertError, Tree};

struct InsertTest(Vec<(&'static str, Result<(), InsertError>)>);

impl InsertTest {
    fn run(self) {
        let mut tree = Tree::new();
        for (pattern, expected) in self.0 {
            let got = tree.add(pattern, pattern.to_owned());
            assert_eq!(got, expected, "unexpected result for '{pattern}'");
        }
    }
}

fn duplicate(pattern: &str) -> Result<(), InsertError> {
    Err(InsertError::Duplicate {
        pattern: pattern.to_owned(),
    })
}

fn shared(existing: &str, tried: &str) -> Result<(), InsertError> {
    Err(InsertError::SharedKey {
        existing: existing.to_owned(),
        tried: tried.to_owned(),
    })
}

#[test]
fn duplicates() {
    InsertTest(vec![
        ("/", Ok(())),
        ("/", duplicate("/")),
        ("/doc", Ok(())),
        ("/doc", duplicate("/doc")),
        ("/src/*filepath", Ok(())),
        ("/src/*filepath", duplicate("/src/*filepath")),
        ("/search/:query", Ok(())),
        ("/search/:query", duplicate("/search/:query")),
    ])
    .run()
}

#[test]
fn shared_key_at_the_root() {
    InsertTest(vec![
        ("/:a", Ok(())),
        ("/:b", shared(":a", ":b")),
        ("/:a/x", Ok(())),
    ])
    .run()
}

#[test]
fn shared_key_between_siblings() {
    InsertTest(vec![
        ("/", Ok(())),
        ("/:post", Ok(())),
        ("/:category/:post", shared(":post", ":category/:post")),
        ("/about", Ok(())),
        ("/:post/comments", Ok(())),
    ])
    .run()
}

#[test]
fn shared_key_on_name_extension() {
    InsertTest(vec![
        ("/users/:id", Ok(())),
        ("/users/:idx/edit", shared(":id", ":idx/edit")),
        ("/users/:id/edit", Ok(())),
    ])
    .run()
}

#[test]
fn literal_and_parameter_siblings() {
    InsertTest(vec![
        ("/users/:name", Ok(())),
        ("/users/admin", Ok(())),
        ("/users/:other", shared(":name", ":other")),
        ("/users/:name/posts", Ok(())),
    ])
    .run()
}

#[test]
fn catchall_patterns() {
    InsertTest(vec![
        ("/", Ok(())),
        ("/*filepath", Ok(())),
        ("/about", Ok(())),
        ("/about/*rest", Ok(())),
    ])
    .run()
}

#[test]
fn empty_patterns_rejected() {
    InsertTest(vec![
        ("", Err(InsertError::EmptyPattern)),
        ("/", Ok(())),
        ("", Err(InsertError::EmptyPattern)),
    ])
    .run()
}

#[test]
fn rejected_insert_leaves_earlier_payloads() {
    let mut tree = Tree::new();
    tree.add("/x", 1).unwrap();
    assert!(tree.add("/x", 2).is_err());
    assert_eq!(tree.find("/x").payload(), Some(&1));
}

#[test]
fn errors_describe_themselves() {
    let mut tree = Tree::new();
    tree.add("/:post", ()).unwrap();

    let err = tree.add("/:post", ()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "a payload is already registered for pattern '/:post'"
    );

    let err = tree.add("/:category", ()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "tried to place ':category' at the same level as existing parameter ':post'"
    );

    let err = tree.add("", ()).unwrap_err();
    assert_eq!(err.to_string(), "patterns must not be empty");
}
