use projboard_core::{
    install_standard_markup, BoardLayout, ComponentError, Document, Notifier, ProjectInput,
    ProjectList, ProjectStatus, ProjectStore, INVALID_INPUT_MESSAGE,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

struct Board {
    document: Document,
    store: Rc<ProjectStore>,
    notifier: Rc<RecordingNotifier>,
    form: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

fn board() -> Board {
    let layout = BoardLayout::default();
    let mut document = Document::new();
    install_standard_markup(&mut document, &layout);

    let store = ProjectStore::new();
    let notifier = Rc::new(RecordingNotifier::default());
    let form = ProjectInput::new(store.clone(), notifier.clone(), &document, &layout)
        .expect("form should mount");
    let active = ProjectList::new(ProjectStatus::Active, store.clone(), &document, &layout)
        .expect("active list should mount");
    let finished = ProjectList::new(ProjectStatus::Finished, store.clone(), &document, &layout)
        .expect("finished list should mount");

    Board {
        document,
        store,
        notifier,
        form,
        active,
        finished,
    }
}

#[test]
fn views_mount_in_expected_host_order() {
    let board = board();
    let host = board.document.get_element_by_id("app").expect("host");
    let ids: Vec<Option<String>> = host.children().iter().map(|child| child.id()).collect();
    assert_eq!(
        ids,
        vec![
            Some("user-input".to_string()),
            Some("active-projects".to_string()),
            Some("finished-projects".to_string()),
        ]
    );
}

#[test]
fn valid_submission_adds_project_and_renders_active_row() {
    let board = board();
    board
        .form
        .fill("Build X", "a sufficiently long description", "3");

    let event = board.form.submit();

    assert!(event.default_prevented());
    let projects = board.store.projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Build X");
    assert_eq!(projects[0].description, "a sufficiently long description");
    assert_eq!(projects[0].people, 3);
    assert_eq!(projects[0].status, ProjectStatus::Active);

    assert_eq!(board.active.rendered_titles(), vec!["Build X"]);
    assert!(board.finished.rendered_titles().is_empty());

    assert_eq!(board.form.title_input().value(), "");
    assert_eq!(board.form.description_input().value(), "");
    assert_eq!(board.form.people_input().value(), "");
    assert!(board.notifier.messages.borrow().is_empty());
}

#[test]
fn invalid_submission_alerts_and_leaves_state_untouched() {
    let board = board();
    board.form.fill("", "short", "10");

    let event = board.form.submit();

    assert!(event.default_prevented());
    assert!(board.store.is_empty());
    assert_eq!(
        *board.notifier.messages.borrow(),
        vec![INVALID_INPUT_MESSAGE.to_string()]
    );
    assert_eq!(board.form.title_input().value(), "");
    assert_eq!(board.form.description_input().value(), "short");
    assert_eq!(board.form.people_input().value(), "10");
    assert!(board.active.rendered_titles().is_empty());
}

#[test]
fn each_invalid_field_blocks_submission() {
    let board = board();
    for (title, description, people) in [
        ("   ", "long enough", "2"),
        ("Title", "four", "2"),
        ("Title", "long enough", "0"),
        ("Title", "long enough", "6"),
        ("Title", "long enough", "two"),
    ] {
        board.form.fill(title, description, people);
        board.form.submit();
    }

    assert!(board.store.is_empty());
    assert_eq!(board.notifier.messages.borrow().len(), 5);
}

#[test]
fn views_never_show_projects_of_the_other_status() {
    let board = board();
    let first = board.store.add_project("alpha", "first project", 1);
    board.store.add_project("beta", "second project", 2);
    board.store.move_project(first, ProjectStatus::Finished);
    board.store.add_project("gamma", "third project", 3);

    assert_eq!(board.active.rendered_titles(), vec!["beta", "gamma"]);
    assert_eq!(board.finished.rendered_titles(), vec!["alpha"]);
    assert!(board
        .active
        .assigned_projects()
        .iter()
        .all(|project| project.status == ProjectStatus::Active));
    assert!(board
        .finished
        .assigned_projects()
        .iter()
        .all(|project| project.status == ProjectStatus::Finished));
}

#[test]
fn rerender_replaces_rows_instead_of_appending() {
    let board = board();
    board.store.add_project("one", "first project", 1);
    board.store.add_project("two", "second project", 1);

    let list = board
        .document
        .get_element_by_id("active-projects-list")
        .expect("active list surface");
    assert_eq!(list.child_count(), 2);
}

#[test]
fn missing_host_is_a_construction_error() {
    let layout = BoardLayout {
        host_id: "missing-root".to_string(),
        ..BoardLayout::default()
    };
    let mut document = Document::new();
    install_standard_markup(&mut document, &BoardLayout::default());

    let err = ProjectList::new(ProjectStatus::Active, ProjectStore::new(), &document, &layout)
        .err()
        .expect("host lookup must fail");
    assert_eq!(err, ComponentError::ContainerNotFound("missing-root".to_string()));
}

#[test]
fn missing_template_is_a_construction_error() {
    let document = Document::new();
    let err = ProjectInput::new(
        ProjectStore::new(),
        Rc::new(RecordingNotifier::default()),
        &document,
        &BoardLayout::default(),
    )
    .err()
    .expect("template lookup must fail");
    assert_eq!(err, ComponentError::TemplateNotFound("project-input".to_string()));
}
